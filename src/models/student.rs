//! Student records

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use validator::Validate;

use super::entity::{optional_email, Entity, EntityId};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[validate(length(min = 1, message = "Full name is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub full_name: String,
    #[validate(length(min = 1, message = "Roll number is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub roll_no: String,
    #[validate(range(min = 1, message = "Branch is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub branch_id: i64,
    #[validate(custom(function = "optional_email"))]
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Entity for Student {
    const RESOURCE: &'static str = "Student";
    const LABEL: &'static str = "Student";

    fn id(&self) -> EntityId {
        self.id.into()
    }
}

//! House owners

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use validator::Validate;

use super::entity::{optional_email, Entity, EntityId};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Owner {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[validate(length(min = 1, message = "Owner name is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub phone: String,
    #[validate(custom(function = "optional_email"))]
    pub email: Option<String>,
}

impl Entity for Owner {
    const RESOURCE: &'static str = "Owner";
    const LABEL: &'static str = "Owner";

    fn id(&self) -> EntityId {
        self.id.into()
    }
}

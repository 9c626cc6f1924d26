//! Library branches

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use validator::Validate;

use super::entity::{Entity, EntityId};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Branch {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[validate(length(min = 1, message = "Branch name is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    pub code: Option<String>,
}

impl Entity for Branch {
    const RESOURCE: &'static str = "Branch";
    const LABEL: &'static str = "Branch";

    fn id(&self) -> EntityId {
        self.id.into()
    }
}

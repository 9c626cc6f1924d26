//! Housing societies

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use validator::Validate;

use super::entity::{Entity, EntityId};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Society {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[validate(length(min = 1, message = "Society name is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[validate(length(min = 1, message = "Address is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub address: String,
    pub city: Option<String>,
}

impl Entity for Society {
    const RESOURCE: &'static str = "Society";
    const LABEL: &'static str = "Society";

    fn id(&self) -> EntityId {
        self.id.into()
    }
}

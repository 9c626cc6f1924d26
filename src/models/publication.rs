//! Publishers

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use validator::Validate;

use super::entity::{Entity, EntityId};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[validate(length(min = 1, message = "Publication name is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    pub address: Option<String>,
}

impl Entity for Publication {
    const RESOURCE: &'static str = "Publication";
    const LABEL: &'static str = "Publication";

    fn id(&self) -> EntityId {
        self.id.into()
    }
}

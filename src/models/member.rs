//! Society members. The members API keys records by string id.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use validator::Validate;

use super::{
    dates::normalize_optional_date,
    entity::{Entity, EntityId},
};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[validate(length(min = 1, message = "Member name is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[validate(range(min = 1, message = "House is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub house_id: i64,
    pub role: Option<String>,
    pub joined_on: Option<String>,
}

impl Entity for Member {
    const RESOURCE: &'static str = "Member";
    const LABEL: &'static str = "Member";

    fn id(&self) -> EntityId {
        self.id.clone().into()
    }

    fn normalize_dates(&mut self) {
        normalize_optional_date(&mut self.joined_on);
    }
}

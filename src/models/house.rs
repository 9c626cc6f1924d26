//! Houses in a housing society

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use validator::Validate;

use super::entity::{Entity, EntityId};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct House {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[validate(length(min = 1, message = "House number is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub house_no: String,
    #[validate(range(min = 1, message = "Society is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub society_id: i64,
    pub owner_id: Option<i64>,
    /// Floor area in square feet
    pub area: Option<f64>,
    pub rent: Option<f64>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub for_sale: bool,
}

impl Entity for House {
    const RESOURCE: &'static str = "House";
    const LABEL: &'static str = "House";

    fn id(&self) -> EntityId {
        self.id.into()
    }
}

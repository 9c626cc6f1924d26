//! Fines charged to students

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use validator::Validate;

use super::{
    dates::normalize_date,
    entity::{Entity, EntityId},
    student::Student,
};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Penalty {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[validate(range(min = 1, message = "Student is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub student_id: i64,
    #[validate(range(min = 0.01, message = "Amount is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub amount: f64,
    #[validate(length(min = 1, message = "Reason is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub reason: String,
    /// Date the penalty was charged, `YYYY-MM-DD`
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub date: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub paid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
}

impl Entity for Penalty {
    const RESOURCE: &'static str = "Penalty";
    const LABEL: &'static str = "Penalty";

    fn id(&self) -> EntityId {
        self.id.into()
    }

    fn normalize_dates(&mut self) {
        self.date = normalize_date(&self.date);
    }
}

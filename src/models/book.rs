//! Book catalog records and book condition reports

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use validator::Validate;

use super::entity::{Entity, EntityId};

/// Book in the library catalog
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[validate(length(min = 1, message = "Title is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author: String,
    #[validate(length(min = 1, message = "ISBN is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub isbn: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub publication_id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub branch_id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub quantity: i32,
}

impl Entity for Book {
    const RESOURCE: &'static str = "Book";
    const LABEL: &'static str = "Book";

    fn id(&self) -> EntityId {
        self.id.into()
    }
}

/// Damage or loss report filed against a book
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BookReport {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[validate(range(min = 1, message = "Book is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub book_id: i64,
    #[validate(length(min = 1, message = "Remarks are required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub remarks: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
}

impl Entity for BookReport {
    const RESOURCE: &'static str = "BookReport";
    const LABEL: &'static str = "Report";

    fn id(&self) -> EntityId {
        self.id.into()
    }
}

//! Book issue and return records

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use validator::Validate;

use super::{
    book::Book,
    dates::{normalize_date, normalize_optional_date},
    entity::{Entity, EntityId},
    student::Student,
};

/// A book lent to a student. The API resolves `book` and `student`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueBook {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[validate(range(min = 1, message = "Book is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub book_id: i64,
    #[validate(range(min = 1, message = "Student is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub student_id: i64,
    #[validate(length(min = 1, message = "Issue date is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub issue_date: String,
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
}

impl Entity for IssueBook {
    const RESOURCE: &'static str = "IssueBook";
    const LABEL: &'static str = "Issued book";

    fn id(&self) -> EntityId {
        self.id.into()
    }

    fn normalize_dates(&mut self) {
        self.issue_date = normalize_date(&self.issue_date);
        normalize_optional_date(&mut self.due_date);
    }
}

/// Return of a previously issued book
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ReturnBook {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[validate(range(min = 1, message = "Issued book is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub issue_book_id: i64,
    #[validate(length(min = 1, message = "Return date is required"))]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub return_date: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub fine: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_book: Option<IssueBook>,
}

impl Entity for ReturnBook {
    const RESOURCE: &'static str = "ReturnBook";
    const LABEL: &'static str = "Returned book";

    fn id(&self) -> EntityId {
        self.id.into()
    }

    fn normalize_dates(&mut self) {
        self.return_date = normalize_date(&self.return_date);
        if let Some(issue) = self.issue_book.as_mut() {
            issue.normalize_dates();
        }
    }
}

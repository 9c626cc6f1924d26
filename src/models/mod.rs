//! Data models for Campusdesk

pub mod book;
pub mod branch;
pub mod circulation;
pub mod dates;
pub mod entity;
pub mod fixtures;
pub mod house;
pub mod member;
pub mod owner;
pub mod penalty;
pub mod publication;
pub mod society;
pub mod student;

// Re-export commonly used types
pub use book::{Book, BookReport};
pub use branch::Branch;
pub use circulation::{IssueBook, ReturnBook};
pub use entity::{Entity, EntityId};
pub use house::House;
pub use member::Member;
pub use owner::Owner;
pub use penalty::Penalty;
pub use publication::Publication;
pub use society::Society;
pub use student::Student;

#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;
pub mod tutorial;

pub use repository::{InMemoryRepository, KeyValueRepository, Storage, StorageError};
pub use tutorial::TutorialProgressStore;

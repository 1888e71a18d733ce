//! Database layer for TakeNote

mod connection;
mod migrations;
mod repository;
mod settings_repository;

pub use connection::Database;
pub use repository::{
    CategoryRepository, LibSqlCategoryRepository, LibSqlNoteRepository, NoteRepository,
};
pub use settings_repository::{LibSqlSettingsRepository, SettingsRepository};

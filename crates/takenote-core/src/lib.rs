//! takenote-core - Core library for TakeNote
//!
//! This crate contains the models, database layer, and the framework-free
//! logic of the app shell (title derivation, activation and periodic sync)
//! used by the desktop client.

pub mod activation;
pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod models;
pub mod services;
pub mod shell;
pub mod state;
pub mod store;
pub mod util;

pub use error::{Error, Result};
pub use models::{Category, CategoryId, Folder, Note, NoteId, SyncPayload};

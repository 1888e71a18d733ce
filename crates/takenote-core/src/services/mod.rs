//! Services shared by TakeNote clients

mod database;

pub use database::{
    DatabaseService, StoreEvent, SyncReport, SCRATCHPAD_NOTE, WELCOME_NOTE,
};

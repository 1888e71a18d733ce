//! Application services
//!
//! The store coroutine and the dispatcher the shell talks to it through.

mod store;

pub use store::{run_store, CoroutineDispatch};

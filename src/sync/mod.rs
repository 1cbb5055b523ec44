//! Record synchronization layer
//!
//! Pure conversion and merge logic plus the load/submit flows that tie
//! the form to the record store.

pub mod dates;
pub mod health;
pub mod merge;
pub mod record_sync;

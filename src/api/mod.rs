//! Record store client module for REST communication

mod client;
mod traits;

pub use client::{ApiError, RecordClient};
pub use traits::RecordStore;

#[cfg(test)]
pub use traits::MockRecordStore;

//! checkin-store: append-only check-in history keyed by user and timestamp.

pub mod store;
pub mod types;

pub use store::{JsonlStore, MemoryStore, RecordStore};
pub use types::{CheckinRecord, FacialRecord, Record};

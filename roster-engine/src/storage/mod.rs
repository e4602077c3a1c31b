//! In-memory storage: the student record type and the ordered store.

pub mod record;
pub mod store;

pub use record::{StudentRecord, MAX_NAME_LEN};
pub use store::RecordStore;

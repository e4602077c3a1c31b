//! Roster Engine - flat-file student record manager
//!
//! This crate provides the in-memory record store and the text-file
//! persistence adapter behind the roster CLI.

pub mod backing;
pub mod error;
pub mod roster;
pub mod storage;

pub use error::{RosterError, RosterResult};
pub use roster::Roster;
pub use storage::record::{StudentRecord, MAX_NAME_LEN};
pub use storage::store::RecordStore;

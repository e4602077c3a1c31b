//! Student record type
//!
//! Records carry a fixed-width name field (49 characters, matching the
//! original card layout), an age, and an enrollment number. Enrollment
//! numbers are not unique; the store keeps whatever it is given.

use crate::error::{RosterError, RosterResult};

/// Maximum name length in characters
pub const MAX_NAME_LEN: usize = 49;

/// A single student record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    /// Student name, at most [`MAX_NAME_LEN`] characters, no newlines
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Enrollment number (not guaranteed unique)
    pub enrollment: u32,
}

impl StudentRecord {
    /// Create a validated record.
    ///
    /// Names are rejected, not truncated, when they exceed the field
    /// limit. Embedded newlines would corrupt the line-oriented backing
    /// file and are rejected as well.
    pub fn new(name: impl Into<String>, age: u32, enrollment: u32) -> RosterResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(RosterError::InvalidName("name is empty".to_string()));
        }
        if name.contains('\n') || name.contains('\r') {
            return Err(RosterError::InvalidName(
                "name contains a line break".to_string(),
            ));
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(RosterError::NameTooLong {
                len,
                limit: MAX_NAME_LEN,
            });
        }
        Ok(StudentRecord { name, age, enrollment })
    }
}

impl std::fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (age {}, enrollment {})",
            self.name, self.age, self.enrollment
        )
    }
}

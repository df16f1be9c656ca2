//! The patient value held by the queue.

use intake_types::{Gender, MrNumber};
use serde::{Deserialize, Serialize};

/// A patient waiting at the front desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Queue key; unique among waiting patients.
    pub mr_number: MrNumber,
    pub gender: Gender,
}

impl Patient {
    pub fn new(mr_number: MrNumber, gender: Gender) -> Self {
        Self { mr_number, gender }
    }
}

impl std::fmt::Display for Patient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.mr_number, self.gender)
    }
}

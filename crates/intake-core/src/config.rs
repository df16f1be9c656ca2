//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the queue. The
//! parsers here take the raw environment value as an argument instead of reading the
//! environment themselves, so callers (and tests) decide where values come from.

use crate::queue::Discipline;
use crate::{QueueError, QueueResult};

/// What to do with patients whose gender is neither `M` nor `F`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GenderPolicy {
    /// Accept them at admission; they are dropped whenever the queue is put into
    /// alternating order.
    #[default]
    Drop,
    /// Refuse them at admission so no reorder ever loses a patient.
    Reject,
}

impl std::str::FromStr for GenderPolicy {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" | "lenient" => Ok(GenderPolicy::Drop),
            "reject" | "strict" => Ok(GenderPolicy::Reject),
            other => Err(QueueError::InvalidInput(format!(
                "unknown gender policy '{other}' (expected 'drop' or 'reject')"
            ))),
        }
    }
}

/// Queue configuration resolved at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueueConfig {
    discipline: Discipline,
    gender_policy: GenderPolicy,
}

impl QueueConfig {
    pub fn new(discipline: Discipline, gender_policy: GenderPolicy) -> Self {
        Self {
            discipline,
            gender_policy,
        }
    }

    /// Discipline the queue starts in.
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn gender_policy(&self) -> GenderPolicy {
        self.gender_policy
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the starting discipline from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns FIFO.
pub fn discipline_from_env_value(value: Option<String>) -> QueueResult<Discipline> {
    let parsed = non_blank(value)
        .map(|v| v.parse::<Discipline>())
        .transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Parse the gender policy from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`GenderPolicy::Drop`].
pub fn gender_policy_from_env_value(value: Option<String>) -> QueueResult<GenderPolicy> {
    let parsed = non_blank(value)
        .map(|v| v.parse::<GenderPolicy>())
        .transpose()?;

    Ok(parsed.unwrap_or_default())
}

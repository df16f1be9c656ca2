//! Constants used throughout the intake core crate.
//!
//! Environment variable names live here so the binary and the config parsers agree on them.

/// Environment variable selecting the discipline the queue starts in.
pub const DISCIPLINE_ENV_VAR: &str = "INTAKE_DISCIPLINE";

/// Environment variable selecting how genders outside the alternation classes are handled.
pub const GENDER_POLICY_ENV_VAR: &str = "INTAKE_GENDER_POLICY";

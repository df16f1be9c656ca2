//! # Intake CLI
//!
//! Line-oriented front desk for the intake queue.
//!
//! Contains:
//! - Command parsing (`command`)
//! - Feedback rendering (`render`)
//! - The read loop that drives a borrowed `PatientQueue` (`session`)
//!
//! The `intake` binary wires these to stdin/stdout.

pub mod command;
pub mod render;
pub mod session;

pub use command::{parse_line, Command};
pub use render::SnapshotFormat;
pub use session::{Flow, Session, SessionOptions};

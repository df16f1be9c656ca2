//! # Intake Core
//!
//! Core business logic for the front-desk patient intake queue.
//!
//! This crate contains pure queue operations:
//! - Record number validation
//! - Admission and dispatch of patients
//! - Switching between FIFO and alternating-gender ordering
//!
//! **No I/O concerns**: reading commands and printing feedback belong in `intake-cli`. Every
//! operation here returns a structured outcome for the caller to render.

pub mod config;
pub mod constants;
pub mod error;
pub mod patient;
pub mod queue;
pub mod validation;

pub use config::{GenderPolicy, QueueConfig};
pub use error::{QueueError, QueueResult};
pub use intake_types::{Gender, IdentifierError, MrNumber};
pub use patient::Patient;
pub use queue::{Admission, Discipline, PatientQueue, Reorder};

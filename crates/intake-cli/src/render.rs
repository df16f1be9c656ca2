//! Human-readable feedback for queue outcomes.

use intake_core::{Admission, Discipline, Patient, PatientQueue, Reorder};

/// How the queue snapshot is written after each change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// `[MR0001 M, MR0002 F]`
    #[default]
    Text,
    /// JSON array of `{"mr_number", "gender"}` objects.
    Json,
}

pub const INVALID_INPUT: &str = "Invalid input. Please try again.";
pub const INVALID_COMMAND: &str = "Invalid command. Please try again.";
pub const EMPTY_QUEUE: &str = "No patients in the queue.";
pub const FAREWELL: &str = "Exiting the application. Goodbye!";

pub fn admission(mr_number: &str, gender: &str, outcome: &Admission) -> String {
    match outcome {
        Admission::Admitted => format!("Patient {mr_number} added to the queue."),
        Admission::Duplicate => format!("Patient {mr_number} already exists in the queue."),
        Admission::InvalidIdentifier(err) => format!("Invalid Patient MR Number: {err}"),
        Admission::UnsupportedGender => {
            format!("Patient {mr_number} not admitted: gender {gender} is not accepted.")
        }
        Admission::Dropped => format!(
            "Patient {mr_number} dropped: gender {gender} cannot join the alternating queue."
        ),
    }
}

pub fn dispatch(patient: Option<&Patient>) -> String {
    match patient {
        Some(patient) => format!("Patient {} dispatched from the queue.", patient.mr_number),
        None => EMPTY_QUEUE.to_string(),
    }
}

pub fn reorder(report: &Reorder) -> Vec<String> {
    let mut lines = vec![match report.discipline {
        Discipline::Alternating => "Queue ordering changed to Round Robin Gender.".to_string(),
        Discipline::Fifo => "Queue ordering changed to Default (FIFO).".to_string(),
    }];

    if !report.dropped.is_empty() {
        let ids: Vec<&str> = report
            .dropped
            .iter()
            .map(|p| p.mr_number.as_str())
            .collect();
        lines.push(format!(
            "Dropped {} patient(s) without an M/F gender: {}",
            ids.len(),
            ids.join(", ")
        ));
    }

    lines
}

/// Renders the whole queue in dispatch order.
///
/// # Errors
///
/// Only the JSON format can fail, if serialization fails.
pub fn snapshot(queue: &PatientQueue, format: SnapshotFormat) -> serde_json::Result<String> {
    match format {
        SnapshotFormat::Text => {
            let entries: Vec<String> = queue.patients().map(Patient::to_string).collect();
            Ok(format!("[{}]", entries.join(", ")))
        }
        SnapshotFormat::Json => {
            let patients: Vec<&Patient> = queue.patients().collect();
            serde_json::to_string(&patients)
        }
    }
}

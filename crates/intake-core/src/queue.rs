//! The front-desk patient queue and its ordering disciplines.
//!
//! The queue keeps patients in the order they will be dispatched. Under
//! [`Discipline::Fifo`] that is arrival order. Under [`Discipline::Alternating`] male and
//! female patients are interleaved, each class keeping its own arrival order. The order is
//! rebuilt eagerly whenever it could change, so [`PatientQueue::patients`] always shows the
//! real dispatch order.

use std::collections::{HashSet, VecDeque};

use intake_types::{Gender, IdentifierError, MrNumber};

use crate::config::{GenderPolicy, QueueConfig};
use crate::patient::Patient;
use crate::validation::validate_mr_number;
use crate::QueueError;

/// Ordering policy applied to waiting patients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Discipline {
    /// First admitted, first dispatched.
    #[default]
    Fifo,
    /// Male and female patients take turns, male first.
    Alternating,
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discipline::Fifo => f.write_str("fifo"),
            Discipline::Alternating => f.write_str("alternating"),
        }
    }
}

impl std::str::FromStr for Discipline {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" | "default" => Ok(Discipline::Fifo),
            "alternating" | "roundrobin" | "round-robin" => Ok(Discipline::Alternating),
            other => Err(QueueError::InvalidInput(format!(
                "unknown discipline '{other}' (expected 'fifo' or 'alternating')"
            ))),
        }
    }
}

/// Result of an admission attempt. Every variant other than `Admitted` leaves the queue
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    /// A patient with the same record number is already waiting.
    Duplicate,
    InvalidIdentifier(IdentifierError),
    /// The gender is outside `M`/`F` and the queue runs with [`GenderPolicy::Reject`].
    UnsupportedGender,
    /// The gender is outside `M`/`F` and the queue is in alternating order, so the patient
    /// has no place in the line.
    Dropped,
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted)
    }
}

/// Report returned by [`PatientQueue::set_discipline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reorder {
    pub discipline: Discipline,
    /// Number of patients waiting after the reorder.
    pub len: usize,
    /// Patients removed because they belong to neither alternation class.
    pub dropped: Vec<Patient>,
}

/// Patient queue owned by a single front desk.
///
/// All mutation goes through `&mut self`, so a reader can never observe a half-finished
/// reorder.
#[derive(Debug, Default)]
pub struct PatientQueue {
    patients: VecDeque<Patient>,
    waiting: HashSet<MrNumber>,
    discipline: Discipline,
    gender_policy: GenderPolicy,
}

impl PatientQueue {
    /// An empty FIFO queue with the lenient gender policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: &QueueConfig) -> Self {
        Self {
            discipline: cfg.discipline(),
            gender_policy: cfg.gender_policy(),
            ..Self::default()
        }
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn gender_policy(&self) -> GenderPolicy {
        self.gender_policy
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Whether a patient with this record number is waiting.
    pub fn contains(&self, mr_number: &str) -> bool {
        self.waiting.contains(mr_number)
    }

    /// Patients in dispatch order, front first.
    pub fn patients(&self) -> impl ExactSizeIterator<Item = &Patient> + '_ {
        self.patients.iter()
    }

    /// The patient who would be dispatched next.
    pub fn front(&self) -> Option<&Patient> {
        self.patients.front()
    }

    /// Admits a patient from raw desk input.
    ///
    /// The record number is validated first; an invalid one yields
    /// [`Admission::InvalidIdentifier`] and nothing else is checked.
    pub fn admit(&mut self, mr_number: &str, gender: &str) -> Admission {
        match validate_mr_number(mr_number) {
            Ok(mr_number) => self.enqueue(Patient::new(mr_number, Gender::from_label(gender))),
            Err(err) => Admission::InvalidIdentifier(err),
        }
    }

    /// Adds an already validated patient to the back of the line.
    ///
    /// Under FIFO the patient is appended. Under alternating order the patient joins the
    /// back of their own gender class and the line is re-interleaved, continuing the
    /// alternation from whoever is at the front now.
    pub fn enqueue(&mut self, patient: Patient) -> Admission {
        if self.waiting.contains(&patient.mr_number) {
            tracing::debug!(mr_number = %patient.mr_number, "duplicate admission refused");
            return Admission::Duplicate;
        }

        if !patient.gender.is_alternating() {
            if self.gender_policy == GenderPolicy::Reject {
                tracing::debug!(
                    mr_number = %patient.mr_number,
                    gender = %patient.gender,
                    "admission refused by strict gender policy"
                );
                return Admission::UnsupportedGender;
            }
            if self.discipline == Discipline::Alternating {
                tracing::warn!(
                    mr_number = %patient.mr_number,
                    gender = %patient.gender,
                    "patient cannot join alternating queue"
                );
                return Admission::Dropped;
            }
        }

        tracing::debug!(
            mr_number = %patient.mr_number,
            gender = %patient.gender,
            discipline = %self.discipline,
            "patient admitted"
        );
        self.waiting.insert(patient.mr_number.clone());

        match self.discipline {
            Discipline::Fifo => self.patients.push_back(patient),
            Discipline::Alternating => {
                let male_first = self
                    .patients
                    .front()
                    .map_or(&patient.gender, |front| &front.gender)
                    != &Gender::Female;
                self.patients.push_back(patient);
                let (ordered, dropped) = interleave(std::mem::take(&mut self.patients), male_first);
                debug_assert!(dropped.is_empty());
                self.patients = ordered;
            }
        }

        Admission::Admitted
    }

    /// Removes and returns the patient at the front, or `None` if nobody is waiting.
    pub fn dispatch(&mut self) -> Option<Patient> {
        let patient = self.patients.pop_front()?;
        self.waiting.remove(&patient.mr_number);
        tracing::debug!(
            mr_number = %patient.mr_number,
            remaining = self.patients.len(),
            "patient dispatched"
        );
        Some(patient)
    }

    /// Switches the ordering discipline and reorders the waiting patients immediately.
    ///
    /// Switching to alternating order always restarts the alternation with a male patient.
    /// Patients whose gender is neither `M` nor `F` are removed and returned in
    /// [`Reorder::dropped`]. Switching to FIFO keeps the current order as it is; arrival
    /// order is not restored after an alternating reorder.
    pub fn set_discipline(&mut self, discipline: Discipline) -> Reorder {
        self.discipline = discipline;

        let dropped = match discipline {
            Discipline::Fifo => Vec::new(),
            Discipline::Alternating => {
                let (ordered, dropped) = interleave(std::mem::take(&mut self.patients), true);
                self.patients = ordered;
                for patient in &dropped {
                    self.waiting.remove(&patient.mr_number);
                }
                dropped
            }
        };

        if !dropped.is_empty() {
            tracing::warn!(
                dropped = dropped.len(),
                "patients without an M/F gender removed by alternating reorder"
            );
        }
        tracing::info!(%discipline, waiting = self.patients.len(), "queue discipline changed");

        Reorder {
            discipline,
            len: self.patients.len(),
            dropped,
        }
    }
}

/// Stable partition into male and female classes, merged one from each in turn.
///
/// `male_first` picks which class opens the merge. Once one class runs out the other is
/// drained in order. Patients in neither class are returned separately.
fn interleave(patients: VecDeque<Patient>, male_first: bool) -> (VecDeque<Patient>, Vec<Patient>) {
    let mut males = Vec::new();
    let mut females = Vec::new();
    let mut dropped = Vec::new();

    for patient in patients {
        match patient.gender {
            Gender::Male => males.push(patient),
            Gender::Female => females.push(patient),
            Gender::Other(_) => dropped.push(patient),
        }
    }

    let (lead, follow) = if male_first {
        (males, females)
    } else {
        (females, males)
    };

    let mut merged = VecDeque::with_capacity(lead.len() + follow.len());
    let mut lead = lead.into_iter();
    let mut follow = follow.into_iter();
    loop {
        let (a, b) = (lead.next(), follow.next());
        if a.is_none() && b.is_none() {
            break;
        }
        merged.extend(a);
        merged.extend(b);
    }

    (merged, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(queue: &PatientQueue) -> Vec<&str> {
        queue.patients().map(|p| p.mr_number.as_str()).collect()
    }

    fn drain(queue: &mut PatientQueue) -> Vec<String> {
        std::iter::from_fn(|| queue.dispatch())
            .map(|p| p.mr_number.to_string())
            .collect()
    }

    fn queue_with(admissions: &[(&str, &str)]) -> PatientQueue {
        let mut queue = PatientQueue::new();
        for (mr, gender) in admissions {
            assert_eq!(queue.admit(mr, gender), Admission::Admitted, "admit {mr}");
        }
        queue
    }

    #[test]
    fn admit_rejects_invalid_identifier_without_mutation() {
        let mut queue = PatientQueue::new();
        assert_eq!(
            queue.admit("MR12", "M"),
            Admission::InvalidIdentifier(IdentifierError::WrongLength {
                expected: 6,
                actual: 4
            })
        );
        assert!(matches!(
            queue.admit("XX0001", "M"),
            Admission::InvalidIdentifier(IdentifierError::MissingPrefix)
        ));
        assert!(queue.is_empty());
    }

    #[test]
    fn duplicate_admission_leaves_length_unchanged() {
        let mut queue = queue_with(&[("MR0001", "M"), ("MR0002", "F")]);
        assert_eq!(queue.admit("MR0001", "F"), Admission::Duplicate);
        assert_eq!(queue.len(), 2);
        assert_eq!(order(&queue), ["MR0001", "MR0002"]);
    }

    #[test]
    fn identifier_can_return_after_dispatch() {
        let mut queue = queue_with(&[("MR0001", "M")]);
        queue.dispatch();
        assert!(!queue.contains("MR0001"));
        assert!(queue.admit("MR0001", "M").is_admitted());
    }

    #[test]
    fn dispatch_on_empty_queue_returns_none() {
        let mut queue = PatientQueue::new();
        assert_eq!(queue.dispatch(), None);
        assert!(queue.is_empty());
        assert_eq!(queue.discipline(), Discipline::Fifo);
    }

    #[test]
    fn fifo_dispatch_matches_admission_order() {
        let mut queue = queue_with(&[
            ("MR0003", "F"),
            ("MR0001", "M"),
            ("MR0002", "M"),
            ("MR0009", "X"),
            ("MR0004", "F"),
        ]);
        assert_eq!(
            drain(&mut queue),
            ["MR0003", "MR0001", "MR0002", "MR0009", "MR0004"]
        );
    }

    #[test]
    fn alternating_keeps_already_alternating_order() {
        let mut queue = queue_with(&[
            ("MR0001", "M"),
            ("MR0002", "F"),
            ("MR0003", "M"),
            ("MR0004", "F"),
        ]);
        let reorder = queue.set_discipline(Discipline::Alternating);
        assert_eq!(reorder.len, 4);
        assert!(reorder.dropped.is_empty());
        assert_eq!(drain(&mut queue), ["MR0001", "MR0002", "MR0003", "MR0004"]);
    }

    #[test]
    fn alternating_interleaves_male_first() {
        let mut queue = queue_with(&[("MR0001", "M"), ("MR0002", "M"), ("MR0011", "F")]);
        queue.set_discipline(Discipline::Alternating);
        assert_eq!(drain(&mut queue), ["MR0001", "MR0011", "MR0002"]);
    }

    #[test]
    fn alternating_starts_with_male_even_if_female_arrived_first() {
        let mut queue = queue_with(&[
            ("MR0011", "F"),
            ("MR0012", "F"),
            ("MR0013", "F"),
            ("MR0001", "M"),
        ]);
        queue.set_discipline(Discipline::Alternating);
        assert_eq!(order(&queue), ["MR0001", "MR0011", "MR0012", "MR0013"]);
    }

    #[test]
    fn alternating_is_idempotent() {
        let mut queue = queue_with(&[
            ("MR0001", "M"),
            ("MR0002", "M"),
            ("MR0003", "M"),
            ("MR0011", "F"),
            ("MR0012", "F"),
        ]);
        queue.set_discipline(Discipline::Alternating);
        let once: Vec<String> = order(&queue).into_iter().map(String::from).collect();
        queue.set_discipline(Discipline::Alternating);
        assert_eq!(order(&queue), once);
        assert_eq!(once, ["MR0001", "MR0011", "MR0002", "MR0012", "MR0003"]);
    }

    #[test]
    fn switching_back_to_fifo_keeps_interleaved_order() {
        let mut queue = queue_with(&[("MR0001", "M"), ("MR0002", "M"), ("MR0011", "F")]);
        queue.set_discipline(Discipline::Alternating);
        let reorder = queue.set_discipline(Discipline::Fifo);
        assert_eq!(reorder.discipline, Discipline::Fifo);
        assert_eq!(queue.discipline(), Discipline::Fifo);

        assert!(queue.admit("MR0003", "M").is_admitted());
        assert_eq!(drain(&mut queue), ["MR0001", "MR0011", "MR0002", "MR0003"]);
    }

    #[test]
    fn unknown_gender_kept_under_fifo_and_dropped_by_alternating() {
        let mut queue = queue_with(&[("MR0001", "M"), ("MR0050", "X"), ("MR0011", "F")]);
        assert_eq!(queue.len(), 3);

        let reorder = queue.set_discipline(Discipline::Alternating);
        assert_eq!(reorder.len, 2);
        assert_eq!(reorder.dropped.len(), 1);
        assert_eq!(reorder.dropped[0].mr_number.as_str(), "MR0050");
        assert!(!queue.contains("MR0050"));
        assert_eq!(order(&queue), ["MR0001", "MR0011"]);

        // the dropped identifier is free again
        queue.set_discipline(Discipline::Fifo);
        assert!(queue.admit("MR0050", "X").is_admitted());
    }

    #[test]
    fn admission_under_alternating_joins_own_class() {
        let mut queue = PatientQueue::with_config(&QueueConfig::new(
            Discipline::Alternating,
            GenderPolicy::Drop,
        ));
        for (mr, gender) in [
            ("MR0001", "M"),
            ("MR0002", "M"),
            ("MR0003", "M"),
            ("MR0011", "F"),
        ] {
            assert!(queue.admit(mr, gender).is_admitted());
        }
        assert_eq!(order(&queue), ["MR0001", "MR0011", "MR0002", "MR0003"]);

        assert!(queue.admit("MR0012", "F").is_admitted());
        assert_eq!(
            order(&queue),
            ["MR0001", "MR0011", "MR0002", "MR0012", "MR0003"]
        );
    }

    #[test]
    fn admission_under_alternating_continues_from_current_front() {
        let mut queue = queue_with(&[("MR0001", "M"), ("MR0011", "F"), ("MR0012", "F")]);
        queue.set_discipline(Discipline::Alternating);
        assert_eq!(queue.dispatch().unwrap().mr_number.as_str(), "MR0001");

        // F0011 is at the front; the new male slots in behind her
        assert!(queue.admit("MR0002", "M").is_admitted());
        assert_eq!(order(&queue), ["MR0011", "MR0002", "MR0012"]);
    }

    #[test]
    fn admission_under_alternating_drops_unknown_gender() {
        let mut queue = queue_with(&[("MR0001", "M")]);
        queue.set_discipline(Discipline::Alternating);
        assert_eq!(queue.admit("MR0050", "U"), Admission::Dropped);
        assert_eq!(queue.len(), 1);
        assert!(!queue.contains("MR0050"));
    }

    #[test]
    fn strict_policy_rejects_unknown_gender() {
        let mut queue =
            PatientQueue::with_config(&QueueConfig::new(Discipline::Fifo, GenderPolicy::Reject));
        assert_eq!(queue.admit("MR0050", "X"), Admission::UnsupportedGender);
        assert_eq!(queue.admit("MR0051", "m"), Admission::UnsupportedGender);
        assert!(queue.is_empty());
        assert!(queue.admit("MR0001", "M").is_admitted());
        assert_eq!(queue.gender_policy(), GenderPolicy::Reject);
    }

    #[test]
    fn discipline_parses_desk_keywords() {
        assert_eq!("ROUNDROBIN".parse::<Discipline>().unwrap(), Discipline::Alternating);
        assert_eq!("DEFAULT".parse::<Discipline>().unwrap(), Discipline::Fifo);
        assert!("LIFO".parse::<Discipline>().is_err());
    }
}

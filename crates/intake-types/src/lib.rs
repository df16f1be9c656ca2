/// Literal prefix every medical record number starts with.
pub const MR_PREFIX: &str = "MR";

/// Number of decimal digits following [`MR_PREFIX`].
pub const MR_DIGITS: usize = 4;

/// Total length of a well-formed medical record number.
pub const MR_LEN: usize = MR_PREFIX.len() + MR_DIGITS;

/// Reasons a candidate medical record number is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The candidate is not exactly [`MR_LEN`] bytes long
    #[error("expected {expected} characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    /// The candidate does not begin with [`MR_PREFIX`]
    #[error("must start with \"{}\"", MR_PREFIX)]
    MissingPrefix,
    /// The trailing characters are not all decimal digits
    #[error("last {} characters must be decimal digits", MR_DIGITS)]
    NonNumericSuffix,
}

/// A validated medical record number such as `MR0042`.
///
/// The only way to obtain one is through [`MrNumber::parse`], so holding an `MrNumber`
/// guarantees the value is `MR` followed by exactly four ASCII digits. Leading zeros
/// are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MrNumber(String);

impl MrNumber {
    /// Validates `input` and wraps it.
    ///
    /// The length is checked first, then the prefix, then the digits, so the returned
    /// error names the first rule the input breaks.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentifierError`] describing why the input is not a record number.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, IdentifierError> {
        let input = input.as_ref();

        if input.len() != MR_LEN {
            return Err(IdentifierError::WrongLength {
                expected: MR_LEN,
                actual: input.len(),
            });
        }

        if !input.starts_with(MR_PREFIX) {
            return Err(IdentifierError::MissingPrefix);
        }

        let digits = &input.as_bytes()[MR_PREFIX.len()..];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(IdentifierError::NonNumericSuffix);
        }

        Ok(Self(input.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for MrNumber {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MrNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for MrNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash and Eq come from the inner `String`, so lookups by `&str` agree with lookups by value.
impl std::borrow::Borrow<str> for MrNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for MrNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for MrNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MrNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Gender label recorded at the front desk.
///
/// Only `M` and `F` take part in alternating ordering. Any other label is kept verbatim
/// so it can be shown back to staff. Labels are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other(String),
}

impl Gender {
    /// Maps a desk label onto a `Gender`. Never fails.
    pub fn from_label(label: impl AsRef<str>) -> Self {
        match label.as_ref() {
            "M" => Gender::Male,
            "F" => Gender::Female,
            other => Gender::Other(other.to_owned()),
        }
    }

    /// The label as typed at the desk.
    pub fn label(&self) -> &str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Other(label) => label,
        }
    }

    /// Whether this gender belongs to one of the two alternation classes.
    pub fn is_alternating(&self) -> bool {
        matches!(self, Gender::Male | Gender::Female)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl serde::Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> serde::Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Gender::from_label(s))
    }
}

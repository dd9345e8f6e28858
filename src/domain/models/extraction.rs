use std::fmt;

/// Why an extractor fell back to its documented default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradeReason {
    /// None of the extraction strategies matched the text.
    NoMatch,
    /// The extractor could not run; the message says why.
    Failed(String),
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => f.write_str("no match"),
            Self::Failed(msg) => write!(f, "failed: {msg}"),
        }
    }
}

/// Outcome of a best-effort text extraction.
///
/// Both variants carry a usable value, so callers that only need the field
/// call [`Extraction::into_value`], while tests can tell a real match from a
/// fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction<T> {
    Found(T),
    Degraded { value: T, reason: DegradeReason },
}

impl<T> Extraction<T> {
    pub fn no_match(value: T) -> Self {
        Self::Degraded {
            value,
            reason: DegradeReason::NoMatch,
        }
    }

    pub fn failed(value: T, msg: impl Into<String>) -> Self {
        Self::Degraded {
            value,
            reason: DegradeReason::Failed(msg.into()),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn reason(&self) -> Option<&DegradeReason> {
        match self {
            Self::Found(_) => None,
            Self::Degraded { reason, .. } => Some(reason),
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Found(value) | Self::Degraded { value, .. } => value,
        }
    }
}

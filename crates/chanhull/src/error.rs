use std::fmt;

/// Error type shared by the hull algorithms and the caller-side input policies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Fewer points than the operation (or the caller's policy) needs.
    InsufficientPoints { found: usize, required: usize },
    /// A hull with fewer than three vertices where a proper polygon was required.
    DegenerateInput { distinct: usize },
}

impl HullError {
    pub(crate) fn insufficient(found: usize, required: usize) -> Self {
        Self::InsufficientPoints { found, required }
    }

    pub(crate) fn degenerate(distinct: usize) -> Self {
        Self::DegenerateInput { distinct }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints { found, required } => {
                write!(f, "need at least {required} points, got {found}")
            }
            Self::DegenerateInput { distinct } => {
                write!(f, "degenerate input: hull has only {distinct} vertices")
            }
        }
    }
}

impl std::error::Error for HullError {}

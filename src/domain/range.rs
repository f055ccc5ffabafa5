//! Version intervals with optional, independently inclusive bounds

use super::Version;
use crate::error::PolicyError;
use std::fmt;

/// One side of a [`Range`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeLimit {
    pub version: Version,
    pub inclusive: bool,
}

impl RangeLimit {
    /// Creates an inclusive limit
    pub fn inclusive(version: Version) -> Self {
        Self {
            version,
            inclusive: true,
        }
    }

    /// Creates an exclusive limit
    pub fn exclusive(version: Version) -> Self {
        Self {
            version,
            inclusive: false,
        }
    }
}

/// An interval over versions
///
/// At least one bound is always present, and when both are, the upper bound
/// lies strictly above the lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    lower: Option<RangeLimit>,
    upper: Option<RangeLimit>,
}

impl Range {
    /// Creates a new range, validating its bounds
    pub fn new(lower: Option<RangeLimit>, upper: Option<RangeLimit>) -> Result<Self, PolicyError> {
        match (lower, upper) {
            (None, None) => Err(PolicyError::invalid_range("range has neither bound")),
            (Some(l), Some(u)) if u.version <= l.version => {
                Err(PolicyError::invalid_range(format!(
                    "upper bound {} must be greater than lower bound {}",
                    u.version, l.version
                )))
            }
            _ => Ok(Self { lower, upper }),
        }
    }

    /// Two-sided range
    pub fn between(lower: RangeLimit, upper: RangeLimit) -> Result<Self, PolicyError> {
        Self::new(Some(lower), Some(upper))
    }

    pub fn lower(&self) -> Option<RangeLimit> {
        self.lower
    }

    pub fn upper(&self) -> Option<RangeLimit> {
        self.upper
    }

    /// Returns true if `version` lies within this range
    pub fn contains(&self, version: &Version) -> bool {
        if let Some(lower) = self.lower {
            let above = *version > lower.version;
            let on_edge = *version == lower.version && lower.inclusive;
            if !above && !on_edge {
                return false;
            }
        }

        if let Some(upper) = self.upper {
            let below = *version < upper.version;
            let on_edge = *version == upper.version && upper.inclusive;
            if !below && !on_edge {
                return false;
            }
        }

        true
    }
}

/// One-sided ranges, used to exercise open-ended bounds
#[cfg(test)]
impl Range {
    /// `[version, +inf)`
    pub(crate) fn at_least(version: Version) -> Self {
        Self {
            lower: Some(RangeLimit::inclusive(version)),
            upper: None,
        }
    }

    /// `(version, +inf)`
    pub(crate) fn above(version: Version) -> Self {
        Self {
            lower: Some(RangeLimit::exclusive(version)),
            upper: None,
        }
    }

    /// `(-inf, version]`
    pub(crate) fn at_most(version: Version) -> Self {
        Self {
            lower: None,
            upper: Some(RangeLimit::inclusive(version)),
        }
    }

    /// `(-inf, version)`
    pub(crate) fn below(version: Version) -> Self {
        Self {
            lower: None,
            upper: Some(RangeLimit::exclusive(version)),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Some(l) if l.inclusive => write!(f, "[{}, ", l.version)?,
            Some(l) => write!(f, "({}, ", l.version)?,
            None => write!(f, "(-inf, ")?,
        }
        match self.upper {
            Some(u) if u.inclusive => write!(f, "{}]", u.version),
            Some(u) => write!(f, "{})", u.version),
            None => write!(f, "+inf)"),
        }
    }
}

use thiserror::Error;

/// Raised when a range would end before it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the begin date must not be after the end date")]
pub struct InvalidRange;

/// A span of time with a fixed begin and an optional end.
///
/// A missing end means the range never ends. Ranges are immutable; the only
/// way to obtain one is through [`DateTimeRange::new`], which guarantees that
/// `begin <= end` whenever an end is present.
///
/// Two boundary rules matter when comparing ranges:
///
/// - Ranges with the same begin always overlap, whatever their ends.
/// - A range ending at the exact instant another one begins does not overlap
///   it. This models swapping a sensor: unmounting one device and mounting the
///   next at the same instant is a clean hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTimeRange<T> {
    begin: T,
    end: Option<T>,
}

impl<T: PartialOrd> DateTimeRange<T> {
    /// Construct a range, failing if `begin` is after `end`.
    pub fn new(begin: T, end: Option<T>) -> Result<Self, InvalidRange> {
        if let Some(end) = &end {
            if begin > *end {
                return Err(InvalidRange);
            }
        }
        Ok(Self { begin, end })
    }

    /// The first instant of the range
    pub fn begin(&self) -> &T {
        &self.begin
    }

    /// The end of the range, `None` if it is open-ended
    pub fn end(&self) -> Option<&T> {
        self.end.as_ref()
    }

    /// Check if the two ranges share at least one instant.
    pub fn overlaps_with(&self, other: &Self) -> bool {
        if self.begin == other.begin {
            return true;
        }
        if self.begin < other.begin {
            match &self.end {
                None => true,
                Some(end) => *end > other.begin,
            }
        } else {
            match &other.end {
                None => true,
                Some(end) => *end > self.begin,
            }
        }
    }

    /// Check if every instant of `other` lies within this range.
    pub fn covers(&self, other: &Self) -> bool {
        if self.begin > other.begin {
            return false;
        }
        match (&self.end, &other.end) {
            (None, _) => true,
            // a bounded range can never contain an open-ended one
            (Some(_), None) => false,
            (Some(end), Some(other_end)) => end >= other_end,
        }
    }
}

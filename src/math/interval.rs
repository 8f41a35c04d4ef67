/// A closed-open 1D interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Creates a new interval.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns `true` if the two intervals share interior points.
    ///
    /// Intervals that only touch at an endpoint do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the overlapping part of the two intervals, if any.
    #[must_use]
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Interval::new(
            self.start.max(other.start),
            self.end.min(other.end),
        ))
    }

    /// Signed distance from this interval to `other` along the axis.
    ///
    /// If `self` starts no later than `other`, this is `other.start - self.end`,
    /// otherwise `self.start - other.end`. Negative values mean overlap.
    #[must_use]
    pub fn gap_to(&self, other: &Interval) -> f64 {
        if self.start <= other.start {
            other.start - self.end
        } else {
            self.start - other.end
        }
    }

    /// Midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.start + self.end)
    }

    /// Returns `true` if `start > end`.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

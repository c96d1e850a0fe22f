//! Value bounds and step sizes for keyboard sorting.

use keygrab_core::{InteractionError, InteractionResult};
use serde::{Deserialize, Serialize};

/// Inclusive numeric bounds `[min, max]` a sorted value must stay within.
///
/// Invariant: both bounds finite and `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SortingRange {
    min: f64,
    max: f64,
}

impl SortingRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// [`InteractionError::InvalidRange`] unless `min < max` and both are
    /// finite.
    pub fn new(min: f64, max: f64) -> InteractionResult<Self> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(InteractionError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[inline]
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if `value` lies in `[min, max]`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Saturates `value` into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Shrinks `delta` so that `value + delta` cannot leave the range.
    ///
    /// A `value` already outside the range is first treated as its
    /// clamped position.
    #[must_use]
    pub fn clamp_delta(&self, value: f64, delta: f64) -> f64 {
        let origin = self.clamp(value);
        delta.clamp(self.min - origin, self.max - origin)
    }
}

impl<'de> Deserialize<'de> for SortingRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            min: f64,
            max: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.min, raw.max).map_err(serde::de::Error::custom)
    }
}

/// Step sizes used by the sorting keys.
///
/// Page and shift steps are conventionally at least the unit step; that is
/// not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepConfiguration {
    /// Arrow / WASD step.
    pub unit_step: f64,
    /// Shift + arrow / WASD step.
    pub shift_step: f64,
    /// Page up / page down step. `None` means `ceil(range length / 5)`.
    pub page_step: Option<f64>,
}

impl Default for StepConfiguration {
    fn default() -> Self {
        Self {
            unit_step: 1.0,
            shift_step: 2.0,
            page_step: None,
        }
    }
}

impl StepConfiguration {
    /// Divisor for the default page step.
    pub const DEFAULT_PAGE_DIVISIONS: f64 = 5.0;

    /// Creates validated step sizes.
    ///
    /// # Errors
    ///
    /// [`InteractionError::InvalidStep`] if any step is not finite and
    /// positive.
    pub fn new(unit_step: f64, shift_step: f64, page_step: Option<f64>) -> InteractionResult<Self> {
        let steps = Self {
            unit_step,
            shift_step,
            page_step,
        };
        steps.validate()?;
        Ok(steps)
    }

    /// Checks every step is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// [`InteractionError::InvalidStep`] naming the first bad step.
    pub fn validate(&self) -> InteractionResult<()> {
        let check = |name: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(InteractionError::InvalidStep { name, value })
            }
        };
        check("unit", self.unit_step)?;
        check("shift", self.shift_step)?;
        if let Some(page) = self.page_step {
            check("page", page)?;
        }
        Ok(())
    }

    /// The page step for `range`: the configured one, else
    /// `ceil(length / 5)`.
    #[must_use]
    pub fn page_step_for(&self, range: &SortingRange) -> f64 {
        self.page_step
            .unwrap_or_else(|| (range.length() / Self::DEFAULT_PAGE_DIVISIONS).ceil())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64) -> SortingRange {
        SortingRange::new(min, max).unwrap()
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(SortingRange::new(5.0, 5.0).is_err());
        assert!(SortingRange::new(6.0, 5.0).is_err());
        assert!(SortingRange::new(f64::NAN, 5.0).is_err());
        assert!(SortingRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_clamp() {
        let r = range(0.0, 100.0);
        assert_eq!(r.clamp(115.0), 100.0);
        assert_eq!(r.clamp(-3.0), 0.0);
        assert_eq!(r.clamp(42.0), 42.0);
    }

    #[test]
    fn test_clamp_delta() {
        let r = range(0.0, 100.0);
        assert_eq!(r.clamp_delta(95.0, 20.0), 5.0);
        assert_eq!(r.clamp_delta(3.0, -20.0), -3.0);
        assert_eq!(r.clamp_delta(50.0, 1.0), 1.0);
        assert_eq!(r.clamp_delta(100.0, 1.0), 0.0);
    }

    #[test]
    fn test_default_page_step() {
        let steps = StepConfiguration::default();
        assert_eq!(steps.page_step_for(&range(0.0, 100.0)), 20.0);
        assert_eq!(steps.page_step_for(&range(0.0, 11.0)), 3.0);

        let fixed = StepConfiguration::new(1.0, 2.0, Some(7.0)).unwrap();
        assert_eq!(fixed.page_step_for(&range(0.0, 100.0)), 7.0);
    }

    #[test]
    fn test_invalid_steps() {
        assert_eq!(
            StepConfiguration::new(0.0, 2.0, None),
            Err(InteractionError::InvalidStep {
                name: "unit",
                value: 0.0
            })
        );
        assert!(StepConfiguration::new(1.0, -1.0, None).is_err());
        assert!(StepConfiguration::new(1.0, 2.0, Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_range_deserialize_validates() {
        let ok: SortingRange = toml::from_str("min = 0.0\nmax = 10.0").unwrap();
        assert_eq!(ok.max(), 10.0);
        assert!(toml::from_str::<SortingRange>("min = 10.0\nmax = 0.0").is_err());
    }
}

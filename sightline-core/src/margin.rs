//! The `rootMargin` of a watcher.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::MarginError;
use crate::geometry::Rect;

/// One side of a [`RootMargin`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MarginLength {
    /// CSS pixels.
    Px(f64),
    /// Percent of the root's width (left and right) or height (top and bottom).
    Percent(f64),
}

impl MarginLength {
    pub const ZERO: MarginLength = MarginLength::Px(0.0);

    /// Resolves the length against `basis`, the root extent along the same axis.
    pub fn resolve(self, basis: f64) -> f64 {
        match self {
            MarginLength::Px(px) => px,
            MarginLength::Percent(percent) => basis * percent / 100.0,
        }
    }
}

impl Default for MarginLength {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginLength::Px(px) => write!(f, "{px}px"),
            MarginLength::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

impl FromStr for MarginLength {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MarginError::InvalidLength(s.to_owned());

        // Unitless zero is the only length CSS accepts without a unit.
        if s == "0" {
            return Ok(MarginLength::ZERO);
        }

        let lower = s.to_ascii_lowercase();
        let (number, unit): (&str, fn(f64) -> MarginLength) =
            if let Some(number) = lower.strip_suffix("px") {
                (number, MarginLength::Px)
            } else if let Some(number) = lower.strip_suffix('%') {
                (number, MarginLength::Percent)
            } else {
                return Err(invalid());
            };

        match number.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(unit(value)),
            _ => Err(invalid()),
        }
    }
}

/// Offsets applied to each side of the root's bounding box before intersecting.
///
/// Parsed from the same one to four value syntax as the CSS `margin` shorthand:
///
/// ```
/// use sightline_core::{MarginLength, RootMargin};
///
/// let margin: RootMargin = "10px 5%".parse().unwrap();
/// assert_eq!(margin.top, MarginLength::Px(10.0));
/// assert_eq!(margin.left, MarginLength::Percent(5.0));
/// assert_eq!(margin.to_string(), "10px 5% 10px 5%");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl RootMargin {
    /// The same length on every side.
    pub const fn uniform(length: MarginLength) -> Self {
        RootMargin { top: length, right: length, bottom: length, left: length }
    }

    /// Applies the margin to a root rectangle, growing it outward.
    pub fn apply(&self, root: Rect) -> Rect {
        let width = root.width();
        let height = root.height();
        root.outset(
            self.top.resolve(height),
            self.right.resolve(width),
            self.bottom.resolve(height),
            self.left.resolve(width),
        )
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl FromStr for RootMargin {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_ascii_whitespace()
            .map(MarginLength::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        match *values.as_slice() {
            [] => Err(MarginError::Empty),
            [all] => Ok(RootMargin::uniform(all)),
            [vertical, horizontal] => Ok(RootMargin {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => {
                Ok(RootMargin { top, right: horizontal, bottom, left: horizontal })
            },
            [top, right, bottom, left] => Ok(RootMargin { top, right, bottom, left }),
            _ => Err(MarginError::TooManyValues(values.len())),
        }
    }
}

impl TryFrom<String> for RootMargin {
    type Error = MarginError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootMargin> for String {
    fn from(value: RootMargin) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_expands_like_css() {
        let px = MarginLength::Px;

        assert_eq!("10px".parse::<RootMargin>(), Ok(RootMargin::uniform(px(10.0))));
        assert_eq!(
            "1px 2px".parse::<RootMargin>(),
            Ok(RootMargin { top: px(1.0), right: px(2.0), bottom: px(1.0), left: px(2.0) })
        );
        assert_eq!(
            "1px 2px 3px".parse::<RootMargin>(),
            Ok(RootMargin { top: px(1.0), right: px(2.0), bottom: px(3.0), left: px(2.0) })
        );
        assert_eq!(
            "1px 2px 3px 4px".parse::<RootMargin>(),
            Ok(RootMargin { top: px(1.0), right: px(2.0), bottom: px(3.0), left: px(4.0) })
        );
    }

    #[test]
    fn accepts_unitless_zero_percent_and_negatives() {
        let margin: RootMargin = "0 -20px 12.5% 0px".parse().unwrap();
        assert_eq!(margin.top, MarginLength::ZERO);
        assert_eq!(margin.right, MarginLength::Px(-20.0));
        assert_eq!(margin.bottom, MarginLength::Percent(12.5));
        assert_eq!(margin.left, MarginLength::ZERO);
    }

    #[test]
    fn units_are_case_insensitive() {
        assert_eq!("4PX".parse::<RootMargin>(), Ok(RootMargin::uniform(MarginLength::Px(4.0))));
    }

    #[test]
    fn rejects_invalid_margins() {
        assert_eq!("".parse::<RootMargin>(), Err(MarginError::Empty));
        assert_eq!("   ".parse::<RootMargin>(), Err(MarginError::Empty));
        assert_eq!("1px 1px 1px 1px 1px".parse::<RootMargin>(), Err(MarginError::TooManyValues(5)));
        assert_eq!("10".parse::<RootMargin>(), Err(MarginError::InvalidLength("10".into())));
        assert_eq!("1em".parse::<RootMargin>(), Err(MarginError::InvalidLength("1em".into())));
        assert_eq!("px".parse::<RootMargin>(), Err(MarginError::InvalidLength("px".into())));
        assert_eq!("infpx".parse::<RootMargin>(), Err(MarginError::InvalidLength("infpx".into())));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let margin: RootMargin = "0px 0px 0px 0px".parse().unwrap();
        assert_eq!(margin, RootMargin::default());
        assert_eq!(margin.to_string(), "0px 0px 0px 0px");
    }

    #[test]
    fn percentages_resolve_against_the_matching_axis() {
        let margin: RootMargin = "10% 50%".parse().unwrap();
        let root = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(margin.apply(root), Rect::from_edges(-100.0, -10.0, 300.0, 110.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_css_string() {
        let margin: RootMargin = "8px 0px".parse().unwrap();
        assert_eq!(serde_json::to_string(&margin).unwrap(), "\"8px 0px 8px 0px\"");
        assert_eq!(serde_json::from_str::<RootMargin>("\"8px 0px\"").unwrap(), margin);
        assert!(serde_json::from_str::<RootMargin>("\"8em\"").is_err());
    }
}

//! Viewport rectangle, axis direction, and fit configuration.

use std::fmt;

/// Direction in which the caller supplied an axis range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSign {
    /// Supplied as `(low, high)`.
    Increasing,
    /// Supplied as `(high, low)`; the axis renders mirrored.
    Decreasing,
}

impl AxisSign {
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            AxisSign::Increasing => 1.0,
            AxisSign::Decreasing => -1.0,
        }
    }
}

/// One normalized axis range (`min <= max`) plus the sign it was supplied with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub sign: AxisSign,
}

impl AxisRange {
    pub fn new(from: f64, to: f64) -> Self {
        if from <= to {
            Self {
                min: from,
                max: to,
                sign: AxisSign::Increasing,
            }
        } else {
            Self {
                min: to,
                max: from,
                sign: AxisSign::Decreasing,
            }
        }
    }

    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportError {
    NonFinite { from: f64, to: f64 },
    /// Both bounds are finite but their distance is not.
    ExtentOverflow { from: f64, to: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportError::NonFinite { from, to } => {
                write!(f, "viewport range ({from}, {to}) is not finite")
            }
            ViewportError::ExtentOverflow { from, to } => {
                write!(f, "viewport range ({from}, {to}) has an extent beyond f64")
            }
        }
    }
}

impl std::error::Error for ViewportError {}

/// Target device rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub hor: AxisRange,
    pub ver: AxisRange,
}

impl Viewport {
    /// Accepts each range in either order; a decreasing range flips that axis.
    pub fn new(hor: (f64, f64), ver: (f64, f64)) -> Result<Self, ViewportError> {
        for (from, to) in [hor, ver] {
            if !(from.is_finite() && to.is_finite()) {
                return Err(ViewportError::NonFinite { from, to });
            }
            if !(to - from).abs().is_finite() {
                return Err(ViewportError::ExtentOverflow { from, to });
            }
        }
        Ok(Self {
            hor: AxisRange::new(hor.0, hor.1),
            ver: AxisRange::new(ver.0, ver.1),
        })
    }
}

/// Fit configuration.
#[derive(Clone, Copy, Debug)]
pub struct FitCfg {
    /// Quantization step is the tightest axis ratio divided by this.
    pub delta_divisor: f64,
}

impl Default for FitCfg {
    fn default() -> Self {
        Self { delta_divisor: 1e6 }
    }
}

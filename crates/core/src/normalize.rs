//! Min-max rescaling of raw formula values onto 0–10.

use serde::Serialize;

use crate::formulas::Formula;

/// Calibration bounds for one formula.
///
/// `easy` is the raw value at or beyond which text scores 10, `hard` the one
/// at or beyond which it scores 0. `inverse` is set when lower raw values are
/// easier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calibration {
    pub easy: f64,
    pub hard: f64,
    pub inverse: bool,
}

impl Calibration {
    pub const fn new(easy: f64, hard: f64, inverse: bool) -> Self {
        Self { easy, hard, inverse }
    }

    /// Default bounds used by the HIX.
    pub const fn for_formula(formula: Formula) -> Self {
        match formula {
            Formula::Amstad => Self::new(70.0, 30.0, false),
            Formula::Wsf1 => Self::new(6.0, 15.0, true),
            Formula::Smog => Self::new(10.0, 18.0, true),
            Formula::Lix => Self::new(40.0, 60.0, true),
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        normalize(value, self.easy, self.hard, self.inverse)
    }
}

/// Rescales `value` onto `[0, 10]`.
///
/// NaN maps to 0. The result is always clamped, so bounds given in the wrong
/// order degrade to a step function instead of escaping the band.
pub fn normalize(value: f64, easy: f64, hard: f64, inverse: bool) -> f64 {
    if value.is_nan() {
        return 0.0;
    }

    let scaled = if inverse {
        if value <= easy {
            10.0
        } else if value >= hard {
            0.0
        } else {
            10.0 - (value - easy) / (hard - easy) * 10.0
        }
    } else if value >= easy {
        10.0
    } else if value <= hard {
        0.0
    } else {
        (value - hard) / (easy - hard) * 10.0
    };

    if scaled.is_nan() { 0.0 } else { scaled.clamp(0.0, 10.0) }
}

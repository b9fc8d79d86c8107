//! transform::options — validated parameters for RDM transforms.
//!
//! Purpose
//! -------
//! Hold the small value types that configure transforms: the rank
//! tie-breaking policy, the quantile band of the geo-topological transform,
//! and the policy for degenerate rescaling ranges.
//!
//! Key behaviors
//! -------------
//! - [`RankMethod`] parses case-insensitively from the usual names
//!   (`average`, `min`, `max`, `dense`, `ordinal`).
//! - [`QuantileBand::new`] enforces `0 ≤ l < u ≤ 1` up front, so the
//!   transform itself never sees an invalid band.
//! - [`RangePolicy`] decides whether a zero-width rescaling range is an
//!   error (`Strict`, the default) or produces NaN/±∞ (`Propagate`).
//!
//! Invariants & assumptions
//! ------------------------
//! - All types are `Copy` and validated at construction; downstream code
//!   does not re-check them.
//!
//! Testing notes
//! -------------
//! - Unit tests cover parsing of every rank method, rejection of unknown
//!   names, and every branch of `QuantileBand::new`.

use std::str::FromStr;

use crate::transform::errors::{TransformError, TransformResult};

/// Tie-breaking policy of the rank transform.
///
/// Variants:
/// - `Average`: tied values share the mean of the ranks they span.
/// - `Min` / `Max`: tied values share the lowest / highest rank of the group.
/// - `Dense`: consecutive ranks per distinct value, no gaps.
/// - `Ordinal`: ties broken by first occurrence; all ranks distinct.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names.
/// Unknown names return `TransformError::InvalidParameter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankMethod {
    #[default]
    Average,
    Min,
    Max,
    Dense,
    Ordinal,
}

impl RankMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankMethod::Average => "average",
            RankMethod::Min => "min",
            RankMethod::Max => "max",
            RankMethod::Dense => "dense",
            RankMethod::Ordinal => "ordinal",
        }
    }
}

impl FromStr for RankMethod {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "average" => Ok(RankMethod::Average),
            "min" => Ok(RankMethod::Min),
            "max" => Ok(RankMethod::Max),
            "dense" => Ok(RankMethod::Dense),
            "ordinal" => Ok(RankMethod::Ordinal),
            _ => Err(TransformError::InvalidParameter {
                name: "method",
                value: s.to_string(),
                reason: "valid options are 'average', 'min', 'max', 'dense', or 'ordinal'",
            }),
        }
    }
}

/// What to do when a rescaling range has zero (or NaN) width.
///
/// - `Strict`: fail with `TransformError::DegenerateRange`.
/// - `Propagate`: divide anyway and keep the resulting NaN/±∞ values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    #[default]
    Strict,
    Propagate,
}

/// QuantileBand — lower/upper quantiles of the geo-topological transform.
///
/// Fields
/// ------
/// - `lower`: `f64`
///   Lower quantile `l`; entries below the `l`-quantile map to 0.
/// - `upper`: `f64`
///   Upper quantile `u`; entries above the `u`-quantile map to 1.
///
/// Invariants
/// ----------
/// - `0.0 ≤ lower < upper ≤ 1.0`, both finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileBand {
    lower: f64,
    upper: f64,
}

impl QuantileBand {
    /// Construct a validated quantile band.
    ///
    /// Parameters
    /// ----------
    /// - `lower`: `f64`
    ///   Lower quantile `l` in `[0, 1]`.
    /// - `upper`: `f64`
    ///   Upper quantile `u` in `[0, 1]`, strictly greater than `l`.
    ///
    /// Returns
    /// -------
    /// `TransformResult<QuantileBand>`
    ///   - `Err(TransformError::InvalidParameter { .. })` when either bound
    ///     is NaN or outside `[0, 1]`, or when `l ≥ u`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rdm_transforms::transform::QuantileBand;
    /// assert!(QuantileBand::new(0.1, 0.9).is_ok());
    /// assert!(QuantileBand::new(0.5, 0.5).is_err());
    /// ```
    pub fn new(lower: f64, upper: f64) -> TransformResult<Self> {
        if !(0.0..=1.0).contains(&lower) {
            return Err(TransformError::InvalidParameter {
                name: "l",
                value: lower.to_string(),
                reason: "lower quantile must lie in [0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&upper) {
            return Err(TransformError::InvalidParameter {
                name: "u",
                value: upper.to_string(),
                reason: "upper quantile must lie in [0, 1]",
            });
        }
        if lower >= upper {
            return Err(TransformError::InvalidParameter {
                name: "l",
                value: format!("{lower} (u = {upper})"),
                reason: "lower quantile must be strictly less than upper quantile",
            });
        }
        Ok(QuantileBand { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl Default for QuantileBand {
    /// The full band `[0, 1]`, under which the transform reduces to min-max.
    fn default() -> Self {
        QuantileBand { lower: 0.0, upper: 1.0 }
    }
}

//! EWMA smoothing and the two-window oscillator
//!
//! The oscillator compares an exponential moving average of the closing
//! price at a long time scale against one at a short time scale. The
//! difference between the two is smoothed once more, and the residual
//! between the difference and its smoothed form highlights turning points.

use crate::error::{Result, TrendError};

/// Fixed span, in days, used to smooth the oscillator itself (1.5 weeks)
pub const SMOOTHING_SPAN: f64 = 10.5;

/// Exponential weighted moving average over a sequence.
///
/// Uses the unadjusted recursive form: with smoothing factor
/// `alpha = 2 / (span + 1)`, the output is seeded with the first
/// observation and then follows
/// `ewma[i] = alpha * x[i] + (1 - alpha) * ewma[i - 1]`.
///
/// The span must be strictly positive and yield `alpha` in `(0, 2]`.
pub fn ewma(values: &[f64], span: f64) -> Result<Vec<f64>> {
    if !span.is_finite() || span <= 0.0 {
        return Err(TrendError::InvalidParameter(format!(
            "span must be strictly positive, got {span}"
        )));
    }

    let alpha = 2.0 / (span + 1.0);
    if alpha <= 0.0 || alpha > 2.0 {
        return Err(TrendError::InvalidParameter(format!(
            "span {span} yields smoothing factor {alpha} outside (0, 2]"
        )));
    }

    let mut out = Vec::with_capacity(values.len());
    let mut iter = values.iter();
    if let Some(&first) = iter.next() {
        let mut level = first;
        out.push(level);
        for &value in iter {
            level = alpha * value + (1.0 - alpha) * level;
            out.push(level);
        }
    }

    Ok(out)
}

/// The derived series of the two-window oscillator, all index-aligned with
/// the input prices
#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorSeries {
    /// Long-term EWMA of the prices
    pub lt_av: Vec<f64>,
    /// Short-term EWMA of the prices
    pub st_av: Vec<f64>,
    /// `lt_av - st_av`, element-wise
    pub diff: Vec<f64>,
    /// EWMA of `diff` with the fixed [`SMOOTHING_SPAN`]
    pub diff_av: Vec<f64>,
    /// `diff - diff_av`, element-wise
    pub residual: Vec<f64>,
}

impl OscillatorSeries {
    /// Derive the oscillator series from a chronologically ordered price
    /// sequence and the two window lengths in days.
    ///
    /// Both windows must be strictly positive. A single-element input
    /// yields single-element series; an empty input yields empty series.
    pub fn compute(prices: &[f64], long_win: f64, short_win: f64) -> Result<Self> {
        let lt_av = ewma(prices, long_win)?;
        let st_av = ewma(prices, short_win)?;

        let diff: Vec<f64> = lt_av.iter().zip(&st_av).map(|(l, s)| l - s).collect();
        let diff_av = ewma(&diff, SMOOTHING_SPAN)?;
        let residual: Vec<f64> = diff.iter().zip(&diff_av).map(|(d, a)| d - a).collect();

        Ok(Self {
            lt_av,
            st_av,
            diff,
            diff_av,
            residual,
        })
    }

    /// Number of observations in each series
    pub fn len(&self) -> usize {
        self.diff.len()
    }

    /// Whether the series are empty
    pub fn is_empty(&self) -> bool {
        self.diff.is_empty()
    }
}

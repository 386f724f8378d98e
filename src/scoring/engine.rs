use serde::Serialize;

use super::advice::derive_advice;
use super::band::{classify, Band, Cue};
use super::factors::{Factor, ScoreInputs};

pub const SCORE_MIN: u16 = 300;
pub const SCORE_MAX: u16 = 850;
pub const BASE_SCORE: f64 = 300.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub factor: Factor,
    pub value: u8,
    pub weight: f64, // Points added by this factor
    pub before: f64, // Running total before this factor
    pub after: f64,  // Running total after this factor
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub factors: Vec<FactorContribution>,
    /// Weighted sum before rounding and clamping
    pub raw_total: f64,
    /// True when the rounded total fell outside [SCORE_MIN, SCORE_MAX]
    pub clamped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u16,
    pub band: Band,
    pub advice: Vec<&'static str>,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResult {
    pub fn cue(&self) -> Cue {
        self.band.cue()
    }

    pub fn fill_fraction(&self) -> f64 {
        fill_fraction(self.score)
    }
}

/// Weighted sum of all factors on top of the base score, unrounded.
pub fn raw_score(inputs: &ScoreInputs) -> f64 {
    Factor::ALL
        .iter()
        .map(|&factor| factor.weight(inputs.get(factor)))
        .fold(BASE_SCORE, |acc, w| acc + w)
}

/// Round half away from zero, then reconcile into the displayable range.
fn finalize(raw: f64) -> (u16, bool) {
    let rounded = raw.round();
    let clamped = rounded.clamp(f64::from(SCORE_MIN), f64::from(SCORE_MAX));
    (clamped as u16, clamped != rounded)
}

pub fn compute_score(inputs: &ScoreInputs) -> u16 {
    let (score, _) = finalize(raw_score(inputs));
    debug_assert!((SCORE_MIN..=SCORE_MAX).contains(&score));
    score
}

/// Compute score, band, advice and the per-factor breakdown.
pub fn calculate_score(inputs: &ScoreInputs) -> ScoreResult {
    let mut total = BASE_SCORE;
    let mut factors = Vec::with_capacity(Factor::ALL.len());

    for factor in Factor::ALL {
        let value = inputs.get(factor);
        let weight = factor.weight(value);
        let before = total;
        total += weight;
        factors.push(FactorContribution {
            factor,
            value,
            weight,
            before,
            after: total,
        });
    }

    let (score, clamped) = finalize(total);
    debug_assert!((SCORE_MIN..=SCORE_MAX).contains(&score));

    ScoreResult {
        score,
        band: classify(score),
        advice: derive_advice(inputs),
        breakdown: ScoreBreakdown {
            base_score: BASE_SCORE,
            factors,
            raw_total: total,
            clamped,
        },
    }
}

/// Position of a score on the 300..=850 range indicator, in [0, 1].
pub fn fill_fraction(score: u16) -> f64 {
    let score = score.clamp(SCORE_MIN, SCORE_MAX);
    f64::from(score - SCORE_MIN) / f64::from(SCORE_MAX - SCORE_MIN)
}

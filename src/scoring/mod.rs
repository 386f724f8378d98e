pub mod advice;
pub mod band;
pub mod config;
pub mod engine;
pub mod factors;
pub mod validation;

pub use advice::{derive_advice, AdviceRule, ADVICE_RULES, FALLBACK_ADVICE};
pub use band::{classify, Band, Cue};
pub use config::InitialInputs;
pub use engine::{
    calculate_score, compute_score, fill_fraction, raw_score, FactorContribution, ScoreBreakdown,
    ScoreResult, BASE_SCORE, SCORE_MAX, SCORE_MIN,
};
pub use factors::{Factor, ScoreInputs};
pub use validation::validate_initial_inputs;

use super::factors::{Factor, ScoreInputs};

pub const FALLBACK_ADVICE: &str = "Great job! Maintain current habits";

/// A single improvement suggestion tied to one factor.
#[derive(Debug, Clone, Copy)]
pub struct AdviceRule {
    pub factor: Factor,
    pub triggers: fn(u8) -> bool,
    pub message: &'static str,
}

fn payment_inconsistent(value: u8) -> bool {
    value < 95
}

fn utilization_high(value: u8) -> bool {
    value > 30
}

fn history_short(value: u8) -> bool {
    value < 5
}

fn mix_narrow(value: u8) -> bool {
    value < 3
}

/// Evaluated independently, in this order.
pub const ADVICE_RULES: [AdviceRule; 4] = [
    AdviceRule {
        factor: Factor::PaymentHistory,
        triggers: payment_inconsistent,
        message: "Improve payment consistency",
    },
    AdviceRule {
        factor: Factor::CreditUtilization,
        triggers: utilization_high,
        message: "Reduce credit utilization below 30%",
    },
    AdviceRule {
        factor: Factor::AccountAge,
        triggers: history_short,
        message: "Maintain older accounts",
    },
    AdviceRule {
        factor: Factor::CreditMix,
        triggers: mix_narrow,
        message: "Diversify credit types",
    },
];

/// Derive the advice list for the given inputs. Never empty.
pub fn derive_advice(inputs: &ScoreInputs) -> Vec<&'static str> {
    let advice: Vec<&'static str> = ADVICE_RULES
        .iter()
        .filter(|rule| (rule.triggers)(inputs.get(rule.factor)))
        .map(|rule| rule.message)
        .collect();

    if advice.is_empty() {
        vec![FALLBACK_ADVICE]
    } else {
        advice
    }
}

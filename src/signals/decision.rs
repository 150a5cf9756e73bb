//! Ordered decision table mapping indicator readings to a [`Signal`].
//!
//! Rules are evaluated top to bottom and the first matching rule wins, so the
//! RSI threshold rules always take priority over the trend rules.

use crate::models::Signal;

pub const OVERSOLD: f64 = 30.0;
pub const OVERBOUGHT: f64 = 70.0;
pub const MOMENTUM_MIDLINE: f64 = 50.0;

/// Raw, unrounded readings the table is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionInput {
    pub rsi: f64,
    pub price: f64,
    pub sma: f64,
}

pub struct DecisionRule {
    pub name: &'static str,
    pub signal: Signal,
    matches: fn(&DecisionInput) -> bool,
    reason: fn(&DecisionInput) -> String,
}

impl DecisionRule {
    pub fn matches(&self, input: &DecisionInput) -> bool {
        (self.matches)(input)
    }

    pub fn reason(&self, input: &DecisionInput) -> String {
        (self.reason)(input)
    }
}

pub const DECISION_TABLE: &[DecisionRule] = &[
    DecisionRule {
        name: "oversold",
        signal: Signal::StrongBuy,
        matches: is_oversold,
        reason: oversold_reason,
    },
    DecisionRule {
        name: "overbought",
        signal: Signal::StrongSell,
        matches: is_overbought,
        reason: overbought_reason,
    },
    DecisionRule {
        name: "bullish_trend",
        signal: Signal::Buy,
        matches: is_bullish_trend,
        reason: bullish_reason,
    },
    DecisionRule {
        name: "bearish_trend",
        signal: Signal::Sell,
        matches: is_bearish_trend,
        reason: bearish_reason,
    },
];

pub const UNDECIDED_REASON: &str = "Market is undecided.";

/// First matching rule's signal and reason, or HOLD.
pub fn decide(input: &DecisionInput) -> (Signal, String) {
    DECISION_TABLE
        .iter()
        .find(|rule| rule.matches(input))
        .map(|rule| (rule.signal, rule.reason(input)))
        .unwrap_or_else(|| (Signal::Hold, UNDECIDED_REASON.to_string()))
}

fn is_oversold(input: &DecisionInput) -> bool {
    input.rsi < OVERSOLD
}

fn is_overbought(input: &DecisionInput) -> bool {
    input.rsi > OVERBOUGHT
}

fn is_bullish_trend(input: &DecisionInput) -> bool {
    input.price > input.sma && input.rsi > MOMENTUM_MIDLINE
}

fn is_bearish_trend(input: &DecisionInput) -> bool {
    input.price < input.sma && input.rsi < MOMENTUM_MIDLINE
}

fn oversold_reason(input: &DecisionInput) -> String {
    format!("RSI ({:.1}) is oversold. Bounce expected.", input.rsi)
}

fn overbought_reason(input: &DecisionInput) -> String {
    format!("RSI ({:.1}) is overbought. Correction expected.", input.rsi)
}

fn bullish_reason(_: &DecisionInput) -> String {
    "Price above average, momentum is positive.".to_string()
}

fn bearish_reason(_: &DecisionInput) -> String {
    "Price below average, momentum is negative.".to_string()
}

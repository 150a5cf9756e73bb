//! Canned chat replies keyed off the user's question.

use crate::models::Analysis;

const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatIntent {
    Trade,
    Indicators,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchMode {
    Substring,
    /// Short localized words would otherwise hit inside English words.
    Word,
}

struct Keyword {
    text: &'static str,
    mode: MatchMode,
}

const fn sub(text: &'static str) -> Keyword {
    Keyword {
        text,
        mode: MatchMode::Substring,
    }
}

const fn word(text: &'static str) -> Keyword {
    Keyword {
        text,
        mode: MatchMode::Word,
    }
}

/// Checked in order; the first intent with a matching keyword wins.
const INTENT_KEYWORDS: &[(ChatIntent, &[Keyword])] = &[
    (
        ChatIntent::Trade,
        &[
            sub("buy"),
            sub("sell"),
            sub("action"),
            sub("recommend"),
            sub("trade"),
            // Turkish: "al" (buy), "sat" (sell)
            word("al"),
            word("sat"),
        ],
    ),
    (
        ChatIntent::Indicators,
        &[sub("indicator"), sub("rsi"), sub("sma"), sub("technical")],
    ),
];

impl Keyword {
    fn found_in(&self, message: &str) -> bool {
        match self.mode {
            MatchMode::Substring => message.contains(self.text),
            MatchMode::Word => message
                .split(|c: char| !c.is_alphanumeric())
                .any(|w| w == self.text),
        }
    }
}

/// Case-insensitive keyword classification.
pub fn classify(message: &str) -> ChatIntent {
    let message = message.to_lowercase();
    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| k.found_in(&message)))
        .map(|(intent, _)| *intent)
        .unwrap_or(ChatIntent::Status)
}

/// Whole numbers keep one decimal place (`100.0`, `250.0`).
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn or_placeholder(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), format_number)
}

fn or_placeholder_str(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

pub fn compose_reply(symbol: &str, analysis: &Analysis, user_message: &str) -> String {
    let signal = analysis.signal.as_str();
    let reason = or_placeholder_str(&analysis.reason);
    // The insufficient-data result carries an integer zero.
    let rsi = if analysis.is_insufficient() {
        "0".to_string()
    } else {
        format_number(analysis.rsi)
    };

    match classify(user_message) {
        ChatIntent::Trade => format!(
            "🤖 **Trade Signal:**\n\
             Current Signal: **{signal}**\n\n\
             👉 **Reason:** {reason}\n\
             ⚠️ *Not financial advice. Based on technical data only.*"
        ),
        ChatIntent::Indicators => format!(
            "📊 **Technical Indicators:**\n\
             • **RSI (14):** {rsi} (Momentum)\n\
             • **SMA (20):** ${sma} (Trend Line)\n\n\
             Used to determine trend direction.",
            sma = or_placeholder(analysis.sma),
        ),
        ChatIntent::Status => format!(
            "🤖 **{symbol} Analysis:**\n\
             Signal: {signal}\n\
             RSI: {rsi}\n\
             View: {reason}\n\n\
             Ask me 'Should I buy?' or 'What indicators are used?'",
            symbol = or_placeholder_str(symbol),
        ),
    }
}

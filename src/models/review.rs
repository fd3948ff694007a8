use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Seconds at or past which the server is telling the caller to stop
/// retrying and move on. Advisory only; the record shape does not change.
pub const STOP_DELAY_SECS: f64 = 180.0;

/// The server's verdict on a submitted answer, normalized to the four
/// fields the agent acts on. Unknown response fields are dropped; the
/// continuation `url` is always carried through so the agent can continue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnswerReview {
    #[serde(default)]
    pub correct: Value,
    #[serde(default)]
    pub reason: Value,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "zero", deserialize_with = "delay_or_zero")]
    pub delay: Number,
}

impl AnswerReview {
    pub fn delay_secs(&self) -> f64 {
        self.delay.as_f64().unwrap_or(0.0)
    }

    pub fn past_stop_threshold(&self) -> bool {
        self.delay_secs() >= STOP_DELAY_SECS
    }
}

fn zero() -> Number {
    Number::from(0)
}

// The quiz server is loose about this field; anything non-numeric counts
// as "no delay".
fn delay_or_zero<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(n),
        _ => Ok(zero()),
    }
}

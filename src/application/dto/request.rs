//! Request DTOs
//!
//! Data structures for API request bodies and query parameters.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Expense payload for create and update requests.
///
/// Every field is lenient at the deserialization boundary: a missing or
/// wrong-typed field becomes `None` instead of a generic body-rejection, so
/// the service layer can report the field's own validation message.
/// Validation happens there, in a fixed order.
#[derive(Debug, Default, Deserialize)]
pub struct ExpensePayload {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<AmountField>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
}

/// Amount as it arrives on the wire: a JSON number or a numeric string.
///
/// Clients of the original service sent both forms; `"4.5"` is accepted and
/// coerced before the greater-than-zero check.
#[derive(Debug, Clone)]
pub enum AmountField {
    Number(f64),
    Text(String),
}

impl AmountField {
    /// Coerce to a finite number, if possible.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            AmountField::Number(n) => Some(*n),
            AmountField::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|n| n.is_finite())
    }
}

/// Accept a JSON string; any other type becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        _ => None,
    }))
}

/// Accept a JSON number or string; any other type becomes `None`.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<AmountField>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64().map(AmountField::Number),
        Value::String(s) => Some(AmountField::Text(s)),
        _ => None,
    }))
}

/// Query parameters for the list endpoint
#[derive(Debug, Deserialize)]
pub struct ListQueryParams {
    /// Exact-match category filter
    pub category: Option<String>,
}

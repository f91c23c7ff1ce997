//! Hover Payloads
//!
//! Rendering metadata for plotted points, as handed over by the drawing
//! surface when the pointer hovers a chart or when a legend is laid out.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A payload value: plotted points carry numbers, legend items carry text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Number(f64),
    Text(String),
}

impl PayloadValue {
    /// Whether the value should be shown at all. Zero, NaN and empty text are
    /// treated as "no value".
    pub fn is_present(&self) -> bool {
        match self {
            PayloadValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PayloadValue::Text(s) => !s.is_empty(),
        }
    }
}

impl From<f64> for PayloadValue {
    fn from(value: f64) -> Self {
        PayloadValue::Number(value)
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        PayloadValue::Text(value.to_string())
    }
}

impl fmt::Display for PayloadValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadValue::Number(n) => f.write_str(&format_number(*n)),
            PayloadValue::Text(s) => f.write_str(s),
        }
    }
}

/// One plotted point's rendering metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<PayloadValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// The original data row the point was plotted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Any other fields the drawing surface attached
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PayloadItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = Some(key.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<PayloadValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Attach the original data row
    pub fn row(mut self, row: Value) -> Self {
        self.payload = Some(row);
        self
    }

    /// Attach an extra field
    pub fn field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    /// String-valued field by its wire name, if the item carries one
    pub fn string_field(&self, field: &str) -> Option<&str> {
        match field {
            "dataKey" => self.data_key.as_deref(),
            "name" => self.name.as_deref(),
            "color" => self.color.as_deref(),
            "value" => match &self.value {
                Some(PayloadValue::Text(s)) => Some(s.as_str()),
                _ => None,
            },
            "payload" => None,
            other => self.extra.get(other).and_then(Value::as_str),
        }
    }

    /// The original data row, when it is an object
    pub fn row_object(&self) -> Option<&Map<String, Value>> {
        self.payload.as_ref().and_then(Value::as_object)
    }

    /// String-valued field of the original data row
    pub fn row_string_field(&self, field: &str) -> Option<&str> {
        self.row_object()?.get(field).and_then(Value::as_str)
    }
}

/// Format a number the way dashboards usually show it: thousands grouped
/// with commas, at most three fractional digits.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    let rounded = (n * 1000.0).round() / 1000.0;
    let text = format!("{}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_chart_payload() {
        let item: PayloadItem = serde_json::from_value(json!({
            "dataKey": "visitors",
            "name": "chrome",
            "value": 275,
            "color": "var(--color-chrome)",
            "payload": {"browser": "chrome", "visitors": 275, "fill": "#f00"},
            "browser": "chrome"
        }))
        .unwrap();

        assert_eq!(item.data_key.as_deref(), Some("visitors"));
        assert_eq!(item.value, Some(PayloadValue::Number(275.0)));
        assert_eq!(item.string_field("browser"), Some("chrome"));
        assert_eq!(item.row_string_field("fill"), Some("#f00"));
        assert_eq!(item.string_field("value"), None);
    }

    #[test]
    fn test_non_object_row_is_ignored() {
        let item = PayloadItem::new().row(json!("raw"));
        assert!(item.row_object().is_none());
        assert_eq!(item.row_string_field("name"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1234.0), "1,234");
        assert_eq!(format_number(1234567.5), "1,234,567.5");
        assert_eq!(format_number(-98765.4321), "-98,765.432");
    }

    #[test]
    fn test_zero_is_not_present() {
        assert!(!PayloadValue::Number(0.0).is_present());
        assert!(PayloadValue::Number(-1.0).is_present());
        assert!(!PayloadValue::Text(String::new()).is_present());
    }
}

use crate::utils::display_value;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResetOutcome {
    pub success: Option<Value>,
    pub result: Option<Value>,
    pub error: Option<Value>,
}

impl ResetOutcome {
    /// Text for the result area: `result` on success, then `error` whenever present.
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.succeeded() {
            if let Some(result) = &self.result {
                lines.push(display_value(result));
            }
        }
        if let Some(error) = &self.error {
            lines.push(display_value(error));
        }
        lines
    }

    /// Any truthy `success`: `true`, a non-zero number, a non-empty string or a container.
    pub fn succeeded(&self) -> bool {
        match &self.success {
            None | Some(Value::Null) => false,
            Some(Value::Bool(x)) => *x,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|x| x != 0.0 && !x.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_) | Value::Object(_)) => true,
        }
    }
}

use serde_json::{Map, Value};

/// One rejected field in caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub path: &'static str,
    pub message: String,
}

/// Accumulates field issues so a caller sees every problem at once.
#[derive(Debug, Default)]
pub struct Issues(Vec<FieldIssue>);

impl Issues {
    pub fn push(&mut self, path: &'static str, message: impl Into<String>) {
        self.0.push(FieldIssue { path, message: message.into() });
    }

    /// Require a present, non-blank string.
    pub fn require_text<'a>(
        &mut self,
        path: &'static str,
        value: Option<&'a str>,
        empty_message: &str,
    ) -> Option<&'a str> {
        match value {
            None => {
                self.push(path, "Required");
                None
            }
            Some(v) if v.trim().is_empty() => {
                self.push(path, empty_message);
                None
            }
            Some(v) => Some(v),
        }
    }

    /// Read an optional string field from an untyped body. Absent and `null`
    /// both mean "not given"; any other non-string is reported.
    pub fn optional_text(&mut self, object: &Map<String, Value>, path: &'static str) -> Option<String> {
        match object.get(path) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(path, "Expected string");
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `"<context>: <path>: <message>, <path>: <message>"`
    pub fn into_message(self, context: &str) -> String {
        let joined = self
            .0
            .iter()
            .map(|i| format!("{}: {}", i.path, i.message))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}: {}", context, joined)
    }
}

use serde::Deserialize;
use serde_json::Value;

/// One record of the external device-test report format.
///
/// Every field is optional and untyped. A field only counts as present when it
/// is truthy: not `null`, `false`, `""` or the number zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawReportEntry {
    test_case_id: Option<Value>,
    state: Option<Value>,
    test_run_id: Option<Value>,
    title: Option<Value>,
    created: Option<Value>,
    last_changed: Option<Value>,
    steps: Option<Value>,
}

impl From<Value> for RawReportEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

impl RawReportEntry {
    pub fn test_case_id(&self) -> Option<&Value> {
        truthy(self.test_case_id.as_ref())
    }

    pub fn state(&self) -> Option<String> {
        truthy_text(self.state.as_ref())
    }

    pub fn test_run_id(&self) -> Option<String> {
        truthy_text(self.test_run_id.as_ref())
    }

    pub fn title(&self) -> Option<String> {
        truthy_text(self.title.as_ref())
    }

    pub fn created(&self) -> Option<String> {
        truthy_text(self.created.as_ref())
    }

    pub fn last_changed(&self) -> Option<String> {
        truthy_text(self.last_changed.as_ref())
    }

    /// `steps.collectionUrl`, when `steps` is an object carrying it.
    pub fn collection_url(&self) -> Option<String> {
        let collection_url = self
            .steps
            .as_ref()
            .and_then(Value::as_object)
            .and_then(|steps| steps.get("collectionUrl"));
        truthy_text(collection_url)
    }
}

fn truthy(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => true,
    })
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truthy_text(value: Option<&Value>) -> Option<String> {
    truthy(value).map(value_text)
}

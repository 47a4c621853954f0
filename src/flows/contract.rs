use serde_json::Value;
use crate::errors::SmartdoError;

/// Collect every schema violation of `instance` as `path: message` strings.
fn violations(schema: &Value, instance: &Value) -> Result<Vec<String>, SmartdoError> {
    let compiled = jsonschema::JSONSchema::compile(schema)
        .map_err(|e| SmartdoError::Internal(format!("Schema compilation error: {}", e)))?;

    let messages = match compiled.validate(instance) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|e| {
                let path = e.instance_path.to_string();
                let path = path.trim_start_matches('/');
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{}: {}", path.replace('/', "."), e)
                }
            })
            .collect(),
    };
    Ok(messages)
}

/// Check a flow input against its declared input contract.
pub fn check_input(flow: &str, schema: &Value, instance: &Value) -> Result<(), SmartdoError> {
    let messages = violations(schema, instance)?;
    if messages.is_empty() {
        return Ok(());
    }
    Err(SmartdoError::Validation(format!(
        "Invalid input for {}: {}",
        flow,
        messages.join(", ")
    )))
}

/// Check a model answer against the flow's output contract. Any violation,
/// including a single missing field, rejects the whole answer.
pub fn check_output(flow: &str, schema: &Value, instance: &Value) -> Result<(), SmartdoError> {
    let messages = violations(schema, instance)?;
    if messages.is_empty() {
        return Ok(());
    }
    Err(SmartdoError::OutputValidation(format!(
        "{} returned output violating its contract: {}",
        flow,
        messages.join(", ")
    )))
}

//! JSON Schema generation for the configuration file.

use crate::config::DashgridConfig;

/// Generates a JSON Schema for the Dashgrid configuration.
///
/// The schema includes all configuration options with their types,
/// descriptions, and default values.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(DashgridConfig);

    // Add $id for proper schema identification
    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "$id".to_string(),
            serde_json::json!(
                "https://raw.githubusercontent.com/dashgrid/dashgrid/main/dashgrid.schema.json"
            ),
        );
    }

    schema
}

/// Generates a JSON Schema string for the Dashgrid configuration.
///
/// Returns a pretty-printed JSON string that can be saved to a file
/// or used for validation.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

//! Output formatting: table, JSON, YAML.
//!
//! Table output lists one row per record; structured formats serialize
//! the whole slice (status, message, items) via serde.

use std::io::{self, Write};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use catalogo_core::{Resource, SliceState};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Table rows ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Fields")]
    fields: String,
}

impl RecordRow {
    fn from_record<R: Resource>(record: &R) -> Result<Self, CliError> {
        let value = serde_json::to_value(record)?;
        let fields = value
            .as_object()
            .map(|map| {
                map.iter()
                    .filter(|(key, _)| key.as_str() != "codigo")
                    .map(|(key, value)| format!("{key}={}", plain(value)))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();

        Ok(Self {
            code: record.code().to_string(),
            fields,
        })
    }
}

/// Strings without their JSON quotes, everything else as JSON.
fn plain(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a slice in the chosen format.
///
/// The table format renders only the records; the caller reports the
/// slice message separately.
pub fn render_slice<R: Resource>(
    format: OutputFormat,
    slice: &SliceState<R>,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => {
            if slice.items.is_empty() {
                return Ok(String::new());
            }
            let rows = slice
                .items
                .iter()
                .map(RecordRow::from_record)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Table::new(rows).with(Style::rounded()).to_string())
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(slice)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(slice)?),
        OutputFormat::Yaml => render_yaml(slice),
    }
}

/// YAML output.
pub(crate) fn render_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data).map_err(|e| CliError::Render(e.to_string()))
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

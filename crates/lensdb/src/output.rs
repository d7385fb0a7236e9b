//! Output formatting for records and query types.
//!
//! [`OutputMode`] selects between an aligned plain-text table and the
//! structured formats (JSON, YAML, CSV), which serialize the data directly.

use lensdb_seeker::{Lens, QueryList, QueryType};
use serde::Serialize;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Errors that can occur during serialization.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}

impl From<csv::Error> for SerializeError {
    fn from(err: csv::Error) -> Self {
        SerializeError::Csv(err.to_string())
    }
}

/// Controls how output is rendered. This is the `--output` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Aligned plain-text table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// CSV with a header row
    Csv,
}

impl OutputMode {
    /// Returns true for JSON, YAML and CSV.
    pub fn is_structured(&self) -> bool {
        !matches!(self, OutputMode::Text)
    }
}

/// One registry entry, flattened for output.
#[derive(Debug, Serialize)]
pub struct KindRow {
    pub name: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub input: &'static str,
    pub predicate: String,
}

impl From<&QueryType> for KindRow {
    fn from(kind: &QueryType) -> Self {
        KindRow {
            name: kind.name,
            prefix: kind.prefix,
            suffix: kind.suffix,
            input: kind.input.as_str(),
            predicate: kind.predicate.to_string(),
        }
    }
}

/// One active condition, flattened for output.
#[derive(Debug, Serialize)]
pub struct ConditionRow {
    pub name: &'static str,
    pub label: String,
    pub value: f64,
}

/// Renders the visible records. `total` is the catalog size.
pub fn render_records(
    records: &[&Lens],
    total: usize,
    mode: OutputMode,
) -> Result<String, SerializeError> {
    match mode {
        OutputMode::Text => {
            let rows: Vec<Vec<String>> = records
                .iter()
                .map(|lens| vec![lens.maker.clone(), lens.name.clone(), lens.price.to_string()])
                .collect();
            let mut out = render_table(&["Maker", "Name", "Price (tax excl.)"], &rows);
            out.push_str(&format!("{} of {} lenses\n", records.len(), total));
            Ok(out)
        }
        OutputMode::Json => Ok(serde_json::to_string_pretty(records)? + "\n"),
        OutputMode::Yaml => Ok(serde_yaml::to_string(records)?),
        OutputMode::Csv => to_csv(records),
    }
}

/// Renders the query type registry.
pub fn render_kinds(kinds: &[QueryType], mode: OutputMode) -> Result<String, SerializeError> {
    let rows: Vec<KindRow> = kinds.iter().map(KindRow::from).collect();
    match mode {
        OutputMode::Text => {
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|row| {
                    vec![
                        row.name.to_string(),
                        row.prefix.to_string(),
                        row.suffix.to_string(),
                        row.input.to_string(),
                        row.predicate.clone(),
                    ]
                })
                .collect();
            Ok(render_table(&["Name", "Condition", "Unit", "Input", "Test"], &cells))
        }
        OutputMode::Json => Ok(serde_json::to_string_pretty(&rows)? + "\n"),
        OutputMode::Yaml => Ok(serde_yaml::to_string(&rows)?),
        OutputMode::Csv => to_csv(&rows),
    }
}

/// Renders the active conditions in list order.
pub fn render_conditions(queries: &QueryList, mode: OutputMode) -> Result<String, SerializeError> {
    let rows: Vec<ConditionRow> = queries
        .iter()
        .map(|q| ConditionRow {
            name: q.name(),
            label: condition_label(q.kind, q.value),
            value: q.value,
        })
        .collect();
    match mode {
        OutputMode::Text if rows.is_empty() => Ok("no conditions\n".to_string()),
        OutputMode::Text => Ok(rows
            .iter()
            .map(|row| format!("{}  [{}]\n", row.label, row.name))
            .collect()),
        OutputMode::Json => Ok(serde_json::to_string_pretty(&rows)? + "\n"),
        OutputMode::Yaml => Ok(serde_yaml::to_string(&rows)?),
        OutputMode::Csv => to_csv(&rows),
    }
}

/// Human label for a condition, e.g. `Weight at most 500 g`.
///
/// Meter-input kinds show the value back in meters.
pub fn condition_label(kind: &QueryType, value: f64) -> String {
    if kind.is_boolean() {
        return kind.prefix.to_string();
    }
    let shown = if kind.is_meter_input() {
        value / f64::from(lensdb_seeker::MILLIMETERS_PER_METER)
    } else {
        value
    };
    format!("{} {} {}", kind.prefix, shown, kind.suffix)
        .trim_end()
        .to_string()
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<String, SerializeError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| SerializeError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SerializeError::Csv(e.to_string()))
}

/// Left-aligned columns padded by display width, two spaces apart.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    for row in std::iter::once(&header).chain(rows) {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            line.push_str(&" ".repeat(widths[i] - cell.width()));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

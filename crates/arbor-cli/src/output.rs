// crates/arbor-cli/src/output.rs
//
// Output formatting utilities for the arbor CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

/// One account's holdings and roles.
#[derive(Debug, Serialize, Tabled)]
pub struct AccountRow {
    pub address: String,
    pub balance: u128,
    pub staked: u128,
    pub minter: bool,
}

/// A single labelled value.
#[derive(Debug, Serialize, Tabled)]
pub struct FieldRow {
    pub field: String,
    pub value: String,
}

impl FieldRow {
    pub fn new(field: &str, value: impl ToString) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Result of a mutating operation, as reported to the operator.
#[derive(Debug, Serialize)]
pub struct OpResult {
    pub operation: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// Print the outcome of a mutating operation in the chosen format.
pub fn print_op(format: OutputFormat, operation: &'static str, value: Option<String>) {
    match format {
        OutputFormat::Json => {
            let result = OpResult {
                operation,
                ok: true,
                value,
            };
            println!("{}", format_json(&result));
        }
        OutputFormat::Table => match value {
            Some(v) => println!("{}: ok ({})", operation, v),
            None => println!("{}: ok", operation),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table_has_headers() {
        let rows = vec![FieldRow::new("total_supply", 1000u128)];
        let table = format_table(&rows);
        assert!(table.contains("field"));
        assert!(table.contains("total_supply"));
        assert!(table.contains("1000"));
    }

    #[test]
    fn test_op_result_json_skips_missing_value() {
        let result = OpResult {
            operation: "transfer",
            ok: true,
            value: None,
        };
        let json = format_json(&result);
        assert!(json.contains("\"transfer\""));
        assert!(!json.contains("value"));
    }
}

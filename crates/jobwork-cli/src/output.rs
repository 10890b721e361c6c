//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use chrono::Local;
use colored::*;
use jobwork_domain::SupplierRecord;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the supplier directory.
    pub fn format_records(&self, records: &[SupplierRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
            OutputFormat::Table => Ok(self.format_records_table(records)),
            OutputFormat::Quiet => Ok(records
                .iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the directory as a table.
    fn format_records_table(&self, records: &[SupplierRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No suppliers recorded yet.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Supplier", "Uses", "Last used"]);

        for (rank, record) in records.iter().enumerate() {
            let last_used = record
                .last_used
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string();
            builder.push_record([
                (rank + 1).to_string(),
                record.name.clone(),
                record.count.to_string(),
                last_used,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format supplier suggestions.
    pub fn format_suggestions(&self, suggestions: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(suggestions)?),
            OutputFormat::Quiet => Ok(suggestions.join("\n")),
            OutputFormat::Table => {
                if suggestions.is_empty() {
                    return Ok(self.colorize("No matching suppliers.", "yellow"));
                }
                Ok(suggestions
                    .iter()
                    .map(|name| format!("  {}", name))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }

    /// Format a single formatted value (currency or quantity).
    pub fn format_value(&self, value: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            _ => Ok(value.to_string()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format supplier recording result.
    pub fn supplier_recorded(&self, name: &str, count: u32) -> String {
        self.success(&format!("Recorded supplier '{}' (used {} time(s))", name, count))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

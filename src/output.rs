use colored::Colorize;
use serde::Serialize;

use crate::dialect::SqlDialect;

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

impl OutputFormat {
    /// Parse a format name from a config file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "yaml" => Some(Self::Yaml),
            _ => None
        }
    }
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Result of a transpile or optimize run, one entry per statement
#[derive(Debug, Clone, Serialize)]
pub struct RewriteReport {
    pub read_dialect:  SqlDialect,
    pub write_dialect: SqlDialect,
    pub statements:    Vec<String>
}

/// Format a rewrite report based on output options
pub fn format_report(report: &RewriteReport, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(report).unwrap_or_default(),
        OutputFormat::Text => format_text(report, opts)
    }
}

fn format_text(report: &RewriteReport, opts: &OutputOptions) -> String {
    if !opts.verbose {
        return report.statements.join(";\n");
    }

    let mut output = String::new();
    if opts.colored {
        output.push_str(&"=== SQL Rewrite ===\n\n".bold().to_string());
    } else {
        output.push_str("=== SQL Rewrite ===\n\n");
    }
    output.push_str(&format!(
        "Read dialect: {}\nWrite dialect: {}\n\n",
        report.read_dialect, report.write_dialect
    ));

    for (i, statement) in report.statements.iter().enumerate() {
        let header = format!("Statement #{}:", i + 1);
        if opts.colored {
            output.push_str(&header.cyan().bold().to_string());
        } else {
            output.push_str(&header);
        }
        output.push('\n');
        output.push_str(statement);
        output.push_str("\n\n");
    }

    output
}

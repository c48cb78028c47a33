//! # SQL Query Transpiler
//!
//! Transpile and rewrite SQL queries between dialects from the command line.
//!
//! `sql-query-transpiler` is a thin front over the [`sqlparser`] crate: the
//! input is parsed with the requested source dialect and each statement is
//! re-emitted through the library's canonical SQL rendering. All tokenizing,
//! AST construction and SQL generation is delegated to the library; this
//! binary only handles arguments, configuration and output formatting.
//!
//! # Quick Start
//!
//! ```bash
//! # Transpile a MySQL query
//! sql-query-transpiler transpile "SELECT `id` FROM `users`" --read mysql --write postgresql
//!
//! # Rewrite a query into canonical form
//! sql-query-transpiler optimize "select   a,b   from t where a>1"
//!
//! # Stream SQL from stdin
//! cat queries.sql | sql-query-transpiler transpile - --read sqlite
//!
//! # Structured output for tooling
//! sql-query-transpiler transpile "SELECT 1" -f json
//! ```
//!
//! # Dialects
//!
//! `generic`, `ansi`, `mysql`, `postgresql`, `sqlite`, `clickhouse`,
//! `duckdb`, `snowflake`, `bigquery`, `redshift`, `hive`, `mssql`
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`SQL_TRANSPILER_READ_DIALECT`,
//!    `SQL_TRANSPILER_WRITE_DIALECT`, `SQL_TRANSPILER_DIALECT`,
//!    `SQL_TRANSPILER_FORMAT`)
//! 3. `.sql-transpiler.toml` in current directory
//! 4. `~/.config/sql-transpiler/config.toml`
//!
//! ## Example Configuration
//!
//! ```toml
//! [defaults]
//! read_dialect = "mysql"
//! write_dialect = "postgresql"
//! format = "text"
//! ```
//!
//! # Exit Codes
//!
//! - `0` - Success (including empty input)
//! - `1` - Failure (malformed SQL, unknown dialect, I/O error)
//!
//! # Output Formats
//!
//! - `text` - The bare SQL, one statement per line (default)
//! - `json` - Structured report with dialects and statements
//! - `yaml` - YAML form of the same report
//!
//! # Modules
//!
//! - [`sql_query_transpiler::transpile`] - Library-forwarding operations
//! - [`sql_query_transpiler::dialect`] - Dialect name mapping
//! - [`sql_query_transpiler::app`] - Command runners
//! - [`sql_query_transpiler::config`] - Configuration loading
//! - [`sql_query_transpiler::output`] - Result formatting
//! - [`sql_query_transpiler::error`] - Error types and constructors

use std::process;

use clap::Parser;
use sql_query_transpiler::{
    app::{OptimizeParams, TranspileParams, run_optimize, run_transpile},
    cli::{Cli, Commands},
    config::Config,
    error::AppResult
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let output = match cli.command {
        Commands::Transpile {
            sql,
            read,
            write,
            output_format,
            verbose,
            no_color
        } => run_transpile(
            TranspileParams {
                sql,
                read,
                write,
                output_format,
                verbose,
                no_color
            },
            config
        )?,
        Commands::Optimize {
            sql,
            dialect,
            output_format,
            verbose,
            no_color
        } => run_optimize(
            OptimizeParams {
                sql,
                dialect,
                output_format,
                verbose,
                no_color
            },
            config
        )?
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(0)
}

//! Application logic for the SQL Query Transpiler CLI.
//!
//! This module contains the core application logic separated from the main
//! entry point to enable testing.

use std::io::{self, Read};

use crate::{
    cli::{Dialect, Format},
    config::Config,
    dialect::SqlDialect,
    error::{AppResult, config_error, stdin_read_error, unknown_dialect_error},
    output::{OutputFormat, OutputOptions, RewriteReport, format_report},
    transpile::{optimize, transpile}
};

/// Parameters for the transpile command
#[derive(Debug, Clone)]
pub struct TranspileParams {
    pub sql:           String,
    pub read:          Option<Dialect>,
    pub write:         Option<Dialect>,
    pub output_format: Option<Format>,
    pub verbose:       bool,
    pub no_color:      bool
}

/// Parameters for the optimize command
#[derive(Debug, Clone)]
pub struct OptimizeParams {
    pub sql:           String,
    pub dialect:       Option<Dialect>,
    pub output_format: Option<Format>,
    pub verbose:       bool,
    pub no_color:      bool
}

/// Convert CLI dialect to internal SqlDialect
pub fn convert_dialect(dialect: Dialect) -> SqlDialect {
    match dialect {
        Dialect::Generic => SqlDialect::Generic,
        Dialect::Ansi => SqlDialect::Ansi,
        Dialect::Mysql => SqlDialect::MySQL,
        Dialect::Postgresql => SqlDialect::PostgreSQL,
        Dialect::Sqlite => SqlDialect::SQLite,
        Dialect::Clickhouse => SqlDialect::ClickHouse,
        Dialect::Duckdb => SqlDialect::DuckDB,
        Dialect::Snowflake => SqlDialect::Snowflake,
        Dialect::Bigquery => SqlDialect::BigQuery,
        Dialect::Redshift => SqlDialect::Redshift,
        Dialect::Hive => SqlDialect::Hive,
        Dialect::Mssql => SqlDialect::MsSQL
    }
}

/// Convert CLI format to internal OutputFormat
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}

/// Read SQL from the positional argument or stdin
pub fn read_sql_input(arg: &str) -> AppResult<String> {
    if arg == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(stdin_read_error)?;
        Ok(buffer)
    } else {
        Ok(arg.to_string())
    }
}

/// Resolve the effective dialect from CLI flag, config value and fallback
pub fn get_effective_dialect(
    cli: Option<Dialect>,
    config_name: Option<&str>,
    fallback: SqlDialect
) -> AppResult<SqlDialect> {
    if let Some(dialect) = cli {
        return Ok(convert_dialect(dialect));
    }
    match config_name {
        Some(name) => SqlDialect::from_name(name).ok_or_else(|| unknown_dialect_error(name)),
        None => Ok(fallback)
    }
}

/// Resolve the effective output format from CLI flag and config value
pub fn get_effective_format(
    cli: Option<Format>,
    config_name: Option<&str>
) -> AppResult<OutputFormat> {
    if let Some(format) = cli {
        return Ok(convert_format(format));
    }
    match config_name {
        Some(name) => OutputFormat::from_name(name)
            .ok_or_else(|| config_error(format!("Unknown output format '{}'", name))),
        None => Ok(OutputFormat::default())
    }
}

/// Create output options from parameters
pub fn create_output_options(format: OutputFormat, no_color: bool, verbose: bool) -> OutputOptions {
    OutputOptions {
        format,
        colored: !no_color,
        verbose
    }
}

/// Run the transpile command, returning the formatted output
pub fn run_transpile(params: TranspileParams, config: Config) -> AppResult<String> {
    let sql = read_sql_input(&params.sql)?;
    let read = get_effective_dialect(
        params.read,
        config.defaults.read_dialect.as_deref(),
        SqlDialect::Generic
    )?;
    let write =
        get_effective_dialect(params.write, config.defaults.write_dialect.as_deref(), read)?;
    let format = get_effective_format(params.output_format, config.defaults.format.as_deref())?;
    let opts = create_output_options(format, params.no_color, params.verbose);
    let statements = transpile(&sql, read)?;
    let report = RewriteReport {
        read_dialect: read,
        write_dialect: write,
        statements
    };
    Ok(format_report(&report, &opts))
}

/// Run the optimize command, returning the formatted output
pub fn run_optimize(params: OptimizeParams, config: Config) -> AppResult<String> {
    let sql = read_sql_input(&params.sql)?;
    let dialect = get_effective_dialect(
        params.dialect,
        config.defaults.dialect.as_deref(),
        SqlDialect::Generic
    )?;
    let format = get_effective_format(params.output_format, config.defaults.format.as_deref())?;
    let opts = create_output_options(format, params.no_color, params.verbose);
    let statements = optimize(&sql, dialect)?;
    let report = RewriteReport {
        read_dialect: dialect,
        write_dialect: dialect,
        statements
    };
    Ok(format_report(&report, &opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_dialect_generic() {
        assert!(matches!(
            convert_dialect(Dialect::Generic),
            SqlDialect::Generic
        ));
    }

    #[test]
    fn test_convert_dialect_mysql() {
        assert!(matches!(convert_dialect(Dialect::Mysql), SqlDialect::MySQL));
    }

    #[test]
    fn test_convert_dialect_postgresql() {
        assert!(matches!(
            convert_dialect(Dialect::Postgresql),
            SqlDialect::PostgreSQL
        ));
    }

    #[test]
    fn test_convert_dialect_sqlite() {
        assert!(matches!(
            convert_dialect(Dialect::Sqlite),
            SqlDialect::SQLite
        ));
    }

    #[test]
    fn test_convert_dialect_clickhouse() {
        assert!(matches!(
            convert_dialect(Dialect::Clickhouse),
            SqlDialect::ClickHouse
        ));
    }

    #[test]
    fn test_convert_dialect_duckdb() {
        assert!(matches!(
            convert_dialect(Dialect::Duckdb),
            SqlDialect::DuckDB
        ));
    }

    #[test]
    fn test_convert_dialect_snowflake() {
        assert!(matches!(
            convert_dialect(Dialect::Snowflake),
            SqlDialect::Snowflake
        ));
    }

    #[test]
    fn test_convert_dialect_bigquery() {
        assert!(matches!(
            convert_dialect(Dialect::Bigquery),
            SqlDialect::BigQuery
        ));
    }

    #[test]
    fn test_convert_dialect_mssql() {
        assert!(matches!(convert_dialect(Dialect::Mssql), SqlDialect::MsSQL));
    }

    #[test]
    fn test_convert_format_text() {
        assert!(matches!(convert_format(Format::Text), OutputFormat::Text));
    }

    #[test]
    fn test_convert_format_json() {
        assert!(matches!(convert_format(Format::Json), OutputFormat::Json));
    }

    #[test]
    fn test_convert_format_yaml() {
        assert!(matches!(convert_format(Format::Yaml), OutputFormat::Yaml));
    }

    #[test]
    fn test_read_sql_input_literal() {
        let sql = read_sql_input("SELECT 1").unwrap();
        assert_eq!(sql, "SELECT 1");
    }

    #[test]
    fn test_get_effective_dialect_explicit() {
        let dialect =
            get_effective_dialect(Some(Dialect::Mysql), Some("sqlite"), SqlDialect::Generic)
                .unwrap();
        assert_eq!(dialect, SqlDialect::MySQL);
    }

    #[test]
    fn test_get_effective_dialect_from_config() {
        let dialect = get_effective_dialect(None, Some("sqlite"), SqlDialect::Generic).unwrap();
        assert_eq!(dialect, SqlDialect::SQLite);
    }

    #[test]
    fn test_get_effective_dialect_fallback() {
        let dialect = get_effective_dialect(None, None, SqlDialect::PostgreSQL).unwrap();
        assert_eq!(dialect, SqlDialect::PostgreSQL);
    }

    #[test]
    fn test_get_effective_dialect_unknown_config_name() {
        let result = get_effective_dialect(None, Some("oracle9i"), SqlDialect::Generic);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_effective_format_explicit() {
        let format = get_effective_format(Some(Format::Json), Some("yaml")).unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_get_effective_format_from_config() {
        let format = get_effective_format(None, Some("yaml")).unwrap();
        assert_eq!(format, OutputFormat::Yaml);
    }

    #[test]
    fn test_get_effective_format_default() {
        let format = get_effective_format(None, None).unwrap();
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_get_effective_format_unknown_config_name() {
        let result = get_effective_format(None, Some("sarif"));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_output_options_colored() {
        let opts = create_output_options(OutputFormat::Text, false, true);
        assert!(matches!(opts.format, OutputFormat::Text));
        assert!(opts.colored);
        assert!(opts.verbose);
    }

    #[test]
    fn test_create_output_options_no_color() {
        let opts = create_output_options(OutputFormat::Json, true, false);
        assert!(matches!(opts.format, OutputFormat::Json));
        assert!(!opts.colored);
        assert!(!opts.verbose);
    }

    #[test]
    fn test_run_transpile_basic() {
        let params = TranspileParams {
            sql:           "select id from users".to_string(),
            read:          None,
            write:         None,
            output_format: None,
            verbose:       false,
            no_color:      true
        };
        let output = run_transpile(params, Config::default()).unwrap();
        assert_eq!(output, "SELECT id FROM users");
    }

    #[test]
    fn test_run_transpile_invalid_sql() {
        let params = TranspileParams {
            sql:           "SELECT FROM WHERE".to_string(),
            read:          None,
            write:         None,
            output_format: None,
            verbose:       false,
            no_color:      true
        };
        assert!(run_transpile(params, Config::default()).is_err());
    }

    #[test]
    fn test_run_optimize_basic() {
        let params = OptimizeParams {
            sql:           "select   1".to_string(),
            dialect:       None,
            output_format: None,
            verbose:       false,
            no_color:      true
        };
        let output = run_optimize(params, Config::default()).unwrap();
        assert_eq!(output, "SELECT 1");
    }

    #[test]
    fn test_run_transpile_json_format() {
        let params = TranspileParams {
            sql:           "SELECT 1".to_string(),
            read:          Some(Dialect::Mysql),
            write:         Some(Dialect::Postgresql),
            output_format: Some(Format::Json),
            verbose:       false,
            no_color:      true
        };
        let output = run_transpile(params, Config::default()).unwrap();
        assert!(output.contains("\"read_dialect\": \"mysql\""));
        assert!(output.contains("\"write_dialect\": \"postgresql\""));
    }

    #[test]
    fn test_run_transpile_write_defaults_to_read() {
        let params = TranspileParams {
            sql:           "SELECT 1".to_string(),
            read:          Some(Dialect::Sqlite),
            write:         None,
            output_format: Some(Format::Json),
            verbose:       false,
            no_color:      true
        };
        let output = run_transpile(params, Config::default()).unwrap();
        assert!(output.contains("\"write_dialect\": \"sqlite\""));
    }

    #[test]
    fn test_run_transpile_config_defaults() {
        let mut config = Config::default();
        config.defaults.read_dialect = Some("mysql".to_string());
        config.defaults.format = Some("json".to_string());
        let params = TranspileParams {
            sql:           "SELECT `a` FROM `t`".to_string(),
            read:          None,
            write:         None,
            output_format: None,
            verbose:       false,
            no_color:      true
        };
        let output = run_transpile(params, config).unwrap();
        assert!(output.contains("\"read_dialect\": \"mysql\""));
    }

    #[test]
    fn test_transpile_params_debug() {
        let params = TranspileParams {
            sql:           "SELECT 1".to_string(),
            read:          None,
            write:         None,
            output_format: None,
            verbose:       false,
            no_color:      false
        };
        let debug = format!("{:?}", params);
        assert!(debug.contains("TranspileParams"));
    }

    #[test]
    fn test_optimize_params_clone() {
        let params = OptimizeParams {
            sql:           "SELECT 1".to_string(),
            dialect:       Some(Dialect::Generic),
            output_format: None,
            verbose:       false,
            no_color:      false
        };
        let cloned = params.clone();
        assert_eq!(cloned.sql, params.sql);
    }
}

//! SQL dialect selection.
//!
//! Maps the user-facing dialect names onto the `sqlparser` dialect
//! implementations that drive parsing.

use std::fmt;

use serde::Serialize;
use sqlparser::dialect::{
    AnsiDialect, BigQueryDialect, ClickHouseDialect, Dialect, DuckDbDialect, GenericDialect,
    HiveDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect, RedshiftSqlDialect,
    SQLiteDialect, SnowflakeDialect
};

/// SQL dialect for parsing and emission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum SqlDialect {
    #[default]
    Generic,
    Ansi,
    MySQL,
    PostgreSQL,
    SQLite,
    ClickHouse,
    DuckDB,
    Snowflake,
    BigQuery,
    Redshift,
    Hive,
    MsSQL
}

impl SqlDialect {
    /// Convert to sqlparser dialect for parsing
    pub fn into_parser_dialect(self) -> Box<dyn Dialect> {
        match self {
            Self::Generic => Box::new(GenericDialect {}),
            Self::Ansi => Box::new(AnsiDialect {}),
            Self::MySQL => Box::new(MySqlDialect {}),
            Self::PostgreSQL => Box::new(PostgreSqlDialect {}),
            Self::SQLite => Box::new(SQLiteDialect {}),
            Self::ClickHouse => Box::new(ClickHouseDialect {}),
            Self::DuckDB => Box::new(DuckDbDialect {}),
            Self::Snowflake => Box::new(SnowflakeDialect {}),
            Self::BigQuery => Box::new(BigQueryDialect {}),
            Self::Redshift => Box::new(RedshiftSqlDialect {}),
            Self::Hive => Box::new(HiveDialect {}),
            Self::MsSQL => Box::new(MsSqlDialect {})
        }
    }

    /// Canonical lowercase name, as accepted in config files
    pub fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Ansi => "ansi",
            Self::MySQL => "mysql",
            Self::PostgreSQL => "postgresql",
            Self::SQLite => "sqlite",
            Self::ClickHouse => "clickhouse",
            Self::DuckDB => "duckdb",
            Self::Snowflake => "snowflake",
            Self::BigQuery => "bigquery",
            Self::Redshift => "redshift",
            Self::Hive => "hive",
            Self::MsSQL => "mssql"
        }
    }

    /// Parse a dialect name from a config file or environment variable
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase();
        let dialect = match normalized.as_str() {
            "generic" => Self::Generic,
            "ansi" => Self::Ansi,
            "mysql" => Self::MySQL,
            "postgresql" | "postgres" => Self::PostgreSQL,
            "sqlite" => Self::SQLite,
            "clickhouse" => Self::ClickHouse,
            "duckdb" => Self::DuckDB,
            "snowflake" => Self::Snowflake,
            "bigquery" => Self::BigQuery,
            "redshift" => Self::Redshift,
            "hive" => Self::Hive,
            "mssql" => Self::MsSQL,
            _ => return None
        };
        Some(dialect)
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

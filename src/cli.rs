use clap::{Parser, Subcommand, ValueEnum};

/// SQL Query Transpiler - Transpile and rewrite SQL queries between dialects
#[derive(Parser, Debug)]
#[command(name = "sql-query-transpiler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transpile a SQL query from one dialect to another
    Transpile {
        /// SQL text to transpile (use - for stdin)
        sql: String,

        /// Dialect used to parse the input
        #[arg(short, long, value_enum, env = "SQL_TRANSPILER_READ_DIALECT")]
        read: Option<Dialect>,

        /// Dialect the emitted SQL is addressed to
        #[arg(short, long, value_enum, env = "SQL_TRANSPILER_WRITE_DIALECT")]
        write: Option<Dialect>,

        /// Output format
        #[arg(short = 'f', long, value_enum, env = "SQL_TRANSPILER_FORMAT")]
        output_format: Option<Format>,

        /// Show a per-statement breakdown in text output
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },

    /// Rewrite a SQL query into the library's canonical form
    Optimize {
        /// SQL text to rewrite (use - for stdin)
        sql: String,

        /// Dialect used to parse and emit the query
        #[arg(short, long, value_enum, env = "SQL_TRANSPILER_DIALECT")]
        dialect: Option<Dialect>,

        /// Output format
        #[arg(short = 'f', long, value_enum, env = "SQL_TRANSPILER_FORMAT")]
        output_format: Option<Format>,

        /// Show a per-statement breakdown in text output
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dialect {
    Generic,
    Ansi,
    Mysql,
    Postgresql,
    Sqlite,
    Clickhouse,
    Duckdb,
    Snowflake,
    Bigquery,
    Redshift,
    Hive,
    Mssql
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}

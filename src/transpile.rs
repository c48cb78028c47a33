//! Library-forwarding transpile and rewrite operations.
//!
//! Everything here is a thin front over the `sqlparser` crate: the
//! input is parsed with the source dialect and each statement is
//! re-emitted through the AST's canonical `Display` rendering. No SQL
//! rewriting logic lives in this crate.

use rayon::prelude::*;
use sqlparser::{ast::Statement, parser::Parser};

use crate::{
    dialect::SqlDialect,
    error::{AppResult, query_parse_error}
};

/// Parse SQL into statements with the given dialect
pub fn parse_statements(sql: &str, dialect: SqlDialect) -> AppResult<Vec<Statement>> {
    let parser_dialect = dialect.into_parser_dialect();
    Parser::parse_sql(parser_dialect.as_ref(), sql).map_err(|e| query_parse_error(e.to_string()))
}

/// Transpile SQL parsed with `read` into the library's canonical form
///
/// Returns one rendered string per input statement. Statements are
/// rendered in parallel and returned in input order.
pub fn transpile(sql: &str, read: SqlDialect) -> AppResult<Vec<String>> {
    let statements = parse_statements(sql, read)?;
    Ok(render_statements(statements))
}

/// Rewrite SQL into normalized form via a parse and re-emit cycle
///
/// Keyword case, whitespace and punctuation come out in the library's
/// canonical style. Identifier quoting from the source text is
/// preserved by the parser and survives the rewrite.
pub fn optimize(sql: &str, dialect: SqlDialect) -> AppResult<Vec<String>> {
    transpile(sql, dialect)
}

fn render_statements(statements: Vec<Statement>) -> Vec<String> {
    statements
        .into_par_iter()
        .map(|stmt| stmt.to_string())
        .collect()
}

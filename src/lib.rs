//! # SQL Query Transpiler Library
//!
//! Dialect-aware SQL transpilation and rewriting on top of `sqlparser`.

pub mod app;
pub mod cli;
pub mod config;
pub mod dialect;
pub mod error;
pub mod output;
pub mod transpile;

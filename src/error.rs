//! Error types for sdb
//!
//! Every failure a user can trigger from the shell is a value here; the
//! display strings are the exact lines the shell prints.

use thiserror::Error;

// -----------------------------------------------------------------------------
// Statement compilation
// -----------------------------------------------------------------------------

/// Why a line could not be turned into a [`Statement`](crate::Statement).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrepareError {
    #[error("Syntax error could not parse the syntax")]
    SyntaxError,

    #[error("ID must be positive.")]
    NegativeId,

    #[error("String is too long.")]
    StringTooLong,

    #[error("Unrecognized keyword at the start of '{0}'.")]
    UnrecognizedStatement(String),
}

// -----------------------------------------------------------------------------
// Execution
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    #[error("Error: Table full.")]
    TableFull,
}

// -----------------------------------------------------------------------------
// Meta-commands
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaCommandError {
    #[error("Unrecognized command '{0}'.")]
    UnrecognizedCommand(String),
}

/// Anything the dispatcher reports back for a single line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Meta(#[from] MetaCommandError),

    #[error(transparent)]
    Prepare(#[from] PrepareError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

// -----------------------------------------------------------------------------
// Configuration
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("page size of {page_size} bytes cannot hold a {row_size}-byte row")]
    PageTooSmall { page_size: usize, row_size: usize },

    #[error("page size of {page_size} bytes exceeds the {limit}-byte limit")]
    PageTooLarge { page_size: usize, limit: usize },

    #[error("a table needs at least one page")]
    NoPages,

    #[error("{max_pages} pages exceeds the limit of {limit}")]
    TooManyPages { max_pages: usize, limit: usize },

    #[error("{max_pages} pages of {rows_per_page} rows overflows the row count")]
    CapacityOverflow {
        rows_per_page: usize,
        max_pages: usize,
    },
}

// -----------------------------------------------------------------------------
// Shell I/O
// -----------------------------------------------------------------------------

/// Fatal errors that end the shell loop.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("Error reading input")]
    Input(#[source] std::io::Error),

    #[error("Error reading input")]
    EndOfInput,

    #[error("Error writing output: {0}")]
    Output(#[from] std::io::Error),
}

//! Routes each input line to meta-command handling or to the
//! compile/execute pipeline.

use tracing::debug;

use crate::error::{CommandError, MetaCommandError};
use crate::executor;
use crate::row::Row;
use crate::statement::Statement;
use crate::table::Table;

// Non-SQL statements like .exit are called “meta-commands”.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetaCommand {
    Exit,
}

impl MetaCommand {
    fn parse(input: &str) -> Result<MetaCommand, MetaCommandError> {
        match input {
            ".exit" => Ok(MetaCommand::Exit),
            _ => Err(MetaCommandError::UnrecognizedCommand(input.to_string())),
        }
    }
}

enum InputType<'a> {
    Meta(&'a str),
    Statement(&'a str),
}

impl<'a> InputType<'a> {
    fn parse(input: &'a str) -> InputType<'a> {
        if input.starts_with('.') {
            InputType::Meta(input)
        } else {
            InputType::Statement(input)
        }
    }
}

/// What the shell should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The statement ran; `rows` holds anything it selected.
    Executed { rows: Vec<Row> },
    /// The line was rejected; the table is untouched.
    Failed(CommandError),
    /// Stop reading input and release the table.
    Terminate,
}

/// Owns the table for the lifetime of a shell session.
#[derive(Debug, Default)]
pub struct Dispatcher {
    table: Table,
}

impl Dispatcher {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn dispatch(&mut self, input: &str) -> Outcome {
        match InputType::parse(input) {
            InputType::Meta(command) => match MetaCommand::parse(command) {
                Ok(MetaCommand::Exit) => Outcome::Terminate,
                Err(err) => Outcome::Failed(err.into()),
            },
            InputType::Statement(text) => match self.run_statement(text) {
                Ok(rows) => Outcome::Executed { rows },
                Err(err) => Outcome::Failed(err),
            },
        }
    }

    fn run_statement(&mut self, text: &str) -> Result<Vec<Row>, CommandError> {
        let statement = Statement::prepare(text)?;
        debug!(?statement, "executing");

        let mut rows = Vec::new();
        executor::execute(&statement, &mut self.table, |row| rows.push(row))?;
        Ok(rows)
    }

    /// Consumes the dispatcher and releases the table.
    pub fn shutdown(self) {
        self.table.close();
    }
}

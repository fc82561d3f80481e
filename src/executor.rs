//! Applies compiled statements to a [`Table`].

use tracing::warn;

use crate::error::ExecuteError;
use crate::row::Row;
use crate::statement::Statement;
use crate::table::Table;

/// Runs `statement` against `table`. Rows produced by a select are handed
/// to `emit` in insertion order.
pub fn execute(
    statement: &Statement,
    table: &mut Table,
    emit: impl FnMut(Row),
) -> Result<(), ExecuteError> {
    match statement {
        Statement::Insert(row) => execute_insert(row, table),
        Statement::Select => {
            execute_select(table, emit);
            Ok(())
        }
    }
}

fn execute_insert(row: &Row, table: &mut Table) -> Result<(), ExecuteError> {
    if table.is_full() {
        warn!(capacity = table.capacity(), "insert rejected, table full");
        return Err(ExecuteError::TableFull);
    }

    let slot = table.append_slot().ok_or(ExecuteError::TableFull)?;
    row.encode(slot);
    table.commit_append();
    Ok(())
}

fn execute_select(table: &Table, emit: impl FnMut(Row)) {
    table.rows().for_each(emit);
}

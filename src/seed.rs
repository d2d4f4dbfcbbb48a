use std::path::Path;

use rusqlite::{params, Connection};

use crate::catalog::{CardRow, SEED_COLUMNS};

/// Apply seed rows to a SQLite database, creating the table if needed.
/// A primary-key collision (re-running against a seeded table) is an
/// error and aborts the run.
pub(crate) fn apply_rows(path: &Path, table: &str, rows: &[CardRow]) -> Result<(), String> {
    let conn =
        Connection::open(path).map_err(|e| format!("open {}: {e}", path.display()))?;
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            elixir_cost INTEGER NOT NULL,
            image_url TEXT NOT NULL,
            elo INTEGER NOT NULL,
            wins INTEGER NOT NULL,
            losses INTEGER NOT NULL,
            draws INTEGER NOT NULL
        )"
    ))
    .map_err(|e| format!("create table {table}: {e}"))?;

    let mut stmt = conn
        .prepare(&format!(
            "INSERT INTO {table} ({SEED_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
        ))
        .map_err(|e| format!("prepare insert: {e}"))?;
    for row in rows {
        stmt.execute(params![
            row.id,
            row.name,
            row.elixir_cost,
            row.image_url,
            row.elo,
            row.wins,
            row.losses,
            row.draws
        ])
        .map_err(|e| format!("insert row {}: {e}", row.id))?;
    }
    Ok(())
}

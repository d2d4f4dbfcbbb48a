//! Card catalog → seed rows.
//!
//! One base row per catalog entry, plus one evolution row when the entry
//! has `maxEvolutionLevel > 0`. Row ids are assigned in emission order
//! starting at 0, derived from the number of rows already emitted.

use chrono::Utc;
use serde::Deserialize;

pub(crate) const EVOLUTION_SUFFIX: &str = " Evolution";
pub(crate) const INITIAL_ELO: i64 = 1000;

pub(crate) const SEED_COLUMNS: &str = "id, name, elixir_cost, image_url, elo, wins, losses, draws";

#[derive(Debug, Deserialize)]
pub(crate) struct CardCatalog {
    pub(crate) items: Vec<CardRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CardRecord {
    pub(crate) name: String,
    pub(crate) elixir_cost: u32,
    pub(crate) icon_urls: IconUrls,
    #[serde(default)]
    pub(crate) max_evolution_level: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IconUrls {
    pub(crate) medium: String,
    #[serde(default)]
    pub(crate) evolution_medium: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CardRow {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) elixir_cost: u32,
    pub(crate) image_url: String,
    pub(crate) elo: i64,
    pub(crate) wins: i64,
    pub(crate) losses: i64,
    pub(crate) draws: i64,
}

impl CardRow {
    fn seeded(id: i64, name: String, elixir_cost: u32, image_url: String) -> Self {
        Self {
            id,
            name,
            elixir_cost,
            image_url,
            elo: INITIAL_ELO,
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }
}

/// Expand catalog records into seed rows, in input order. Any malformed
/// record aborts the whole expansion; there is no partial output.
pub(crate) fn expand_rows(records: &[CardRecord]) -> Result<Vec<CardRow>, String> {
    let mut rows: Vec<CardRow> = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(format!("record {idx} has an empty name"));
        }
        rows.push(CardRow::seeded(
            rows.len() as i64,
            record.name.clone(),
            record.elixir_cost,
            record.icon_urls.medium.clone(),
        ));
        if record.max_evolution_level > 0 {
            let Some(evolution_url) = record.icon_urls.evolution_medium.clone() else {
                return Err(format!(
                    "card '{}' has an evolution level but no evolution artwork",
                    record.name
                ));
            };
            rows.push(CardRow::seeded(
                rows.len() as i64,
                format!("{}{EVOLUTION_SUFFIX}", record.name),
                record.elixir_cost,
                evolution_url,
            ));
        }
    }
    Ok(rows)
}

/// Render one insert statement. String values are single-quoted and
/// emitted as-is; catalog names and artwork URLs never carry quotes.
pub(crate) fn render_statement(row: &CardRow, table: &str) -> String {
    format!(
        "INSERT INTO {table} ({SEED_COLUMNS})\nVALUES ({}, '{}', {}, '{}', {}, {}, {}, {});",
        row.id,
        row.name,
        row.elixir_cost,
        row.image_url,
        row.elo,
        row.wins,
        row.losses,
        row.draws
    )
}

pub(crate) fn render_script(rows: &[CardRow], table: &str) -> String {
    let mut out = format!(
        "-- {} seed rows for `{table}`, generated {}\n",
        rows.len(),
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    for row in rows {
        out.push_str(&render_statement(row, table));
        out.push('\n');
    }
    out
}

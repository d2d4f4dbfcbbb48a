mod catalog;
mod cli;
mod config;
mod royale;
mod seed;
mod util;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use catalog::{expand_rows, render_script, CardCatalog};
use cli::{Cli, Command, ConfigCommand};
use config::{config_file_path, load_file_config, resolve_base_url, save_file_config};
use royale::{build_client, FetchError};
use seed::apply_rows;
use util::{default_output, write_pretty_json};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Export {
            input,
            out,
            table,
            apply,
            json,
        } => {
            if !input.exists() {
                eprintln!("Input does not exist: {}", input.display());
                std::process::exit(2);
            }
            let raw = fs::read_to_string(&input)?;
            let catalog: CardCatalog = serde_json::from_str(&raw)?;
            let rows = expand_rows(&catalog.items)?;
            let evolutions = rows.len() - catalog.items.len();

            if out.is_none() && apply.is_none() {
                print!("{}", render_script(&rows, &table));
                return Ok(());
            }
            if let Some(path) = &out {
                fs::write(path, render_script(&rows, &table))?;
            }
            if let Some(db) = &apply {
                apply_rows(db, &table, &rows)?;
            }

            if json {
                let summary = serde_json::json!({
                    "records": catalog.items.len(),
                    "rows": rows.len(),
                    "evolutions": evolutions,
                    "out": out.as_ref().map(|p| p.display().to_string()),
                    "applied": apply.as_ref().map(|p| p.display().to_string()),
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "Exported {} rows from {} records ({evolutions} evolutions)",
                    rows.len(),
                    catalog.items.len()
                );
                if let Some(path) = &out {
                    println!("Wrote {}", path.display());
                }
                if let Some(db) = &apply {
                    println!("Applied to {}", db.display());
                }
            }
            Ok(())
        }

        Command::Cards { out, token, config } => {
            let client = build_client(token, config)?;
            let out = out.unwrap_or_else(|| PathBuf::from("cards.json"));
            save_fetch(client.cards(), &out, "Card catalog")
        }

        Command::Player {
            tag,
            out,
            token,
            config,
        } => {
            let client = build_client(token, config)?;
            let out = out.unwrap_or_else(|| default_output("player", &tag));
            save_fetch(client.player(&tag), &out, "Player info")
        }

        Command::Battlelog {
            tag,
            out,
            token,
            config,
        } => {
            let client = build_client(token, config)?;
            let out = out.unwrap_or_else(|| default_output("battlelog", &tag));
            save_fetch(client.battle_log(&tag), &out, "Battle log")
        }

        Command::Config { config, command } => {
            let path = config_file_path(config);
            match command {
                ConfigCommand::Set { token, base_url } => {
                    if token.is_none() && base_url.is_none() {
                        return Err("config set requires --token or --base-url".into());
                    }
                    let mut file = load_file_config(&path);
                    if let Some(token) = token {
                        file.token = Some(token);
                    }
                    if let Some(base_url) = base_url {
                        file.base_url = Some(base_url);
                    }
                    save_file_config(&path, &file)?;
                    println!("Stored config at {}", path.display());
                    Ok(())
                }
                ConfigCommand::Show { json } => {
                    let file = load_file_config(&path);
                    let token_set = file.token.as_deref().is_some_and(|t| !t.trim().is_empty());
                    if json {
                        let payload = serde_json::json!({
                            "path": path.display().to_string(),
                            "token_set": token_set,
                            "base_url": resolve_base_url(&file),
                        });
                        println!("{}", serde_json::to_string_pretty(&payload)?);
                    } else {
                        println!("config: {}", path.display());
                        println!("token: {}", if token_set { "set" } else { "unset" });
                        println!("base_url: {}", resolve_base_url(&file));
                    }
                    Ok(())
                }
            }
        }
    }
}

/// Persist a successful fetch, or report the failure and end the run
/// without writing anything.
fn save_fetch(
    result: Result<serde_json::Value, FetchError>,
    out: &Path,
    what: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match result {
        Ok(value) => {
            write_pretty_json(out, &value)?;
            println!("{what} saved to {}", out.display());
            Ok(())
        }
        Err(FetchError::Api(failure)) => {
            eprintln!("Error: {}", failure.error);
            if !failure.message.is_empty() {
                eprintln!("{}", failure.message);
            }
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

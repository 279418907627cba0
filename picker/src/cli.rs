//! Command-line interface of the `picker` binary.

use crate::modal::{ModalContent, RowView};
use clap::Parser;
use lib_core::{AppError, MarketSnapshot, Result};
use shared::dto::token::MarketSnapshotDto;
use shared::utils::truncate_address;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "picker")]
#[command(version)]
#[command(about = "Rank, filter and format a token list the way the token picker shows it")]
pub struct Args {
    /// Market snapshot JSON file (tokens, balances, usd_price)
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Search text or token address
    #[arg(short, long)]
    pub query: Option<String>,

    /// Connected account; balances still loading show as pending instead of "-"
    #[arg(short, long)]
    pub account: Option<String>,

    /// Print the rows as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parse a snapshot document.
pub fn parse_snapshot(json: &str) -> Result<MarketSnapshot> {
    let dto: MarketSnapshotDto = serde_json::from_str(json)?;
    Ok(MarketSnapshot::from(dto))
}

/// Read and parse a snapshot file. Only a missing file is `NotFound`.
pub fn load_snapshot(path: &Path) -> Result<MarketSnapshot> {
    let json = fs::read_to_string(path).map_err(|e| {
        let message = format!("Snapshot file {}: {}", path.display(), e);
        match e.kind() {
            ErrorKind::NotFound => AppError::NotFound(message),
            _ => AppError::InvalidInput(message),
        }
    })?;
    parse_snapshot(&json)
}

/// Plain-text table of the modal content.
pub fn render_table(content: &ModalContent) -> String {
    let rows = match content {
        ModalContent::Rows(rows) => rows,
        ModalContent::Empty(message) => return message.clone(),
    };

    // Widths in chars; `{:<w$}` pads by char count
    let symbol_width = rows.iter().map(|r| r.symbol.chars().count()).max().unwrap_or(0);
    let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);

    rows.iter()
        .map(|row: &RowView| {
            format!(
                "{:<sw$}  {:<nw$}  {:<13}  {:>20}  {}",
                row.symbol,
                row.name,
                truncate_address(&row.address),
                row.balance.text(),
                row.usd,
                sw = symbol_width,
                nw = name_width,
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

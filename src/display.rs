//! Rendering of ledger snapshots for the terminal session.

use crate::blockchain::BlockView;
use crate::config::OutputFormat;
use crate::error::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Color as TableColor;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

/// Truncates a digest to `width` characters (not bytes) with a trailing ellipsis.
/// A width of 0, or one covering the whole string, leaves it intact.
pub fn short_hash(hash: &str, width: usize) -> String {
    match hash.char_indices().nth(width) {
        Some((cut, _)) if width > 0 => format!("{}...", &hash[..cut]),
        _ => hash.to_string(),
    }
}

pub fn render(blocks: &[BlockView], format: OutputFormat, hash_width: usize) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(blocks, hash_width)),
        OutputFormat::Json => render_json(blocks),
    }
}

pub fn render_table(blocks: &[BlockView], hash_width: usize) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Block")
                .fg(TableColor::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new("Previous Hash")
                .fg(TableColor::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new("Block Hash")
                .fg(TableColor::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new("Transactions")
                .fg(TableColor::Cyan)
                .add_attribute(Attribute::Bold),
        ]);

    for block in blocks {
        let transactions = if block.transactions.is_empty() {
            "(genesis)".to_string()
        } else {
            block
                .transactions
                .iter()
                .map(|tx| format!("{} -> {}: {}", tx.sender, tx.recipient, tx.amount))
                .collect::<Vec<_>>()
                .join("\n")
        };

        table.add_row(vec![
            Cell::new(format!("#{}", block.index)).fg(TableColor::White),
            Cell::new(short_hash(&block.previous_hash, hash_width)).fg(TableColor::Grey),
            Cell::new(short_hash(&block.hash, hash_width)).fg(TableColor::Green),
            Cell::new(transactions).fg(TableColor::White),
        ]);
    }

    table.to_string()
}

/// Pretty JSON array, one object per block, full digests.
pub fn render_json(blocks: &[BlockView]) -> Result<String> {
    Ok(serde_json::to_string_pretty(blocks)?)
}

//! Output formatting. Every function returns a `String` so the menu and the
//! subcommands print the same thing and tests can inspect it.

use super::styles;
use shelfapp::commands::{CmdMessage, MessageLevel};
use shelfapp::error::ShelfError;
use shelfapp::model::BookEntry;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";
const MAX_CELL_WIDTH: usize = 40;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = styles::message(message.level);
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

/// Books as an aligned table. Widths are display widths, so Cyrillic and CJK
/// titles line up.
pub fn render_books(books: &[BookEntry]) -> String {
    if books.is_empty() {
        return format!("{}\n", styles::muted().apply_to("No books."));
    }

    let headers = ["ID", "Title", "Author", "Year", "Status"];
    let rows: Vec<[String; 5]> = books
        .iter()
        .map(|entry| {
            [
                entry.id.to_string(),
                truncate_to_width(&entry.book.title, MAX_CELL_WIDTH),
                truncate_to_width(&entry.book.author, MAX_CELL_WIDTH),
                truncate_to_width(&entry.book.year, MAX_CELL_WIDTH),
                entry.book.status.to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad_to_width(h, *w))
        .collect();
    out.push_str(&format!(
        "{}\n",
        styles::header().apply_to(header_line.join(COLUMN_GAP).trim_end())
    ));

    for (row, entry) in rows.iter().zip(books) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (cell, w))| {
                let padded = pad_to_width(cell, *w);
                match i {
                    0 => styles::id().apply_to(padded).to_string(),
                    4 => styles::status(entry.book.status)
                        .apply_to(padded)
                        .to_string(),
                    _ => padded,
                }
            })
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }
    out
}

pub fn render_json(books: &[BookEntry]) -> String {
    match serde_json::to_string_pretty(books) {
        Ok(json) => format!("{}\n", json),
        Err(e) => format!("{}\n", e),
    }
}

/// One line for a failed operation. Persistence failures name the catalog
/// file, since the fix is on the operator's side.
pub fn render_error(err: &ShelfError, data_file: &Path) -> String {
    if err.is_persistence() {
        let line = format!("Error: {} (catalog: {})", err, data_file.display());
        format!("{}\n", styles::message(MessageLevel::Error).apply_to(line))
    } else {
        format!("{}\n", styles::message(MessageLevel::Warning).apply_to(err))
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

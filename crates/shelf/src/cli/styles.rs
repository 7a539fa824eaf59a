//! Semantic styles for terminal output.
//!
//! Code asks for what a piece of text *is* (a success message, a muted hint, a
//! checked-out status) and this module decides how it looks. `console` drops
//! the colors when stdout is not a terminal.

use console::Style;
use shelfapp::commands::MessageLevel;
use shelfapp::model::Status;

pub fn message(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::new().dim(),
        MessageLevel::Success => Style::new().green(),
        MessageLevel::Warning => Style::new().yellow(),
        MessageLevel::Error => Style::new().red(),
    }
}

pub fn header() -> Style {
    Style::new().bold()
}

pub fn id() -> Style {
    Style::new().yellow()
}

pub fn muted() -> Style {
    Style::new().dim()
}

pub fn status(status: Status) -> Style {
    match status {
        Status::Available => Style::new().green(),
        Status::CheckedOut => Style::new().red(),
    }
}

//! Fixed-width ticket file rendering and writing

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{LottoForgeError, Result};
use crate::types::{DrawConfig, TicketBook};

/// Render a ticket book into the ticket dump format.
///
/// The header names the columns `01`..`NN` with the same zero-padded pipe
/// cells the ticket lines use; tickets follow in canonical order, numbered
/// from 1. An empty book renders the header alone.
pub fn render_tickets(book: &TicketBook, config: &DrawConfig) -> String {
    let mut out = String::new();
    out.push_str("Generated Sets:\n");

    let labels: Vec<String> = (1..=config.picks).map(|i| format!("{:02}|", i)).collect();
    let _ = writeln!(out, "Number:\t\t\t\t{}\n", labels.join(" "));

    for (index, ticket) in book.iter().enumerate() {
        let _ = writeln!(out, "Ticket {:02}:\t\t{}", index + 1, ticket);
    }
    out
}

/// Write the rendered book to `path`, replacing any existing file.
///
/// Filesystem failures propagate with the path attached; there is no retry.
pub fn write_tickets(book: &TicketBook, config: &DrawConfig, path: &Path) -> Result<()> {
    let content = render_tickets(book, config);
    std::fs::write(path, content).map_err(|e| {
        LottoForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    tracing::debug!(tickets = book.len(), path = %path.display(), "ticket file written");
    Ok(())
}

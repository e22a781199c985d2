//! Ticket file output

pub mod writer;

pub use writer::{render_tickets, write_tickets};

//! Lotto Forge - Mark Six lottery ticket generation
//!
//! A simple and elegant CLI tool for generating lottery tickets, honoring
//! user-preferred numbers and writing the result to a formatted ticket file.

pub mod console;
pub mod draw;
pub mod error;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{LottoForgeError, Result};
pub use types::{Combination, CustomNumbers, DrawConfig, TicketBook};

// Re-export main functionality
pub use console::Prompter;
pub use draw::TicketGenerator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the ticket file, relative to the working directory
pub const OUTPUT_FILE: &str = "JACKPOT.txt";

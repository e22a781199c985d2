//! Ticket drawing: combinatorial bounds, preferred-number collection and
//! random generation

pub mod builder;
pub mod combinatorics;
pub mod generator;

pub use builder::collect_custom_numbers;
pub use combinatorics::binomial;
pub use generator::TicketGenerator;

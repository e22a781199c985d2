//! Core types and structures for lotto-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::draw::combinatorics::binomial;
use crate::error::{LottoForgeError, Result};

/// Configuration for a lottery draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Smallest number in the pool
    pub min_number: u8,
    /// Largest number in the pool
    pub max_number: u8,
    /// How many numbers make up one ticket
    pub picks: usize,
}

impl Default for DrawConfig {
    fn default() -> Self {
        // Mark Six: 6 picks out of 1-49
        Self {
            min_number: 1,
            max_number: 49,
            picks: 6,
        }
    }
}

impl DrawConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_number > self.max_number {
            return Err(LottoForgeError::config(format!(
                "Pool range is inverted: {} > {}",
                self.min_number, self.max_number
            )));
        }
        if self.picks == 0 {
            return Err(LottoForgeError::config("A ticket needs at least one pick"));
        }
        if self.picks > self.pool_size() {
            return Err(LottoForgeError::config(format!(
                "Cannot pick {} distinct numbers from a pool of {}",
                self.picks,
                self.pool_size()
            )));
        }
        Ok(())
    }

    /// Number of values in the pool
    pub fn pool_size(&self) -> usize {
        (self.max_number - self.min_number) as usize + 1
    }

    /// Check whether a number falls inside the pool
    pub fn contains(&self, number: u8) -> bool {
        (self.min_number..=self.max_number).contains(&number)
    }

    /// Combinatorial bound: how many distinct tickets can complete a seed of
    /// `fixed` pre-selected numbers. A fully fixed seed leaves exactly one.
    pub fn max_combinations(&self, fixed: usize) -> u64 {
        if fixed > self.picks || fixed > self.pool_size() {
            return 0;
        }
        binomial(
            (self.pool_size() - fixed) as u64,
            (self.picks - fixed) as u64,
        )
    }
}

/// One lottery ticket: distinct pool numbers in ascending order
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Combination {
    numbers: Vec<u8>,
}

impl Combination {
    /// Build a ticket from a full set of numbers, checked against the config
    pub fn from_set(numbers: &BTreeSet<u8>, config: &DrawConfig) -> Result<Self> {
        if numbers.len() != config.picks {
            return Err(LottoForgeError::validation(format!(
                "A ticket holds exactly {} numbers, got {}",
                config.picks,
                numbers.len()
            )));
        }
        if let Some(out_of_range) = numbers.iter().find(|n| !config.contains(**n)) {
            return Err(LottoForgeError::validation(format!(
                "Number {} is outside the pool {}-{}",
                out_of_range, config.min_number, config.max_number
            )));
        }
        // BTreeSet iteration is ascending, so the canonical order falls out here
        Ok(Self {
            numbers: numbers.iter().copied().collect(),
        })
    }

    /// The ticket's numbers in ascending order
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// Check whether the ticket holds a number
    pub fn contains(&self, number: u8) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<String> = self.numbers.iter().map(|n| format!("{:02}|", n)).collect();
        write!(f, "{}", cells.join(" "))
    }
}

/// User-preferred numbers that must appear in every generated ticket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomNumbers {
    numbers: BTreeSet<u8>,
}

impl CustomNumbers {
    /// Create an empty set of preferred numbers
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a number; returns false when it is already present
    pub fn insert(&mut self, number: u8) -> bool {
        self.numbers.insert(number)
    }

    /// Check whether a number is already preferred
    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }

    /// How many numbers are preferred
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// True when no numbers are preferred
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Iterate the preferred numbers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.numbers.iter().copied()
    }

    /// Borrow the underlying set
    pub fn as_set(&self) -> &BTreeSet<u8> {
        &self.numbers
    }

    /// Check the seed against a draw configuration
    pub fn validate(&self, config: &DrawConfig) -> Result<()> {
        if self.numbers.len() > config.picks {
            return Err(LottoForgeError::validation(format!(
                "{} preferred numbers cannot seed a {}-number ticket",
                self.numbers.len(),
                config.picks
            )));
        }
        if let Some(out_of_range) = self.numbers.iter().find(|n| !config.contains(**n)) {
            return Err(LottoForgeError::validation(format!(
                "Preferred number {} is outside the pool {}-{}",
                out_of_range, config.min_number, config.max_number
            )));
        }
        Ok(())
    }
}

impl FromIterator<u8> for CustomNumbers {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            numbers: iter.into_iter().collect(),
        }
    }
}

/// Deduplicated, canonically ordered collection of generated tickets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketBook {
    tickets: BTreeSet<Combination>,
    pub generated_at: DateTime<Utc>,
}

impl TicketBook {
    /// Create an empty book stamped with the current time
    pub fn new() -> Self {
        Self {
            tickets: BTreeSet::new(),
            generated_at: Utc::now(),
        }
    }

    /// Insert a ticket; returns false when an equal ticket is already held
    pub fn insert(&mut self, ticket: Combination) -> bool {
        self.tickets.insert(ticket)
    }

    /// Check whether an equal ticket is already held
    pub fn contains(&self, ticket: &Combination) -> bool {
        self.tickets.contains(ticket)
    }

    /// Number of distinct tickets
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// True when the book holds no tickets
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Iterate tickets in canonical (lexicographic) order
    pub fn iter(&self) -> impl Iterator<Item = &Combination> {
        self.tickets.iter()
    }
}

impl Default for TicketBook {
    fn default() -> Self {
        Self::new()
    }
}

//! Collection of user-preferred ticket numbers

use std::io::{BufRead, Write};

use crate::console::Prompter;
use crate::error::{LottoForgeError, Result};
use crate::types::{CustomNumbers, DrawConfig};

/// Collect `count` distinct preferred numbers through the prompter.
///
/// Each slot is asked for as `Number {slot}: ` bounded to the pool range. A
/// duplicate entry is reported and asked for again without advancing the
/// slot, so the prompt label repeats until a fresh number is entered.
/// `count == 0` returns an empty set without touching the input.
pub fn collect_custom_numbers<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    count: usize,
    config: &DrawConfig,
) -> Result<CustomNumbers> {
    if count > config.picks {
        return Err(LottoForgeError::validation(format!(
            "{} preferred numbers cannot seed a {}-number ticket",
            count, config.picks
        )));
    }

    let mut numbers = CustomNumbers::new();
    while numbers.len() < count {
        let prompt = format!("Number {}: ", numbers.len() + 1);
        let value = prompter.read_number(
            &prompt,
            config.min_number as u64,
            config.max_number as u64,
        )?;
        if !numbers.insert(value as u8) {
            prompter.say("Duplicate number entered. Please enter a unique number.")?;
        }
    }
    Ok(numbers)
}

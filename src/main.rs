//! Lotto Forge - Mark Six lottery ticket generation
//!
//! Interactive CLI that asks for preferred numbers, draws the requested
//! amount of unique tickets and writes them to JACKPOT.txt.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use lotto_forge::{
    draw::{collect_custom_numbers, TicketGenerator},
    output::write_tickets,
    types::DrawConfig,
    Prompter, Result, OUTPUT_FILE,
};

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = run_lotto_forge(stdin.lock(), stdout.lock()) {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Main lotto forge workflow
fn run_lotto_forge<R: BufRead, W: Write>(input: R, output: W) -> Result<()> {
    let config = DrawConfig::default();
    let mut prompter = Prompter::new(input, output);

    prompter.say("🎰 Lotto Forge - Mark Six ticket generation")?;
    prompter.say("═══════════════════════════════════════════")?;
    prompter.say("")?;

    let preferred_count = prompter.read_number(
        "How many preferred numbers do you have? ",
        0,
        config.picks as u64,
    )?;
    let custom = collect_custom_numbers(&mut prompter, preferred_count as usize, &config)?;

    let max_sets = config.max_combinations(custom.len());
    let count = prompter.read_number(
        &format!("How many sets do you want? \nMin: 0; Max: {} : ", max_sets),
        0,
        max_sets,
    )?;

    let mut generator = TicketGenerator::new(config)?;
    let book = generator.draw_book(&custom, count)?;
    write_tickets(&book, &config, Path::new(OUTPUT_FILE))?;

    prompter.say("*************************************************")?;
    prompter.say("* Numbers have been generated.\t\t\t*")?;
    prompter.say("* Please check the text file named 'JACKPOT'.\t*")?;
    prompter.say("* Thank you for using the service.\t\t*")?;
    prompter.say("*************************************************")?;

    Ok(())
}

//! Running the question table, interactively or with random answers.

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use thiserror::Error;

use super::questions::{Question, QUESTIONS};
use crate::models::Stats;

/// Errors that can occur while asking questions.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Input closed before question {0} was answered")]
    InputClosed(usize),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn print_question(out: &mut impl Write, number: usize, question: &Question) -> io::Result<()> {
    writeln!(out, "Q{}. {}", number, question.prompt)?;
    for option in question.options {
        writeln!(out, "  {}) {}", option.key, option.text)?;
    }
    Ok(())
}

/// Ask every question on `output`, reading answers from `input`.
///
/// Invalid answers re-prompt with the list of valid keys. Stats are clamped
/// after each answer.
pub fn ask_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Stats, QuizError> {
    let mut stats = Stats::new();

    writeln!(
        output,
        "\nWelcome to the Baldur's Gate 3 — Character Forge Mini-Game!"
    )?;
    writeln!(
        output,
        "Answer the prompts as your *character* (not yourself) to build unique NPCs or player avatars.\n"
    )?;

    for (idx, question) in QUESTIONS.iter().enumerate() {
        let number = idx + 1;
        print_question(output, number, question)?;

        let option = loop {
            write!(output, "Choose: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(QuizError::InputClosed(number));
            }
            if let Some(option) = question.option(&line) {
                break option;
            }
            let keys: Vec<String> = question.keys().map(String::from).collect();
            writeln!(output, "Invalid option. Pick one of: {}", keys.join(", "))?;
        };

        tracing::debug!(question = number, answer = %option.key, "Answer recorded");
        stats.apply(option.deltas);
        stats.clamp();
        writeln!(output)?;
    }

    Ok(stats)
}

/// Answer every question uniformly at random.
///
/// Stats are left unclamped; synthesis clamps them.
pub fn simulate_answers(seed: u64) -> Stats {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stats = Stats::new();
    for question in QUESTIONS {
        if let Some(option) = question.options.choose(&mut rng) {
            stats.apply(option.deltas);
        }
    }
    stats
}

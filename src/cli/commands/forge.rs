//! Character forging commands.

use std::io::{self, Write};

use console::style;
use rand::Rng;

use charforge::config::Settings;
use charforge::forge::{ask_interactive, simulate_answers, synthesize, write_character};
use charforge::models::{Character, Stats};

/// Largest seed picked for an interactive run when none is configured.
const PLAY_SEED_MAX: u64 = 10_000_000;

/// Largest seed picked for a demo run when none is configured.
const DEMO_SEED_MAX: u64 = 999_999;

fn resolve_seed(explicit: Option<u64>, settings: &Settings, max: u64) -> u64 {
    explicit
        .or(settings.seed)
        .unwrap_or_else(|| rand::rng().random_range(0..=max))
}

fn emit(character: &Character, json: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, character)?;
        writeln!(out)?;
    } else {
        write_character(&mut out, character)?;
    }
    Ok(())
}

/// Run the interactive quiz on the terminal.
pub fn cmd_play(settings: &Settings, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    // Prompts go to stderr when stdout carries JSON.
    let mut input = io::stdin().lock();
    let stats: Stats = if json {
        ask_interactive(&mut input, &mut io::stderr().lock())?
    } else {
        ask_interactive(&mut input, &mut io::stdout().lock())?
    };

    let seed = resolve_seed(seed, settings, PLAY_SEED_MAX);
    tracing::info!(seed, "Forging character from quiz answers");
    let character = synthesize(&stats, seed);
    emit(&character, json)?;

    if !json {
        println!("Save this file or copy the summary to keep your character. Enjoy BG3!");
    }
    Ok(())
}

/// Forge a character from random answers.
pub fn cmd_demo(settings: &Settings, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    let seed = resolve_seed(seed, settings, DEMO_SEED_MAX);
    let stats = simulate_answers(seed);
    let character = synthesize(&stats, seed);

    if !json {
        println!("{}", style(format!("--- Demo run (seed {seed}) ---")).bold());
    }
    emit(&character, json)
}

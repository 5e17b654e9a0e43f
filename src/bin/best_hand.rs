use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, LevelFilter};
use poker_wild::cards::{parse_wild_cards, Card};
use poker_wild::evaluator::evaluate_five;
use poker_wild::{best_hand, best_wild_hand};

/// Print the best five cards out of seven. Jokers are `?B` and `?R`.
#[derive(Debug, Parser)]
#[clap(name = "best-hand", version)]
struct Cli {
    /// Seven card tokens such as `TD 7C ?R`, separated by spaces or commas.
    #[clap(required = true, num_args = 1..)]
    cards: Vec<String>,
    /// Print the winning cards sorted by token text.
    #[clap(long, short)]
    sorted: bool,
    /// Increase log verbosity (repeatable).
    #[clap(long, short, action = ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(level(cli.verbose))
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    println!("{}", run(&cli.cards, cli.sorted)?);
    Ok(())
}

/// Best hand for the given tokens as `"<cards> (<category>)"`.
fn run(cards: &[String], sorted: bool) -> Result<String> {
    let input = cards.join(" ");
    let elements = parse_wild_cards(&input).with_context(|| format!("cannot parse '{input}'"))?;

    let best = if elements.iter().any(|e| e.is_joker()) {
        debug!("wildcard search over {} elements", elements.len());
        best_wild_hand(&elements)?
    } else {
        let cards: Vec<Card> = elements.iter().filter_map(|e| e.card()).collect();
        best_hand(&cards)?
    };

    let category = evaluate_five(&best).category;
    let mut tokens: Vec<String> = best.iter().map(Card::to_string).collect();
    if sorted {
        tokens.sort();
    }
    Ok(format!("{} ({category})", tokens.join(" ")))
}

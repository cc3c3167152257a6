//! cardstack - Demo entry point

use cardstack::deck::{CardDeck, TransitionPlan};
use cardstack::layout::ItemIndex;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Replay card taps against the stacked layout and print each transition
#[derive(Parser, Debug)]
#[command(name = "cardstack")]
#[command(version)]
#[command(about = "Replay expand/collapse taps on a stacked card layout")]
pub struct Args {
    /// Number of cards in the deck
    #[arg(short = 'n', long)]
    pub items: Option<usize>,

    /// Viewport width
    #[arg(long)]
    pub width: Option<f64>,

    /// Viewport height
    #[arg(long)]
    pub height: Option<f64>,

    /// Card index to tap (repeatable, applied in order)
    #[arg(short, long = "tap", value_name = "INDEX")]
    pub taps: Vec<usize>,

    /// Print transition plans as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn print_plan(plan: &TransitionPlan, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(plan)?);
    } else {
        print!("{plan}");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = cardstack::config::load_config_with_precedence(args.config.clone())?;
        let merged = cardstack::config::merge_config(config_file);
        let with_env = cardstack::config::apply_env_overrides(merged);
        let with_cli =
            cardstack::config::apply_cli_overrides(with_env, args.items, args.width, args.height);
        cardstack::config::validate_config(with_cli)?
    };

    cardstack::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let mut deck = CardDeck::new(config.card_count, config.viewport(), config.deck_options());
    print_plan(&deck.current_plan(), args.json)?;

    for &tap in &args.taps {
        let plan = deck.tap(ItemIndex::new(tap))?;
        print_plan(&plan, args.json)?;
    }

    Ok(())
}

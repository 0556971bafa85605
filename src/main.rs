//! Wordle Hard Mode - CLI
//!
//! Play hard-mode Wordle, trace a single random game, or simulate random
//! play over the whole target list and report the metrics.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use wordle_hardmode::{
    commands::{PlayOutcome, run_play, run_sample, run_simulate, run_trace},
    core::Word,
    logging,
    output::{print_sample_summary, print_simulate_summary},
    simulation::{DEFAULT_MAX_TURNS, PolicyType, SimulationConfig},
    wordlists::{TARGETS, VALID, WordLists, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_hardmode",
    about = "Hard-mode Wordle: play, trace and simulate random play",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target list file (default: embedded)
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    /// Valid guess list file (default: embedded)
    #[arg(long, global = true)]
    valid: Option<PathBuf>,

    /// Seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Worker threads (default: one per core)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// Abandon a game after this many guesses
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Guess policy: random (default) or first
    #[arg(short, long, global = true, default_value = "random")]
    policy: String,

    /// Skip the per-turn target consistency check
    #[arg(long, global = true)]
    lenient: bool,

    /// Hide progress bars
    #[arg(short, long, global = true)]
    quiet: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game interactively (default)
    Play {
        /// Hidden word (default: random target)
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Play one random game and print every turn
    Trace {
        /// Hidden word (default: random target)
        word: Option<String>,
    },

    /// Simulate random play against every target
    Simulate {
        /// Games per target
        #[arg(short = 'n', long, default_value = "100")]
        trials: usize,

        /// Only use the first N targets (at least 1)
        #[arg(short, long)]
        limit: Option<NonZeroUsize>,
    },

    /// Simulate random play against randomly drawn targets
    Sample {
        /// Targets drawn
        #[arg(short = 'w', long, default_value = "1000")]
        words: usize,

        /// Games per drawn target
        #[arg(short = 'n', long, default_value = "1")]
        trials: usize,
    },
}

/// Load the target and valid lists, from files when given
fn load_wordlists(targets: Option<&PathBuf>, valid: Option<&PathBuf>) -> Result<WordLists> {
    let targets = match targets {
        Some(path) => load_from_file(path)
            .with_context(|| format!("reading target list {}", path.display()))?,
        None => words_from_slice(TARGETS),
    };
    let valid = match valid {
        Some(path) => load_from_file(path)
            .with_context(|| format!("reading valid list {}", path.display()))?,
        None => words_from_slice(VALID),
    };
    let lists = WordLists::new(targets, valid)?;

    let missing = lists.targets_missing_from_valid();
    if !missing.is_empty() {
        warn!(
            "{} targets are not valid guesses and may be abandoned (first: {})",
            missing.len(),
            missing[0]
        );
    }
    info!(
        "Loaded {} targets and {} valid words",
        lists.targets().len(),
        lists.valid().len()
    );
    Ok(lists)
}

/// Use the given word, or draw one from the targets
fn pick_target(word: Option<&str>, lists: &WordLists, rng: &mut StdRng) -> Result<Word> {
    match word {
        Some(text) => Word::new(text).with_context(|| format!("invalid target '{text}'")),
        None => lists
            .targets()
            .choose(rng)
            .cloned()
            .context("target list is empty"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(policy) = PolicyType::from_name(&cli.policy) else {
        bail!("unknown policy '{}' (expected random or first)", cli.policy);
    };
    let lists = load_wordlists(cli.targets.as_ref(), cli.valid.as_ref())?;

    let mut config = SimulationConfig::new(1).with_max_turns(cli.max_turns);
    config.strict = !cli.lenient;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    match cli.command {
        None => play(None, &lists, &mut rng),
        Some(Commands::Play { target }) => play(target.as_deref(), &lists, &mut rng),
        Some(Commands::Trace { word }) => {
            let target = pick_target(word.as_deref(), &lists, &mut rng)?;
            run_trace(
                &target,
                lists.valid(),
                &policy,
                &mut rng,
                &config,
                &mut io::stdout().lock(),
            )?;
            Ok(())
        }
        Some(Commands::Simulate { trials, limit }) => {
            let lists = match limit {
                Some(limit) => lists.with_target_limit(limit),
                None => lists,
            };
            config.trials = trials;
            info!(
                "Simulating {trials} games for each of {} targets with the {} policy",
                lists.targets().len(),
                policy.name()
            );
            let summary = run_simulate(&lists, &policy, &config, !cli.quiet)?;
            print_simulate_summary(&summary);
            Ok(())
        }
        Some(Commands::Sample { words, trials }) => {
            config.trials = trials;
            info!(
                "Simulating {trials} games for each of {words} drawn targets with the {} policy",
                policy.name()
            );
            let summary = run_sample(&lists, words, &policy, &config, !cli.quiet)?;
            print_sample_summary(&summary);
            Ok(())
        }
    }
}

fn play(word: Option<&str>, lists: &WordLists, rng: &mut StdRng) -> Result<()> {
    let target = pick_target(word, lists, rng)?;
    let outcome = run_play(
        target.clone(),
        lists.valid(),
        io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;
    match outcome {
        PlayOutcome::Won { .. } => {}
        PlayOutcome::NoCandidates { .. } | PlayOutcome::Quit | PlayOutcome::GaveUp => {
            println!("The word was: {target}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["wordle_hardmode", "simulate", "--limit", "0"]).is_err());

        let cli = Cli::try_parse_from(["wordle_hardmode", "simulate", "--limit", "5"]).unwrap();
        match cli.command {
            Some(Commands::Simulate { limit, .. }) => assert_eq!(limit, NonZeroUsize::new(5)),
            _ => panic!("expected simulate"),
        }
    }
}

mod config;
mod interactive;
mod output;
mod parse;
mod roster;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use swisspair_core::{validate_setup, SimulatedSource, Tournament, TournamentConfig};

use crate::interactive::HumanSource;
use crate::output::Announcer;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "swisspair", version, about = "Run Swiss-style pairing tournaments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run a tournament, entering results at the terminal
    Run(TournamentArgs),
    /// Run a tournament with outcomes simulated from ratings
    Simulate(SimulateArgs),
    /// Create a default config file at ~/.config/swisspair/config.toml
    Init,
}

#[derive(clap::Args)]
struct TournamentArgs {
    /// Number of players
    #[arg(long)]
    players: Option<usize>,

    /// Number of rounds
    #[arg(long)]
    rounds: Option<u32>,

    /// Fraction of players assigned a rating at registration (0.0 to 1.0)
    #[arg(long)]
    rated_fraction: Option<f64>,

    /// RNG seed for registration, pairing and simulation. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Award the bye player a free win each round
    #[arg(long)]
    bye_point: bool,

    /// Path to config file (default: ~/.config/swisspair/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(clap::Args)]
struct SimulateArgs {
    #[command(flatten)]
    tournament: TournamentArgs,

    /// Output JSON instead of tables
    #[arg(long)]
    json: bool,
}

/// Settings after merging CLI args over the config file.
struct Settings {
    players: usize,
    rounds: u32,
    rated_fraction: f64,
    seed: u64,
    bye_point: bool,
}

fn resolve_settings(args: &TournamentArgs) -> Settings {
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let players = args.players.or(cfg.players).unwrap_or(10);
    let rounds = args.rounds.or(cfg.rounds).unwrap_or(3);
    let rated_fraction = args.rated_fraction.or(cfg.rated_fraction).unwrap_or(0.8);
    let seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let bye_point = args.bye_point || cfg.bye_point.unwrap_or(false);

    if let Err(e) = validate_setup(players, rounds, rated_fraction) {
        bail(e);
    }

    Settings {
        players,
        rounds,
        rated_fraction,
        seed,
        bye_point,
    }
}

/// Register players and build the tournament shared by both modes.
fn build_tournament(settings: &Settings, rng: &mut StdRng) -> Tournament {
    let competitors = roster::register_players(settings.players, settings.rated_fraction, rng);

    println!(
        "Starting tournament: {} players, {} rounds ({:.0}% rated target, seed {})",
        settings.players,
        settings.rounds,
        settings.rated_fraction * 100.0,
        settings.seed,
    );

    let tournament_config = TournamentConfig {
        num_rounds: settings.rounds,
        bye_point: settings.bye_point,
    };
    Tournament::new(competitors, tournament_config).unwrap_or_else(|e| bail(e))
}

fn run_interactive(args: TournamentArgs) {
    let settings = resolve_settings(&args);
    let mut rng = StdRng::seed_from_u64(settings.seed);
    let mut tournament = build_tournament(&settings, &mut rng);

    let mut source = HumanSource::new(std::io::stdin().lock());
    if let Err(e) = tournament.run(&mut source, &mut rng) {
        bail(e);
    }

    output::print_standings(tournament.standings());
}

fn run_simulated(args: SimulateArgs) {
    let settings = resolve_settings(&args.tournament);
    let mut rng = StdRng::seed_from_u64(settings.seed);
    let mut tournament = build_tournament(&settings, &mut rng);

    // One RNG stream drives registration and pairing, a second the match
    // outcomes, so the same seed pairs identically in both modes.
    let mut source = Announcer::new(SimulatedSource::new(StdRng::seed_from_u64(
        settings.seed.wrapping_add(1),
    )));
    if let Err(e) = tournament.run(&mut source, &mut rng) {
        bail(e);
    }

    if args.json {
        output::print_json(&tournament);
    } else {
        output::print_standings(tournament.standings());
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_interactive(args),
        Commands::Simulate(args) => run_simulated(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default player count, rounds and seed.");
        }
    }
}

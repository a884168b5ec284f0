/// swisspair-core: Swiss-style tournament pairing engine.
///
/// Pair a field round by round (closest win counts first, novel opponents
/// preferred, at most one bye), then reconcile declared results against the
/// pairings and keep standings. No IO, no terminal, no filesystem. Bring
/// your own result source.
///
/// # Quick start
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use swisspair_core::{Competitor, SimulatedSource, Tournament, TournamentConfig};
///
/// let competitors: Vec<Competitor> = (1u32..=8)
///     .map(|id| Competitor::new(id, Some(1000 + 100 * id as u16)))
///     .collect();
///
/// let mut tournament = Tournament::new(competitors, TournamentConfig::default()).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut source = SimulatedSource::new(StdRng::seed_from_u64(11));
///
/// tournament.run(&mut source, &mut rng).unwrap();
/// for competitor in tournament.final_standings() {
///     println!("{}: {} points", competitor.id, competitor.points());
/// }
/// ```

pub mod constants;
pub mod engine;
pub mod error;
pub mod pairing;
pub mod results;
pub mod selector;
pub mod sim;
pub mod standings;
pub mod types;

// Re-export the primary public API at the crate root.
pub use engine::{validate_setup, ResultSource, Tournament, TournamentConfig};
pub use error::{PairingError, ResultError, SetupError, SourceError, TournamentError};
pub use pairing::pair_round;
pub use results::apply_results;
pub use selector::find_best_opponent;
pub use sim::{sample_outcome, Outcome, SimulatedSource};
pub use standings::Standings;
pub use types::{canonical_pair, Competitor, Pair, PlayerId, ResultDeclaration, RoundRecord};

/// Error taxonomy for the tournament engine.
///
/// Setup problems abort before round one. Pairing invariant violations are
/// internal defects and always fatal. Result validation failures are
/// recoverable when a human is typing the results and fatal when the
/// simulator produced them.
use thiserror::Error;

use crate::types::PlayerId;

/// Invalid tournament parameters, detected before any round runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SetupError {
    #[error("need at least 2 players, got {0}")]
    TooFewPlayers(usize),
    #[error("need at least 1 round, got {0}")]
    TooFewRounds(u32),
    #[error("rated fraction must be between 0.0 and 1.0, got {0}")]
    InvalidRatedFraction(f64),
}

/// Internal defect in the pairing pass. The round cannot safely proceed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// The selector returned nothing even though candidates remained.
    #[error("no opponent found for {subject} with {candidates} candidates remaining")]
    NoOpponentFound { subject: PlayerId, candidates: usize },
    /// More than one competitor was left over after the pairing loop.
    #[error("pairing left {0:?} unpaired; at most one bye is allowed")]
    UnpairedPlayers(Vec<PlayerId>),
}

/// A declaration that does not reconcile with the round's pairings.
/// The first violated rule is reported; standings are never touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResultError {
    #[error("competitor {0} did not play a match this round")]
    UnknownWinner(PlayerId),
    #[error("competitor {0} has the bye this round and cannot win a match")]
    ByeAsWinner(PlayerId),
    #[error("draw {a}-{b} does not match any pairing this round")]
    UnmatchedDraw { a: PlayerId, b: PlayerId },
    #[error("pairing {a}-{b} is declared both won and drawn")]
    WinDrawConflict { a: PlayerId, b: PlayerId },
    #[error("both sides of pairing {a}-{b} are declared winners")]
    TwoWinners { a: PlayerId, b: PlayerId },
    #[error("pairing {a}-{b} has no declared result")]
    UnresolvedPairing { a: PlayerId, b: PlayerId },
}

/// Failure of a result source itself, as opposed to the declaration it
/// produced.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read results: {0}")]
    Io(#[from] std::io::Error),
    #[error("result input ended before a declaration was completed")]
    InputExhausted,
}

/// Anything that can stop a tournament run.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Pairing(#[from] PairingError),
    #[error("round {round}: {source}")]
    Results { round: u32, source: ResultError },
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("round {round}: results still rejected after {attempts} attempts")]
    RetriesExhausted { round: u32, attempts: usize },
}

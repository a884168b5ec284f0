/// Rating-driven outcome sampling for non-interactive tournaments.
///
/// Win and draw probabilities depend only on the rating gap. Unrated
/// competitors sample as `DEFAULT_UNRATED_SIM_RATING`; the substitute never
/// reaches the stored record.
use rand::Rng;

use crate::constants::{DEFAULT_UNRATED_SIM_RATING, LARGE_RATING_GAP, MODERATE_RATING_GAP};
use crate::engine::ResultSource;
use crate::error::SourceError;
use crate::standings::Standings;
use crate::types::{PlayerId, ResultDeclaration, RoundRecord};

/// Sampled outcome of one match, from the first-listed side's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    WinA,
    WinB,
    Draw,
}

/// [P(a wins), P(b wins), P(draw)] for a rating gap of `a - b`.
fn outcome_weights(gap: i32) -> [f64; 3] {
    let (win_a, draw): (f64, f64) = if gap.abs() > LARGE_RATING_GAP {
        (if gap > 0 { 0.80 } else { 0.10 }, 0.10)
    } else if gap.abs() > MODERATE_RATING_GAP {
        (if gap > 0 { 0.65 } else { 0.20 }, 0.15)
    } else {
        (0.40, 0.20)
    };
    let win_b = (1.0 - win_a - draw).max(0.0);
    [win_a, win_b, draw]
}

fn weighted_select(weights: &[f64], rng: &mut impl Rng) -> usize {
    let total: f64 = weights.iter().sum();
    let mut r = rng.random::<f64>() * total;
    for (i, &w) in weights.iter().enumerate() {
        r -= w;
        if r < 1e-10 {
            return i;
        }
    }
    weights.len() - 1
}

/// Sample one match outcome between `a` and `b` from their ratings.
pub fn sample_outcome(
    a: PlayerId,
    b: PlayerId,
    standings: &Standings,
    rng: &mut impl Rng,
) -> Outcome {
    let rating = |id: PlayerId| {
        i32::from(standings.get(id).rating.unwrap_or(DEFAULT_UNRATED_SIM_RATING))
    };
    let weights = outcome_weights(rating(a) - rating(b));

    match weighted_select(&weights, rng) {
        0 => Outcome::WinA,
        1 => Outcome::WinB,
        _ => Outcome::Draw,
    }
}

/// Non-interactive result source: one independent sample per pairing.
///
/// A declaration built here is consistent with the round by construction,
/// so a reconciler rejection means an engine or sampler defect. It is never
/// retried.
pub struct SimulatedSource<R> {
    rng: R,
}

impl<R: Rng> SimulatedSource<R> {
    pub fn new(rng: R) -> Self {
        SimulatedSource { rng }
    }
}

impl<R: Rng> ResultSource for SimulatedSource<R> {
    fn collect(
        &mut self,
        record: &RoundRecord,
        standings: &Standings,
    ) -> Result<ResultDeclaration, SourceError> {
        let mut declaration = ResultDeclaration::default();
        for &(a, b) in &record.pairings {
            match sample_outcome(a, b, standings, &mut self.rng) {
                Outcome::WinA => {
                    declaration.winners.insert(a);
                }
                Outcome::WinB => {
                    declaration.winners.insert(b);
                }
                Outcome::Draw => {
                    declaration.draws.insert((a, b));
                }
            }
        }
        Ok(declaration)
    }
}

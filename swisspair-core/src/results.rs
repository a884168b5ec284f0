/// Result reconciliation: validate a declaration against the round's
/// pairings, then apply score updates to the standings.
///
/// Validation is all-or-nothing. A rejected declaration leaves the standings
/// byte-for-byte untouched, and the first violated rule is what the caller
/// gets back. An unreported board is a hard failure, never a warning.
use std::collections::BTreeMap;

use crate::error::ResultError;
use crate::standings::Standings;
use crate::types::{Pair, PlayerId, ResultDeclaration, RoundRecord};

/// How a validated pairing ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Won(PlayerId),
    Drawn,
}

/// Map every pairing of the round to exactly one outcome, or report the
/// first rule the declaration breaks. Reads nothing but the record and the
/// declaration; never mutates.
fn validate(
    record: &RoundRecord,
    declaration: &ResultDeclaration,
) -> Result<BTreeMap<Pair, Resolution>, ResultError> {
    for &winner in &declaration.winners {
        if record.bye == Some(winner) {
            return Err(ResultError::ByeAsWinner(winner));
        }
        if !record.contains(winner) {
            return Err(ResultError::UnknownWinner(winner));
        }
    }

    for &(a, b) in &declaration.draws {
        if !record.pairings.contains(&(a, b)) {
            return Err(ResultError::UnmatchedDraw { a, b });
        }
    }

    let mut outcomes: BTreeMap<Pair, Resolution> = declaration
        .draws
        .iter()
        .map(|&pair| (pair, Resolution::Drawn))
        .collect();

    for &winner in &declaration.winners {
        let pair = record
            .pairing_of(winner)
            .expect("winner membership checked above");
        let (a, b) = pair;
        match outcomes.get(&pair) {
            Some(Resolution::Drawn) => return Err(ResultError::WinDrawConflict { a, b }),
            Some(Resolution::Won(_)) => return Err(ResultError::TwoWinners { a, b }),
            None => {
                outcomes.insert(pair, Resolution::Won(winner));
            }
        }
    }

    for &(a, b) in &record.pairings {
        if !outcomes.contains_key(&(a, b)) {
            return Err(ResultError::UnresolvedPairing { a, b });
        }
    }

    Ok(outcomes)
}

/// Apply a round's declared results to the standings.
///
/// Each pairing is resolved exactly once: the winner gains a win and the
/// opponent a loss, or both sides gain a draw. When `bye_point` is enabled
/// the bye competitor is credited a free win alongside the round's results;
/// the default configuration leaves it off.
pub fn apply_results(
    record: &RoundRecord,
    declaration: &ResultDeclaration,
    bye_point: bool,
    standings: &mut Standings,
) -> Result<(), ResultError> {
    let outcomes = validate(record, declaration)?;

    for (&(a, b), &resolution) in &outcomes {
        match resolution {
            Resolution::Won(winner) => {
                let loser = if winner == a { b } else { a };
                standings.get_mut(winner).wins += 1;
                standings.get_mut(loser).losses += 1;
            }
            Resolution::Drawn => {
                standings.get_mut(a).draws += 1;
                standings.get_mut(b).draws += 1;
            }
        }
    }

    if bye_point {
        if let Some(bye) = record.bye {
            standings.get_mut(bye).wins += 1;
        }
    }

    Ok(())
}

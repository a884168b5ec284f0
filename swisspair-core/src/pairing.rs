/// Round pairing: one conflict-free pairing pass over the whole field.
///
/// Priority order is wins descending with randomized order among equal
/// scores, so leaders pair first but ties do not always break the same way.
/// Randomness comes in through the caller's `Rng`, which keeps a whole
/// tournament reproducible under a fixed seed.
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::PairingError;
use crate::selector::find_best_opponent;
use crate::standings::Standings;
use crate::types::{canonical_pair, PlayerId, RoundRecord};

/// Pair every competitor for `round_number`, leaving at most one bye.
///
/// Both sides of each formed pairing get the opponent added to their
/// `played` set immediately: pairing history reflects scheduled matches,
/// not completed ones.
pub fn pair_round(
    round_number: u32,
    standings: &mut Standings,
    rng: &mut impl Rng,
) -> Result<RoundRecord, PairingError> {
    let mut queue: Vec<PlayerId> = standings.ids();
    queue.shuffle(rng);
    // Stable sort keeps the shuffled order among equal win counts.
    queue.sort_by_key(|&id| std::cmp::Reverse(standings.get(id).wins));

    let mut pairings = Vec::with_capacity(queue.len() / 2);

    while queue.len() >= 2 {
        let subject = queue.remove(0);

        let opponent = match find_best_opponent(subject, &queue, standings) {
            Some(id) => id,
            // The selector only returns None for an empty pool, so this is
            // an internal defect, not a pairing dead end.
            None => {
                return Err(PairingError::NoOpponentFound {
                    subject,
                    candidates: queue.len(),
                })
            }
        };

        standings.get_mut(subject).played.insert(opponent);
        standings.get_mut(opponent).played.insert(subject);
        pairings.push(canonical_pair(subject, opponent));
        queue.retain(|&id| id != opponent);
    }

    let bye = match queue.len() {
        0 => None,
        1 => Some(queue[0]),
        _ => return Err(PairingError::UnpairedPlayers(queue)),
    };

    debug_assert_eq!(
        pairings.len() * 2 + usize::from(bye.is_some()),
        standings.len(),
    );
    log::debug!(
        "round {round_number}: {} boards, bye {bye:?}",
        pairings.len(),
    );

    Ok(RoundRecord {
        round_number,
        pairings,
        bye,
    })
}

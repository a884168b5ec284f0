/// Opponent selection for one competitor against a candidate pool.
///
/// Two-pass policy: prefer the closest-in-score opponent never faced before;
/// if every candidate is a prior opponent, allow the rematch with the
/// smallest win gap. The sort is stable, so callers control tie-breaks
/// through the order of `candidates` (the pairing engine shuffles upstream).
use crate::standings::Standings;
use crate::types::PlayerId;

/// Pick the best opponent for `subject` from `candidates`.
///
/// Returns `None` only when `candidates` is empty. Pure and deterministic
/// given its inputs.
pub fn find_best_opponent(
    subject: PlayerId,
    candidates: &[PlayerId],
    standings: &Standings,
) -> Option<PlayerId> {
    if candidates.is_empty() {
        return None;
    }

    let subject_wins = standings.get(subject).wins;
    let played = &standings.get(subject).played;

    let mut by_gap: Vec<PlayerId> = candidates.to_vec();
    by_gap.sort_by_key(|&id| standings.get(id).wins.abs_diff(subject_wins));

    // Pass 1: closest-in-score opponent never faced before.
    if let Some(&id) = by_gap.iter().find(|&&id| !played.contains(&id)) {
        return Some(id);
    }

    // Pass 2: everyone has been faced; take the closest rematch.
    by_gap.first().copied()
}

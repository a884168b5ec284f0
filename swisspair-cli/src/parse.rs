/// Parsing for interactive result entry.
///
/// Winners come in as comma-separated IDs ("1, 4, 7"), draws as dash pairs
/// ("2-3, 5-6"). Blank input means none. Malformed tokens are rejected with
/// a message the prompt loop can show as-is.
use std::collections::BTreeSet;

use swisspair_core::{canonical_pair, Pair, PlayerId};

/// Parse the winners line into a set of IDs.
pub fn parse_winners(line: &str) -> Result<BTreeSet<PlayerId>, String> {
    let mut winners = BTreeSet::new();
    for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let id: PlayerId = token.parse().map_err(|_| {
            format!("Invalid player ID \"{token}\". Enter comma-separated numbers")
        })?;
        winners.insert(id);
    }
    Ok(winners)
}

/// Parse the draws line into canonicalized pairs.
pub fn parse_draws(line: &str) -> Result<BTreeSet<Pair>, String> {
    let mut draws = BTreeSet::new();
    for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (a, b) = token.split_once('-').ok_or_else(|| {
            format!("Invalid draw \"{token}\". Use the form player1-player2")
        })?;
        let a: PlayerId = a.trim().parse().map_err(|_| {
            format!("Invalid player ID in draw \"{token}\"")
        })?;
        let b: PlayerId = b.trim().parse().map_err(|_| {
            format!("Invalid player ID in draw \"{token}\"")
        })?;
        if a == b {
            return Err(format!("A draw needs two different players, got \"{token}\""));
        }
        draws.insert(canonical_pair(a, b));
    }
    Ok(draws)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_winners() {
        assert_eq!(parse_winners("1, 4,7"), Ok(BTreeSet::from([1, 4, 7])));
        assert_eq!(parse_winners(""), Ok(BTreeSet::new()));
        assert_eq!(parse_winners("  "), Ok(BTreeSet::new()));
        // Duplicates collapse; the reconciler sees a set.
        assert_eq!(parse_winners("2,2"), Ok(BTreeSet::from([2])));
    }

    #[test]
    fn test_parse_winners_rejects_garbage() {
        assert!(parse_winners("1, x").is_err());
        assert!(parse_winners("-3").is_err());
    }

    #[test]
    fn test_parse_draws() {
        assert_eq!(parse_draws("3-1, 5-6"), Ok(BTreeSet::from([(1, 3), (5, 6)])));
        assert_eq!(parse_draws(""), Ok(BTreeSet::new()));
    }

    #[test]
    fn test_parse_draws_rejects_garbage() {
        assert!(parse_draws("3").is_err());
        assert!(parse_draws("3-x").is_err());
        assert!(parse_draws("4-4").is_err());
    }

}

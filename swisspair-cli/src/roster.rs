/// Player registration: sequential IDs and a random rating draw.
use rand::Rng;

use swisspair_core::constants::{RATING_MAX, RATING_MIN};
use swisspair_core::{Competitor, PlayerId};

/// Draw a rating for one registrant. Rated players get a uniform rating in
/// [RATING_MIN, RATING_MAX]; the rest stay unrated.
pub fn assign_initial_rating(rated: bool, rng: &mut impl Rng) -> Option<u16> {
    rated.then(|| rng.random_range(RATING_MIN..=RATING_MAX))
}

/// Register `count` players with IDs 1..=count. Each player is rated with
/// probability `rated_fraction`.
pub fn register_players(
    count: usize,
    rated_fraction: f64,
    rng: &mut impl Rng,
) -> Vec<Competitor> {
    let competitors: Vec<Competitor> = (1..=count as PlayerId)
        .map(|id| {
            let rated = rng.random::<f64>() < rated_fraction;
            Competitor::new(id, assign_initial_rating(rated, rng))
        })
        .collect();

    let rated_count = competitors.iter().filter(|c| c.rating.is_some()).count();
    log::info!("registered {count} players, {rated_count} assigned ratings");

    competitors
}

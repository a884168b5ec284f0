/// Lowest rating the registration draw can assign.
pub const RATING_MIN: u16 = 1000;

/// Highest rating the registration draw can assign.
pub const RATING_MAX: u16 = 2000;

/// Rating used for unrated competitors when simulating match outcomes.
/// Applied at sampling time only; the substitute never reaches the stored
/// record.
pub const DEFAULT_UNRATED_SIM_RATING: u16 = 1400;

/// Rating gap above which a matchup is heavily lopsided for simulation
/// purposes (favored side wins 80% of the time).
pub const LARGE_RATING_GAP: i32 = 300;

/// Rating gap above which a matchup is moderately lopsided for simulation
/// purposes (favored side wins 65% of the time).
pub const MODERATE_RATING_GAP: i32 = 100;

/// How many times a result source is asked to re-submit a rejected
/// declaration before the round is abandoned. Interactive sources re-prompt
/// up to this bound; the simulated source never retries at all.
pub const MAX_RESULT_ATTEMPTS: usize = 10;

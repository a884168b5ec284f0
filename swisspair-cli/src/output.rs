/// Output formatting: board listings, standings tables and JSON.
use serde::Serialize;

use swisspair_core::{
    Competitor, ResultDeclaration, ResultError, ResultSource, RoundRecord, SourceError,
    Standings, Tournament,
};

/// Annotation shown next to a player on the board listing.
fn rating_note(competitor: &Competitor) -> String {
    match competitor.rating {
        Some(rating) => format!("(Rated: {rating})"),
        None => format!("(Unrated, Wins: {})", competitor.wins),
    }
}

/// Print one round's boards and the bye, if any.
pub fn print_pairings(record: &RoundRecord, standings: &Standings) {
    println!("\n--- Round {} Pairings ---", record.round_number);
    if record.pairings.is_empty() {
        println!("No matches this round.");
    }
    for (board, &(a, b)) in record.pairings.iter().enumerate() {
        println!(
            "Board {}: {} {} vs {} {}",
            board + 1,
            a,
            rating_note(standings.get(a)),
            b,
            rating_note(standings.get(b)),
        );
    }
    if let Some(bye) = record.bye {
        println!("Player {bye} has a bye this round.");
    }
}

/// Print each board's declared result in board order.
pub fn print_results(record: &RoundRecord, declaration: &ResultDeclaration) {
    println!("Results:");
    for &(a, b) in &record.pairings {
        if declaration.draws.contains(&(a, b)) {
            println!("  {a} draws {b}");
        } else if declaration.winners.contains(&a) {
            println!("  {a} defeats {b}");
        } else if declaration.winners.contains(&b) {
            println!("  {b} defeats {a}");
        }
    }
}

/// Print the final standings table, best first.
pub fn print_standings(standings: &Standings) {
    println!("\n--- Final Standings ---");
    println!("{:>4} | {:>8} | {:>6} | {:>3} {:>3} {:>3}", "ID", "Rating", "Points", "W", "L", "D");
    println!("{}", "-".repeat(40));
    for competitor in standings.ranked() {
        let rating = competitor
            .rating
            .map_or_else(|| "unrated".to_string(), |r| r.to_string());
        println!(
            "{:>4} | {:>8} | {:>6.1} | {:>3} {:>3} {:>3}",
            competitor.id,
            rating,
            competitor.points(),
            competitor.wins,
            competitor.losses,
            competitor.draws,
        );
    }
}

#[derive(Serialize)]
struct JsonPlayer<'a> {
    #[serde(flatten)]
    competitor: &'a Competitor,
    points: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    players: Vec<JsonPlayer<'a>>,
    rounds: Vec<&'a RoundRecord>,
}

/// Print the whole run as JSON: ranked players plus the round history.
pub fn print_json(tournament: &Tournament) {
    let report = JsonReport {
        players: tournament
            .final_standings()
            .into_iter()
            .map(|competitor| JsonPlayer {
                competitor,
                points: competitor.points(),
            })
            .collect(),
        rounds: tournament.history().values().collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report).unwrap());
}

/// Wraps a result source, echoing pairings and outcomes as they happen.
/// Used for the simulated tournament, where nobody is typing at a prompt.
pub struct Announcer<S> {
    inner: S,
}

impl<S> Announcer<S> {
    pub fn new(inner: S) -> Self {
        Announcer { inner }
    }
}

impl<S: ResultSource> ResultSource for Announcer<S> {
    fn collect(
        &mut self,
        record: &RoundRecord,
        standings: &Standings,
    ) -> Result<ResultDeclaration, SourceError> {
        print_pairings(record, standings);
        let declaration = self.inner.collect(record, standings)?;
        print_results(record, &declaration);
        Ok(declaration)
    }

    fn retry_on_rejection(&mut self, error: &ResultError) -> bool {
        self.inner.retry_on_rejection(error)
    }
}

/// Terminal result entry: prompts for winners and draws each round.
use std::io::{self, BufRead, Write};

use swisspair_core::constants::MAX_RESULT_ATTEMPTS;
use swisspair_core::{
    ResultDeclaration, ResultError, ResultSource, RoundRecord, SourceError, Standings,
};

use crate::output;
use crate::parse;

/// Reads round results from an input stream, re-prompting on malformed
/// lines. When the reconciler rejects a declaration, the violation is
/// reported and the whole round is re-entered; the driver bounds how often.
pub struct HumanSource<R> {
    input: R,
}

impl<R: BufRead> HumanSource<R> {
    pub fn new(input: R) -> Self {
        HumanSource { input }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String, SourceError> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(SourceError::InputExhausted);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead> ResultSource for HumanSource<R> {
    fn collect(
        &mut self,
        record: &RoundRecord,
        standings: &Standings,
    ) -> Result<ResultDeclaration, SourceError> {
        output::print_pairings(record, standings);

        for _ in 0..MAX_RESULT_ATTEMPTS {
            let winners_line = self.prompt_line(&format!(
                "Winners for round {} (comma-separated IDs, blank if none): ",
                record.round_number
            ))?;
            let winners = match parse::parse_winners(&winners_line) {
                Ok(winners) => winners,
                Err(msg) => {
                    println!("{msg}. Try again.");
                    continue;
                }
            };

            let draws_line = self.prompt_line(&format!(
                "Drawn matches for round {} (pairs like 1-2,3-4, blank if none): ",
                record.round_number
            ))?;
            let draws = match parse::parse_draws(&draws_line) {
                Ok(draws) => draws,
                Err(msg) => {
                    println!("{msg}. Try again.");
                    continue;
                }
            };

            return Ok(ResultDeclaration { winners, draws });
        }

        Err(SourceError::InputExhausted)
    }

    fn retry_on_rejection(&mut self, error: &ResultError) -> bool {
        println!("Invalid results: {error}. Try again.");
        true
    }
}

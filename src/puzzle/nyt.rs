//! Daily puzzle from the NYT Wordle endpoint

use super::{Puzzle, PuzzleError, PuzzleSource};
use crate::core::Word;
use chrono::{Local, NaiveDate};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

pub const NYT_BASE_URL: &str = "https://www.nytimes.com/svc/wordle/v2";

#[derive(Debug, Deserialize)]
struct DailyResponse {
    solution: String,
    days_since_launch: u32,
}

/// Fetches the puzzle published for a given date
#[derive(Debug, Clone)]
pub struct NytSource {
    client: Client,
    base_url: String,
    date: NaiveDate,
}

impl NytSource {
    /// Source for today's local date
    #[must_use]
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            client: Client::new(),
            base_url: NYT_BASE_URL.to_string(),
            date,
        }
    }

    /// Point the source at another server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL of the puzzle document, e.g. `.../2024-06-01.json`
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            self.date.format("%Y-%m-%d")
        )
    }
}

impl PuzzleSource for NytSource {
    #[instrument(skip(self), fields(date = %self.date))]
    fn todays_puzzle(&self) -> Result<Puzzle, PuzzleError> {
        let url = self.url();
        debug!(%url, "fetching daily puzzle");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        let body = response.text()?;

        decode_response(status, &body)
    }
}

/// Turn an HTTP status and body into a puzzle
///
/// # Errors
///
/// Returns `PuzzleError::Status` for anything but 200, `PuzzleError::Decode`
/// for malformed JSON and `PuzzleError::InvalidSolution` if the solution is
/// not a five-letter word.
pub fn decode_response(status: StatusCode, body: &str) -> Result<Puzzle, PuzzleError> {
    if status != StatusCode::OK {
        return Err(PuzzleError::Status(status.as_u16()));
    }

    let daily: DailyResponse = serde_json::from_str(body)?;
    let solution = Word::new(daily.solution)?;

    Ok(Puzzle::new(solution, daily.days_since_launch))
}

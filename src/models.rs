use serde::{Deserialize, Serialize};

/// Score payload as delivered by the upstream scoring API. All fields arrive
/// as strings, including the numeric-looking ones, and are kept verbatim for
/// display. See `validation` for which of them must parse as numbers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub title: String,
    pub update: String,
    pub livescore: String,
    pub match_date: String,
    pub runrate: String,
    pub current_batsmen: Vec<Batsman>,
    pub current_bowler: Vec<Bowler>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Batsman {
    pub name: String,
    pub runs: String,
    pub balls: String,
    pub strike_rate: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bowler {
    pub name: String,
    pub overs: String,
    pub runs: String,
    pub wickets: String,
}

use std::num::ParseFloatError;

use thiserror::Error;

use crate::models::ScoreReport;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("required fields are missing")]
    MissingFields,

    #[error("batsmen or bowler data is missing")]
    MissingPlayers,

    #[error("invalid strike rate for batsman {name}: {source}")]
    InvalidStrikeRate {
        name: String,
        source: ParseFloatError,
    },

    #[error("invalid overs for bowler {name}: {source}")]
    InvalidOvers {
        name: String,
        source: ParseFloatError,
    },
}

/// Structural check of an upstream payload. Short-circuits on the first
/// failure, naming the offending player for the numeric checks. Runs/balls/
/// wickets are display strings and deliberately stay unchecked.
pub fn validate_score(score: &ScoreReport) -> Result<(), ValidationError> {
    if score.title.is_empty()
        || score.livescore.is_empty()
        || score.match_date.is_empty()
        || score.runrate.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    if score.current_batsmen.is_empty() || score.current_bowler.is_empty() {
        return Err(ValidationError::MissingPlayers);
    }

    for batsman in &score.current_batsmen {
        if let Err(e) = batsman.strike_rate.parse::<f64>() {
            return Err(ValidationError::InvalidStrikeRate {
                name: batsman.name.clone(),
                source: e,
            });
        }
    }

    for bowler in &score.current_bowler {
        if let Err(e) = bowler.overs.parse::<f64>() {
            return Err(ValidationError::InvalidOvers {
                name: bowler.name.clone(),
                source: e,
            });
        }
    }

    Ok(())
}

use crate::models::ScoreReport;

/// Renders a validated score into the fixed plain-text layout. Pure function,
/// fields are inserted verbatim and lists keep their input order.
pub fn format_score(score: &ScoreReport) -> String {
    let mut result = format!(
        "\n\nMatch Details:\n\n  Title: {}\n  Update: {}\n  Live Score: {}\n  Match Date: {}\n  Run Rate: {}\n\n",
        escape_text(&score.title),
        escape_text(&score.update),
        escape_text(&score.livescore),
        escape_text(&score.match_date),
        escape_text(&score.runrate),
    );

    result.push_str("Current Batsmen:\n\n");
    for batsman in &score.current_batsmen {
        result.push_str(&format!(
            "  - Name: {}\n    Runs: {}\n    Balls: {}\n    Strike Rate: {}\n\n",
            escape_text(&batsman.name),
            escape_text(&batsman.runs),
            escape_text(&batsman.balls),
            escape_text(&batsman.strike_rate),
        ));
    }

    result.push_str("Current Bowlers:\n\n");
    for bowler in &score.current_bowler {
        result.push_str(&format!(
            "  - Name: {}\n    Overs: {}\n    Runs: {}\n    Wickets: {}\n\n",
            escape_text(&bowler.name),
            escape_text(&bowler.overs),
            escape_text(&bowler.runs),
            escape_text(&bowler.wickets),
        ));
    }

    result
}

// Sanitization hook for report fields. Identity for now, every field already
// passes through here so output escaping only needs to be added in one place.
fn escape_text(text: &str) -> &str {
    text
}

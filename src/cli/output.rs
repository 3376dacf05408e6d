use anyhow::Result;
use ctxsearch::FormOutcome;
use serde_json::json;

/// Print a plain-text transcript of the session's submissions.
pub(crate) fn print_plain(outcome: &FormOutcome) {
    if outcome.submissions.is_empty() {
        println!("No submissions");
        return;
    }

    for submission in &outcome.submissions {
        let labels = submission.enabled_labels();
        if labels.is_empty() {
            println!("{}", submission.query);
        } else {
            println!("{} [{}]", submission.query, labels.join(", "));
        }
    }
}

/// Format the submission log as a JSON string.
pub(crate) fn format_outcome_json(outcome: &FormOutcome) -> Result<String> {
    let payload = json!({
        "submissions": outcome.submissions,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the submission log.
pub(crate) fn print_json(outcome: &FormOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

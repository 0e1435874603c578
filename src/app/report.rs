use postwright::pipeline::{ErrorKind, PipelineReport};
use postwright::publish::PublishOutcome;
use postwright::ui::style;

/// Operator-facing lines for one finished run.
///
/// `show_draft` is false when the draft was already shown for confirmation.
pub fn report_lines(report: &PipelineReport, show_draft: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(text) = report.generated_text.as_ref().filter(|_| show_draft) {
        lines.push(style::header("Generated post"));
        lines.push(style::separator());
        lines.push(text.clone());
        lines.push(style::separator());
    }

    match &report.publish_outcome {
        Some(outcome) => lines.extend(outcome_lines(outcome)),
        None if report.was_skipped() => lines.push(style::dim("Not published.")),
        None => {}
    }

    if let Some(err) = &report.error {
        lines.push(style::failure(format!("Run failed [{}]: {err}", err.kind())));
        if let Some(hint) = hint_for(err.kind()) {
            lines.push(style::dim(hint));
        }
    }

    lines
}

pub fn print_report(report: &PipelineReport, show_draft: bool) {
    for line in report_lines(report, show_draft) {
        println!("{line}");
    }
}

fn outcome_lines(outcome: &PublishOutcome) -> Vec<String> {
    match outcome {
        PublishOutcome::Success { post_id: Some(id) } => {
            vec![style::success(format!("Published to LinkedIn ({id})"))]
        }
        PublishOutcome::Success { post_id: None } => {
            vec![style::success("Published to LinkedIn")]
        }
        PublishOutcome::Rejected { status, body } => vec![
            style::failure(format!("LinkedIn rejected the post (HTTP {status})")),
            style::dim(body),
        ],
        PublishOutcome::TransportError { detail } => vec![style::failure(format!(
            "Could not reach LinkedIn: {detail}"
        ))],
    }
}

fn hint_for(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::Auth => Some("Check GEMINI_API_KEY or generation.api_key."),
        ErrorKind::QuotaOrPermission => {
            Some("The Gemini key hit a rate limit or is not allowed to use this model.")
        }
        ErrorKind::MissingCredentials => {
            Some("Run `postwright auth url` to obtain a token, then `postwright check`.")
        }
        ErrorKind::InvalidTopic => Some("Topic cannot be empty."),
        _ => None,
    }
}

//! # Result Interpreter
//!
//! Turns a scrape result into ordered console lines and a verdict. The
//! verdict decides the exit code of the `interpret` step: only a present,
//! parseable document with status `success` passes. A scraper that reports
//! `error` must fail the CI run, not just log it.

use std::path::Path;

use crate::core::context::RunContext;
use crate::core::error::ReportError;
use crate::core::models::{ScrapeResult, ScrapeStatus};
use crate::infra::fs::load_scrape_result;
use crate::infra::t;

/// Visual role of a console line, used by the console reporter for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section headers.
    Banner,
    /// Plain data lines.
    Detail,
    /// The final "completed" line of a successful run.
    Success,
    /// Anything explaining why the run failed.
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub tone: Tone,
    pub text: String,
}

impl ConsoleLine {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

/// Outcome of interpreting one artifact.
#[derive(Debug)]
pub struct Interpretation {
    /// Lines to print, in order.
    pub lines: Vec<ConsoleLine>,
    /// `None` when the run passed.
    pub failure: Option<ReportError>,
}

impl Interpretation {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Loads the artifact at `path` and interprets it.
///
/// A missing or malformed artifact yields a single failure line and the
/// matching error instead of statistics.
pub fn interpret_file(path: &Path, context: &RunContext, locale: &str) -> Interpretation {
    match load_scrape_result(path) {
        Ok(result) => interpret(&result, context, locale),
        Err(err) => {
            let mut lines = context_lines(context, locale);
            lines.push(ConsoleLine::new(Tone::Failure, artifact_error_line(&err, locale)));
            Interpretation {
                lines,
                failure: Some(err),
            }
        }
    }
}

/// Interprets an already parsed result document.
pub fn interpret(result: &ScrapeResult, context: &RunContext, locale: &str) -> Interpretation {
    let mut lines = context_lines(context, locale);

    match &result.status {
        ScrapeStatus::Success => {
            lines.extend(success_lines(result, locale));
            Interpretation {
                lines,
                failure: None,
            }
        }
        ScrapeStatus::Error => {
            let message = result
                .error_message()
                .unwrap_or_else(|| t!("interpret.unknown_error", locale = locale).to_string());
            lines.push(ConsoleLine::new(
                Tone::Failure,
                t!("interpret.upstream_error", locale = locale, message = &message),
            ));
            Interpretation {
                lines,
                failure: Some(ReportError::UpstreamFailure {
                    status: result.status.to_string(),
                    message,
                }),
            }
        }
        ScrapeStatus::Unknown(status) => {
            let text = t!("interpret.unknown_status", locale = locale, status = status).to_string();
            lines.push(ConsoleLine::new(Tone::Failure, text.clone()));
            Interpretation {
                lines,
                failure: Some(ReportError::UpstreamFailure {
                    status: status.clone(),
                    message: result.error_message().unwrap_or(text),
                }),
            }
        }
    }
}

fn success_lines(result: &ScrapeResult, locale: &str) -> Vec<ConsoleLine> {
    let stats = &result.stats;
    vec![
        ConsoleLine::new(Tone::Banner, t!("interpret.banner", locale = locale)),
        ConsoleLine::new(
            Tone::Detail,
            t!("interpret.status", locale = locale, status = result.status),
        ),
        ConsoleLine::new(Tone::Banner, t!("interpret.stats_banner", locale = locale)),
        ConsoleLine::new(
            Tone::Detail,
            t!("interpret.total", locale = locale, value = stats.total_listed),
        ),
        ConsoleLine::new(
            Tone::Detail,
            t!("interpret.with_detail", locale = locale, value = stats.with_detail),
        ),
        ConsoleLine::new(
            Tone::Detail,
            t!("interpret.duration", locale = locale, value = stats.duration_secs),
        ),
        ConsoleLine::new(
            Tone::Detail,
            t!("interpret.success_rate", locale = locale, value = stats.detail_success_rate),
        ),
        ConsoleLine::new(Tone::Banner, t!("interpret.structure_banner", locale = locale)),
        ConsoleLine::new(
            Tone::Detail,
            t!("interpret.filters_applied", locale = locale, count = result.applied_filter_count()),
        ),
        ConsoleLine::new(
            Tone::Detail,
            t!("interpret.form_fields", locale = locale, count = result.form_field_count()),
        ),
        ConsoleLine::new(
            Tone::Detail,
            t!("interpret.results", locale = locale, count = result.result_count()),
        ),
        ConsoleLine::new(
            Tone::Detail,
            t!("interpret.detail_records", locale = locale, count = result.detail_count()),
        ),
        ConsoleLine::new(Tone::Success, t!("interpret.success", locale = locale)),
    ]
}

fn context_lines(context: &RunContext, locale: &str) -> Vec<ConsoleLine> {
    let mut lines = Vec::new();
    if let Some(trigger) = &context.trigger {
        lines.push(ConsoleLine::new(
            Tone::Detail,
            t!("context.trigger", locale = locale, value = trigger),
        ));
    }
    if let Some(max_details) = &context.max_details {
        lines.push(ConsoleLine::new(
            Tone::Detail,
            t!("context.max_details", locale = locale, value = max_details),
        ));
    }
    if let Some(headless) = &context.headless {
        lines.push(ConsoleLine::new(
            Tone::Detail,
            t!("context.headless", locale = locale, value = headless),
        ));
    }
    lines
}

fn artifact_error_line(err: &ReportError, locale: &str) -> String {
    match err {
        ReportError::MissingArtifact { path } => {
            t!("interpret.missing_artifact", locale = locale, path = path.display()).to_string()
        }
        ReportError::MalformedArtifact { source, .. } => {
            t!("interpret.malformed_artifact", locale = locale, error = source).to_string()
        }
        ReportError::UpstreamFailure { message, .. } => message.clone(),
    }
}

//! # Markdown Summary Module
//!
//! Renders the step-summary fragment for the CI run. Rendering never fails:
//! this step runs unconditionally after the scraper, and a reporting error
//! must not hide the interpreter's own verdict. A missing or unparseable
//! artifact still produces a fragment saying so.

use std::path::Path;

use crate::core::context::RunContext;
use crate::core::error::ReportError;
use crate::core::models::ScrapeResult;
use crate::infra::fs::load_scrape_result;
use crate::infra::t;

/// Loads the artifact at `path` and renders the matching fragment.
pub fn render_summary(path: &Path, context: &RunContext, locale: &str) -> String {
    match load_scrape_result(path) {
        Ok(result) => render_result(&result, context, locale),
        Err(ReportError::MalformedArtifact { source, .. }) => {
            render_malformed(source.as_ref(), context, locale)
        }
        // `load_scrape_result` only fails otherwise when the file is absent.
        Err(_) => {
            let mut out = render_no_results(locale);
            out.push_str(&context_section(context, locale));
            out
        }
    }
}

/// Renders the success or failure fragment for a parsed document.
pub fn render_result(result: &ScrapeResult, context: &RunContext, locale: &str) -> String {
    if result.status.is_success() {
        render_success(result, context, locale)
    } else {
        render_failure(result, context, locale)
    }
}

/// Success fragment: the four statistics and the module structure.
pub fn render_success(result: &ScrapeResult, context: &RunContext, locale: &str) -> String {
    let stats = &result.stats;
    let mut out = title(locale);
    out.push_str(&field(
        &t!("summary.status", locale = locale),
        &t!("summary.status_success", locale = locale),
    ));
    out.push('\n');
    out.push_str(&item(&t!("summary.total", locale = locale), &stats.total_listed.to_string()));
    out.push_str(&item(
        &t!("summary.with_detail", locale = locale),
        &stats.with_detail.to_string(),
    ));
    out.push_str(&item(
        &t!("summary.duration", locale = locale),
        &format!("{} {}", stats.duration_secs, t!("summary.seconds", locale = locale)),
    ));
    out.push_str(&item(
        &t!("summary.success_rate", locale = locale),
        &format!("{}%", stats.detail_success_rate),
    ));

    out.push_str(&format!("\n### {}\n\n", t!("summary.structure_title", locale = locale)));
    out.push_str(&format!(
        "- `modulo_remates`: {}\n",
        t!("summary.structure_listing", locale = locale)
    ));
    out.push_str(&format!(
        "- `modulo_detalle_remates`: {}\n",
        t!("summary.structure_detail", locale = locale)
    ));

    out.push_str(&context_section(context, locale));
    out
}

/// Failure fragment for `error` and unknown statuses.
pub fn render_failure(result: &ScrapeResult, context: &RunContext, locale: &str) -> String {
    let message = result
        .error_message()
        .unwrap_or_else(|| t!("summary.unknown_error", locale = locale).to_string());

    let mut out = title(locale);
    out.push_str(&field(
        &t!("summary.status", locale = locale),
        &format!(
            "{} (`{}`)",
            t!("summary.status_failure", locale = locale),
            result.status
        ),
    ));
    out.push('\n');
    out.push_str(&item(&t!("summary.error", locale = locale), &message));
    out.push_str(&context_section(context, locale));
    out
}

/// Fixed fragment for a run that produced no artifact.
pub fn render_no_results(locale: &str) -> String {
    let mut out = title(locale);
    out.push_str(&t!("summary.no_results", locale = locale));
    out.push('\n');
    out
}

/// Fragment for an artifact that exists but could not be read or parsed.
pub fn render_malformed(
    cause: &(dyn std::error::Error + Send + Sync),
    context: &RunContext,
    locale: &str,
) -> String {
    let mut out = title(locale);
    out.push_str(&format!(
        "{}:\n\n```\n{}\n```\n",
        t!("summary.malformed", locale = locale),
        cause
    ));
    out.push_str(&context_section(context, locale));
    out
}

fn title(locale: &str) -> String {
    format!("## {}\n\n", t!("summary.title", locale = locale))
}

fn field(label: &str, value: &str) -> String {
    format!("**{}:** {}\n", label, value)
}

fn item(label: &str, value: &str) -> String {
    format!("- **{}:** {}\n", label, value)
}

fn context_section(context: &RunContext, locale: &str) -> String {
    if context.is_empty() {
        return String::new();
    }

    let mut out = format!("\n### {}\n\n", t!("summary.context_title", locale = locale));
    if let Some(trigger) = &context.trigger {
        out.push_str(&item(&t!("summary.trigger", locale = locale), trigger));
    }
    if let Some(max_details) = &context.max_details {
        out.push_str(&item(&t!("summary.max_details", locale = locale), max_details));
    }
    if let Some(headless) = &context.headless {
        out.push_str(&item(&t!("summary.headless", locale = locale), headless));
    }
    out
}

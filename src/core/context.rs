//! Informational run inputs passed through by the CI orchestrator.

/// Trigger source, max-details count and headless flag of the scraper run.
///
/// These values are displayed as given and never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    pub trigger: Option<String>,
    pub max_details: Option<String>,
    pub headless: Option<String>,
}

impl RunContext {
    /// Builds a context, dropping blank values so that an empty env var
    /// reads as unset.
    pub fn new(
        trigger: Option<String>,
        max_details: Option<String>,
        headless: Option<String>,
    ) -> Self {
        Self {
            trigger: non_blank(trigger),
            max_details: non_blank(max_details),
            headless: non_blank(headless),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.trigger.is_none() && self.max_details.is_none() && self.headless.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

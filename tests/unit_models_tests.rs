//! # Models Module Unit Tests
//!
//! Parsing of the scraper's result document: defaults for missing fields,
//! status mapping and rejection of wrongly shaped sections.

mod common;

use common::SUCCESS_JSON;
use remates_report::core::models::{Metric, ScrapeResult, ScrapeStatus};

#[cfg(test)]
mod status_tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        let success = ScrapeResult::from_json(r#"{"status": "success"}"#).unwrap();
        assert_eq!(success.status, ScrapeStatus::Success);
        assert!(success.status.is_success());

        let error = ScrapeResult::from_json(r#"{"status": "error"}"#).unwrap();
        assert_eq!(error.status, ScrapeStatus::Error);
        assert!(!error.status.is_success());
    }

    #[test]
    fn test_other_status_is_unknown() {
        let result = ScrapeResult::from_json(r#"{"status": "partial"}"#).unwrap();
        assert_eq!(result.status, ScrapeStatus::Unknown("partial".to_string()));
        assert_eq!(result.status.as_str(), "partial");
    }

    #[test]
    fn test_missing_status_defaults_to_unknown() {
        let result = ScrapeResult::from_json("{}").unwrap();
        assert_eq!(result.status, ScrapeStatus::Unknown("unknown".to_string()));

        let null_status = ScrapeResult::from_json(r#"{"status": null}"#).unwrap();
        assert_eq!(null_status.status.as_str(), "unknown");
    }

    #[test]
    fn test_status_is_case_sensitive() {
        let result = ScrapeResult::from_json(r#"{"status": "SUCCESS"}"#).unwrap();
        assert!(!result.status.is_success());
        assert_eq!(result.status.to_string(), "SUCCESS");
    }

    #[test]
    fn test_non_string_status_keeps_json_text() {
        let result = ScrapeResult::from_json(r#"{"status": 5}"#).unwrap();
        assert_eq!(result.status, ScrapeStatus::Unknown("5".to_string()));
    }
}

#[cfg(test)]
mod document_tests {
    use super::*;

    #[test]
    fn test_full_success_document() {
        let result = ScrapeResult::from_json(SUCCESS_JSON).unwrap();

        assert_eq!(result.stats.total_listed.to_string(), "12");
        assert_eq!(result.stats.with_detail.to_string(), "10");
        assert_eq!(result.stats.duration_secs.to_string(), "45.2");
        assert_eq!(result.stats.detail_success_rate.to_string(), "83.3");
        assert_eq!(result.applied_filter_count(), 1);
        assert_eq!(result.form_field_count(), 0);
        assert_eq!(result.result_count(), 3);
        assert_eq!(result.detail_count(), 10);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let result = ScrapeResult::from_json(r#"{"status": "success"}"#).unwrap();

        assert_eq!(result.stats.total_listed, Metric::default());
        assert_eq!(result.stats.total_listed.to_string(), "0");
        assert_eq!(result.applied_filter_count(), 0);
        assert_eq!(result.form_field_count(), 0);
        assert_eq!(result.result_count(), 0);
        assert_eq!(result.detail_count(), 0);
        assert_eq!(result.error_message(), None);
    }

    #[test]
    fn test_partial_stats_default_missing_fields() {
        let result = ScrapeResult::from_json(
            r#"{"status": "success", "estadisticas": {"remates_con_detalle": 4}}"#,
        )
        .unwrap();

        assert_eq!(result.stats.total_listed.to_string(), "0");
        assert_eq!(result.stats.with_detail.to_string(), "4");
        assert_eq!(result.stats.duration_secs.to_string(), "0");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let result = ScrapeResult::from_json(
            r#"{"status": "success", "timestamp": "2024-01-01", "estadisticas": {"extra": true}}"#,
        )
        .unwrap();
        assert!(result.status.is_success());
    }

    #[test]
    fn test_error_message() {
        let result = ScrapeResult::from_json(r#"{"status": "error", "error_message": "timeout"}"#)
            .unwrap();
        assert_eq!(result.error_message(), Some("timeout".to_string()));

        let null_message =
            ScrapeResult::from_json(r#"{"status": "error", "error_message": null}"#).unwrap();
        assert_eq!(null_message.error_message(), None);

        let structured = ScrapeResult::from_json(
            r#"{"status": "error", "error_message": {"code": 504}}"#,
        )
        .unwrap();
        assert_eq!(structured.error_message(), Some(r#"{"code":504}"#.to_string()));
    }
}

#[cfg(test)]
mod metric_tests {
    use super::*;

    #[test]
    fn test_metric_display() {
        assert_eq!(Metric::default().to_string(), "0");
        assert_eq!(Metric::new(12).to_string(), "12");
        assert_eq!(Metric::new(45.2).to_string(), "45.2");
        assert_eq!(Metric::new("n/a").to_string(), "n/a");
    }

    #[test]
    fn test_null_metric_reads_as_zero() {
        let result = ScrapeResult::from_json(
            r#"{"status": "success", "estadisticas": {"total_remates_listado": null}}"#,
        )
        .unwrap();
        assert_eq!(result.stats.total_listed, Metric::default());
        assert_eq!(result.stats.total_listed.to_string(), "0");
    }
}

#[cfg(test)]
mod malformed_tests {
    use super::*;

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(ScrapeResult::from_json("{\"status\": ").is_err());
        assert!(ScrapeResult::from_json("").is_err());
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(ScrapeResult::from_json(r#"["success"]"#).is_err());
        assert!(ScrapeResult::from_json("null").is_err());
        assert!(ScrapeResult::from_json("\"success\"").is_err());
    }

    #[test]
    fn test_stats_must_be_object() {
        assert!(ScrapeResult::from_json(r#"{"status": "success", "estadisticas": [12, 10]}"#).is_err());
        assert!(ScrapeResult::from_json(r#"{"status": "success", "estadisticas": null}"#).is_err());
    }

    #[test]
    fn test_module_sections_must_have_their_shape() {
        assert!(ScrapeResult::from_json(
            r#"{"status": "success", "modulo_remates": {"resultados": "tres"}}"#
        )
        .is_err());
        assert!(ScrapeResult::from_json(
            r#"{"status": "success", "modulo_remates": {"filtros_aplicados": [1]}}"#
        )
        .is_err());
        assert!(ScrapeResult::from_json(r#"{"status": "success", "modulo_detalle_remates": 3}"#)
            .is_err());
    }
}

//! Ancestry report domain model
//!
//! The report is produced once per successful model call and owned by the
//! flow session for the duration of the Results step. Field names follow
//! the wire shape the model is asked to emit.

mod normalize;

pub use normalize::normalize_breakdown;

use serde::{Deserialize, Serialize};

/// Confidence label attached to a regional percentage.
///
/// The model is instructed to use exactly these three Arabic words; anything
/// else fails schema validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "مرتفع")]
    High,
    #[serde(rename = "متوسط")]
    Medium,
    #[serde(rename = "منخفض")]
    Low,
}

impl Confidence {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "مرتفع",
            Self::Medium => "متوسط",
            Self::Low => "منخفض",
        }
    }
}

/// One entry of the regional percentage breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AncestryRegion {
    pub region: String,
    pub percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

/// Free-text historical blurb for one of the top regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalContext {
    pub region: String,
    pub context: String,
}

/// The assembled report rendered by the Results step.
///
/// Invariant: after [`normalize_breakdown`] the percentages in
/// `regional_breakdown` sum to exactly 100 (modulo the documented
/// negative-last clamp edge case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AncestryReport {
    pub summary: String,
    pub regional_breakdown: Vec<AncestryRegion>,
    pub historical_contexts: Vec<HistoricalContext>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_parses_from_wire_shape() {
        let raw = r#"{
            "summary": "ملخص",
            "regionalBreakdown": [
                {"region": "شبه الجزيرة العربية", "percentage": 60, "confidence": "مرتفع"},
                {"region": "الشام", "percentage": 40, "confidence": "منخفض"}
            ],
            "historicalContexts": [
                {"region": "الشام", "context": "سياق تاريخي"}
            ]
        }"#;

        let report: AncestryReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.regional_breakdown.len(), 2);
        assert_eq!(
            report.regional_breakdown[0].confidence,
            Some(Confidence::High)
        );
        assert_eq!(report.historical_contexts[0].region, "الشام");
    }

    #[test]
    fn confidence_is_optional_on_the_wire() {
        let raw = r#"{"region": "الأناضول", "percentage": 12.5}"#;
        let region: AncestryRegion = serde_json::from_str(raw).unwrap();
        assert_eq!(region.confidence, None);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let raw = r#"{"summary": "ملخص", "regionalBreakdown": []}"#;
        assert!(serde_json::from_str::<AncestryReport>(raw).is_err());
    }

    #[test]
    fn unknown_confidence_label_is_rejected() {
        let raw = r#"{"region": "فارس", "percentage": 10, "confidence": "ربما"}"#;
        assert!(serde_json::from_str::<AncestryRegion>(raw).is_err());
    }
}

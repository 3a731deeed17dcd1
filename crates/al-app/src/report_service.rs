//! Report generation service
//!
//! The one outbound call this application makes: decode the uploaded image,
//! compose the analysis instruction, send both with a strict response schema
//! to the vision model, then validate and renormalize what comes back.

use std::sync::Arc;

use serde_json::json;
use thiserror::Error;
use tracing::{debug, info, info_span, Instrument};

use al_core::media::{decode_data_url, ImageDecodeError};
use al_core::ports::{ModelError, VisionModelPort};
use al_core::report::normalize_breakdown;
use al_core::{AncestryReport, UserData};

/// Why a report request failed. Callers above the flow boundary collapse all
/// three into one user-facing message; the distinction is kept for logging.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid image payload: {0}")]
    InvalidImage(#[from] ImageDecodeError),

    #[error("model response failed validation: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] ModelError),
}

const BASE_INSTRUCTION: &str = "Analyze the facial features from the provided image to generate a plausible, detailed genetic ancestry report for the person shown.\n\
The report should be tailored to features suggesting Middle Eastern origins.\n\
The report must include:\n\
1. A brief, engaging summary.\n\
2. A percentage breakdown for different regions (e.g., Arabian Peninsula, North Africa, Levant, Anatolia, Persia). For each region, you MUST provide a confidence level (using only one of these exact Arabic words: 'مرتفع'، 'متوسط'، 'منخفض') based on the clarity of the visual markers.\n\
3. Interesting and detailed historical context for the top 2-3 major regions identified in the breakdown.\n\
\n\
Ensure the percentages add up to 100.\n\
The response must be in Arabic.";

/// Generates ancestry reports through the vision model port.
pub struct ReportService {
    model: Arc<dyn VisionModelPort>,
}

impl ReportService {
    pub fn new(model: Arc<dyn VisionModelPort>) -> Self {
        Self { model }
    }

    /// Run the full request pipeline for one submission.
    pub async fn generate(&self, user_data: &UserData) -> Result<AncestryReport, ReportError> {
        let span = info_span!("report.generate");

        async {
            let image = decode_data_url(&user_data.image)?;
            debug!(mime = image.mime_type.as_str(), bytes = image.data.len(), "image decoded");

            let instruction = compose_instruction(user_data);
            let schema = response_schema();

            let raw = self.model.generate(&image, &instruction, &schema).await?;
            let mut report: AncestryReport = serde_json::from_str(raw.trim())?;

            normalize_breakdown(&mut report.regional_breakdown);

            info!(
                regions = report.regional_breakdown.len(),
                contexts = report.historical_contexts.len(),
                "report assembled"
            );
            Ok(report)
        }
        .instrument(span)
        .await
    }
}

/// Compose the natural-language instruction for one submission. The base
/// request is fixed; region filters append their clauses with the Arabic
/// comma the rest of the text uses.
pub fn compose_instruction(user_data: &UserData) -> String {
    let mut instruction = BASE_INSTRUCTION.to_string();

    if !user_data.include_regions.is_empty() {
        instruction.push_str(&format!(
            "\nCRITICAL: Prioritize the analysis, percentage breakdown, and historical context on the following user-specified regions: {}. Provide especially detailed historical context for these specific regions if they appear in the results. These regions are the user's main interest.",
            user_data.include_regions.join("، ")
        ));
    }

    if !user_data.exclude_regions.is_empty() {
        instruction.push_str(&format!(
            "\nCRITICAL: Strictly exclude these regions from the entire report: {}. Do not list them in the breakdown or mention them in the summary or historical context.",
            user_data.exclude_regions.join("، ")
        ));
    }

    instruction
}

/// The strict output schema sent alongside the request. Field descriptions
/// are in Arabic because the report itself is.
pub fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "ملخص عام جذاب لنتائج الأصول الجينية باللغة العربية."
            },
            "regionalBreakdown": {
                "type": "ARRAY",
                "description": "تفصيل النسب المئوية للمناطق الجينية باللغة العربية مع مستوى الثقة.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "region": {
                            "type": "STRING",
                            "description": "اسم المنطقة الجغرافية باللغة العربية."
                        },
                        "percentage": {
                            "type": "NUMBER",
                            "description": "النسبة المئوية للأصل من هذه المنطقة."
                        },
                        "confidence": {
                            "type": "STRING",
                            "description": "مستوى الثقة في النسبة المئوية ('مرتفع'، 'متوسط'، 'منخفض') باللغة العربية."
                        }
                    },
                    "required": ["region", "percentage", "confidence"]
                }
            },
            "historicalContexts": {
                "type": "ARRAY",
                "description": "معلومات تاريخية عن الأصول الجينية الرئيسية باللغة العربية.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "region": {
                            "type": "STRING",
                            "description": "اسم المنطقة المرتبطة بالمعلومة التاريخية باللغة العربية."
                        },
                        "context": {
                            "type": "STRING",
                            "description": "فقرة قصيرة تشرح السياق التاريخي لهذه المنطقة الجينية باللغة العربية."
                        }
                    },
                    "required": ["region", "context"]
                }
            }
        },
        "required": ["summary", "regionalBreakdown", "historicalContexts"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use al_core::media::ImageContent;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedModel {
        response: Result<String, fn() -> ModelError>,
        seen_instruction: Mutex<Option<String>>,
    }

    impl CannedModel {
        fn ok(response: &str) -> Self {
            Self {
                response: Ok(response.to_string()),
                seen_instruction: Mutex::new(None),
            }
        }

        fn failing(make: fn() -> ModelError) -> Self {
            Self {
                response: Err(make),
                seen_instruction: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl VisionModelPort for CannedModel {
        async fn generate(
            &self,
            _image: &ImageContent,
            instruction: &str,
            _response_schema: &serde_json::Value,
        ) -> Result<String, ModelError> {
            *self.seen_instruction.lock().unwrap() = Some(instruction.to_string());
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn user_data() -> UserData {
        UserData {
            image: "data:image/png;base64,aGVsbG8=".to_string(),
            include_regions: vec![],
            exclude_regions: vec![],
        }
    }

    const VALID_RESPONSE: &str = r#"{
        "summary": "ملخص",
        "regionalBreakdown": [
            {"region": "A", "percentage": 30, "confidence": "مرتفع"},
            {"region": "B", "percentage": 30, "confidence": "متوسط"},
            {"region": "C", "percentage": 55, "confidence": "منخفض"}
        ],
        "historicalContexts": [
            {"region": "A", "context": "سياق"}
        ]
    }"#;

    #[tokio::test]
    async fn generates_and_normalizes_a_report() {
        let service = ReportService::new(Arc::new(CannedModel::ok(VALID_RESPONSE)));

        let report = service.generate(&user_data()).await.unwrap();
        let total: f64 = report
            .regional_breakdown
            .iter()
            .map(|r| r.percentage)
            .sum();
        assert_eq!(total, 100.0);
        assert_eq!(report.regional_breakdown.len(), 3);
        // The raw sum was 115; the last entry absorbed the drift.
        assert_eq!(report.regional_breakdown[2].percentage, 48.0);
    }

    #[tokio::test]
    async fn invalid_image_fails_before_the_model_is_called() {
        let model = Arc::new(CannedModel::ok(VALID_RESPONSE));
        let service = ReportService::new(model.clone());

        let mut data = user_data();
        data.image = "data:image/gif;base64,aGk=".to_string();

        let err = service.generate(&data).await.unwrap_err();
        assert!(matches!(err, ReportError::InvalidImage(_)));
        assert!(model.seen_instruction.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn unparseable_response_is_malformed() {
        let service = ReportService::new(Arc::new(CannedModel::ok("not json")));
        let err = service.generate(&user_data()).await.unwrap_err();
        assert!(matches!(err, ReportError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn missing_required_field_is_malformed() {
        let service = ReportService::new(Arc::new(CannedModel::ok(
            r#"{"summary": "s", "regionalBreakdown": []}"#,
        )));
        let err = service.generate(&user_data()).await.unwrap_err();
        assert!(matches!(err, ReportError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn model_failure_is_transport() {
        let service = ReportService::new(Arc::new(CannedModel::failing(|| {
            ModelError::Transport("connection refused".to_string())
        })));
        let err = service.generate(&user_data()).await.unwrap_err();
        assert!(matches!(err, ReportError::Transport(_)));
    }

    #[test]
    fn instruction_has_no_filter_clauses_by_default() {
        let instruction = compose_instruction(&user_data());
        assert!(instruction.contains("The response must be in Arabic."));
        assert!(!instruction.contains("CRITICAL"));
    }

    #[test]
    fn include_regions_are_prioritized() {
        let mut data = user_data();
        data.include_regions = vec![
            "شبه الجزيرة العربية".to_string(),
            "الشام".to_string(),
        ];
        let instruction = compose_instruction(&data);
        assert!(instruction.contains("Prioritize the analysis"));
        assert!(instruction.contains("شبه الجزيرة العربية، الشام"));
    }

    #[test]
    fn exclude_regions_are_omitted_everywhere() {
        let mut data = user_data();
        data.exclude_regions = vec!["فارس".to_string()];
        let instruction = compose_instruction(&data);
        assert!(instruction.contains("Strictly exclude these regions"));
        assert!(instruction.contains("فارس"));
    }

    #[test]
    fn schema_requires_the_three_top_level_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec!["summary", "regionalBreakdown", "historicalContexts"]
        );
    }
}

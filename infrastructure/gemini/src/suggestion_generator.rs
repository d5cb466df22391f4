use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use business::domain::suggestion::errors::SuggestionError;
use business::domain::suggestion::model::ComplementarySuggestions;
use business::domain::suggestion::services::SuggestionGeneratorService;

use crate::client::GeminiClient;

const SYSTEM_PROMPT: &str = r#"You are the concierge of Halaq, a traditional barbershop.
A guest has just picked a service. Recommend complementary services from a
barbershop menu and one beverage to serve during the visit.

Rules:
- Suggest 2-3 complementary services maximum, most relevant first
- Never repeat the service the guest already picked
- The beverage should fit the occasion (Turkish coffee, mint tea, ...)
- Return ONLY valid JSON, no additional text"#;

pub struct SuggestionGeneratorGemini {
    client: GeminiClient,
}

impl SuggestionGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(selected_service: &str) -> String {
        format!(
            r#"The guest selected: "{}"

Return JSON with this EXACT structure:
{{
  "suggestedServices": ["Service name", "Service name"],
  "coffeeSuggestion": "Beverage name"
}}"#,
            selected_service
        )
    }

    /// Parses the model's text output into the fixed suggestion shape.
    /// All-or-nothing: a payload missing either field is an error, never a
    /// partially-filled result.
    fn parse_response(content: &str) -> Result<ComplementarySuggestions, SuggestionError> {
        // Models occasionally wrap the payload in markdown fences or prose;
        // take the outermost JSON object.
        static JSON_OBJECT: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("json pattern compiles"));
        let json_text = JSON_OBJECT
            .find(content)
            .map(|m| m.as_str())
            .ok_or(SuggestionError::FetchFailed)?;

        let payload: SuggestionPayload =
            serde_json::from_str(json_text).map_err(|_| SuggestionError::FetchFailed)?;

        Ok(ComplementarySuggestions {
            suggested_services: payload.suggested_services,
            coffee_suggestion: payload.coffee_suggestion,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionPayload {
    suggested_services: Vec<String>,
    coffee_suggestion: String,
}

#[async_trait]
impl SuggestionGeneratorService for SuggestionGeneratorGemini {
    async fn suggest(
        &self,
        selected_service: &str,
    ) -> Result<ComplementarySuggestions, SuggestionError> {
        let body = json!({
            "systemInstruction": {
                "parts": [{"text": SYSTEM_PROMPT}],
            },
            "contents": [{
                "role": "user",
                "parts": [{"text": Self::build_prompt(selected_service)}],
            }],
            "generationConfig": {
                "temperature": 0.7,
                "maxOutputTokens": 512,
                "responseMimeType": "application/json",
            },
        });

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|_| SuggestionError::FetchFailed)?;

        if !response.status().is_success() {
            return Err(SuggestionError::FetchFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| SuggestionError::FetchFailed)?;

        let content = data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|part| part["text"].as_str())
            .ok_or(SuggestionError::FetchFailed)?;

        Self::parse_response(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_the_exact_documented_shape_unchanged() {
        let content = r#"{"suggestedServices": ["Beard Trim", "Facial"], "coffeeSuggestion": "Turkish Coffee"}"#;

        let parsed = SuggestionGeneratorGemini::parse_response(content).unwrap();

        assert_eq!(
            parsed,
            ComplementarySuggestions {
                suggested_services: vec!["Beard Trim".to_string(), "Facial".to_string()],
                coffee_suggestion: "Turkish Coffee".to_string(),
            }
        );
    }

    #[test]
    fn should_fail_when_coffee_suggestion_is_missing() {
        let content = r#"{"suggestedServices": ["Beard Trim"]}"#;

        let result = SuggestionGeneratorGemini::parse_response(content);

        assert!(matches!(result, Err(SuggestionError::FetchFailed)));
    }

    #[test]
    fn should_fail_when_suggested_services_is_missing() {
        let content = r#"{"coffeeSuggestion": "Turkish Coffee"}"#;

        let result = SuggestionGeneratorGemini::parse_response(content);

        assert!(matches!(result, Err(SuggestionError::FetchFailed)));
    }

    #[test]
    fn should_unwrap_markdown_fences_around_the_payload() {
        let content = "```json\n{\"suggestedServices\": [], \"coffeeSuggestion\": \"Mint Tea\"}\n```";

        let parsed = SuggestionGeneratorGemini::parse_response(content).unwrap();

        assert!(parsed.suggested_services.is_empty());
        assert_eq!(parsed.coffee_suggestion, "Mint Tea");
    }

    #[test]
    fn should_fail_on_non_json_output() {
        for content in ["", "I suggest a beard trim!", "null", "[1, 2]"] {
            let result = SuggestionGeneratorGemini::parse_response(content);
            assert!(matches!(result, Err(SuggestionError::FetchFailed)));
        }
    }

    #[test]
    fn should_preserve_suggestion_order() {
        let content = r#"{"suggestedServices": ["c", "a", "b"], "coffeeSuggestion": "x"}"#;

        let parsed = SuggestionGeneratorGemini::parse_response(content).unwrap();

        assert_eq!(parsed.suggested_services, vec!["c", "a", "b"]);
    }
}

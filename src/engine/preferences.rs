//! Traveler preference record and the LLM extraction adapter.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::prompts;
use crate::engine::session::ConversationTurn;
use crate::llm::{ChatMessage, GenerationRequest, TextGenerator};

fn default_duration() -> u32 {
    7
}

/// Structured travel preferences extracted from a transcript.
///
/// Fixed shape with explicit defaults — "unknown" is an empty string,
/// 7 days, or an empty set, never a null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// Travel style: adventure, beach, culture, history, nature, or mix.
    #[serde(default)]
    pub style: String,
    /// Who is traveling: solo, couple, family, or friends.
    #[serde(default)]
    pub companions: String,
    /// Budget category: budget, mid-range, or luxury.
    #[serde(default)]
    pub budget: String,
    /// Trip length in days.
    #[serde(default = "default_duration")]
    pub duration_days: u32,
    /// Specific interests, free-form.
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            style: String::new(),
            companions: String::new(),
            budget: String::new(),
            duration_days: default_duration(),
            interests: Vec::new(),
        }
    }
}

/// Adapter that asks the generation backend to extract a
/// `PreferenceRecord` from the transcript.
///
/// Failure-tolerant by design: a failed call or unparseable output yields
/// `None` and the conversation simply continues.
pub struct PreferenceExtractor {
    generator: Arc<dyn TextGenerator>,
}

impl PreferenceExtractor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Extract preferences from the transcript, or `None` on any failure.
    pub async fn extract(&self, transcript: &[ConversationTurn]) -> Option<PreferenceRecord> {
        let messages: Vec<ChatMessage> = transcript
            .iter()
            .map(|turn| ChatMessage {
                role: turn.role,
                text: turn.text.clone(),
            })
            .collect();

        let request = GenerationRequest::new(messages, prompts::EXTRACTION_PROMPT)
            .with_max_tokens(512)
            .with_temperature(0.0);

        let response = match self.generator.generate(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Preference extraction call failed");
                return None;
            }
        };

        match parse_extraction(&response.text) {
            Some(record) => Some(record),
            None => {
                tracing::warn!(raw = %response.text, "Preference extraction returned unparseable output");
                None
            }
        }
    }
}

/// Parse the extraction output, tolerating markdown code fences.
fn parse_extraction(raw: &str) -> Option<PreferenceRecord> {
    let stripped = raw.trim().replace("```json", "").replace("```", "");
    serde_json::from_str(stripped.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ScriptedGenerator;

    fn transcript() -> Vec<ConversationTurn> {
        vec![
            ConversationTurn::user("I want a beach trip"),
            ConversationTurn::model("Lovely! Who is coming along?"),
        ]
    }

    #[test]
    fn defaults_encode_unknown() {
        let record = PreferenceRecord::default();
        assert_eq!(record.style, "");
        assert_eq!(record.duration_days, 7);
        assert!(record.interests.is_empty());
    }

    #[test]
    fn parse_plain_json() {
        let record = parse_extraction(
            r#"{"style":"beach","companions":"couple","budget":"mid-range","duration_days":3,"interests":["diving"]}"#,
        )
        .unwrap();
        assert_eq!(record.style, "beach");
        assert_eq!(record.duration_days, 3);
        assert_eq!(record.interests, vec!["diving"]);
    }

    #[test]
    fn parse_strips_code_fences() {
        let record =
            parse_extraction("```json\n{\"style\":\"culture\",\"interests\":[]}\n```").unwrap();
        assert_eq!(record.style, "culture");
        // Missing fields fall back to defaults
        assert_eq!(record.duration_days, 7);
    }

    #[test]
    fn parse_rejects_prose() {
        assert!(parse_extraction("I could not determine the preferences.").is_none());
    }

    #[tokio::test]
    async fn extract_returns_none_on_garbage() {
        let generator = Arc::new(ScriptedGenerator::new(["not json at all"]));
        let extractor = PreferenceExtractor::new(generator);
        assert!(extractor.extract(&transcript()).await.is_none());
    }

    #[tokio::test]
    async fn extract_parses_scripted_json() {
        let generator = Arc::new(ScriptedGenerator::new([
            r#"{"style":"adventure","companions":"friends","budget":"budget","duration_days":5,"interests":["desert","camel trekking"]}"#,
        ]));
        let extractor = PreferenceExtractor::new(Arc::clone(&generator) as Arc<dyn TextGenerator>);
        let record = extractor.extract(&transcript()).await.unwrap();
        assert_eq!(record.companions, "friends");
        assert_eq!(record.interests.len(), 2);

        // The extraction call carries the extraction instruction, not the
        // conversational persona.
        let request = generator.last_request().unwrap();
        assert!(request.system_instruction.contains("travel preferences"));
    }
}

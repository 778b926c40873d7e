use serde_json::json;

use super::{CompletionBackend, LlmError};
use crate::settings::settings;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat-completions backend; model and sampling knobs come from settings.
pub struct OpenAiBackend {
    api_key: String,
}

impl OpenAiBackend {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl CompletionBackend for OpenAiBackend {
    fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let llm = &settings().llm;
        let payload = json!({
            "model": llm.model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": llm.max_tokens,
            "temperature": llm.temperature,
        });

        tracing::debug!(model = %llm.model, "requesting completion");
        let body = ureq::post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(&payload)
            .map_err(|e| LlmError::Http(format!("chat completion: {e}")))?
            .into_body()
            .read_to_string()
            .map_err(|e| LlmError::Http(format!("chat completion: {e}")))?;
        parse_completion(&body)
    }
}

/// Extract the completion text from a chat-completions response body.
fn parse_completion(body: &str) -> Result<String, LlmError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
    value["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            LlmError::MalformedResponse("missing choices[0].message.content".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_response() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "Part of Speech: Noun"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "Part of Speech: Noun");
    }

    #[test]
    fn parse_empty_choices() {
        let err = parse_completion(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }

    #[test]
    fn parse_invalid_json() {
        let err = parse_completion("not json").unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }
}

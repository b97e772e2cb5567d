// src/summarizer.rs
use log::info;
use reqwest::Client;
use std::time::Instant;

use crate::config::{AppConfig, Mode};
use crate::errors::Result;
use crate::models::SummaryRequest;
use crate::prompt;
use crate::providers::{gemini::GeminiProvider, mock::MockProvider, LlmProvider};

/// Sends one document through a provider using the fixed legal-explainer prompt.
pub async fn summarize_with<P: LlmProvider>(provider: &P, document_text: &str) -> Result<String> {
    let system_instruction = prompt::system_instruction();
    let user_prompt = prompt::user_prompt(document_text);
    provider.generate(&system_instruction, &user_prompt).await
}

/// Summarize a request according to the configured mode.
///
/// Mock mode never resolves a credential. Live mode resolves it afresh for
/// every request, so a key passed in the request body takes effect only for
/// that request.
pub async fn summarize_document(
    config: &AppConfig,
    client: &Client,
    request: &SummaryRequest,
) -> Result<String> {
    let start = Instant::now();

    let summary = match config.mode {
        Mode::Mock => summarize_with(&MockProvider, &request.text).await?,
        Mode::Live => {
            let api_key = config.credentials.resolve(request.api_key.as_deref())?;
            let provider = GeminiProvider::new(client.clone(), config.gemini.clone(), api_key);
            summarize_with(&provider, &request.text).await?
        }
    };

    info!(
        "Summarized {} chars into {} chars in {} mode ({}ms)",
        request.text.chars().count(),
        summary.chars().count(),
        config.mode,
        start.elapsed().as_millis()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CredentialResolver;
    use crate::errors::LegalEaseError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProvider {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl LlmProvider for RecordingProvider {
        async fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((system_instruction.to_string(), prompt.to_string()));
            Ok("recorded".to_string())
        }
    }

    fn config(mode: Mode) -> AppConfig {
        let dir = std::env::temp_dir().join("legalease-summarizer-tests-missing");
        let credentials = CredentialResolver::with_lookup(dir.join(".env"), |_| None);
        let mut config = AppConfig::from_lookup(|_| None, credentials).unwrap();
        config.mode = mode;
        config
    }

    #[actix_rt::test]
    async fn test_summarize_with_composes_prompt() {
        let provider = RecordingProvider::default();
        let out = summarize_with(&provider, "Section 1. Definitions.").await.unwrap();
        assert_eq!(out, "recorded");

        let calls = provider.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (system, user) = &calls[0];
        assert!(system.contains(prompt::DISCLAIMER));
        assert!(user.contains("---\nSection 1. Definitions.\n---"));
    }

    #[actix_rt::test]
    async fn test_mock_mode_skips_credentials() {
        let request = SummaryRequest { text: String::new(), api_key: None };
        let summary = summarize_document(&config(Mode::Mock), &Client::new(), &request)
            .await
            .unwrap();
        assert_eq!(summary, prompt::mock_summary());
    }

    #[actix_rt::test]
    async fn test_live_mode_without_credential_fails_before_network() {
        let request = SummaryRequest { text: "doc".to_string(), api_key: None };
        let result = summarize_document(&config(Mode::Live), &Client::new(), &request).await;
        assert!(matches!(result, Err(LegalEaseError::Config(_))));
    }
}

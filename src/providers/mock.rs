// src/providers/mock.rs

use crate::errors::Result;
use crate::prompt;
use crate::providers::LlmProvider;

/// Offline provider used when the service runs with `LEG_MODE=mock`.
/// Ignores its input and never touches the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockProvider;

impl LlmProvider for MockProvider {
    async fn generate(&self, _system_instruction: &str, _prompt: &str) -> Result<String> {
        Ok(prompt::mock_summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_mock_provider_ignores_input() {
        let a = MockProvider.generate("sys", "").await.unwrap();
        let b = MockProvider.generate("other", "a long document").await.unwrap();
        assert_eq!(a, b);
        assert!(a.contains(prompt::DISCLAIMER));
    }
}

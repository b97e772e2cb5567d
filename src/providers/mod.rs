// src/providers/mod.rs

use crate::errors::Result;

pub mod gemini;
pub mod mock;

/// A common trait for the backends that turn a document prompt into a summary.
///
/// Note: We're not using async_trait here, so implementers must handle async directly.
pub trait LlmProvider: Send + Sync {
    /// Generates a response from the model.
    ///
    /// # Arguments
    /// * `system_instruction` - Fixed instructions describing the expected answer.
    /// * `prompt` - The user turn carrying the document text.
    fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

// src/prompt.rs

/// Appended verbatim to every summary, live or mock.
pub const DISCLAIMER: &str = "Disclaimer: I am an AI assistant and not a lawyer. \
This analysis is for informational purposes only and is not legal advice. \
You should consult with a qualified legal professional for advice on your specific situation.";

/// Markdown section headings the model is asked to produce, in order.
pub const SECTIONS: [&str; 3] = [
    "Plain-English Summary",
    "Legal Jargon Explained",
    "General Suggestions",
];

/// Builds the system instruction sent alongside every document.
pub fn system_instruction() -> String {
    format!(
        r###"You are 'LegalEase AI', a helpful legal assistant. Your job is to analyze legal documents and explain them in simple, plain English (around an 8th-grade reading level). Use Markdown for formatting your response (e.g., "## Summary", "## Complex Terms", "* Item 1").

Your response MUST include three sections:
1.  **## {}:** A brief summary of the document's main purpose and key points.
2.  **## {}:** Identify and define complex legal terms from the document in a simple, easy-to-understand way. List them as bullet points.
3.  **## {}:** Provide a list of general, common-sense next steps or things to consider based on the document's content.

IMPORTANT: You must never provide specific legal advice, recommend a specific lawyer, or create a client-attorney relationship. Always include this disclaimer at the end of your response, exactly as written:
'{}'"###,
        SECTIONS[0], SECTIONS[1], SECTIONS[2], DISCLAIMER
    )
}

/// Wraps the document text between delimiter lines.
pub fn user_prompt(document_text: &str) -> String {
    format!(
        "Here is the legal document text:\n---\n{}\n---\nPlease analyze it according to your instructions.",
        document_text
    )
}

/// Canned response returned in mock mode.
pub fn mock_summary() -> String {
    format!(
        "## {}:\nThis is a mock summary used in mock mode.\n\n\
         ## {}:\n* MockTerm - A mocked definition.\n\n\
         ## {}:\n* Review the document with a qualified lawyer.\n\n\
         {}",
        SECTIONS[0], SECTIONS[1], SECTIONS[2], DISCLAIMER
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_names_sections_and_disclaimer() {
        let instruction = system_instruction();
        for section in SECTIONS {
            assert!(instruction.contains(&format!("## {}", section)), "missing {}", section);
        }
        assert!(instruction.contains(DISCLAIMER));
        assert!(instruction.contains("LegalEase AI"));
        assert!(instruction.contains(r###"(e.g., "## Summary", "## Complex Terms", "* Item 1")"###));
        assert!(instruction.ends_with(&format!("'{}'", DISCLAIMER)));
    }

    #[test]
    fn test_user_prompt_delimits_document() {
        let prompt = user_prompt("The tenant shall pay rent monthly.");
        assert!(prompt.contains("---\nThe tenant shall pay rent monthly.\n---"));
        assert!(prompt.starts_with("Here is the legal document text:"));
    }

    #[test]
    fn test_mock_summary_shape() {
        let summary = mock_summary();
        assert!(summary.to_lowercase().contains("mock"));
        assert!(summary.ends_with(DISCLAIMER));
        assert!(summary.starts_with("## Plain-English Summary:"));
    }
}

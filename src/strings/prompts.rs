//! # Prompts
//!
//! Text sent to the language model.

/// Ask for a grammar/spelling pass over `content`.
///
/// The model is told to return only the corrected text, but nothing checks
/// that it did: whatever comes back is written to the file as-is.
pub fn correct_text(content: &str) -> String {
    format!(
        "Please correct grammar and spelling in the following text:\n\n{content}\n\nReturn only the corrected text."
    )
}

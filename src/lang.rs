//! Language identification for incoming titles
//!
//! Titles arrive in whatever language their authors wrote them in, and only the
//! English ones should reach the tokenizer. The capability is behind a trait so
//! the pipeline tests don't depend on a statistical detector's opinion of
//! four-word strings.
use whatlang;

/// Guess which language a string is written in.
pub trait LanguageId {
    /// Best-guess ISO 639-3 code for the dominant language of `text`.
    ///
    /// `None` means the detector could not decide. Callers treat that the same
    /// as "not English": the row is skipped, the run continues.
    fn language(&self, text: &str) -> Option<&'static str>;

    fn is_english(&self, text: &str) -> bool {
        self.language(text) == Some("eng")
    }
}

/// Trigram-model detection backed by the whatlang crate
pub struct Whatlang;

impl LanguageId for Whatlang {
    fn language(&self, text: &str) -> Option<&'static str> {
        whatlang::detect(text).map(|info| info.lang().code())
    }
}

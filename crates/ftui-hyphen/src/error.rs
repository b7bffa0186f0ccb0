use thiserror::Error;

pub type Result<T> = std::result::Result<T, HyphenError>;

#[derive(Debug, Error)]
pub enum HyphenError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown language: {tag}")]
    UnknownLanguage { tag: String },

    #[error("language tag is empty")]
    EmptyLanguageTag,
}

impl HyphenError {
    #[must_use]
    pub fn unknown(tag: impl Into<String>) -> Self {
        Self::UnknownLanguage { tag: tag.into() }
    }
}

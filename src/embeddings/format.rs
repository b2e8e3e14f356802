//! Embedding file formats
//!
//! Every supported source is whitespace-separated text, one word per line followed by
//! its vector components. Formats differ only in how the leading token maps to a word
//! and whether a header line precedes the vectors.

/// Parsing rules for one embedding file format
pub trait EmbeddingFormat {
    /// Whether the first line is a header to skip
    fn has_header(&self) -> bool {
        false
    }

    /// Map the leading token of a line to a vocabulary word
    ///
    /// Returns `None` to skip the line.
    fn token_to_word(&self, token: &str) -> Option<String>;
}

/// Enum wrapper for all embedding formats
///
/// Allows runtime selection of format while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingFormatType {
    /// Stanford GloVe text vectors
    Glove(Glove),
    /// Language-prefixed post-specialized vectors (`en_word`)
    PostSpec(PostSpec),
    /// word2vec text format with a `count dimension` header
    Word2VecText(Word2VecText),
}

impl EmbeddingFormat for EmbeddingFormatType {
    fn has_header(&self) -> bool {
        match self {
            Self::Glove(f) => f.has_header(),
            Self::PostSpec(f) => f.has_header(),
            Self::Word2VecText(f) => f.has_header(),
        }
    }

    fn token_to_word(&self, token: &str) -> Option<String> {
        match self {
            Self::Glove(f) => f.token_to_word(token),
            Self::PostSpec(f) => f.token_to_word(token),
            Self::Word2VecText(f) => f.token_to_word(token),
        }
    }
}

impl EmbeddingFormatType {
    /// Create format from name string
    ///
    /// Supported names: "glove", "postspec", "word2vec". Returns `None` otherwise.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "glove" => Some(Self::Glove(Glove)),
            "postspec" | "post-spec" => Some(Self::PostSpec(PostSpec::default())),
            "word2vec" | "w2v" => Some(Self::Word2VecText(Word2VecText)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Glove(_) => "glove",
            Self::PostSpec(_) => "postspec",
            Self::Word2VecText(_) => "word2vec",
        }
    }
}

/// GloVe: `word v1 v2 ...`, no header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Glove;

impl EmbeddingFormat for Glove {
    fn token_to_word(&self, token: &str) -> Option<String> {
        Some(token.to_lowercase())
    }
}

/// Post-specialized vectors keyed by `<lang>_<word>`
///
/// Only tokens in the configured language are kept, with the prefix stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostSpec {
    pub language: &'static str,
}

impl Default for PostSpec {
    fn default() -> Self {
        Self { language: "en" }
    }
}

impl EmbeddingFormat for PostSpec {
    fn token_to_word(&self, token: &str) -> Option<String> {
        let (language, word) = token.split_once('_')?;
        (language == self.language && !word.is_empty()).then(|| word.to_lowercase())
    }
}

/// word2vec text output: header line, then GloVe-style lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Word2VecText;

impl EmbeddingFormat for Word2VecText {
    fn has_header(&self) -> bool {
        true
    }

    fn token_to_word(&self, token: &str) -> Option<String> {
        Some(token.to_lowercase())
    }
}

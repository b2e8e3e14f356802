//! Word embeddings
//!
//! An immutable word → vector store plus a loader parameterized by file format.
//! Load once per process and share the store read-only across solves.

mod error;
pub mod format;
pub mod loader;
mod store;

pub use error::EmbeddingError;
pub use format::{EmbeddingFormat, EmbeddingFormatType, Glove, PostSpec, Word2VecText};
pub use store::Embeddings;

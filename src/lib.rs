//! Core of the folktale study site: annotated sentences fetched from the
//! stories API, the vocabulary widget built on top of them, and the article
//! page transforms around both.

pub mod article;
pub mod client;
pub mod loader;
pub mod model;
pub mod story;
pub mod toggle;
#[cfg(feature = "web")]
pub mod web;

pub use article::{ArticleProps, ArticleRoute, IndexEntry, Page};
pub use client::{ClientError, DEFAULT_API_BASE, StoriesClient};
pub use loader::{RequestTicket, SentenceLoader};
pub use model::{FetchOutcome, Sentence, SentencePayload, Word, WordsByLine, group_words_by_line};
pub use toggle::{Affordance, COLLAPSE_TIMEOUT_MS, Visibility, VocabularyToggle};

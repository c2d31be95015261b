//! Content fetching for search results
//!
//! Fetches page content from deduplicated search result URLs and reduces each
//! page to a clean title and body text.
//!
//! ## Architecture
//!
//! ```text
//! Candidate URLs → ContentFetcher (one task per URL) → HTML → extract_article → normalize
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let fetcher = ContentFetcher::new(ContentFetchConfig::from_env(), &BrowserHeaders::default())?;
//! let extracts = fetcher.fetch_all(&candidates).await;
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod text;

pub use config::ContentFetchConfig;
pub use extractor::{extract_article, Article, ExtractError};
pub use fetcher::{ContentFetcher, FetchError};
pub use text::{clean_text, normalize, truncate_chars};

//! # Briefly
//!
//! A CLI tool for article summarisation with related-topic suggestions.
//!
//! ## Features
//!
//! - **Fetch or paste**: extract paragraph text from a URL, or bring your own
//! - **Abstractive summaries**: beam-search generation via a hosted model endpoint
//! - **Related articles**: keyword-overlap suggestions from a built-in list

pub mod config;
pub mod fetcher;
pub mod inference;
pub mod related;
pub mod session;
pub mod ui;

pub use config::Config;
pub use inference::Summarizer;
pub use related::{find_related, CandidateArticle};
pub use session::{Session, SessionState};

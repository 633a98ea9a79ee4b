//! Article fetching and paragraph extraction.
//!
//! Uses reqwest for fetching and scraper for HTML parsing.

use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;

/// User-Agent string identifying this tool
const USER_AGENT: &str = concat!("briefly/", env!("CARGO_PKG_VERSION"));

/// Timeout for the article GET request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum FetchError {
    /// Any transport-level failure: connect, timeout, status, decode.
    #[error("Error fetching article: {0}")]
    Transport(#[from] reqwest::Error),
    /// The page was reachable but carried no paragraph text.
    #[error("No article paragraphs found on this page.")]
    NoParagraphs,
}

/// Article content extracted from a webpage
#[derive(Debug, Clone)]
pub struct Article {
    /// The original URL
    pub url: String,
    /// Page title, for display only
    pub title: Option<String>,
    /// Concatenated paragraph text
    pub text: String,
}

/// Create a configured HTTP client for fetching articles
fn create_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// Fetch a URL and extract its paragraph text.
///
/// One GET, no retries. The joined text of every `<p>` element is the
/// article; a page without paragraph text is reported as
/// [`FetchError::NoParagraphs`] so the user knows the page structure,
/// not the network, was the problem.
pub async fn fetch_article(url: &str) -> Result<Article, FetchError> {
    let client = create_client()?;

    let response = client.get(url).send().await?;
    let html = response.text().await?;
    let document = Html::parse_document(&html);

    let title = extract_title(&document);
    let text = extract_paragraphs(&document);

    if text.is_empty() {
        return Err(FetchError::NoParagraphs);
    }

    Ok(Article {
        url: url.to_string(),
        title,
        text,
    })
}

/// Extract the page title from <title> or <h1>
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").unwrap();
    if let Some(element) = document.select(&title_selector).next() {
        let title: String = element.text().collect();
        if !title.trim().is_empty() {
            return Some(title.trim().to_string());
        }
    }

    let h1_selector = Selector::parse("h1").unwrap();
    if let Some(element) = document.select(&h1_selector).next() {
        let title: String = element.text().collect();
        if !title.trim().is_empty() {
            return Some(title.trim().to_string());
        }
    }

    None
}

/// Join the text of every `<p>` element in document order with single
/// spaces, trimming the result.
fn extract_paragraphs(document: &Html) -> String {
    let p_selector = Selector::parse("p").unwrap();

    let paragraphs: Vec<String> = document
        .select(&p_selector)
        .map(|element| element.text().collect::<String>())
        .collect();

    paragraphs.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paragraphs_in_document_order() {
        let html = Html::parse_document(
            "<html><body><p>First paragraph.</p><div><p>Second paragraph.</p></div></body></html>",
        );
        assert_eq!(
            extract_paragraphs(&html),
            "First paragraph. Second paragraph."
        );
    }

    #[test]
    fn collects_nested_inline_markup() {
        let html = Html::parse_document("<p>Hello <b>bold</b> world</p>");
        assert_eq!(extract_paragraphs(&html), "Hello bold world");
    }

    #[test]
    fn page_without_paragraphs_yields_empty_text() {
        let html = Html::parse_document(
            "<html><body><h1>Headline</h1><div>Not a paragraph</div></body></html>",
        );
        assert_eq!(extract_paragraphs(&html), "");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let html = Html::parse_document("<p>  padded  </p>");
        assert_eq!(extract_paragraphs(&html), "padded");
    }

    #[test]
    fn no_paragraphs_error_message_is_stable() {
        // Shown verbatim to the user, so the wording is load-bearing.
        assert_eq!(
            FetchError::NoParagraphs.to_string(),
            "No article paragraphs found on this page."
        );
    }

    #[test]
    fn extracts_title_with_h1_fallback() {
        let html = Html::parse_document("<html><head><title> My Page </title></head></html>");
        assert_eq!(extract_title(&html), Some("My Page".to_string()));

        let html = Html::parse_document("<html><body><h1>Headline</h1></body></html>");
        assert_eq!(extract_title(&html), Some("Headline".to_string()));

        let html = Html::parse_document("<html><body><p>text</p></body></html>");
        assert_eq!(extract_title(&html), None);
    }
}

//! Interactive session with explicit article state.
//!
//! The editable article text lives in a [`SessionState`] machine rather
//! than ambient UI state: `Idle -> Fetched -> UserEdited -> Summarized`.
//! Errors from fetching or inference are rendered and the loop continues,
//! so one bad URL never ends the session.

use crate::fetcher;
use crate::inference::Summarizer;
use crate::related::{self, CandidateArticle};
use crate::ui;
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Where the article text came from and what has been done with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No article text present yet
    Idle,
    /// Text fetched from a URL, not yet touched by the user
    Fetched(String),
    /// Text pasted or edited by the user
    UserEdited(String),
    /// A summary has been generated for the held text
    Summarized { article: String, summary: String },
}

impl SessionState {
    /// The current article text, if any
    pub fn article_text(&self) -> Option<&str> {
        match self {
            SessionState::Idle => None,
            SessionState::Fetched(text) => Some(text),
            SessionState::UserEdited(text) => Some(text),
            SessionState::Summarized { article, .. } => Some(article),
        }
    }

    /// The most recent summary, if one has been generated
    pub fn summary(&self) -> Option<&str> {
        match self {
            SessionState::Summarized { summary, .. } => Some(summary),
            _ => None,
        }
    }
}

const ACTIONS: [&str; 5] = [
    "Paste text",
    "Fetch from URL",
    "Edit article",
    "Generate summary",
    "Quit",
];

/// One interactive run of the tool.
///
/// Holds a reference to the process-lifetime [`Summarizer`] and the fixed
/// candidate database; the only mutable piece is the session state.
pub struct Session<'a> {
    summarizer: &'a Summarizer,
    database: Vec<CandidateArticle>,
    state: SessionState,
}

impl<'a> Session<'a> {
    pub fn new(summarizer: &'a Summarizer) -> Self {
        Self {
            summarizer,
            database: related::default_database(),
            state: SessionState::Idle,
        }
    }

    /// Run the action loop until the user quits
    pub async fn run(&mut self) -> anyhow::Result<()> {
        println!("Paste an article or fetch one by URL, then generate a summary.\n");

        loop {
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("What next?")
                .items(&ACTIONS)
                .default(0)
                .interact()?;

            match choice {
                0 => self.paste()?,
                1 => self.fetch().await?,
                2 => self.edit()?,
                3 => self.summarize().await,
                _ => break,
            }
        }

        Ok(())
    }

    /// Open an empty editor buffer for pasted text
    fn paste(&mut self) -> anyhow::Result<()> {
        let text = edit::edit("")?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            ui::warn("No text entered.");
        } else {
            self.state = SessionState::UserEdited(trimmed.to_string());
            ui::success("Article text captured.");
        }
        Ok(())
    }

    /// Prompt for a URL and fetch its article text
    async fn fetch(&mut self) -> anyhow::Result<()> {
        let url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter article URL")
            .allow_empty(true)
            .interact_text()?;

        if url.trim().is_empty() {
            ui::warn("Please enter a valid URL.");
            return Ok(());
        }

        match fetcher::fetch_article(url.trim()).await {
            Ok(article) => {
                if let Some(title) = &article.title {
                    println!("  {}", title);
                }
                self.state = SessionState::Fetched(article.text);
                ui::success("Article fetched successfully!");
            }
            Err(err) => ui::error(&err.to_string()),
        }
        Ok(())
    }

    /// Let the user edit whatever text is currently held
    fn edit(&mut self) -> anyhow::Result<()> {
        let Some(current) = self.state.article_text() else {
            ui::warn("Nothing to edit yet. Paste text or fetch an article first.");
            return Ok(());
        };

        let edited = edit::edit(current)?;
        self.state = SessionState::UserEdited(edited.trim().to_string());
        ui::success("Article updated.");
        Ok(())
    }

    /// Summarise the held text and show related articles
    async fn summarize(&mut self) {
        let article = match self.state.article_text() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => {
                ui::warn("Please provide text or fetch an article first.");
                return;
            }
        };

        println!("Summarising {} characters...", article.len());
        match self.summarizer.summarize(&article).await {
            Ok(summary) => {
                ui::print_summary(&summary);
                ui::print_related(&related::find_related(&summary, &self.database));
                self.state = SessionState::Summarized {
                    article,
                    summary,
                };
            }
            Err(err) => ui::error(&err.to_string()),
        }
    }

    #[cfg(test)]
    fn state(&self) -> &SessionState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn idle_state_has_no_text() {
        assert_eq!(SessionState::Idle.article_text(), None);
        assert_eq!(SessionState::Idle.summary(), None);
    }

    #[test]
    fn fetched_and_edited_states_expose_text() {
        let fetched = SessionState::Fetched("from the web".into());
        assert_eq!(fetched.article_text(), Some("from the web"));

        let edited = SessionState::UserEdited("tweaked by hand".into());
        assert_eq!(edited.article_text(), Some("tweaked by hand"));
    }

    #[test]
    fn summarized_state_keeps_both_article_and_summary() {
        let state = SessionState::Summarized {
            article: "long article".into(),
            summary: "short".into(),
        };
        assert_eq!(state.article_text(), Some("long article"));
        assert_eq!(state.summary(), Some("short"));
    }

    #[test]
    fn new_session_starts_idle_with_the_default_database() {
        let summarizer = Summarizer::from_config(&Config::default()).unwrap();
        let session = Session::new(&summarizer);
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.database.len(), 4);
    }
}

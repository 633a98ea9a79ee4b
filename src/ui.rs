//! Terminal rendering helpers.

use crate::related::CandidateArticle;
use colored::Colorize;

pub fn success(msg: &str) {
    println!("{}", msg.green());
}

pub fn warn(msg: &str) {
    println!("{}", format!("Warning: {msg}").yellow());
}

pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print the generated summary under a heading
pub fn print_summary(summary: &str) {
    println!("\n{}", "Summary".bold());
    println!("{summary}\n");
}

/// Print the related-article titles as a numbered list
pub fn print_related(related: &[CandidateArticle]) {
    println!("{}", "Related Articles".bold());
    for (idx, article) in related.iter().enumerate() {
        println!("  {}. {}", idx + 1, article.title);
    }
    println!();
}

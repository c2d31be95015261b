//! HTML article extraction
//!
//! Extracts a title and the main body text from arbitrary web pages using CSS
//! selectors.

use scraper::{node::Node, ElementRef, Html, Selector};
use thiserror::Error;

/// Subtrees that never contribute article text
const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "svg", "nav", "header", "footer", "aside",
];

/// Priority order of content containers to try
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role='main']",
    ".post-content",
    ".article-content",
    ".entry-content",
    ".story-body",        // BBC
    ".article__body",     // News sites
    ".content-body",
    "#article-body",
    "#content",
    ".prose",             // Tailwind
];

/// Minimum characters for a container to count as the article body
const MIN_CONTAINER_CHARS: usize = 200;

/// Title and body text parsed from a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Document is empty")]
    EmptyDocument,
}

/// Extract the article title and body text from raw HTML
///
/// Title comes from `og:title`, then `<title>`, then the first `<h1>`.
/// Body text comes from the first content container holding substantial
/// paragraph text, falling back to all body paragraphs and finally to the
/// body's visible text. Paragraphs are separated by blank lines.
pub fn extract_article(html: &str) -> Result<Article, ExtractError> {
    if html.trim().is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    let document = Html::parse_document(html);

    Ok(Article {
        title: extract_title(&document).unwrap_or_default(),
        text: extract_body(&document),
    })
}

fn extract_title(document: &Html) -> Option<String> {
    let og_title = Selector::parse("meta[property='og:title']")
        .ok()
        .and_then(|sel| {
            document
                .select(&sel)
                .filter_map(|meta| meta.value().attr("content"))
                .map(collapse_whitespace)
                .find(|t| !t.is_empty())
        });

    og_title
        .or_else(|| first_text(document, "title"))
        .or_else(|| first_text(document, "h1"))
}

fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .find(|t| !t.is_empty())
}

fn extract_body(document: &Html) -> String {
    for selector_str in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(container) = document.select(&selector).next() {
            let text = container_text(container);
            if text.len() >= MIN_CONTAINER_CHARS {
                return text;
            }
        }
    }

    // Fallback: every paragraph in the page, then the raw visible text
    let root = document.root_element();
    let paragraphs = paragraphs(root);
    if !paragraphs.is_empty() {
        return paragraphs.join("\n\n");
    }

    let Ok(body_selector) = Selector::parse("body") else {
        return String::new();
    };
    document
        .select(&body_selector)
        .next()
        .map(visible_text)
        .unwrap_or_default()
}

/// Paragraph text of a container, or its visible text if it has no paragraphs
fn container_text(container: ElementRef) -> String {
    let paragraphs = paragraphs(container);
    if paragraphs.is_empty() {
        visible_text(container)
    } else {
        paragraphs.join("\n\n")
    }
}

fn paragraphs(scope: ElementRef) -> Vec<String> {
    let Ok(selector) = Selector::parse("p") else {
        return Vec::new();
    };

    scope
        .select(&selector)
        .filter(|p| !in_skipped_subtree(p))
        .map(visible_text)
        .filter(|t| !t.is_empty())
        .collect()
}

fn in_skipped_subtree(element: &ElementRef) -> bool {
    element.ancestors().any(|node| {
        node.value()
            .as_element()
            .is_some_and(|el| SKIPPED_TAGS.contains(&el.name()))
    })
}

/// Whitespace-collapsed text of an element, ignoring noise subtrees
fn visible_text(element: ElementRef) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);
    collapse_whitespace(&raw)
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(el) if !SKIPPED_TAGS.contains(&el.name()) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Ordered-fallback field location within a rendered profile page.
//!
//! A field is located by walking a chain of structural heuristics in
//! priority order — platform-specific markers first, generic text-shape
//! queries last. Single-value fields short-circuit on the first hit;
//! multi-value fields accumulate matches across the chain up to a cap.
//! Exhausting a chain without a match is a legitimate outcome (the field
//! stays at its default), not an error.

use std::collections::HashSet;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// What the element's text must look like to count as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextShape {
    /// Any non-empty text; the trimmed text is the value.
    Text,
    /// Text containing a count token (number with optional k/m/b suffix);
    /// the token is the value.
    Count,
}

/// One structural query in a heuristic chain.
#[derive(Debug, Clone, Copy)]
pub struct Heuristic {
    /// CSS selector for candidate elements.
    pub selector: &'static str,
    /// The element text must contain at least one of these substrings,
    /// case-insensitively. Empty slice means no label requirement.
    pub labels: &'static [&'static str],
    pub shape: TextShape,
}

impl Heuristic {
    /// Returns the field value carried by `text`, or `None` if the text
    /// does not satisfy this heuristic's label and shape requirements.
    fn resolve(&self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if !self.labels.is_empty() {
            let lowered = trimmed.to_lowercase();
            if !self.labels.iter().any(|label| lowered.contains(label)) {
                return None;
            }
        }
        match self.shape {
            TextShape::Text => Some(collapse_whitespace(trimmed)),
            TextShape::Count => count_token(trimmed),
        }
    }
}

/// Locates a single-value field.
///
/// Evaluates heuristics in chain order and returns the first element whose
/// text resolves — later heuristics are never consulted once one matched.
#[must_use]
pub fn locate_first(doc: &Html, chain: &[Heuristic]) -> Option<String> {
    for (rank, heuristic) in chain.iter().enumerate() {
        let selector = parse_selector(heuristic.selector);
        for element in doc.select(&selector) {
            if let Some(value) = heuristic.resolve(&element_text(element)) {
                tracing::debug!(rank, selector = heuristic.selector, "field resolved");
                return Some(value);
            }
        }
    }
    None
}

/// Locates up to `cap` count tokens for a multi-value field.
///
/// Heuristics are evaluated in chain order and their matches accumulate —
/// the cap spans the whole chain, so earlier (more specific) heuristics'
/// matches fill it first. An element contributes at most once per call even
/// when several heuristics in the chain select it.
#[must_use]
pub fn locate_counts(doc: &Html, chain: &[Heuristic], cap: usize) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut seen = HashSet::new();

    for (rank, heuristic) in chain.iter().enumerate() {
        if tokens.len() >= cap {
            break;
        }
        let selector = parse_selector(heuristic.selector);
        for element in doc.select(&selector) {
            if tokens.len() >= cap {
                break;
            }
            if !seen.insert(element.id()) {
                continue;
            }
            if let Some(token) = heuristic.resolve(&element_text(element)) {
                tracing::debug!(rank, selector = heuristic.selector, token = %token, "count candidate");
                tokens.push(token);
            }
        }
    }
    tokens
}

/// Extracts the first count-shaped token ("12.3K", "1,234", "4m") from text.
fn count_token(text: &str) -> Option<String> {
    let re = Regex::new(r"(?i)\d[\d,.]*\s*[KMB]?").expect("valid regex");
    re.find(text).map(|m| m.as_str().trim().to_owned())
}

fn parse_selector(selector: &str) -> Selector {
    // Chains are compile-time constants; a malformed selector is a bug.
    Selector::parse(selector).expect("valid selector")
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME_CHAIN: &[Heuristic] = &[
        Heuristic {
            selector: "header h2",
            labels: &[],
            shape: TextShape::Text,
        },
        Heuristic {
            selector: "h1",
            labels: &[],
            shape: TextShape::Text,
        },
    ];

    #[test]
    fn first_heuristic_wins() {
        let doc = Html::parse_document(
            "<header><h2>from_header</h2></header><h1>from_heading</h1>",
        );
        assert_eq!(locate_first(&doc, NAME_CHAIN).as_deref(), Some("from_header"));
    }

    #[test]
    fn falls_back_when_first_heuristic_misses() {
        let doc = Html::parse_document("<h1>from_heading</h1>");
        assert_eq!(locate_first(&doc, NAME_CHAIN).as_deref(), Some("from_heading"));
    }

    #[test]
    fn later_heuristics_not_consulted_after_a_hit() {
        // The second heuristic is deliberately malformed; it would panic in
        // parse_selector if evaluated, so a pass proves the short-circuit.
        let chain: &[Heuristic] = &[
            Heuristic {
                selector: "h2",
                labels: &[],
                shape: TextShape::Text,
            },
            Heuristic {
                selector: ":::not-a-selector:::",
                labels: &[],
                shape: TextShape::Text,
            },
        ];
        let doc = Html::parse_document("<h2>hit</h2>");
        assert_eq!(locate_first(&doc, chain).as_deref(), Some("hit"));
    }

    #[test]
    fn exhausted_chain_is_none() {
        let doc = Html::parse_document("<p>nothing relevant</p>");
        assert_eq!(locate_first(&doc, NAME_CHAIN), None);
    }

    #[test]
    fn empty_text_does_not_match() {
        let doc = Html::parse_document("<header><h2>  </h2></header><h1>fallback</h1>");
        assert_eq!(locate_first(&doc, NAME_CHAIN).as_deref(), Some("fallback"));
    }

    #[test]
    fn label_requirement_filters_elements() {
        let chain: &[Heuristic] = &[Heuristic {
            selector: "span",
            labels: &["followers"],
            shape: TextShape::Count,
        }];
        let doc = Html::parse_document(
            "<span>4,021 posts</span><span>1.2M followers</span><span>310 following</span>",
        );
        assert_eq!(locate_first(&doc, chain).as_deref(), Some("1.2M"));
    }

    #[test]
    fn count_shape_rejects_unnumbered_text() {
        let chain: &[Heuristic] = &[Heuristic {
            selector: "span",
            labels: &["followers"],
            shape: TextShape::Count,
        }];
        let doc = Html::parse_document("<span>followers</span>");
        assert_eq!(locate_first(&doc, chain), None);
    }

    #[test]
    fn counts_accumulate_across_heuristics_specific_first() {
        let chain: &[Heuristic] = &[
            Heuristic {
                selector: r#"[data-e2e="video-views"]"#,
                labels: &[],
                shape: TextShape::Count,
            },
            Heuristic {
                selector: "span",
                labels: &["views"],
                shape: TextShape::Count,
            },
        ];
        let doc = Html::parse_document(
            r#"<span data-e2e="video-views">10K</span>
               <span>5K views</span>
               <span data-e2e="video-views">20K</span>"#,
        );
        let tokens = locate_counts(&doc, chain, 12);
        // Specific-marker matches come first, then the generic label match.
        assert_eq!(tokens, vec!["10K", "20K", "5K"]);
    }

    #[test]
    fn counts_respect_cap_without_restarting_it() {
        let chain: &[Heuristic] = &[Heuristic {
            selector: "span",
            labels: &["views"],
            shape: TextShape::Count,
        }];
        let html: String = (1..=20)
            .map(|i| format!("<span>{i}K views</span>"))
            .collect();
        let doc = Html::parse_document(&html);
        let tokens = locate_counts(&doc, chain, 12);
        assert_eq!(tokens.len(), 12);
        assert_eq!(tokens[0], "1K");
        assert_eq!(tokens[11], "12K");
    }

    #[test]
    fn element_contributes_once_even_when_selected_twice() {
        let chain: &[Heuristic] = &[
            Heuristic {
                selector: r#"[class*="views"]"#,
                labels: &["views"],
                shape: TextShape::Count,
            },
            Heuristic {
                selector: "span",
                labels: &["views"],
                shape: TextShape::Count,
            },
        ];
        let doc = Html::parse_document(r#"<span class="video-views">10K views</span>"#);
        assert_eq!(locate_counts(&doc, chain, 12), vec!["10K"]);
    }

    #[test]
    fn no_candidates_is_empty_not_error() {
        let chain: &[Heuristic] = &[Heuristic {
            selector: "span",
            labels: &["views"],
            shape: TextShape::Count,
        }];
        let doc = Html::parse_document("<p>no spans at all</p>");
        assert!(locate_counts(&doc, chain, 12).is_empty());
    }
}

//! Name matching for style and variable names
//!
//! Two deliberately different matchers live here:
//! - [`style_matches`]: six permissive strategies (exact, containment both ways,
//!   base segment, query segments, word overlap) used for style names.
//! - [`variable_matches`]: containment on the qualified name and its base
//!   segment, with a one-character truncation tolerance, used for variables.
//!
//! Both return a plain yes/no; nothing is scored or ranked.

mod style;
mod variable;

pub use style::style_matches;
pub use variable::variable_matches;

/// A query folded once and reused for every candidate name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerms {
    /// Lower-cased, trimmed query
    pub folded: String,
    /// `/`-delimited segments of the folded query
    pub parts: Vec<String>,
    /// Final `/` segment of the folded query
    pub base: String,
}

impl QueryTerms {
    pub fn new(query: &str) -> Self {
        let folded = fold(query);
        let parts: Vec<String> = folded.split('/').map(str::to_string).collect();
        let base = parts.last().cloned().unwrap_or_default();
        Self {
            folded,
            parts,
            base,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

/// Lower-case and trim
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Final `/` segment of an already folded name
pub(crate) fn base_segment(folded: &str) -> &str {
    folded.rsplit('/').next().unwrap_or(folded)
}

/// Convenience wrapper: does `candidate` match `query` under the style rules?
pub fn matches(candidate: &str, query: &str) -> bool {
    style_matches(candidate, &QueryTerms::new(query))
}

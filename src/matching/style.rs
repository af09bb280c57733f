use super::{QueryTerms, base_segment, fold};
use regex::Regex;
use std::sync::LazyLock;

static WORD_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/\-_\s]+").unwrap());

/// Decide whether a style name is related to the query
///
/// Strategies are tried in order and the first hit wins; the order only
/// changes how much work is done, never the answer.
pub fn style_matches(style_name: &str, query: &QueryTerms) -> bool {
    let name = fold(style_name);
    if name.is_empty() || query.is_empty() {
        return false;
    }
    let search = query.folded.as_str();

    // 1. Exact
    if name == search {
        return true;
    }

    // 2. Name contains query
    if name.contains(search) {
        return true;
    }

    // 3. Query contains name (qualified or broader query)
    if search.contains(name.as_str()) {
        return true;
    }

    // 4. Base segment
    let name_base = base_segment(&name);
    let search_base = query.base.as_str();
    if !name_base.is_empty()
        && !search_base.is_empty()
        && (name_base == search_base
            || name_base.contains(search_base)
            || search_base.contains(name_base))
    {
        return true;
    }

    // 5. Any longer query segment inside the name
    if query
        .parts
        .iter()
        .any(|part| part.chars().count() > 2 && name.contains(part.as_str()))
    {
        return true;
    }

    // 6. Word overlap
    let search_words = words(search);
    let name_words = words(&name);
    search_words.iter().any(|sw| {
        name_words
            .iter()
            .any(|nw| sw == nw || sw.contains(nw) || nw.contains(sw))
    })
}

fn words(s: &str) -> Vec<&str> {
    WORD_SPLIT_RE
        .split(s)
        .filter(|w| w.chars().count() > 1)
        .collect()
}

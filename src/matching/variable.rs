use super::{QueryTerms, base_segment, fold};

/// Bases shorter than this never get the one-character tolerance
const TRIM_TOLERANCE_MIN_CHARS: usize = 4;

/// Decide whether a bound variable is related to the query
///
/// `qualified_name` is `collection/variable` (or the bare name when the
/// collection could not be resolved) and `variable_name` is the bare name.
pub fn variable_matches(qualified_name: &str, variable_name: &str, query: &QueryTerms) -> bool {
    if query.is_empty() {
        return false;
    }
    let full = fold(qualified_name);
    let bare = fold(variable_name);
    if full.is_empty() && bare.is_empty() {
        return false;
    }

    let search = query.folded.as_str();
    let search_base = query.base.as_str();
    let var_base = base_segment(&full);

    if full.contains(search) || (!bare.is_empty() && bare.contains(search)) {
        return true;
    }

    if !search_base.is_empty() && (full.contains(search_base) || var_base.contains(search_base)) {
        return true;
    }

    if !var_base.is_empty() && search.contains(var_base) {
        return true;
    }

    // Either side may be one character short of the other
    if let Some(trimmed) = drop_last_char(search_base) {
        if !var_base.is_empty() && var_base.contains(trimmed) {
            return true;
        }
    }
    if let Some(trimmed) = drop_last_char(var_base) {
        if !search_base.is_empty() && search_base.contains(trimmed) {
            return true;
        }
    }

    false
}

fn drop_last_char(s: &str) -> Option<&str> {
    if s.chars().count() < TRIM_TOLERANCE_MIN_CHARS {
        return None;
    }
    s.char_indices().last().map(|(i, _)| &s[..i])
}

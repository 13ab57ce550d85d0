use std::collections::HashSet;

/// Split text into its distinct search terms.
///
/// The whole input is case-folded, then split on every non-alphanumeric
/// character, so `"A dog-and-pony show."` yields `{a, dog, and, pony, show}`.
/// Documents and queries go through this same function; that is what makes a
/// query term comparable to an indexed term at all.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    let mut terms = HashSet::new();

    for token in lowered.split(|ch: char| !ch.is_alphanumeric()) {
        if !token.is_empty() {
            terms.insert(token.to_string());
        }
    }

    terms
}

//! Named-capture extraction over all matches.

use indexmap::IndexMap;
use regex_automata::PatternID;
use regex_automata::meta::Regex;

/// Capture name → matched substrings, one entry per match.
///
/// Keys follow declaration order in the pattern. An entry is `None` when the
/// group did not take part in that match.
pub type Captures<'h> = IndexMap<String, Vec<Option<&'h str>>>;

/// Run `re` over `text` and group every named capture across all matches.
///
/// Returns `None` when nothing matches or the pattern declares no named groups.
pub fn find_captures<'h>(re: &Regex, text: &'h str) -> Option<Captures<'h>> {
    // Group 0 is the implicit whole match and is never named.
    let groups: Vec<(usize, &str)> = re
        .group_info()
        .pattern_names(PatternID::ZERO)
        .enumerate()
        .skip(1)
        .filter_map(|(index, name)| name.map(|name| (index, name)))
        .collect();
    if groups.is_empty() {
        return None;
    }

    let mut captures: Captures<'h> = groups
        .iter()
        .map(|(_, name)| (name.to_string(), Vec::new()))
        .collect();

    let mut matched = false;
    for caps in re.captures_iter(text) {
        matched = true;
        for (slot, (index, _)) in captures.values_mut().zip(&groups) {
            slot.push(caps.get_group(*index).map(|span| &text[span.range()]));
        }
    }

    matched.then_some(captures)
}

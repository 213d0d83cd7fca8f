//! Lexical intent detectors — explicit rule tables with documented
//! precedence, deliberately not semantic understanding. False positives
//! on ambiguous phrasing are accepted; the goal is "decisive enough."

/// Ordinal patterns meaning "the first option."
const FIRST_PATTERNS: &[&str] = &[
    "first", "1", "one", "option 1", "option one", "the first", "first one",
];

/// Ordinal patterns meaning "the second option."
const SECOND_PATTERNS: &[&str] = &[
    "second", "2", "two", "option 2", "option two", "the second", "second one",
];

/// Short affirmative phrases treated as accepting the first option.
const CONFIRM_PATTERNS: &[&str] = &[
    "sounds good",
    "perfect",
    "great",
    "that's great",
    "lets do it",
    "let's do it",
    "im happy",
    "i'm happy",
    "that works",
    "ok",
    "okay",
    "merci",
    "thanks",
    "thank you",
    "yes",
    "yeah",
    "good",
    "nice",
    "that's all",
    "thats all",
];

/// Rejection / alternative-seeking vocabulary. Any single match triggers
/// a resuggestion; negation is intentionally not handled.
const RESUGGESTION_KEYWORDS: &[&str] = &[
    "other",
    "another",
    "different",
    "else",
    "instead",
    "change",
    "suggest",
    "more",
    "option",
    "alternative",
    "not this",
    "don't like",
    "prefer",
    "something else",
];

/// Maximum utterance length for the bare-affirmative rule.
const CONFIRM_MAX_LEN: usize = 80;

/// Decide whether the utterance selects one of the recommended places.
///
/// Precedence: (1) candidate name or first-token containment, in list
/// order; (2) ordinal / affirmative language mapped onto the candidate
/// list. Returns the chosen name.
pub fn detect_chosen_place(utterance: &str, candidates: &[String]) -> Option<String> {
    let msg = utterance.to_lowercase();
    let msg = msg.trim();

    for place in candidates {
        let full = place.to_lowercase();
        let first_token = full.split_whitespace().next().unwrap_or_default();
        if msg.contains(&full) || (!first_token.is_empty() && msg.contains(first_token)) {
            return Some(place.clone());
        }
    }

    let index = detect_ordinal(utterance)?;
    candidates.get(index).cloned()
}

/// Detect "first"/"second" style ordinal language, or a short bare
/// confirmation (which selects the first option). When both ordinal
/// families appear, only the "second" reading is honored.
pub fn detect_ordinal(utterance: &str) -> Option<usize> {
    let msg = utterance.to_lowercase();
    let msg = msg.trim();

    let has_first = FIRST_PATTERNS.iter().any(|p| msg.contains(p));
    let has_second = SECOND_PATTERNS.iter().any(|p| msg.contains(p));

    if has_first && !has_second {
        return Some(0);
    }
    if has_second {
        return Some(1);
    }
    if CONFIRM_PATTERNS.iter().any(|c| msg.contains(c)) && msg.len() < CONFIRM_MAX_LEN {
        return Some(0);
    }
    None
}

/// Whether the utterance asks to discard current candidates and see
/// new ones.
pub fn is_resuggestion(utterance: &str) -> bool {
    let msg = utterance.to_lowercase();
    RESUGGESTION_KEYWORDS.iter().any(|kw| msg.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        vec!["Sidi Bou Said".to_string(), "Djerba Island".to_string()]
    }

    #[test]
    fn full_name_containment_wins() {
        assert_eq!(
            detect_chosen_place("let's go to djerba island!", &candidates()),
            Some("Djerba Island".to_string())
        );
    }

    #[test]
    fn first_token_containment_matches() {
        assert_eq!(
            detect_chosen_place("Djerba sounds dreamy", &candidates()),
            Some("Djerba Island".to_string())
        );
        assert_eq!(
            detect_chosen_place("sidi it is", &candidates()),
            Some("Sidi Bou Said".to_string())
        );
    }

    #[test]
    fn list_order_breaks_name_ties() {
        // Both names could plausibly match "island or village?" — only the
        // first candidate whose tokens appear wins.
        let both = vec!["Blue Village".to_string(), "Blue Island".to_string()];
        assert_eq!(
            detect_chosen_place("blue please", &both),
            Some("Blue Village".to_string())
        );
    }

    #[test]
    fn second_ordinal_scenario() {
        assert_eq!(
            detect_chosen_place("the second one please", &candidates()),
            Some("Djerba Island".to_string())
        );
    }

    #[test]
    fn mixed_ordinals_resolve_to_second() {
        // "first" and "second" both present: only the second reading holds
        assert_eq!(detect_ordinal("not the first, the second"), Some(1));
    }

    #[test]
    fn bare_confirmation_selects_first() {
        assert_eq!(
            detect_chosen_place("perfect, thanks!", &candidates()),
            Some("Sidi Bou Said".to_string())
        );
    }

    #[test]
    fn long_confirmation_is_ignored() {
        // No ordinal substrings anywhere ("honestly" would smuggle in "one")
        let long = "ok so I was thinking about this for a while and frankly I am \
                    still not completely sure which of these places fits us best";
        assert!(long.len() >= 80);
        assert_eq!(detect_ordinal(long), None);
    }

    #[test]
    fn ordinal_out_of_range_selects_nothing() {
        let single = vec!["Sidi Bou Said".to_string()];
        assert_eq!(detect_chosen_place("the second one", &single), None);
    }

    #[test]
    fn no_signal_no_selection() {
        assert_eq!(
            detect_chosen_place("tell me about the weather", &candidates()),
            None
        );
    }

    #[test]
    fn detector_is_idempotent() {
        let utterance = "the second one please";
        let first = detect_chosen_place(utterance, &candidates());
        let second = detect_chosen_place(utterance, &candidates());
        assert_eq!(first, second);
    }

    #[test]
    fn resuggestion_keywords_trigger() {
        assert!(is_resuggestion("show me something else"));
        assert!(is_resuggestion("do you have ANOTHER idea?"));
        assert!(is_resuggestion("I'd prefer the mountains"));
        assert!(!is_resuggestion("tell me about the beaches there"));
    }

    #[test]
    fn negation_is_not_handled() {
        // Both trigger — the detector is containment-only by design.
        assert!(is_resuggestion("give me another"));
        assert!(is_resuggestion("I don't want another"));
    }
}

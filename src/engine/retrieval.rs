//! Preference-driven retrieval — score and rank the destination catalog.
//!
//! Pure integer arithmetic, no I/O. Determinism matters: ties keep
//! catalog order (stable sort over the catalog slice).

use crate::catalog::DestinationProfile;
use crate::engine::preferences::PreferenceRecord;

/// A destination with its computed match score.
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate<'a> {
    pub profile: &'a DestinationProfile,
    pub score: u32,
}

/// Score one destination against the preferences.
///
/// Axes accumulate independently; style, companion, and budget matches
/// use the "declared tag is a substring of the preference value" rule so
/// that short category tokens match longer free-form phrases.
pub fn score_destination(prefs: &PreferenceRecord, place: &DestinationProfile) -> u32 {
    let style = prefs.style.to_lowercase();
    let companions = prefs.companions.to_lowercase();
    let budget = prefs.budget.to_lowercase();

    let mut score = 0;

    if !style.is_empty() && place.styles.iter().any(|s| style.contains(s)) {
        score += 3;
    }

    if !companions.is_empty() && place.best_for.iter().any(|b| companions.contains(b)) {
        score += 2;
    }

    if !budget.is_empty() && place.budget.iter().any(|b| budget.contains(b)) {
        score += 2;
    }

    for interest in &prefs.interests {
        let interest = interest.to_lowercase();
        if place.interests.contains(&interest.as_str()) {
            score += 4;
        }
    }

    if prefs.duration_days <= 3 && place.duration_days <= 1 {
        score += 2;
    } else if prefs.duration_days >= 7 {
        score += 1;
    }

    score
}

/// Rank the whole catalog, best first. Ties keep catalog order.
pub fn rank<'a>(
    prefs: &PreferenceRecord,
    catalog: &'a [DestinationProfile],
) -> Vec<RankedCandidate<'a>> {
    let mut ranked: Vec<RankedCandidate<'a>> = catalog
        .iter()
        .map(|profile| RankedCandidate {
            profile,
            score: score_destination(prefs, profile),
        })
        .collect();
    // sort_by is stable, so equal scores preserve catalog order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// The top-N destinations for the preferences.
pub fn top_places<'a>(
    prefs: &PreferenceRecord,
    catalog: &'a [DestinationProfile],
    n: usize,
) -> Vec<&'a DestinationProfile> {
    rank(prefs, catalog)
        .into_iter()
        .take(n)
        .map(|c| c.profile)
        .collect()
}

/// Names of the top-N destinations.
pub fn recommended_names(
    prefs: &PreferenceRecord,
    catalog: &[DestinationProfile],
    n: usize,
) -> Vec<String> {
    top_places(prefs, catalog, n)
        .into_iter()
        .map(|p| p.name.to_string())
        .collect()
}

/// Build the retrieval context injected into the reply prompt: the top-N
/// place profiles, with an instruction to recommend only these.
pub fn build_retrieval_context(
    prefs: &PreferenceRecord,
    catalog: &[DestinationProfile],
    n: usize,
) -> String {
    let places = top_places(prefs, catalog, n);
    let bar = "─".repeat(60);

    let mut lines = vec![format!(
        "RETRIEVED PLACE PROFILES (recommend ONLY these {} places):\n",
        places.len()
    )];
    for p in places {
        lines.push(format!(
            "\nPLACE: {} — {}\nVibe: {}\nDescription: {}\nTop Activities: {}\n\
             Insider Tip: {}\nBest Season: {}\nTunisian Word: {}\n{bar}",
            p.name,
            p.region,
            p.vibe,
            p.description,
            p.top_activities.join(", "),
            p.insider_tip,
            p.season,
            p.tunisian_word,
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::places;

    const BEACH_SPOT: DestinationProfile = DestinationProfile {
        name: "Cove of Tests",
        region: "Test Coast",
        vibe: "sandy",
        description: "a beach",
        styles: &["beach"],
        best_for: &["couple"],
        budget: &["mid-range"],
        interests: &["diving", "snorkeling"],
        duration_days: 1,
        top_activities: &["swim"],
        insider_tip: "go early",
        season: "summer",
        tunisian_word: "bahr",
    };

    const MOUNTAIN_SPOT: DestinationProfile = DestinationProfile {
        name: "Test Peak",
        region: "Test Range",
        vibe: "rocky",
        description: "a mountain",
        styles: &["nature"],
        best_for: &["friends"],
        budget: &["budget"],
        interests: &["hiking"],
        duration_days: 2,
        top_activities: &["climb"],
        insider_tip: "bring water",
        season: "spring",
        tunisian_word: "jbal",
    };

    fn beach_prefs() -> PreferenceRecord {
        PreferenceRecord {
            style: "beach".to_string(),
            companions: "couple".to_string(),
            budget: "mid-range".to_string(),
            duration_days: 3,
            interests: vec!["diving".to_string()],
        }
    }

    #[test]
    fn beach_destination_outranks_unrelated_mountain() {
        let catalog = [MOUNTAIN_SPOT, BEACH_SPOT];
        let prefs = beach_prefs();

        // style 3 + companions 2 + budget 2 + interest 4 + short-trip 2
        assert_eq!(score_destination(&prefs, &BEACH_SPOT), 13);
        assert_eq!(score_destination(&prefs, &MOUNTAIN_SPOT), 0);

        let top = top_places(&prefs, &catalog, 2);
        assert_eq!(top[0].name, "Cove of Tests");
    }

    #[test]
    fn ranking_is_deterministic() {
        let prefs = beach_prefs();
        let first = recommended_names(&prefs, places::all(), 2);
        let second = recommended_names(&prefs, places::all(), 2);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = [MOUNTAIN_SPOT, BEACH_SPOT];
        // Empty preferences score both at the >=7-day bonus of 1
        let prefs = PreferenceRecord::default();
        let ranked = rank(&prefs, &catalog);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].profile.name, "Test Peak");
        assert_eq!(ranked[1].profile.name, "Cove of Tests");
    }

    #[test]
    fn interest_overlap_is_monotone() {
        let mut prefs = beach_prefs();
        prefs.interests = vec!["diving".to_string()];
        let one = score_destination(&prefs, &BEACH_SPOT);
        prefs.interests.push("snorkeling".to_string());
        let two = score_destination(&prefs, &BEACH_SPOT);
        assert!(two > one);
        assert_eq!(two - one, 4);
    }

    #[test]
    fn interest_match_is_exact_not_substring() {
        let mut prefs = beach_prefs();
        prefs.interests = vec!["dive".to_string()];
        // "dive" is not an exact member of {"diving","snorkeling"}
        let without_interest = score_destination(&prefs, &BEACH_SPOT);
        prefs.interests = vec!["diving".to_string()];
        assert_eq!(score_destination(&prefs, &BEACH_SPOT), without_interest + 4);
    }

    #[test]
    fn style_matches_as_substring_of_preference() {
        let mut prefs = PreferenceRecord::default();
        prefs.style = "beach and relaxation".to_string();
        prefs.duration_days = 5;
        assert_eq!(score_destination(&prefs, &BEACH_SPOT), 3);
    }

    #[test]
    fn duration_bonus_rules() {
        let mut prefs = PreferenceRecord::default();
        prefs.duration_days = 2;
        // Short trip, day-trip destination: +2
        assert_eq!(score_destination(&prefs, &BEACH_SPOT), 2);
        // Short trip, multi-day destination: +0
        assert_eq!(score_destination(&prefs, &MOUNTAIN_SPOT), 0);
        // Long trip: +1 regardless
        prefs.duration_days = 10;
        assert_eq!(score_destination(&prefs, &MOUNTAIN_SPOT), 1);
    }

    #[test]
    fn retrieval_context_lists_only_top_places() {
        let prefs = beach_prefs();
        let context = build_retrieval_context(&prefs, &[MOUNTAIN_SPOT, BEACH_SPOT], 1);
        assert!(context.contains("recommend ONLY these 1 places"));
        assert!(context.contains("PLACE: Cove of Tests"));
        assert!(!context.contains("Test Peak"));
    }
}

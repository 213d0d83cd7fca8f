//! Destination catalog.
//!
//! Read-only after load; the slice order is the catalog's insertion order
//! and breaks ranking ties, so entries must not be reordered casually.

/// A destination profile offered by the recommendation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationProfile {
    pub name: &'static str,
    pub region: &'static str,
    pub vibe: &'static str,
    pub description: &'static str,
    /// Short style tokens, matched as substrings of the traveler's style.
    pub styles: &'static [&'static str],
    /// Companion tags ("solo", "couple", "family", "friends").
    pub best_for: &'static [&'static str],
    /// Budget tags ("budget", "mid-range", "luxury").
    pub budget: &'static [&'static str],
    /// Lowercase interest tags, matched by exact membership.
    pub interests: &'static [&'static str],
    /// Typical visit length in days.
    pub duration_days: u32,
    pub top_activities: &'static [&'static str],
    pub insider_tip: &'static str,
    pub season: &'static str,
    pub tunisian_word: &'static str,
}

/// All destinations, in catalog order.
pub const PLACES: &[DestinationProfile] = &[
    DestinationProfile {
        name: "Sidi Bou Said",
        region: "North Coast, near Tunis",
        vibe: "Blue-and-white cliffside village above the Mediterranean",
        description: "A postcard village of whitewashed houses with cobalt doors, \
                      jasmine-scented alleys, and hillside cafes overlooking the Gulf of Tunis.",
        styles: &["culture", "beach", "mix"],
        best_for: &["couple", "solo"],
        budget: &["mid-range", "luxury"],
        interests: &["photography", "cafes", "art", "architecture", "sunsets"],
        duration_days: 1,
        top_activities: &[
            "Wander the blue-and-white medina lanes",
            "Mint tea with pine nuts at Cafe des Nattes",
            "Sunset from the lighthouse viewpoint",
        ],
        insider_tip: "Arrive before 9am to photograph the village before the tour buses.",
        season: "April to June, September to October",
        tunisian_word: "Yassmin — jasmine, the village's signature flower",
    },
    DestinationProfile {
        name: "Medina of Tunis",
        region: "Tunis, Capital",
        vibe: "Living medieval maze of souks, palaces, and street food",
        description: "A UNESCO-listed old city where specialized souks sell spices, gold, \
                      and perfume along alleys that have not changed in centuries.",
        styles: &["culture", "history"],
        best_for: &["solo", "couple", "friends"],
        budget: &["budget", "mid-range"],
        interests: &["souks", "food", "history", "architecture", "shopping"],
        duration_days: 1,
        top_activities: &[
            "Haggle in the Souk El Attarine perfume market",
            "Visit the Zitouna Mosque courtyard",
            "Lablabi lunch at a hole-in-the-wall counter",
        ],
        insider_tip: "Follow the locals off the main artery — the best prices are two alleys deep.",
        season: "Year-round; spring is mildest",
        tunisian_word: "Souk — a specialized market street",
    },
    DestinationProfile {
        name: "Djerba Island",
        region: "South-East Coast",
        vibe: "Laid-back island of beaches, whitewashed villages, and old traditions",
        description: "Tunisia's gentle island: long sandy beaches, the painted streets of \
                      Djerbahood, and one of North Africa's oldest synagogues.",
        styles: &["beach", "mix"],
        best_for: &["family", "couple"],
        budget: &["mid-range", "luxury"],
        interests: &["beaches", "diving", "street art", "heritage", "swimming"],
        duration_days: 4,
        top_activities: &[
            "Beach days on the Zone Touristique sands",
            "Street-art hunt through Djerbahood",
            "Visit the El Ghriba synagogue",
        ],
        insider_tip: "Rent a bicycle in Houmt Souk — the island is flat and the back roads are empty.",
        season: "May to October",
        tunisian_word: "Houmt — neighborhood, as in Houmt Souk",
    },
    DestinationProfile {
        name: "Sahara / Douz",
        region: "Deep South, gateway to the Grand Erg",
        vibe: "Golden dunes, camel caravans, and silence",
        description: "The door of the Sahara: ride a camel into the dunes at sunset and \
                      sleep under more stars than you have ever seen.",
        styles: &["adventure", "nature"],
        best_for: &["friends", "couple", "solo"],
        budget: &["budget", "mid-range"],
        interests: &["desert", "camel trekking", "stargazing", "camping"],
        duration_days: 2,
        top_activities: &[
            "Sunset camel trek into the Grand Erg Oriental",
            "Night in a Bedouin camp",
            "Thursday livestock market in Douz",
        ],
        insider_tip: "Book the camp dinner with firelight music — it is worth every dinar.",
        season: "October to April; summer is brutal",
        tunisian_word: "Sahra — the desert",
    },
    DestinationProfile {
        name: "Tozeur & Chebika",
        region: "South-West Oases",
        vibe: "Palm groves, canyon oases, and brickwork medinas",
        description: "A vast palmeraie on the edge of a salt lake, with mountain oases \
                      and waterfalls hiding in the canyons an hour away.",
        styles: &["nature", "adventure", "mix"],
        best_for: &["couple", "friends", "family"],
        budget: &["mid-range"],
        interests: &["oasis", "hiking", "dates", "film locations", "desert"],
        duration_days: 3,
        top_activities: &[
            "4x4 loop to the Chebika and Tamerza mountain oases",
            "Walk the 14th-century brick medina of Tozeur",
            "Sunrise over the Chott el Jerid salt lake",
        ],
        insider_tip: "Buy deglet nour dates directly from the palmeraie cooperatives.",
        season: "October to April",
        tunisian_word: "Chott — a seasonal salt lake",
    },
    DestinationProfile {
        name: "El Jem",
        region: "Central-East, Sahel",
        vibe: "A Roman colossus rising from a small farming town",
        description: "Home to the third-largest amphitheatre of the Roman world, better \
                      preserved than the Colosseum and nearly empty at dawn.",
        styles: &["history", "culture"],
        best_for: &["solo", "couple", "family"],
        budget: &["budget"],
        interests: &["roman ruins", "history", "archaeology", "photography"],
        duration_days: 1,
        top_activities: &[
            "Climb the amphitheatre's upper tiers",
            "Underground galleries where gladiators waited",
            "Mosaics at the El Jem archaeology museum",
        ],
        insider_tip: "Come at opening time — you may have the arena floor entirely to yourself.",
        season: "Year-round; avoid midday in summer",
        tunisian_word: "Masra7 — theatre or stage",
    },
    DestinationProfile {
        name: "Kairouan",
        region: "Central Tunisia",
        vibe: "Holy city of mosques, carpets, and date pastries",
        description: "Islam's fourth-holiest city: the Great Mosque, a medina of carpet \
                      weavers, and the best makroudh in the country.",
        styles: &["culture", "history"],
        best_for: &["solo", "couple"],
        budget: &["budget", "mid-range"],
        interests: &["mosques", "crafts", "food", "history", "carpets"],
        duration_days: 1,
        top_activities: &[
            "The Great Mosque of Uqba courtyard",
            "Watch carpet weavers in the medina workshops",
            "Fresh makroudh straight from the fryer",
        ],
        insider_tip: "The rooftop of the carpet shops ringing the Great Mosque gives the best free view.",
        season: "September to May",
        tunisian_word: "Makroudh — the date-filled semolina pastry",
    },
    DestinationProfile {
        name: "Tabarka",
        region: "North-West Coral Coast",
        vibe: "Green mountains falling into a diving sea",
        description: "Tunisia's wild north: cork-oak forests, Genoese forts, coral reefs, \
                      and waterfalls in the hills behind the coast.",
        styles: &["nature", "beach", "adventure"],
        best_for: &["couple", "friends"],
        budget: &["budget", "mid-range"],
        interests: &["diving", "hiking", "snorkeling", "waterfalls", "forests"],
        duration_days: 3,
        top_activities: &[
            "Dive the coral reefs off the Genoese fort",
            "Hike to the waterfalls behind Ain Draham",
            "Seafood on the old harbor quay",
        ],
        insider_tip: "The dive clubs run beginner baptism dives — no certification needed.",
        season: "May to September for the sea, autumn for the forests",
        tunisian_word: "Mourjene — coral, the town's old trade",
    },
    DestinationProfile {
        name: "Hammamet",
        region: "Cap Bon Peninsula",
        vibe: "Garden resort town with a sea-washed medina",
        description: "The classic Tunisian beach holiday: long sands, a small whitewashed \
                      medina on the water, and orange groves behind the town.",
        styles: &["beach", "mix"],
        best_for: &["family", "couple", "friends"],
        budget: &["mid-range", "luxury"],
        interests: &["beaches", "swimming", "spas", "nightlife", "street food"],
        duration_days: 4,
        top_activities: &[
            "Beach mornings below the medina walls",
            "Thalasso spa afternoon",
            "Fricassee and banbalouni in the medina cafes",
        ],
        insider_tip: "The public beach by the kasbah is nicer than most hotel strips.",
        season: "May to October",
        tunisian_word: "Banbalouni — fried doughnut dusted in sugar",
    },
    DestinationProfile {
        name: "Matmata & Tataouine",
        region: "South, Dahar mountains",
        vibe: "Underground houses and fortified granaries from another planet",
        description: "Berber country: troglodyte homes dug into the earth and hilltop \
                      ksour that stood in for a galaxy far, far away.",
        styles: &["adventure", "culture"],
        best_for: &["friends", "solo"],
        budget: &["budget"],
        interests: &["berber culture", "film locations", "hiking", "desert"],
        duration_days: 2,
        top_activities: &[
            "Sleep in a troglodyte hotel courtyard",
            "Ksar Ouled Soltane's four-story granary vaults",
            "Drive the Dahar mountain villages",
        ],
        insider_tip: "Star Wars fans: the Hotel Sidi Driss bar is the original Lars homestead set.",
        season: "October to April",
        tunisian_word: "Ksar — a fortified granary (plural: ksour)",
    },
];

/// The full catalog, in insertion order.
pub fn all() -> &'static [DestinationProfile] {
    PLACES
}

/// Look up a destination by exact name.
pub fn by_name(name: &str) -> Option<&'static DestinationProfile> {
    PLACES.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = PLACES.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PLACES.len());
    }

    #[test]
    fn interest_tags_are_lowercase() {
        for place in PLACES {
            for interest in place.interests {
                assert_eq!(
                    *interest,
                    interest.to_lowercase(),
                    "interest tag on {} must be lowercase",
                    place.name
                );
            }
        }
    }

    #[test]
    fn by_name_finds_exact_match() {
        assert!(by_name("Djerba Island").is_some());
        assert!(by_name("djerba island").is_none());
        assert!(by_name("Atlantis").is_none());
    }
}

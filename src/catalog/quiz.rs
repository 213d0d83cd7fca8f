//! Quiz catalog — one question per destination, with ordered hints.

/// A quiz entry for a destination.
#[derive(Debug, Clone)]
pub struct QuizEntry {
    pub destination: &'static str,
    pub question: &'static str,
    pub hints: &'static [&'static str],
    pub answer: &'static str,
}

pub const QUIZ: &[QuizEntry] = &[
    QuizEntry {
        destination: "Sidi Bou Said",
        question: "This seaside village is famous for its fragrant gardens and dreamy \
                   white-and-blue vibe. What is its iconic feature?",
        hints: &[
            "Houses painted blue and white.",
            "Jasmine-scented alleys and cafes.",
            "Perfect for romantic strolls and photography.",
        ],
        answer: "Yassmin",
    },
    QuizEntry {
        destination: "Medina of Tunis",
        question: "In this historic maze, you can find specialized markets full of spices, \
                   gold, and perfumes. What is it called?",
        hints: &[
            "Each alley focuses on one type of product.",
            "Ancient medina in the city center.",
            "Starts with 'S' and is an Arabic word.",
        ],
        answer: "Souk",
    },
    QuizEntry {
        destination: "Djerba",
        question: "This sunny island preserves a very old religious site of a minority \
                   community. What type of site is it?",
        hints: &[
            "Houses a synagogue.",
            "Jewish heritage.",
            "One of the oldest of its kind in North Africa.",
        ],
        answer: "Jewish",
    },
    QuizEntry {
        destination: "Douz",
        question: "In the heart of the desert, you can ride a giant with humps across \
                   golden dunes. What animal is it?",
        hints: &[
            "Walks on four legs.",
            "Survives long without water.",
            "Known as the 'ship of the desert'.",
        ],
        answer: "Camel",
    },
    QuizEntry {
        destination: "Tozeur",
        question: "This oasis has a unique salt lake stretching to the horizon. What is \
                   it called?",
        hints: &[
            "Vast and flat, looks like a mirror after rain.",
            "Salt crust covers the surface.",
            "Name starts with 'Chott'.",
        ],
        answer: "Chatt Jrid",
    },
    QuizEntry {
        destination: "El Jem",
        question: "This place is home to an ancient Roman venue where spectacles once \
                   entertained thousands. What is it?",
        hints: &[
            "Circular, huge, made of stone.",
            "Gladiators and public shows happened here.",
            "Better preserved than the Colosseum in Rome.",
        ],
        answer: "Masra7",
    },
    QuizEntry {
        destination: "Kairouan",
        question: "This city is famous for a diamond-shaped pastry filled with dates. \
                   What is it called?",
        hints: &[
            "Sweet and fried or baked.",
            "Name starts with 'Mak...'.",
            "A symbol of local tradition.",
        ],
        answer: "Makroudh",
    },
    QuizEntry {
        destination: "Tabarka",
        question: "Hikers explore natural cascades hidden among forests here. What is \
                   this natural attraction?",
        hints: &[
            "Freshwater falling from rocks.",
            "Stronger after rain.",
            "Surrounded by oak trees.",
        ],
        answer: "Waterfalls",
    },
    QuizEntry {
        destination: "Matmata",
        question: "Some homes here are dug into the ground to avoid desert heat. What \
                   are these unique houses called?",
        hints: &[
            "Underground, dug into earth.",
            "Berber traditional homes.",
            "Inspired a galaxy far, far away.",
        ],
        answer: "Troglodyte",
    },
    QuizEntry {
        destination: "Hammamet",
        question: "Local specialty pastry here is a crunchy snack filled with egg and \
                   tuna. What is it?",
        hints: &[
            "Often eaten as street food.",
            "Crispy outside, soft inside.",
            "Famous in medina cafes.",
        ],
        answer: "Banbalouni",
    },
];

/// Find the quiz entry matching a chosen destination.
///
/// Case-insensitive containment in either direction first, then a
/// fallback on the chosen name's first whitespace-delimited token.
pub fn quiz_for_place(place: &str) -> Option<&'static QuizEntry> {
    let place_lower = place.to_lowercase();

    for entry in QUIZ {
        let dest_lower = entry.destination.to_lowercase();
        if place_lower.contains(&dest_lower) || dest_lower.contains(&place_lower) {
            return Some(entry);
        }
    }

    let first_word = place_lower.split_whitespace().next()?;
    QUIZ.iter()
        .find(|entry| entry.destination.to_lowercase().contains(first_word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_matches_either_direction() {
        // Catalog name contains quiz name
        assert_eq!(quiz_for_place("Djerba Island").unwrap().destination, "Djerba");
        assert_eq!(quiz_for_place("Sahara / Douz").unwrap().destination, "Douz");
        // Quiz name equals catalog name
        assert_eq!(quiz_for_place("Kairouan").unwrap().destination, "Kairouan");
        // Case-insensitive
        assert_eq!(
            quiz_for_place("sidi bou said").unwrap().destination,
            "Sidi Bou Said"
        );
    }

    #[test]
    fn first_word_fallback() {
        // "Tozeur & Chebika" contains "Tozeur" directly, but a spelled-out
        // variant still resolves via the first token.
        assert_eq!(
            quiz_for_place("Tozeur oasis palmeraie").unwrap().destination,
            "Tozeur"
        );
    }

    #[test]
    fn unknown_place_has_no_quiz() {
        assert!(quiz_for_place("Carthage Marina").is_none());
    }
}

//! Partner catalog — hotels and restaurants per destination, and the
//! one-time commit artifact shown when a traveler picks a place.

/// A partner hotel.
#[derive(Debug, Clone)]
pub struct Hotel {
    pub name: &'static str,
    pub kind: &'static str,
    pub price_range: &'static str,
    pub highlight: &'static str,
}

/// A partner restaurant.
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub name: &'static str,
    pub cuisine: &'static str,
    pub price_range: &'static str,
    pub highlight: &'static str,
    pub must_try: &'static str,
}

/// Partner entries for one destination, keyed by the destination's
/// catalog name.
#[derive(Debug, Clone)]
pub struct PartnerSet {
    pub destination: &'static str,
    pub hotels: &'static [Hotel],
    pub restaurants: &'static [Restaurant],
}

pub const PARTNERS: &[PartnerSet] = &[
    PartnerSet {
        destination: "Sidi Bou Said",
        hotels: &[
            Hotel {
                name: "Dar Sidi Bou Said",
                kind: "Boutique Riad",
                price_range: "$$",
                highlight: "Stunning sea-view terrace, authentic Tunisian decor",
            },
            Hotel {
                name: "Hotel Dar Said",
                kind: "Heritage Hotel",
                price_range: "$$$",
                highlight: "Restored 19th-century palace, rooftop pool overlooking the bay",
            },
        ],
        restaurants: &[
            Restaurant {
                name: "Cafe des Nattes",
                cuisine: "Tunisian cafe",
                price_range: "$",
                highlight: "Iconic hillside cafe, mint tea and makroudh since 1920",
                must_try: "Mint tea with pine nuts",
            },
            Restaurant {
                name: "Au Bon Vieux Temps",
                cuisine: "Traditional Tunisian",
                price_range: "$$",
                highlight: "Rooftop dining with panoramic sea views",
                must_try: "Grilled fish and brik a l'oeuf",
            },
        ],
    },
    PartnerSet {
        destination: "Medina of Tunis",
        hotels: &[
            Hotel {
                name: "Dar Ben Gacem",
                kind: "Boutique Riad",
                price_range: "$$",
                highlight: "Hidden inside the medina, authentic architecture, rooftop terrace",
            },
            Hotel {
                name: "Hotel Majestic",
                kind: "Historic Hotel",
                price_range: "$$",
                highlight: "Art deco building from 1914, central location near Bab El Bhar",
            },
        ],
        restaurants: &[
            Restaurant {
                name: "Dar El Jeld",
                cuisine: "Fine Tunisian",
                price_range: "$$$",
                highlight: "The most prestigious traditional restaurant in Tunis, inside a restored palace",
                must_try: "Couscous royal and brick au thon",
            },
            Restaurant {
                name: "M'rabet",
                cuisine: "Traditional Tunisian",
                price_range: "$$",
                highlight: "500-year-old cafe inside the souk, live Tunisian music on weekends",
                must_try: "Lablabi and grilled merguez",
            },
        ],
    },
    PartnerSet {
        destination: "Djerba Island",
        hotels: &[
            Hotel {
                name: "Dar Dhiafa",
                kind: "Luxury Riad",
                price_range: "$$$",
                highlight: "Award-winning boutique hotel in a traditional Djerbian house with pool",
            },
            Hotel {
                name: "Hotel Lotos",
                kind: "Beach Resort",
                price_range: "$$",
                highlight: "Right on the beach, family-friendly, direct sea access",
            },
        ],
        restaurants: &[
            Restaurant {
                name: "Restaurant Baccar",
                cuisine: "Fresh Seafood",
                price_range: "$$",
                highlight: "Best fresh catch on the island, fishermen bring their haul directly here",
                must_try: "Grilled sea bream and octopus salad",
            },
            Restaurant {
                name: "Chez Slim",
                cuisine: "Traditional Djerbian",
                price_range: "$",
                highlight: "Local favorite, no tourists — this is where Djerbans eat",
                must_try: "Ojja with merguez",
            },
        ],
    },
    PartnerSet {
        destination: "Sahara / Douz",
        hotels: &[
            Hotel {
                name: "Sahara Douz Camp",
                kind: "Desert Camp",
                price_range: "$$",
                highlight: "Sleep under the stars in a Bedouin tent surrounded by dunes",
            },
            Hotel {
                name: "Hotel Sahara Douz",
                kind: "Desert Hotel",
                price_range: "$",
                highlight: "Comfortable base camp, organizes all desert excursions",
            },
        ],
        restaurants: &[
            Restaurant {
                name: "Restaurant El Mouradi",
                cuisine: "Saharan Traditional",
                price_range: "$",
                highlight: "Authentic desert cooking — tagines slow-cooked in clay pots",
                must_try: "Lamb tagine with dates and Saharan bread",
            },
            Restaurant {
                name: "Chez Hassan Camp Dinner",
                cuisine: "Bedouin",
                price_range: "$$",
                highlight: "Dinner by firelight in the desert, live Bedouin music included",
                must_try: "Full Bedouin dinner with couscous and desert tea",
            },
        ],
    },
    PartnerSet {
        destination: "Tozeur & Chebika",
        hotels: &[
            Hotel {
                name: "Dar Chahma",
                kind: "Boutique Hotel",
                price_range: "$$",
                highlight: "Traditional Tozeurian brick architecture, courtyard with palm trees",
            },
            Hotel {
                name: "Ksar Bibi",
                kind: "Heritage Hotel",
                price_range: "$$$",
                highlight: "Converted fortified granary, unique architecture, desert views",
            },
        ],
        restaurants: &[
            Restaurant {
                name: "Restaurant La Palmeraie",
                cuisine: "Oasis Cuisine",
                price_range: "$$",
                highlight: "Dining inside the palm grove, magical setting especially at night",
                must_try: "Date-stuffed mechoui lamb and deglet nour dates",
            },
            Restaurant {
                name: "Cafe de la Republique",
                cuisine: "Tunisian Cafe",
                price_range: "$",
                highlight: "Old-school local cafe in the medina, unchanged since the 1960s",
                must_try: "Tunisian coffee and zlebia pastry",
            },
        ],
    },
    PartnerSet {
        destination: "El Jem",
        hotels: &[
            Hotel {
                name: "Hotel Julius",
                kind: "City Hotel",
                price_range: "$",
                highlight: "Walking distance from the amphitheatre, rooftop view of the ruins",
            },
            Hotel {
                name: "Dar El Jem",
                kind: "Guesthouse",
                price_range: "$",
                highlight: "Family-run guesthouse, home-cooked meals, warm local hospitality",
            },
        ],
        restaurants: &[
            Restaurant {
                name: "Restaurant Le Bonheur",
                cuisine: "Tunisian",
                price_range: "$",
                highlight: "Best couscous in town, loved by locals and archaeologists alike",
                must_try: "Friday couscous with lamb and vegetables",
            },
            Restaurant {
                name: "Cafe des Gladiateurs",
                cuisine: "Cafe & Snacks",
                price_range: "$",
                highlight: "Terrace facing the amphitheatre — perfect before your visit",
                must_try: "Tunisian coffee and almond briouats",
            },
        ],
    },
    PartnerSet {
        destination: "Kairouan",
        hotels: &[
            Hotel {
                name: "Hotel Amina",
                kind: "City Hotel",
                price_range: "$",
                highlight: "Clean, central, 5 min walk from the Great Mosque",
            },
            Hotel {
                name: "Dar Salam",
                kind: "Boutique Riad",
                price_range: "$$",
                highlight: "Restored medina house, tranquil courtyard, authentic atmosphere",
            },
        ],
        restaurants: &[
            Restaurant {
                name: "Restaurant Sabra",
                cuisine: "Traditional Kairouani",
                price_range: "$",
                highlight: "The place locals send their guests — honest, generous portions",
                must_try: "Couscous with camel meat",
            },
            Restaurant {
                name: "Patisserie Makroudh El Amel",
                cuisine: "Pastry Shop",
                price_range: "$",
                highlight: "The most famous makroudh shop in Tunisia — buy a box to take home",
                must_try: "Fresh makroudh with date paste and honey glaze",
            },
        ],
    },
    PartnerSet {
        destination: "Tabarka",
        hotels: &[
            Hotel {
                name: "Dar Ismail",
                kind: "Seafront Hotel",
                price_range: "$$",
                highlight: "On the corniche facing the Genoese fort, pool over the sea",
            },
            Hotel {
                name: "La Forêt d'Ain Draham",
                kind: "Mountain Lodge",
                price_range: "$",
                highlight: "Cork-oak forest setting in the hills, fireplace lounge",
            },
        ],
        restaurants: &[
            Restaurant {
                name: "Le Pirate",
                cuisine: "Seafood",
                price_range: "$$",
                highlight: "Harbor-side institution, the catch comes straight off the boats",
                must_try: "Grilled rouget and seafood couscous",
            },
            Restaurant {
                name: "Restaurant Les Aiguilles",
                cuisine: "Tunisian",
                price_range: "$",
                highlight: "Family kitchen below the needle rocks, generous plates",
                must_try: "Mloukhia with beef",
            },
        ],
    },
    PartnerSet {
        destination: "Hammamet",
        hotels: &[
            Hotel {
                name: "Dar Hayet",
                kind: "Boutique Hotel",
                price_range: "$$",
                highlight: "Whitewashed house directly on the beach, steps from the medina",
            },
            Hotel {
                name: "La Badira",
                kind: "Luxury Resort",
                price_range: "$$$",
                highlight: "Adults-only thalasso resort with a celebrated spa",
            },
        ],
        restaurants: &[
            Restaurant {
                name: "Restaurant de la Poste",
                cuisine: "Tunisian & Seafood",
                price_range: "$$",
                highlight: "Terrace over the kasbah walls, sunset view of the bay",
                must_try: "Fricassee and grilled calamari",
            },
            Restaurant {
                name: "Chez Achour",
                cuisine: "Seafood",
                price_range: "$$",
                highlight: "Garden courtyard, a Hammamet classic for fifty years",
                must_try: "Seafood spaghetti and banbalouni for dessert",
            },
        ],
    },
    PartnerSet {
        destination: "Matmata & Tataouine",
        hotels: &[
            Hotel {
                name: "Hotel Sidi Driss",
                kind: "Troglodyte Hotel",
                price_range: "$",
                highlight: "The underground hotel that played the Lars homestead in Star Wars",
            },
            Hotel {
                name: "Dar Ayed Tataouine",
                kind: "Guesthouse",
                price_range: "$",
                highlight: "Berber hospitality, rooftop view over the Dahar foothills",
            },
        ],
        restaurants: &[
            Restaurant {
                name: "Restaurant La Grotte",
                cuisine: "Berber Traditional",
                price_range: "$",
                highlight: "Meals served inside a cave dwelling, bread baked in the tabouna",
                must_try: "Barley couscous with dried meat",
            },
            Restaurant {
                name: "Cafe Ksar Ouled Soltane",
                cuisine: "Cafe & Snacks",
                price_range: "$",
                highlight: "Tea terrace inside the four-story granary courtyard",
                must_try: "Mint tea with almonds and corne de gazelle",
            },
        ],
    },
];

/// Look up partners by exact destination name.
pub fn partners_for(destination: &str) -> Option<&'static PartnerSet> {
    PARTNERS.iter().find(|p| p.destination == destination)
}

/// Build the one-time "where to stay & eat" block for a chosen destination.
/// Returns `None` when the destination has no partner entries.
pub fn format_partner_block(destination: &str) -> Option<String> {
    let partners = partners_for(destination)?;

    let heavy = "═".repeat(50);
    let light = "─".repeat(40);
    let mut lines = vec![
        format!("\n{heavy}"),
        "WHERE TO STAY & WHERE TO EAT".to_string(),
        heavy.clone(),
        format!("\n{destination}"),
        light,
        "  Hotels:".to_string(),
    ];

    for hotel in partners.hotels {
        lines.push(format!(
            "     {} ({} · {})",
            hotel.name, hotel.kind, hotel.price_range
        ));
        lines.push(format!("     {}", hotel.highlight));
    }

    lines.push("\n  Restaurants:".to_string());
    for restaurant in partners.restaurants {
        lines.push(format!(
            "     {} ({} · {})",
            restaurant.name, restaurant.cuisine, restaurant.price_range
        ));
        lines.push(format!("     {}", restaurant.highlight));
        lines.push(format!("     Must try: {}", restaurant.must_try));
    }

    lines.push(format!("\n{heavy}\n"));
    Some(lines.join("\n"))
}

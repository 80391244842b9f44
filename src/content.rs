//! Static page content for the Sublime Mind site.
//!
//! Everything the sections render comes from these tables, so the copy lives
//! in one place and the nav/anchor wiring can be checked by tests instead of
//! by clicking around.

/// In-page anchor ids exposed by section headers.
pub const ANCHOR_HERO: &str = "hero";
pub const ANCHOR_CONCEPT: &str = "concept";
pub const ANCHOR_COMMUNITY: &str = "community";
pub const ANCHOR_LEGAL: &str = "legal";
pub const ANCHOR_CONTACT: &str = "contact";

/// The fixed composition order of the landing page. `home.rs` renders the
/// `<main>` sections by iterating this list; navbar and footer occupy the
/// fixed slots around it.
pub const SECTION_ORDER: &[&str] = &[
    "navbar",
    "hero",
    "concept",
    "features",
    "additional-features",
    "philosophy",
    "community",
    "legal",
    "contact",
    "footer",
];

#[derive(Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Anchor id, without the leading `#`.
    pub target: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Sublime Mind", target: ANCHOR_HERO },
    NavLink { label: "How It Works", target: ANCHOR_CONCEPT },
    NavLink { label: "Community", target: ANCHOR_COMMUNITY },
    NavLink { label: "Legal", target: ANCHOR_LEGAL },
    NavLink { label: "Contact", target: ANCHOR_CONTACT },
];

/// A feature card: Font Awesome icon classes, accent class, title, blurb.
#[derive(Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub accent: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const CORE_FEATURES: &[Feature] = &[
    Feature {
        icon: "fa-solid fa-globe",
        accent: "accent-blue",
        title: "Interactive Peace Map",
        blurb: "Explore a global map filled with peaceful locations shared by the community.",
    },
    Feature {
        icon: "fa-solid fa-lock",
        accent: "accent-sage",
        title: "Personal & Private Maps",
        blurb: "Keep your most meaningful locations visible only to you.",
    },
    Feature {
        icon: "fa-solid fa-camera",
        accent: "accent-earth",
        title: "Photo Memories",
        blurb: "Attach images to each place to capture its atmosphere and beauty.",
    },
    Feature {
        icon: "fa-solid fa-pen",
        accent: "accent-ink",
        title: "Reflections & Descriptions",
        blurb: "Write why this place feels sublime — capture the memory and emotion.",
    },
    Feature {
        icon: "fa-solid fa-wand-magic-sparkles",
        accent: "accent-blue",
        title: "Privacy by Design",
        blurb: "Control visibility of every location. Your peace, your choice.",
    },
    Feature {
        icon: "fa-solid fa-compass",
        accent: "accent-sage",
        title: "Discovery Mode",
        blurb: "Browse nearby peaceful places when travelling or exploring new cities.",
    },
];

pub const EXTRA_FEATURES: &[Feature] = &[
    Feature {
        icon: "fa-solid fa-clock",
        accent: "accent-sage",
        title: "Memory Timeline",
        blurb: "See a timeline of all your sublime moments over months and years.",
    },
    Feature {
        icon: "fa-solid fa-face-smile",
        accent: "accent-sage",
        title: "Mood Tagging",
        blurb: "Tag places with moods like 'calm,' 'energised,' or 'grateful.'",
    },
    Feature {
        icon: "fa-solid fa-location-arrow",
        accent: "accent-sage",
        title: "Guided Local Discovery",
        blurb: "Suggested peaceful locations near you based on environment.",
    },
    Feature {
        icon: "fa-solid fa-volume-high",
        accent: "accent-sage",
        title: "Ambient Sound Integration",
        blurb: "Attach optional soundscapes like forest sounds to locations.",
    },
    Feature {
        icon: "fa-solid fa-chart-column",
        accent: "accent-sage",
        title: "Wellbeing Insights",
        blurb: "See patterns in where and when you feel most at peace.",
    },
    Feature {
        icon: "fa-solid fa-wand-magic-sparkles",
        accent: "accent-sage",
        title: "Mindful Prompts",
        blurb: "Optional reflection prompts when adding a new place.",
    },
];

/// The three bullet points next to the phone mockup in the concept section.
pub const CONCEPT_POINTS: &[(&str, &str)] = &[
    ("fa-solid fa-lock", "Private personal map for your secret sanctuaries."),
    ("fa-solid fa-globe", "Shared global map to inspire others' journeys."),
    ("fa-solid fa-camera", "Visual memories attached to every location."),
];

/// Community section columns: accent class, heading, blurb.
pub const COMMUNITY_PILLARS: &[(&str, &str, &str)] = &[
    (
        "accent-sage",
        "Contribute",
        "Add to a collective archive of peaceful spaces around the globe.",
    ),
    (
        "accent-blue",
        "Appreciate",
        "Discover nature and environments through the eyes of others.",
    ),
    (
        "accent-earth",
        "Archive",
        "Build a worldwide legacy of meaningful, quiet locations.",
    ),
];

pub const LEGAL_ITEMS: &[&str] = &[
    "Privacy Policy",
    "Terms & Conditions",
    "Data Protection Statement",
    "Cookie Policy",
];

pub const CONTACT_EMAIL: &str = "hello@vinisbir.tech";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECTION_ANCHORS: &[&str] = &[
        ANCHOR_HERO,
        ANCHOR_CONCEPT,
        ANCHOR_COMMUNITY,
        ANCHOR_LEGAL,
        ANCHOR_CONTACT,
    ];

    #[test]
    fn every_nav_link_targets_an_existing_anchor() {
        for link in NAV_LINKS {
            assert!(
                SECTION_ANCHORS.contains(&link.target),
                "nav link '{}' points at missing anchor '{}'",
                link.label,
                link.target
            );
        }
    }

    #[test]
    fn anchors_are_unique() {
        let mut seen = Vec::new();
        for anchor in SECTION_ANCHORS {
            assert!(!seen.contains(anchor), "duplicate anchor '{anchor}'");
            seen.push(anchor);
        }
    }

    #[test]
    fn section_order_is_fixed() {
        assert_eq!(
            SECTION_ORDER,
            &[
                "navbar",
                "hero",
                "concept",
                "features",
                "additional-features",
                "philosophy",
                "community",
                "legal",
                "contact",
                "footer",
            ]
        );
    }

    #[test]
    fn every_anchor_belongs_to_an_ordered_section() {
        for anchor in SECTION_ANCHORS {
            assert!(SECTION_ORDER.contains(anchor));
        }
    }

    #[test]
    fn feature_tables_are_fully_populated() {
        assert_eq!(CORE_FEATURES.len(), 6);
        assert_eq!(EXTRA_FEATURES.len(), 6);
        for f in CORE_FEATURES.iter().chain(EXTRA_FEATURES) {
            assert!(!f.title.is_empty());
            assert!(!f.blurb.is_empty());
            assert!(f.icon.starts_with("fa-"));
        }
    }
}

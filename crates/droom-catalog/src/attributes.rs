//! Shared attribute taxonomy.
//!
//! These nodes are deliberately brand-free: every client's content links to
//! the same `Tone`, `Aesthetic`, etc. nodes so cross-client analysis can
//! pivot on them. Seeding merges on `name` alone.

/// One attribute label and the closed set of values it admits.
#[derive(Debug, Clone, Copy)]
pub struct AttributeCategory {
    pub label: &'static str,
    pub values: &'static [&'static str],
}

const SHARED_ATTRIBUTES: &[AttributeCategory] = &[
    AttributeCategory {
        label: "Tone",
        values: &[
            "calm",
            "professional",
            "energetic",
            "playful",
            "aspirational",
            "reassuring",
            "urgent",
            "educational",
        ],
    },
    AttributeCategory {
        label: "Aesthetic",
        values: &[
            "minimal",
            "luxurious",
            "intimate",
            "modern",
            "rustic",
            "vibrant",
            "clean",
            "warm",
        ],
    },
    AttributeCategory {
        label: "ColorPalette",
        values: &[
            "warm-tones",
            "cool-tones",
            "earth-tones",
            "vibrant",
            "pastel",
            "monochrome",
        ],
    },
    AttributeCategory {
        label: "Composition",
        values: &["close-up", "medium-shot", "wide-shot", "establishing"],
    },
    AttributeCategory {
        label: "NarrativeElement",
        values: &[
            "shows_physical_space",
            "shows_people",
            "shows_product_service",
            "demonstrates_use",
            "has_dialogue",
            "has_text_overlay",
        ],
    },
    AttributeCategory {
        label: "Platform",
        values: &["instagram", "facebook", "google-search", "youtube"],
    },
    AttributeCategory {
        label: "TimeSlot",
        values: &[
            "early-morning",
            "morning",
            "midday",
            "afternoon",
            "evening",
            "late-night",
        ],
    },
];

/// Every shared attribute category, in seeding order.
pub fn shared_attributes() -> &'static [AttributeCategory] {
    SHARED_ATTRIBUTES
}

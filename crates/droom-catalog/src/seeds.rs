//! Per-client seed records: demographic segments and geographic zones.
//!
//! Unlike the shared taxonomy these are scoped to one brand, so their graph
//! ids are derived with [`crate::record_id`] and every node carries a
//! `brand_id` property. Reconciliation may update the descriptive fields of
//! an existing record but never its identity.

/// An audience segment the client targets.
#[derive(Debug, Clone, Copy)]
pub struct DemographicSegment {
    /// Stable name, unique within the brand. Becomes part of the graph id.
    pub name: &'static str,
    pub display_name: &'static str,
    pub age_range: &'static str,
    pub gender: &'static str,
    pub description: &'static str,
}

/// A drive-time ring around the clinic with a share of ad budget.
#[derive(Debug, Clone, Copy)]
pub struct GeoZone {
    pub name: &'static str,
    pub radius_miles: f64,
    pub budget_weight: f64,
    pub center_lat: f64,
    pub center_lng: f64,
    pub center_address: &'static str,
    pub areas: &'static str,
}

const DEMOGRAPHIC_SEGMENTS: &[DemographicSegment] = &[
    DemographicSegment {
        name: "chronic-pain-seekers-40-65",
        display_name: "Pain Relief Seekers",
        age_range: "40-65",
        gender: "all",
        description: "Established adults managing chronic pain conditions. \
            Middle-to-upper income ($75K-150K). Research-heavy purchase \
            journey — searches conditions, reads reviews, needs trust \
            signals before booking.",
    },
    DemographicSegment {
        name: "autoimmune-wellness-women-30-55",
        display_name: "Autoimmune Warriors",
        age_range: "30-55",
        gender: "female-skew",
        description: "Women managing ongoing autoimmune conditions, \
            balancing health with career and family. Middle-to-upper income \
            ($65K-130K). Community-influenced — trusts recommendations from \
            support groups and fellow patients.",
    },
    DemographicSegment {
        name: "proactive-wellness-adults-28-50",
        display_name: "Wellness Optimizers",
        age_range: "28-50",
        gender: "all",
        description: "Health-conscious adults interested in preventative \
            care and optimization. Upper-middle income ($90K-200K). \
            Education-first purchase journey — wants to understand TCM \
            before committing.",
    },
];

const CLINIC_LAT: f64 = 42.3447;
const CLINIC_LNG: f64 = -87.9967;
const CLINIC_ADDRESS: &str = "34121 US-45, Grayslake, IL 60030";

const GEOGRAPHIC_ZONES: &[GeoZone] = &[
    GeoZone {
        name: "core",
        radius_miles: 10.0,
        budget_weight: 0.50,
        center_lat: CLINIC_LAT,
        center_lng: CLINIC_LNG,
        center_address: CLINIC_ADDRESS,
        areas: "Grayslake, Round Lake, Mundelein, Libertyville, Gurnee, Waukegan",
    },
    GeoZone {
        name: "extended",
        radius_miles: 20.0,
        budget_weight: 0.35,
        center_lat: CLINIC_LAT,
        center_lng: CLINIC_LNG,
        center_address: CLINIC_ADDRESS,
        areas: "Vernon Hills, Lake Forest, Highland Park, Antioch, Crystal Lake, McHenry",
    },
    GeoZone {
        name: "metro",
        radius_miles: 35.0,
        budget_weight: 0.15,
        center_lat: CLINIC_LAT,
        center_lng: CLINIC_LNG,
        center_address: CLINIC_ADDRESS,
        areas: "Northern Chicago suburbs, Evanston, Schaumburg, Elgin",
    },
];

/// Audience segments seeded for the client, in seeding order.
pub fn demographic_segments() -> &'static [DemographicSegment] {
    DEMOGRAPHIC_SEGMENTS
}

/// Geographic targeting zones seeded for the client. Budget weights across
/// all zones sum to 1.0.
pub fn geographic_zones() -> &'static [GeoZone] {
    GEOGRAPHIC_ZONES
}

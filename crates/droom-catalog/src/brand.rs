//! Client profiles and business-model gating.
//!
//! Each Droom client runs the same setup tooling against the shared stores;
//! the profile carries the identifiers that scope its records and the
//! business model that decides which node families apply to it.

use serde::Serialize;

use crate::record_id;

/// How the client makes money. Drives which parts of the graph schema are
/// actually exercised for it (all constraints are still declared; the model
/// only gates seeding and reporting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessModel {
    /// Revenue comes from in-person visits; leads and website forms matter,
    /// purchase tracking does not.
    BrickAndMortarPrimary,
    /// Revenue comes from online checkout.
    EcommercePrimary,
    /// Both channels are significant.
    Hybrid,
}

impl BusinessModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessModel::BrickAndMortarPrimary => "brick-and-mortar-primary",
            BusinessModel::EcommercePrimary => "ecommerce-primary",
            BusinessModel::Hybrid => "hybrid",
        }
    }

    /// Lead and WebsiteForm node families apply to every model we onboard
    /// today; kept as a method so a pure-marketplace client can opt out later.
    pub fn lead_capture_enabled(&self) -> bool {
        true
    }

    /// Customer/Purchase node families only make sense when checkout happens
    /// online.
    pub fn purchase_tracking_enabled(&self) -> bool {
        matches!(
            self,
            BusinessModel::EcommercePrimary | BusinessModel::Hybrid
        )
    }
}

/// One client of the marketing factory.
#[derive(Debug, Clone, Serialize)]
pub struct BrandProfile {
    pub brand_id: &'static str,
    pub brand_name: &'static str,
    pub business_model: BusinessModel,
}

impl BrandProfile {
    /// Eastern Healing Traditions, a TCM clinic in Grayslake, IL.
    pub fn eastern_healing_traditions() -> Self {
        Self {
            brand_id: "eastern-healing-traditions",
            brand_name: "Eastern Healing Traditions",
            business_model: BusinessModel::BrickAndMortarPrimary,
        }
    }

    /// Graph id for one of this brand's records.
    pub fn record_id(&self, name: &str) -> String {
        record_id(self.brand_id, name)
    }
}

//! Vector index expectations and namespace plans.
//!
//! The Pinecone index is shared infrastructure that must already be
//! provisioned; this module only declares what the tooling expects to find
//! there and which namespaces the client will write to. Pinecone creates
//! namespaces on first upsert, so the plan here exists for verification and
//! conflict detection rather than provisioning.

use serde::Serialize;

/// Name of the shared vector index every client writes into.
pub const INDEX_NAME: &str = "graphelion-deux";

/// Vector width of `text-embedding-3-small` output.
pub const EXPECTED_DIMENSION: u32 = 1536;

/// Distance metric the index must be configured with.
pub const EXPECTED_METRIC: &str = "cosine";

/// Embedding model that produces every vector in the index.
pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// A namespace the client plans to use, with the documentation line the
/// audit report prints for it.
#[derive(Debug, Clone, Serialize)]
pub struct NamespaceDef {
    pub name: String,
    pub description: &'static str,
    /// Shared namespaces hold cross-client data and are not scoped to a
    /// brand id.
    pub shared: bool,
}

/// The four per-client namespaces, suffixed with the brand id.
pub fn client_namespaces(brand_id: &str) -> Vec<NamespaceDef> {
    vec![
        NamespaceDef {
            name: format!("droom-content-essence-{brand_id}"),
            description: "Semantic profiles of creative assets (videos/images). \
                Embedded from Claude Vision's 150-200 word narrative \
                descriptions. Used for similarity search: 'find content \
                similar to this,' 'what unused content matches this campaign?'",
            shared: false,
        },
        NamespaceDef {
            name: format!("droom-scenario-outcomes-{brand_id}"),
            description: "Historical campaign situations and outcomes. Embedded from \
                rich scenario descriptions (content type, tones, demographics, \
                platform, budget, outcome metrics). Used for: 'what happened \
                in a situation like this?'",
            shared: false,
        },
        NamespaceDef {
            name: format!("droom-audience-psychographics-{brand_id}"),
            description: "Behavioral patterns and audience insights. Embedded from \
                Cultural Anthropologist agent observations. Used for: \
                'why does this audience behave this way?' 'what messaging \
                themes resonate?'",
            shared: false,
        },
        NamespaceDef {
            name: format!("droom-narrative-patterns-{brand_id}"),
            description: "Storytelling approaches and content strategies. Embedded from \
                Creative Intelligence agent analysis. Used for: 'what \
                narrative styles have worked?' 'what creative gaps exist?'",
            shared: false,
        },
    ]
}

/// The one namespace shared by every client.
pub fn shared_namespace() -> NamespaceDef {
    NamespaceDef {
        name: "droom-cross-campaign-learnings".to_string(),
        description: "Meta-learnings applicable across all Droom clients. Embedded \
            from aggregated insights. Tagged by industry and business_model. \
            Used for: 'what have we learned across all clients in this \
            industry?'",
        shared: true,
    }
}

/// Client namespaces followed by the shared one, in report order.
pub fn planned_namespaces(brand_id: &str) -> Vec<NamespaceDef> {
    let mut all = client_namespaces(brand_id);
    all.push(shared_namespace());
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const BRAND: &str = "eastern-healing-traditions";

    #[test]
    fn four_client_namespaces_plus_shared() {
        assert_eq!(client_namespaces(BRAND).len(), 4);
        assert_eq!(planned_namespaces(BRAND).len(), 5);
    }

    #[test]
    fn client_namespaces_are_brand_suffixed() {
        for ns in client_namespaces(BRAND) {
            assert!(ns.name.starts_with("droom-"), "{}", ns.name);
            assert!(ns.name.ends_with(BRAND), "{}", ns.name);
            assert!(!ns.shared);
        }
    }

    #[test]
    fn shared_namespace_is_brand_free() {
        let shared = shared_namespace();
        assert_eq!(shared.name, "droom-cross-campaign-learnings");
        assert!(shared.shared);
        assert!(!shared.name.contains(BRAND));
    }

    #[test]
    fn planned_names_are_unique() {
        let names: HashSet<_> = planned_namespaces(BRAND)
            .into_iter()
            .map(|ns| ns.name)
            .collect();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn shared_namespace_comes_last_in_the_plan() {
        let plan = planned_namespaces(BRAND);
        assert!(plan.last().map(|ns| ns.shared).unwrap_or(false));
        assert!(plan.iter().take(4).all(|ns| !ns.shared));
    }
}

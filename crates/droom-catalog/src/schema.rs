//! Graph schema declarations: uniqueness constraints and property indexes.
//!
//! Every statement here is `IF NOT EXISTS` so reconciliation can be re-run
//! against a live database without touching what is already in place. All
//! node patterns carry the `Droom` label alongside the type label, which is
//! what keeps this tooling from ever colliding with other tenants of the
//! same Neo4j instance.

/// A named uniqueness constraint and the DDL that creates it.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintDef {
    pub name: &'static str,
    pub cypher: &'static str,
}

/// A named property index and the DDL that creates it.
#[derive(Debug, Clone, Copy)]
pub struct IndexDef {
    pub name: &'static str,
    pub cypher: &'static str,
}

const CONSTRAINTS: &[ConstraintDef] = &[
    ConstraintDef {
        name: "droom_content_id_unique",
        cypher: "CREATE CONSTRAINT droom_content_id_unique IF NOT EXISTS \
                 FOR (n:Droom:Content) REQUIRE n.id IS UNIQUE",
    },
    ConstraintDef {
        name: "droom_campaign_id_unique",
        cypher: "CREATE CONSTRAINT droom_campaign_id_unique IF NOT EXISTS \
                 FOR (n:Droom:Campaign) REQUIRE n.id IS UNIQUE",
    },
    ConstraintDef {
        name: "droom_lead_id_unique",
        cypher: "CREATE CONSTRAINT droom_lead_id_unique IF NOT EXISTS \
                 FOR (n:Droom:Lead) REQUIRE n.id IS UNIQUE",
    },
    ConstraintDef {
        name: "droom_performance_id_unique",
        cypher: "CREATE CONSTRAINT droom_performance_id_unique IF NOT EXISTS \
                 FOR (n:Droom:Performance) REQUIRE n.id IS UNIQUE",
    },
    ConstraintDef {
        name: "droom_websiteform_id_unique",
        cypher: "CREATE CONSTRAINT droom_websiteform_id_unique IF NOT EXISTS \
                 FOR (n:Droom:WebsiteForm) REQUIRE n.id IS UNIQUE",
    },
    ConstraintDef {
        name: "droom_demographic_id_unique",
        cypher: "CREATE CONSTRAINT droom_demographic_id_unique IF NOT EXISTS \
                 FOR (n:Droom:Demographic) REQUIRE n.id IS UNIQUE",
    },
    ConstraintDef {
        name: "droom_geographic_id_unique",
        cypher: "CREATE CONSTRAINT droom_geographic_id_unique IF NOT EXISTS \
                 FOR (n:Droom:Geographic) REQUIRE n.id IS UNIQUE",
    },
];

const INDEXES: &[IndexDef] = &[
    IndexDef {
        name: "droom_content_brand_id",
        cypher: "CREATE INDEX droom_content_brand_id IF NOT EXISTS \
                 FOR (n:Droom:Content) ON (n.brand_id)",
    },
    IndexDef {
        name: "droom_content_status",
        cypher: "CREATE INDEX droom_content_status IF NOT EXISTS \
                 FOR (n:Droom:Content) ON (n.status)",
    },
    IndexDef {
        name: "droom_campaign_brand_id",
        cypher: "CREATE INDEX droom_campaign_brand_id IF NOT EXISTS \
                 FOR (n:Droom:Campaign) ON (n.brand_id)",
    },
    IndexDef {
        name: "droom_campaign_status",
        cypher: "CREATE INDEX droom_campaign_status IF NOT EXISTS \
                 FOR (n:Droom:Campaign) ON (n.status)",
    },
    IndexDef {
        name: "droom_performance_date",
        cypher: "CREATE INDEX droom_performance_date IF NOT EXISTS \
                 FOR (n:Droom:Performance) ON (n.date)",
    },
    IndexDef {
        name: "droom_performance_brand_id",
        cypher: "CREATE INDEX droom_performance_brand_id IF NOT EXISTS \
                 FOR (n:Droom:Performance) ON (n.brand_id)",
    },
    IndexDef {
        name: "droom_lead_brand_id",
        cypher: "CREATE INDEX droom_lead_brand_id IF NOT EXISTS \
                 FOR (n:Droom:Lead) ON (n.brand_id)",
    },
    IndexDef {
        name: "droom_lead_email",
        cypher: "CREATE INDEX droom_lead_email IF NOT EXISTS \
                 FOR (n:Droom:Lead) ON (n.email)",
    },
    IndexDef {
        name: "droom_lead_status",
        cypher: "CREATE INDEX droom_lead_status IF NOT EXISTS \
                 FOR (n:Droom:Lead) ON (n.status)",
    },
    IndexDef {
        name: "droom_websiteform_brand_id",
        cypher: "CREATE INDEX droom_websiteform_brand_id IF NOT EXISTS \
                 FOR (n:Droom:WebsiteForm) ON (n.brand_id)",
    },
    IndexDef {
        name: "droom_demographic_brand_id",
        cypher: "CREATE INDEX droom_demographic_brand_id IF NOT EXISTS \
                 FOR (n:Droom:Demographic) ON (n.brand_id)",
    },
    IndexDef {
        name: "droom_geographic_brand_id",
        cypher: "CREATE INDEX droom_geographic_brand_id IF NOT EXISTS \
                 FOR (n:Droom:Geographic) ON (n.brand_id)",
    },
];

/// All uniqueness constraints the graph must carry.
pub fn constraints() -> &'static [ConstraintDef] {
    CONSTRAINTS
}

/// All property indexes the graph must carry.
pub fn indexes() -> &'static [IndexDef] {
    INDEXES
}

/// Names of every declared constraint, in declaration order. The verifier
/// compares these against `SHOW CONSTRAINTS` output.
pub fn constraint_names() -> Vec<&'static str> {
    CONSTRAINTS.iter().map(|c| c.name).collect()
}

//! Credential surface for verification runs.
//!
//! Every field is optional on purpose: a missing credential gates the
//! checks that need it into a skip. Reading the environment never fails.

use droom_graph::GraphSettings;

#[derive(Debug, Clone)]
pub struct Settings {
    pub neo4j_uri: Option<String>,
    pub neo4j_username: Option<String>,
    pub neo4j_password: Option<String>,
    pub neo4j_database: String,
    pub pinecone_api_key: Option<String>,
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            neo4j_uri: None,
            neo4j_username: None,
            neo4j_password: None,
            neo4j_database: "neo4j".to_string(),
            pinecone_api_key: None,
            aws_access_key_id: None,
            aws_secret_access_key: None,
            anthropic_api_key: None,
            openai_api_key: None,
        }
    }
}

impl Settings {
    /// Read every credential the checks can use. `NEO4J_USER` is accepted
    /// as an alias for `NEO4J_USERNAME`.
    pub fn from_env() -> Self {
        Self {
            neo4j_uri: env_opt("NEO4J_URI"),
            neo4j_username: env_opt("NEO4J_USERNAME").or_else(|| env_opt("NEO4J_USER")),
            neo4j_password: env_opt("NEO4J_PASSWORD"),
            neo4j_database: std::env::var("NEO4J_DATABASE").unwrap_or_else(|_| "neo4j".to_string()),
            pinecone_api_key: env_opt("PINECONE_API_KEY"),
            aws_access_key_id: env_opt("AWS_ACCESS_KEY_ID"),
            aws_secret_access_key: env_opt("AWS_SECRET_ACCESS_KEY"),
            anthropic_api_key: env_opt("ANTHROPIC_API_KEY"),
            openai_api_key: env_opt("OPENAI_API_KEY"),
        }
    }

    /// Connection settings for the graph, when every Neo4j credential is
    /// present.
    pub fn graph(&self) -> Option<GraphSettings> {
        Some(GraphSettings {
            uri: self.neo4j_uri.clone()?,
            username: self.neo4j_username.clone()?,
            password: self.neo4j_password.clone()?,
            database: self.neo4j_database.clone(),
        })
    }
}

// An empty value counts as unset, matching how shell exports behave.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_have_no_credentials() {
        let settings = Settings::default();
        assert!(settings.neo4j_uri.is_none());
        assert!(settings.pinecone_api_key.is_none());
        assert!(settings.openai_api_key.is_none());
        assert_eq!(settings.neo4j_database, "neo4j");
    }

    #[test]
    fn graph_settings_require_all_three_credentials() {
        let mut settings = Settings {
            neo4j_uri: Some("bolt://localhost:7687".to_string()),
            neo4j_username: Some("neo4j".to_string()),
            ..Settings::default()
        };
        assert!(settings.graph().is_none());

        settings.neo4j_password = Some("hunter2".to_string());
        let graph = settings.graph().unwrap();
        assert_eq!(graph.uri, "bolt://localhost:7687");
        assert_eq!(graph.database, "neo4j");
    }

    // Single test so the environment mutations never race each other.
    #[test]
    fn from_env_treats_empty_values_as_unset() {
        for key in [
            "NEO4J_URI",
            "NEO4J_USERNAME",
            "NEO4J_USER",
            "NEO4J_PASSWORD",
            "NEO4J_DATABASE",
            "PINECONE_API_KEY",
            "AWS_ACCESS_KEY_ID",
            "AWS_SECRET_ACCESS_KEY",
            "ANTHROPIC_API_KEY",
            "OPENAI_API_KEY",
        ] {
            std::env::remove_var(key);
        }

        std::env::set_var("PINECONE_API_KEY", "");
        std::env::set_var("OPENAI_API_KEY", "sk-test");
        std::env::set_var("NEO4J_USER", "fallback-user");

        let settings = Settings::from_env();
        assert!(settings.pinecone_api_key.is_none());
        assert_eq!(settings.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(settings.neo4j_username.as_deref(), Some("fallback-user"));
        assert_eq!(settings.neo4j_database, "neo4j");

        std::env::set_var("NEO4J_USERNAME", "primary-user");
        let settings = Settings::from_env();
        assert_eq!(settings.neo4j_username.as_deref(), Some("primary-user"));

        for key in ["PINECONE_API_KEY", "OPENAI_API_KEY", "NEO4J_USER", "NEO4J_USERNAME"] {
            std::env::remove_var(key);
        }
    }
}

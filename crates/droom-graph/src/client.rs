//! Connection settings for the target Neo4j instance.

use neo4rs::{query, ConfigBuilder, Graph};
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_DATABASE: &str = "neo4j";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),
}

/// Where and how to connect. The URI, username, and password are all
/// required; only the database name has a default.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSettings {
    pub uri: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub database: String,
}

impl GraphSettings {
    /// Read settings from the environment, naming every absent variable in
    /// the error. `NEO4J_USER` is accepted as a legacy alias for
    /// `NEO4J_USERNAME`.
    pub fn from_env() -> Result<Self, SettingsError> {
        let uri = env_opt("NEO4J_URI");
        let username = env_opt("NEO4J_USERNAME").or_else(|| env_opt("NEO4J_USER"));
        let password = env_opt("NEO4J_PASSWORD");

        match (uri, username, password) {
            (Some(uri), Some(username), Some(password)) => Ok(Self {
                uri,
                username,
                password,
                database: env_opt("NEO4J_DATABASE")
                    .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            }),
            (uri, username, password) => {
                let mut missing = Vec::new();
                if uri.is_none() {
                    missing.push("NEO4J_URI");
                }
                if username.is_none() {
                    missing.push("NEO4J_USERNAME");
                }
                if password.is_none() {
                    missing.push("NEO4J_PASSWORD");
                }
                Err(SettingsError::MissingVariables(missing))
            }
        }
    }

    /// Open a connection pool against the configured database. Establishing
    /// the pool does not validate the target; use [`verify_connectivity`] to
    /// force a round trip before doing real work.
    pub async fn connect(&self) -> Result<Graph, neo4rs::Error> {
        let config = ConfigBuilder::default()
            .uri(&self.uri)
            .user(&self.username)
            .password(&self.password)
            .db(self.database.as_str())
            .build()?;
        Graph::connect(config).await
    }
}

// An empty value counts as unset, matching how shell exports behave.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Round-trip probe. Connection pools hand out sessions lazily, so a bad
/// URI or password only surfaces on the first statement.
pub async fn verify_connectivity(graph: &Graph) -> Result<(), neo4rs::Error> {
    graph.run(query("RETURN 1")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_of(result: Result<GraphSettings, SettingsError>) -> Vec<&'static str> {
        match result {
            Err(SettingsError::MissingVariables(missing)) => missing,
            other => panic!("expected a missing-variables error, got {other:?}"),
        }
    }

    // Single test so the NEO4J_* environment mutations never race.
    #[test]
    fn from_env_requires_the_full_credential_group() {
        for key in [
            "NEO4J_URI",
            "NEO4J_USER",
            "NEO4J_USERNAME",
            "NEO4J_DATABASE",
            "NEO4J_PASSWORD",
        ] {
            std::env::remove_var(key);
        }

        assert_eq!(
            missing_of(GraphSettings::from_env()),
            vec!["NEO4J_URI", "NEO4J_USERNAME", "NEO4J_PASSWORD"]
        );

        // A partial group still aborts, naming only what is absent; an
        // empty value counts as absent.
        std::env::set_var("NEO4J_PASSWORD", "hunter2");
        std::env::set_var("NEO4J_URI", "");
        assert_eq!(
            missing_of(GraphSettings::from_env()),
            vec!["NEO4J_URI", "NEO4J_USERNAME"]
        );

        std::env::set_var("NEO4J_URI", "bolt://graph.internal:7687");
        std::env::set_var("NEO4J_USER", "legacy-user");
        let settings = GraphSettings::from_env().unwrap();
        assert_eq!(settings.uri, "bolt://graph.internal:7687");
        assert_eq!(settings.username, "legacy-user");
        assert_eq!(settings.password, "hunter2");
        assert_eq!(settings.database, DEFAULT_DATABASE);

        // The legacy alias only applies when the primary variable is absent.
        std::env::set_var("NEO4J_USERNAME", "primary-user");
        let settings = GraphSettings::from_env().unwrap();
        assert_eq!(settings.username, "primary-user");

        for key in ["NEO4J_URI", "NEO4J_USER", "NEO4J_USERNAME", "NEO4J_PASSWORD"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn password_is_not_serialized() {
        let settings = GraphSettings {
            uri: "bolt://localhost:7687".to_string(),
            username: "neo4j".to_string(),
            password: "secret".to_string(),
            database: DEFAULT_DATABASE.to_string(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("bolt://localhost:7687"));
    }

    // Nothing listens on port 1; pool creation still succeeds because
    // connections are only dialed on the first statement.
    #[tokio::test]
    async fn connect_builds_a_pool_without_dialing_the_target() {
        let settings = GraphSettings {
            uri: "bolt://127.0.0.1:1".to_string(),
            username: "neo4j".to_string(),
            password: "secret".to_string(),
            database: DEFAULT_DATABASE.to_string(),
        };
        assert!(settings.connect().await.is_ok());
    }
}

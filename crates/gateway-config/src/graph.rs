#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Path the GraphQL endpoint is served under.
    pub path: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            path: "/graphql".to_string(),
        }
    }
}

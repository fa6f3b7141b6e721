use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;

/// Project configuration loaded from `.clientgen.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientgenConfig {
    /// OpenAPI document to read (JSON, or YAML by extension).
    pub input: String,
    /// Directory holding the generated TypeScript modules. Cleared on every run.
    pub client_output: String,
    /// Directory holding the Postman collections. Created if missing, never cleared.
    pub collections_output: String,
    pub naming: NamingConfig,
}

impl Default for ClientgenConfig {
    fn default() -> Self {
        Self {
            input: "openapi.json".to_string(),
            client_output: "src/api/generated".to_string(),
            collections_output: "postman".to_string(),
            naming: NamingConfig::default(),
        }
    }
}

/// Function naming overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Map from operationId (or `{method}_{path}` fallback) to a custom function name.
    pub aliases: IndexMap<String, String>,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".clientgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ClientgenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# clientgen configuration
input: openapi.json
client_output: src/api/generated    # cleared and rewritten on every run
collections_output: postman         # created if missing, existing files kept

naming:
  aliases: {}
    # listClubPosts: posts     # operationId -> function name
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientgenConfig::default();
        assert_eq!(config.input, "openapi.json");
        assert_eq!(config.client_output, "src/api/generated");
        assert_eq!(config.collections_output, "postman");
        assert!(config.naming.aliases.is_empty());
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: api/spec.yaml
client_output: web/src/generated
collections_output: tools/postman
naming:
  aliases:
    listClubPosts: posts
"#;
        let config: ClientgenConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "api/spec.yaml");
        assert_eq!(config.client_output, "web/src/generated");
        assert_eq!(config.collections_output, "tools/postman");
        assert_eq!(config.naming.aliases["listClubPosts"], "posts");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: ClientgenConfig = serde_yaml_ng::from_str("input: api.json\n").unwrap();
        assert_eq!(config.input, "api.json");
        // Defaults applied
        assert_eq!(config.client_output, "src/api/generated");
        assert_eq!(config.collections_output, "postman");
    }

    #[test]
    fn test_default_content_parses_to_defaults() {
        let config: ClientgenConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config, ClientgenConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "input: [unclosed\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use anyhow::Result;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub mode: Mode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings for the generation provider. The credential itself never lives
/// here; only the name of the environment variable holding it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
    /// Largest request body `/translate` will buffer.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// `Debug` adds timing to responses and logs every pipeline step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Production,
    Debug,
}

impl Mode {
    pub fn is_debug(self) -> bool {
        self == Mode::Debug
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Production => "production",
            Mode::Debug => "debug",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Mode::Production),
            "debug" => Ok(Mode::Debug),
            other => Err(anyhow::anyhow!("Unknown mode: {}", other)),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_max_text_length() -> usize {
    1000
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            max_text_length: default_max_text_length(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Parse config text; the extension of `path` picks JSON or YAML.
    pub fn parse(content: &str, path: &str) -> Result<Self> {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(serde_yaml::from_str(content)?)
        }
    }

    /// Apply `HOST`, `PORT`, `GEMINI_MODEL` and `TRANSLATOR_MODE` overrides.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT {:?}: {}", port, e))?;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.provider.model = model;
        }
        if let Some(mode) = lookup("TRANSLATOR_MODE") {
            self.mode = mode.parse()?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.server.port, 8787);
        assert_eq!(config.provider.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.translation.max_text_length, 1000);
        assert_eq!(config.translation.max_body_bytes, 65536);
        assert_eq!(config.mode, Mode::Production);
    }

    #[test]
    fn parses_partial_yaml() {
        let yaml = "server:\n  port: 3000\nmode: debug\n";
        let config = Config::parse(yaml, "conf.yaml").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.provider.model, "gemini-1.5-flash");
        assert!(config.mode.is_debug());
    }

    #[test]
    fn parses_json_by_extension() {
        let json = r#"{"provider": {"model": "gemini-pro"}}"#;
        let config = Config::parse(json, "conf.JSON").unwrap();
        assert_eq!(config.provider.model, "gemini-pro");
        assert_eq!(config.server.port, 8787);
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let env: HashMap<&str, &str> = [
            ("PORT", "9000"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("TRANSLATOR_MODE", "Debug"),
        ]
        .into_iter()
        .collect();

        let config = Config::default()
            .with_env_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.provider.model, "gemini-2.0-flash");
        assert_eq!(config.mode, Mode::Debug);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = Config::default().with_env_overrides(|key| {
            (key == "PORT").then(|| "not-a-port".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!("verbose".parse::<Mode>().is_err());
        assert_eq!("prod".parse::<Mode>().unwrap(), Mode::Production);
    }
}

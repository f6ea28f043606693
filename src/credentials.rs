/// Where the provider API key comes from.
///
/// Read on every request so a missing key is reported per request instead of
/// stopping the process.
pub trait CredentialSource: Send + Sync {
    /// The configured key, or `None` when it is unset or empty.
    fn api_key(&self) -> Option<String>;

    /// Human-readable name of the setting, used in error details.
    fn name(&self) -> &str;
}

/// Reads the key from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|key| !key.is_empty())
    }

    fn name(&self) -> &str {
        &self.var
    }
}

/// A fixed key, for embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticCredential {
    name: String,
    key: Option<String>,
}

impl StaticCredential {
    pub fn new(name: impl Into<String>, key: Option<String>) -> Self {
        Self {
            name: name.into(),
            key,
        }
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.key.clone().filter(|key| !key.is_empty())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

pub const CONFIG_PREFIX: &str = "CONFIG_";

/// Site configuration flags (`CONFIG_<service>=value`), captured once at startup
/// and shared read-only between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFlags {
    values: HashMap<String, String>,
}

impl ConfigFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .filter(|(key, _)| key.starts_with(CONFIG_PREFIX))
            .collect();
        Self { values }
    }

    pub fn from_env() -> Self {
        Self::from_pairs(
            std::env::vars_os()
                .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?))),
        )
    }

    pub fn parse_site_conf(contents: &str) -> Self {
        let mut pairs = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                debug!(line = idx + 1, "skipping site.conf line without assignment");
                continue;
            };
            pairs.push((key.trim().to_string(), unquote(value.trim()).to_string()));
        }
        Self::from_pairs(pairs)
    }

    pub async fn load_site_conf(path: &Path) -> Result<Self, String> {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => Ok(Self::parse_site_conf(&contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(format!("failed to read site.conf {}: {err}", path.display())),
        }
    }

    /// Entries of `other` win over existing ones.
    pub fn merge(mut self, other: ConfigFlags) -> Self {
        self.values.extend(other.values);
        self
    }

    pub fn lookup(&self, service: &str) -> Option<&str> {
        self.values
            .get(&format!("{CONFIG_PREFIX}{service}"))
            .map(String::as_str)
    }

    #[cfg(test)]
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

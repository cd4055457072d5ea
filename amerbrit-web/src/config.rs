use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the four dictionary JSON files; the built-in
    /// dictionaries are used when unset
    pub dictionary_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Read `AMERBRIT_HOST`, `AMERBRIT_PORT` and `AMERBRIT_DICTIONARY_DIR`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source. Unset or unparsable values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("AMERBRIT_HOST")
                .filter(|host| !host.is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("AMERBRIT_PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            dictionary_dir: lookup("AMERBRIT_DICTIONARY_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.dictionary_dir, None);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("AMERBRIT_HOST", "0.0.0.0"),
            ("AMERBRIT_PORT", "8080"),
            ("AMERBRIT_DICTIONARY_DIR", "/srv/dictionaries"),
        ]);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(
            config.dictionary_dir,
            Some(PathBuf::from("/srv/dictionaries"))
        );
    }

    #[test]
    fn test_invalid_port_falls_back() {
        assert_eq!(config(&[("AMERBRIT_PORT", "eighty")]).port, 3000);
        assert_eq!(config(&[("AMERBRIT_PORT", "70000")]).port, 3000);
    }
}

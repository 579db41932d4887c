use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: SocketAddr,
    pub site_conf: Option<PathBuf>,
    pub tls_enabled: bool,
    pub tls_names: Vec<String>,
    pub cert_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let bind_raw = lookup("OMD_MAINTENANCE_BIND")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_raw
            .trim()
            .parse()
            .map_err(|err| format!("invalid bind address {bind_raw:?}: {err}"))?;

        let omd_root = lookup("OMD_ROOT")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let site_conf = lookup("OMD_MAINTENANCE_SITE_CONF")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| omd_root.as_ref().map(|root| root.join("etc").join("omd").join("site.conf")));

        let tls_enabled = lookup("OMD_MAINTENANCE_TLS")
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        let tls_names = lookup("OMD_MAINTENANCE_TLS_NAMES")
            .map(|value| parse_names(&value))
            .filter(|names| !names.is_empty())
            .unwrap_or_else(|| default_tls_names(&bind));

        let cert_dir = lookup("OMD_MAINTENANCE_CERT_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .or_else(|| omd_root.map(|root| root.join("etc").join("maintenance").join("certs")))
            .unwrap_or_else(|| PathBuf::from("certs"));

        Ok(Self {
            bind,
            site_conf,
            tls_enabled,
            tls_names,
            cert_dir,
        })
    }

    pub fn cert_path(&self) -> PathBuf {
        self.cert_dir.join("maintenance.crt.pem")
    }

    pub fn key_path(&self) -> PathBuf {
        self.cert_dir.join("maintenance.key.pem")
    }
}

fn parse_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_tls_names(bind: &SocketAddr) -> Vec<String> {
    let mut names = vec!["localhost".to_string()];
    let ip = bind.ip();
    if ip.is_unspecified() || ip.is_loopback() {
        names.push("127.0.0.1".to_string());
    } else {
        names.push(ip.to_string());
    }
    names
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Result<Settings, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let settings = settings_from(&[]).expect("settings");
        assert_eq!(settings.bind, DEFAULT_BIND.parse::<SocketAddr>().expect("addr"));
        assert!(settings.site_conf.is_none());
        assert!(!settings.tls_enabled);
        assert_eq!(settings.cert_dir, PathBuf::from("certs"));
    }

    #[test]
    fn site_conf_follows_omd_root() {
        let settings = settings_from(&[("OMD_ROOT", "/omd/sites/demo")]).expect("settings");
        assert_eq!(
            settings.site_conf,
            Some(PathBuf::from("/omd/sites/demo/etc/omd/site.conf"))
        );
        assert!(settings.cert_path().starts_with("/omd/sites/demo/etc/maintenance/certs"));
    }

    #[test]
    fn explicit_site_conf_wins_over_omd_root() {
        let settings = settings_from(&[
            ("OMD_ROOT", "/omd/sites/demo"),
            ("OMD_MAINTENANCE_SITE_CONF", "/tmp/site.conf"),
        ])
        .expect("settings");
        assert_eq!(settings.site_conf, Some(PathBuf::from("/tmp/site.conf")));
    }

    #[test]
    fn tls_flag_accepts_common_spellings() {
        for value in ["1", "true", "YES", "on"] {
            let settings = settings_from(&[("OMD_MAINTENANCE_TLS", value)]).expect("settings");
            assert!(settings.tls_enabled, "{value} should enable tls");
        }
        let settings = settings_from(&[("OMD_MAINTENANCE_TLS", "off")]).expect("settings");
        assert!(!settings.tls_enabled);
    }

    #[test]
    fn tls_names_default_to_localhost_and_bind_ip() {
        let settings = settings_from(&[]).expect("settings");
        assert_eq!(settings.tls_names, vec!["localhost", "127.0.0.1"]);

        let settings = settings_from(&[("OMD_MAINTENANCE_BIND", "10.1.2.3:443")]).expect("settings");
        assert_eq!(settings.tls_names, vec!["localhost", "10.1.2.3"]);
    }

    #[test]
    fn tls_names_from_environment() {
        let settings = settings_from(&[(
            "OMD_MAINTENANCE_TLS_NAMES",
            " monitor.example.com, ,10.0.0.5 ",
        )])
        .expect("settings");
        assert_eq!(settings.tls_names, vec!["monitor.example.com", "10.0.0.5"]);
    }

    #[test]
    fn rejects_invalid_bind_address() {
        let err = settings_from(&[("OMD_MAINTENANCE_BIND", "not-an-address")]).unwrap_err();
        assert!(err.contains("invalid bind address"));
    }
}

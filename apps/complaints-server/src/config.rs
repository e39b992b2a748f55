//! Layered server configuration.
//!
//! Sources, lowest to highest precedence: struct defaults, the optional YAML
//! file, then `COMPLAINTS_*` environment variables with `__` separating
//! nested keys (`COMPLAINTS_PROXY__UPSTREAM_URL`).

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use gas_proxy::GasProxyConfig;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "COMPLAINTS_";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub proxy: GasProxyConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Emit one JSON object per event instead of human-readable lines.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let figment = Figment::new();
        let figment = match path {
            Some(path) => figment.merge(Yaml::file(path)),
            None => figment,
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration from `path` (if given) and the environment.
    ///
    /// # Errors
    ///
    /// Fails when an explicitly given file does not exist, or when any source
    /// holds a value that does not fit the schema.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path
            && !path.is_file()
        {
            bail!("config file {} does not exist", path.display());
        }
        Self::figment(path)
            .extract()
            .context("invalid complaints-server configuration")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_apply_without_sources() {
        Jail::expect_with(|_jail| {
            let cfg = AppConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(cfg.server.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
            assert_eq!(cfg.logging.level, "info");
            assert!(!cfg.logging.json);
            assert_eq!(cfg.proxy.mount_prefix, "/api");
            assert_eq!(cfg.proxy.request_timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn yaml_file_is_read() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "server.yaml",
                r#"
server:
  bind_addr: "127.0.0.1:9100"
logging:
  json: true
proxy:
  upstream_url: "https://script.google.com/macros/s/abc/exec"
  mount_prefix: "/.netlify/functions/api"
"#,
            )?;
            let cfg = AppConfig::load(Some(Path::new("server.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(cfg.server.bind_addr, "127.0.0.1:9100".parse::<SocketAddr>().unwrap());
            assert!(cfg.logging.json);
            assert_eq!(
                cfg.proxy.upstream_url,
                "https://script.google.com/macros/s/abc/exec"
            );
            assert_eq!(cfg.proxy.mount_prefix, "/.netlify/functions/api");
            assert_eq!(cfg.proxy.request_timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "server.yaml",
                r#"
proxy:
  upstream_url: "https://from-file.example/exec"
  request_timeout_secs: 30
"#,
            )?;
            jail.set_env("COMPLAINTS_PROXY__UPSTREAM_URL", "https://from-env.example/exec");
            jail.set_env("COMPLAINTS_PROXY__REQUEST_TIMEOUT_SECS", "12");
            jail.set_env("COMPLAINTS_LOGGING__LEVEL", "debug");

            let cfg = AppConfig::load(Some(Path::new("server.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(cfg.proxy.upstream_url, "https://from-env.example/exec");
            assert_eq!(cfg.proxy.request_timeout_secs, 12);
            assert_eq!(cfg.logging.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("server.yaml", "proxy:\n  retries: 3\n")?;
            assert!(AppConfig::load(Some(Path::new("server.yaml"))).is_err());
            Ok(())
        });
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = AppConfig::load(Some(Path::new("absent.yaml"))).unwrap_err();
            assert!(err.to_string().contains("absent.yaml"));
            Ok(())
        });
    }
}

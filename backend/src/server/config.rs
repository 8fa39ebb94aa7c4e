//! HTTP server settings and the configuration object built from them.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use personnel::outbound::persistence::DbPool;

const DEFAULT_PORT: u16 = 8080;

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

/// Environment variable consulted when no database URL is configured.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Listener and store settings, layered from CLI, `PERSONNEL_*` env and file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PERSONNEL")]
pub struct ServerSettings {
    /// Address to bind; defaults to all interfaces.
    #[ortho_config(default = default_host())]
    pub host: IpAddr,
    /// Port to bind; defaults to 8080.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// PostgreSQL connection string. Without one the in-memory store is used.
    pub database_url: Option<String>,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Configured database URL, falling back to `DATABASE_URL`.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| env::var(DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool; the Diesel repository is used
    /// instead of the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("personnel")]).expect("config should load")
    }

    #[rstest]
    fn defaults_bind_all_interfaces_on_8080() {
        let _guard = lock_env([
            ("PERSONNEL_HOST", None::<String>),
            ("PERSONNEL_PORT", None),
            ("PERSONNEL_DATABASE_URL", None),
            (DATABASE_URL_ENV, None),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert!(settings.database_url().is_none());
    }

    #[rstest]
    fn port_alone_keeps_default_host() {
        let _guard = lock_env([
            ("PERSONNEL_HOST", None::<String>),
            ("PERSONNEL_PORT", Some("18089".to_owned())),
            ("PERSONNEL_DATABASE_URL", None),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.bind_addr(), "0.0.0.0:18089".parse().expect("addr"));
    }

    #[rstest]
    fn environment_overrides_listener() {
        let _guard = lock_env([
            ("PERSONNEL_HOST", Some("127.0.0.1".to_owned())),
            ("PERSONNEL_PORT", Some("9090".to_owned())),
            ("PERSONNEL_DATABASE_URL", None),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.bind_addr(), "127.0.0.1:9090".parse().expect("addr"));
    }

    #[rstest]
    #[case(Some("postgres://own/db"), Some("postgres://shared/db"), Some("postgres://own/db"))]
    #[case(None, Some("postgres://shared/db"), Some("postgres://shared/db"))]
    #[case(None, Some("  "), None)]
    #[case(None, None, None)]
    fn database_url_falls_back_to_shared_variable(
        #[case] own: Option<&str>,
        #[case] shared: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let _guard = lock_env([
            ("PERSONNEL_HOST", None),
            ("PERSONNEL_PORT", None),
            ("PERSONNEL_DATABASE_URL", own.map(str::to_owned)),
            (DATABASE_URL_ENV, shared.map(str::to_owned)),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.database_url().as_deref(), expected);
    }
}

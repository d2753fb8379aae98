//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use std::net::SocketAddr;
use tourney::{EndPolicy, StoreConfig};

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Prometheus scrape address, exporter disabled when unset
    pub metrics_bind: Option<SocketAddr>,
    /// Load the demo tournament on startup
    pub seed_demo: bool,
    /// Store configuration
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `metrics_bind_override` - Optional metrics address override (from CLI args)
    /// * `seed_demo_override` - Force the demo seed on (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(
        bind_override: Option<SocketAddr>,
        metrics_bind_override: Option<SocketAddr>,
        seed_demo_override: bool,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok())?;

        if let Some(bind) = bind_override {
            config.bind = bind;
        }
        if metrics_bind_override.is_some() {
            config.metrics_bind = metrics_bind_override;
        }
        config.seed_demo |= seed_demo_override;

        Ok(config)
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = parse_var(&lookup, "SERVER_BIND")?.unwrap_or_else(default_bind);
        let metrics_bind = parse_var(&lookup, "METRICS_BIND")?;
        let seed_demo = parse_var(&lookup, "SEED_DEMO")?.unwrap_or(false);

        let max_players_per_room = parse_var(&lookup, "ROOM_MAX_PLAYERS")?
            .unwrap_or(tourney::tournament::DEFAULT_MAX_PLAYERS_PER_ROOM);
        let end_policy = if parse_var(&lookup, "END_REQUIRES_EMPTY_ROOMS")?.unwrap_or(false) {
            EndPolicy::RequireEmptyRooms
        } else {
            EndPolicy::AllowOccupiedRooms
        };

        Ok(ServerConfig {
            bind,
            metrics_bind,
            seed_demo,
            store: StoreConfig {
                max_players_per_room,
                end_policy,
            },
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                var: "ROOM_MAX_PLAYERS".to_string(),
                reason,
            })?;

        if self.metrics_bind == Some(self.bind) {
            return Err(ConfigError::Invalid {
                var: "METRICS_BIND".to_string(),
                reason: format!("Must differ from SERVER_BIND ({})", self.bind),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

/// Parse a variable if present, reporting unparsable values
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                var: key.to_string(),
                reason: format!("Cannot parse '{raw}'"),
            }),
    }
}

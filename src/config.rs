// Process configuration read from the environment.
//
// Everything here is resolved once at startup and treated as read-only
// afterwards. Binaries call `AppConfig::from_env`; tests build a config with
// `AppConfig::from_lookup` or start from `AppConfig::default()`.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// How the process is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMode {
    /// Serve the application router directly.
    Standalone,
    /// Act as an Azure Functions custom handler; the host forwards each
    /// invocation as a JSON payload.
    AzureFunctions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQLSettings {
    pub path: String,
    pub schema_file: Option<PathBuf>,
    pub subscriptions: bool,
    pub use_global_prefix: bool,
    pub playground: bool,
    pub depth_limit: usize,
    pub complexity_limit: usize,
}

impl Default for GraphQLSettings {
    fn default() -> Self {
        Self {
            path: "/graphql".to_string(),
            schema_file: Some(PathBuf::from("schema.gql")),
            subscriptions: true,
            use_global_prefix: true,
            playground: true,
            depth_limit: 32,
            complexity_limit: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub mode: HostMode,
    pub function_name: String,
    pub global_prefix: String,
    pub graphql: GraphQLSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            mode: HostMode::Standalone,
            function_name: "main".to_string(),
            global_prefix: "api".to_string(),
            graphql: GraphQLSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let graphql_defaults = defaults.graphql;

        let (mode, port) = match lookup("FUNCTIONS_CUSTOMHANDLER_PORT") {
            Some(raw) => (
                HostMode::AzureFunctions,
                parse("FUNCTIONS_CUSTOMHANDLER_PORT", raw)?,
            ),
            None => (
                HostMode::Standalone,
                parse_or(&lookup, "PORT", defaults.port)?,
            ),
        };

        let schema_file = match lookup("GRAPHQL_SCHEMA_FILE") {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(PathBuf::from(raw)),
            None => graphql_defaults.schema_file,
        };

        let path = lookup("GRAPHQL_PATH").unwrap_or(graphql_defaults.path);
        if !path.starts_with('/') || path.len() < 2 {
            return Err(ConfigError::Invalid {
                key: "GRAPHQL_PATH",
                value: path,
                reason: "must start with '/' and name a route".to_string(),
            });
        }

        Ok(Self {
            host: parse_or(&lookup, "HOST", defaults.host)?,
            port,
            mode,
            function_name: lookup("AZURE_FUNCTION_NAME").unwrap_or(defaults.function_name),
            global_prefix: lookup("GLOBAL_PREFIX").unwrap_or(defaults.global_prefix),
            graphql: GraphQLSettings {
                path,
                schema_file,
                subscriptions: parse_or(
                    &lookup,
                    "GRAPHQL_SUBSCRIPTIONS",
                    graphql_defaults.subscriptions,
                )?,
                use_global_prefix: parse_or(
                    &lookup,
                    "GRAPHQL_USE_GLOBAL_PREFIX",
                    graphql_defaults.use_global_prefix,
                )?,
                playground: parse_or(&lookup, "GRAPHQL_PLAYGROUND", graphql_defaults.playground)?,
                depth_limit: parse_or(
                    &lookup,
                    "GRAPHQL_DEPTH_LIMIT",
                    graphql_defaults.depth_limit,
                )?,
                complexity_limit: parse_or(
                    &lookup,
                    "GRAPHQL_COMPLEXITY_LIMIT",
                    graphql_defaults.complexity_limit,
                )?,
            },
        })
    }
}

fn parse<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = raw.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value: raw,
    })
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| parse(key, raw))
}

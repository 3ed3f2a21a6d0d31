// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./optimelon.toml` > `~/.config/optimelon/optimelon.toml` >
//! `/etc/optimelon/optimelon.toml` with environment variable overrides via `OPTIMELON_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use tracing::debug;

use crate::model::OptimelonConfig;

/// System-wide config file path.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/optimelon/optimelon.toml";

/// Local (working directory) config file name.
pub const LOCAL_CONFIG_FILE: &str = "optimelon.toml";

/// Path of the per-user XDG config file, if a config dir exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("optimelon").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/optimelon/optimelon.toml` (system-wide)
/// 3. `~/.config/optimelon/optimelon.toml` (user XDG config)
/// 4. `./optimelon.toml` (local directory)
/// 5. `OPTIMELON_*` environment variables
pub fn load_config() -> Result<OptimelonConfig, figment::Error> {
    debug!(files = ?present_config_files(), "merging configuration layers");
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<OptimelonConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(OptimelonConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<OptimelonConfig, figment::Error> {
    debug!(path = %path.display(), "merging configuration from explicit file");
    Figment::new()
        .merge(Serialized::defaults(OptimelonConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(OptimelonConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Config files from the standard hierarchy that exist, lowest precedence first.
fn present_config_files() -> Vec<PathBuf> {
    [
        Some(PathBuf::from(SYSTEM_CONFIG_PATH)),
        user_config_path(),
        Some(PathBuf::from(LOCAL_CONFIG_FILE)),
    ]
    .into_iter()
    .flatten()
    .filter(|p| p.is_file())
    .collect()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `OPTIMELON_ROUTING_PHRASE_WEIGHT` must map to
/// `routing.phrase_weight`, not `routing.phrase.weight`.
fn env_provider() -> Env {
    Env::prefixed("OPTIMELON_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    for section in ["agent", "routing", "catalog"] {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn env_keys_split_on_section_only() {
        assert_eq!(map_env_key("routing_phrase_weight"), "routing.phrase_weight");
        assert_eq!(map_env_key("catalog_default_model"), "catalog.default_model");
        assert_eq!(map_env_key("agent_log_level"), "agent.log_level");
    }

    #[test]
    fn unknown_section_is_left_alone() {
        assert_eq!(map_env_key("telemetry_url"), "telemetry_url");
    }

    #[test]
    #[traced_test]
    fn explicit_path_load_is_logged() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[agent]\nname = \"logged\"").unwrap();
        let config = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.agent.name, "logged");
        assert!(logs_contain("merging configuration from explicit file"));
    }

    #[test]
    fn section_prefix_requires_separator() {
        // "agents_x" is not the agent section.
        assert_eq!(map_env_key("agents_x"), "agents_x");
    }
}

//! CLI configuration: thin wrapper around `catalogo_config` that applies
//! `GlobalOpts` flag overrides (--base-url, --timeout, --insecure) and
//! fills unset flags from the config file defaults.

use std::time::Duration;

use clap::ValueEnum;

use catalogo_config::ConfigError;
use catalogo_core::{CatalogConfig, TlsVerification};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use catalogo_config::{
    Config, Profile, active_profile_name, config_path, load_config_or_default, save_config,
};

/// Use `defaults.output` when neither `--output` nor `CATALOGO_OUTPUT`
/// picked a format. Unknown values are ignored with a warning.
pub fn apply_output_default(global: &mut GlobalOpts, cfg: &Config) {
    if global.output.is_some() {
        return;
    }
    match OutputFormat::from_str(&cfg.defaults.output, true) {
        Ok(format) => global.output = Some(format),
        Err(_) => tracing::warn!(
            value = %cfg.defaults.output,
            "unknown defaults.output in config, using table"
        ),
    }
}

/// Build a `CatalogConfig` from the config file, profile and CLI overrides.
///
/// An explicitly requested profile that does not exist is an error, unless
/// `--base-url` makes the profile unnecessary.
pub fn build_catalog_config(
    cfg: &Config,
    global: &GlobalOpts,
) -> Result<CatalogConfig, CliError> {
    let mut config =
        match catalogo_config::resolve_catalog_config(cfg, global.profile.as_deref()) {
            Ok(config) => config,
            Err(ConfigError::UnknownProfile { .. }) if global.base_url.is_some() => {
                CatalogConfig::default()
            }
            Err(ConfigError::UnknownProfile { profile }) => {
                return Err(CliError::ProfileNotFound {
                    name: profile,
                    available: available_profiles(cfg),
                });
            }
            Err(e) => return Err(e.into()),
        };

    if let Some(ref raw) = global.base_url {
        config.url = raw.parse().map_err(|_| CliError::Validation {
            field: "base-url".into(),
            reason: format!("invalid URL: {raw}"),
        })?;
    }
    if let Some(secs) = global.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    if global.insecure {
        config.tls = TlsVerification::DangerAcceptInvalid;
    }

    Ok(config)
}

/// Comma-separated, sorted profile names (or "(none)").
pub fn available_profiles(cfg: &Config) -> String {
    let mut names: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort_unstable();
    names.join(", ")
}

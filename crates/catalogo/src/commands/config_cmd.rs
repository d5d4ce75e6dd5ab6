//! Config subcommand handlers. None of these touch the backend.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let rendered = match global.output_format() {
                OutputFormat::Table => toml::to_string_pretty(&cfg)
                    .map_err(|e| CliError::Render(e.to_string()))?,
                OutputFormat::Json => serde_json::to_string_pretty(&cfg)?,
                OutputFormat::JsonCompact => serde_json::to_string(&cfg)?,
                OutputFormat::Yaml => output::render_yaml(&cfg)?,
            };
            output::print_output(&rendered, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init {
            name,
            url,
            profile_timeout,
            force,
        } => {
            let mut cfg = config::load_config_or_default();
            init_profile(&mut cfg, &name, url, profile_timeout, force)?;
            config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Profile '{name}' saved to {}", config::config_path().display());
            }
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let active = config::active_profile_name(global.profile.as_deref(), &cfg);
            let mut names: Vec<&String> = cfg.profiles.keys().collect();
            names.sort();

            let listing = names
                .into_iter()
                .map(|name| {
                    let marker = if *name == active { "*" } else { " " };
                    format!("{marker} {name}\t{}", cfg.profiles[name].base_url)
                })
                .collect::<Vec<_>>()
                .join("\n");
            output::print_output(&listing, global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }
            cfg.default_profile = Some(name);
            config::save_config(&cfg)?;
            Ok(())
        }
    }
}

/// Insert (or with `force`, replace) a profile after validating it.
fn init_profile(
    cfg: &mut Config,
    name: &str,
    base_url: String,
    timeout: Option<u64>,
    force: bool,
) -> Result<(), CliError> {
    if cfg.profiles.contains_key(name) && !force {
        return Err(CliError::ProfileExists { name: name.into() });
    }

    let profile = Profile {
        base_url,
        timeout,
        ..Profile::default()
    };
    catalogo_config::profile_to_catalog_config(&profile, &cfg.defaults)?;

    if cfg.profiles.is_empty() {
        cfg.default_profile = Some(name.into());
    }
    cfg.profiles.insert(name.into(), profile);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn first_profile_becomes_default() {
        let mut cfg = Config {
            default_profile: None,
            ..Config::default()
        };
        init_profile(&mut cfg, "local", "http://localhost:4000".into(), None, false).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("local"));
    }

    #[test]
    fn existing_profile_needs_force() {
        let mut cfg = Config::default();
        init_profile(&mut cfg, "local", "http://localhost:4000".into(), None, false).unwrap();

        let err = init_profile(&mut cfg, "local", "http://other:1".into(), None, false);
        assert!(matches!(err, Err(CliError::ProfileExists { .. })));

        init_profile(&mut cfg, "local", "http://other:1".into(), Some(5), true).unwrap();
        assert_eq!(cfg.profiles["local"].base_url, "http://other:1");
        assert_eq!(cfg.profiles["local"].timeout, Some(5));
    }

    #[test]
    fn invalid_url_is_not_saved() {
        let mut cfg = Config::default();
        let err = init_profile(&mut cfg, "bad", "not a url".into(), None, false).unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
        assert!(cfg.profiles.is_empty());
    }
}

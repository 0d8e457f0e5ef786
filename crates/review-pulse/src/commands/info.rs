//! `info`: the build and the configuration in effect.

use std::fmt::Display;

use clap::Args;
use owo_colors::OwoColorize;
use review_pulse_core::config::{Config, ConfigSources};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand (output format comes from `--json`).
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct Build {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
}

const BUILD: Build = Build {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    description: env!("CARGO_PKG_DESCRIPTION"),
    license: env!("CARGO_PKG_LICENSE"),
    repository: env!("CARGO_PKG_REPOSITORY"),
};

const BUNDLED_SAMPLE: &str = "bundled sample";

#[derive(Serialize)]
struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    dataset: String,
    default_store: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    recent_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    disable_input_limit: bool,
}

impl Settings {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            dataset: config
                .dataset
                .as_ref()
                .map_or_else(|| BUNDLED_SAMPLE.to_string(), ToString::to_string),
            default_store: config.default_store.unwrap_or_default().to_string(),
            recent_limit: config.recent_limit,
            max_input_bytes: config.max_input_bytes,
            disable_input_limit: config.disable_input_limit,
        }
    }

    fn input_limit(&self) -> String {
        if self.disable_input_limit {
            "unlimited".to_string()
        } else {
            self.max_input_bytes
                .map_or_else(|| "default".to_string(), |n| format!("{n} bytes"))
        }
    }
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    build: Build,
    config: Settings,
}

/// Print the package name and version followed by the effective settings.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json, "executing info command");
    let report = Report {
        build: BUILD,
        config: Settings::new(config, sources),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn print_text(report: &Report) {
    let build = &report.build;
    println!("{} {}", build.name.bold(), build.version.green());
    if !build.description.is_empty() {
        println!("{}", build.description);
    }
    if !build.license.is_empty() {
        line("License", build.license);
    }
    if !build.repository.is_empty() {
        line("Repository", build.repository.cyan());
    }

    let settings = &report.config;
    println!("\n{}", "Settings".bold().underline());
    match &settings.config_file {
        Some(path) => line("Loaded from", path.cyan()),
        None => line("Loaded from", "defaults only".yellow()),
    }
    line("Log level", settings.log_level);
    if let Some(dir) = &settings.log_dir {
        line("Log dir", dir);
    }
    line("Dataset", &settings.dataset);
    line("Default store", &settings.default_store);
    match settings.recent_limit {
        Some(n) => line("Recent limit", n),
        None => line("Recent limit", "default".dimmed()),
    }
    line("Input limit", settings.input_limit());
}

fn line(label: &str, value: impl Display) {
    println!("  {:<14} {value}", format!("{label}:").dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_pulse_core::review::StoreSelector;

    #[test]
    fn text_and_json_both_render() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), false, &config, &sources).is_ok());
        assert!(cmd_info(InfoArgs::default(), true, &config, &sources).is_ok());
    }

    #[test]
    fn defaults_point_at_the_sample() {
        let settings = Settings::new(&Config::default(), &ConfigSources::default());
        assert!(settings.config_file.is_none());
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.dataset, BUNDLED_SAMPLE);
        assert_eq!(settings.default_store, "all");
        assert_eq!(settings.input_limit(), "default");
    }

    #[test]
    fn configured_store_and_limits_are_reported() {
        let config = Config {
            default_store: Some(StoreSelector::Store(2)),
            max_input_bytes: Some(512),
            ..Config::default()
        };
        let settings = Settings::new(&config, &ConfigSources::default());
        assert_eq!(settings.default_store, "2");
        assert_eq!(settings.input_limit(), "512 bytes");

        let unlimited = Config {
            disable_input_limit: true,
            ..config
        };
        let settings = Settings::new(&unlimited, &ConfigSources::default());
        assert_eq!(settings.input_limit(), "unlimited");
    }

    #[test]
    fn json_nests_settings_under_config() {
        let report = Report {
            build: BUILD,
            config: Settings::new(&Config::default(), &ConfigSources::default()),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["config"]["dataset"], BUNDLED_SAMPLE);
        assert_eq!(json["config"]["disable_input_limit"], false);
    }
}

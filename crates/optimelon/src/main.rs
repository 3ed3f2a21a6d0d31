// SPDX-FileCopyrightText: 2026 OptiMelon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OptiMelon - prompt intent routing.
//!
//! Binary entry point: routes prompts to a recommended model, lists the
//! model catalog, and prints the effective configuration.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config_cmd;
mod models;
mod route;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use optimelon_core::ModelCategory;
use tracing_subscriber::EnvFilter;

/// OptiMelon - pick the right model for every prompt.
#[derive(Parser, Debug)]
#[command(name = "optimelon", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a prompt and recommend a model.
    Route {
        /// Prompt text. Read from stdin when omitted and stdin is not a terminal.
        prompt: Vec<String>,
        /// Output as JSON.
        #[arg(long)]
        json: bool,
        /// Show the per-intent score breakdown.
        #[arg(long)]
        explain: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// List the models available for routing.
    Models {
        /// Only show models in this category (general, image, coders, ...).
        #[arg(long)]
        category: Option<ModelCategory>,
        /// Case-insensitive filter on id, name, description, and tags.
        #[arg(long)]
        search: Option<String>,
        /// Output as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Print the effective configuration.
    Config {
        /// Output as JSON instead of TOML.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => optimelon_config::load_and_validate_path(path),
        None => optimelon_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            optimelon_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);
    tracing::debug!(agent = %config.agent.name, "configuration loaded");

    let result = match cli.command {
        Some(Commands::Route {
            prompt,
            json,
            explain,
            plain,
        }) => route::run_route(&config, &prompt, json, explain, plain),
        Some(Commands::Models {
            category,
            search,
            json,
            plain,
        }) => models::run_models(&config, category, search.as_deref(), json, plain),
        Some(Commands::Config { json }) => config_cmd::run_config(&config, json),
        None => {
            println!("optimelon: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("optimelon: {e}");
        std::process::exit(1);
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Logs go to stderr so `--json` output on stdout stays machine-readable.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("optimelon={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Only jemalloc supports advancing the stats epoch.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_route_with_multiword_prompt() {
        let cli = Cli::try_parse_from(["optimelon", "route", "fix", "this", "bug", "--json"])
            .unwrap();
        match cli.command {
            Some(Commands::Route { prompt, json, .. }) => {
                assert_eq!(prompt, vec!["fix", "this", "bug"]);
                assert!(json);
            }
            other => panic!("expected route, got {other:?}"),
        }
    }

    #[test]
    fn parses_models_category() {
        let cli =
            Cli::try_parse_from(["optimelon", "models", "--category", "coders"]).unwrap();
        match cli.command {
            Some(Commands::Models { category, .. }) => {
                assert_eq!(category, Some(ModelCategory::Coders));
            }
            other => panic!("expected models, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Cli::try_parse_from(["optimelon", "models", "--category", "poetry"]).is_err());
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["optimelon", "config", "--config", "/tmp/o.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/o.toml")));
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config =
            optimelon_config::load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.agent.name, "optimelon");
    }

    #[test]
    fn config_file_drives_routing() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[routing.priorities]\ncoding = [\"zai-org/GLM-4.5-Air\"]\n\n[catalog]\ndisabled_models = [\"moonshotai/Kimi-K2-Instruct\"]"
        )
        .unwrap();

        let config = optimelon_config::load_and_validate_path(file.path()).unwrap();
        let (router, catalog) = optimelon_router::build(&config).unwrap();
        let result = router.route_live("please debug this python function", &catalog);
        assert_eq!(result.model_id, "zai-org/GLM-4.5-Air");
    }
}

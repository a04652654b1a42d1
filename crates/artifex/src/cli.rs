//! Command-line arguments for the `artifex` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use artifex_arsenal::WeaponGenerator;
use artifex_core::{Document, Exportable, GenerationError, GenerationResult, Validate};

use crate::config::ArtifexConfig;

/// ARTIFEX command-line arguments.
///
/// CLI values override settings loaded from `--config`.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "artifex", about = "Deterministic procedural content generator")]
pub struct CliArgs {
    /// What to generate.
    #[command(subcommand)]
    pub command: Command,

    /// TOML file with `[city]`, `[terrain]` and `[weapons]` tables.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for every pipeline (overrides the config file).
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

/// Pipeline to run.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate a city.
    City,
    /// Generate a terrain grid.
    Terrain,
    /// Generate a weapon set.
    Weapons {
        /// Number of weapons.
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Item level.
        #[arg(long, default_value_t = 1)]
        level: u32,
    },
}

impl ArtifexConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.set_seed(seed);
        }
    }
}

/// Failures of one `artifex` invocation.
#[derive(Error, Debug)]
pub enum CliError {
    /// The config file could not be read.
    #[error("{}: {source}", path.display())]
    ReadConfig {
        /// File named by `--config`.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Bad configuration or a pipeline failure.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The export document could not be encoded.
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads `--config` (or defaults) and applies the other flags.
///
/// # Errors
///
/// [`CliError::ReadConfig`] for unreadable files, [`CliError::Generation`]
/// for malformed or invalid TOML.
pub fn load_config(args: &CliArgs) -> Result<ArtifexConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.clone(),
                source,
            })?;
            ArtifexConfig::from_toml(&text)?
        }
        None => ArtifexConfig::default(),
    };
    config.apply_cli_overrides(args);
    Ok(config)
}

/// Runs the requested pipeline and encodes its document as pretty JSON.
///
/// # Errors
///
/// Any [`CliError`].
pub fn render(args: &CliArgs) -> Result<String, CliError> {
    let config = load_config(args)?;
    let document = generate_document(args.command, &config)?;
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Runs one pipeline and returns its export document.
///
/// # Errors
///
/// Any error from config validation or the pipeline itself.
pub fn generate_document(command: Command, config: &ArtifexConfig) -> GenerationResult<Document> {
    config.validate()?;
    let document = match command {
        Command::City => artifex_city::generate_city(&config.city)?.to_document(),
        Command::Terrain => artifex_terrain::generate_terrain(&config.terrain)?.to_document(),
        Command::Weapons { count, level } => {
            let mut generator = WeaponGenerator::new(config.weapons.clone())?;
            generator.generate_weapon_set(count, level)?.to_document()
        }
    };
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weapons() {
        let args = CliArgs::try_parse_from([
            "artifex", "weapons", "--count", "3", "--level", "7", "--seed", "-9",
        ])
        .unwrap();

        assert_eq!(args.command, Command::Weapons { count: 3, level: 7 });
        assert_eq!(args.seed, Some(-9));
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_parse_global_flags_before_subcommand() {
        let args = CliArgs::try_parse_from([
            "artifex", "--config", "world.toml", "--log-level", "debug", "city",
        ])
        .unwrap();

        assert_eq!(args.command, Command::City);
        assert_eq!(args.config, Some(PathBuf::from("world.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(CliArgs::try_parse_from(["artifex"]).is_err());
    }

    #[test]
    fn test_cli_override() {
        let mut config = ArtifexConfig::default();
        let args = CliArgs::try_parse_from(["artifex", "terrain", "--seed", "5"]).unwrap();
        config.apply_cli_overrides(&args);

        assert_eq!(config.terrain.seed, 5);
        assert_eq!(config.city.seed, 5);
        assert_eq!(config.terrain.width, ArtifexConfig::default().terrain.width);
    }

    #[test]
    fn test_cli_no_override() {
        let original = ArtifexConfig::default();
        let mut config = ArtifexConfig::default();
        let args = CliArgs::try_parse_from(["artifex", "city"]).unwrap();
        config.apply_cli_overrides(&args);

        assert_eq!(config, original);
    }

    #[test]
    fn test_weapon_document() {
        let command = Command::Weapons { count: 4, level: 2 };
        let doc = generate_document(command, &ArtifexConfig::default()).unwrap();

        assert_eq!(doc.get("total_weapons").and_then(Document::as_i64), Some(4));
    }

    #[test]
    fn test_missing_config_file() {
        let args = CliArgs::try_parse_from(["artifex", "--config", "/nonexistent/world.toml", "city"]).unwrap();

        assert!(matches!(render(&args), Err(CliError::ReadConfig { .. })));
    }

    #[test]
    fn test_render_weapons_json() {
        let args = CliArgs::try_parse_from(["artifex", "weapons", "--count", "2"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&render(&args).unwrap()).unwrap();

        assert_eq!(json["total_weapons"], 2);
        assert_eq!(json["weapons"][1]["id"], "WPN_1");
    }

    #[test]
    fn test_invalid_level_surfaces_generation_error() {
        let args = CliArgs::try_parse_from(["artifex", "weapons", "--level", "0"]).unwrap();
        let err = render(&args).unwrap_err();

        assert!(matches!(err, CliError::Generation(GenerationError::InvalidConfig(_))));
        assert!(err.to_string().contains("level"));
    }

    #[test]
    fn test_zero_level_is_an_error() {
        let command = Command::Weapons { count: 1, level: 0 };
        assert!(generate_document(command, &ArtifexConfig::default()).is_err());
    }
}

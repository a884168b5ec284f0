/// Config file loading and creation for the swisspair CLI.
///
/// Config lives at ~/.config/swisspair/config.toml.
/// All fields are optional; CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct SwisspairConfig {
    pub players: Option<usize>,
    pub rounds: Option<u32>,
    pub rated_fraction: Option<f64>,
    pub seed: Option<u64>,
    pub bye_point: Option<bool>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# swisspair configuration
# All values here can be overridden by CLI flags.

# Number of players in the tournament
# players = 10

# Number of rounds
# rounds = 3

# Fraction of players assigned a rating at registration (0.0 to 1.0)
# rated_fraction = 0.8

# Fixed RNG seed for reproducible registration, pairing and simulation
# seed = 42

# Award the bye player a free win each round
# bye_point = false
";

/// Returns the default config path: ~/.config/swisspair/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("swisspair").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> SwisspairConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            toml::from_str(&content)
                .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display())))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => SwisspairConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    // Create parent directories
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}

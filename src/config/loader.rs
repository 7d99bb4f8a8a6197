use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::ProgramHealthConfig;
use super::health::HealthConfig;
use super::thresholds::RecommendationConfig;
use crate::errors::Error;

pub const CONFIG_FILE_NAME: &str = ".program-health.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML document and replace invalid sections with their defaults.
pub fn parse_and_validate_config(contents: &str) -> Result<ProgramHealthConfig, Error> {
    let mut config = toml::from_str::<ProgramHealthConfig>(contents)?;

    if let Some(health) = &config.health {
        if let Err(e) = health.validate() {
            log::warn!("Invalid [health] settings: {}. Using defaults.", e);
            config.health = Some(HealthConfig::default());
        }
    }

    if let Some(recommendations) = &config.recommendations {
        if let Err(e) = recommendations.validate() {
            log::warn!("Invalid [recommendations] settings: {}. Using defaults.", e);
            config.recommendations = Some(RecommendationConfig::default());
        }
    }

    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ProgramHealthConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its parents, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: PathBuf) -> ProgramHealthConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ProgramHealthConfig::default()
        })
}

/// Load configuration starting from the current directory.
pub fn load_config() -> ProgramHealthConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ProgramHealthConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// malformed file is an error.
pub fn load_config_from_path(path: &Path) -> Result<ProgramHealthConfig, Error> {
    let contents = read_config_file(path).map_err(|e| Error::io_with_path(e, path))?;
    parse_and_validate_config(&contents)
        .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))
}

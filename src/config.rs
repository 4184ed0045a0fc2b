use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// File holding the process name pattern.
    pub input: PathBuf,
    /// File the ranked pids are written to.
    pub output: PathBuf,
    /// Exit with a distinct status when nothing matches.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("/app/process_name.txt"),
            output: PathBuf::from("/app/top_pids.txt"),
            strict: false,
        }
    }
}

impl Config {
    pub fn load() -> Config {
        Self::load_from(&get_home_config())
    }

    pub fn load_from(path: &Path) -> Config {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<Config>(&contents) {
                    Ok(config) => {
                        debug!(path = %path.display(), "loaded config");
                        return config;
                    }
                    Err(err) => warn!(path = %path.display(), "ignoring config: {err}"),
                },
                Err(err) => warn!(path = %path.display(), "ignoring config: {err}"),
            }
        }

        //default
        Config::default()
    }
}

fn get_home_config() -> PathBuf {
    //home directory
    if let Some(mut dir) = dirs::home_dir() {
        dir.push(".config");
        dir.push("memrank");
        dir.push("config.toml");
        return dir;
    }
    //should not happen, but just in case
    PathBuf::from("config.toml")
}

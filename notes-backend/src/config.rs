use std::env;
use std::path::PathBuf;

use crate::models::Note;
use crate::notes::fixtures::fixture_notes;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    /// `fixtures`, `none`, or a path to a JSON array of notes.
    pub const NOTES_SEED: &str = "NOTES_SEED";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3001;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
    pub const NOTES_SEED: &str = "fixtures";
}

/// Where the initial notes of a fresh instance come from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// The built-in fixture notes (ids 1-3)
    Fixtures,
    /// Start with an empty collection
    Empty,
    /// A JSON file holding an array of `{id, content, date}` objects
    File(PathBuf),
}

impl SeedSource {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "fixtures" => SeedSource::Fixtures,
            "none" | "empty" => SeedSource::Empty,
            path => SeedSource::File(PathBuf::from(path)),
        }
    }

    /// Resolve the seed into notes
    pub fn load(&self) -> Result<Vec<Note>, String> {
        match self {
            SeedSource::Fixtures => fixture_notes().map_err(|e| e.to_string()),
            SeedSource::Empty => Ok(Vec::new()),
            SeedSource::File(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read seed file {}: {}", path.display(), e))?;
                serde_json::from_str(&raw)
                    .map_err(|e| format!("Invalid seed file {}: {}", path.display(), e))
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub seed: SeedSource,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var(env_vars::PORT) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("PORT '{}' is not a valid number, using {}", raw, defaults::PORT);
                defaults::PORT
            }),
            Err(_) => defaults::PORT,
        };

        Self {
            port,
            bind_address: env::var(env_vars::BIND_ADDRESS)
                .unwrap_or_else(|_| defaults::BIND_ADDRESS.to_string()),
            seed: SeedSource::parse(
                &env::var(env_vars::NOTES_SEED).unwrap_or_else(|_| defaults::NOTES_SEED.to_string()),
            ),
        }
    }

    pub fn load_seed(&self) -> Result<Vec<Note>, String> {
        self.seed.load()
    }
}

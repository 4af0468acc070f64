use std::path::PathBuf;

use lazy_static::lazy_static;

pub const DEFAULT_INPUT: &str = "test_file.alm";
pub const DEFAULT_CHUNK_SIZE: usize = 16;
pub const DEFAULT_LOG_FILTER: &str = "info";

lazy_static! {
    /// process wide settings, read from the environment on first use
    pub static ref CONFIG: Config = Config::from_lookup(|key| std::env::var(key).ok());
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// file to chunk when no path is given on the command line
    pub input: PathBuf,

    pub chunk_size: usize,

    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,

    /// use ansi color when writing log lines
    pub use_ansi_color: bool,

    /// problems found while reading settings, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            chunk_size: DEFAULT_CHUNK_SIZE,
            log_filter: String::from(DEFAULT_LOG_FILTER),
            use_ansi_color: true,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Build a config from `lookup`, which maps a variable name to its value if set
    ///
    /// Values that fail to parse keep their default and leave a message in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(input) = lookup("RANGEKIT_INPUT") {
            config.input = PathBuf::from(input);
        }

        if let Some(raw) = lookup("RANGEKIT_CHUNK_SIZE") {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.chunk_size = size,
                _ => config.warnings.push(format!(
                    "RANGEKIT_CHUNK_SIZE={raw:?} is not a positive integer, using {DEFAULT_CHUNK_SIZE}"
                )),
            }
        }

        if let Some(filter) = lookup("RANGEKIT_LOG") {
            config.log_filter = filter;
        }

        if let Some(raw) = lookup("RANGEKIT_COLOR") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.use_ansi_color = true,
                "0" | "false" | "no" | "off" => config.use_ansi_color = false,
                _ => config.warnings.push(format!(
                    "RANGEKIT_COLOR={raw:?} is not a boolean, leaving color on"
                )),
            }
        }

        config
    }
}

#[cfg(test)]
mod test {
    use std::{collections::HashMap, path::PathBuf};

    use pretty_assertions::assert_eq;

    use crate::config::{Config, DEFAULT_CHUNK_SIZE};

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(from_pairs(&[]), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = from_pairs(&[
            ("RANGEKIT_INPUT", "data.bin"),
            ("RANGEKIT_CHUNK_SIZE", " 64 "),
            ("RANGEKIT_LOG", "rangekit=trace"),
            ("RANGEKIT_COLOR", "off"),
        ]);

        assert_eq!(config.input, PathBuf::from("data.bin"));
        assert_eq!(config.chunk_size, 64);
        assert_eq!(config.log_filter, "rangekit=trace");
        assert!(!config.use_ansi_color);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn bad_values_fall_back_with_a_warning() {
        let config = from_pairs(&[("RANGEKIT_CHUNK_SIZE", "0"), ("RANGEKIT_COLOR", "maybe")]);

        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert!(config.use_ansi_color);
        assert_eq!(config.warnings.len(), 2);
    }
}

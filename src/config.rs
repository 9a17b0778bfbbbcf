use std::path::Path;
use std::time::Duration;

use anyhow::anyhow;
use serde::Deserialize;

use crate::clipboard;
use crate::errors::Error;
use crate::transformer::{Mode, DEFAULT_PREFIX};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
pub const DEFAULT_GENERATION_DELAY_MS: u64 = 500;

#[derive(Default, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct ConfigFromReader {
    prefix: Option<String>,
    mode: Option<Mode>,
    generation_delay_ms: Option<u64>,
    clipboard_command: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prefix: String,
    pub mode: Mode,
    pub generation_delay: Duration,
    pub clipboard_command: Vec<String>,
}

/// Values given on the command line, they win over the file.
#[derive(Default, Debug, Clone)]
pub struct Overrides {
    pub prefix: Option<String>,
    pub mode: Option<Mode>,
    pub generation_delay_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: DEFAULT_PREFIX.to_string(),
            mode: Mode::default(),
            generation_delay: Duration::from_millis(DEFAULT_GENERATION_DELAY_MS),
            clipboard_command: clipboard::default_command(),
        }
    }
}

impl Config {
    /// Loads `path` if given, otherwise `./config.yaml` when it exists, otherwise defaults.
    pub fn build(path: Option<&Path>, overrides: &Overrides) -> Result<Self, Error> {
        let config = match path {
            Some(path) => Config::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                Config::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Config::default(),
        };

        Ok(config.with_overrides(overrides))
    }

    fn from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            description: format!("couldn't open config file {}", path.display()),
            error: e.into(),
        })?;

        Config::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, Error> {
        // an empty document deserializes as unit, treat it as "all defaults"
        let config_from_reader: ConfigFromReader = if content.trim().is_empty() {
            ConfigFromReader::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| Error::Config {
                description: "couldn't read config values".to_string(),
                error: e.into(),
            })?
        };

        let default = Config::default();

        Ok(Config {
            prefix: config_from_reader.prefix.unwrap_or(default.prefix),
            mode: config_from_reader.mode.unwrap_or(default.mode),
            generation_delay: config_from_reader
                .generation_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(default.generation_delay),
            clipboard_command: match config_from_reader.clipboard_command {
                Some(command) => {
                    if command.first().map_or(true, |p| p.trim().is_empty()) {
                        return Err(Error::Config {
                            description: "`clipboard_command` is empty, want(example):

                clipboard_command: [ xclip, -selection, clipboard ]
                "
                            .to_string(),
                            error: anyhow!("empty clipboard command"),
                        });
                    }

                    command
                }
                None => default.clipboard_command,
            },
        })
    }

    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(prefix) = &overrides.prefix {
            self.prefix = prefix.clone();
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(delay_ms) = overrides.generation_delay_ms {
            self.generation_delay = Duration::from_millis(delay_ms);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use super::{Config, Overrides};
    use crate::transformer::Mode;

    #[test]
    fn from_yaml_full() {
        let config = Config::from_yaml(
            "
prefix: CTF
mode: strict
generation_delay_ms: 0
clipboard_command: [ wl-copy, --trim-newline ]
",
        )
        .unwrap();

        assert_eq!(config.prefix, "CTF");
        assert_eq!(config.mode, Mode::Strict);
        assert_eq!(config.generation_delay, Duration::ZERO);
        assert_eq!(config.clipboard_command, vec!["wl-copy", "--trim-newline"]);
    }

    #[test]
    fn from_yaml_empty_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
    }

    #[test]
    fn from_yaml_partial_keeps_defaults() {
        let config = Config::from_yaml("prefix: HTB").unwrap();

        assert_eq!(config.prefix, "HTB");
        assert_eq!(config.mode, Mode::Substitution);
        assert_eq!(config.generation_delay, Duration::from_millis(500));
    }

    #[test]
    fn from_yaml_rejects_empty_clipboard_command() {
        assert!(Config::from_yaml("clipboard_command: []").is_err());
        assert!(Config::from_yaml("clipboard_command: [ '' ]").is_err());
    }

    #[test]
    fn from_yaml_rejects_unknown_mode_and_keys() {
        assert!(Config::from_yaml("mode: rot13").is_err());
        assert!(Config::from_yaml("prefx: flag").is_err());
    }

    #[test]
    fn build_fails_on_missing_explicit_file() {
        let result = Config::build(
            Some(Path::new("/nonexistent/flaggen/config.yaml")),
            &Overrides::default(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn overrides_win_over_file() {
        let config = Config::from_yaml("prefix: HTB\ngeneration_delay_ms: 100")
            .unwrap()
            .with_overrides(&Overrides {
                prefix: Some("CTF".to_string()),
                mode: Some(Mode::Strict),
                generation_delay_ms: Some(0),
            });

        assert_eq!(config.prefix, "CTF");
        assert_eq!(config.mode, Mode::Strict);
        assert_eq!(config.generation_delay, Duration::ZERO);
    }
}

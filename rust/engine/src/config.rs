use serde::{Deserialize, Serialize};
use std::fs;

use crate::errors::ConfigError;
use crate::grammar::Room;

pub const CONFIG_ENV: &str = "HANDPARSE_CONFIG";
pub const ROOM_ENV: &str = "HANDPARSE_ROOM";
pub const AUTO_PARSE_ENV: &str = "HANDPARSE_AUTO_PARSE";

/// Parser settings for [`crate::record::HandRecord::from_config`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParserConfig {
    /// Grammar to use; `None` detects the room from the header.
    pub room: Option<Room>,
    /// Resolve records as soon as they are built.
    pub auto_parse: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            room: None,
            auto_parse: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub room: ValueSource,
    pub auto_parse: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            room: ValueSource::Default,
            auto_parse: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: ParserConfig,
    pub sources: ConfigSources,
}

pub fn load() -> Result<ParserConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `HANDPARSE_CONFIG`, then the
/// `HANDPARSE_ROOM` / `HANDPARSE_AUTO_PARSE` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = ParserConfig::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(code) = f.room {
            cfg.room = Some(parse_room(&code)?);
            sources.room = ValueSource::File;
        }
        if let Some(v) = f.auto_parse {
            cfg.auto_parse = v;
            sources.auto_parse = ValueSource::File;
        }
    }

    if let Ok(code) = std::env::var(ROOM_ENV)
        && !code.is_empty()
    {
        cfg.room = match code.to_ascii_lowercase().as_str() {
            "auto" => None,
            _ => Some(parse_room(&code)?),
        };
        sources.room = ValueSource::Env;
    }
    if let Ok(flag) = std::env::var(AUTO_PARSE_ENV)
        && !flag.is_empty()
    {
        cfg.auto_parse =
            parse_bool(&flag).ok_or_else(|| ConfigError::Invalid(format!("auto_parse: {flag:?}")))?;
        sources.auto_parse = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    room: Option<String>,
    #[serde(default)]
    auto_parse: Option<bool>,
}

fn parse_room(code: &str) -> Result<Room, ConfigError> {
    Room::from_code(code).ok_or_else(|| ConfigError::Invalid(format!("unknown room {code:?}")))
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

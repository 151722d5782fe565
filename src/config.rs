use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

static COMPILED_DEFAULT: LazyLock<Config> = LazyLock::new(|| {
    toml::from_str(DEFAULT_CONFIG).expect("default_config.toml is checked by build.rs")
});

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub html: HtmlConfig,
}

/// Element names written by the renderer.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HtmlConfig {
    /// Wraps `**...**` spans.
    pub bold_tag: String,
    /// Wraps `__...__` spans.
    pub emphasis_tag: String,
    /// Wraps runs of `"- "` lines.
    pub dash_list_tag: String,
    /// Wraps runs of `"* "` lines.
    pub star_list_tag: String,
    /// Emitted between the lines of a paragraph.
    pub line_break: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            bold_tag: "b".to_string(),
            emphasis_tag: "em".to_string(),
            dash_list_tag: "ul".to_string(),
            star_list_tag: "ol".to_string(),
            line_break: "<br/>".to_string(),
        }
    }
}

impl Config {
    /// The config bundled with the crate, parsed once per process.
    pub fn compiled_default() -> &'static Self {
        &COMPILED_DEFAULT
    }

    /// Load config from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Base URL the sitemap entries are built from.
    pub site_url: String,
    /// Directory holding a `root.html` shell template override.
    pub templates: Option<PathBuf>,
    /// YAML file overriding the default style classes.
    pub styles: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: "http://localhost".to_owned(),
            templates: None,
            styles: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(&std::fs::read_to_string(path)?)?)
    }
}

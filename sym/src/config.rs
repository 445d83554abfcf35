use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Symbol output settings.
///
/// ```yaml
/// output: build/game.sym
/// version: 2
/// enabled: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymConfig {
    /// Where to write the symbol file. Nothing is written when unset.
    pub output: Option<PathBuf>,
    /// Format version; 2 and above annotate labels with function sizes.
    pub version: u32,
    /// Whether labels and data are recorded at all.
    pub enabled: bool,
}

impl Default for SymConfig {
    fn default() -> Self {
        SymConfig {
            output: None,
            version: 1,
            enabled: true,
        }
    }
}

impl SymConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::ConfigOpen(name.clone(), e))?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|e| Error::ConfigParse(name, e))
    }

    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        serde_yaml::from_str(text).map_err(|e| Error::ConfigParse("<inline>".to_string(), e))
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::Mode;

/// Conversion parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParams {
    pub mode: Mode,
    /// Abort the run on the first line that cannot be converted instead of
    /// skipping it
    pub fail_fast: bool,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            mode: Mode::Lenient,
            fail_fast: false,
        }
    }
}

impl ConversionParams {
    /// Read parameters from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> std::result::Result<Self, serde_json::Error> {
        let file = std::fs::File::open(path).map_err(serde_json::Error::io)?;
        serde_json::from_reader(std::io::BufReader::new(file))
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let params: ConversionParams = serde_json::from_str(r#"{"mode":"strict"}"#).unwrap();
        assert_eq!(params.mode, Mode::Strict);
        assert!(!params.fail_fast);

        let params: ConversionParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, ConversionParams::default());
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        let params = ConversionParams {
            mode: Mode::Strict,
            fail_fast: true,
        };
        std::fs::write(&path, params.to_json_string().unwrap()).unwrap();

        assert_eq!(ConversionParams::from_json_file(&path).unwrap(), params);
    }

    #[test]
    fn missing_or_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConversionParams::from_json_file(&dir.path().join("nope.json")).is_err());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"mode":"sloppy"}"#).unwrap();
        assert!(ConversionParams::from_json_file(&bad).is_err());
    }
}

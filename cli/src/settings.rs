use anyhow::Context;
use minesweep_core::{Coord, Difficulty};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game defaults, optionally read from a TOML file.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Settings {
    pub width: Coord,
    pub height: Coord,
    pub difficulty: Difficulty,
    /// Pixel size of a cell, used to resolve `click` positions.
    pub cell_size: f64,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 9,
            height: 9,
            difficulty: Difficulty::Easy,
            cell_size: 40.0,
            seed: None,
        }
    }
}

impl Settings {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub(crate) fn parse(text: &str) -> anyhow::Result<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub(crate) fn validate(&self) -> anyhow::Result<()> {
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            anyhow::bail!("cell_size must be positive, got {}", self.cell_size);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn file_overrides_fields() {
        let settings = Settings::parse(
            r#"
            width = 30
            height = 16
            difficulty = "expert"
            seed = 99
            "#,
        )
        .unwrap();

        assert_eq!(settings.width, 30);
        assert_eq!(settings.height, 16);
        assert_eq!(settings.difficulty, Difficulty::Expert);
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.cell_size, 40.0);
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        assert!(Settings::parse(r#"difficulty = "nightmare""#).is_err());
    }

    #[test]
    fn non_positive_cell_size_is_rejected() {
        assert!(Settings::parse("cell_size = 0.0").is_err());
    }
}

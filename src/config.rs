use crate::batch::PREVIEW_SIZES;
use crate::branch::{BranchStyle, BranchTable};
use crate::error::{GlyphError, Result};
use crate::glyph::DockGlyph;
use crate::trace::{Polarity, SourceRegion, Tracer, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub branch: BranchConfig,
    pub trace: TraceConfig,
    pub output: OutputConfig,
}

/// Supersampled rendering configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Drawing resolution as a multiple of the output size
    pub supersample: u32,
    /// Output sizes in pixels
    pub sizes: Vec<u32>,
}

/// Dock tree branching configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BranchConfig {
    pub max_depth: usize,
    /// Degrees added to the left spread per depth
    pub left_growth: f32,
    /// Degrees added to the right spread per depth
    pub right_growth: f32,
    /// Shortest branch drawn, in working pixels
    pub min_length: f32,
    /// Thinnest branch drawn, in working pixels
    pub min_width: f32,
    /// Per-depth spread and decay; depths past the end use 40° / 0.6 / 0.7
    pub levels: BranchTable,
}

/// Reference tracing configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TraceConfig {
    /// Luminance cutoff for foreground pixels
    pub threshold: u8,
    /// Clear margin on each side, as a fraction of the output size
    pub padding_ratio: f32,
    /// "full", "left-half" or "right-half"
    pub region: SourceRegion,
    /// "dark-on-light" or "light-on-dark"
    pub polarity: Polarity,
}

/// Output configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory PNG files are written to
    pub dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            supersample: 4,
            sizes: PREVIEW_SIZES.to_vec(),
        }
    }
}

impl Default for BranchConfig {
    fn default() -> Self {
        let style = BranchStyle::default();
        BranchConfig {
            max_depth: 4,
            left_growth: style.left_growth,
            right_growth: style.right_growth,
            min_length: style.min_length,
            min_width: style.min_width,
            levels: BranchTable::dock(),
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            threshold: DEFAULT_THRESHOLD,
            padding_ratio: 0.08,
            region: SourceRegion::Full,
            polarity: Polarity::DarkOnLight,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: PathBuf::from("logo"),
        }
    }
}

impl BranchConfig {
    /// Dock glyph drawn with these branching parameters
    pub fn dock_glyph(&self) -> DockGlyph {
        let style = BranchStyle {
            left_growth: self.left_growth,
            right_growth: self.right_growth,
            min_length: self.min_length,
            min_width: self.min_width,
            cap_divisor: 2.2,
        };
        DockGlyph::new(self.levels.clone(), style, self.max_depth)
    }
}

impl TraceConfig {
    pub fn tracer(&self) -> Tracer {
        Tracer {
            threshold: self.threshold,
            polarity: self.polarity,
            region: self.region,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "grovemark")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using default configuration", e);
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| GlyphError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.render.supersample == 0 {
            return Err(GlyphError::Config("render.supersample must be positive".into()));
        }
        if self.render.sizes.contains(&0) {
            return Err(GlyphError::Config("render.sizes must be positive".into()));
        }
        if !(0.0..0.5).contains(&self.trace.padding_ratio) {
            return Err(GlyphError::Config(format!(
                "trace.padding_ratio {} outside [0, 0.5)",
                self.trace.padding_ratio
            )));
        }
        Ok(())
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| GlyphError::Config("could not determine config directory".into()))?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| GlyphError::Config(e.to_string()))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<Option<PathBuf>> {
        match Self::config_path() {
            Some(path) if !path.exists() => {
                Config::default().save_to(&path)?;
                Ok(Some(path))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.supersample, 4);
        assert_eq!(config.render.sizes, vec![64, 128, 256, 512, 1024]);
        assert_eq!(config.branch.max_depth, 4);
        assert_eq!(config.branch.left_growth, 3.0);
        assert_eq!(config.branch.right_growth, 2.0);
        assert_eq!(config.trace.threshold, 128);
        assert_eq!(config.trace.padding_ratio, 0.08);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            "[trace]\nthreshold = 100\nregion = \"left-half\"\n\n[branch]\nleft_growth = 5.0\n",
        )
        .unwrap();
        assert_eq!(config.trace.threshold, 100);
        assert_eq!(config.trace.region, SourceRegion::LeftHalf);
        assert_eq!(config.trace.padding_ratio, 0.08);
        assert_eq!(config.branch.left_growth, 5.0);
        assert_eq!(config.branch.levels, BranchTable::dock());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.render.sizes = vec![16, 32];
        config.trace.polarity = Polarity::LightOnDark;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[render]\nsupersample = 0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(GlyphError::Config(_))));

        fs::write(
            &path,
            "[[branch.levels]]\nspread = 30.0\nlength_decay = 1.2\nwidth_decay = 0.5\n",
        )
        .unwrap();
        assert!(matches!(Config::load_from(&path), Err(GlyphError::Config(_))));
    }

    #[test]
    fn test_dock_glyph_uses_branch_config() {
        let mut branch = BranchConfig::default();
        branch.left_growth = 7.0;
        let glyph = branch.dock_glyph();
        assert_eq!(glyph.style().left_growth, 7.0);
        assert_eq!(glyph.style().cap_divisor, 2.2);
        assert_eq!(glyph.table(), &BranchTable::dock());
    }
}

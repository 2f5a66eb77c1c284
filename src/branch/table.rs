use crate::error::{GlyphError, Result};
use serde::{Deserialize, Serialize};

/// Branching parameters for one recursion depth
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BranchSpec {
    /// Angle between parent and each child, in degrees
    pub spread: f32,
    /// Child length as a fraction of the parent, in (0, 1]
    pub length_decay: f32,
    /// Child width as a fraction of the parent, in (0, 1]
    pub width_decay: f32,
}

impl BranchSpec {
    /// Used for any depth the table has no entry for
    pub const FALLBACK: BranchSpec = BranchSpec {
        spread: 40.0,
        length_decay: 0.6,
        width_decay: 0.7,
    };

    pub fn new(spread: f32, length_decay: f32, width_decay: f32) -> Result<Self> {
        let spec = Self {
            spread,
            length_decay,
            width_decay,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        let in_range = |f: f32| f > 0.0 && f <= 1.0;
        if !in_range(self.length_decay) || !in_range(self.width_decay) {
            return Err(GlyphError::degenerate(format!(
                "decay factors must lie in (0, 1], got length {} width {}",
                self.length_decay, self.width_decay
            )));
        }
        if !self.spread.is_finite() {
            return Err(GlyphError::degenerate("spread angle is not finite"));
        }
        Ok(())
    }
}

/// Depth-indexed branch parameters.
///
/// Entry `i` applies to segments drawn at depth `i`. Depths past the end of
/// the table use [`BranchSpec::FALLBACK`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BranchSpec>", into = "Vec<BranchSpec>")]
pub struct BranchTable {
    levels: Vec<BranchSpec>,
}

impl BranchTable {
    pub fn new(levels: Vec<BranchSpec>) -> Result<Self> {
        for spec in &levels {
            spec.validate()?;
        }
        Ok(Self { levels })
    }

    /// A table with no entries; every depth takes the fallback
    pub fn empty() -> Self {
        Self { levels: Vec::new() }
    }

    /// Organic five-level table used by the dock icon
    pub fn dock() -> Self {
        let level = |spread, length_decay, width_decay| BranchSpec {
            spread,
            length_decay,
            width_decay,
        };
        Self {
            levels: vec![
                level(28.0, 0.72, 0.78),
                level(35.0, 0.68, 0.72),
                level(42.0, 0.62, 0.65),
                level(48.0, 0.55, 0.58),
                level(55.0, 0.5, 0.5),
            ],
        }
    }

    /// Fixed decay with a spread that widens by `spread_step` per depth
    pub fn linear(
        depths: usize,
        base_spread: f32,
        spread_step: f32,
        length_decay: f32,
        width_decay: f32,
    ) -> Result<Self> {
        let levels = (0..depths)
            .map(|d| BranchSpec::new(base_spread + d as f32 * spread_step, length_decay, width_decay))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { levels })
    }

    pub fn spec_for(&self, depth: usize) -> BranchSpec {
        match self.levels.get(depth) {
            Some(spec) => *spec,
            None => BranchSpec::FALLBACK,
        }
    }

    pub fn levels(&self) -> &[BranchSpec] {
        &self.levels
    }
}

impl Default for BranchTable {
    fn default() -> Self {
        Self::dock()
    }
}

impl TryFrom<Vec<BranchSpec>> for BranchTable {
    type Error = GlyphError;

    fn try_from(levels: Vec<BranchSpec>) -> Result<Self> {
        Self::new(levels)
    }
}

impl From<BranchTable> for Vec<BranchSpec> {
    fn from(table: BranchTable) -> Self {
        table.levels
    }
}

/// Depth-independent knobs of the branch emitter
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchStyle {
    /// Extra degrees added to the left spread per depth
    pub left_growth: f32,
    /// Extra degrees added to the right spread per depth
    pub right_growth: f32,
    /// Branches shorter than this many pixels are not drawn
    pub min_length: f32,
    /// Branches thinner than this many pixels are not drawn
    pub min_width: f32,
    /// Cap radius is `width / cap_divisor`
    pub cap_divisor: f32,
}

impl Default for BranchStyle {
    fn default() -> Self {
        Self {
            left_growth: 3.0,
            right_growth: 2.0,
            min_length: 3.0,
            min_width: 1.0,
            cap_divisor: 2.0,
        }
    }
}

impl BranchStyle {
    /// Mirror-image branching with no growth
    pub fn symmetric() -> Self {
        Self {
            left_growth: 0.0,
            right_growth: 0.0,
            min_length: 2.0,
            min_width: 0.0,
            cap_divisor: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_depth_uses_fallback() {
        let table = BranchTable::new(vec![BranchSpec::new(30.0, 0.6, 0.7).unwrap()]).unwrap();
        assert_eq!(table.spec_for(0).spread, 30.0);
        assert_eq!(table.spec_for(1), BranchSpec::FALLBACK);
        assert_eq!(BranchTable::empty().spec_for(0), BranchSpec::FALLBACK);
    }

    #[test]
    fn test_decay_outside_unit_interval_rejected() {
        assert!(BranchSpec::new(30.0, 1.5, 0.7).is_err());
        assert!(BranchSpec::new(30.0, 0.6, 0.0).is_err());
        assert!(BranchSpec::new(30.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_linear_table() {
        let table = BranchTable::linear(5, 35.0, 5.0, 0.65, 0.7).unwrap();
        assert_eq!(table.levels().len(), 5);
        assert_eq!(table.spec_for(4).spread, 55.0);
        assert_eq!(table.spec_for(2).length_decay, 0.65);
    }

    #[test]
    fn test_table_deserialization_validates() {
        #[derive(Deserialize)]
        struct Wrapper {
            levels: BranchTable,
        }
        let ok: Wrapper = toml::from_str(
            "[[levels]]\nspread = 28.0\nlength_decay = 0.72\nwidth_decay = 0.78\n",
        )
        .unwrap();
        assert_eq!(ok.levels.levels().len(), 1);

        let bad = toml::from_str::<Wrapper>(
            "[[levels]]\nspread = 28.0\nlength_decay = 2.0\nwidth_decay = 0.78\n",
        );
        assert!(bad.is_err());
    }
}

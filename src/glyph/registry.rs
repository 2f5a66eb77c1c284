// Registry of the glyph designs available by name

use super::designs::{
    BranchingGlyph, ClassicDockGlyph, DockGlyph, GroveGlyph, MenubarGlyph, TreeGlyph,
};
use super::Glyph;
use crate::error::{GlyphError, Result};
use std::sync::Arc;

pub struct GlyphRegistry {
    glyphs: Vec<Arc<dyn Glyph>>,
}

impl GlyphRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { glyphs: Vec::new() }
    }

    /// Every built-in design, with the default dock tree
    pub fn builtin() -> Result<Self> {
        Self::with_dock(DockGlyph::default())
    }

    /// Every built-in design, with `dock` supplying the dock tree parameters
    pub fn with_dock(dock: DockGlyph) -> Result<Self> {
        let mut registry = Self::new();
        registry.register(Arc::new(dock));
        registry.register(Arc::new(ClassicDockGlyph::new()?));
        registry.register(Arc::new(BranchingGlyph));
        registry.register(Arc::new(TreeGlyph));
        registry.register(Arc::new(GroveGlyph));
        registry.register(Arc::new(MenubarGlyph));
        Ok(registry)
    }

    /// Register a design, replacing any existing one with the same name
    pub fn register(&mut self, glyph: Arc<dyn Glyph>) {
        self.glyphs.retain(|g| g.name() != glyph.name());
        self.glyphs.push(glyph);
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Glyph>> {
        self.glyphs
            .iter()
            .find(|g| g.name() == name)
            .cloned()
            .ok_or_else(|| GlyphError::UnknownDesign(name.to_string()))
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.glyphs.iter().map(|g| g.name()).collect()
    }
}

impl Default for GlyphRegistry {
    fn default() -> Self {
        Self::new()
    }
}

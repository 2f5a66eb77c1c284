mod branching;
mod classic;
mod dock;
mod grove;
mod menubar;
mod tree;

pub use branching::BranchingGlyph;
pub use classic::ClassicDockGlyph;
pub use dock::DockGlyph;
pub use grove::GroveGlyph;
pub use menubar::MenubarGlyph;
pub use tree::TreeGlyph;

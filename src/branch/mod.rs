mod emitter;
mod table;

pub use emitter::{stroke_width, synthesize_branch, BranchState};
pub use table::{BranchSpec, BranchStyle, BranchTable};

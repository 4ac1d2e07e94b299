mod emitter;
mod summary;

pub use emitter::Emitter;
pub use summary::{timeline_lines, visual_mix};

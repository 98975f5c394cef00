//! Domain logic - the version state and the files that follow it

pub mod context;
pub mod tracked;
pub mod version;

pub use context::RunContext;
pub use tracked::TrackedFile;
pub use version::{BumpFlags, SemanticVersion};

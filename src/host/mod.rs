//! Concrete collaborators around the engine: where punches come from, what
//! time it is, and where results go.

pub mod clock;
pub mod notifier;
pub mod renderer;
pub mod source;
pub mod watcher;

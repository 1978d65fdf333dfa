#![cfg_attr(feature = "strict", deny(warnings))]
//! Rowbar renders multiple concurrently-updating progress bars, each pinned to
//! its own terminal row, so parallel tasks can show live progress without
//! clobbering each other's output.
//!
//! A [`LineRegistry`] assigns every task a stable row in first-render order
//! and serializes all cursor movement, so renders from different threads never
//! interleave their escape sequences. A [`Task`] holds one bar's display state
//! (label, status, percent) and delegates all screen writes to the registry.
//!
//! ```rust
//! use rowbar::{LineRegistry, Task};
//!
//! let registry = LineRegistry::with_writer(std::io::sink());
//! let mut task = Task::new(&registry);
//! task.set_label("build");
//! task.load("compiling", 50).render();
//! task.load("linking", 90).render();
//! task.finish();
//! task.load("done", 100).render();
//! ```

pub mod registry;
pub mod render;
pub mod task;

pub use registry::LineRegistry;
pub use task::Task;
pub use task::TaskId;

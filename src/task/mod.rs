use std::sync::atomic::{AtomicUsize, Ordering};

use crate::registry::LineRegistry;

/// Opaque identity minted once per task. Used only as the registry's
/// lookup key, never displayed.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct TaskId(usize);

impl TaskId {
    pub fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

/// One task's display state: a label, a status text, a percent complete
/// and a one-way finished flag. All screen output goes through the
/// [`LineRegistry`] the task was created with.
///
/// A task moves from unregistered to registered on its first
/// [`render`](Task::render), stays on the same row across updates, and has
/// its row released by a render-while-finished or by
/// [`cleanup`](Task::cleanup). Rendering again after the row was released
/// re-registers the task at a fresh, higher row; callers that want the row
/// gone should stop rendering once finished.
pub struct Task {
    id: TaskId,
    label: String,
    status: String,
    percent: i32,
    finished: bool,
    registry: LineRegistry,
}

impl Task {
    pub fn new(registry: &LineRegistry) -> Self {
        Self {
            id: TaskId::new(),
            label: String::new(),
            status: String::new(),
            percent: 0,
            finished: false,
            registry: registry.clone(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Percent complete as last loaded. Values outside 0..=100 are kept
    /// as-is and render with an empty bar.
    pub fn percent(&self) -> i32 {
        self.percent
    }

    /// Marks the task finished. One-way; the next render or cleanup
    /// releases its row.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Sets the status text and percent together, returning the task so a
    /// render can be chained: `task.load("compiling", 50).render()`.
    pub fn load(&mut self, status: &str, percent: i32) -> &mut Self {
        self.status = status.to_string();
        self.percent = percent;
        self
    }

    /// Redraws this task's line on its assigned row. See
    /// [`LineRegistry::render`].
    pub fn render(&self) {
        self.registry.render(self);
    }

    /// Releases this task's row, blanking the line if the task is
    /// finished. See [`LineRegistry::cleanup`].
    pub fn cleanup(&self) {
        self.registry.cleanup(self);
    }
}

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use console::Term;

use crate::render;
use crate::task::{Task, TaskId};

struct RegistryState {
    rows: HashMap<TaskId, usize>,
    next_row: usize,
    screen_cleared: bool,
    out: Box<dyn Write + Send>,
}

impl RegistryState {
    fn clear_screen_once(&mut self) {
        if !self.screen_cleared {
            let _ = write!(self.out, "{}", render::CLEAR_SCREEN);
            self.screen_cleared = true;
        }
    }

    /// Returns the row already assigned to `id`, or assigns the next free
    /// one. Fresh assignments step the physical cursor down from row 0 to
    /// the new row; the one-shot screen clear guarantees the cursor starts
    /// there on first use.
    fn acquire_or_lookup(&mut self, id: TaskId) -> usize {
        if let Some(&row) = self.rows.get(&id) {
            return row;
        }

        let row = self.next_row;
        self.rows.insert(id, row);
        self.next_row += 1;

        if row > 0 {
            let _ = write!(self.out, "{}", render::cursor_down(row));
        }
        row
    }
}

/// Shared bookkeeping mapping each live task to its own terminal row.
///
/// Rows are handed out in first-render order and never reused: `next_row`
/// only grows, so a finished bar's row stays visually reserved even after
/// its mapping is released. A single mutex guards the row table together
/// with every escape-move/write/park sequence, so renders from different
/// threads never interleave their output.
///
/// The registry is cheap to clone and safe to share; each [`Task`] holds
/// a clone of the registry it was created with.
#[derive(Clone)]
pub struct LineRegistry(Arc<Mutex<RegistryState>>);

impl LineRegistry {
    /// Creates a registry writing to the terminal's stdout.
    pub fn new() -> Self {
        Self::with_writer(Term::stdout())
    }

    /// Creates a registry writing to an arbitrary sink. Tests substitute an
    /// in-memory buffer here instead of a real terminal.
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(RegistryState {
            rows: HashMap::new(),
            next_row: 0,
            screen_cleared: false,
            out: Box::new(out),
        })))
    }

    /// Redraws `task`'s line in place, assigning it a row on first render.
    ///
    /// The very first render process-wide clears the screen. After writing
    /// the formatted line, the cursor is parked one row below the highest
    /// row ever assigned, so ordinary output lands under the bars. A task
    /// marked finished has its row released afterwards.
    ///
    /// Write failures are not observed; this is a display helper, not an
    /// I/O path.
    pub fn render(&self, task: &Task) {
        let mut state = self.0.lock().unwrap();

        state.clear_screen_once();
        let row = state.acquire_or_lookup(task.id());

        let line = render::format_line(task.label(), task.percent(), task.status());
        let _ = write!(state.out, "{}", render::cursor_to_row(row));
        let _ = write!(state.out, "\r{line:<80}");

        let park = render::cursor_to_row(state.next_row);
        let _ = write!(state.out, "{park}");

        if task.is_finished() {
            state.rows.remove(&task.id());
        }
        let _ = state.out.flush();
    }

    /// Releases `task`'s row without leaving a final message. A finished
    /// task's line is blanked; an unfinished one is only unmapped. Calling
    /// this on a task with no registered row is a no-op.
    pub fn cleanup(&self, task: &Task) {
        let mut state = self.0.lock().unwrap();

        if let Some(row) = state.rows.remove(&task.id()) {
            if task.is_finished() {
                let _ = write!(state.out, "{}", render::cursor_to_row(row));
                let _ = write!(state.out, "\r{:<80}", "");
            }

            let park = render::cursor_to_row(state.next_row);
            let _ = write!(state.out, "{park}");
            let _ = state.out.flush();
        }
    }

    /// Row currently assigned to `id`, if any. Bookkeeping inspection only;
    /// rendering goes through [`render`](Self::render).
    pub fn row_of(&self, id: TaskId) -> Option<usize> {
        self.0.lock().unwrap().rows.get(&id).copied()
    }
}

impl Default for LineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

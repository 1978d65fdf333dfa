use std::{thread, time};

use rowbar::{LineRegistry, Task};

fn main() {
    let registry = LineRegistry::new();

    let mut download = Task::new(&registry);
    download.set_label("download");

    let mut unpack = Task::new(&registry);
    unpack.set_label("unpack");

    for pct in (0..=100).step_by(10) {
        download.load("fetching", pct).render();
        thread::sleep(time::Duration::from_millis(120));
    }

    for pct in (0..=100).step_by(20) {
        unpack.load("extracting", pct).render();
        thread::sleep(time::Duration::from_millis(200));
    }

    download.finish();
    download.load("complete", 100).render();

    unpack.finish();
    unpack.cleanup();
}

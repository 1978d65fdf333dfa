use std::{thread, time};

use rand::Rng;
use rowbar::{LineRegistry, Task};

fn main() {
    let registry = LineRegistry::new();
    let mut handles = vec![];

    // Spawn multiple threads, each owning one bar
    for i in 1..=5 {
        let registry = registry.clone();

        let handle = thread::spawn(move || {
            let mut rng = rand::rng();
            let mut task = Task::new(&registry);
            task.set_label(&format!("worker {i}"));

            for step in 0..20 {
                task.load("working", step * 5).render();
                thread::sleep(time::Duration::from_millis(rng.random_range(20..150)));
            }

            task.finish();
            task.load("done", 100).render();
        });
        handles.push(handle);
    }

    // Wait for all threads to complete
    for handle in handles {
        handle.join().unwrap();
    }
}

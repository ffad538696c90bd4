//! Scrolls a page of cards past a headless watcher and logs each card as it first appears.
//!
//! Run with `RUST_LOG=sightline_core=debug` to also see every batch.

use std::error::Error;

use sightline::headless::{HeadlessObserver, Scene};
use sightline::{unobserve_revealed, Observe, Rect, VisibilityEntry, WatcherOptions};

#[path = "util/tracing.rs"]
mod tracing;

fn main() -> Result<(), Box<dyn Error>> {
    tracing::init();

    let mut scene = Scene::new(Rect::new(0.0, 0.0, 1024.0, 768.0));
    let cards: Vec<String> = (0..8).map(|i| format!("card-{i}")).collect();
    for (i, card) in cards.iter().enumerate() {
        scene.place(card.clone(), Rect::new(32.0, 400.0 * i as f64, 960.0, 320.0));
    }

    let options = WatcherOptions::default().with_root_margin_str("0px")?.with_threshold(0.5)?;
    let observer = HeadlessObserver::new(
        |entries: &[VisibilityEntry<String>], observer: &HeadlessObserver<String>| {
            unobserve_revealed(entries, observer);
        },
        options,
    );
    for card in &cards {
        observer.observe(card);
    }

    while !observer.observed().is_empty() {
        observer.update(&scene);
        scene.scroll_by(0.0, 120.0);
    }

    Ok(())
}

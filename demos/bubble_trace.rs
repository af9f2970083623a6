//! Walk a bubble sort trace by hand and steer it with chat messages
//!
//! Run with: cargo run --example bubble_trace

use anyhow::Result;
use sortviz::{Config, PlaybackState, Visualizer};

fn main() -> Result<()> {
    let config = Config::auto_load()?;
    let mut viz = Visualizer::new(&config);

    println!("Sorting {:?} ({} steps)\n", viz.settings.numbers, viz.steps.len());

    viz.playback.play();
    while viz.playback.state() == PlaybackState::Playing {
        if let Some(step) = viz.current_step() {
            println!("[{:>5}ms] {:<8} {:?}  {}", step.delay, step.kind, step.array, step.description);
        }
        viz.playback.tick();
    }
    if let Some(step) = viz.current_step() {
        println!("[{:>5}ms] {:<8} {:?}  {}\n", step.delay, step.kind, step.array, step.description);
    }

    for message in [
        "use the numbers 4, 1, 3",
        "slower please",
        "add color highlighting",
        "what is this?",
    ] {
        println!("> {}", message);
        println!("  {}", viz.handle_message(message));
    }

    println!("\nNow {} steps, {}ms apart", viz.steps.len(), viz.settings.speed_ms);
    Ok(())
}

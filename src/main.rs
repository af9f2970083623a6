//! SortViz CLI entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use sortviz::{describe, generate, parse, run_playback, Config, EventStream, Playback, Visualizer};
use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::watch;

#[derive(Parser)]
#[command(name = "sortviz", version, about = "Drive a sorting visualization with plain-English commands")]
struct Cli {
    /// Config file (defaults to ./sortviz.yml or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Interpret a message and print the parsed command and reply
    Parse {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print the step trace for a list of numbers
    Steps {
        numbers: Vec<i64>,
        #[arg(long)]
        speed: Option<u64>,
        /// One JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Play the step trace in real time
    Play {
        numbers: Vec<i64>,
        #[arg(long)]
        speed: Option<u64>,
    },
    /// Read messages from stdin and apply them
    Chat,
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::auto_load()?,
    };

    match cli.command {
        Cmd::Parse { text } => {
            let parsed = parse(&text.join(" "));
            println!("{}", serde_json::to_string_pretty(&parsed)?);
            println!("{}", describe(&parsed));
        }
        Cmd::Steps {
            numbers,
            speed,
            json,
        } => {
            let numbers = if numbers.is_empty() {
                config.numbers.clone()
            } else {
                numbers
            };
            for step in generate(&numbers, speed.unwrap_or(config.speed_ms)) {
                if json {
                    println!("{}", step.to_json_line());
                } else {
                    println!(
                        "{:>4} {:<8} {:?} {}",
                        step.id, step.kind, step.array, step.description
                    );
                }
            }
        }
        Cmd::Play { numbers, speed } => {
            let numbers = if numbers.is_empty() {
                config.numbers.clone()
            } else {
                numbers
            };
            let speed_ms = speed.unwrap_or(config.speed_ms).max(1);
            play(&numbers, speed_ms)?;
        }
        Cmd::Chat => chat(&config)?,
    }

    Ok(())
}

fn play(numbers: &[i64], speed_ms: u64) -> Result<()> {
    let steps = generate(numbers, speed_ms);
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async {
        let events = EventStream::default();
        let mut rx = events.subscribe();
        let printer = tokio::spawn(async move {
            while let Ok(event) = rx.recv().await {
                println!("{}", event.to_json_line());
                if matches!(
                    event,
                    sortviz::PlaybackEvent::Completed { .. } | sortviz::PlaybackEvent::Paused { .. }
                ) {
                    break;
                }
            }
        });

        // Ctrl-C pauses instead of killing mid-frame
        let (pause_tx, pause_rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = pause_tx.send(true);
            }
        });

        let mut playback = Playback::for_steps(&steps);
        let period = Duration::from_millis(speed_ms);
        run_playback(&mut playback, &steps, period, &events, pause_rx).await;
        printer.await
    })?;

    Ok(())
}

fn chat(config: &Config) -> Result<()> {
    let mut visualizer = Visualizer::new(config);
    log::info!(
        "Sorting {:?} at {}ms per step",
        visualizer.settings.numbers,
        visualizer.settings.speed_ms
    );

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", visualizer.handle_message(&line));
    }

    log::info!("Final settings: {:?}", visualizer.settings);
    Ok(())
}

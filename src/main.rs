use anyhow::Result;
use clap::Parser;
use log::info;

use traffic_flow::simulation::{LossReason, RandomDriver, SimEngine};

#[derive(Parser)]
#[command(name = "traffic_flow")]
#[command(about = "Traffic light crossing game with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of frames to run in headless mode
    #[arg(long, default_value = "1000")]
    ticks: u32,

    /// Seed for the scripted driver in headless mode
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Print the summary and map every N frames (0 disables)
    #[arg(long, default_value = "120")]
    summary_every: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui()?;
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        run_headless(cli.ticks, cli.seed, cli.summary_every)?;
    }

    Ok(())
}

/// Loss tallies for a headless run
#[derive(Default)]
struct RunStats {
    collisions: u32,
    red_lights: u32,
    off_road: u32,
    longest_session: u64,
}

impl RunStats {
    fn record(&mut self, reason: LossReason, frames: u64) {
        match reason {
            LossReason::Collision => self.collisions += 1,
            LossReason::RedLightViolation => self.red_lights += 1,
            LossReason::OffRoad => self.off_road += 1,
        }
        self.longest_session = self.longest_session.max(frames);
    }
}

/// Run the game in headless mode (no graphics) with a scripted driver
fn run_headless(ticks: u32, seed: u64, summary_every: u32) -> Result<()> {
    info!("Running traffic flow in headless mode...");
    info!("Ticks: {}, Seed: {}", ticks, seed);

    let mut engine = SimEngine::new()?;
    let mut driver = RandomDriver::new(seed);
    let mut stats = RunStats::default();

    println!("Initial state:");
    engine.print_summary();
    engine.draw_map();

    for tick in 1..=ticks {
        let was_over = engine.is_game_over();
        let events = driver.next_events(was_over);
        engine.tick(&events);

        if !was_over {
            if let Some(reason) = engine.session().loss() {
                stats.record(reason, engine.session().frame_count());
            }
        }

        if summary_every > 0 && tick % summary_every == 0 {
            println!("--- After frame {} ---", tick);
            engine.print_summary();
            engine.draw_map();
        }
    }

    if !engine.is_game_over() {
        stats.longest_session = stats.longest_session.max(engine.session().frame_count());
    }

    println!("=== Final State ===");
    engine.print_summary();
    engine.draw_map();

    info!("SIMULATION COMPLETE");
    info!("Total frames: {}", ticks);
    info!("Sessions started: {}", engine.sessions_started());
    info!("Collisions: {}", stats.collisions);
    info!("Red light violations: {}", stats.red_lights);
    info!("Off road: {}", stats.off_road);
    info!("Longest session: {} frames", stats.longest_session);

    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui() -> Result<()> {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Traffic Flow UI...");
    println!();
    println!("Controls:");
    println!("  W/S or Up/Down     - Drive forward/backward");
    println!("  A/D or Left/Right  - Turn");
    println!("  R                  - Restart after losing");
    println!("  ESC                - Exit");
    println!();

    let engine = SimEngine::new()?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,traffic_flow=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Traffic Flow Game!".into(),
                        resolution: (800, 600).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(traffic_flow::ui::EngineResource(engine))
        .add_plugins(traffic_flow::ui::TrafficFlowUIPlugin)
        .run();

    Ok(())
}

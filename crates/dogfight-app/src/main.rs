//! Headless demo runner: spawns the game loop, scripts a two-player
//! session on the loaded map, and optionally dumps the final state.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dogfight_app::game_loop::{spawn_game_loop, WorldCommand};
use dogfight_core::constants::TICK_INTERVAL_MS;
use dogfight_core::delta::{ChangeSet, FieldValue};
use dogfight_core::enums::{EntityKind, InputKey, Team};
use dogfight_core::map::GameMap;
use dogfight_core::takeoff::TakeoffRequest;
use dogfight_core::types::EntityId;

/// How many times the runner reports delta statistics over a session.
const REPORT_WINDOWS: u64 = 10;

#[derive(Debug, Parser)]
#[command(name = "dogfight", about = "Headless dogfight simulation runner")]
struct Args {
    /// JSON map file. The built-in map is used when omitted.
    #[arg(long)]
    map: Option<PathBuf>,
    /// How many ticks to run before shutting down.
    #[arg(long, default_value_t = 500)]
    ticks: u64,
    /// Milliseconds per tick.
    #[arg(long, default_value_t = TICK_INTERVAL_MS)]
    tick_ms: u64,
    /// Print the final full state as JSON on stdout.
    #[arg(long)]
    full_state: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let map = match &args.map {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading map file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing map file {}", path.display()))?
        }
        None => GameMap::classic(),
    };

    let game = spawn_game_loop(map, args.tick_ms);

    let centrals = add_player(&game.command_tx, Team::Centrals)?;
    let allies = add_player(&game.command_tx, Team::Allies)?;

    let state = query_full_state(&game.command_tx)?;
    let centrals_runway =
        find_runway(&state, Team::Centrals).context("map has no Centrals runway")?;
    let allies_runway = find_runway(&state, Team::Allies).context("map has no Allies runway")?;

    send(
        &game.command_tx,
        WorldCommand::Takeoff {
            player: centrals,
            request: TakeoffRequest {
                plane_type: Team::Centrals.planes()[0],
                runway: centrals_runway,
            },
        },
    )?;
    send(
        &game.command_tx,
        WorldCommand::Takeoff {
            player: allies,
            request: TakeoffRequest {
                plane_type: Team::Allies.planes()[0],
                runway: allies_runway,
            },
        },
    )?;

    // Bank the Centrals plane for the rest of the run.
    send(
        &game.command_tx,
        WorldCommand::Input {
            player: centrals,
            key: InputKey::Left,
            pressed: true,
        },
    )?;

    info!(ticks = args.ticks, tick_ms = args.tick_ms, "session running");
    let window = Duration::from_millis((args.ticks * args.tick_ms / REPORT_WINDOWS).max(1));
    for _ in 0..REPORT_WINDOWS {
        thread::sleep(window);
        if let Ok(lock) = game.latest_delta.lock() {
            if let Some(delta) = lock.as_ref() {
                info!(changed = delta.len(), "latest tick delta");
            }
        }
    }

    if args.full_state {
        let state = query_full_state(&game.command_tx)?;
        println!("{}", serde_json::to_string_pretty(&state)?);
    }

    send(&game.command_tx, WorldCommand::Shutdown)?;
    game.join();
    info!("session finished");
    Ok(())
}

fn send(tx: &mpsc::Sender<WorldCommand>, command: WorldCommand) -> anyhow::Result<()> {
    tx.send(command)
        .map_err(|_| anyhow::anyhow!("game loop thread stopped"))
}

fn add_player(tx: &mpsc::Sender<WorldCommand>, team: Team) -> anyhow::Result<EntityId> {
    let (reply_tx, reply_rx) = mpsc::channel();
    send(
        tx,
        WorldCommand::AddPlayer {
            team,
            reply: reply_tx,
        },
    )?;
    reply_rx
        .recv_timeout(Duration::from_secs(1))
        .context("no reply from game loop")
}

fn query_full_state(tx: &mpsc::Sender<WorldCommand>) -> anyhow::Result<ChangeSet> {
    let (reply_tx, reply_rx) = mpsc::channel();
    send(tx, WorldCommand::QueryFullState(reply_tx))?;
    reply_rx
        .recv_timeout(Duration::from_secs(1))
        .context("no reply from game loop")
}

fn find_runway(state: &ChangeSet, team: Team) -> Option<EntityId> {
    state.iter().find_map(|(id, entry)| {
        (entry.kind == EntityKind::Runway
            && entry.fields.get("team") == Some(&FieldValue::from(team)))
        .then_some(*id)
    })
}

//! Game loop thread — owns the world, drains commands, ticks at a
//! fixed cadence, and publishes each tick's change set.
//!
//! The world is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest non-empty
//! delta is stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::info;

use dogfight_core::delta::ChangeSet;
use dogfight_core::enums::{InputKey, Team};
use dogfight_core::map::GameMap;
use dogfight_core::takeoff::TakeoffRequest;
use dogfight_core::types::EntityId;
use dogfight_sim::world::GameWorld;

/// Commands sent from the embedding layer to the game loop thread.
#[derive(Debug)]
pub enum WorldCommand {
    /// Add a player and reply with the assigned id.
    AddPlayer {
        team: Team,
        reply: mpsc::Sender<EntityId>,
    },
    RemovePlayer(EntityId),
    /// Queue a key-state change for the next tick.
    Input {
        player: EntityId,
        key: InputKey,
        pressed: bool,
    },
    /// Queue a takeoff request for the next tick.
    Takeoff {
        player: EntityId,
        request: TakeoffRequest,
    },
    /// Reply with the complete state of every live entity.
    QueryFullState(mpsc::Sender<ChangeSet>),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    /// Channel sender for driving the loop.
    pub command_tx: mpsc::Sender<WorldCommand>,
    /// Latest non-empty tick delta, updated by the loop after each
    /// tick that changed anything.
    pub latest_delta: Arc<Mutex<Option<ChangeSet>>>,
    handle: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Wait for the loop thread to exit. Send `Shutdown` first.
    pub fn join(self) {
        let _ = self.handle.join();
    }
}

/// Spawns the game loop in a new thread, with `map` loaded before the
/// first tick.
pub fn spawn_game_loop(map: GameMap, tick_ms: u64) -> GameLoopHandle {
    let (command_tx, command_rx) = mpsc::channel::<WorldCommand>();
    let latest_delta = Arc::new(Mutex::new(None));
    let shared_delta = Arc::clone(&latest_delta);

    let handle = std::thread::Builder::new()
        .name("dogfight-game-loop".into())
        .spawn(move || {
            run_game_loop(map, tick_ms, command_rx, &shared_delta);
        })
        .expect("failed to spawn game loop thread");

    GameLoopHandle {
        command_tx,
        latest_delta,
        handle,
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    map: GameMap,
    tick_ms: u64,
    command_rx: mpsc::Receiver<WorldCommand>,
    latest_delta: &Mutex<Option<ChangeSet>>,
) {
    let tick_duration = Duration::from_millis(tick_ms);
    let mut world = GameWorld::new();
    world.load_map(&map);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(WorldCommand::AddPlayer { team, reply }) => {
                    let _ = reply.send(world.add_player(team));
                }
                Ok(WorldCommand::RemovePlayer(id)) => world.remove_player(id),
                Ok(WorldCommand::Input {
                    player,
                    key,
                    pressed,
                }) => world.queue_input(player, key, pressed),
                Ok(WorldCommand::Takeoff { player, request }) => {
                    world.request_takeoff(player, request)
                }
                Ok(WorldCommand::QueryFullState(reply)) => {
                    let _ = reply.send(world.full_state());
                }
                Ok(WorldCommand::Shutdown) => {
                    info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let delta = world.tick(tick_ms);

        // 3. Store the delta for synchronous polling
        if !delta.is_empty() {
            if let Ok(mut lock) = latest_delta.lock() {
                *lock = Some(delta);
            }
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

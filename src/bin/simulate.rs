//! Skyward Headless Session Simulator
//!
//! Plays the host-engine role against the core with a scripted session and
//! prints the emitted command trace: spawns scroll across the field, taps
//! land on a cadence, a fatal contact is injected, the avatar settles, and a
//! final tap restarts. Useful for eyeballing the command protocol without a
//! renderer.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --ticks N       Host ticks to run (default: 400)
//!   --dt SECS       Time-units per tick (default: 0.1)
//!   --seed N        RNG seed (default: 42)
//!   --death-at N    Tick at which a fatal contact is injected (default: 250)
//!   --config FILE   Load GameConfig from a JSON file
//!   --quiet         Only print the final summary line

use rand::rngs::StdRng;
use rand::SeedableRng;
use skyward::{
    process_contact, process_tap, process_tick, restart, ContactKind, EngineCommand, GameConfig,
    ObstacleId, SkywardGame,
};
use std::collections::HashMap;
use std::io;

/// Ticks between the fatal contact and the host reporting the avatar at
/// rest.
const SETTLE_TICKS: u64 = 20;

/// Tap cadence while playing.
const TAP_EVERY_TICKS: u64 = 8;

struct SimConfig {
    ticks: u64,
    dt: f64,
    seed: u64,
    death_at: u64,
    config_path: Option<String>,
    quiet: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: 400,
            dt: 0.1,
            seed: 42,
            death_at: 250,
            config_path: None,
            quiet: false,
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                i += 1;
                config.ticks = args[i].parse().expect("--ticks requires a number");
            }
            "--dt" => {
                i += 1;
                config.dt = args[i].parse().expect("--dt requires a number");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("--seed requires a number");
            }
            "--death-at" => {
                i += 1;
                config.death_at = args[i].parse().expect("--death-at requires a number");
            }
            "--config" => {
                i += 1;
                config.config_path = Some(args[i].clone());
            }
            "--quiet" => config.quiet = true,
            other => {
                eprintln!("Unknown option: {other}");
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn load_game_config(path: &str) -> io::Result<GameConfig> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// The stub host: owns the scrolling obstacle positions and the avatar's
/// observed kinematics, exactly the values a real engine pushes back into
/// the core each frame.
struct StubHost {
    obstacle_x: HashMap<ObstacleId, f64>,
    avatar_x: f64,
    avatar_y: f64,
    avatar_speed: f64,
    frozen: bool,
    spawn_x: f64,
    scroll_speed: f64,
}

impl StubHost {
    fn new(config: &GameConfig) -> Self {
        let (spawn_x, spawn_y) = config.spawn_point();
        Self {
            obstacle_x: HashMap::new(),
            avatar_x: spawn_x,
            avatar_y: spawn_y,
            avatar_speed: 1.0,
            frozen: false,
            spawn_x: config.obstacle_spawn_x(),
            scroll_speed: (config.playfield_width + config.barrier_width)
                / config.scroll_duration,
        }
    }

    /// Advance the world one frame: scroll obstacles and push observations
    /// into the core. Returns how many scoring regions crossed the avatar
    /// this frame (the stub always flies through the gap). Frozen worlds
    /// report nothing.
    fn step(&mut self, game: &mut SkywardGame, dt: f64) -> u32 {
        if self.frozen {
            return 0;
        }
        let mut gates_crossed = 0;
        for (id, x) in self.obstacle_x.iter_mut() {
            let prev = *x;
            *x -= self.scroll_speed * dt;
            game.observe_obstacle(*id, *x);
            if prev > self.avatar_x && *x <= self.avatar_x {
                gates_crossed += 1;
            }
        }
        game.observe_avatar(self.avatar_y, self.avatar_speed);
        gates_crossed
    }

    fn execute(&mut self, command: &EngineCommand) {
        match command {
            EngineCommand::SpawnObstaclePair { id, .. } => {
                self.obstacle_x.insert(*id, self.spawn_x);
            }
            EngineCommand::DespawnObstaclePair { id } => {
                self.obstacle_x.remove(id);
            }
            EngineCommand::ClearObstacles => self.obstacle_x.clear(),
            EngineCommand::ResetAvatar { y, .. } => {
                self.avatar_y = *y;
                self.avatar_speed = 1.0;
            }
            EngineCommand::Impulse { .. } => self.avatar_speed = 1.0,
            EngineCommand::FreezeWorld => self.frozen = true,
            EngineCommand::UnfreezeWorld => self.frozen = false,
            EngineCommand::PlayDeathAnimation { .. } | EngineCommand::ScoreChanged { .. } => {}
        }
    }
}

#[derive(Default)]
struct SessionStats {
    spawns: u64,
    despawns: u64,
    max_score: u32,
}

fn apply_commands(
    tick: u64,
    commands: &[EngineCommand],
    host: &mut StubHost,
    stats: &mut SessionStats,
    quiet: bool,
) {
    for command in commands {
        match command {
            EngineCommand::SpawnObstaclePair { .. } => stats.spawns += 1,
            EngineCommand::DespawnObstaclePair { .. } => stats.despawns += 1,
            EngineCommand::ScoreChanged { score } => stats.max_score = stats.max_score.max(*score),
            _ => {}
        }
        host.execute(command);
        if !quiet {
            println!("[tick {tick:4}] {}", describe(command));
        }
    }
}

fn describe(command: &EngineCommand) -> String {
    match command {
        EngineCommand::SpawnObstaclePair { id, gap_offset } => {
            format!("spawn #{} gap_offset={gap_offset:.1}", id.0)
        }
        EngineCommand::DespawnObstaclePair { id } => format!("despawn #{}", id.0),
        EngineCommand::ClearObstacles => "clear obstacles".to_string(),
        EngineCommand::ResetAvatar { x, y } => format!("reset avatar to ({x:.1}, {y:.1})"),
        EngineCommand::Impulse { magnitude } => format!("impulse {magnitude:.2}"),
        EngineCommand::FreezeWorld => "freeze world".to_string(),
        EngineCommand::UnfreezeWorld => "unfreeze world".to_string(),
        EngineCommand::PlayDeathAnimation { angle } => format!("death roll {angle:.3} rad"),
        EngineCommand::ScoreChanged { score } => format!("score -> {score}"),
    }
}

fn main() {
    let sim = parse_args();

    let game_config = match &sim.config_path {
        Some(path) => match load_game_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {path}: {e}");
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut rng = StdRng::seed_from_u64(sim.seed);
    let mut game = SkywardGame::new(game_config);
    let mut host = StubHost::new(&game.config);
    let mut stats = SessionStats::default();

    // Arm the first life explicitly so the trace shows the full restart
    // sequence.
    let commands = restart(&mut game);
    apply_commands(0, &commands, &mut host, &mut stats, sim.quiet);

    let mut settle_at: Option<u64> = None;
    for tick in 1..=sim.ticks {
        let gates = host.step(&mut game, sim.dt);
        for _ in 0..gates {
            let commands = process_contact(&mut game, ContactKind::ScoreGate);
            apply_commands(tick, &commands, &mut host, &mut stats, sim.quiet);
        }

        if tick == sim.death_at {
            let commands = process_contact(&mut game, ContactKind::Obstacle);
            apply_commands(tick, &commands, &mut host, &mut stats, sim.quiet);
            settle_at = Some(tick + SETTLE_TICKS);
        } else if Some(tick) == settle_at {
            // The host settled the avatar; the next tap restarts.
            game.observe_avatar(host.avatar_y, 0.0);
            let commands = process_tap(&mut game);
            apply_commands(tick, &commands, &mut host, &mut stats, sim.quiet);
            settle_at = None;
        } else if tick % TAP_EVERY_TICKS == 0 {
            let commands = process_tap(&mut game);
            apply_commands(tick, &commands, &mut host, &mut stats, sim.quiet);
        }

        let commands = process_tick(&mut game, sim.dt, &mut rng);
        apply_commands(tick, &commands, &mut host, &mut stats, sim.quiet);
    }

    println!(
        "ticks={} spawns={} despawns={} max_score={} live_obstacles={} final_phase={:?}",
        sim.ticks,
        stats.spawns,
        stats.despawns,
        stats.max_score,
        game.obstacles.len(),
        game.phase,
    );
}

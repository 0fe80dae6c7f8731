//! Integration test: spawn randomness
//!
//! The gap offset is the only randomness in the system. These tests pin its
//! documented range and the determinism of the injected RNG.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyward::{process_tick, EngineCommand, GameConfig, SkywardGame};

/// Run one spawn and return its gap offset.
fn draw_offset(game: &mut SkywardGame, rng: &mut ChaCha8Rng) -> f64 {
    let commands = process_tick(game, game.config.spawn_interval, rng);
    match commands.as_slice() {
        [EngineCommand::SpawnObstaclePair { gap_offset, .. }] => *gap_offset,
        other => panic!("expected exactly one spawn, got {other:?}"),
    }
}

#[test]
fn test_gap_offset_within_documented_range_1000_trials() {
    let mut game = SkywardGame::new(GameConfig::default());
    let (lo, hi) = game.config.gap_offset_bounds();
    let mut rng = ChaCha8Rng::seed_from_u64(1234);

    for trial in 0..1000 {
        let offset = draw_offset(&mut game, &mut rng);
        assert!(
            (lo..=hi).contains(&offset),
            "trial {trial}: offset {offset} outside [{lo}, {hi}]"
        );
        // Keep the arena from growing without bound over the trials.
        game.obstacles.clear();
    }
}

#[test]
fn test_gap_offset_range_follows_config() {
    let config = GameConfig::for_playfield(300.0, 240.0);
    let (lo, hi) = config.gap_offset_bounds();
    let mut game = SkywardGame::new(config);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..200 {
        let offset = draw_offset(&mut game, &mut rng);
        assert!((lo..=hi).contains(&offset));
        game.obstacles.clear();
    }
    assert!((hi - lo - 240.0 / 4.0).abs() < f64::EPSILON);
}

#[test]
fn test_same_seed_same_offset_sequence() {
    let offsets: Vec<Vec<f64>> = (0..2)
        .map(|_| {
            let mut game = SkywardGame::new(GameConfig::default());
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            (0..50).map(|_| draw_offset(&mut game, &mut rng)).collect()
        })
        .collect();
    assert_eq!(offsets[0], offsets[1]);
}

#[test]
fn test_different_seeds_diverge() {
    let mut draws = Vec::new();
    for seed in [1u64, 2u64] {
        let mut game = SkywardGame::new(GameConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        draws.push(
            (0..50)
                .map(|_| draw_offset(&mut game, &mut rng))
                .collect::<Vec<_>>(),
        );
    }
    assert_ne!(draws[0], draws[1]);
}

#[test]
fn test_offsets_spread_across_the_band() {
    // With R = H/4 the band is ~42.5 points wide on the default playfield;
    // 1000 draws should land in both halves many times over.
    let mut game = SkywardGame::new(GameConfig::default());
    let (lo, hi) = game.config.gap_offset_bounds();
    let mid = (lo + hi) / 2.0;
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let mut below = 0u32;
    let mut above = 0u32;
    for _ in 0..1000 {
        let offset = draw_offset(&mut game, &mut rng);
        if offset < mid {
            below += 1;
        } else {
            above += 1;
        }
        game.obstacles.clear();
    }
    assert!(below > 300, "below-midpoint draws: {below}");
    assert!(above > 300, "above-midpoint draws: {above}");
}

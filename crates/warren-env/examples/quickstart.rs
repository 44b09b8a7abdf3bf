//! Warren quickstart: a complete, minimal episode from scratch.
//!
//! Demonstrates:
//!   1. Building a MazeConfig and MazeEnv
//!   2. Resetting with a seed
//!   3. Stepping with random actions until the episode ends
//!   4. Grabbing an RGB frame in rgb_array mode
//!
//! Run with:
//!   cargo run --example quickstart

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use warren_env::{MazeConfig, MazeEnv, RenderMode};

fn main() {
    let config = MazeConfig {
        seed: 42,
        render_mode: Some(RenderMode::RgbArray),
        ..MazeConfig::new(15, 11)
    };
    let mut env = MazeEnv::new(config).expect("valid config");

    let (observation, info) = env.reset(Some(42)).expect("reset");
    println!(
        "maze {}x{}, start observation {observation}, agent at {:?}",
        info.maze.width(),
        info.maze.height(),
        info.agent
    );

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut steps = 0u32;
    loop {
        let action = rng.random_range(0..4);
        let result = env.step(action);
        steps += 1;

        if result.terminated {
            println!("reached the goal in {steps} steps, score {:.3}", result.info.score);
            break;
        }
        if result.truncated {
            println!("score floor hit after {steps} steps");
            break;
        }
        if steps >= 5_000 {
            println!("gave up after {steps} steps, score {:.3}", result.info.score);
            break;
        }
    }

    let frame = env.render().expect("rgb_array render").expect("frame");
    println!(
        "frame: {}x{} pixels, {} bytes",
        frame.width(),
        frame.height(),
        frame.data().len()
    );

    env.close();
}

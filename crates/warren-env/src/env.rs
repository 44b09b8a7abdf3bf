//! The maze interaction state machine.

use std::fmt;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, MazeConfig, RenderMode};
use crate::error::EnvError;
use crate::metrics::EpisodeMetrics;
use warren_core::{Action, OccupancyGrid};
use warren_maze::generate;
use warren_render::{DisplaySink, Frame, RenderError, Surface};
use warren_tiles::{classify, Tilemap};

/// The episode ends by truncation once the cumulative score reaches
/// this floor.
pub const SCORE_FLOOR: f64 = -2.0;

// ── Info / StepResult ───────────────────────────────────────────

/// Auxiliary payload returned by `reset` and `step`.
///
/// Borrows the episode's occupancy grid rather than copying it; the
/// borrow checker prevents the caller from stepping again while still
/// holding it.
#[derive(Clone, Debug)]
pub struct Info<'e> {
    /// Current agent position, `(row, col)`.
    pub agent: (u32, u32),
    /// Cumulative episode score.
    pub score: f64,
    /// The episode's occupancy grid.
    pub maze: &'e OccupancyGrid,
}

/// Result of one [`MazeEnv::step`] call.
#[derive(Clone, Debug)]
pub struct StepResult<'e> {
    /// Flat encoding of the agent position: `row * width + col`.
    pub observation: u32,
    /// Reward earned this step.
    pub reward: f64,
    /// The agent reached the goal cell this step.
    pub terminated: bool,
    /// The cumulative score is at or below the floor.
    pub truncated: bool,
    /// Auxiliary payload.
    pub info: Info<'e>,
}

// ── MazeEnv ─────────────────────────────────────────────────────

/// Single-threaded episodic maze environment.
///
/// Owns exactly one episode at a time: the occupancy grid produced by
/// the generator, the tilemap classified from it, and the agent state.
/// Construction builds the first episode from `config.seed`, so the
/// environment is always steppable; `reset` starts a fresh one.
///
/// # Example
///
/// ```
/// use warren_env::{MazeConfig, MazeEnv};
///
/// let mut env = MazeEnv::new(MazeConfig::new(9, 9)).unwrap();
/// let (observation, _info) = env.reset(Some(42)).unwrap();
/// assert_eq!(observation, 0); // agent starts at (0, 0)
///
/// let result = env.step(2); // try to move right
/// assert!(!result.truncated);
/// ```
pub struct MazeEnv {
    config: MazeConfig,
    rng: ChaCha8Rng,
    grid: OccupancyGrid,
    tilemap: Tilemap,
    agent: (u32, u32),
    score: f64,
    surface: Option<Surface>,
    sink: Option<Box<dyn DisplaySink>>,
    metrics: EpisodeMetrics,
}

impl MazeEnv {
    /// Number of discrete actions.
    pub const ACTION_COUNT: usize = 4;

    /// Create an environment and its first episode.
    ///
    /// Fails fast on invalid configuration (even or zero dimensions,
    /// zero tile size); nothing is deferred to `reset` or `step`.
    pub fn new(config: MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = generate(config.width, config.height, config.seed)?;
        let tilemap = classify(&grid);
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            grid,
            tilemap,
            agent: (0, 0),
            score: 0.0,
            surface: None,
            sink: None,
            metrics: EpisodeMetrics::default(),
            config,
        })
    }

    /// Start a new episode.
    ///
    /// `Some(seed)` reseeds the episode stream, so the same seed always
    /// produces the same maze and the same initial observation; `None`
    /// draws the next seed from the stream. Any live render surface is
    /// dropped and lazily re-acquired. When a render mode is
    /// configured, the first frame of the episode is rendered before
    /// returning, which is where a missing display sink surfaces as an
    /// error.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<(u32, Info<'_>), EnvError> {
        let grid_seed = match seed {
            Some(s) => {
                self.rng = ChaCha8Rng::seed_from_u64(s);
                s
            }
            None => self.rng.next_u64(),
        };

        self.grid = generate(self.config.width, self.config.height, grid_seed)?;
        self.tilemap = classify(&self.grid);
        self.agent = (0, 0);
        self.score = 0.0;
        self.metrics = EpisodeMetrics::default();
        self.surface = None;

        if self.config.render_mode.is_some() {
            let _ = self.render()?;
        }

        Ok((self.observation(), self.info()))
    }

    /// Advance the episode by one action.
    ///
    /// Action codes are left = 0, up = 1, right = 2, down = 3; any
    /// other code is a no-op that still consumes the step. The movement
    /// candidate is clamped to the grid, so bumping the outer boundary
    /// is an accepted self-move that pays the per-step penalty, while
    /// bumping an interior wall leaves the agent in place with reward
    /// 0. Reaching the goal cell rewards +1 and terminates.
    ///
    /// Once the score has hit the floor in an earlier step, every
    /// subsequent step reports `truncated` with reward 0 and moves
    /// nothing.
    pub fn step(&mut self, action: i32) -> StepResult<'_> {
        self.metrics.steps += 1;

        if self.score <= SCORE_FLOOR {
            self.metrics.frozen_steps += 1;
            return StepResult {
                observation: self.observation(),
                reward: 0.0,
                terminated: false,
                truncated: true,
                info: self.info(),
            };
        }

        let mut reward = 0.0;
        let mut terminated = false;
        match Action::from_code(action) {
            None => self.metrics.invalid_actions += 1,
            Some(act) => {
                if self.try_move(act) {
                    self.metrics.accepted_moves += 1;
                    terminated = self.agent == self.grid.end();
                    reward = if terminated {
                        1.0
                    } else {
                        -1.0 / self.grid.cell_count() as f64
                    };
                    self.score += reward;
                } else {
                    self.metrics.rejected_moves += 1;
                }
            }
        }

        // Truncation is recomputed from the updated score every step,
        // independently of termination.
        let truncated = self.score <= SCORE_FLOOR;

        StepResult {
            observation: self.observation(),
            reward,
            terminated,
            truncated,
            info: self.info(),
        }
    }

    /// Render the current episode state.
    ///
    /// `None` render mode returns `Ok(None)`. `RgbArray` composes into
    /// the lazily acquired surface and returns the frame. `Human`
    /// composes, paces to the frame rate and presents to the installed
    /// [`DisplaySink`]; a missing sink is fatal, not silently ignored.
    pub fn render(&mut self) -> Result<Option<&Frame>, RenderError> {
        let Some(mode) = self.config.render_mode else {
            return Ok(None);
        };

        let (w, h, ts) = (self.config.width, self.config.height, self.config.tile_size);
        let surface = self.surface.get_or_insert_with(|| Surface::new(w, h, ts));
        surface.compose(&self.tilemap, self.agent, self.grid.end());

        match mode {
            RenderMode::RgbArray => Ok(Some(surface.frame())),
            RenderMode::Human => match self.sink.as_mut() {
                None => Err(RenderError::SurfaceUnavailable),
                Some(sink) => {
                    surface.present(sink.as_mut())?;
                    Ok(None)
                }
            },
        }
    }

    /// Release the render surface and the display sink. Idempotent.
    pub fn close(&mut self) {
        self.surface = None;
        self.sink = None;
    }

    /// Install the display device used by human render mode.
    pub fn set_display_sink(&mut self, sink: Box<dyn DisplaySink>) {
        self.sink = Some(sink);
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The flat observation encoding of the current agent position.
    pub fn observation(&self) -> u32 {
        let (r, c) = self.agent;
        self.grid.index_of(r, c) as u32
    }

    /// Decode an observation back into `(row, col)`.
    pub fn decode_observation(&self, observation: u32) -> (u32, u32) {
        (
            observation / self.config.width,
            observation % self.config.width,
        )
    }

    /// Size of the observation space: one code per cell.
    pub fn observation_count(&self) -> u32 {
        self.config.width * self.config.height
    }

    /// The reward interval `[floor, goal reward]`.
    pub fn reward_range(&self) -> (f64, f64) {
        (SCORE_FLOOR, 1.0)
    }

    /// The episode's occupancy grid.
    pub fn maze(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// The episode's classified tilemap.
    pub fn tilemap(&self) -> &Tilemap {
        &self.tilemap
    }

    /// Current agent position, `(row, col)`.
    pub fn agent(&self) -> (u32, u32) {
        self.agent
    }

    /// Cumulative episode score.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Step counters for the current episode.
    pub fn metrics(&self) -> &EpisodeMetrics {
        &self.metrics
    }

    /// The environment configuration.
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    // ── Internals ───────────────────────────────────────────────

    /// Clamp-then-collide movement. Returns whether the move was
    /// accepted (the clamped candidate is a path cell).
    fn try_move(&mut self, action: Action) -> bool {
        let (dr, dc) = action.offset();
        let (r, c) = self.agent;
        let nr = (r as i64 + dr as i64).clamp(0, (self.grid.height() - 1) as i64) as u32;
        let nc = (c as i64 + dc as i64).clamp(0, (self.grid.width() - 1) as i64) as u32;
        if self.grid.is_path(nr, nc) {
            self.agent = (nr, nc);
            return true;
        }
        false
    }

    fn info(&self) -> Info<'_> {
        Info {
            agent: self.agent,
            score: self.score,
            maze: &self.grid,
        }
    }
}

impl fmt::Debug for MazeEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MazeEnv")
            .field("width", &self.config.width)
            .field("height", &self.config.height)
            .field("agent", &self.agent)
            .field("score", &self.score)
            .field("surface_live", &self.surface.is_some())
            .finish()
    }
}

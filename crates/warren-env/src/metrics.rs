//! Per-episode step counters.

/// Counters accumulated over one episode and cleared on reset.
///
/// These are the environment's observability surface: consumers read
/// them from [`MazeEnv::metrics`](crate::MazeEnv::metrics) instead of
/// scraping a log stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EpisodeMetrics {
    /// Total `step()` calls this episode, including no-ops.
    pub steps: u64,
    /// Moves accepted onto a path cell (including clamped self-moves at
    /// the grid boundary).
    pub accepted_moves: u64,
    /// Moves rejected by a wall cell.
    pub rejected_moves: u64,
    /// Steps whose action code was outside the action space.
    pub invalid_actions: u64,
    /// Steps short-circuited because the score floor was already hit.
    pub frozen_steps: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = EpisodeMetrics::default();
        assert_eq!(m.steps, 0);
        assert_eq!(m.accepted_moves, 0);
        assert_eq!(m.rejected_moves, 0);
        assert_eq!(m.invalid_actions, 0);
        assert_eq!(m.frozen_steps, 0);
    }
}

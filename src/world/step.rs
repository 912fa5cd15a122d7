use crate::config::StepConfig;

use super::World;

/// Splits a frame's elapsed time into fixed-size world steps.
#[derive(Debug, Clone, Copy)]
pub struct FixedStepper {
    config: StepConfig,
}

impl FixedStepper {
    /// Creates a stepper with the given timing.
    #[must_use]
    pub fn new(config: StepConfig) -> Self {
        Self { config }
    }

    /// Sub-step durations for a frame that took `elapsed` seconds.
    ///
    /// Each sub-step is at most `fixed_dt`, except that a trailing remainder
    /// shorter than `min_dt` is folded into the step before it. No more than
    /// `max_steps` sub-steps are produced; leftover time is dropped.
    #[must_use]
    pub fn substeps(&self, elapsed: f64) -> Vec<f64> {
        let mut steps = Vec::new();
        let mut remaining = elapsed;
        while remaining > 0.0 && steps.len() < self.config.max_steps {
            let mut delta = remaining.min(self.config.fixed_dt);
            remaining -= delta;
            if remaining < self.config.min_dt {
                delta += remaining;
                remaining = 0.0;
            }
            steps.push(delta);
        }
        steps
    }

    /// Advances `world` by `elapsed` seconds and returns the number of
    /// sub-steps taken.
    pub fn advance(&self, world: &mut World, elapsed: f64) -> usize {
        let steps = self.substeps(elapsed);
        for &dt in &steps {
            world.step(dt);
        }
        steps.len()
    }
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::new(StepConfig::default())
    }
}

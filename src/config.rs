//! Tunable parameters. Every struct's `Default` holds the values the
//! interactive sandbox ships with.

use crate::math::{Point2, Vector2};
use crate::operations::boolean::DEFAULT_SIMPLIFY_TOLERANCE;

/// Parameters of a single carving pass.
#[derive(Debug, Clone, Copy)]
pub struct CarveParams {
    /// Vertex count of the convex cutter approximating the removal disc.
    pub cutter_vertices: usize,
    /// Bodies whose boundary area is at or below this are culled outright.
    pub area_epsilon: f64,
    /// Maximum deviation allowed when simplifying fragments.
    pub simplify_tolerance: f64,
}

impl Default for CarveParams {
    fn default() -> Self {
        Self {
            cutter_vertices: 16,
            area_epsilon: 0.02,
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
        }
    }
}

/// Physics world settings.
#[derive(Debug, Clone, Copy)]
pub struct WorldConfig {
    /// Gravity in physics units per second squared (y grows downwards).
    pub gravity: Vector2,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vector2::new(0.0, 18.0),
        }
    }
}

/// Fixed-timestep settings for advancing the world once per frame.
#[derive(Debug, Clone, Copy)]
pub struct StepConfig {
    /// Length of one simulation sub-step in seconds.
    pub fixed_dt: f64,
    /// Remainders shorter than this are folded into the previous sub-step.
    pub min_dt: f64,
    /// Upper bound on sub-steps per frame.
    pub max_steps: usize,
}

impl Default for StepConfig {
    fn default() -> Self {
        let fixed_dt = 1.0 / 60.0;
        Self {
            fixed_dt,
            min_dt: fixed_dt / 10.0,
            max_steps: 20,
        }
    }
}

/// Settings of the interactive carving session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Display pixels per physics unit.
    pub render_scale: f64,
    /// Radius of the removal disc in display pixels.
    pub removal_radius_px: f64,
    /// Whether fragments are simplified when the session starts.
    pub simplify: bool,
    /// Display width in pixels.
    pub screen_width: f64,
    /// Display height in pixels.
    pub screen_height: f64,
    pub carve: CarveParams,
    pub world: WorldConfig,
    pub step: StepConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            render_scale: 30.0,
            removal_radius_px: 25.0,
            simplify: true,
            screen_width: 1280.0,
            screen_height: 720.0,
            carve: CarveParams::default(),
            world: WorldConfig::default(),
            step: StepConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Converts a display-space point to physics units.
    #[must_use]
    pub fn to_physics(&self, display: Point2) -> Point2 {
        display / self.render_scale
    }

    /// Converts a display-space length to physics units.
    #[must_use]
    pub fn length_to_physics(&self, display: f64) -> f64 {
        display / self.render_scale
    }

    /// Converts a physics-space point to display pixels.
    #[must_use]
    pub fn to_display(&self, physics: Point2) -> Point2 {
        physics * self.render_scale
    }
}

//! Per-frame driver tying input, simulation stepping and carving together.

use crate::config::SessionConfig;
use crate::error::Result;
use crate::math::Point2;
use crate::operations::carve::{CarveReport, CarveTerrain};
use crate::operations::creation::{SeedTerrain, SeededTerrain, ShapeBuilder};
use crate::world::{BodyDef, BodyId, Category, Filter, FixedStepper, FixtureDef, World};

/// Input sampled for one frame, in display coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Cursor position in pixels.
    pub cursor: Point2,
    /// The carve button is held.
    pub carve_held: bool,
    /// The simplify toggle was released this frame.
    pub toggle_simplify: bool,
    /// The spawn button was pressed this frame.
    pub spawn_ball: bool,
    /// Seconds since the previous frame.
    pub elapsed: f64,
}

/// Cursor outline for the renderer, in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorIndicator {
    pub center: Point2,
    pub radius: f64,
}

/// What happened during one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// World sub-steps taken.
    pub substeps: usize,
    /// Ball spawned this frame, if any.
    pub spawned: Option<BodyId>,
    /// Carving pass result while carve was held.
    pub carve: Option<CarveReport>,
    /// Outline to draw while carving.
    pub indicator: Option<CursorIndicator>,
}

/// Interactive carving session owning the physics world.
#[derive(Debug)]
pub struct CarveSession {
    config: SessionConfig,
    world: World,
    builder: ShapeBuilder,
    stepper: FixedStepper,
    simplify: bool,
}

impl CarveSession {
    /// Creates a session with an empty world.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            world: World::new(config.world),
            builder: ShapeBuilder::new(config.render_scale),
            stepper: FixedStepper::new(config.step),
            simplify: config.simplify,
            config,
        }
    }

    /// Loads the starting terrain sized to the configured screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terrain shapes cannot be built.
    pub fn seed(&mut self) -> Result<SeededTerrain> {
        SeedTerrain::new(self.config.screen_width, self.config.screen_height)
            .execute(&mut self.world, &mut self.builder)
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether carving passes simplify their fragments.
    #[must_use]
    pub fn simplify_enabled(&self) -> bool {
        self.simplify
    }

    /// Flips the simplify flag and returns the new value.
    pub fn toggle_simplify(&mut self) -> bool {
        self.simplify = !self.simplify;
        tracing::info!(simplify = self.simplify, "toggled fragment simplification");
        self.simplify
    }

    /// Drops a dynamic ball of half the removal radius at a display point.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be created.
    pub fn spawn_ball(&mut self, display: Point2) -> Result<BodyId> {
        let position = self.config.to_physics(display);
        let shape = self
            .builder
            .circle(Point2::origin(), self.config.removal_radius_px / 2.0);

        let body = self.world.create_body(&BodyDef::dynamic(position));
        let filter = Filter {
            category: Category::NORMAL,
            mask: Category::NORMAL | Category::DESTRUCTIBLE,
            group_index: 0,
        };
        self.world.create_fixture(
            body,
            FixtureDef::new(shape)
                .with_filter(filter)
                .with_density(1.0),
        )?;
        Ok(body)
    }

    /// Runs one frame: input toggles, spawning, stepping, then carving.
    ///
    /// # Errors
    ///
    /// Returns an error if spawning or carving fails.
    pub fn frame(&mut self, input: &FrameInput) -> Result<FrameReport> {
        let mut report = FrameReport::default();

        if input.toggle_simplify {
            self.toggle_simplify();
        }
        if input.spawn_ball {
            report.spawned = Some(self.spawn_ball(input.cursor)?);
        }

        report.substeps = self.stepper.advance(&mut self.world, input.elapsed);

        if input.carve_held {
            let center = self.config.to_physics(input.cursor);
            let radius = self.config.length_to_physics(self.config.removal_radius_px);
            let carve = CarveTerrain::new(center, radius)
                .with_simplify(self.simplify)
                .with_params(self.config.carve)
                .execute(&mut self.world)?;
            report.carve = Some(carve);
            report.indicator = Some(CursorIndicator {
                center: input.cursor,
                radius: self.config.removal_radius_px,
            });
        }

        Ok(report)
    }
}

//! Headless carving demo.
//!
//! Replays a scripted mouse sweep across the starting terrain and logs
//! what each pass did.
//!
//! ```text
//! cargo run --example carve
//! RUST_LOG=terracut=debug cargo run --example carve
//! ```

use terracut::config::SessionConfig;
use terracut::math::Point2;
use terracut::operations::conversion::body_ring;
use terracut::session::{CarveSession, FrameInput};
use terracut::world::Category;

fn main() -> terracut::Result<()> {
    // Default: WARN for everything, INFO for terracut and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=terracut=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("carve=info".parse().unwrap_or_default())
        .add_directive("terracut=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut session = CarveSession::new(SessionConfig::default());
    session.seed()?;

    let frames = 120;
    for frame in 0..frames {
        let t = f64::from(frame) / f64::from(frames);
        // Dig a shallow trench along the lower part of the terrain.
        let cursor = Point2::new(160.0 + t * 960.0, 620.0 + (t * 12.0).sin() * 30.0);
        let input = FrameInput {
            cursor,
            carve_held: true,
            toggle_simplify: frame == frames / 2,
            spawn_ball: frame % 40 == 0,
            elapsed: 1.0 / 60.0,
        };
        let report = session.frame(&input)?;
        if let Some(carve) = &report.carve {
            tracing::info!(
                frame,
                simplify = session.simplify_enabled(),
                candidates = carve.candidates,
                destroyed = carve.destroyed(),
                created = carve.created.len(),
                "frame"
            );
        }
    }

    let world = session.world();
    let mut pieces = 0;
    let mut area = 0.0;
    for (id, body) in world.bodies() {
        let Some(fixture) = body.fixture() else {
            continue;
        };
        if fixture.filter().category.intersects(Category::DESTRUCTIBLE) {
            pieces += 1;
            area += body_ring(world, id)?.area();
        }
    }
    tracing::info!(bodies = world.body_count(), pieces, area, "final terrain");
    Ok(())
}

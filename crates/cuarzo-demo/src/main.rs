use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;

use cuarzo_engine::coords::Vec2;
use cuarzo_engine::logging::{init_logging, LoggingConfig};
use cuarzo_engine::scene::{Collision, Component, FrameCtx, Node, Transform};
use cuarzo_engine::surface::SoftwareCanvas;
use cuarzo_engine::window::{Runtime, RuntimeConfig, WinitHost};
use cuarzo_engine::{Engine, EngineConfig, InitOptions};

/// A square drifting across the viewport, wrapping at the edges.
struct Drifter {
    name: &'static str,
    velocity: Vec2,
    components: Vec<Component>,
}

impl Drifter {
    fn new(name: &'static str, position: Vec2, velocity: Vec2) -> Self {
        Self {
            name,
            velocity,
            components: vec![
                Component::Transform(Transform {
                    position,
                    ..Transform::default()
                }),
                Component::Collision(Collision::new(0, Vec2::new(16.0, 16.0))),
            ],
        }
    }

    fn position_mut(&mut self) -> Option<&mut Vec2> {
        self.components.iter_mut().find_map(|c| match c {
            Component::Transform(t) => Some(&mut t.position),
            _ => None,
        })
    }
}

impl Node for Drifter {
    fn components(&self) -> &[Component] {
        &self.components
    }

    fn ready(&mut self, _ctx: &mut FrameCtx<'_>) {
        log::info!("{} ready", self.name);
    }

    fn update(&mut self, ctx: &mut FrameCtx<'_>) {
        let viewport = ctx.camera.viewport();
        let step = self.velocity * (ctx.delta as f32 / 1000.0);
        let name = self.name;
        let frame = ctx.frame_index;

        if let Some(pos) = self.position_mut() {
            *pos += step;
            pos.x = pos.x.rem_euclid(viewport.width);
            pos.y = pos.y.rem_euclid(viewport.height);

            if frame % 120 == 0 {
                log::debug!("{name} at ({:.1}, {:.1})", pos.x, pos.y);
            }
        }
    }
}

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    init_logging(LoggingConfig::for_engine(&config));

    let host = WinitHost::new(Duration::from_micros(16_667), Duration::from_millis(1200));
    let mut engine = Engine::with_config(host, config);

    let loaded = Rc::new(Cell::new(false));
    {
        let loaded = Rc::clone(&loaded);
        engine.on_loaded(move || {
            loaded.set(true);
            log::info!("resources ready");
        })?;
    }

    engine.init(
        InitOptions::new(SoftwareCanvas::new())
            .size(480, 640)
            .image_brand_url("assets/brand.png"),
    )?;

    engine.mount(vec![
        Box::new(Drifter::new("red", Vec2::new(40.0, 40.0), Vec2::new(60.0, 35.0))) as Box<dyn Node>,
        Box::new(Drifter::new("blue", Vec2::new(300.0, 500.0), Vec2::new(-45.0, -80.0))),
    ]);

    Runtime::run(
        RuntimeConfig {
            title: "cuarzo demo".to_string(),
            ..RuntimeConfig::default()
        },
        engine,
    )?;

    log::info!("exited (splash finished: {})", loaded.get());
    Ok(())
}

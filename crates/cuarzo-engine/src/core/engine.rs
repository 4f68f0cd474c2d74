use crate::brand::{BrandMedia, BrandSequence, BrandStep};
use crate::coords::{Camera, Color, Vec2, Viewport};
use crate::error::{EngineError, Result};
use crate::host::{FrameHandle, Host};
use crate::scene::{Collision, FrameCtx, Node, NodeId, NodeRegistry};
use crate::signal::ReadySignal;
use crate::surface::Canvas;
use crate::time::FrameClock;

use super::config::{EngineConfig, InitOptions};
use super::state::LoopState;

/// Game-loop engine bound to a host environment.
///
/// The host delivers animation frames through [`Engine::on_animation_frame`]
/// and media completions through [`Engine::on_media_complete`]; everything
/// else is driven by the caller.
pub struct Engine<H: Host> {
    host: H,
    config: EngineConfig,

    canvas: Option<Box<dyn Canvas>>,
    camera: Camera,

    nodes: NodeRegistry,
    collisions: Vec<NodeId>,

    state: LoopState,
    pending_frame: Option<FrameHandle>,
    clock: FrameClock,
    ready_dispatched: bool,

    ready: ReadySignal,
    brand: BrandSequence,
}

impl<H: Host> Engine<H> {
    /// Creates an engine with configuration read from the environment.
    pub fn new(host: H) -> Self {
        Self::with_config(host, EngineConfig::from_env())
    }

    pub fn with_config(host: H, config: EngineConfig) -> Self {
        Self {
            host,
            config,
            canvas: None,
            camera: Camera::new(Viewport::DEFAULT),
            nodes: NodeRegistry::new(),
            collisions: Vec::new(),
            state: LoopState::Idle,
            pending_frame: None,
            clock: FrameClock::new(),
            ready_dispatched: false,
            ready: ReadySignal::new(),
            brand: BrandSequence::new(None),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.camera.viewport()
    }

    #[inline]
    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }

    #[inline]
    pub fn loop_state(&self) -> LoopState {
        self.state
    }

    /// Handle of the frame currently scheduled with the host, if any.
    #[inline]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Whether `init` has bound a canvas and its 2D context.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.canvas.is_some()
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.ready.is_loaded()
    }

    // ── viewport + brand ──────────────────────────────────────────────────

    /// Binds the canvas, sizes the viewport and starts the brand sequence.
    ///
    /// All validation happens before any side effect; on error the engine is
    /// left as it was. Calling it again after the brand sequence finished
    /// rebinds the canvas and starts a new load cycle; calling it while the
    /// sequence is still playing fails with `InvalidArgument`.
    pub fn init(&mut self, options: InitOptions) -> Result<()> {
        let InitOptions {
            canvas,
            width,
            height,
            image_brand_url,
            video,
        } = options;

        // A pending media step would later complete the replacement sequence.
        if self.brand.is_pending() {
            return Err(EngineError::invalid(
                "init called while the brand sequence is still playing",
            ));
        }

        let mut canvas = canvas.ok_or_else(|| EngineError::invalid("a canvas is required"))?;

        let size = Vec2::new(width as f32, height as f32);
        if !Viewport::from_size(size).is_valid() {
            return Err(EngineError::invalid(format!(
                "canvas size must be positive, got {width}x{height}"
            )));
        }

        if canvas.context_2d().is_none() {
            return Err(EngineError::invalid("the canvas does not provide a 2D context"));
        }

        // An image brand wins; the video is not consulted in that case.
        let media = match (image_brand_url, video) {
            (Some(url), _) => Some(BrandMedia::Image(url)),
            (None, Some(video)) => {
                if !video.is_playable() {
                    return Err(EngineError::invalid(format!(
                        "the brand video {:?} is not playable",
                        video.source()
                    )));
                }
                Some(BrandMedia::Video(video))
            }
            (None, None) => None,
        };

        canvas.set_size(width, height);
        self.canvas = Some(canvas);
        self.camera.set_viewport_size(size);

        log::info!(
            "engine bound to {width}x{height} canvas (dev_mode: {})",
            self.config.dev_mode
        );

        self.host.set_background(Some(Color::BLACK));

        self.ready.rearm();
        self.brand = BrandSequence::new(media);

        let step = self.brand.start(&mut self.host);
        self.apply_brand_step(step);

        Ok(())
    }

    /// Registers the resource-ready listener.
    ///
    /// Fails with `InvalidArgument` if one is already registered. If loading
    /// already finished, the listener runs immediately.
    pub fn on_loaded<F>(&mut self, listener: F) -> Result<()>
    where
        F: FnMut() + 'static,
    {
        self.ready.on_loaded(listener)
    }

    /// Fires the resource-ready signal on demand.
    pub fn execute_listener(&mut self) {
        self.ready.execute_listener();
    }

    /// Host callback: the pending brand media finished.
    pub fn on_media_complete(&mut self) {
        let step = self.brand.complete(&mut self.host);
        self.apply_brand_step(step);
    }

    fn apply_brand_step(&mut self, step: BrandStep) {
        match step {
            BrandStep::Finished => self.ready.execute_listener(),
            BrandStep::Waiting => {}
            BrandStep::Ignored => log::warn!("media completion ignored: no brand media pending"),
        }
    }

    // ── registry ──────────────────────────────────────────────────────────

    /// Appends `nodes` to the registry and returns their ids.
    ///
    /// The first call schedules the start frame; later calls only append.
    pub fn mount<I>(&mut self, nodes: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = Box<dyn Node>>,
    {
        let ids = self.nodes.extend(nodes);
        log::debug!("mounted {} node(s), {} total", ids.len(), self.nodes.len());

        if self.state == LoopState::Idle {
            self.schedule(LoopState::Starting);
        }

        ids
    }

    // ── loop control ──────────────────────────────────────────────────────

    /// Starts the loop from `Idle`, or resumes it from `Paused`.
    pub fn start(&mut self) {
        match self.state {
            LoopState::Idle => self.schedule(LoopState::Starting),
            LoopState::Paused if self.ready_dispatched => self.schedule(LoopState::Resuming),
            LoopState::Paused => self.schedule(LoopState::Starting),
            _ => {}
        }
    }

    /// Cancels the pending frame. `start` resumes.
    pub fn pause(&mut self) {
        if self.state.is_scheduled() {
            self.cancel_pending();
            self.state = LoopState::Paused;
            log::debug!("loop paused");
        }
    }

    /// Cancels the pending frame for good.
    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            self.cancel_pending();
            self.state = LoopState::Stopped;
            log::debug!("loop stopped");
        }
    }

    /// Host callback for a scheduled animation frame.
    ///
    /// `timestamp` is in milliseconds. Frames that are not the pending one
    /// (cancelled or duplicated deliveries) are ignored.
    pub fn on_animation_frame(&mut self, handle: FrameHandle, timestamp: f64) {
        if self.pending_frame != Some(handle) {
            log::trace!("ignoring stale frame {handle:?}");
            return;
        }
        self.pending_frame = None;

        match self.state {
            LoopState::Starting => {
                self.dispatch(timestamp, 0, |node, ctx| node.ready(ctx));
                self.clock.begin(timestamp);
                self.ready_dispatched = true;
                log::debug!("start frame dispatched to {} node(s)", self.nodes.len());
                self.schedule(LoopState::Running);
            }
            LoopState::Running => {
                self.clear();
                let ft = self.clock.tick(timestamp);
                log::trace!("frame {} dt={:.3}ms", ft.frame_index, ft.delta);
                self.dispatch(ft.delta, ft.frame_index, |node, ctx| node.update(ctx));
                self.schedule(LoopState::Running);
            }
            LoopState::Resuming => {
                self.clock.begin(timestamp);
                self.schedule(LoopState::Running);
            }
            LoopState::Idle | LoopState::Paused | LoopState::Stopped => {}
        }
    }

    /// Erases the whole canvas. No-op before `init`.
    pub fn clear(&mut self) {
        let Some(canvas) = self.canvas.as_mut() else {
            return;
        };
        let (w, h) = canvas.size();
        if let Some(ctx) = canvas.context_2d() {
            ctx.clear_rect(0.0, 0.0, w as f32, h as f32);
        }
    }

    fn schedule(&mut self, next: LoopState) {
        self.pending_frame = Some(self.host.request_animation_frame());
        self.state = next;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.host.cancel_animation_frame(handle);
        }
    }

    fn dispatch<F>(&mut self, delta: f64, frame_index: u64, mut hook: F)
    where
        F: FnMut(&mut dyn Node, &mut FrameCtx<'_>),
    {
        let Self {
            nodes,
            canvas,
            camera,
            ..
        } = self;

        for node in nodes.iter_mut() {
            let render = canvas.as_mut().and_then(|c| c.context_2d());
            let mut ctx = FrameCtx::new(delta, frame_index, camera, render);
            hook(node.as_mut(), &mut ctx);
        }
    }

    // ── collisions ────────────────────────────────────────────────────────

    /// For each node in the active-collisions list, its `Collision` components.
    pub fn collisions_components(&self) -> Vec<Vec<&Collision>> {
        self.collisions
            .iter()
            .filter_map(|&id| self.nodes.get(id))
            .map(|node| {
                node.components()
                    .iter()
                    .filter_map(|c| c.as_collision())
                    .collect()
            })
            .collect()
    }

    #[inline]
    pub fn collisions(&self) -> &[NodeId] {
        &self.collisions
    }

    /// Replaces the active-collisions list.
    pub fn set_collisions<I>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let ids: Vec<NodeId> = ids.into_iter().collect();
        if let Some(bad) = ids.iter().find(|id| !self.nodes.contains(**id)) {
            return Err(EngineError::invalid(format!("unknown node {bad:?}")));
        }
        self.collisions = ids;
        Ok(())
    }

    /// Appends one node to the active-collisions list.
    pub fn mark_colliding(&mut self, id: NodeId) -> Result<()> {
        if !self.nodes.contains(id) {
            return Err(EngineError::invalid(format!("unknown node {id:?}")));
        }
        self.collisions.push(id);
        Ok(())
    }

    pub fn clear_collisions(&mut self) {
        self.collisions.clear();
    }
}

impl<H: Host> Drop for Engine<H> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl<H: Host> std::fmt::Debug for Engine<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("bound", &self.canvas.is_some())
            .field("viewport", &self.camera.viewport())
            .field("nodes", &self.nodes.len())
            .field("state", &self.state)
            .field("pending_frame", &self.pending_frame)
            .field("brand", &self.brand.stage())
            .field("ready", &self.ready)
            .finish()
    }
}

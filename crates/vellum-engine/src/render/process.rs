use anyhow::{Context, Result};

use super::{sprite, text, DrawCtx, Projection, RenderBackend};
use crate::atlas::{TextureId, TextureRegionCache};
use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::coords::ScreenViewport;
use crate::error::RenderError;
use crate::interact::{FrameRegistry, HitTestEngine, PointerEvent, RawPointer};
use crate::process::{AppEvent, CameraChange, CameraStatus, InPort, OutPort, Process};
use crate::scene::{DrawItem, DrawKind, DrawQueue};
use crate::text::{LayoutCache, TextShaper};

/// Channels the render process reads from and writes to.
pub struct RenderPorts {
    pub items: Box<dyn InPort<DrawItem>>,
    pub app_events: Box<dyn InPort<AppEvent>>,
    pub camera_changes: Box<dyn InPort<CameraChange>>,
    pub pointer_input: Box<dyn InPort<RawPointer>>,
    pub pointer_events: Box<dyn OutPort<PointerEvent>>,
    pub camera_status: Box<dyn OutPort<CameraStatus>>,
}

/// Sorts the frame's draw items, draws them with as few projection switches
/// as the ordering allows, and resolves pointer input against the result.
///
/// Frame phases:
/// - `pre_iteration`: drop last frame's queue and entity registry
/// - `execute`: collect draw items, apply resizes and camera changes
/// - `post_iteration`: draw, then resolve pointer samples and emit events
pub struct RenderProcess<B: RenderBackend> {
    config: RenderConfig,
    camera: Camera,
    viewport: ScreenViewport,

    queue: DrawQueue,
    registry: FrameRegistry,
    regions: TextureRegionCache,
    layouts: LayoutCache,
    shaper: Box<dyn TextShaper>,
    hits: HitTestEngine,

    backend: B,
    ports: RenderPorts,
}

impl<B: RenderBackend> RenderProcess<B> {
    pub fn new(
        config: RenderConfig,
        regions: TextureRegionCache,
        shaper: Box<dyn TextShaper>,
        backend: B,
        ports: RenderPorts,
    ) -> Self {
        let (w, h) = (config.initial_width as f32, config.initial_height as f32);
        log::debug!(
            "RenderProcess: {}x{} world, {:?}, {} regions",
            config.initial_width,
            config.initial_height,
            config.resize_policy,
            regions.len()
        );

        Self {
            camera: Camera::new(w, h),
            viewport: ScreenViewport::new(w, h),
            config,
            queue: DrawQueue::new(),
            registry: FrameRegistry::new(),
            regions,
            layouts: LayoutCache::new(),
            shaper,
            hits: HitTestEngine::new(),
            backend,
            ports,
        }
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn viewport(&self) -> &ScreenViewport {
        &self.viewport
    }

    #[inline]
    pub fn registry(&self) -> &FrameRegistry {
        &self.registry
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Drops the decoded hit-test raster of a texture being deleted.
    pub fn invalidate_texture(&mut self, texture: TextureId) -> bool {
        self.hits.invalidate_texture(texture)
    }

    /// Runs one whole frame outside a scheduler.
    pub fn tick(&mut self) -> Result<()> {
        self.pre_iteration()?;
        self.execute()?;
        self.post_iteration()
    }

    fn collect_items(&mut self) {
        while let Some(item) = self.ports.items.poll() {
            self.queue.push(item);
        }
    }

    fn handle_app_events(&mut self) {
        while let Some(event) = self.ports.app_events.poll() {
            match event {
                AppEvent::Resize { width, height } => self.resize(width, height),
                other => log::debug!("RenderProcess: ignoring {other:?}"),
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("RenderProcess: ignoring resize to {width}x{height}");
            return;
        }
        let initial = (self.config.initial_width, self.config.initial_height);
        self.config
            .resize_policy
            .apply(&mut self.camera, &mut self.viewport, initial, width, height);
    }

    fn handle_camera_changes(&mut self) {
        while let Some(change) = self.ports.camera_changes.poll() {
            self.camera.translate(change.dx, change.dy);
            self.camera.zoom_by(change.zoom_delta);

            let status = CameraStatus {
                x: self.camera.position.x as i32,
                y: self.camera.position.y as i32,
                zoom: self.camera.zoom,
            };
            log::trace!("RenderProcess: camera now {status:?}");
            self.ports.camera_status.offer(status);
        }
    }

    fn projection(&self, projected: bool) -> Projection {
        let matrix = if projected {
            self.camera.combined()
        } else {
            self.camera.projection_at(1.0)
        };
        Projection { projected, matrix }
    }

    fn draw_frame(&mut self) -> Result<(), RenderError> {
        self.backend.clear(self.config.clear_color);

        let world_projection = self.projection(true);
        let screen_projection = self.projection(false);
        let mut batch: Option<bool> = None;

        let mut ctx = DrawCtx {
            camera: &self.camera,
            viewport: &self.viewport,
            backend: &mut self.backend,
            registry: &mut self.registry,
        };

        for item in self.queue.drain_in_paint_order() {
            if batch != Some(item.projected) {
                if batch.is_some() {
                    ctx.backend.end_batch();
                }
                let projection = if item.projected { &world_projection } else { &screen_projection };
                ctx.backend.begin_batch(projection);
                batch = Some(item.projected);
            }

            match &item.kind {
                DrawKind::Sprite(cmd) => {
                    let region = self.regions.region(&cmd.texture)?;
                    sprite::draw(item, region, &mut ctx);
                }
                DrawKind::Text(cmd) => {
                    let font = cmd.font.clone();
                    let layout = self
                        .layouts
                        .get_or_shape(self.shaper.as_ref(), font.as_deref(), &cmd.text)?
                        .clone();
                    text::draw(item, font, layout, &mut ctx);
                }
            }
        }

        if batch.is_some() {
            ctx.backend.end_batch();
        }

        self.layouts.end_frame();
        Ok(())
    }

    fn discard_pointer_input(&mut self) {
        let mut dropped = 0usize;
        while self.ports.pointer_input.poll().is_some() {
            dropped += 1;
        }
        if dropped > 0 {
            log::trace!("RenderProcess: pointer events off, dropped {dropped} samples");
        }
    }

    fn emit_pointer_events(&mut self) -> Result<(), RenderError> {
        while let Some(raw) = self.ports.pointer_input.poll() {
            self.hits.push(raw);
        }

        let events = self
            .hits
            .resolve(&self.registry, &self.camera, &self.viewport, &self.regions)?;
        for event in events {
            self.ports.pointer_events.offer(event);
        }
        Ok(())
    }
}

impl<B: RenderBackend> Process for RenderProcess<B> {
    fn pre_iteration(&mut self) -> Result<()> {
        self.queue.clear();
        self.registry.clear();
        Ok(())
    }

    fn execute(&mut self) -> Result<()> {
        self.collect_items();
        self.handle_app_events();
        self.handle_camera_changes();
        Ok(())
    }

    fn post_iteration(&mut self) -> Result<()> {
        self.draw_frame().context("draw pass failed")?;

        if self.config.emit_pointer_events {
            self.emit_pointer_events().context("pointer resolution failed")?;
        } else {
            self.discard_pointer_input();
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "render"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::{PageSource, TextureAtlas};
    use crate::camera::ResizePolicy;
    use crate::interact::PointerKind;
    use crate::process::{channel, Receiver, Scheduler, Sender};
    use crate::render::{BackendCall, RecordingBackend};
    use crate::text::TextLayout;
    use glam::Vec2;
    use image::{Rgba, RgbaImage};

    /// 8 units per char, 16 high.
    struct FixedShaper;

    impl TextShaper for FixedShaper {
        fn layout(&self, font: Option<&str>, text: &str) -> Result<TextLayout, RenderError> {
            if let Some(name) = font {
                return Err(RenderError::UnknownFont(name.to_string()));
            }
            Ok(TextLayout { width: 8.0 * text.chars().count() as f32, height: 16.0, glyphs: Vec::new() })
        }
    }

    struct Harness {
        render: RenderProcess<RecordingBackend>,
        items: Sender<DrawItem>,
        app: Sender<AppEvent>,
        camera: Sender<CameraChange>,
        pointer: Sender<RawPointer>,
        events: Receiver<PointerEvent>,
        status: Receiver<CameraStatus>,
    }

    fn regions() -> TextureRegionCache {
        let mut atlas = TextureAtlas::new();
        let page = atlas.add_page(PageSource::Memory(RgbaImage::from_pixel(16, 16, Rgba([255, 255, 255, 255]))));
        atlas.add_region("box", page, 0, 0, 10, 10);
        // 20x4, left half clear, right half opaque.
        let bar = atlas.add_page(PageSource::Memory(RgbaImage::from_fn(20, 4, |x, _| {
            if x < 10 { Rgba([0, 0, 0, 0]) } else { Rgba([255, 255, 255, 255]) }
        })));
        atlas.add_region("bar", bar, 0, 0, 20, 4);
        let mut cache = TextureRegionCache::new();
        cache.add_atlas(atlas);
        cache
    }

    fn harness(config: RenderConfig) -> Harness {
        let (items, items_rx) = channel();
        let (app, app_rx) = channel();
        let (camera, camera_rx) = channel();
        let (pointer, pointer_rx) = channel();
        let (events_tx, events) = channel();
        let (status_tx, status) = channel();

        let ports = RenderPorts {
            items: Box::new(items_rx),
            app_events: Box::new(app_rx),
            camera_changes: Box::new(camera_rx),
            pointer_input: Box::new(pointer_rx),
            pointer_events: Box::new(events_tx),
            camera_status: Box::new(status_tx),
        };
        let render = RenderProcess::new(config, regions(), Box::new(FixedShaper), RecordingBackend::new(), ports);
        Harness { render, items, app, camera, pointer, events, status }
    }

    fn small() -> RenderConfig {
        RenderConfig { initial_width: 100, initial_height: 100, ..RenderConfig::default() }
    }

    fn batches(calls: &[BackendCall]) -> Vec<bool> {
        calls
            .iter()
            .filter_map(|c| match c {
                BackendCall::BeginBatch(p) => Some(p.projected),
                _ => None,
            })
            .collect()
    }

    // ── draw order and batching ───────────────────────────────────────────

    #[test]
    fn draws_in_sorted_order() {
        let mut h = harness(small());
        h.items.offer(DrawItem::sprite("c", "box").order(3));
        h.items.offer(DrawItem::sprite("b", "box").order(1));
        h.items.offer(DrawItem::sprite("a", "box").order(1).screen_fixed());
        h.render.tick().unwrap();

        assert_eq!(h.render.backend().drawn_ids(), ["a", "b", "c"]);
    }

    #[test]
    fn projection_switches_only_on_transition() {
        let mut h = harness(small());
        h.items.offer(DrawItem::sprite("u0", "box").order(0).screen_fixed());
        h.items.offer(DrawItem::sprite("p0", "box").order(0));
        h.items.offer(DrawItem::sprite("p0b", "box").order(0));
        h.items.offer(DrawItem::sprite("p1", "box").order(1));
        h.items.offer(DrawItem::sprite("u2", "box").order(2).screen_fixed());
        h.render.tick().unwrap();

        let calls = h.render.backend().calls();
        assert_eq!(batches(&calls), [false, true, false]);
        let begins = calls.iter().filter(|c| matches!(c, BackendCall::BeginBatch(_))).count();
        let ends = calls.iter().filter(|c| matches!(c, BackendCall::EndBatch)).count();
        assert_eq!(begins, ends);
        assert!(matches!(calls[0], BackendCall::Clear(_)));
        assert!(matches!(calls.last(), Some(BackendCall::EndBatch)));
    }

    #[test]
    fn first_batch_opens_in_first_item_space() {
        let mut h = harness(small());
        h.items.offer(DrawItem::sprite("p", "box"));
        h.render.tick().unwrap();
        assert_eq!(batches(&h.render.backend().calls()), [true]);
    }

    #[test]
    fn screen_fixed_projection_ignores_zoom_and_pan() {
        let mut h = harness(small());
        h.camera.offer(CameraChange::new(30.0, 0.0, 1.0));
        h.items.offer(DrawItem::sprite("u", "box").screen_fixed());
        h.items.offer(DrawItem::sprite("p", "box").order(1));
        h.render.tick().unwrap();

        let projections: Vec<Projection> = h
            .render
            .backend()
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                BackendCall::BeginBatch(p) => Some(p),
                _ => None,
            })
            .collect();
        assert_eq!(projections[0].matrix, h.render.camera().projection_at(1.0));
        assert_eq!(projections[1].matrix, h.render.camera().combined());
    }

    #[test]
    fn empty_frame_only_clears() {
        let mut h = harness(small());
        h.render.tick().unwrap();
        let calls = h.render.backend().calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(calls[0], BackendCall::Clear(_)));
    }

    #[test]
    fn items_do_not_survive_the_frame() {
        let mut h = harness(small());
        h.items.offer(DrawItem::sprite("once", "box"));
        h.render.tick().unwrap();
        assert_eq!(h.render.registry().len(), 1);

        h.render.backend().take();
        h.render.tick().unwrap();
        assert!(h.render.backend().drawn_ids().is_empty());
        assert!(h.render.registry().is_empty());
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn unknown_region_fails_the_frame() {
        let mut h = harness(small());
        h.items.offer(DrawItem::sprite("x", "nope"));
        let err = h.render.tick().unwrap_err();
        assert!(format!("{err:#}").contains("'nope'"));
    }

    #[test]
    fn unknown_font_fails_the_frame() {
        let mut h = harness(small());
        h.items.offer(DrawItem::text("t", "hi").font("fancy"));
        assert!(h.render.tick().is_err());
    }

    // ── camera ────────────────────────────────────────────────────────────

    #[test]
    fn camera_change_reports_status() {
        let mut h = harness(small());
        h.camera.offer(CameraChange::new(5.0, 0.0, 0.1));
        h.render.tick().unwrap();

        let status = h.status.drain();
        assert_eq!(status.len(), 1);
        assert_eq!((status[0].x, status[0].y), (5, 0));
        assert!((status[0].zoom - 1.1).abs() < 1e-6);
    }

    #[test]
    fn one_status_per_change_with_truncated_position() {
        let mut h = harness(small());
        h.camera.offer(CameraChange::new(2.7, -1.5, 0.0));
        h.camera.offer(CameraChange::new(0.5, 0.0, 0.0));
        h.render.tick().unwrap();

        let status = h.status.drain();
        assert_eq!(status.len(), 2);
        assert_eq!((status[0].x, status[0].y), (2, -1));
        assert_eq!((status[1].x, status[1].y), (3, -1));
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_keeps_world_and_camera() {
        let mut h = harness(small());
        h.camera.offer(CameraChange::new(10.0, 20.0, 0.5));
        h.render.tick().unwrap();

        h.app.offer(AppEvent::Resize { width: 300, height: 150 });
        h.app.offer(AppEvent::Pause);
        h.render.tick().unwrap();

        assert_eq!(h.render.viewport().world, Vec2::new(100.0, 100.0));
        assert_eq!(h.render.viewport().screen_box, Vec2::new(300.0, 150.0));
        assert_eq!(h.render.camera().position, Vec2::new(10.0, 20.0));
        assert_eq!(h.render.camera().zoom, 1.5);
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut h = harness(RenderConfig { resize_policy: ResizePolicy::ChangeResolution, ..small() });
        h.app.offer(AppEvent::Resize { width: 0, height: 0 });
        h.render.tick().unwrap();
        assert_eq!(h.render.viewport().world, Vec2::new(100.0, 100.0));
    }

    // ── pointer events ────────────────────────────────────────────────────

    #[test]
    fn pointer_resolves_against_this_frame() {
        let mut h = harness(small());
        h.items.offer(DrawItem::sprite("box", "box").at(5.0, 5.0));
        h.pointer.offer(RawPointer::new(55.0, 45.0, PointerKind::Down, 0, true));
        h.render.tick().unwrap();

        let events = h.events.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].target.as_deref(), Some("box"));
        assert!(events[0].on_projected);
    }

    #[test]
    fn text_is_hit_around_its_centre() {
        let mut h = harness(small());
        // "hello" is 40x16, centred on (0, 20).
        h.items.offer(DrawItem::text("greeting", "hello").at(0.0, 20.0).screen_fixed());
        h.pointer.offer(RawPointer::new(35.0, 25.0, PointerKind::Moved, 0, false));
        h.render.tick().unwrap();

        let events = h.events.drain();
        assert_eq!(events[0].target.as_deref(), Some("greeting"));
        assert!(!events[0].on_projected);
    }

    /// One resolved target for a hover at world / pixel offset `(x, y)` in the
    /// 100x100 harness window.
    fn hover_target(h: &mut Harness, x: f32, y: f32) -> Option<String> {
        h.pointer.offer(RawPointer::new(x + 50.0, 50.0 - y, PointerKind::Moved, 0, false));
        h.render.tick().unwrap();
        let events = h.events.drain();
        assert_eq!(events.len(), 1);
        events[0].target.clone()
    }

    #[test]
    fn rotated_text_turns_around_its_position() {
        let mut h = harness(small());
        // "hello" is 40x16; a quarter turn stands it upright, 16 wide and 40 tall.
        let text = || DrawItem::text("t", "hello").rotation(90.0);

        h.items.offer(text());
        assert_eq!(hover_target(&mut h, 2.0, 15.0).as_deref(), Some("t"));

        h.items.offer(text());
        assert_eq!(hover_target(&mut h, 15.0, 2.0), None);
    }

    #[test]
    fn rotated_screen_fixed_sprite_at_zoom() {
        let mut h = harness(small());
        h.camera.offer(CameraChange::new(0.0, 0.0, 1.0));
        // Drawn 40x8 at zoom 2 around (20, 0); a quarter turn points the
        // opaque half down.
        let bar = || DrawItem::sprite("bar", "bar").at(10.0, 0.0).rotation(90.0).screen_fixed();

        h.items.offer(bar());
        assert_eq!(hover_target(&mut h, 20.0, -10.0).as_deref(), Some("bar"));
        assert_eq!(h.render.registry().get(0).unwrap().pivot, Vec2::new(20.0, 0.0));

        h.items.offer(bar());
        assert_eq!(hover_target(&mut h, 20.0, 10.0), None, "clear half points up");

        h.items.offer(bar());
        assert_eq!(hover_target(&mut h, 35.0, 0.0), None, "unrotated extent is empty");
    }

    #[test]
    fn pointer_events_can_be_disabled() {
        let mut h = harness(RenderConfig { emit_pointer_events: false, ..small() });
        h.items.offer(DrawItem::sprite("box", "box"));
        h.pointer.offer(RawPointer::new(50.0, 50.0, PointerKind::Down, 0, true));
        h.render.tick().unwrap();
        assert!(h.events.is_empty());
        assert!(h.pointer.is_empty());
    }

    #[test]
    fn disabled_pointer_input_does_not_pile_up() {
        let mut h = harness(RenderConfig { emit_pointer_events: false, ..small() });
        for i in 0..1000 {
            h.pointer.offer(RawPointer::new(i as f32 % 100.0, 50.0, PointerKind::Moved, 0, false));
            h.render.tick().unwrap();
        }
        assert_eq!(h.pointer.len(), 0);
        assert!(h.events.is_empty());
    }

    #[test]
    fn runs_under_the_scheduler() {
        let h = harness(small());
        let backend = h.render.backend().clone();
        let mut items = h.items.clone();
        let mut scheduler = Scheduler::new();
        scheduler.add(h.render);

        items.offer(DrawItem::sprite("a", "box"));
        scheduler.perform_iteration().unwrap();
        assert_eq!(backend.drawn_ids(), ["a"]);
    }
}

use glam::Vec2;

use super::Camera;
use crate::coords::ScreenViewport;

/// How a window resize is reconciled with the logical world size.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ResizePolicy {
    /// The world keeps its initial size and is stretched over the window.
    #[default]
    KeepResolution,
    /// The world grows and shrinks with the window, one unit per pixel.
    ChangeResolution,
    /// The world keeps its initial size inside a letterboxed, aspect-fitted box.
    KeepResolutionKeepAspect,
    /// As `KeepResolutionKeepAspect`, but the world takes the fitted box's size.
    ChangeResolutionKeepAspect,
}

/// An aspect-preserving box centred in the window, in whole pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FitBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Largest box with the aspect of `initial` that fits inside `window`.
pub fn fit_box(initial: (u32, u32), window: (u32, u32)) -> FitBox {
    let (w0, h0) = (initial.0 as f32, initial.1 as f32);
    let (w1, h1) = (window.0 as f32, window.1 as f32);

    let scale = (w1 / w0).min(h1 / h0);
    let box_w = w0 * scale;
    let box_h = h0 * scale;

    FitBox {
        x: (w1 - box_w).max(0.0) as u32 / 2,
        y: (h1 - box_h).max(0.0) as u32 / 2,
        width: box_w as u32,
        height: box_h as u32,
    }
}

impl ResizePolicy {
    /// Recomputes `viewport` for a window of `width` x `height` pixels.
    ///
    /// Applying a viewport recentres the camera on the world; the camera's pan
    /// and zoom from before the call are put back afterwards. A window too
    /// small to hold a single pixel of the fitted box leaves everything as is.
    pub fn apply(
        self,
        camera: &mut Camera,
        viewport: &mut ScreenViewport,
        initial: (u32, u32),
        width: u32,
        height: u32,
    ) {
        let saved_position = camera.position;
        let saved_zoom = camera.zoom;

        let mut next = *viewport;
        let window = Vec2::new(width as f32, height as f32);
        let initial_size = Vec2::new(initial.0 as f32, initial.1 as f32);

        match self {
            ResizePolicy::KeepResolution => {
                next.world = initial_size;
                next.screen_box = window;
                next.offset = Vec2::ZERO;
            }
            ResizePolicy::ChangeResolution => {
                next.world = window;
                next.screen_box = window;
                next.offset = Vec2::ZERO;
            }
            ResizePolicy::KeepResolutionKeepAspect | ResizePolicy::ChangeResolutionKeepAspect => {
                let fit = fit_box(initial, (width, height));
                let box_size = Vec2::new(fit.width as f32, fit.height as f32);

                next.screen_box = box_size;
                next.offset = Vec2::new(fit.x as f32, fit.y as f32);
                next.world = if self == ResizePolicy::KeepResolutionKeepAspect {
                    initial_size
                } else {
                    box_size
                };
            }
        }
        next.window = window;

        if !next.is_valid() {
            log::warn!(
                "ResizePolicy::{self:?}: window {width}x{height} leaves no drawable area, keeping {:?}",
                viewport.screen_box
            );
            return;
        }
        *viewport = next;

        apply_viewport(camera, viewport);

        camera.position = saved_position;
        camera.zoom = saved_zoom;

        log::debug!(
            "ResizePolicy::{:?}: window {}x{} -> world {:?}, box {:?} at {:?}",
            self,
            width,
            height,
            viewport.world,
            viewport.screen_box,
            viewport.offset
        );
    }
}

fn apply_viewport(camera: &mut Camera, viewport: &ScreenViewport) {
    camera.viewport = viewport.world;
    camera.position = Vec2::ZERO;
    camera.zoom = 1.0;
}

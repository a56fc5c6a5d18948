//! Event dispatcher: the single writer of overlay state.
//!
//! The UI loop drains the event bus after every window message and feeds the
//! events here in order. The dispatcher updates `OverlayState`, runs the
//! resize gesture, and tells the window layer what to do through
//! [`WindowBackend`].
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → Dispatcher::dispatch() → WindowBackend calls
//! ```

use crate::events::{AppEvent, PointerButton};
use crate::model::{OverlayState, Rejected, Shape};
use crate::overlay::{scene, DragResize, Point, Rect, Scene};

/// Window operations the dispatcher needs from the platform layer.
pub trait WindowBackend {
    /// Move and resize the overlay window to `frame` (screen coordinates).
    fn place_overlay(&mut self, frame: Rect);

    /// Repaint the overlay with `scene`. A blank scene clears it.
    fn redraw_overlay(&mut self, scene: &Scene);

    /// Make the overlay window shown. Does not touch `OverlayState::visible`.
    fn show_overlay(&mut self);

    /// Destroy the overlay window.
    fn close_overlay(&mut self);

    /// Show the control panel, bringing it to the foreground if `activate`.
    fn show_panel(&mut self, activate: bool);

    fn hide_panel(&mut self);

    /// Unregister global hotkeys and remove the pointer hook.
    fn release_global_hooks(&mut self);

    /// Let the pending close go through and end the event loop.
    fn accept_close(&mut self);
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the overlay state and applies events to it.
#[derive(Debug)]
pub struct Dispatcher {
    state: OverlayState,
    drag: DragResize,
    panel_visible: bool,
    screen_center: Point,
}

impl Dispatcher {
    /// Start from the default state, panel visible.
    pub fn new(screen_center: Point) -> Self {
        Self::with_state(screen_center, OverlayState::default())
    }

    pub fn with_state(screen_center: Point, state: OverlayState) -> Self {
        Self {
            state,
            drag: DragResize::Idle,
            panel_visible: true,
            screen_center,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn drag(&self) -> DragResize {
        self.drag
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn screen_center(&self) -> Point {
        self.screen_center
    }

    /// Where the overlay window belongs for the current size.
    pub fn overlay_frame(&self) -> Rect {
        Rect::centered_square(self.screen_center, self.state.size())
    }

    /// Initial placement: overlay drawn and shown, then the panel.
    pub fn start<B: WindowBackend>(&mut self, backend: &mut B) {
        backend.place_overlay(self.overlay_frame());
        backend.redraw_overlay(&scene(&self.state));
        backend.show_overlay();
        backend.show_panel(true);
        self.panel_visible = true;
        log::info!(
            "overlay at {:?}, {} px {:?}",
            self.screen_center,
            self.state.size(),
            self.state.shape
        );
    }

    /// Apply events in order, stopping at the first one that ends the loop.
    pub fn dispatch_all<B, I>(&mut self, events: I, backend: &mut B) -> Flow
    where
        B: WindowBackend,
        I: IntoIterator<Item = AppEvent>,
    {
        for event in events {
            if self.dispatch(&event, backend) == Flow::Exit {
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Apply one event.
    pub fn dispatch<B: WindowBackend>(&mut self, event: &AppEvent, backend: &mut B) -> Flow {
        if !event.is_pointer() {
            log::debug!("[DISPATCH] {}", event.description());
        }

        match *event {
            AppEvent::ToggleOverlay => {
                let visible = self.state.toggle_visible();
                log::info!("crosshair {}", if visible { "shown" } else { "hidden" });
                self.redraw(backend);
            }

            AppEvent::TogglePanel => self.toggle_panel(backend),

            AppEvent::SetShape(shape) => self.set_shape(shape, backend),

            AppEvent::SetSize(size) => {
                self.state.set_size_from_slider(size);
                log::debug!("size set to {}", self.state.size());
                self.resize_overlay(backend);
            }

            AppEvent::SetColorIndex(index) => match self.state.set_color_index(index) {
                Ok(()) => {
                    log::debug!("color set to {}", self.state.color().to_hex());
                    self.redraw(backend);
                }
                Err(Rejected::ColorIndexOutOfRange(i)) => {
                    log::warn!("ignoring color index {} outside the palette", i);
                }
            },

            AppEvent::PanelClosed => {
                log::info!("control panel closed, shutting down");
                backend.release_global_hooks();
                backend.close_overlay();
                backend.accept_close();
                return Flow::Exit;
            }

            AppEvent::PointerPressed {
                button: PointerButton::Left,
                x,
                y,
                modifier,
            } => {
                if self.overlay_frame().contains(Point::new(x, y)) && self.drag.press(x, modifier) {
                    log::debug!("resize drag started at x={}", x);
                }
            }

            AppEvent::PointerMoved { x, .. } => {
                if let Some(step) = self.drag.drag_to(x) {
                    let before = self.state.size();
                    self.state.adjust_size(step);
                    if self.state.size() != before {
                        self.resize_overlay(backend);
                    }
                }
            }

            AppEvent::PointerReleased {
                button: PointerButton::Left,
            } => {
                if self.drag.is_active() {
                    log::debug!("resize drag ended at {} px", self.state.size());
                }
                self.drag.release();
            }
        }

        Flow::Continue
    }

    fn set_shape<B: WindowBackend>(&mut self, shape: Shape, backend: &mut B) {
        self.state.shape = shape;
        self.redraw(backend);
    }

    // The overlay window is shown on both branches.
    fn toggle_panel<B: WindowBackend>(&mut self, backend: &mut B) {
        if self.panel_visible {
            backend.hide_panel();
            backend.show_overlay();
        } else {
            backend.show_panel(true);
            backend.show_overlay();
        }
        self.panel_visible = !self.panel_visible;
        log::info!(
            "control panel {}",
            if self.panel_visible { "shown" } else { "hidden" }
        );
    }

    fn resize_overlay<B: WindowBackend>(&mut self, backend: &mut B) {
        backend.place_overlay(self.overlay_frame());
        self.redraw(backend);
    }

    fn redraw<B: WindowBackend>(&self, backend: &mut B) {
        backend.redraw_overlay(&scene(&self.state));
    }
}

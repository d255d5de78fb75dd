//! Window state machine
//!
//! `SnapController` owns the Normal/Maximized/Snapped state and the
//! previous-geometry memory, and turns pointer and keyboard samples into
//! geometry commands on the owned window and the ghost preview. All
//! operations run on the UI thread, process samples in arrival order and
//! never fail: anomalies (no intersecting monitor, out-of-range candidate
//! geometry, absent preview surface) degrade to "no geometry change".

use log::{debug, trace};

use crate::config::AeroSnapConfig;
use crate::domain::geometry::{Direction, HDirection, Point, Rect, Size, VDirection};
use crate::domain::{planner, resolver};
use crate::engine::gesture::{MoveAction, MoveGesture, PointerSample, ResizeAction, ResizeGesture};
use crate::engine::preview::PreviewController;
use crate::engine::state::{DragAnchor, PreviousGeometry, WindowMode};
use crate::platform::{
    AnimationHint, Monitor, MonitorQuery, PointerDevice, PreviewSurface, WindowHandle,
};

/// Keyboard shortcut protocol (Win + arrow keys on the original host).
///
/// The host handles plain minimize/restore itself; the engine only covers
/// maximize, restore-from-maximized and left/right snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapShortcut {
    SnapLeft,
    SnapRight,
    /// Maximize a snapped window.
    ///
    /// Swallowed once after restoring a window that was snapped before it
    /// was minimized: some host versions emit a synthetic Up while
    /// un-minimizing, which would otherwise double-trigger maximize. The
    /// exact trigger condition is host-version dependent.
    RestoreUp,
    /// Minimize a snapped window.
    MinimizeDown,
}

/// The window-manipulation engine.
///
/// Owns the live window, the monitor query, the ghost preview and the
/// optional pointer/animation capabilities; nothing else writes the
/// window's or the preview's geometry. Hosts without cursor warping or an
/// iconify animation hook pass `()` for those collaborators.
pub struct SnapController<W, M, P, F, D = (), A = ()> {
    window: W,
    monitors: M,
    pointer: D,
    animation: A,
    make_preview: F,
    preview: PreviewController<P>,
    config: AeroSnapConfig,
    mode: WindowMode,
    minimized: bool,
    was_snapped_before_minimize: bool,
    prev: PreviousGeometry,
    anchor: DragAnchor,
}

impl<W, M, P, F, D, A> SnapController<W, M, P, F, D, A>
where
    W: WindowHandle,
    M: MonitorQuery,
    P: PreviewSurface,
    F: FnMut() -> P,
    D: PointerDevice,
    A: AnimationHint,
{
    /// Creates the engine around an owned window.
    ///
    /// `make_preview` builds a fresh ghost surface; it is invoked now if
    /// snapping starts enabled and again whenever snapping is re-enabled
    /// after being turned off.
    pub fn new(
        window: W,
        monitors: M,
        pointer: D,
        animation: A,
        config: AeroSnapConfig,
        mut make_preview: F,
    ) -> Self {
        let surface = if config.enabled {
            Some(make_preview())
        } else {
            None
        };

        Self {
            window,
            monitors,
            pointer,
            animation,
            make_preview,
            preview: PreviewController::new(surface),
            config,
            mode: WindowMode::Normal,
            minimized: false,
            was_snapped_before_minimize: false,
            prev: PreviousGeometry::new(),
            anchor: DragAnchor::default(),
        }
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    pub fn is_maximized(&self) -> bool {
        self.mode == WindowMode::Maximized
    }

    pub fn is_snapped(&self) -> bool {
        self.mode == WindowMode::Snapped
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn config(&self) -> &AeroSnapConfig {
        &self.config
    }

    pub fn preview(&self) -> &PreviewController<P> {
        &self.preview
    }

    // --- configuration -----------------------------------------------------

    /// Enables or disables snap docking.
    ///
    /// The ghost surface is created/destroyed together with the flag so
    /// it exists exactly while snapping is enabled.
    pub fn set_aero_snap_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        if enabled {
            if !self.preview.exists() {
                let surface = (self.make_preview)();
                self.preview.attach(surface);
            }
        } else {
            self.preview.detach();
        }
    }

    pub fn set_allowance(&mut self, allowance: f64) {
        self.config.allowance = allowance;
    }

    pub fn set_corner_allowance(&mut self, corner_allowance: f64) {
        self.config.corner_allowance = corner_allowance;
    }

    pub fn set_vertical_resize_snap(&mut self, enabled: bool) {
        self.config.vertical_resize_snap = enabled;
    }

    pub fn set_double_click_maximize(&mut self, enabled: bool) {
        self.config.double_click_maximize = enabled;
    }

    pub fn set_prevent_mouse_over_taskbar(&mut self, enabled: bool) {
        self.config.prevent_mouse_over_taskbar = enabled;
    }

    pub fn disable_direction(&mut self, direction: Direction) {
        self.config.disable_direction(direction);
    }

    pub fn enable_direction(&mut self, direction: Direction) {
        self.config.enable_direction(direction);
    }

    // --- maximize / minimize -----------------------------------------------

    /// Toggles between Maximized and the remembered Normal geometry.
    pub fn toggle_maximize(&mut self) {
        if self.mode == WindowMode::Maximized {
            self.restore_previous();
        } else {
            self.maximize();
        }
    }

    /// Minimizes or restores the window.
    ///
    /// Also the entry point for taskbar-driven iconify notifications: the
    /// wiring forwards the host's iconified transitions here so the
    /// snapped-before-minimize memory stays accurate.
    pub fn set_minimized(&mut self, minimized: bool) {
        if minimized && !self.minimized {
            self.was_snapped_before_minimize = self.mode == WindowMode::Snapped;
        }
        self.minimized = minimized;

        if minimized {
            self.animation.enable();
        } else {
            self.animation.disable();
        }
        self.window.set_iconified(minimized);
        debug!("minimized: {minimized}");
    }

    pub fn toggle_minimize(&mut self) {
        self.set_minimized(!self.minimized);
    }

    // --- move gesture ------------------------------------------------------

    /// Starts a move drag.
    ///
    /// `scene` is the press position relative to the window origin,
    /// `screen` the absolute press position, and `grip_height` the
    /// vertical extent of the move grip (the un-snap threshold while
    /// dragging a snapped window).
    pub fn begin_move_drag(&mut self, scene: Point, screen: Point, grip_height: f64) {
        let offset = if self.mode == WindowMode::Normal {
            self.prev.capture(&self.window);
            scene
        } else {
            // Rescale the grab point against the previous geometry so the
            // window stays under the cursor when it un-snaps mid-drag.
            let size = self.prev.size(&self.window);
            Point::new(
                size.width * (scene.x / self.window.width()),
                size.height * (scene.y / self.window.height()),
            )
        };

        self.anchor = DragAnchor {
            offset,
            press_x: screen.x,
            release_y: grip_height,
        };
        trace!("move drag began at {screen:?}");
    }

    /// Applies one move-drag sample.
    pub fn continue_move_drag(&mut self, screen: Point) {
        self.window.set_x(screen.x - self.anchor.offset.x);

        if self.mode == WindowMode::Maximized {
            // Un-maximize as soon as the drag starts; the window keeps
            // following the pointer at its previous size, with no
            // intermediate jump to the previous position.
            let size = self.prev.size(&self.window);
            self.window.set_width(size.width);
            self.window.set_height(size.height);
            self.was_snapped_before_minimize = false;
            self.mode = WindowMode::Normal;
            debug!("drag un-maximized");
        }

        if self.mode == WindowMode::Snapped {
            if screen.y > self.anchor.release_y {
                self.unsnap_to_previous_size();
            } else if let Some(monitor) = self.monitor_at(screen) {
                // Still attached: width is fixed, height tracks whichever
                // monitor the pointer is over.
                self.window.set_height(monitor.usable_bounds.h);
            }
        } else {
            self.window.set_y(screen.y - self.anchor.offset.y);
        }

        self.update_move_preview(screen);
    }

    /// Ends a move drag, committing a snap if one is being previewed.
    pub fn end_move_drag(&mut self, screen: Point) {
        match self.resolve_drop_target(screen) {
            Some((Direction::Top | Direction::Bottom, _)) => self.maximize(),
            Some((direction, rect)) => {
                self.apply_rect(rect);
                self.mode = WindowMode::Snapped;
                debug!("snapped {direction:?} to {rect:?}");
            }
            None => {}
        }

        // Hard invariant: no exit path may leave the ghost showing or the
        // always-on-top override set.
        self.preview.hide();
        self.window.set_always_on_top(false);
    }

    /// Double-click on the move grip: revert a snapped window, otherwise
    /// toggle maximize.
    pub fn double_click_move(&mut self) {
        if !self.config.double_click_maximize {
            return;
        }

        if self.mode == WindowMode::Snapped {
            let Some(monitor) = self.monitor_under_half() else {
                return;
            };
            let prev_size = self.prev.size(&self.window);
            let prev_pos = self.prev.pos(&self.window);
            let rect = planner::plan_revert(
                prev_pos,
                prev_size,
                monitor.usable_bounds,
                self.min_size(),
                self.max_size(),
            );
            self.apply_rect(rect);
            self.mode = WindowMode::Normal;
            debug!("double-click reverted to {rect:?}");
        } else {
            self.toggle_maximize();
        }
    }

    // --- resize gesture ----------------------------------------------------

    /// Starts a resize drag on the given edge or corner.
    pub fn begin_resize_drag(&mut self, direction: Direction) {
        if self.mode != WindowMode::Snapped {
            self.prev.capture(&self.window);
        }
        trace!("resize drag began on {direction:?}");
    }

    /// Applies one resize-drag sample.
    ///
    /// The candidate dimension is measured from the fixed edge opposite
    /// the dragged one and rejected as a silent no-op when non-positive or
    /// outside the window's min/max constraints.
    pub fn continue_resize_drag(&mut self, direction: Direction, scene: Point, screen: Point) {
        let width = self.window.width();
        let height = self.window.height();
        let Some(monitor) = self.monitor_under_half() else {
            return;
        };
        let bounds = monitor.usable_bounds;

        if self.config.prevent_mouse_over_taskbar {
            self.clamp_pointer(bounds, screen);
        }

        if let Some(h) = direction.horizontal() {
            let candidate = match h {
                HDirection::Left => width - screen.x + self.window.x(),
                HDirection::Right => scene.x,
            };

            if candidate <= 0.0
                || candidate < self.window.min_width()
                || candidate > self.window.max_width()
            {
                return;
            }

            match h {
                HDirection::Left => {
                    self.window.set_width(candidate);
                    self.window.set_x(screen.x);
                }
                HDirection::Right => self.window.set_width(candidate),
            }
        }

        if let Some(v) = direction.vertical() {
            // A snapped window whose horizontal span no longer touches a
            // monitor edge is just a window being resized: detach it.
            if self.mode == WindowMode::Snapped
                && !(self.window.x() <= bounds.x || self.window.x() + width >= bounds.right())
            {
                let size = self.prev.size(&self.window);
                self.window.set_height(size.height);
                self.mode = WindowMode::Normal;
                debug!("resize un-snapped");
            }

            let candidate = match v {
                VDirection::Top => height - screen.y + self.window.y(),
                VDirection::Bottom => scene.y,
            };

            if candidate <= 0.0
                || candidate < self.window.min_height()
                || candidate > self.window.max_height()
            {
                return;
            }

            match v {
                VDirection::Top => {
                    self.window.set_height(candidate);
                    self.window.set_y(screen.y);
                }
                VDirection::Bottom => self.window.set_height(candidate),
            }

            if self.config.enabled && self.config.vertical_resize_snap {
                if !self.vertical_snap_legal(bounds, v, screen) {
                    self.preview.hide();
                    self.window.set_always_on_top(false);
                    return;
                }

                let rect =
                    planner::plan_full_height(self.window.x(), self.window.width(), bounds);
                self.preview.show_at(rect);
                self.window.set_always_on_top(true);
            }
        }
    }

    /// Ends a resize drag, committing the full-height snap if the pointer
    /// is still against the monitor edge.
    pub fn end_resize_drag(&mut self, vertical: Option<VDirection>, screen: Point) {
        if let Some(v) = vertical {
            if self.config.vertical_resize_snap {
                if let Some(monitor) = self.monitor_at(screen) {
                    let bounds = monitor.usable_bounds;
                    if self.vertical_snap_legal(bounds, v, screen) {
                        self.window.set_y(bounds.y);
                        self.window.set_height(bounds.h);
                        self.mode = WindowMode::Snapped;
                        debug!("vertical resize snapped to full height");
                    }
                }
            }
        }

        self.preview.hide();
        self.window.set_always_on_top(false);
    }

    /// Double-click on a vertical resize handle: instant full-height
    /// toggle. Width and x never change.
    pub fn double_click_resize(&mut self, vertical: Option<VDirection>) {
        if vertical.is_none() {
            return;
        }

        if self.mode == WindowMode::Snapped {
            let size = self.prev.size(&self.window);
            let pos = self.prev.pos(&self.window);
            self.window.set_height(size.height);
            self.window.set_y(pos.y);
            self.mode = WindowMode::Normal;
        } else {
            let Some(monitor) = self.monitor_under_half() else {
                return;
            };
            let bounds = monitor.usable_bounds;
            self.prev
                .record_vertical(self.window.height(), self.window.y(), &self.window);
            self.window.set_height(bounds.h);
            self.window.set_y(bounds.y);
            self.mode = WindowMode::Snapped;
        }
    }

    // --- keyboard ----------------------------------------------------------

    /// Applies a keyboard shortcut.
    pub fn handle_shortcut(&mut self, shortcut: SnapShortcut) {
        match shortcut {
            SnapShortcut::SnapLeft => self.snap_half(HDirection::Left),
            SnapShortcut::SnapRight => self.snap_half(HDirection::Right),
            SnapShortcut::RestoreUp => {
                if self.mode == WindowMode::Snapped && !self.was_snapped_before_minimize {
                    self.toggle_maximize();
                }
                self.was_snapped_before_minimize = false;
            }
            SnapShortcut::MinimizeDown => {
                if self.mode == WindowMode::Snapped {
                    self.set_minimized(true);
                }
            }
        }
    }

    // --- gesture wiring ----------------------------------------------------

    /// Feeds a raw pointer sample through a move-gesture tracker.
    pub fn feed_move(&mut self, gesture: &mut MoveGesture, sample: PointerSample) {
        for action in gesture.feed(sample) {
            self.apply_move(action);
        }
    }

    /// Applies one move-gesture action.
    pub fn apply_move(&mut self, action: MoveAction) {
        match action {
            MoveAction::Begin {
                scene,
                screen,
                grip_height,
            } => self.begin_move_drag(scene, screen, grip_height),
            MoveAction::Drag { screen } => self.continue_move_drag(screen),
            MoveAction::Release { screen } => self.end_move_drag(screen),
            MoveAction::DoubleClick => self.double_click_move(),
        }
    }

    /// Feeds a raw pointer sample through a resize-gesture tracker.
    pub fn feed_resize(&mut self, gesture: &mut ResizeGesture, sample: PointerSample) {
        let direction = gesture.direction();
        for action in gesture.feed(sample) {
            self.apply_resize(direction, action);
        }
    }

    /// Applies one resize-gesture action for the given handle direction.
    pub fn apply_resize(&mut self, direction: Direction, action: ResizeAction) {
        match action {
            ResizeAction::Begin => self.begin_resize_drag(direction),
            ResizeAction::Resize { scene, screen } => {
                self.continue_resize_drag(direction, scene, screen)
            }
            ResizeAction::Release { screen } => {
                self.end_resize_drag(direction.vertical(), screen)
            }
            ResizeAction::DoubleClick => self.double_click_resize(direction.vertical()),
        }
    }

    // --- internals ---------------------------------------------------------

    fn restore_previous(&mut self) {
        let size = self.prev.size(&self.window);
        let pos = self.prev.pos(&self.window);
        self.window.set_width(size.width);
        self.window.set_height(size.height);
        self.window.set_x(pos.x);
        self.window.set_y(pos.y);
        self.was_snapped_before_minimize = false;
        self.mode = WindowMode::Normal;
        debug!("restored previous geometry");
    }

    fn maximize(&mut self) {
        let Some(monitor) = self.snap_target_monitor() else {
            return;
        };
        // A snapped window already carries its pre-snap memory; a fresh
        // snapshot here would overwrite it with tile geometry.
        if self.mode != WindowMode::Snapped {
            self.prev.capture(&self.window);
        }
        self.apply_rect(monitor.usable_bounds);
        self.mode = WindowMode::Maximized;
        debug!("maximized to {:?}", monitor.usable_bounds);
    }

    fn unsnap_to_previous_size(&mut self) {
        let size = self.prev.size(&self.window);
        self.window.set_width(size.width);
        self.window.set_height(size.height);
        self.mode = WindowMode::Normal;
        debug!("un-snapped to previous size");
    }

    fn snap_half(&mut self, side: HDirection) {
        // Both shortcuts share the Left guard: disabling Left turns off
        // keyboard snapping as a whole.
        if self.minimized || self.config.is_disabled(Direction::Left) {
            return;
        }
        let Some(monitor) = self.snap_target_monitor() else {
            return;
        };

        if self.mode != WindowMode::Snapped {
            self.prev.capture(&self.window);
        }
        if self.mode == WindowMode::Maximized {
            self.was_snapped_before_minimize = false;
        }

        let direction = match side {
            HDirection::Left => Direction::Left,
            HDirection::Right => Direction::Right,
        };
        let rect = planner::plan_snap(direction, monitor.usable_bounds, self.min_size());
        self.apply_rect(rect);
        self.mode = WindowMode::Snapped;
        debug!("keyboard snap {side:?} to {rect:?}");
    }

    fn update_move_preview(&mut self, screen: Point) {
        if !self.config.enabled {
            return;
        }
        let Some(monitor) = self.monitor_at(screen) else {
            return;
        };
        let bounds = monitor.usable_bounds;

        let direction = resolver::resolve(
            screen,
            bounds,
            self.config.allowance,
            self.config.corner_allowance,
        );

        if self.config.prevent_mouse_over_taskbar {
            self.clamp_pointer(bounds, screen);
        }

        match direction {
            Some(d) if !self.config.is_disabled(d) => {
                let rect = planner::plan_snap(d, bounds, self.min_size());
                self.preview.show_at(rect);
                // Raising the preview alone is unreliable on the host
                // toolkit; the override keeps the dragged window above it.
                self.window.set_always_on_top(true);
                trace!("previewing {d:?} at {rect:?}");
            }
            _ => {
                self.preview.hide();
                self.window.set_always_on_top(false);
            }
        }
    }

    fn resolve_drop_target(&self, screen: Point) -> Option<(Direction, Rect)> {
        if !self.config.enabled || screen.x == self.anchor.press_x {
            return None;
        }
        let monitor = self.monitor_at(screen)?;
        let bounds = monitor.usable_bounds;
        let direction = resolver::resolve(
            screen,
            bounds,
            self.config.allowance,
            self.config.corner_allowance,
        )?;
        if self.config.is_disabled(direction) {
            return None;
        }
        Some((direction, planner::plan_snap(direction, bounds, self.min_size())))
    }

    fn vertical_snap_legal(&self, bounds: Rect, v: VDirection, screen: Point) -> bool {
        match v {
            VDirection::Top => self.window.y() <= bounds.y + self.config.allowance,
            VDirection::Bottom => screen.y >= bounds.bottom() - self.config.allowance,
        }
    }

    /// Keeps the OS cursor inside the monitor's usable bounds.
    ///
    /// One synthetic move per sample, never retried.
    fn clamp_pointer(&mut self, bounds: Rect, screen: Point) {
        if screen.x >= bounds.right() || screen.y >= bounds.bottom() {
            let x = screen.x.min(bounds.right()) - 1.0;
            let y = screen.y.min(bounds.bottom()) - 1.0;
            self.pointer.move_to(x, y);
        }
    }

    fn apply_rect(&mut self, rect: Rect) {
        self.window.set_x(rect.x);
        self.window.set_y(rect.y);
        self.window.set_width(rect.w);
        self.window.set_height(rect.h);
    }

    fn half_footprint(&self) -> Rect {
        Rect::new(
            self.window.x(),
            self.window.y(),
            self.window.width() / 2.0,
            self.window.height() / 2.0,
        )
    }

    fn full_footprint(&self) -> Rect {
        Rect::new(
            self.window.x(),
            self.window.y(),
            self.window.width(),
            self.window.height(),
        )
    }

    fn monitor_under_half(&self) -> Option<Monitor> {
        self.monitors
            .monitors_intersecting(self.half_footprint())
            .into_iter()
            .next()
    }

    /// Half-footprint query first, then the full footprint; first monitor
    /// in adapter order wins.
    fn snap_target_monitor(&self) -> Option<Monitor> {
        self.monitor_under_half().or_else(|| {
            self.monitors
                .monitors_intersecting(self.full_footprint())
                .into_iter()
                .next()
        })
    }

    fn monitor_at(&self, p: Point) -> Option<Monitor> {
        self.monitors
            .monitors_intersecting(Rect::new(p.x, p.y, 1.0, 1.0))
            .into_iter()
            .next()
    }

    fn min_size(&self) -> Size {
        Size::new(self.window.min_width(), self.window.min_height())
    }

    fn max_size(&self) -> Size {
        Size::new(self.window.max_width(), self.window.max_height())
    }
}

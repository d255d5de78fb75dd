//! Platform-specific Windows implementations
//!
//! This module encapsulates all Win32 API interactions:
//! - Enumerating monitors and their work areas (excluding the taskbar)
//! - Warping the cursor to keep it out of reserved chrome
//! - Patching the window style so the native minimize animation plays
//!   for undecorated windows
//!
//! CRITICAL: this module must handle the Windows virtual coordinate
//! system where secondary monitors can have negative coordinates.

use windows::Win32::Foundation::*;
use windows::Win32::Graphics::Gdi::*;
use windows::Win32::UI::WindowsAndMessaging::*;

use crate::domain::geometry::Rect;
use crate::platform::{AnimationHint, Monitor, MonitorQuery, MonitorQueryError, PointerDevice};

/// Context for monitor enumeration callback
struct EnumContext {
    monitors: Vec<Monitor>,
}

/// Callback function for monitor enumeration
///
/// Continues enumeration even if an individual monitor fails to report
/// its info: partial data keeps the engine functional with problematic
/// drivers.
unsafe extern "system" fn enum_monitor_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _rect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    unsafe {
        let context = &mut *(lparam.0 as *mut EnumContext);

        let mut monitor_info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };

        if GetMonitorInfoW(hmonitor, &mut monitor_info) == FALSE {
            return TRUE;
        }

        let full = monitor_info.rcMonitor;
        let bounds = Rect::new(
            full.left as f64,
            full.top as f64,
            (full.right - full.left) as f64,
            (full.bottom - full.top) as f64,
        );

        let work = monitor_info.rcWork;
        let usable_bounds = Rect::new(
            work.left as f64,
            work.top as f64,
            (work.right - work.left) as f64,
            (work.bottom - work.top) as f64,
        );

        let is_primary = (monitor_info.dwFlags & 1) != 0; // MONITORINFOF_PRIMARY = 1

        context.monitors.push(Monitor {
            bounds,
            usable_bounds,
            is_primary,
        });

        TRUE // Continue enumeration
    }
}

/// Enumerates all monitors with their work areas, primary monitor first
pub fn enumerate_monitors() -> Result<Vec<Monitor>, MonitorQueryError> {
    let mut context = EnumContext {
        monitors: Vec::new(),
    };

    unsafe {
        if EnumDisplayMonitors(
            None,
            None,
            Some(enum_monitor_proc),
            LPARAM(&mut context as *mut _ as isize),
        ) == FALSE
        {
            return Err(MonitorQueryError::EnumerationFailed);
        }
    }

    if context.monitors.is_empty() {
        return Err(MonitorQueryError::NoMonitors);
    }

    // Primary first; the remaining order is whatever the host enumerated.
    context.monitors.sort_by_key(|m| !m.is_primary);

    Ok(context.monitors)
}

/// Monitor lookup backed by `EnumDisplayMonitors`.
///
/// Enumeration failures degrade to an empty set, which the engine treats
/// as "leave state unchanged".
#[derive(Debug, Default)]
pub struct Win32Monitors;

impl MonitorQuery for Win32Monitors {
    fn monitors_intersecting(&self, rect: Rect) -> Vec<Monitor> {
        match enumerate_monitors() {
            Ok(monitors) => monitors
                .into_iter()
                .filter(|m| m.bounds.intersects(&rect))
                .collect(),
            Err(err) => {
                log::warn!("monitor enumeration failed: {err}");
                Vec::new()
            }
        }
    }
}

/// Cursor warping via `SetCursorPos`.
#[derive(Debug, Default)]
pub struct Win32Pointer;

impl PointerDevice for Win32Pointer {
    fn move_to(&mut self, x: f64, y: f64) {
        // Failure here only means the cursor stays where it was.
        unsafe {
            let _ = SetCursorPos(x as i32, y as i32);
        }
    }
}

/// Minimize-animation hint for undecorated windows.
///
/// Undecorated windows lack `WS_MINIMIZEBOX`/`WS_CAPTION`, which disables
/// the native iconify animation and taskbar restore. Re-adding the styles
/// around the transition brings the animation back; the base style is
/// captured once so repeated toggles do not accumulate bits.
#[derive(Debug)]
pub struct Win32AnimationHint {
    hwnd: HWND,
    base_style: i32,
}

impl Win32AnimationHint {
    /// Captures the window's current style.
    ///
    /// `hwnd` is the raw window handle of the toolkit stage.
    pub fn new(hwnd: isize) -> Self {
        let hwnd = HWND(hwnd);
        let base_style = unsafe { GetWindowLongW(hwnd, GWL_STYLE) };
        Self { hwnd, base_style }
    }
}

impl AnimationHint for Win32AnimationHint {
    fn enable(&mut self) {
        let style =
            self.base_style | (WS_MINIMIZEBOX.0 | WS_SYSMENU.0 | WS_CAPTION.0) as i32;
        unsafe {
            SetWindowLongW(self.hwnd, GWL_STYLE, style);
        }
    }

    fn disable(&mut self) {
        let style = self.base_style | WS_MINIMIZEBOX.0 as i32;
        unsafe {
            SetWindowLongW(self.hwnd, GWL_STYLE, style);
        }
    }
}

//! Control panel window for Windows.
//!
//! Shape radio buttons, a size slider and a color slider. Controls do not
//! touch state; they publish `AppEvent`s and the dispatcher applies them.
//! The panel window also receives `WM_HOTKEY` and is the window whose
//! closing ends the program.

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, HBRUSH, WHITE_BRUSH};
use windows::Win32::UI::Controls::{InitCommonControlsEx, ICC_BAR_CLASSES, INITCOMMONCONTROLSEX};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, GetDlgCtrlID, GetWindowLongPtrW, LoadCursorW,
    RegisterClassW, SendMessageW, SetWindowLongPtrW, SetWindowTextW, CS_HREDRAW, CS_VREDRAW,
    CW_USEDEFAULT, GWLP_USERDATA, HMENU, IDC_ARROW, WINDOW_EX_STYLE, WINDOW_STYLE, WM_CLOSE,
    WM_COMMAND, WM_DESTROY, WM_HOTKEY, WM_HSCROLL, WNDCLASSW, WS_CAPTION, WS_CHILD, WS_GROUP,
    WS_MINIMIZEBOX, WS_OVERLAPPED, WS_SYSMENU, WS_TABSTOP, WS_VISIBLE,
};

use super::super::wide;
use crate::error::PlatformError;
use crate::events::{self, AppEvent};
use crate::model::constants::{
    HOTKEY_TOGGLE_OVERLAY, HOTKEY_TOGGLE_PANEL, MAX_SLIDER_SIZE, MIN_SIZE,
};
use crate::model::palette::{self, MAX_COLOR_INDEX};
use crate::model::{OverlayState, Shape};
use crate::platform::windows::input::event_for_hotkey;

// Control IDs
const ID_SHAPE_FIRST: i32 = 201;
const ID_SIZE_SLIDER: i32 = 301;
const ID_SIZE_VALUE: i32 = 302;
const ID_COLOR_SLIDER: i32 = 303;
const ID_COLOR_VALUE: i32 = 304;

// Button styles and messages (from winuser.h)
const BS_AUTORADIOBUTTON: u32 = 0x0009;
const BM_SETCHECK: u32 = 0x00F1;
const BST_CHECKED: usize = 1;
const BN_CLICKED: u32 = 0;

// Trackbar messages (from commctrl.h)
const TBM_SETRANGE: u32 = 0x0406;
const TBM_SETPOS: u32 = 0x0405;
const TBM_GETPOS: u32 = 0x0400;

// Window dimensions
const WINDOW_WIDTH: i32 = 380;
const WINDOW_HEIGHT: i32 = 250;

// Layout constants
const MARGIN: i32 = 20;
const ROW_HEIGHT: i32 = 40;
const LABEL_WIDTH: i32 = 60;
const VALUE_WIDTH: i32 = 90;
const SLIDER_WIDTH: i32 = 170;
const RADIO_WIDTH: i32 = 80;

/// Create the control panel, with controls showing `state`. Starts hidden.
pub fn create_panel_window(
    instance: HINSTANCE,
    state: &OverlayState,
) -> Result<HWND, PlatformError> {
    let class_name = w!("ReticlePanel");

    unsafe {
        let icc = INITCOMMONCONTROLSEX {
            dwSize: std::mem::size_of::<INITCOMMONCONTROLSEX>() as u32,
            dwICC: ICC_BAR_CLASSES,
        };
        let _ = InitCommonControlsEx(&icc);

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(panel_wnd_proc),
            hInstance: instance,
            hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
            hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
            lpszClassName: class_name,
            ..Default::default()
        };
        if RegisterClassW(&wc) == 0 {
            return Err(PlatformError::call("RegisterClassW", "panel class"));
        }

        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("Crosshair Settings"),
            WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_MINIMIZEBOX,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            None,
            None,
            Some(instance),
            None,
        )
        .map_err(|e| PlatformError::call("CreateWindowExW", e))?;

        create_controls(hwnd, instance, state);
        Ok(hwnd)
    }
}

unsafe extern "system" fn panel_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_COMMAND => {
            let control_id = (wparam.0 & 0xFFFF) as i32;
            let notification = ((wparam.0 >> 16) & 0xFFFF) as u32;
            if notification == BN_CLICKED {
                if let Some(shape) = shape_for_control(control_id) {
                    events::publish(AppEvent::SetShape(shape));
                }
            }
            LRESULT(0)
        }

        WM_HSCROLL => {
            let slider_hwnd = HWND(lparam.0 as *mut _);
            handle_slider_change(slider_hwnd);
            LRESULT(0)
        }

        WM_HOTKEY => {
            if let Some(event) = event_for_hotkey(wparam.0 as i32) {
                events::publish(event);
            }
            LRESULT(0)
        }

        // Destruction is the dispatcher's call, after hooks are released
        WM_CLOSE => {
            events::publish(AppEvent::PanelClosed);
            LRESULT(0)
        }

        WM_DESTROY => LRESULT(0),

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

fn shape_for_control(control_id: i32) -> Option<Shape> {
    let index = usize::try_from(control_id - ID_SHAPE_FIRST).ok()?;
    Shape::ALL.get(index).copied()
}

unsafe fn create_controls(hwnd: HWND, hinstance: HINSTANCE, state: &OverlayState) {
    let mut y = MARGIN;

    // Shape row
    for (i, shape) in Shape::ALL.iter().enumerate() {
        let mut style = WS_CHILD | WS_VISIBLE | WS_TABSTOP | WINDOW_STYLE(BS_AUTORADIOBUTTON);
        if i == 0 {
            style |= WS_GROUP;
        }
        let radio = create_control(
            hwnd,
            hinstance,
            w!("BUTTON"),
            shape.label(),
            style,
            (MARGIN + i as i32 * RADIO_WIDTH, y, RADIO_WIDTH, 24),
            ID_SHAPE_FIRST + i as i32,
        );
        if *shape == state.shape {
            SendMessageW(radio, BM_SETCHECK, Some(WPARAM(BST_CHECKED)), None);
        }
    }

    y += ROW_HEIGHT;

    // Size row
    create_label(hwnd, hinstance, MARGIN, y, "Size");
    let size_value = create_value_label(hwnd, hinstance, y, ID_SIZE_VALUE);
    set_value_text(size_value, &format!("{} px", state.size()));
    let size_slider = create_slider(hwnd, hinstance, y, ID_SIZE_SLIDER);
    init_slider(
        size_slider,
        MIN_SIZE as i32,
        MAX_SLIDER_SIZE as i32,
        state.size().min(MAX_SLIDER_SIZE) as i32,
    );
    SetWindowLongPtrW(size_slider, GWLP_USERDATA, size_value.0 as isize);

    y += ROW_HEIGHT;

    // Color row
    create_label(hwnd, hinstance, MARGIN, y, "Color");
    let color_value = create_value_label(hwnd, hinstance, y, ID_COLOR_VALUE);
    set_value_text(color_value, color_name(state.color_index()));
    let color_slider = create_slider(hwnd, hinstance, y, ID_COLOR_SLIDER);
    init_slider(
        color_slider,
        0,
        MAX_COLOR_INDEX as i32,
        state.color_index() as i32,
    );
    SetWindowLongPtrW(color_slider, GWLP_USERDATA, color_value.0 as isize);

    y += ROW_HEIGHT;

    // Shortcut hints
    let hints = [
        format!("{}: show/hide crosshair", HOTKEY_TOGGLE_OVERLAY.label()),
        format!("{}: show/hide this panel", HOTKEY_TOGGLE_PANEL.label()),
        "Ctrl+drag on crosshair: resize".to_string(),
    ];
    for hint in &hints {
        create_control(
            hwnd,
            hinstance,
            w!("STATIC"),
            hint,
            WS_CHILD | WS_VISIBLE,
            (MARGIN, y, WINDOW_WIDTH - 2 * MARGIN, 18),
            0,
        );
        y += 18;
    }
}

fn color_name(index: usize) -> &'static str {
    palette::entry(index).map_or("?", |entry| entry.name)
}

unsafe fn create_control(
    parent: HWND,
    hinstance: HINSTANCE,
    class: PCWSTR,
    text: &str,
    style: WINDOW_STYLE,
    (x, y, width, height): (i32, i32, i32, i32),
    id: i32,
) -> HWND {
    let text_wide = wide(text);
    CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        class,
        PCWSTR(text_wide.as_ptr()),
        style,
        x,
        y,
        width,
        height,
        Some(parent),
        Some(HMENU(id as isize as *mut _)),
        Some(hinstance),
        None,
    )
    .unwrap_or_default()
}

unsafe fn create_label(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, text: &str) {
    create_control(
        hwnd,
        hinstance,
        w!("STATIC"),
        text,
        WS_CHILD | WS_VISIBLE,
        (x, y + 4, LABEL_WIDTH, 20),
        0,
    );
}

unsafe fn create_value_label(hwnd: HWND, hinstance: HINSTANCE, y: i32, id: i32) -> HWND {
    create_control(
        hwnd,
        hinstance,
        w!("STATIC"),
        "",
        WS_CHILD | WS_VISIBLE | WINDOW_STYLE(0x0001), // SS_CENTER
        (MARGIN + LABEL_WIDTH, y + 4, VALUE_WIDTH, 20),
        id,
    )
}

unsafe fn create_slider(hwnd: HWND, hinstance: HINSTANCE, y: i32, id: i32) -> HWND {
    create_control(
        hwnd,
        hinstance,
        w!("msctls_trackbar32"),
        "",
        WS_CHILD | WS_VISIBLE | WS_TABSTOP,
        (MARGIN + LABEL_WIDTH + VALUE_WIDTH + 10, y, SLIDER_WIDTH, 28),
        id,
    )
}

unsafe fn init_slider(slider: HWND, min: i32, max: i32, pos: i32) {
    let range = ((max as isize) << 16) | (min as isize);
    SendMessageW(slider, TBM_SETRANGE, Some(WPARAM(1)), Some(LPARAM(range)));
    SendMessageW(
        slider,
        TBM_SETPOS,
        Some(WPARAM(1)),
        Some(LPARAM(pos as isize)),
    );
}

unsafe fn set_value_text(hwnd: HWND, text: &str) {
    let text_wide = wide(text);
    let _ = SetWindowTextW(hwnd, PCWSTR(text_wide.as_ptr()));
}

unsafe fn handle_slider_change(slider_hwnd: HWND) {
    let control_id = GetDlgCtrlID(slider_hwnd);
    let pos = SendMessageW(slider_hwnd, TBM_GETPOS, None, None).0;
    let value_hwnd = HWND(GetWindowLongPtrW(slider_hwnd, GWLP_USERDATA) as *mut _);

    let (text, event) = match control_id {
        ID_SIZE_SLIDER => {
            let size = u32::try_from(pos).unwrap_or(MIN_SIZE);
            (format!("{} px", size), AppEvent::SetSize(size))
        }
        ID_COLOR_SLIDER => {
            let index = usize::try_from(pos).unwrap_or(0);
            (color_name(index).to_string(), AppEvent::SetColorIndex(index))
        }
        _ => return,
    };

    if !value_hwnd.is_invalid() {
        set_value_text(value_hwnd, &text);
    }
    events::publish(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radio_ids_map_to_shapes_in_panel_order() {
        for (i, shape) in Shape::ALL.iter().enumerate() {
            assert_eq!(shape_for_control(ID_SHAPE_FIRST + i as i32), Some(*shape));
        }
        assert_eq!(shape_for_control(ID_SHAPE_FIRST - 1), None);
        assert_eq!(shape_for_control(ID_SHAPE_FIRST + 4), None);
    }
}

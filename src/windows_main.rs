//! Windows entry point: window setup and the message loop.

use windows::Win32::Foundation::HINSTANCE;
use windows::Win32::Graphics::Direct2D::{
    D2D1CreateFactory, ID2D1Factory, D2D1_FACTORY_TYPE_SINGLE_THREADED,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, TranslateMessage, MSG,
};

use reticle::error::{AppError, PlatformError};
use reticle::events;
use reticle::handlers::{Dispatcher, Flow, WindowBackend};
use reticle::platform::apply_overlay_styles;
use reticle::platform::windows::input::{install_mouse_hook, register_hotkeys};
use reticle::platform::windows::system;
use reticle::platform::windows::ui::{create_overlay_window, create_panel_window};
use reticle::platform::windows::{Win32Backend, Win32Styler};

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        log::error!("reticle: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<(), AppError> {
    system::enable_dpi_awareness();
    events::init_event_bus()?;

    let factory: ID2D1Factory =
        unsafe { D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None) }
            .map_err(|e| PlatformError::call("D2D1CreateFactory", e))?;
    let instance: HINSTANCE = unsafe { GetModuleHandleW(None) }
        .map_err(|e| PlatformError::call("GetModuleHandleW", e))?
        .into();

    let center = system::primary_screen_center()?;
    let mut dispatcher = Dispatcher::new(center);
    let frame = dispatcher.overlay_frame();

    let overlay = create_overlay_window(instance, frame)?;
    let styles = apply_overlay_styles(&Win32Styler, overlay);
    log::debug!("overlay styles applied: {:?}", styles);

    let panel = create_panel_window(instance, dispatcher.state())?;

    let mut backend = Win32Backend::new(overlay, panel, factory, frame);
    backend.hotkeys = register_hotkeys(panel);
    match install_mouse_hook() {
        Ok(hook) => backend.mouse_hook = Some(hook),
        Err(e) => log::warn!("Ctrl+drag resize unavailable: {}", e),
    }

    dispatcher.start(&mut backend);
    system::move_cursor_to(center);

    // Message loop; the event queue is drained after every message
    let mut running = true;
    let mut msg = MSG::default();
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);

            let pending = events::drain_events();
            if running && dispatcher.dispatch_all(pending, &mut backend) == Flow::Exit {
                running = false;
            }
        }
    }

    // WM_QUIT from elsewhere skips the dispatcher's shutdown path
    if running {
        backend.release_global_hooks();
        backend.close_overlay();
    }

    log::info!("bye");
    Ok(())
}

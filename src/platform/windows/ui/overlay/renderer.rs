//! Direct2D overlay rendering.
//!
//! Anti-aliased rendering with per-pixel alpha transparency via
//! UpdateLayeredWindow. The scene is drawn into a top-down ARGB DIB the size
//! of the overlay frame, then pushed to the layered window in one call,
//! which also moves the window to the frame's origin.

use windows::Win32::Foundation::{COLORREF, HWND, POINT, RECT, SIZE};
use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_ALPHA_MODE_PREMULTIPLIED, D2D1_COLOR_F, D2D1_FIGURE_BEGIN_HOLLOW, D2D1_FIGURE_END_CLOSED,
    D2D1_PIXEL_FORMAT, D2D_RECT_F,
};
use windows::Win32::Graphics::Direct2D::{
    ID2D1DCRenderTarget, ID2D1Factory, ID2D1PathGeometry, ID2D1RenderTarget,
    ID2D1SolidColorBrush, ID2D1StrokeStyle, D2D1_ANTIALIAS_MODE_PER_PRIMITIVE,
    D2D1_CAP_STYLE_ROUND, D2D1_DASH_STYLE_SOLID, D2D1_ELLIPSE, D2D1_LINE_JOIN_ROUND,
    D2D1_RENDER_TARGET_PROPERTIES, D2D1_RENDER_TARGET_TYPE_DEFAULT,
    D2D1_RENDER_TARGET_USAGE_NONE, D2D1_STROKE_STYLE_PROPERTIES,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_B8G8R8A8_UNORM;
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
    BITMAPINFO, BITMAPINFOHEADER, BI_RGB, BLENDFUNCTION, DIB_RGB_COLORS,
};
use windows::Win32::UI::WindowsAndMessaging::{UpdateLayeredWindow, ULW_ALPHA};
use windows_numerics::Vector2;

use crate::error::PlatformError;
use crate::overlay::{DrawCommand, Point, Rect, Scene};

fn v2(p: Point) -> Vector2 {
    Vector2::new(p.x as f32, p.y as f32)
}

fn rect_f(r: Rect) -> D2D_RECT_F {
    D2D_RECT_F {
        left: r.x as f32,
        top: r.y as f32,
        right: r.right() as f32,
        bottom: r.bottom() as f32,
    }
}

/// Draw `scene` into the layered window `hwnd`, placed at `frame`.
pub fn update_overlay(
    hwnd: HWND,
    factory: &ID2D1Factory,
    frame: Rect,
    scene: &Scene,
) -> Result<(), PlatformError> {
    unsafe { update_layered_window_d2d(hwnd, factory, frame, scene) }
}

unsafe fn update_layered_window_d2d(
    hwnd: HWND,
    factory: &ID2D1Factory,
    frame: Rect,
    scene: &Scene,
) -> Result<(), PlatformError> {
    let width = frame.width;
    let height = frame.height;

    // Create a compatible DC and ARGB bitmap
    let screen_dc = GetDC(None);
    let mem_dc = CreateCompatibleDC(Some(screen_dc));

    let bmi = BITMAPINFO {
        bmiHeader: BITMAPINFOHEADER {
            biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
            biWidth: width,
            biHeight: -height, // Top-down
            biPlanes: 1,
            biBitCount: 32,
            biCompression: BI_RGB.0,
            ..Default::default()
        },
        ..Default::default()
    };

    let mut bits: *mut std::ffi::c_void = std::ptr::null_mut();
    let bitmap = match CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0) {
        Ok(bitmap) if !bits.is_null() => bitmap,
        Ok(bitmap) => {
            let _ = DeleteObject(bitmap.into());
            ReleaseDC(None, screen_dc);
            let _ = DeleteDC(mem_dc);
            return Err(PlatformError::call("CreateDIBSection", "no pixel buffer"));
        }
        Err(e) => {
            ReleaseDC(None, screen_dc);
            let _ = DeleteDC(mem_dc);
            return Err(PlatformError::call("CreateDIBSection", e));
        }
    };
    let old_bitmap = SelectObject(mem_dc, bitmap.into());

    let drawn = draw_scene(factory, mem_dc, width, height, scene);

    // Apply to window
    let pt_src = POINT { x: 0, y: 0 };
    let size = SIZE {
        cx: width,
        cy: height,
    };
    let pt_dst = POINT {
        x: frame.x,
        y: frame.y,
    };

    let blend = BLENDFUNCTION {
        BlendOp: 0,
        BlendFlags: 0,
        SourceConstantAlpha: 255,
        AlphaFormat: 1,
    };

    let updated = UpdateLayeredWindow(
        hwnd,
        Some(screen_dc),
        Some(&pt_dst),
        Some(&size),
        Some(mem_dc),
        Some(&pt_src),
        COLORREF(0),
        Some(&blend),
        ULW_ALPHA,
    )
    .map_err(|e| PlatformError::call("UpdateLayeredWindow", e));

    // Cleanup
    SelectObject(mem_dc, old_bitmap);
    let _ = DeleteObject(bitmap.into());
    let _ = DeleteDC(mem_dc);
    ReleaseDC(None, screen_dc);

    drawn.and(updated)
}

unsafe fn draw_scene(
    factory: &ID2D1Factory,
    mem_dc: windows::Win32::Graphics::Gdi::HDC,
    width: i32,
    height: i32,
    scene: &Scene,
) -> Result<(), PlatformError> {
    let rt_props = D2D1_RENDER_TARGET_PROPERTIES {
        r#type: D2D1_RENDER_TARGET_TYPE_DEFAULT,
        pixelFormat: D2D1_PIXEL_FORMAT {
            format: DXGI_FORMAT_B8G8R8A8_UNORM,
            alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED,
        },
        dpiX: 96.0,
        dpiY: 96.0,
        usage: D2D1_RENDER_TARGET_USAGE_NONE,
        minLevel: Default::default(),
    };

    let dc_rt: ID2D1DCRenderTarget = factory
        .CreateDCRenderTarget(&rt_props)
        .map_err(|e| PlatformError::call("CreateDCRenderTarget", e))?;

    let rect = RECT {
        left: 0,
        top: 0,
        right: width,
        bottom: height,
    };
    dc_rt
        .BindDC(mem_dc, &rect)
        .map_err(|e| PlatformError::call("BindDC", e))?;

    let rt: ID2D1RenderTarget = dc_rt.into();

    rt.BeginDraw();

    // Clear to transparent
    rt.Clear(Some(&D2D1_COLOR_F {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    }));

    if !scene.is_blank() {
        rt.SetAntialiasMode(D2D1_ANTIALIAS_MODE_PER_PRIMITIVE);

        let stroke_props = D2D1_STROKE_STYLE_PROPERTIES {
            startCap: D2D1_CAP_STYLE_ROUND,
            endCap: D2D1_CAP_STYLE_ROUND,
            dashCap: D2D1_CAP_STYLE_ROUND,
            lineJoin: D2D1_LINE_JOIN_ROUND,
            miterLimit: 1.0,
            dashStyle: D2D1_DASH_STYLE_SOLID,
            dashOffset: 0.0,
        };
        let stroke_style: Option<ID2D1StrokeStyle> =
            factory.CreateStrokeStyle(&stroke_props, None).ok();

        let (r, g, b) = scene.color.to_unit();
        let color = D2D1_COLOR_F { r, g, b, a: 1.0 };

        if let Ok(brush) = rt.CreateSolidColorBrush(&color, None) {
            for command in &scene.commands {
                draw_command(factory, &rt, &brush, stroke_style.as_ref(), scene.pen_width, command);
            }
        }
    }

    rt.EndDraw(None, None)
        .map_err(|e| PlatformError::call("EndDraw", e))
}

unsafe fn draw_command(
    factory: &ID2D1Factory,
    rt: &ID2D1RenderTarget,
    brush: &ID2D1SolidColorBrush,
    stroke_style: Option<&ID2D1StrokeStyle>,
    pen_width: f32,
    command: &DrawCommand,
) {
    match command {
        DrawCommand::Ellipse { bounds } => {
            let ellipse = D2D1_ELLIPSE {
                point: Vector2::new(
                    bounds.x as f32 + bounds.width as f32 / 2.0,
                    bounds.y as f32 + bounds.height as f32 / 2.0,
                ),
                radiusX: bounds.width as f32 / 2.0,
                radiusY: bounds.height as f32 / 2.0,
            };
            rt.DrawEllipse(&ellipse, brush, pen_width, stroke_style);
        }
        DrawCommand::Rectangle { bounds } => {
            rt.DrawRectangle(&rect_f(*bounds), brush, pen_width, stroke_style);
        }
        DrawCommand::Line { from, to } => {
            rt.DrawLine(v2(*from), v2(*to), brush, pen_width, stroke_style);
        }
        DrawCommand::Polygon { points } => match polygon_geometry(factory, points) {
            Some(geometry) => rt.DrawGeometry(&geometry, brush, pen_width, stroke_style),
            None => log::debug!("skipping polygon with {} points", points.len()),
        },
    }
}

/// Closed, unfilled path through `points`.
unsafe fn polygon_geometry(factory: &ID2D1Factory, points: &[Point]) -> Option<ID2D1PathGeometry> {
    let (first, rest) = points.split_first()?;
    let geometry: ID2D1PathGeometry = factory.CreatePathGeometry().ok()?;
    let sink = geometry.Open().ok()?;

    sink.BeginFigure(v2(*first), D2D1_FIGURE_BEGIN_HOLLOW);
    let rest: Vec<Vector2> = rest.iter().copied().map(v2).collect();
    sink.AddLines(&rest);
    sink.EndFigure(D2D1_FIGURE_END_CLOSED);
    sink.Close().ok()?;

    Some(geometry)
}

use glam::Vec2;
use stardust_core::DemoKind;

/// Pointer position in canvas backing pixels plus the press state.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

impl PointerState {
    pub fn press(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.down = true;
    }

    pub fn release(&mut self) {
        self.down = false;
    }

    /// Move to `(x, y)`; returns the drag delta while pressed.
    pub fn move_to(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let delta = Vec2::new(x - self.x, y - self.y);
        self.x = x;
        self.y = y;
        self.down.then_some(delta)
    }
}

/// Client (CSS px) to canvas backing pixels.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing: (u32, u32),
) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let css = client - rect_origin;
    Vec2::new(
        css.x / rect_size.x * backing.0 as f32,
        css.y / rect_size.y * backing.1 as f32,
    )
}

/// Cursor in -0.5..0.5 on both axes, y down; the centre when the viewport
/// is degenerate.
#[inline]
pub fn cursor_centered(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (x / width - 0.5).clamp(-0.5, 0.5),
        (y / height - 0.5).clamp(-0.5, 0.5),
    )
}

/// Zoom steps for a wheel event; wheel up (negative delta) zooms in.
/// `delta_mode` follows `WheelEvent.deltaMode`: 0 pixels, 1 lines, 2 pages.
#[inline]
pub fn wheel_steps(delta_y: f64, delta_mode: u32) -> f32 {
    let lines = match delta_mode {
        0 => delta_y / 100.0,
        1 => delta_y / 3.0,
        _ => delta_y * 3.0,
    };
    -(lines as f32)
}

/// `?a=1&b=%23ff0000` into decoded pairs. Entries without `=` are dropped.
pub fn query_pairs(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|part| {
            let (k, v) = part.split_once('=')?;
            let k = percent_decode(k);
            (!k.is_empty()).then(|| (k, percent_decode(v)))
        })
        .collect()
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
                match hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                    Some(b) => {
                        out.push(b);
                        i += 2;
                    }
                    None => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Demo from the `demo` query value, else the canvas `data-demo`
/// attribute, else the galaxy. Unknown names are logged and skipped.
pub fn pick_demo(query: Option<&str>, data_attr: Option<&str>) -> DemoKind {
    for name in [query, data_attr].into_iter().flatten() {
        match name.parse::<DemoKind>() {
            Ok(kind) => return kind,
            Err(e) => log::warn!("{}", e),
        }
    }
    DemoKind::default()
}

/// Query pairs that are front-end settings rather than parameter overrides.
pub const RESERVED_KEYS: [&str; 2] = ["demo", "seed"];

#[inline]
pub fn is_override(key: &str) -> bool {
    !RESERVED_KEYS.contains(&key)
}

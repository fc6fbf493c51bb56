use stardust_core::{split_pair, DemoKind};

/// Pixels scrolled per wheel line.
pub const LINE_PX: f32 = 60.0;

/// `stardust-native [demo] [seed=N] [key=value ...]`
#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub kind: DemoKind,
    pub seed: Option<u64>,
    pub overrides: Vec<(String, String)>,
}

pub fn parse_args<I, S>(args: I) -> CliArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = CliArgs::default();
    for arg in args {
        let arg = arg.as_ref();
        match split_pair(arg) {
            Some(("seed", v)) => match v.parse::<u64>() {
                Ok(seed) => out.seed = Some(seed),
                Err(_) => log::warn!("ignoring unparsable seed `{}`", v),
            },
            Some((k, v)) => out.overrides.push((k.to_string(), v.to_string())),
            None => match arg.parse::<DemoKind>() {
                Ok(kind) => out.kind = kind,
                Err(e) => log::warn!("{}", e),
            },
        }
    }
    out
}

/// Window-relative cursor in -0.5..0.5, y down.
#[inline]
pub fn normalized_cursor(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (x / width - 0.5).clamp(-0.5, 0.5),
        (y / height - 0.5).clamp(-0.5, 0.5),
    )
}

/// Stand-in for page scrolling in the scroll demo: the wheel moves a
/// pixel offset bounded by `sections` viewports.
#[derive(Debug, Default, Clone, Copy)]
pub struct VirtualScroll {
    offset: f32,
}

impl VirtualScroll {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Wheel lines follow winit's sign: positive scrolls up the page.
    pub fn scroll_lines(&mut self, lines: f32, viewport_height: f32, sections: usize) -> f32 {
        self.scroll_px(-lines * LINE_PX, viewport_height, sections)
    }

    pub fn scroll_px(&mut self, delta: f32, viewport_height: f32, sections: usize) -> f32 {
        let max = viewport_height.max(0.0) * sections.saturating_sub(1) as f32;
        self.offset = (self.offset + delta).clamp(0.0, max);
        self.offset
    }
}

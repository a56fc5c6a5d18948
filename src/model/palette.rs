//! The fixed color palette selectable from the control panel.

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components normalised to [0.0, 1.0], as Direct2D expects them.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A palette entry with the name the panel shows for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: Rgb,
}

/// Ordered palette; the color slider selects an index into it.
pub const PALETTE: [PaletteEntry; 8] = [
    PaletteEntry {
        name: "Light blue",
        color: Rgb::new(0, 255, 255),
    },
    PaletteEntry {
        name: "Dark blue",
        color: Rgb::new(0, 0, 255),
    },
    PaletteEntry {
        name: "Light purple",
        color: Rgb::new(255, 0, 255),
    },
    PaletteEntry {
        name: "Dark purple",
        color: Rgb::new(128, 0, 128),
    },
    PaletteEntry {
        name: "Neon yellow",
        color: Rgb::new(255, 255, 0),
    },
    PaletteEntry {
        name: "Neon green",
        color: Rgb::new(0, 255, 0),
    },
    PaletteEntry {
        name: "Black",
        color: Rgb::new(0, 0, 0),
    },
    PaletteEntry {
        name: "White",
        color: Rgb::new(255, 255, 255),
    },
];

/// Highest valid palette index.
pub const MAX_COLOR_INDEX: usize = PALETTE.len() - 1;

/// Look up a palette entry; `None` when `index` is out of range.
pub fn entry(index: usize) -> Option<&'static PaletteEntry> {
    PALETTE.get(index)
}

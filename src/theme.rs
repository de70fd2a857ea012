//! Theme tokens.
//!
//! The utility-CSS palette and font stacks, ported as plain data. A build
//! step can serialize this to feed a stylesheet generator; there is no
//! logic here.

use serde::Serialize;

/// The full theme: font stacks plus color palette.
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub fonts: FontStacks,
    pub palette: Palette,
}

/// Font stacks for body and heading text.
#[derive(Debug, Clone, Serialize)]
pub struct FontStacks {
    pub sans: [&'static str; 2],
    pub heading: [&'static str; 2],
}

/// Named colors. `grey` is a three-step ramp from lightest to darkest.
#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    pub turq: &'static str,
    pub white: &'static str,
    pub black: &'static str,
    pub grey: [&'static str; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fonts: FontStacks {
                sans: ["'Inter'", "sans-serif"],
                heading: ["'Inter'", "sans-serif"],
            },
            palette: Palette {
                turq: "#2BCBBA",
                white: "#ffffff",
                black: "#000000",
                grey: ["#f2f3f6", "#778CA34D", "#A5B1C2"],
            },
        }
    }
}

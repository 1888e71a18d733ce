//! Theme configuration for the desktop app

/// Color palette for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_tertiary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub border_light: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub overlay: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f5f5f5",
    bg_tertiary: "#ebebeb",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    border_light: "#e8eaed",
    accent: "#5183f5",
    accent_text: "#ffffff",
    error: "#dc2626",
    overlay: "rgba(0, 0, 0, 0.35)",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1f1f1f",
    bg_secondary: "#171717",
    bg_tertiary: "#2d2d2d",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    text_muted: "#5f6368",
    border: "#333333",
    border_light: "#2a2a2a",
    accent: "#6d96f7",
    accent_text: "#111111",
    error: "#f87171",
    overlay: "rgba(0, 0, 0, 0.6)",
};

/// Palette for the given dark theme setting
#[must_use]
pub const fn palette(dark: bool) -> &'static ColorPalette {
    if dark {
        &DARK_PALETTE
    } else {
        &LIGHT_PALETTE
    }
}

//! Fixed metrics and widget defaults.
//!
//! The binding table exposes no way to change these; they live in one place
//! so layout, style and tests read the same numbers.

use crate::types::{Color, Shadow};

/// Environment variable holding the `tracing` filter directive.
pub const LOG_FILTER_ENV: &str = "FLEX_BRIDGE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    // Linear layout
    pub linear_spacing: f32,
    pub linear_padding: f32,

    // Button
    pub button_height: f32,
    pub button_padding_horizontal: f32,
    pub button_corner_radius: f32,
    pub button_fill: Color,
    pub button_title_color: Color,

    // Image
    pub image_size: f32,

    // Card skin
    pub card_corner_radius: f32,
    pub card_fill: Color,
    pub card_shadow: Shadow,

    // Intrinsic metrics
    pub glyph_width: f32,
    pub line_height: f32,
    pub switch_width: f32,
    pub switch_height: f32,
    pub symbol_size: f32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            linear_spacing: 10.0,
            linear_padding: 10.0,

            button_height: 44.0,
            button_padding_horizontal: 20.0,
            button_corner_radius: 8.0,
            button_fill: Color::SYSTEM_BLUE,
            button_title_color: Color::WHITE,

            image_size: 50.0,

            card_corner_radius: 12.0,
            card_fill: Color::WHITE,
            card_shadow: Shadow {
                color: Color::BLACK,
                opacity: 0.1,
                offset_x: 0.0,
                offset_y: 4.0,
                radius: 8.0,
            },

            glyph_width: 8.0,
            line_height: 20.0,
            switch_width: 51.0,
            switch_height: 31.0,
            symbol_size: 24.0,
        }
    }
}

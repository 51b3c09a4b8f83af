//! Text Module — intrinsic content measurement for the layout engine.
//!
//! Labels wrap greedily on whitespace to the available width; button titles
//! stay on one line. Widths come from Unicode display columns times the
//! configured glyph width.

use taffy::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::config::BridgeConfig;
use crate::types::Intrinsic;

fn columns(s: &str) -> u32 {
    s.width() as u32
}

/// Greedy word wrap. Returns the column width of each produced line.
/// `max_columns == None` means no wrapping. Words wider than the limit
/// occupy a line of their own.
pub(crate) fn wrap_columns(text: &str, max_columns: Option<u32>) -> Vec<u32> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let Some(limit) = max_columns else {
            lines.push(columns(paragraph));
            continue;
        };

        let mut current = 0u32;
        let mut has_word = false;
        for word in paragraph.split_whitespace() {
            let w = columns(word);
            if !has_word {
                current = w;
                has_word = true;
            } else if current + 1 + w <= limit {
                current += 1 + w;
            } else {
                lines.push(current);
                current = w;
            }
        }
        lines.push(current);
    }
    lines
}

/// Measure function handed to `taffy::TaffyTree::compute_layout_with_measure`.
pub(crate) fn measure(
    intrinsic: &Intrinsic,
    known: Size<Option<f32>>,
    available: Size<AvailableSpace>,
    config: &BridgeConfig,
) -> Size<f32> {
    if let Size {
        width: Some(width),
        height: Some(height),
    } = known
    {
        return Size { width, height };
    }

    let natural = match intrinsic {
        Intrinsic::Label(text) => {
            let limit_px = known.width.or(match available.width {
                AvailableSpace::Definite(w) => Some(w),
                AvailableSpace::MinContent => Some(0.0),
                AvailableSpace::MaxContent => None,
            });
            let max_columns = limit_px.map(|px| (px / config.glyph_width).floor().max(0.0) as u32);
            let lines = wrap_columns(text, max_columns);
            let widest = lines.iter().copied().max().unwrap_or(0);
            Size {
                width: widest as f32 * config.glyph_width,
                height: lines.len() as f32 * config.line_height,
            }
        }
        Intrinsic::Button(title) => Size {
            width: columns(title) as f32 * config.glyph_width,
            height: config.line_height,
        },
        Intrinsic::Symbol => Size {
            width: config.symbol_size,
            height: config.symbol_size,
        },
        Intrinsic::Switch => Size {
            width: config.switch_width,
            height: config.switch_height,
        },
    };

    Size {
        width: known.width.unwrap_or(natural.width),
        height: known.height.unwrap_or(natural.height),
    }
}

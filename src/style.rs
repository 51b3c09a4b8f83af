//! Style Module — presentation attributes of native views.
//!
//! Responsibilities:
//! - Background color, corner radius (with clipping), shadow
//! - Per-kind skins applied at construction (button, card)
//! - Kept apart from the Layout Module: nothing here touches layout style

use crate::context::BridgeContext;
use crate::error::Result;
use crate::registry::ViewId;
use crate::tree;
use crate::types::{Color, Shadow};

pub(crate) fn set_background_color(ctx: &mut BridgeContext, id: ViewId, color: Color) -> Result<()> {
    tree::view_mut(ctx, id)?.background = Some(color);
    Ok(())
}

/// Set the corner radius. Always turns on clipping, matching the platform
/// behaviour of masking content to rounded bounds.
pub(crate) fn set_corner_radius(ctx: &mut BridgeContext, id: ViewId, radius: f32) -> Result<()> {
    let v = tree::view_mut(ctx, id)?;
    v.corner_radius = radius.max(0.0);
    v.clips_to_bounds = true;
    Ok(())
}

pub(crate) fn set_shadow(ctx: &mut BridgeContext, id: ViewId, shadow: Shadow) -> Result<()> {
    tree::view_mut(ctx, id)?.shadow = Some(shadow);
    Ok(())
}

/// Button skin: filled, rounded, no clipping.
pub(crate) fn apply_button_skin(ctx: &mut BridgeContext, id: ViewId) -> Result<()> {
    let fill = ctx.config.button_fill;
    let radius = ctx.config.button_corner_radius;
    let v = tree::view_mut(ctx, id)?;
    v.background = Some(fill);
    v.corner_radius = radius;
    Ok(())
}

/// Card skin: white fill, rounded corners and a soft drop shadow. Clipping
/// stays off so the shadow is visible.
pub(crate) fn apply_card_skin(ctx: &mut BridgeContext, id: ViewId) -> Result<()> {
    let fill = ctx.config.card_fill;
    let radius = ctx.config.card_corner_radius;
    let shadow = ctx.config.card_shadow;
    let v = tree::view_mut(ctx, id)?;
    v.background = Some(fill);
    v.corner_radius = radius;
    set_shadow(ctx, id, shadow)
}

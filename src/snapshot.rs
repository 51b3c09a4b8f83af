//! Snapshot Module — serializable dump of a view subtree.
//!
//! Hosts use this to mirror the retained tree into the platform toolkit
//! and for debugging; tests use it to compare whole trees at once.

use serde::Serialize;

use crate::context::BridgeContext;
use crate::error::{BridgeError, Result};
use crate::registry::ViewId;
use crate::tree;
use crate::types::{Color, Frame, Shadow, ViewContent};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    #[serde(flatten)]
    pub content: ViewContent,
    pub frame: Frame,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    pub corner_radius: f32,
    pub clips_to_bounds: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    pub retain_count: u32,
    pub subviews: Vec<ViewSnapshot>,
}

pub(crate) fn snapshot(ctx: &BridgeContext, id: ViewId) -> Result<ViewSnapshot> {
    let v = tree::view(ctx, id)?;
    let subviews = v
        .subviews
        .iter()
        .map(|&s| snapshot(ctx, s))
        .collect::<Result<Vec<_>>>()?;
    Ok(ViewSnapshot {
        content: v.content.clone(),
        frame: v.frame,
        background: v.background,
        corner_radius: v.corner_radius,
        clips_to_bounds: v.clips_to_bounds,
        shadow: v.shadow,
        retain_count: v.retain_count,
        subviews,
    })
}

pub(crate) fn snapshot_json(ctx: &BridgeContext, id: ViewId) -> Result<String> {
    let snap = snapshot(ctx, id)?;
    serde_json::to_string(&snap).map_err(|e| BridgeError::Snapshot(e.to_string()))
}

//! Tree Module — native view hierarchy and its layout-node shadow.
//!
//! Responsibilities:
//! - View creation with a matching layout node
//! - Retain counting (owning widget, superview, raw view handles)
//! - Subview attachment that keeps the subview list and the layout
//!   children identical
//! - Recursive teardown when the last retain goes away

use taffy::prelude::*;
use taffy::NodeId;

use crate::context::BridgeContext;
use crate::error::{BridgeError, Result};
use crate::registry::ViewId;
use crate::types::{Color, Frame, Intrinsic, Shadow, ViewContent};

/// Stand-in for a platform view object.
#[derive(Debug, Clone)]
pub struct NativeView {
    pub content: ViewContent,
    pub layout_node: NodeId,
    pub subviews: Vec<ViewId>,
    pub superview: Option<ViewId>,
    pub frame: Frame,
    pub background: Option<Color>,
    pub corner_radius: f32,
    pub clips_to_bounds: bool,
    pub shadow: Option<Shadow>,
    pub needs_layout: bool,
    pub retain_count: u32,
}

impl NativeView {
    pub fn new(content: ViewContent, layout_node: NodeId) -> Self {
        Self {
            content,
            layout_node,
            subviews: Vec::new(),
            superview: None,
            frame: Frame::default(),
            background: None,
            corner_radius: 0.0,
            clips_to_bounds: false,
            shadow: None,
            needs_layout: true,
            retain_count: 1,
        }
    }
}

/// Create a view holding one retain for its creator.
pub(crate) fn create_view(ctx: &mut BridgeContext, content: ViewContent) -> Result<ViewId> {
    let layout_node = match Intrinsic::for_content(&content) {
        Some(intrinsic) => ctx.tree.new_leaf_with_context(Style::DEFAULT, intrinsic)?,
        None => ctx.tree.new_leaf(Style::DEFAULT)?,
    };
    let id = ctx.views.insert(NativeView::new(content, layout_node));
    ctx.debug_log(&format!("create_view: {id:?}"));
    Ok(id)
}

pub(crate) fn view(ctx: &BridgeContext, id: ViewId) -> Result<&NativeView> {
    ctx.views
        .get(id)
        .ok_or_else(|| BridgeError::DeadView(format!("{id:?}")))
}

pub(crate) fn view_mut(ctx: &mut BridgeContext, id: ViewId) -> Result<&mut NativeView> {
    ctx.views
        .get_mut(id)
        .ok_or_else(|| BridgeError::DeadView(format!("{id:?}")))
}

pub(crate) fn retain_view(ctx: &mut BridgeContext, id: ViewId) -> Result<()> {
    view_mut(ctx, id)?.retain_count += 1;
    Ok(())
}

/// Drop one retain. At zero the view, its layout node and its retains on
/// its subviews are released.
pub(crate) fn release_view(ctx: &mut BridgeContext, id: ViewId) -> Result<()> {
    let v = view_mut(ctx, id)?;
    v.retain_count -= 1;
    if v.retain_count > 0 {
        return Ok(());
    }

    let Some(dead) = ctx.views.remove(id) else {
        return Ok(());
    };
    let _ = ctx.tree.remove(dead.layout_node);
    ctx.debug_log(&format!("release_view: {id:?} deallocated"));

    for sub in dead.subviews {
        if let Some(child) = ctx.views.get_mut(sub) {
            child.superview = None;
        }
        release_view(ctx, sub)?;
    }
    Ok(())
}

/// Whether `ancestor` is `id` or one of its superviews.
fn is_ancestor_or_self(ctx: &BridgeContext, ancestor: ViewId, id: ViewId) -> bool {
    let mut current = Some(id);
    while let Some(c) = current {
        if c == ancestor {
            return true;
        }
        current = ctx.views.get(c).and_then(|v| v.superview);
    }
    false
}

/// Validate that `child` can become a subview of `parent` without mutating
/// anything.
pub(crate) fn check_attach(ctx: &BridgeContext, parent: ViewId, child: ViewId) -> Result<()> {
    view(ctx, parent)?;
    view(ctx, child)?;
    if is_ancestor_or_self(ctx, child, parent) {
        return Err(BridgeError::Cycle);
    }
    Ok(())
}

/// Add `child` as the last subview of `parent` and as the last layout child
/// of its node. A child already attached elsewhere is moved; a child already
/// attached to `parent` moves to the end.
pub(crate) fn add_subview(ctx: &mut BridgeContext, parent: ViewId, child: ViewId) -> Result<()> {
    check_attach(ctx, parent, child)?;
    let parent_node = view(ctx, parent)?.layout_node;
    let child_view = view(ctx, child)?;
    let child_node = child_view.layout_node;
    let old_parent = child_view.superview;

    // The new edge retains before the old one releases.
    retain_view(ctx, child)?;
    if let Some(old) = old_parent {
        detach(ctx, old, child)?;
    }

    ctx.tree.add_child(parent_node, child_node)?;
    view_mut(ctx, parent)?.subviews.push(child);
    let c = view_mut(ctx, child)?;
    c.superview = Some(parent);
    c.needs_layout = true;

    ctx.debug_log(&format!("add_subview: parent={parent:?}, child={child:?}"));
    Ok(())
}

/// Remove `child` from `parent` in both graphs and drop the edge's retain.
fn detach(ctx: &mut BridgeContext, parent: ViewId, child: ViewId) -> Result<()> {
    let parent_node = view(ctx, parent)?.layout_node;
    let child_node = view(ctx, child)?.layout_node;

    ctx.tree.remove_child(parent_node, child_node)?;
    view_mut(ctx, parent)?.subviews.retain(|&s| s != child);
    view_mut(ctx, child)?.superview = None;
    release_view(ctx, child)
}

/// Mark a view as needing layout and propagate to its superviews.
pub(crate) fn mark_dirty(ctx: &mut BridgeContext, id: ViewId) -> Result<()> {
    let node = view(ctx, id)?.layout_node;
    ctx.tree.mark_dirty(node)?;

    let mut current = Some(id);
    while let Some(c) = current {
        match ctx.views.get_mut(c) {
            Some(v) => {
                v.needs_layout = true;
                current = v.superview;
            }
            None => break,
        }
    }
    Ok(())
}

//! Layout Module — widget layout styles and the root pass over Taffy.
//!
//! Responsibilities:
//! - Translate widget_set_* layout calls into Taffy Style mutations
//!   (read-modify-write, so one setter never resets another's property)
//! - Per-kind layout defaults for containers and linear widgets
//! - Root layout pass in adjust-height mode and frame write-back

use taffy::prelude::*;
use taffy::style_helpers::{auto, length};

use crate::context::BridgeContext;
use crate::error::Result;
use crate::registry::ViewId;
use crate::tree;
use crate::types::{Axis, Frame};

/// Read-modify-write the layout style of a view's node.
pub(crate) fn update_style(
    ctx: &mut BridgeContext,
    id: ViewId,
    f: impl FnOnce(&mut Style),
) -> Result<()> {
    let node = tree::view(ctx, id)?.layout_node;
    let mut style = ctx.tree.style(node)?.clone();
    f(&mut style);
    ctx.tree.set_style(node, style)?;
    tree::mark_dirty(ctx, id)
}

fn uniform<T: taffy::style_helpers::FromLength + Copy>(value: f32) -> taffy::geometry::Rect<T> {
    let v: T = length(value);
    taffy::geometry::Rect {
        top: v,
        right: v,
        bottom: v,
        left: v,
    }
}

pub(crate) fn set_padding(ctx: &mut BridgeContext, id: ViewId, value: f32) -> Result<()> {
    update_style(ctx, id, |s| s.padding = uniform(value))
}

pub(crate) fn set_margin(ctx: &mut BridgeContext, id: ViewId, value: f32) -> Result<()> {
    update_style(ctx, id, |s| s.margin = uniform(value))
}

/// Horizontal padding only, leaving top and bottom untouched.
pub(crate) fn set_padding_horizontal(ctx: &mut BridgeContext, id: ViewId, value: f32) -> Result<()> {
    update_style(ctx, id, |s| {
        s.padding.left = length(value);
        s.padding.right = length(value);
    })
}

/// Set width and/or height. Values `<= 0` (and NaN) mean "unset" and leave
/// that axis as it was.
pub(crate) fn set_size(ctx: &mut BridgeContext, id: ViewId, width: f32, height: f32) -> Result<()> {
    let set_width = width > 0.0;
    let set_height = height > 0.0;
    if !set_width && !set_height {
        return Ok(());
    }
    update_style(ctx, id, |s| {
        if set_width {
            s.size.width = length(width);
        }
        if set_height {
            s.size.height = length(height);
        }
    })
}

pub(crate) fn set_flex_grow(ctx: &mut BridgeContext, id: ViewId, value: f32) -> Result<()> {
    update_style(ctx, id, |s| s.flex_grow = value.max(0.0))
}

/// Single-item container: centre the content on both axes.
pub(crate) fn define_centered(ctx: &mut BridgeContext, id: ViewId) -> Result<()> {
    update_style(ctx, id, |s| {
        s.justify_content = Some(JustifyContent::Center);
        s.align_items = Some(AlignItems::Center);
    })
}

/// Linear container: direction along `axis` with uniform outer padding.
pub(crate) fn define_linear(ctx: &mut BridgeContext, id: ViewId, axis: Axis) -> Result<()> {
    let padding = ctx.config.linear_padding;
    update_style(ctx, id, |s| {
        s.flex_direction = match axis {
            Axis::Row => FlexDirection::Row,
            Axis::Column => FlexDirection::Column,
        };
        s.padding = uniform(padding);
    })
}

/// Linear item: trailing margin along the parent's axis.
pub(crate) fn define_linear_item(ctx: &mut BridgeContext, item: ViewId, axis: Axis) -> Result<()> {
    let spacing = ctx.config.linear_spacing;
    update_style(ctx, item, |s| match axis {
        Axis::Row => s.margin.right = length(spacing),
        Axis::Column => s.margin.bottom = length(spacing),
    })
}

/// Pin the root to `width` and lay out the subtree with the height adjusting
/// to content; the requested height is superseded by the content height.
/// A size the caller stored on the root with `set_size` takes precedence
/// over the pinned width. Every view in the subtree gets its frame written
/// back.
pub(crate) fn layout_root(
    ctx: &mut BridgeContext,
    root: ViewId,
    width: f32,
    _height: f32,
) -> Result<()> {
    let start = std::time::Instant::now();
    let node = tree::view(ctx, root)?.layout_node;

    let stored = ctx.tree.style(node)?.clone();
    let pin_width = width > 0.0 && stored.size.width == auto();
    if pin_width {
        let mut pass_style = stored.clone();
        pass_style.size.width = length(width);
        ctx.tree.set_style(node, pass_style)?;
    }

    let available = Size {
        width: if width > 0.0 {
            AvailableSpace::Definite(width)
        } else {
            AvailableSpace::MaxContent
        },
        height: AvailableSpace::MaxContent,
    };
    let config = &ctx.config;
    let computed = ctx.tree.compute_layout_with_measure(
        node,
        available,
        |known, available, _node, context, _style| match context {
            Some(intrinsic) => crate::text::measure(intrinsic, known, available, config),
            None => Size::ZERO,
        },
    );
    if pin_width {
        ctx.tree.set_style(node, stored)?;
    }
    computed?;

    write_frames(ctx, root)?;
    let size = ctx.tree.layout(node)?.size;
    let r = tree::view_mut(ctx, root)?;
    r.frame.width = size.width;
    r.frame.height = size.height;

    ctx.perf_layout_us = start.elapsed().as_micros() as u64;
    ctx.debug_log(&format!(
        "layout_root: {root:?} -> {:?} in {}μs",
        ctx.views.get(root).map(|v| v.frame),
        ctx.perf_layout_us
    ));
    Ok(())
}

/// Copy computed layout into the frames of `id`'s subviews, recursively.
fn write_frames(ctx: &mut BridgeContext, id: ViewId) -> Result<()> {
    let subviews = tree::view(ctx, id)?.subviews.clone();
    for sub in subviews {
        let node = tree::view(ctx, sub)?.layout_node;
        let layout = *ctx.tree.layout(node)?;
        let v = tree::view_mut(ctx, sub)?;
        v.frame = Frame {
            x: layout.location.x,
            y: layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
        };
        v.needs_layout = false;
        write_frames(ctx, sub)?;
    }
    tree::view_mut(ctx, id)?.needs_layout = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ViewContent;

    fn style(ctx: &BridgeContext, id: ViewId) -> Style {
        ctx.tree
            .style(ctx.views.get(id).unwrap().layout_node)
            .unwrap()
            .clone()
    }

    fn label(ctx: &mut BridgeContext, text: &str) -> ViewId {
        tree::create_view(
            ctx,
            ViewContent::Label {
                text: text.to_string(),
                number_of_lines: 0,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_read_modify_write_preserves_properties() {
        let mut ctx = BridgeContext::default();
        let v = tree::create_view(&mut ctx, ViewContent::Plain).unwrap();

        define_linear(&mut ctx, v, Axis::Column).unwrap();
        set_size(&mut ctx, v, 50.0, 0.0).unwrap();
        set_flex_grow(&mut ctx, v, 2.0).unwrap();

        let s = style(&ctx, v);
        assert_eq!(s.flex_direction, FlexDirection::Column);
        assert_eq!(s.size.width, length(50.0));
        assert_eq!(s.flex_grow, 2.0);
    }

    #[test]
    fn test_set_size_skips_unset_axes() {
        let mut ctx = BridgeContext::default();
        let v = tree::create_view(&mut ctx, ViewContent::Plain).unwrap();

        set_size(&mut ctx, v, 120.0, 40.0).unwrap();
        set_size(&mut ctx, v, 0.0, -5.0).unwrap();
        let s = style(&ctx, v);
        assert_eq!(s.size.width, length(120.0));
        assert_eq!(s.size.height, length(40.0));

        set_size(&mut ctx, v, 0.0, 64.0).unwrap();
        let s = style(&ctx, v);
        assert_eq!(s.size.width, length(120.0));
        assert_eq!(s.size.height, length(64.0));
    }

    #[test]
    fn test_padding_horizontal_keeps_vertical() {
        let mut ctx = BridgeContext::default();
        let v = tree::create_view(&mut ctx, ViewContent::Plain).unwrap();
        set_padding(&mut ctx, v, 4.0).unwrap();
        set_padding_horizontal(&mut ctx, v, 20.0).unwrap();

        let s = style(&ctx, v);
        assert_eq!(s.padding.left, length(20.0));
        assert_eq!(s.padding.right, length(20.0));
        assert_eq!(s.padding.top, length(4.0));
        assert_eq!(s.padding.bottom, length(4.0));
    }

    #[test]
    fn test_layout_root_column_frames() {
        let mut ctx = BridgeContext::default();
        let root = tree::create_view(&mut ctx, ViewContent::Plain).unwrap();
        define_linear(&mut ctx, root, Axis::Column).unwrap();

        let items: Vec<ViewId> = ["one", "two", "three"]
            .iter()
            .map(|t| label(&mut ctx, t))
            .collect();
        for &item in &items {
            tree::add_subview(&mut ctx, root, item).unwrap();
            define_linear_item(&mut ctx, item, Axis::Column).unwrap();
        }

        layout_root(&mut ctx, root, 200.0, 0.0).unwrap();

        let line = ctx.config.line_height;
        for (i, &item) in items.iter().enumerate() {
            let f = ctx.views.get(item).unwrap().frame;
            assert_eq!(f.x, 10.0);
            assert_eq!(f.y, 10.0 + i as f32 * (line + 10.0));
            assert_eq!(f.width, 180.0);
            assert_eq!(f.height, line);
        }

        let root_frame = ctx.views.get(root).unwrap().frame;
        assert_eq!(root_frame.width, 200.0);
        // padding + 3 items with trailing spacing + padding
        assert_eq!(root_frame.height, 10.0 + 3.0 * (line + 10.0) + 10.0);
        assert!(!ctx.views.get(root).unwrap().needs_layout);
    }

    #[test]
    fn test_layout_root_adjusts_height_to_content() {
        let mut ctx = BridgeContext::default();
        let root = tree::create_view(&mut ctx, ViewContent::Plain).unwrap();
        set_padding(&mut ctx, root, 5.0).unwrap();

        layout_root(&mut ctx, root, 320.0, 480.0).unwrap();

        let f = ctx.views.get(root).unwrap().frame;
        assert_eq!((f.width, f.height), (320.0, 10.0));
        // The pin does not leak into the stored style.
        assert_eq!(style(&ctx, root).size.width, auto());
    }

    #[test]
    fn test_layout_root_honours_stored_size() {
        let mut ctx = BridgeContext::default();
        let root = tree::create_view(&mut ctx, ViewContent::Plain).unwrap();
        set_size(&mut ctx, root, 0.0, 500.0).unwrap();

        layout_root(&mut ctx, root, 320.0, 480.0).unwrap();

        let f = ctx.views.get(root).unwrap().frame;
        assert_eq!((f.width, f.height), (320.0, 500.0));
        assert_eq!(style(&ctx, root).size.height, length(500.0));
    }

    #[test]
    fn test_centered_container_places_child_in_middle() {
        let mut ctx = BridgeContext::default();
        let root = tree::create_view(&mut ctx, ViewContent::Plain).unwrap();
        define_centered(&mut ctx, root).unwrap();
        let child = tree::create_view(&mut ctx, ViewContent::Plain).unwrap();
        set_size(&mut ctx, child, 40.0, 30.0).unwrap();
        tree::add_subview(&mut ctx, root, child).unwrap();

        layout_root(&mut ctx, root, 100.0, 0.0).unwrap();

        let f = ctx.views.get(child).unwrap().frame;
        assert_eq!((f.x, f.y, f.width, f.height), (30.0, 0.0, 40.0, 30.0));
    }
}

//! Widget Module — the leaf/composite object model over native views.
//!
//! Responsibilities:
//! - Construction with per-kind defaults (content, skin, layout style)
//! - Chainable configuration through [`WidgetMut`]
//! - Composition (container child, linear children) as one procedure that
//!   updates the subview list and the layout children together
//! - Capability checks: a mutator a kind does not support is a no-op
//! - Issuing and releasing owning handles

use crate::context::BridgeContext;
use crate::error::Result;
use crate::layout;
use crate::registry::{HandleTarget, ViewId, WidgetId};
use crate::style;
use crate::tree;
use crate::types::{Capabilities, ClickCallback, Color, ContentMode, ViewContent, WidgetKind};

#[derive(Debug, Clone)]
pub struct Widget {
    pub kind: WidgetKind,
    /// Owned view. The widget holds one retain on it for its whole lifetime.
    pub view: ViewId,
    /// Button only.
    pub on_click: Option<ClickCallback>,
}

impl Widget {
    pub fn capabilities(&self) -> Capabilities {
        self.kind.capabilities()
    }
}

fn content_for(ctx: &BridgeContext, kind: WidgetKind, text: &str) -> ViewContent {
    match kind {
        WidgetKind::Text => ViewContent::Label {
            text: text.to_string(),
            number_of_lines: 0,
        },
        WidgetKind::Button => ViewContent::Button {
            title: text.to_string(),
            title_color: ctx.config.button_title_color,
        },
        WidgetKind::Image => ViewContent::Image {
            symbol: text.to_string(),
            content_mode: ContentMode::ScaleAspectFit,
        },
        WidgetKind::Switch => ViewContent::Switch { is_on: false },
        WidgetKind::Container | WidgetKind::Card | WidgetKind::Row | WidgetKind::Column => {
            ViewContent::Plain
        }
    }
}

fn apply_defaults(ctx: &mut BridgeContext, kind: WidgetKind, view: ViewId) -> Result<()> {
    match kind {
        WidgetKind::Button => {
            style::apply_button_skin(ctx, view)?;
            let height = ctx.config.button_height;
            let padding = ctx.config.button_padding_horizontal;
            layout::set_size(ctx, view, 0.0, height)?;
            layout::set_padding_horizontal(ctx, view, padding)
        }
        WidgetKind::Image => {
            let side = ctx.config.image_size;
            layout::set_size(ctx, view, side, side)
        }
        WidgetKind::Card => style::apply_card_skin(ctx, view),
        WidgetKind::Text
        | WidgetKind::Switch
        | WidgetKind::Container
        | WidgetKind::Row
        | WidgetKind::Column => Ok(()),
    }
}

/// Create a widget of `kind` and return an owning handle to it. `text` is
/// the label text, button title or image symbol name; other kinds ignore it.
pub(crate) fn create_widget(ctx: &mut BridgeContext, kind: WidgetKind, text: &str) -> Result<u64> {
    let content = content_for(ctx, kind, text);
    let view = tree::create_view(ctx, content)?;
    if let Err(e) = apply_defaults(ctx, kind, view) {
        tree::release_view(ctx, view)?;
        return Err(e);
    }

    let id = ctx.widgets.insert(Widget {
        kind,
        view,
        on_click: None,
    });
    let handle = ctx.handles.issue(HandleTarget::Widget(id));
    ctx.debug_log(&format!("create_widget: kind={kind:?}, handle={handle:#x}"));
    Ok(handle)
}

/// Borrow a widget for configuration.
pub(crate) fn widget_mut(ctx: &mut BridgeContext, handle: u64) -> Result<WidgetMut<'_>> {
    let id = ctx.handles.resolve_widget(handle)?;
    let widget = ctx.widget(handle)?;
    let (kind, view) = (widget.kind, widget.view);
    Ok(WidgetMut {
        ctx,
        id,
        kind,
        view,
    })
}

/// Chainable mutable access to one widget.
///
/// ```ignore
/// widget_mut(ctx, handle)?
///     .padding(12.0)?
///     .background_color(Color::WHITE)?
///     .corner_radius(8.0)?;
/// ```
pub struct WidgetMut<'a> {
    ctx: &'a mut BridgeContext,
    id: WidgetId,
    kind: WidgetKind,
    view: ViewId,
}

impl WidgetMut<'_> {
    pub fn padding(&mut self, value: f32) -> Result<&mut Self> {
        layout::set_padding(self.ctx, self.view, value)?;
        Ok(self)
    }

    pub fn margin(&mut self, value: f32) -> Result<&mut Self> {
        layout::set_margin(self.ctx, self.view, value)?;
        Ok(self)
    }

    /// Non-positive values leave that axis unchanged.
    pub fn size(&mut self, width: f32, height: f32) -> Result<&mut Self> {
        layout::set_size(self.ctx, self.view, width, height)?;
        Ok(self)
    }

    pub fn flex_grow(&mut self, value: f32) -> Result<&mut Self> {
        layout::set_flex_grow(self.ctx, self.view, value)?;
        Ok(self)
    }

    pub fn background_color(&mut self, color: Color) -> Result<&mut Self> {
        style::set_background_color(self.ctx, self.view, color)?;
        Ok(self)
    }

    pub fn corner_radius(&mut self, radius: f32) -> Result<&mut Self> {
        style::set_corner_radius(self.ctx, self.view, radius)?;
        Ok(self)
    }

    /// Store the tap callback. Last write wins; `None` clears it.
    /// Not a button: no-op.
    pub fn on_click(&mut self, callback: Option<ClickCallback>) -> Result<&mut Self> {
        if !self.kind.capabilities().contains(Capabilities::TAPPABLE) {
            self.ctx.debug_log(&format!("on_click ignored for {:?}", self.kind));
            return Ok(self);
        }
        if let Some(w) = self.ctx.widgets.get_mut(self.id) {
            w.on_click = callback;
        }
        Ok(self)
    }

    /// Attach `child` to a single-child container and centre it.
    ///
    /// A previously attached child is NOT detached: it stays a subview and a
    /// layout item next to the new one. Known defect kept for compatibility
    /// with existing callers; see the ignored test
    /// `test_set_child_twice_keeps_single_child`.
    ///
    /// Not a container: no-op.
    pub fn set_child(&mut self, child: ViewId) -> Result<&mut Self> {
        if !self.kind.capabilities().contains(Capabilities::SINGLE_CHILD) {
            self.ctx.debug_log(&format!("set_child ignored for {:?}", self.kind));
            return Ok(self);
        }
        tree::add_subview(self.ctx, self.view, child)?;
        tree::mark_dirty(self.ctx, child)?;
        layout::define_centered(self.ctx, self.view)?;
        Ok(self)
    }

    /// Append `children` in order along the linear axis, each followed by
    /// the configured spacing. Nothing is attached unless every child can be.
    ///
    /// Not a linear widget: no-op.
    pub fn add_children(&mut self, children: &[ViewId]) -> Result<&mut Self> {
        let Some(axis) = self.kind.axis() else {
            self.ctx.debug_log(&format!("add_children ignored for {:?}", self.kind));
            return Ok(self);
        };
        for &child in children {
            tree::check_attach(self.ctx, self.view, child)?;
        }
        for &child in children {
            tree::add_subview(self.ctx, self.view, child)?;
            layout::define_linear_item(self.ctx, child, axis)?;
        }
        layout::define_linear(self.ctx, self.view, axis)?;
        Ok(self)
    }
}

/// The callback a native tap on this widget would fire, if any.
pub(crate) fn click_target(ctx: &BridgeContext, handle: u64) -> Result<Option<ClickCallback>> {
    let widget = ctx.widget(handle)?;
    if !widget.capabilities().contains(Capabilities::TAPPABLE) {
        return Ok(None);
    }
    Ok(widget.on_click)
}

/// Hand out a new owning View handle for the widget's view.
pub(crate) fn extract_view(ctx: &mut BridgeContext, handle: u64) -> Result<u64> {
    let view = ctx.widget_view(handle)?;
    tree::retain_view(ctx, view)?;
    let raw = ctx.handles.issue(HandleTarget::View(view));
    ctx.debug_log(&format!("extract_view: widget={handle:#x} -> view={raw:#x}"));
    Ok(raw)
}

/// Consume one owning handle of either kind.
pub(crate) fn release_handle(ctx: &mut BridgeContext, handle: u64) -> Result<()> {
    match ctx.handles.resolve(handle)? {
        HandleTarget::Widget(id) => {
            ctx.handles.revoke(handle)?;
            if let Some(widget) = ctx.widgets.remove(id) {
                tree::release_view(ctx, widget.view)?;
            }
        }
        HandleTarget::View(view) => {
            ctx.handles.revoke(handle)?;
            tree::release_view(ctx, view)?;
        }
    }
    ctx.debug_log(&format!("release_handle: {handle:#x}"));
    Ok(())
}

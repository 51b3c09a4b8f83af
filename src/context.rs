//! BridgeContext struct and the per-thread state accessor.
//!
//! The context owns all mutable state of the bridge: the layout tree, the
//! view and widget arenas, and the handle table. Every binding function runs
//! on the UI thread, so the context lives in a `thread_local!` and is created
//! on first use. A handle issued on one thread does not resolve on another.

use std::cell::RefCell;
use std::ffi::CString;

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::registry::{Arena, HandleTable, ViewId, WidgetId};
use crate::tree::NativeView;
use crate::types::Intrinsic;
use crate::widget::Widget;

pub struct BridgeContext {
    // Layout engine
    pub tree: taffy::TaffyTree<Intrinsic>,

    // Object model
    pub views: Arena<ViewId, NativeView>,
    pub widgets: Arena<WidgetId, Widget>,
    pub handles: HandleTable,

    pub config: BridgeConfig,

    // Diagnostics
    pub last_error: Option<CString>,
    pub debug_mode: bool,
    pub perf_layout_us: u64,
}

impl BridgeContext {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            tree: taffy::TaffyTree::new(),
            views: Arena::new(),
            widgets: Arena::new(),
            handles: HandleTable::default(),
            config,
            last_error: None,
            debug_mode: false,
            perf_layout_us: 0,
        }
    }

    /// Resolve a borrowed Widget handle.
    pub fn widget(&self, handle: u64) -> Result<&Widget> {
        let id = self.handles.resolve_widget(handle)?;
        self.widgets.get(id).ok_or(BridgeError::StaleHandle(handle))
    }

    /// Resolve a borrowed Widget handle to the view it owns.
    pub fn widget_view(&self, handle: u64) -> Result<ViewId> {
        Ok(self.widget(handle)?.view)
    }

    /// Resolve a borrowed View handle.
    pub fn view_handle(&self, handle: u64) -> Result<ViewId> {
        let id = self.handles.resolve_view(handle)?;
        if !self.views.contains(id) {
            return Err(BridgeError::StaleHandle(handle));
        }
        Ok(id)
    }

    /// Resolve either kind of handle to the underlying view.
    pub fn any_view(&self, handle: u64) -> Result<ViewId> {
        match self.handles.resolve(handle)? {
            crate::registry::HandleTarget::Widget(_) => self.widget_view(handle),
            crate::registry::HandleTarget::View(_) => self.view_handle(handle),
        }
    }

    pub fn debug_log(&self, msg: &str) {
        if self.debug_mode {
            tracing::debug!(target: "flex_bridge", "{msg}");
        }
    }
}

impl Default for BridgeContext {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

// ============================================================================
// Per-thread State
// ============================================================================

thread_local! {
    static CONTEXT: RefCell<Option<BridgeContext>> = const { RefCell::new(None) };
}

/// Run `f` against this thread's context, creating it on first use.
///
/// Fails with [`BridgeError::ContextBusy`] instead of panicking when called
/// reentrantly while another borrow is live.
pub fn with_context<R>(f: impl FnOnce(&mut BridgeContext) -> Result<R>) -> Result<R> {
    CONTEXT.with(|cell| {
        let mut guard = cell.try_borrow_mut().map_err(|_| BridgeError::ContextBusy)?;
        let ctx = guard.get_or_insert_with(BridgeContext::default);
        f(ctx)
    })
}

/// Store an error message in this thread's context (best-effort).
pub fn set_last_error(msg: String) {
    tracing::warn!(target: "flex_bridge", "{msg}");
    let _ = with_context(|ctx| {
        ctx.last_error = Some(CString::new(msg.replace('\0', " ")).unwrap_or_default());
        Ok(())
    });
}

/// Clear the context-bound error message.
pub fn clear_last_error() {
    let _ = with_context(|ctx| {
        ctx.last_error = None;
        Ok(())
    });
}

/// Snapshot the last error into owned memory.
#[cfg(test)]
pub fn get_last_error_snapshot() -> Option<String> {
    with_context(|ctx| {
        Ok(ctx
            .last_error
            .as_ref()
            .map(|e| e.to_string_lossy().into_owned()))
    })
    .ok()
    .flatten()
}

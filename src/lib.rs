//! flex_bridge — C-callable widget bridge over a retained view tree
//!
//! This file contains ONLY `extern "C"` entry points. Each function:
//! 1. Wraps its body in `catch_unwind`
//! 2. Resolves handles and reads C strings at the boundary
//! 3. Delegates to the appropriate module function
//! 4. Records failures in the last-error slot instead of returning them
//!
//! No business logic lives here.
//!
//! Ownership: `create_*` and `get_ui_view_from_widget` return owning
//! handles, which the caller releases exactly once with `widget_release`
//! or `view_release`. Every other function borrows its handle arguments.
//! All calls are expected on the UI thread.

// All public functions in this file are `extern "C"` FFI entry points called
// across the C ABI boundary. Raw-pointer arguments are part of the FFI
// contract; null guards happen before any dereference.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

mod config;
mod context;
mod error;
mod layout;
mod logging;
mod registry;
mod snapshot;
mod style;
mod text;
mod tree;
mod types;
mod widget;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};

use context::{clear_last_error, set_last_error, with_context};
use error::{BridgeError, Result};
use types::{ClickCallback, Color, Frame, WidgetKind};
use widget::widget_mut;

// ============================================================================
// Safety wrappers: every FFI entry point uses one of these
// ============================================================================

/// Wrap an FFI function body. Returns the value on success, -1 on error,
/// -2 on panic.
fn ffi_wrap(f: impl FnOnce() -> Result<i32>) -> i32 {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(code)) => code,
        Ok(Err(err)) => {
            set_last_error(err.to_string());
            -1
        }
        Err(_) => {
            set_last_error("internal panic".to_string());
            -2
        }
    }
}

/// Wrap an FFI function that returns a handle. Returns 0 on error.
fn ffi_wrap_handle(f: impl FnOnce() -> Result<u64>) -> u64 {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(handle)) => handle,
        Ok(Err(err)) => {
            set_last_error(err.to_string());
            0
        }
        Err(_) => {
            set_last_error("internal panic".to_string());
            0
        }
    }
}

/// Wrap a void FFI function. Failures only reach the last-error slot.
fn ffi_wrap_void(f: impl FnOnce() -> Result<()>) {
    ffi_wrap(|| f().map(|()| 0));
}

/// Copy a null-terminated C string. Invalid UTF-8 is replaced, not trusted.
fn read_c_str(ptr: *const c_char, name: &'static str) -> Result<String> {
    if ptr.is_null() {
        return Err(BridgeError::NullPointer(name));
    }
    let s = unsafe { CStr::from_ptr(ptr) };
    Ok(s.to_string_lossy().into_owned())
}

fn create(kind: WidgetKind, text: &str) -> u64 {
    ffi_wrap_handle(|| with_context(|ctx| widget::create_widget(ctx, kind, text)))
}

fn create_with_text(kind: WidgetKind, ptr: *const c_char, name: &'static str) -> u64 {
    ffi_wrap_handle(|| {
        let text = read_c_str(ptr, name)?;
        with_context(|ctx| widget::create_widget(ctx, kind, &text))
    })
}

// ============================================================================
// Constructors
// ============================================================================

/// Generic constructor: `kind` is the [`WidgetKind`] discriminant. `text` may
/// be null for kinds that take no text.
#[no_mangle]
pub extern "C" fn bridge_create_widget(kind: u8, text: *const c_char) -> u64 {
    ffi_wrap_handle(|| {
        let kind = WidgetKind::from_u8(kind).ok_or(BridgeError::UnknownKind(kind))?;
        let text = if text.is_null() {
            String::new()
        } else {
            read_c_str(text, "text")?
        };
        with_context(|ctx| widget::create_widget(ctx, kind, &text))
    })
}

#[no_mangle]
pub extern "C" fn create_text(text: *const c_char) -> u64 {
    create_with_text(WidgetKind::Text, text, "text")
}

#[no_mangle]
pub extern "C" fn create_button(text: *const c_char) -> u64 {
    create_with_text(WidgetKind::Button, text, "text")
}

/// `name` is a platform symbol name, e.g. `"star.fill"`.
#[no_mangle]
pub extern "C" fn create_image(name: *const c_char) -> u64 {
    create_with_text(WidgetKind::Image, name, "name")
}

#[no_mangle]
pub extern "C" fn create_switch() -> u64 {
    create(WidgetKind::Switch, "")
}

#[no_mangle]
pub extern "C" fn create_container() -> u64 {
    create(WidgetKind::Container, "")
}

#[no_mangle]
pub extern "C" fn create_card() -> u64 {
    create(WidgetKind::Card, "")
}

#[no_mangle]
pub extern "C" fn create_column() -> u64 {
    create(WidgetKind::Column, "")
}

#[no_mangle]
pub extern "C" fn create_row() -> u64 {
    create(WidgetKind::Row, "")
}

// ============================================================================
// Modifiers
// ============================================================================

#[no_mangle]
pub extern "C" fn widget_set_padding(handle: u64, value: f32) {
    ffi_wrap_void(|| {
        with_context(|ctx| {
            widget_mut(ctx, handle)?.padding(value)?;
            Ok(())
        })
    })
}

#[no_mangle]
pub extern "C" fn widget_set_margin(handle: u64, value: f32) {
    ffi_wrap_void(|| {
        with_context(|ctx| {
            widget_mut(ctx, handle)?.margin(value)?;
            Ok(())
        })
    })
}

/// Width or height `<= 0` leaves that axis unchanged.
#[no_mangle]
pub extern "C" fn widget_set_size(handle: u64, width: f32, height: f32) {
    ffi_wrap_void(|| {
        with_context(|ctx| {
            widget_mut(ctx, handle)?.size(width, height)?;
            Ok(())
        })
    })
}

#[no_mangle]
pub extern "C" fn widget_set_background_color(handle: u64, r: f32, g: f32, b: f32, a: f32) {
    ffi_wrap_void(|| {
        with_context(|ctx| {
            widget_mut(ctx, handle)?.background_color(Color::clamped(r, g, b, a))?;
            Ok(())
        })
    })
}

/// Also enables clipping to the rounded bounds.
#[no_mangle]
pub extern "C" fn widget_set_corner_radius(handle: u64, radius: f32) {
    ffi_wrap_void(|| {
        with_context(|ctx| {
            widget_mut(ctx, handle)?.corner_radius(radius)?;
            Ok(())
        })
    })
}

#[no_mangle]
pub extern "C" fn widget_set_flex_grow(handle: u64, value: f32) {
    ffi_wrap_void(|| {
        with_context(|ctx| {
            widget_mut(ctx, handle)?.flex_grow(value)?;
            Ok(())
        })
    })
}

/// Silently ignored unless `handle` is a button. A null callback clears it.
#[no_mangle]
pub extern "C" fn widget_set_on_click(handle: u64, callback: Option<ClickCallback>) {
    ffi_wrap_void(|| {
        with_context(|ctx| {
            widget_mut(ctx, handle)?.on_click(callback)?;
            Ok(())
        })
    })
}

#[no_mangle]
pub extern "C" fn widget_log(message: *const c_char) {
    ffi_wrap_void(|| {
        let message = read_c_str(message, "message")?;
        logging::forward(&message);
        Ok(())
    })
}

// ============================================================================
// Composition
// ============================================================================

/// Attach `child` to a container or card. Calling it again attaches a second
/// child without detaching the first.
#[no_mangle]
pub extern "C" fn container_set_child(container: u64, child: u64) {
    ffi_wrap_void(|| {
        with_context(|ctx| {
            let child_view = ctx.widget_view(child)?;
            widget_mut(ctx, container)?.set_child(child_view)?;
            Ok(())
        })
    })
}

/// Append `child` to a row or column. Call once per child.
#[no_mangle]
pub extern "C" fn linear_add_child(parent: u64, child: u64) {
    ffi_wrap_void(|| {
        with_context(|ctx| {
            let child_view = ctx.widget_view(child)?;
            widget_mut(ctx, parent)?.add_children(&[child_view])?;
            Ok(())
        })
    })
}

// ============================================================================
// Layout
// ============================================================================

/// Lay out the tree rooted at `handle` with the given width; the height
/// adjusts to content.
#[no_mangle]
pub extern "C" fn widget_layout_root(handle: u64, width: f32, height: f32) {
    ffi_wrap_void(|| {
        with_context(|ctx| {
            let root = ctx.widget_view(handle)?;
            layout::layout_root(ctx, root, width, height)
        })
    })
}

fn write_frame(frame: Frame, x: *mut f32, y: *mut f32, width: *mut f32, height: *mut f32) {
    unsafe {
        if !x.is_null() {
            *x = frame.x;
        }
        if !y.is_null() {
            *y = frame.y;
        }
        if !width.is_null() {
            *width = frame.width;
        }
        if !height.is_null() {
            *height = frame.height;
        }
    }
}

/// Read the frame computed by the last layout pass, relative to the
/// superview. Returns 0 on success, -1 on error.
#[no_mangle]
pub extern "C" fn widget_get_frame(
    handle: u64,
    x: *mut f32,
    y: *mut f32,
    width: *mut f32,
    height: *mut f32,
) -> i32 {
    ffi_wrap(|| {
        let frame = with_context(|ctx| {
            let view = ctx.widget_view(handle)?;
            Ok(tree::view(ctx, view)?.frame)
        })?;
        write_frame(frame, x, y, width, height);
        Ok(0)
    })
}

#[no_mangle]
pub extern "C" fn view_get_frame(
    handle: u64,
    x: *mut f32,
    y: *mut f32,
    width: *mut f32,
    height: *mut f32,
) -> i32 {
    ffi_wrap(|| {
        let frame = with_context(|ctx| {
            let view = ctx.view_handle(handle)?;
            Ok(tree::view(ctx, view)?.frame)
        })?;
        write_frame(frame, x, y, width, height);
        Ok(0)
    })
}

// ============================================================================
// Views & Ownership
// ============================================================================

/// Return a NEW owning handle to the widget's underlying view. Each call
/// yields a distinct handle; release each with `view_release`.
#[no_mangle]
pub extern "C" fn get_ui_view_from_widget(handle: u64) -> u64 {
    ffi_wrap_handle(|| with_context(|ctx| widget::extract_view(ctx, handle)))
}

/// Consume an owning Widget handle.
#[no_mangle]
pub extern "C" fn widget_release(handle: u64) {
    ffi_wrap_void(|| with_context(|ctx| widget::release_handle(ctx, handle)))
}

/// Consume an owning View handle.
#[no_mangle]
pub extern "C" fn view_release(handle: u64) {
    ffi_wrap_void(|| with_context(|ctx| widget::release_handle(ctx, handle)))
}

/// Number of subviews of the view behind a Widget or View handle.
#[no_mangle]
pub extern "C" fn view_get_subview_count(handle: u64) -> i32 {
    ffi_wrap(|| {
        with_context(|ctx| {
            let view = ctx.any_view(handle)?;
            Ok(tree::view(ctx, view)?.subviews.len() as i32)
        })
    })
}

/// 1 if both handles (of either kind) refer to the same view, else 0.
#[no_mangle]
pub extern "C" fn widget_same_view(a: u64, b: u64) -> i32 {
    ffi_wrap(|| with_context(|ctx| Ok((ctx.any_view(a)? == ctx.any_view(b)?) as i32)))
}

#[no_mangle]
pub extern "C" fn widget_get_kind(handle: u64) -> i32 {
    ffi_wrap(|| with_context(|ctx| Ok(ctx.widget(handle)?.kind as i32)))
}

// ============================================================================
// Events
// ============================================================================

/// Simulate a native tap. Returns 1 if a button callback ran, 0 otherwise.
/// The callback runs after the bridge state is released, so it may call
/// back into the bridge.
#[no_mangle]
pub extern "C" fn widget_trigger_click(handle: u64) -> i32 {
    ffi_wrap(|| {
        let callback = with_context(|ctx| widget::click_target(ctx, handle))?;
        match callback {
            Some(callback) => {
                callback();
                Ok(1)
            }
            None => Ok(0),
        }
    })
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Length in bytes of the JSON snapshot of the subtree behind a Widget or
/// View handle.
#[no_mangle]
pub extern "C" fn bridge_debug_snapshot_len(handle: u64) -> i32 {
    ffi_wrap(|| {
        with_context(|ctx| {
            let view = ctx.any_view(handle)?;
            Ok(snapshot::snapshot_json(ctx, view)?.len() as i32)
        })
    })
}

/// Copy the JSON snapshot into `buffer`. Returns the number of bytes copied;
/// the output is null-terminated when there is room.
#[no_mangle]
pub extern "C" fn bridge_debug_snapshot(handle: u64, buffer: *mut u8, buffer_len: u32) -> i32 {
    ffi_wrap(|| {
        let json = with_context(|ctx| {
            let view = ctx.any_view(handle)?;
            snapshot::snapshot_json(ctx, view)
        })?;
        let bytes = json.as_bytes();
        let copy_len = bytes.len().min(buffer_len as usize);

        if !buffer.is_null() && copy_len > 0 {
            unsafe {
                std::ptr::copy_nonoverlapping(bytes.as_ptr(), buffer, copy_len);
            }
        }
        if !buffer.is_null() && (buffer_len as usize) > copy_len {
            unsafe {
                *buffer.add(copy_len) = 0;
            }
        }
        Ok(copy_len as i32)
    })
}

/// Null-terminated message of the last failed call, or null. Owned by the
/// bridge and valid until the next failure or `bridge_clear_error`.
#[no_mangle]
pub extern "C" fn bridge_get_last_error() -> *const c_char {
    catch_unwind(AssertUnwindSafe(|| {
        with_context(|ctx| {
            Ok(ctx
                .last_error
                .as_ref()
                .map_or(std::ptr::null(), |e| e.as_ptr()))
        })
        .unwrap_or(std::ptr::null())
    }))
    .unwrap_or(std::ptr::null())
}

#[no_mangle]
pub extern "C" fn bridge_clear_error() {
    let _ = catch_unwind(clear_last_error);
}

#[no_mangle]
pub extern "C" fn bridge_set_debug(enabled: u8) -> i32 {
    ffi_wrap(|| {
        with_context(|ctx| {
            ctx.debug_mode = enabled != 0;
            Ok(0)
        })
    })
}

/// Install the stderr log subscriber. Returns 1 if installed, 0 if one was
/// already present.
#[no_mangle]
pub extern "C" fn bridge_init_logging() -> i32 {
    ffi_wrap(|| Ok(logging::init_logging() as i32))
}

/// Counters: 0 = last layout pass in µs, 1 = live widgets, 2 = live views,
/// 3 = live handles, 4 = layout nodes. Unknown ids read 0.
#[no_mangle]
pub extern "C" fn bridge_get_perf_counter(counter_id: u32) -> u64 {
    catch_unwind(AssertUnwindSafe(|| -> u64 {
        with_context(|ctx| {
            Ok(match counter_id {
                0 => ctx.perf_layout_us,
                1 => ctx.widgets.len() as u64,
                2 => ctx.views.len() as u64,
                3 => ctx.handles.len() as u64,
                4 => ctx.tree.total_node_count() as u64,
                _ => 0,
            })
        })
        .unwrap_or(0)
    }))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

    const LIVE_WIDGETS: u32 = 1;
    const LIVE_VIEWS: u32 = 2;
    const LIVE_HANDLES: u32 = 3;
    const LAYOUT_NODES: u32 = 4;

    // libtest may reuse one thread for several tests.
    fn reset() {
        with_context(|ctx| {
            *ctx = context::BridgeContext::default();
            Ok(())
        })
        .unwrap();
    }

    fn text(s: &str) -> u64 {
        let c = CString::new(s).unwrap();
        create_text(c.as_ptr())
    }

    fn frame(handle: u64) -> Frame {
        let mut f = Frame::default();
        let rc = widget_get_frame(handle, &mut f.x, &mut f.y, &mut f.width, &mut f.height);
        assert_eq!(rc, 0);
        f
    }

    fn last_error() -> Option<String> {
        let ptr = bridge_get_last_error();
        if ptr.is_null() {
            None
        } else {
            Some(unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string())
        }
    }

    fn assert_empty() {
        for counter in [LIVE_WIDGETS, LIVE_VIEWS, LIVE_HANDLES, LAYOUT_NODES] {
            assert_eq!(bridge_get_perf_counter(counter), 0, "counter {counter}");
        }
    }

    #[test]
    fn test_create_release_every_kind_leaves_no_trace() {
        reset();
        let label = CString::new("label").unwrap();
        let handles = [
            create_text(label.as_ptr()),
            create_button(label.as_ptr()),
            create_image(label.as_ptr()),
            create_switch(),
            create_container(),
            create_card(),
            create_column(),
            create_row(),
        ];
        assert!(handles.iter().all(|&h| h != 0));
        assert_eq!(bridge_get_perf_counter(LIVE_WIDGETS), 8);

        for h in handles {
            widget_release(h);
        }
        assert_empty();
        assert_eq!(last_error(), None);
    }

    #[test]
    fn test_row_end_to_end() {
        reset();
        let row = create_row();
        let a = text("A");
        let b = text("B");
        linear_add_child(row, a);
        linear_add_child(row, b);
        widget_layout_root(row, 300.0, 0.0);

        let (fa, fb, root) = (frame(a), frame(b), frame(row));
        assert!(fb.x >= fa.right() + 10.0);
        for f in [fa, fb] {
            assert!(f.x >= 10.0 && f.right() <= 290.0);
        }
        assert_eq!(fa.y, fb.y);
        assert_eq!(root.width, 300.0);
        assert!(root.height >= fa.height.max(fb.height) + 20.0);

        for h in [a, b, row] {
            widget_release(h);
        }
        assert_empty();
    }

    #[test]
    fn test_column_frames_are_ordered_with_uniform_gap() {
        reset();
        let column = create_column();
        let children: Vec<u64> = (0..5).map(|i| text(&format!("item {i}"))).collect();
        for &c in &children {
            linear_add_child(column, c);
        }
        widget_layout_root(column, 240.0, 0.0);

        let frames: Vec<Frame> = children.iter().map(|&c| frame(c)).collect();
        assert_eq!(frames[0].y, 10.0);
        for f in &frames {
            assert_eq!(f.x, 10.0);
            assert_eq!(f.right(), 230.0);
        }
        for pair in frames.windows(2) {
            assert_eq!(pair[1].y - pair[0].bottom(), 10.0);
        }
        let root = frame(column);
        assert!(root.height - frames[4].bottom() >= 10.0);
    }

    #[test]
    fn test_set_size_zero_is_noop() {
        reset();
        let root = create_column();
        let child = create_switch();
        linear_add_child(root, child);

        widget_set_size(child, 80.0, 40.0);
        widget_set_size(child, 0.0, 0.0);
        widget_set_size(child, -1.0, 0.0);
        widget_layout_root(root, 300.0, 0.0);
        let f = frame(child);
        assert_eq!((f.width, f.height), (80.0, 40.0));

        widget_set_size(child, 0.0, 60.0);
        widget_layout_root(root, 300.0, 0.0);
        let f = frame(child);
        assert_eq!((f.width, f.height), (80.0, 60.0));
    }

    static BUTTON_CLICKS: AtomicU32 = AtomicU32::new(0);
    static TEXT_CLICKS: AtomicU32 = AtomicU32::new(0);

    extern "C" fn on_button() {
        BUTTON_CLICKS.fetch_add(1, Ordering::SeqCst);
    }

    extern "C" fn on_text() {
        TEXT_CLICKS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn test_on_click_only_fires_for_buttons() {
        reset();
        let title = CString::new("Tap").unwrap();
        let button = create_button(title.as_ptr());
        let label = text("not a button");

        // Not set yet.
        assert_eq!(widget_trigger_click(button), 0);

        widget_set_on_click(button, Some(on_button));
        widget_set_on_click(label, Some(on_text));
        assert_eq!(last_error(), None);

        assert_eq!(widget_trigger_click(label), 0);
        assert_eq!(TEXT_CLICKS.load(Ordering::SeqCst), 0);

        assert_eq!(widget_trigger_click(button), 1);
        assert_eq!(widget_trigger_click(button), 1);
        assert_eq!(BUTTON_CLICKS.load(Ordering::SeqCst), 2);

        widget_set_on_click(button, None);
        assert_eq!(widget_trigger_click(button), 0);
    }

    static CREATED_IN_CALLBACK: AtomicU64 = AtomicU64::new(0);

    extern "C" fn create_from_callback() {
        CREATED_IN_CALLBACK.store(create_switch(), Ordering::SeqCst);
    }

    #[test]
    fn test_callback_may_reenter_bridge() {
        reset();
        let title = CString::new("Add").unwrap();
        let button = create_button(title.as_ptr());
        widget_set_on_click(button, Some(create_from_callback));

        assert_eq!(widget_trigger_click(button), 1);
        let created = CREATED_IN_CALLBACK.load(Ordering::SeqCst);
        assert_ne!(created, 0);
        assert_eq!(widget_get_kind(created), WidgetKind::Switch as i32);
    }

    #[test]
    fn test_card_view_extraction_is_independent() {
        reset();
        let card = create_card();
        let v1 = get_ui_view_from_widget(card);
        let v2 = get_ui_view_from_widget(card);
        assert!(v1 != 0 && v2 != 0 && v1 != v2);
        assert_eq!(widget_same_view(v1, v2), 1);
        assert_eq!(widget_same_view(card, v1), 1);

        widget_release(card);
        view_release(v1);
        assert_eq!(bridge_get_perf_counter(LIVE_VIEWS), 1);

        // v2 is still usable.
        let mut w = 0.0;
        assert_eq!(
            view_get_frame(
                v2,
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                &mut w,
                std::ptr::null_mut()
            ),
            0
        );
        assert_eq!(view_get_subview_count(v2), 0);

        view_release(v2);
        assert_empty();
    }

    #[test]
    fn test_stale_handle_is_reported_not_ub() {
        reset();
        let h = create_switch();
        widget_release(h);

        bridge_clear_error();
        widget_set_padding(h, 4.0);
        let msg = last_error().expect("stale use should record an error");
        assert!(msg.contains("Stale handle"), "got: {msg}");

        bridge_clear_error();
        widget_release(h);
        assert!(last_error().is_some());
        assert_eq!(widget_get_kind(h), -1);
    }

    #[test]
    fn test_view_handle_rejected_by_widget_mutators() {
        reset();
        let card = create_card();
        let view = get_ui_view_from_widget(card);

        bridge_clear_error();
        widget_set_corner_radius(view, 3.0);
        let msg = last_error().unwrap();
        assert!(msg.contains("expected a widget handle"), "got: {msg}");

        view_release(view);
        widget_release(card);
        assert_empty();
    }

    #[test]
    fn test_null_string_is_rejected() {
        reset();
        assert_eq!(create_text(std::ptr::null()), 0);
        assert!(last_error().unwrap().contains("text"));
        widget_log(std::ptr::null());
        assert!(last_error().unwrap().contains("message"));
        bridge_clear_error();
        assert_eq!(last_error(), None);
    }

    #[test]
    fn test_generic_constructor() {
        reset();
        let card = bridge_create_widget(WidgetKind::Card as u8, std::ptr::null());
        assert_eq!(widget_get_kind(card), WidgetKind::Card as i32);

        assert_eq!(bridge_create_widget(42, std::ptr::null()), 0);
        assert!(last_error().unwrap().contains("42"));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        reset();
        let bytes = [b'o', b'k', 0xFF, 0];
        let h = create_text(bytes.as_ptr() as *const c_char);
        assert_ne!(h, 0);

        let len = bridge_debug_snapshot_len(h);
        assert!(len > 0);
        let mut buf = vec![0u8; len as usize + 1];
        assert_eq!(bridge_debug_snapshot(h, buf.as_mut_ptr(), buf.len() as u32), len);
        let json: serde_json::Value = serde_json::from_slice(&buf[..len as usize]).unwrap();
        assert_eq!(json["text"], "ok\u{FFFD}");
        assert_eq!(buf[len as usize], 0);
    }

    #[test]
    fn test_container_double_set_child_current_behaviour() {
        reset();
        let container = create_container();
        let first = text("first");
        let second = text("second");
        container_set_child(container, first);
        container_set_child(container, second);

        assert_eq!(view_get_subview_count(container), 2);
        widget_layout_root(container, 200.0, 0.0);
        // Centered on the cross axis, laid out side by side on the main axis.
        assert!(frame(second).x >= frame(first).right());
    }

    #[test]
    fn test_wrong_parent_kind_is_noop() {
        reset();
        let label = text("leaf");
        let child = create_switch();
        container_set_child(label, child);
        linear_add_child(label, child);
        assert_eq!(view_get_subview_count(label), 0);
        assert_eq!(last_error(), None);
    }
}

//! List reordering helpers backing the drag-and-drop editors.
//!
//! DESIGN
//! ======
//! Recipe group, item, and step editors all express a drop gesture as
//! (source index, optional destination index). The helpers here mutate the
//! backing `Vec` with single-element splice semantics so every unmoved
//! element keeps its relative order; the caller then writes the vector back
//! into its signal. Haptics are fire-and-forget and never influence the
//! reorder result.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

/// Move the element at `src` to `dst` within a single list.
///
/// Returns `true` when the list changed. No-op when `dst` is `None` (drop
/// outside any slot), equals `src`, or either index is out of bounds.
pub fn reorder<T>(list: &mut Vec<T>, src: usize, dst: Option<usize>) -> bool {
    let Some(dst) = dst else {
        return false;
    };
    if src == dst || src >= list.len() || dst >= list.len() {
        return false;
    }
    let item = list.remove(src);
    list.insert(dst, item);
    true
}

/// Remove the element at `src`, used for the "combine" drop gesture that
/// merges a dragged row into its target.
pub fn remove_combined<T>(list: &mut Vec<T>, src: usize) -> Option<T> {
    if src >= list.len() {
        return None;
    }
    Some(list.remove(src))
}

/// Move the element at `src` in `from` to position `dst` in `to`.
///
/// `dst` past the end of the destination appends. Returns `false` without
/// mutating either list when `src` is out of bounds.
pub fn move_between<T>(from: &mut Vec<T>, to: &mut Vec<T>, src: usize, dst: usize) -> bool {
    if src >= from.len() {
        return false;
    }
    let item = from.remove(src);
    let dst = dst.min(to.len());
    to.insert(dst, item);
    true
}

/// Fire a short haptic pulse on drag start where the platform supports it.
///
/// Best effort only; absence of the API (or an SSR context) is silently
/// ignored so the drag result is identical with or without haptics.
pub fn haptic_tick() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().vibrate_with_duration(10);
        }
    }
}

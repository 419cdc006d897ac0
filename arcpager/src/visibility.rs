use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{ItemSlot, MaxVisible, OffsetModel, RemovalBounds, VisibleItem, ZAlignment};

/// Order in which the visible set is reported to the render boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawOrder {
    /// Ascending position.
    Position,
    /// Ascending distance from the center; ties are broken by the z alignment.
    NearestFirst(ZAlignment),
}

/// Selects the slots that are laid out for the model's current offset.
pub fn select_visible(
    model: &OffsetModel,
    bounds: RemovalBounds,
    max_visible: MaxVisible,
    order: DrawOrder,
) -> Vec<VisibleItem> {
    let mut out = Vec::new();
    select_visible_into(model, bounds, max_visible, order, &mut out);
    out
}

/// Same as [`select_visible`], but reuses `out` (cleared first).
///
/// Starting from the centered slot, the window grows alternately forward and backward while
/// target offsets stay within `bounds`. In bounded mode slots outside `[0, count)` are skipped.
/// Growth stops once `max_visible` slots have been selected.
pub fn select_visible_into(
    model: &OffsetModel,
    bounds: RemovalBounds,
    max_visible: MaxVisible,
    order: DrawOrder,
    out: &mut Vec<VisibleItem>,
) {
    out.clear();
    let count = model.count();
    if count == 0 {
        return;
    }

    let infinite = model.is_infinite();
    let unbounded_bounds =
        !(bounds.min_remove_offset.is_finite() && bounds.max_remove_offset.is_finite());
    // An infinite path with infinite bounds shows each backing item at most once.
    let limit = match max_visible.limit() {
        Some(n) => n,
        None if infinite && unbounded_bounds => count,
        None => usize::MAX,
    };
    if limit == 0 {
        return;
    }

    let accepts = |position: i64| -> Option<VisibleItem> {
        if !infinite && (position < 0 || position >= count as i64) {
            return None;
        }
        let target_offset = model.target_offset(position);
        if !bounds.contains(target_offset) {
            return None;
        }
        Some(VisibleItem {
            slot: ItemSlot {
                position,
                index: model.wrap(position),
            },
            target_offset,
        })
    };

    let center = model.center_position();
    if let Some(item) = accepts(center) {
        out.push(item);
    }

    let mut forward = true;
    let mut backward = true;
    let mut step = 1i64;
    while (forward || backward) && out.len() < limit {
        if forward {
            match accepts(center + step) {
                Some(item) => out.push(item),
                None => forward = false,
            }
        }
        if out.len() >= limit {
            break;
        }
        if backward {
            match accepts(center - step) {
                Some(item) => out.push(item),
                None => backward = false,
            }
        }
        step += 1;
    }

    match order {
        DrawOrder::Position => out.sort_by_key(|it| it.slot.position),
        DrawOrder::NearestFirst(z) => out.sort_by(|a, b| nearest_first(a, b, z)),
    }
    ptrace!(
        count,
        visible = out.len(),
        center,
        "select_visible"
    );
}

fn nearest_first(a: &VisibleItem, b: &VisibleItem, z: ZAlignment) -> Ordering {
    a.target_offset
        .abs()
        .total_cmp(&b.target_offset.abs())
        .then_with(|| match z {
            ZAlignment::LeftOnTop => a.target_offset.total_cmp(&b.target_offset),
            ZAlignment::RightOnTop => b.target_offset.total_cmp(&a.target_offset),
            ZAlignment::CenterOnTop => a.slot.position.cmp(&b.slot.position),
        })
}

//! Selection and scrolling for the card list
//!
//! The list shows a window of `height` cards starting at `offset`. Every move
//! is expressed as a target index; `select` clamps it to the list and slides
//! the window just far enough to keep the selection visible.

/// Select `target` (clamped to the last card) and keep it inside the window
pub fn select(selected: &mut usize, offset: &mut usize, target: usize, count: usize, height: usize) {
    if count == 0 {
        *selected = 0;
        *offset = 0;
        return;
    }

    let height = height.max(1);
    let target = target.min(count - 1);
    *selected = target;

    if target < *offset {
        *offset = target;
    } else if target >= *offset + height {
        *offset = target + 1 - height;
    }
}

/// Index one full window below the selection
pub fn page_down_target(selected: usize, height: usize) -> usize {
    selected.saturating_add(height.max(1))
}

/// Index one full window above the selection
pub fn page_up_target(selected: usize, height: usize) -> usize {
    selected.saturating_sub(height.max(1))
}

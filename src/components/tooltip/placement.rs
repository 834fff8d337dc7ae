//! Tooltip placement
//!
//! Corner-anchoring relative to the cursor: the vertical and horizontal
//! sides are chosen independently (the side with enough room, else the one
//! with less overflow), then the anchored corner position is clamped to the
//! viewport with a fixed margin.

/// Gap between the cursor and the anchored tooltip corner.
pub const CURSOR_OFFSET: f64 = 12.0;
/// Minimum distance kept from every viewport edge.
pub const VIEWPORT_MARGIN: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    Top,
    Bottom,
}

impl VerticalSide {
    pub fn as_class(&self) -> &'static str {
        match self {
            VerticalSide::Top => "top",
            VerticalSide::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalSide {
    Left,
    Right,
}

impl HorizontalSide {
    pub fn as_class(&self) -> &'static str {
        match self {
            HorizontalSide::Left => "left",
            HorizontalSide::Right => "right",
        }
    }
}

/// A resolved position: final top-left coordinates plus the two side
/// classes the stylesheet uses for the arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub vertical: VerticalSide,
    pub horizontal: HorizontalSide,
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Place a tooltip of `width` x `height` for a cursor at (`x`, `y`) in a
/// `viewport_w` x `viewport_h` viewport.
pub fn compute(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    viewport_w: f64,
    viewport_h: f64,
) -> Placement {
    let space_top = y;
    let space_bottom = viewport_h - y;
    let space_left = x;
    let space_right = viewport_w - x;

    let vertical = if space_bottom >= height + CURSOR_OFFSET {
        VerticalSide::Bottom
    } else if space_top >= height + CURSOR_OFFSET {
        VerticalSide::Top
    } else {
        // Neither side fully fits: take the one with less overflow.
        let overflow_bottom = (height + CURSOR_OFFSET) - space_bottom;
        let overflow_top = (height + CURSOR_OFFSET) - space_top;
        if overflow_bottom <= overflow_top {
            VerticalSide::Bottom
        } else {
            VerticalSide::Top
        }
    };

    let horizontal = if space_right >= width + CURSOR_OFFSET {
        HorizontalSide::Right
    } else if space_left >= width + CURSOR_OFFSET {
        HorizontalSide::Left
    } else {
        let overflow_right = (width + CURSOR_OFFSET) - space_right;
        let overflow_left = (width + CURSOR_OFFSET) - space_left;
        if overflow_right <= overflow_left {
            HorizontalSide::Right
        } else {
            HorizontalSide::Left
        }
    };

    // Anchor the corner nearest the cursor.
    let left = match horizontal {
        HorizontalSide::Right => x + CURSOR_OFFSET,
        HorizontalSide::Left => x - width - CURSOR_OFFSET,
    };
    let top = match vertical {
        VerticalSide::Bottom => y + CURSOR_OFFSET,
        VerticalSide::Top => y - height - CURSOR_OFFSET,
    };

    Placement {
        left: clamp(left, VIEWPORT_MARGIN, viewport_w - width - VIEWPORT_MARGIN).round(),
        top: clamp(top, VIEWPORT_MARGIN, viewport_h - height - VIEWPORT_MARGIN).round(),
        vertical,
        horizontal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VW: f64 = 1280.0;
    const VH: f64 = 800.0;

    #[test]
    fn test_prefers_below_and_right_of_cursor() {
        let p = compute(100.0, 100.0, 200.0, 120.0, VW, VH);
        assert_eq!(p.vertical, VerticalSide::Bottom);
        assert_eq!(p.horizontal, HorizontalSide::Right);
        assert_eq!(p.left, 112.0);
        assert_eq!(p.top, 112.0);
    }

    #[test]
    fn test_flips_above_and_left_near_bottom_right_corner() {
        let p = compute(1250.0, 780.0, 200.0, 120.0, VW, VH);
        assert_eq!(p.vertical, VerticalSide::Top);
        assert_eq!(p.horizontal, HorizontalSide::Left);
        assert_eq!(p.left, 1250.0 - 200.0 - CURSOR_OFFSET);
        assert_eq!(p.top, 780.0 - 120.0 - CURSOR_OFFSET);
    }

    #[test]
    fn test_sides_are_chosen_independently() {
        // Plenty of room below, none to the right.
        let p = compute(1250.0, 100.0, 200.0, 120.0, VW, VH);
        assert_eq!(p.vertical, VerticalSide::Bottom);
        assert_eq!(p.horizontal, HorizontalSide::Left);
    }

    #[test]
    fn test_no_vertical_room_picks_lesser_overflow() {
        // A tooltip taller than either half of a short viewport; the cursor
        // sits slightly above center, so below overflows less.
        let p = compute(100.0, 140.0, 100.0, 300.0, VW, 300.0);
        assert_eq!(p.vertical, VerticalSide::Bottom);
    }

    #[test]
    fn test_position_clamps_to_viewport_margin() {
        // Above-side placement that would land exactly on the viewport edge
        // is pushed back to the margin.
        let p = compute(100.0, 132.0, 200.0, 120.0, VW, 140.0);
        assert_eq!(p.vertical, VerticalSide::Top);
        assert_eq!(p.top, VIEWPORT_MARGIN);
        assert!(p.left >= VIEWPORT_MARGIN);
        assert!(p.left <= VW - 200.0 - VIEWPORT_MARGIN);
    }

    #[test]
    fn test_rounds_to_whole_pixels() {
        let p = compute(100.3, 100.7, 200.0, 120.0, VW, VH);
        assert_eq!(p.left, p.left.round());
        assert_eq!(p.top, p.top.round());
    }
}

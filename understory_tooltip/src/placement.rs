// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-constrained placement of a floating element next to a target.
//!
//! ## Overview
//!
//! [`place`] is a pure function of four inputs: the floating element's
//! measured size, the target's bounding box, the viewport size, and the
//! preferred [`Side`]. All coordinates are viewport-fixed.
//!
//! ## Algorithm
//!
//! 1. Candidate: offset the floating box by [`PlacementOptions::gap`] from the
//!    preferred edge of the target, centered on the perpendicular axis.
//! 2. Flip: if the candidate's leading edge crosses the padding boundary, use
//!    the opposite side once. The flipped candidate is kept even if it does
//!    not fit either; there is no second flip.
//! 3. Clamp: slide the box into `[padding, viewport - size - padding]` on both
//!    axes. When that range is empty the lower bound wins, so the origin never
//!    goes below `padding`.
//!
//! Flip handles targets near one edge. Clamp handles targets near a corner,
//! where no side fits and the box has to slide instead.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use understory_tooltip::placement::{place, PlacementOptions};
//! use understory_tooltip::types::Side;
//!
//! // Target near the top of the viewport: `Top` does not fit, so it flips.
//! let target = Rect::from_origin_size((100.0, 10.0), (50.0, 20.0));
//! let p = place(
//!     Size::new(30.0, 40.0),
//!     target,
//!     Size::new(1280.0, 900.0),
//!     Side::Top,
//!     PlacementOptions::default(),
//! );
//! assert_eq!(p.side, Side::Bottom);
//! assert!(p.flipped);
//! assert_eq!(p.origin, Point::new(110.0, 38.0));
//! ```

use kurbo::{Point, Rect, Size};

use crate::types::Side;

/// Default distance between the target edge and the floating element.
pub const DEFAULT_GAP: f64 = 8.0;

/// Default minimum distance between the floating element and the viewport edge.
pub const DEFAULT_VIEWPORT_PADDING: f64 = 16.0;

/// Tunables for [`place`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementOptions {
    /// Distance between the target edge and the floating element.
    pub gap: f64,
    /// Minimum distance kept from every viewport edge.
    pub padding: f64,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            padding: DEFAULT_VIEWPORT_PADDING,
        }
    }
}

/// Result of [`place`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Top-left corner of the floating element, in viewport coordinates.
    pub origin: Point,
    /// Side actually used, after the flip rule.
    pub side: Side,
    /// True if the preferred side was replaced by its opposite.
    pub flipped: bool,
}

impl Placement {
    /// The floating element's box for a given size.
    pub fn rect(&self, floating: Size) -> Rect {
        Rect::from_origin_size(self.origin, floating)
    }
}

/// Geometry measured for one placement pass.
///
/// Recomputed on every show and reposition; never stored between passes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurement {
    /// Rendered size of the floating element.
    pub floating: Size,
    /// Bounding box of the target element.
    pub target: Rect,
    /// Size of the viewport.
    pub viewport: Size,
}

impl Measurement {
    /// Run [`place`] on this geometry.
    pub fn place(&self, side: Side, options: PlacementOptions) -> Placement {
        place(self.floating, self.target, self.viewport, side, options)
    }
}

/// Compute where the floating element goes.
///
/// `floating` is the rendered size of the floating element, `target` the
/// target's bounding box and `viewport` the visible area, all in the same
/// viewport-fixed space. See the [module docs](self) for the algorithm.
pub fn place(
    floating: Size,
    target: Rect,
    viewport: Size,
    side: Side,
    options: PlacementOptions,
) -> Placement {
    let mut used = side;
    let mut origin = candidate(floating, target, side, options.gap);
    let flipped = overflows_leading_edge(origin, floating, viewport, side, options.padding);
    if flipped {
        used = side.opposite();
        origin = candidate(floating, target, used, options.gap);
    }

    let x = clamp_axis(origin.x, floating.width, viewport.width, options.padding);
    let y = clamp_axis(origin.y, floating.height, viewport.height, options.padding);

    Placement {
        origin: Point::new(x, y),
        side: used,
        flipped,
    }
}

fn candidate(floating: Size, target: Rect, side: Side, gap: f64) -> Point {
    let center_x = target.x0 + (target.width() - floating.width) / 2.0;
    let center_y = target.y0 + (target.height() - floating.height) / 2.0;
    match side {
        Side::Top => Point::new(center_x, target.y0 - floating.height - gap),
        Side::Bottom => Point::new(center_x, target.y1 + gap),
        Side::Left => Point::new(target.x0 - floating.width - gap, center_y),
        Side::Right => Point::new(target.x1 + gap, center_y),
    }
}

/// True if the edge of the box facing away from the target crosses the padding boundary.
fn overflows_leading_edge(
    origin: Point,
    floating: Size,
    viewport: Size,
    side: Side,
    padding: f64,
) -> bool {
    match side {
        Side::Top => origin.y < padding,
        Side::Bottom => origin.y + floating.height > viewport.height - padding,
        Side::Left => origin.x < padding,
        Side::Right => origin.x + floating.width > viewport.width - padding,
    }
}

fn clamp_axis(pos: f64, extent: f64, viewport: f64, padding: f64) -> f64 {
    // Upper bound first so `padding` wins when the element is larger than the viewport.
    pos.min(viewport - extent - padding).max(padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1280.0, 900.0);

    fn opts() -> PlacementOptions {
        PlacementOptions::default()
    }

    #[test]
    fn preferred_side_when_it_fits() {
        let target = Rect::from_origin_size((400.0, 400.0), (100.0, 40.0));
        let floating = Size::new(60.0, 20.0);

        let top = place(floating, target, VIEWPORT, Side::Top, opts());
        assert_eq!(top.side, Side::Top);
        assert!(!top.flipped);
        assert_eq!(top.origin, Point::new(420.0, 372.0));

        let bottom = place(floating, target, VIEWPORT, Side::Bottom, opts());
        assert_eq!(bottom.origin, Point::new(420.0, 448.0));

        let left = place(floating, target, VIEWPORT, Side::Left, opts());
        assert_eq!(left.origin, Point::new(332.0, 410.0));

        let right = place(floating, target, VIEWPORT, Side::Right, opts());
        assert_eq!(right.origin, Point::new(508.0, 410.0));
    }

    #[test]
    fn top_flips_to_bottom_near_top_edge() {
        let target = Rect::from_origin_size((100.0, 10.0), (50.0, 20.0));
        let p = place(Size::new(30.0, 40.0), target, VIEWPORT, Side::Top, opts());
        assert_eq!(p.side, Side::Bottom);
        assert!(p.flipped);
        assert_eq!(p.origin, Point::new(110.0, 38.0));
    }

    #[test]
    fn bottom_flips_to_top_near_bottom_edge() {
        let target = Rect::from_origin_size((100.0, 860.0), (50.0, 20.0));
        let p = place(Size::new(30.0, 40.0), target, VIEWPORT, Side::Bottom, opts());
        assert_eq!(p.side, Side::Top);
        assert_eq!(p.origin.y, 860.0 - 40.0 - 8.0);
    }

    #[test]
    fn right_flips_to_left_near_right_edge() {
        let target = Rect::from_origin_size((1200.0, 400.0), (50.0, 20.0));
        let p = place(Size::new(80.0, 20.0), target, VIEWPORT, Side::Right, opts());
        assert_eq!(p.side, Side::Left);
        assert_eq!(p.origin.x, 1200.0 - 80.0 - 8.0);
    }

    #[test]
    fn zero_size_target_in_corner_clamps_to_padding() {
        let target = Rect::from_origin_size((0.0, 0.0), (0.0, 0.0));
        let p = place(Size::new(30.0, 40.0), target, VIEWPORT, Side::Left, opts());
        // Left overflows, flips to right, which lands at x = 8 and clamps.
        assert_eq!(p.side, Side::Right);
        assert_eq!(p.origin.x, DEFAULT_VIEWPORT_PADDING);
        assert_eq!(p.origin.y, DEFAULT_VIEWPORT_PADDING);
    }

    // A single flip only: when neither side fits, the flipped side is kept and
    // clamping pulls the box back inside.
    #[test]
    fn single_flip_then_clamp_when_neither_side_fits() {
        let viewport = Size::new(200.0, 100.0);
        let target = Rect::from_origin_size((80.0, 30.0), (40.0, 40.0));
        let p = place(Size::new(60.0, 50.0), target, viewport, Side::Top, opts());
        assert!(p.flipped);
        assert_eq!(p.side, Side::Bottom);
        assert_eq!(p.origin.y, 100.0 - 50.0 - 16.0);
        assert_eq!(p.origin.x, 70.0);
    }

    #[test]
    fn oversized_element_pins_to_padding() {
        let viewport = Size::new(100.0, 100.0);
        let target = Rect::from_origin_size((40.0, 40.0), (10.0, 10.0));
        let p = place(Size::new(300.0, 300.0), target, viewport, Side::Right, opts());
        assert_eq!(p.origin, Point::new(16.0, 16.0));
    }

    #[test]
    fn custom_gap_and_padding() {
        let options = PlacementOptions {
            gap: 2.0,
            padding: 0.0,
        };
        let target = Rect::from_origin_size((50.0, 50.0), (20.0, 20.0));
        let p = place(Size::new(10.0, 10.0), target, VIEWPORT, Side::Top, options);
        assert_eq!(p.origin, Point::new(55.0, 38.0));
        assert_eq!(p.rect(Size::new(10.0, 10.0)), Rect::new(55.0, 38.0, 65.0, 48.0));
    }

    #[test]
    fn result_stays_inside_padded_viewport() {
        let floating = Size::new(120.0, 48.0);
        let sides = [Side::Top, Side::Bottom, Side::Left, Side::Right];
        for xi in 0..12_i32 {
            for yi in 0..9_i32 {
                let target = Rect::from_origin_size(
                    (f64::from(xi) * 110.0, f64::from(yi) * 100.0),
                    (40.0, 24.0),
                );
                for side in sides {
                    let r = place(floating, target, VIEWPORT, side, opts()).rect(floating);
                    assert!(r.x0 >= 16.0 && r.y0 >= 16.0, "{r:?} for {side:?}");
                    assert!(r.x1 <= 1280.0 - 16.0 && r.y1 <= 900.0 - 16.0, "{r:?}");
                }
            }
        }
    }
}

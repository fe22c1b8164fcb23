#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Frame-stepped tile interpolation with guaranteed termination.
//!
//! Each frame a tile's visual position advances a fraction of the remaining
//! distance toward its target, axis by axis, producing an exponential
//! ease-out. A pure fractional approach only converges asymptotically, so
//! once the remaining distance on an axis falls within [`SNAP_THRESHOLD`]
//! the axis clamps exactly onto the target. Settling is therefore an exact
//! floating-point equality, never a tolerance comparison.

use tile_slide_core::VisualPosition;

/// Remaining distance, in world units, at which an axis clamps to its target.
pub const SNAP_THRESHOLD: f32 = 1.0;

/// Smallest permitted speed divisor. A divisor of one snaps in a single frame.
pub const MIN_SPEED_DIVISOR: f32 = 1.0;

/// Advances one axis of a visual position toward its target.
///
/// Moves by `remaining / speed_divisor` while more than [`SNAP_THRESHOLD`]
/// remains, otherwise returns the target exactly.
#[must_use]
pub fn advance_axis(current: f32, target: f32, speed_divisor: f32) -> f32 {
    let divisor = speed_divisor.max(MIN_SPEED_DIVISOR);
    let remaining = target - current;
    if remaining.abs() > SNAP_THRESHOLD {
        current + remaining / divisor
    } else {
        target
    }
}

/// Advances a visual position one frame toward its target.
///
/// Axes interpolate independently. The returned flag reports whether the
/// tile settled, meaning both axes now equal the target exactly.
#[must_use]
pub fn advance(
    visual: VisualPosition,
    target: VisualPosition,
    speed_divisor: f32,
) -> (VisualPosition, bool) {
    let x = advance_axis(visual.x(), target.x(), speed_divisor);
    let y = advance_axis(visual.y(), target.y(), speed_divisor);
    let next = VisualPosition::new(x, y);
    let settled = x == target.x() && y == target.y();
    (next, settled)
}

/// Reports whether a visual position already rests exactly on its target.
#[must_use]
pub fn is_settled(visual: VisualPosition, target: VisualPosition) -> bool {
    visual.x() == target.x() && visual.y() == target.y()
}

#[cfg(test)]
mod tests {
    use super::{advance, advance_axis, is_settled, SNAP_THRESHOLD};
    use tile_slide_core::VisualPosition;

    #[test]
    fn first_tick_covers_one_fifteenth_of_the_distance() {
        let visual = VisualPosition::new(100.0, 100.0);
        let target = VisualPosition::new(200.0, 200.0);
        let (next, settled) = advance(visual, target, 15.0);
        assert!((next.x() - 106.666_67).abs() < 1e-3);
        assert!((next.y() - 106.666_67).abs() < 1e-3);
        assert!(!settled);
    }

    #[test]
    fn repeated_ticks_snap_exactly_onto_the_target() {
        let mut visual = VisualPosition::new(100.0, 100.0);
        let target = VisualPosition::new(200.0, 200.0);
        let mut ticks = 0;
        loop {
            let (next, settled) = advance(visual, target, 15.0);
            visual = next;
            ticks += 1;
            if settled {
                break;
            }
            assert!(ticks < 1_000, "interpolation failed to terminate");
        }
        assert_eq!(visual.x(), 200.0);
        assert_eq!(visual.y(), 200.0);
        assert!(is_settled(visual, target));
    }

    #[test]
    fn axes_settle_independently() {
        let visual = VisualPosition::new(199.5, 100.0);
        let target = VisualPosition::new(200.0, 200.0);
        let (next, settled) = advance(visual, target, 15.0);
        assert_eq!(next.x(), 200.0);
        assert!(next.y() < 200.0);
        assert!(!settled);
    }

    #[test]
    fn interpolation_works_in_the_negative_direction() {
        let next = advance_axis(200.0, 100.0, 10.0);
        assert!((next - 190.0).abs() < 1e-4);
        assert_eq!(advance_axis(100.5, 100.0, 10.0), 100.0);
    }

    #[test]
    fn remaining_distance_at_the_threshold_snaps() {
        let next = advance_axis(0.0, SNAP_THRESHOLD, 15.0);
        assert_eq!(next, SNAP_THRESHOLD);
    }

    #[test]
    fn degenerate_divisors_clamp_to_a_single_frame_snap() {
        // A divisor below one would overshoot; it clamps to direct movement.
        let next = advance_axis(0.0, 100.0, 0.0);
        assert_eq!(next, 100.0);
    }

    #[test]
    fn settled_positions_stay_put() {
        let at_rest = VisualPosition::new(130.0, 260.0);
        let (next, settled) = advance(at_rest, at_rest, 15.0);
        assert_eq!(next, at_rest);
        assert!(settled);
    }
}

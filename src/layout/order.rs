//! Deterministic seat ordering
//!
//! Seats are swept left to right by angle. Seats sharing an angle are ordered outer
//! row first. Party assignment and redraw diffing both rely on this order.

use std::cmp::Ordering;

use super::types::SeatSlot;

/// Total order over slots: ascending angle, then descending radius
pub fn compare_slots(a: &SeatSlot, b: &SeatSlot) -> Ordering {
    a.angle
        .total_cmp(&b.angle)
        .then_with(|| b.radius.total_cmp(&a.radius))
}

/// Sort slots in place into sweep order
pub fn order_seats(slots: &mut [SeatSlot]) {
    slots.sort_by(compare_slots);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(row: usize, radius: f64, angle: f64) -> SeatSlot {
        SeatSlot { row, radius, angle }
    }

    #[test]
    fn test_sorted_by_angle() {
        let mut slots = vec![slot(0, 1.0, -0.5), slot(0, 1.0, -2.5), slot(1, 2.0, -1.5)];
        order_seats(&mut slots);
        let angles: Vec<f64> = slots.iter().map(|s| s.angle).collect();
        assert_eq!(angles, vec![-2.5, -1.5, -0.5]);
    }

    #[test]
    fn test_ties_put_outer_row_first() {
        let mut slots = vec![slot(0, 1.0, -1.0), slot(2, 3.0, -1.0), slot(1, 2.0, -1.0)];
        order_seats(&mut slots);
        let rows: Vec<usize> = slots.iter().map(|s| s.row).collect();
        assert_eq!(rows, vec![2, 1, 0]);
    }
}

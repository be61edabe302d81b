//! Seat placement
//!
//! Expands a [`RowSolution`] into concrete seat slots. The solver may overshoot the
//! requested seat count; the excess is trimmed as evenly as possible across rows,
//! with the remainder taken from the innermost rows first.

use std::f64::consts::PI;

use log::trace;

use super::solver::RowSolution;
use super::types::SeatSlot;
use super::LayoutError;

/// Trimmed seat count and radius of one row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlan {
    pub index: usize,
    pub seats: usize,
    /// Center radius of the row band
    pub radius: f64,
}

impl RowPlan {
    pub fn angle_per_seat(&self) -> f64 {
        PI / self.seats as f64
    }

    /// Angle of seat `j` in this row, measured from the rightmost point
    pub fn angle(&self, j: usize) -> f64 {
        -PI + self.angle_per_seat() * (j as f64 + 0.5)
    }
}

/// Validated per-row plan for a whole hemicycle
#[derive(Debug, Clone, PartialEq)]
pub struct RowGeometry {
    pub rows: Vec<RowPlan>,
    /// Radial thickness of each row band
    pub row_width: f64,
}

impl RowGeometry {
    pub fn total_seats(&self) -> usize {
        self.rows.iter().map(|r| r.seats).sum()
    }
}

/// Compute trimmed seat counts and radii for every row.
///
/// Fails with [`LayoutError::SeatPlacementInfeasible`] if trimming would leave any
/// row with fewer than one seat; no slots are produced in that case.
pub fn plan_rows(
    solution: &RowSolution,
    outer_radius: f64,
    inner_radius: f64,
    total: usize,
) -> Result<RowGeometry, LayoutError> {
    let n_rows = solution.rows as u64;
    let row_width = (outer_radius - inner_radius) / solution.rows as f64;
    let to_remove = solution.overshoot(total);
    let per_row = to_remove / n_rows;
    let remainder = to_remove % n_rows;

    let mut rows = Vec::with_capacity(solution.rows);
    for i in 0..solution.rows {
        let extra = if remainder > i as u64 { 1 } else { 0 };
        let seats = solution.row_capacity(i) as i64 - per_row as i64 - extra;
        if seats < 1 {
            return Err(LayoutError::SeatPlacementInfeasible { row: i, seats });
        }
        let radius = inner_radius + row_width * (i as f64 + 0.5);
        trace!("row {}: {} seats at radius {}", i, seats, radius);
        rows.push(RowPlan {
            index: i,
            seats: seats as usize,
            radius,
        });
    }

    Ok(RowGeometry { rows, row_width })
}

/// Expand a row plan into evenly spaced seat slots, row by row
pub fn place_seats(geometry: &RowGeometry) -> Vec<SeatSlot> {
    let mut slots = Vec::with_capacity(geometry.total_seats());
    for row in &geometry.rows {
        for j in 0..row.seats {
            slots.push(SeatSlot {
                row: row.index,
                radius: row.radius,
                angle: row.angle(j),
            });
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::solver::solve_rows;

    #[test]
    fn test_five_seats_single_row() {
        let solution = solve_rows(5, 0.4).unwrap();
        let geometry = plan_rows(&solution, 100.0, 40.0, 5).unwrap();
        assert_eq!(geometry.rows.len(), 1);
        assert_eq!(geometry.rows[0].seats, 5);
        assert_eq!(geometry.row_width, 60.0);
        assert_eq!(geometry.rows[0].radius, 70.0);

        let slots = place_seats(&geometry);
        let expected = [-2.827, -2.199, -1.571, -0.942, -0.314];
        for (slot, want) in slots.iter().zip(expected) {
            assert!((slot.angle - want).abs() < 1e-3, "{} vs {}", slot.angle, want);
        }
    }

    #[test]
    fn test_trim_matches_total() {
        for total in [1, 2, 7, 50, 101, 650] {
            let solution = solve_rows(total, 0.4).unwrap();
            let geometry = plan_rows(&solution, 100.0, 40.0, total).unwrap();
            assert_eq!(geometry.total_seats(), total);
            assert_eq!(place_seats(&geometry).len(), total);
        }
    }

    #[test]
    fn test_remainder_trimmed_from_inner_rows() {
        // Two rows of capacity 3 and 6, trimming 3 seats: one each, plus the
        // remainder from row 0
        let solution = RowSolution {
            rows: 2,
            b: 1.0,
            max_seats: 9,
        };
        let geometry = plan_rows(&solution, 10.0, 2.0, 6).unwrap();
        assert_eq!(geometry.rows[0].seats, 1);
        assert_eq!(geometry.rows[1].seats, 5);
    }

    #[test]
    fn test_row_radius_increases() {
        let solution = solve_rows(200, 0.3).unwrap();
        let geometry = plan_rows(&solution, 100.0, 30.0, 200).unwrap();
        for pair in geometry.rows.windows(2) {
            assert!(pair[1].radius > pair[0].radius);
        }
    }

    #[test]
    fn test_over_trimming_is_infeasible() {
        let solution = RowSolution {
            rows: 2,
            b: 1.0,
            max_seats: 9,
        };
        let result = plan_rows(&solution, 10.0, 2.0, 2);
        assert_eq!(
            result,
            Err(LayoutError::SeatPlacementInfeasible { row: 0, seats: -1 })
        );
    }

    #[test]
    fn test_angles_symmetric_within_row() {
        let solution = solve_rows(80, 0.4).unwrap();
        let geometry = plan_rows(&solution, 100.0, 40.0, 80).unwrap();
        for row in &geometry.rows {
            let step = row.angle_per_seat();
            assert!((row.angle(0) - (-PI + step / 2.0)).abs() < 1e-9);
            assert!((row.angle(row.seats - 1) - (-step / 2.0)).abs() < 1e-9);
        }
    }
}

//! Row capacity solver
//!
//! Decides how many concentric rows a hemicycle needs for a given number of seats.
//! Row `i` of a solution can hold `floor(pi * (b + i))` seats, where `b` grows by
//! `coef / (1 - coef)` every time a row is added. Rows are added until the summed
//! capacity reaches the requested seat count.

use std::f64::consts::PI;

use log::{debug, trace};

use super::LayoutError;

/// Upper bound on the number of rows the solver will try
pub const MAX_ROWS: usize = 1000;

/// Number of rows and the geometric parameter found by [`solve_rows`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSolution {
    pub rows: usize,
    /// Value of `b` after the last row was added
    pub b: f64,
    /// Summed capacity of all rows before trimming
    pub max_seats: u64,
}

impl RowSolution {
    /// Capacity of row `index` before trimming
    pub fn row_capacity(&self, index: usize) -> u64 {
        row_capacity(self.b, index)
    }

    /// Seats that must be removed so the rows hold exactly `total` seats
    pub fn overshoot(&self, total: usize) -> u64 {
        self.max_seats.saturating_sub(total as u64)
    }
}

/// Seats fitting on row `index` for the geometric parameter `b`
pub fn row_capacity(b: f64, index: usize) -> u64 {
    (PI * (b + index as f64)).floor() as u64
}

/// Summed capacity of the first `rows` rows
pub fn max_seat_number(b: f64, rows: usize) -> u64 {
    (0..rows).fold(0u64, |acc, i| acc.saturating_add(row_capacity(b, i)))
}

/// Find the fewest rows whose capacity covers `total` seats.
///
/// `inner_radius_coef` must already be validated to lie in (0, 1).
pub fn solve_rows(total: usize, inner_radius_coef: f64) -> Result<RowSolution, LayoutError> {
    let a = inner_radius_coef / (1.0 - inner_radius_coef);
    let target = total as u64;
    let mut b = 1.0;

    for rows in 1..=MAX_ROWS {
        b += a;
        if !b.is_finite() {
            break;
        }
        let max_seats = max_seat_number(b, rows);
        trace!("rows={} b={} capacity={}", rows, b, max_seats);
        if max_seats >= target {
            debug!(
                "solved {} seats into {} rows (b={}, overshoot={})",
                total,
                rows,
                b,
                max_seats - target
            );
            return Ok(RowSolution { rows, b, max_seats });
        }
    }

    Err(LayoutError::RowSolverDidNotConverge {
        seats: total,
        iterations: MAX_ROWS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_seats_fit_one_row() {
        let solution = solve_rows(5, 0.4).unwrap();
        assert_eq!(solution.rows, 1);
        assert!((solution.b - (1.0 + 0.4 / 0.6)).abs() < 1e-12);
        assert_eq!(solution.max_seats, 5);
    }

    #[test]
    fn test_single_seat_is_one_row() {
        for coef in [0.05, 0.4, 0.9] {
            let solution = solve_rows(1, coef).unwrap();
            assert_eq!(solution.rows, 1, "coef {}", coef);
        }
    }

    #[test]
    fn test_row_count_is_minimal() {
        let solution = solve_rows(120, 0.4).unwrap();
        assert!(solution.max_seats >= 120);

        let a = 0.4 / 0.6;
        let mut b = 1.0;
        for rows in 1..solution.rows {
            b += a;
            assert!(max_seat_number(b, rows) < 120, "{} rows already fit", rows);
        }
    }

    #[test]
    fn test_capacity_grows_outward() {
        let solution = solve_rows(300, 0.3).unwrap();
        for i in 1..solution.rows {
            assert!(solution.row_capacity(i) > solution.row_capacity(i - 1));
        }
    }

    #[test]
    fn test_small_coef_huge_total_does_not_converge() {
        let result = solve_rows(100_000_000, 0.01);
        assert_eq!(
            result,
            Err(LayoutError::RowSolverDidNotConverge {
                seats: 100_000_000,
                iterations: MAX_ROWS,
            })
        );
    }

    #[test]
    fn test_overshoot() {
        let solution = RowSolution {
            rows: 2,
            b: 1.0,
            max_seats: 9,
        };
        assert_eq!(solution.overshoot(7), 2);
        assert_eq!(solution.overshoot(12), 0);
    }
}

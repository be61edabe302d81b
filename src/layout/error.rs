//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The parties declare no seats at all
    #[error("invalid seat count: parties declare {total} seats, at least one is required")]
    InvalidSeatCount { total: usize },

    /// Inner radius coefficient outside the open interval (0, 1)
    #[error("invalid inner radius coefficient {coef}: must lie strictly between 0 and 1")]
    InvalidInnerRadiusCoef { coef: f64 },

    /// Outer radius is not a positive finite number
    #[error("invalid outer radius {radius}: must be a positive finite number")]
    InvalidOuterRadius { radius: f64 },

    /// Row search hit its iteration cap
    #[error("row solver did not converge for {seats} seats after {iterations} rows")]
    RowSolverDidNotConverge { seats: usize, iterations: usize },

    /// Trimming would leave a row without seats
    #[error("seat placement infeasible: row {row} would hold {seats} seats")]
    SeatPlacementInfeasible { row: usize, seats: i64 },

    /// Party seat counts disagree with the number of placed seats
    #[error("parties declare {declared} seats but the layout has {expected}")]
    SeatPartyMismatch { declared: usize, expected: usize },
}

impl LayoutError {
    /// Create a seat/party mismatch error
    pub fn mismatch(declared: usize, expected: usize) -> Self {
        Self::SeatPartyMismatch { declared, expected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display() {
        let err = LayoutError::mismatch(4, 5);
        assert!(err.to_string().contains("declare 4 seats"));
        assert!(err.to_string().contains("has 5"));
    }

    #[test]
    fn test_coef_display() {
        let err = LayoutError::InvalidInnerRadiusCoef { coef: 1.5 };
        assert!(err.to_string().contains("1.5"));
    }
}

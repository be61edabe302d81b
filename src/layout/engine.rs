//! Layout computation engine
//!
//! Runs the whole pipeline as one pure function:
//!
//! 1. **Validation**: seat total, party sums and radii are checked before any work is done
//! 2. **Row solving**: [`solve_rows`] picks the number of rows
//! 3. **Placement**: [`plan_rows`] trims row capacities, [`place_seats`] expands slots
//! 4. **Ordering**: [`order_seats`] sorts slots into a left-to-right sweep
//! 5. **Assignment**: [`assign_parties`] hands out spans of seats to parties in order
//! 6. **Finishing**: cartesian coordinates and per-seat radii are attached
//!
//! Every error surfaces before a seat is produced, so a layout is either complete
//! or not computed at all.

use super::assign::{assign_parties, Assignment};
use super::config::LayoutConfig;
use super::error::LayoutError;
use super::order::order_seats;
use super::placer::{place_seats, plan_rows};
use super::solver::solve_rows;
use super::types::*;

/// Seat circle radius as a fraction of the row width
pub const SEAT_RADIUS_FACTOR: f64 = 0.4;

/// Check the inputs against the expected seat total
pub fn validate(parties: &[Party], total: usize, config: &LayoutConfig) -> Result<(), LayoutError> {
    if total == 0 {
        return Err(LayoutError::InvalidSeatCount { total });
    }
    let declared = total_seats(parties);
    if declared != total {
        return Err(LayoutError::mismatch(declared, total));
    }
    config.validate()
}

/// Compute the seat layout for an ordered list of parties.
///
/// The returned seats borrow from `parties`; party order is preserved, so the first
/// party occupies the leftmost span of the hemicycle. The seat total is the sum of
/// the parties' seats.
pub fn compute<'a>(parties: &'a [Party], config: &LayoutConfig) -> Result<Layout<'a>, LayoutError> {
    compute_with_total(parties, total_seats(parties), config)
}

/// Compute the layout of a chamber with a fixed number of seats.
///
/// Fails with [`LayoutError::SeatPartyMismatch`] before any row is solved when the
/// parties do not fill exactly `total` seats.
pub fn compute_with_total<'a>(
    parties: &'a [Party],
    total: usize,
    config: &LayoutConfig,
) -> Result<Layout<'a>, LayoutError> {
    validate(parties, total, config)?;

    let solution = solve_rows(total, config.inner_radius_coef)?;
    let geometry = plan_rows(&solution, config.outer_radius, config.inner_radius(), total)?;

    let mut slots = place_seats(&geometry);
    order_seats(&mut slots);

    let row_width = geometry.row_width;
    let seats = assign_parties(&slots, parties)?
        .into_iter()
        .map(|assignment| finish_seat(assignment, row_width))
        .collect();

    let rows = geometry
        .rows
        .iter()
        .map(|row| RowSummary {
            index: row.index,
            radius: row.radius,
            seats: row.seats,
        })
        .collect();

    Ok(Layout {
        seats,
        rows,
        row_width,
        outer_radius: config.outer_radius,
        inner_radius: config.inner_radius(),
    })
}

fn finish_seat(assignment: Assignment<'_>, row_width: f64) -> Seat<'_> {
    let Assignment {
        slot,
        party,
        member,
    } = assignment;
    let polar = Polar {
        r: slot.radius,
        theta: slot.angle,
    };
    let scale = member.and_then(Member::size).unwrap_or(1.0);

    Seat {
        row: slot.row,
        polar,
        cartesian: Point::from_polar(polar),
        seat_radius: SEAT_RADIUS_FACTOR * row_width * scale,
        party,
        member,
    }
}

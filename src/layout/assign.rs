//! Party assignment
//!
//! Walks the ordered seat slots and the ordered party list together, so party 0 takes
//! the leftmost span of the arc, party 1 the next span, and so on.

use super::types::{total_seats, Member, Party, SeatSlot};
use super::LayoutError;

/// A slot paired with the party (and member record, if any) that holds it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment<'a> {
    pub slot: SeatSlot,
    pub party: &'a Party,
    pub member: Option<&'a Member>,
}

/// Assign ordered slots to parties in order.
///
/// The declared seat total must equal the number of slots; the check runs before
/// any seat is assigned. Parties with no seats are skipped.
pub fn assign_parties<'a>(
    slots: &[SeatSlot],
    parties: &'a [Party],
) -> Result<Vec<Assignment<'a>>, LayoutError> {
    let declared = total_seats(parties);
    if declared != slots.len() {
        return Err(LayoutError::mismatch(declared, slots.len()));
    }

    let mut assignments = Vec::with_capacity(slots.len());
    let mut party_index = 0;
    let mut seat_in_party = 0;

    for slot in slots {
        while seat_in_party >= parties[party_index].seat_count() {
            party_index += 1;
            seat_in_party = 0;
        }
        let party = &parties[party_index];
        assignments.push(Assignment {
            slot: *slot,
            party,
            member: party.seats.member(seat_in_party),
        });
        seat_in_party += 1;
    }

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(n: usize) -> Vec<SeatSlot> {
        (0..n)
            .map(|i| SeatSlot {
                row: 0,
                radius: 1.0,
                angle: -3.0 + i as f64 * 0.1,
            })
            .collect()
    }

    #[test]
    fn test_parties_take_contiguous_spans() {
        let parties = vec![Party::new("a", "red", 3), Party::new("b", "blue", 2)];
        let assigned = assign_parties(&slots(5), &parties).unwrap();
        let ids: Vec<&str> = assigned.iter().map(|a| a.party.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a", "a", "b", "b"]);
        assert!(assigned.iter().all(|a| a.member.is_none()));
    }

    #[test]
    fn test_members_follow_list_order() {
        let members = vec![
            Member::new().with_field("name", "first"),
            Member::new().with_field("name", "second"),
        ];
        let parties = vec![Party::new("a", "red", 1), Party::with_members("b", "blue", members)];
        let assigned = assign_parties(&slots(3), &parties).unwrap();
        assert_eq!(assigned[0].member, None);
        assert_eq!(assigned[1].member.and_then(Member::name), Some("first"));
        assert_eq!(assigned[2].member.and_then(Member::name), Some("second"));
    }

    #[test]
    fn test_empty_parties_get_no_seats() {
        let parties = vec![
            Party::new("a", "red", 1),
            Party::new("empty1", "gray", 0),
            Party::with_members("empty2", "gray", Vec::new()),
            Party::new("c", "blue", 1),
        ];
        let assigned = assign_parties(&slots(2), &parties).unwrap();
        assert_eq!(assigned[0].party.id, "a");
        assert_eq!(assigned[1].party.id, "c");
    }

    #[test]
    fn test_mismatch_above_and_below() {
        let parties = vec![Party::new("a", "red", 3)];
        assert_eq!(
            assign_parties(&slots(2), &parties),
            Err(LayoutError::mismatch(3, 2))
        );
        assert_eq!(
            assign_parties(&slots(4), &parties),
            Err(LayoutError::mismatch(3, 4))
        );
    }
}

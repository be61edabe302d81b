//! Core types for the layout engine

use std::collections::BTreeMap;

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// A 2D point in the coordinate system
///
/// The origin is the center of the hemicycle; y grows downward as in SVG, so
/// seats sit at negative y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Cartesian point for a polar coordinate around the origin
    pub fn from_polar(polar: Polar) -> Self {
        Self {
            x: polar.r * polar.theta.cos(),
            y: polar.r * polar.theta.sin(),
        }
    }
}

/// Polar coordinate: radius and angle in radians over (-pi, 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Polar {
    pub r: f64,
    pub theta: f64,
}

/// A member record attached to a single seat
///
/// Members are opaque key/value records. The only field the layout engine
/// reads is a numeric `size`, which scales the seat radius.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Member {
    pub fields: BTreeMap<String, toml::Value>,
}

impl Member {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set the relative seat size
    pub fn with_size(self, size: f64) -> Self {
        self.with_field("size", size)
    }

    /// Numeric `size` field, if present. Non-numeric values are ignored.
    pub fn size(&self) -> Option<f64> {
        match self.fields.get("size")? {
            toml::Value::Float(f) => Some(*f),
            toml::Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// String `name` field, if present
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(|v| v.as_str())
    }
}

/// Seats held by a party: either a bare count or one record per member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PartySeats {
    Count(u32),
    Members(Vec<Member>),
}

impl PartySeats {
    pub fn len(&self) -> usize {
        match self {
            PartySeats::Count(n) => *n as usize,
            PartySeats::Members(members) => members.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Member record for the n-th seat of this party
    pub fn member(&self, index: usize) -> Option<&Member> {
        match self {
            PartySeats::Count(_) => None,
            PartySeats::Members(members) => members.get(index),
        }
    }
}

impl From<u32> for PartySeats {
    fn from(count: u32) -> Self {
        PartySeats::Count(count)
    }
}

impl From<Vec<Member>> for PartySeats {
    fn from(members: Vec<Member>) -> Self {
        PartySeats::Members(members)
    }
}

/// A political party and the seats it holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    #[serde(default)]
    pub id: String,
    pub fill: String,
    pub seats: PartySeats,
}

impl Party {
    /// Party holding a bare number of seats
    pub fn new(id: impl Into<String>, fill: impl Into<String>, seats: u32) -> Self {
        Self {
            id: id.into(),
            fill: fill.into(),
            seats: PartySeats::Count(seats),
        }
    }

    /// Party with one member record per seat
    pub fn with_members(id: impl Into<String>, fill: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            id: id.into(),
            fill: fill.into(),
            seats: PartySeats::Members(members),
        }
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }
}

/// Sum of seats declared by all parties
pub fn total_seats(parties: &[Party]) -> usize {
    parties.iter().map(Party::seat_count).sum()
}

/// A geometric seat position before party assignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatSlot {
    /// Row index, 0 = innermost
    pub row: usize,
    pub radius: f64,
    pub angle: f64,
}

/// A fully placed and assigned seat
///
/// Serializes its party as `{ id, fill }` only; the party's member list is not
/// repeated on every seat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Seat<'a> {
    pub row: usize,
    pub polar: Polar,
    pub cartesian: Point,
    /// Radius of the circle drawn for this seat
    pub seat_radius: f64,
    #[serde(serialize_with = "serialize_party_ref")]
    pub party: &'a Party,
    pub member: Option<&'a Member>,
}

impl Seat<'_> {
    /// CSS class token: `"seat <party id>"`, or just `"seat"` for an empty id
    pub fn class_name(&self) -> String {
        format!("seat {}", self.party.id).trim().to_string()
    }

    pub fn fill(&self) -> &str {
        &self.party.fill
    }
}

fn serialize_party_ref<S: Serializer>(party: &&Party, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Party", 2)?;
    state.serialize_field("id", &party.id)?;
    state.serialize_field("fill", &party.fill)?;
    state.end()
}

/// Summary of one concentric row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowSummary {
    pub index: usize,
    /// Center radius of the row band
    pub radius: f64,
    pub seats: usize,
}

/// Result of a layout computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout<'a> {
    pub seats: Vec<Seat<'a>>,
    pub rows: Vec<RowSummary>,
    pub row_width: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl<'a> Layout<'a> {
    pub fn seats(&self) -> &[Seat<'a>] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Seats assigned to the party with the given id
    pub fn seats_of<'s>(&'s self, party_id: &'s str) -> impl Iterator<Item = &'s Seat<'a>> + 's {
        self.seats.iter().filter(move |s| s.party.id == party_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_count_from_members() {
        let party = Party::with_members("a", "red", vec![Member::new(), Member::new()]);
        assert_eq!(party.seat_count(), 2);
        assert_eq!(Party::new("b", "blue", 7).seat_count(), 7);
    }

    #[test]
    fn test_member_size() {
        assert_eq!(Member::new().with_size(1.5).size(), Some(1.5));
        assert_eq!(Member::new().with_field("size", 2i64).size(), Some(2.0));
        assert_eq!(Member::new().with_field("size", "big").size(), None);
        assert_eq!(Member::new().size(), None);
    }

    #[test]
    fn test_class_name_trims_empty_id() {
        let party = Party::new("", "red", 1);
        let seat = Seat {
            row: 0,
            polar: Polar { r: 1.0, theta: -1.0 },
            cartesian: Point::new(0.0, 0.0),
            seat_radius: 1.0,
            party: &party,
            member: None,
        };
        assert_eq!(seat.class_name(), "seat");
    }

    #[test]
    fn test_seats_of_filters_by_party() {
        let parties = vec![Party::new("a", "red", 2), Party::new("b", "blue", 3)];
        let layout = crate::layout::compute(&parties, &crate::layout::LayoutConfig::default()).unwrap();
        assert_eq!(layout.seats_of("a").count(), 2);
        assert!(layout.seats_of("b").all(|s| s.fill() == "blue"));
        assert_eq!(layout.seats_of("c").count(), 0);
    }

    #[test]
    fn test_from_polar() {
        let p = Point::from_polar(Polar {
            r: 2.0,
            theta: -std::f64::consts::FRAC_PI_2,
        });
        assert!(p.x.abs() < 1e-12);
        assert!((p.y + 2.0).abs() < 1e-12);
    }
}

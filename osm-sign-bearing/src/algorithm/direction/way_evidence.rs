use super::SignDirection;
use uom::si::f64::Length;

/// the locally observable structure of a way around one sign node. this is
/// everything the direction heuristic is allowed to look at.
#[derive(Debug, Clone, Copy)]
pub struct WayEvidence {
    /// total haversine length of the way
    pub way_length: Length,
    /// sum of additional way memberships over nodes before the sign
    pub before_connections: usize,
    /// sum of additional way memberships over nodes after the sign
    pub after_connections: usize,
    /// number of nodes between the way start and the sign
    pub distance_to_start: usize,
    /// number of nodes between the sign and the way end
    pub distance_to_end: usize,
    /// path length from the way start up to and including the sign
    pub length_to_start: Length,
    /// path length from the sign to the way end
    pub length_to_end: Length,
}

impl WayEvidence {
    /// chooses the direction strategy for this way.
    ///
    /// ways strictly shorter than `short_way_threshold` are typically junction
    /// approaches, where the topology is the more reliable signal. longer ways
    /// use the sign's position along the way.
    pub fn decide(&self, short_way_threshold: Length) -> SignDirection {
        if self.way_length < short_way_threshold {
            by_intersections(self.before_connections, self.after_connections)
        } else {
            by_position(
                self.distance_to_start,
                self.distance_to_end,
                self.length_to_start,
                self.length_to_end,
            )
        }
    }
}

/// the side with more branching roads is the side the sign guards traffic
/// from. only a strictly larger "before" side yields [`SignDirection::Forward`].
pub fn by_intersections(before_connections: usize, after_connections: usize) -> SignDirection {
    if before_connections > after_connections {
        SignDirection::Forward
    } else {
        SignDirection::Backward
    }
}

/// a sign closer to the way start faces backward, closer to the end faces
/// forward. equal node counts fall back to path length, and an exact tie on
/// path length resolves to [`SignDirection::Forward`].
pub fn by_position(
    distance_to_start: usize,
    distance_to_end: usize,
    length_to_start: Length,
    length_to_end: Length,
) -> SignDirection {
    use std::cmp::Ordering as O;
    match distance_to_start.cmp(&distance_to_end) {
        O::Less => SignDirection::Backward,
        O::Greater => SignDirection::Forward,
        O::Equal if length_to_start < length_to_end => SignDirection::Backward,
        O::Equal => SignDirection::Forward,
    }
}

//! Room adjacency graph.
//!
//! Each room type's rooms form a chain in declaration order, so a room is
//! adjacent to its neighbours within its own type. Different types are not
//! connected.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::catalog::RoomTypeCatalog;
use crate::error::{Error, Result};
use crate::room::RoomNumber;

/// Undirected graph over every room of a catalog.
///
/// # Examples
///
/// ```
/// use roomledger::{HotelConfig, RoomGraph, RoomNumber, RoomTypeCatalog};
///
/// let catalog = RoomTypeCatalog::from_config(&HotelConfig::default()).unwrap();
/// let graph = RoomGraph::from_catalog(&catalog);
///
/// let reached = graph.reachable_from(RoomNumber::try_from(301).unwrap()).unwrap();
/// let reached: Vec<u32> = reached.iter().map(|r| r.value()).collect();
/// assert_eq!(reached, vec![301, 302]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    edges: HashMap<RoomNumber, Vec<RoomNumber>>,
}

impl RoomGraph {
    /// Builds the graph, chaining each type's rooms in declaration order.
    #[must_use]
    pub fn from_catalog(catalog: &RoomTypeCatalog) -> Self {
        let mut graph = Self::default();
        for room_type in catalog.types() {
            let rooms = room_type.all_room_numbers();
            for &room in rooms {
                graph.edges.entry(room).or_default();
            }
            for pair in rooms.windows(2) {
                graph.add_edge(pair[0], pair[1]);
            }
        }
        graph
    }

    fn add_edge(&mut self, a: RoomNumber, b: RoomNumber) {
        self.edges.entry(a).or_default().push(b);
        self.edges.entry(b).or_default().push(a);
    }

    /// Returns the rooms adjacent to `room`.
    #[must_use]
    pub fn neighbours(&self, room: RoomNumber) -> &[RoomNumber] {
        self.edges.get(&room).map_or(&[], Vec::as_slice)
    }

    /// Returns every room reachable from `start` in breadth-first order,
    /// starting with `start` itself.
    ///
    /// # Errors
    ///
    /// Returns `Error::RoomNotFound` if `start` is not in the graph.
    pub fn reachable_from(&self, start: RoomNumber) -> Result<Vec<RoomNumber>> {
        if !self.edges.contains_key(&start) {
            return Err(Error::RoomNotFound { room: start });
        }

        let mut order = Vec::new();
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(room) = queue.pop_front() {
            order.push(room);
            for &next in self.neighbours(room) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        Ok(order)
    }
}

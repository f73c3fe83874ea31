use crate::error::{Result, SimError};
use reefsim_data::{AnimalId, Location};

/// Neighbourhood offsets in compass order: N, NE, E, SE, S, SW, W, NW.
///
/// Every adjacency scan in the simulation walks this order, so breeding and
/// predation outcomes are reproducible for a fixed random sequence.
const COMPASS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Rectangular grid mapping each cell to at most one animal handle.
///
/// The field never owns animals; it stores [`AnimalId`]s into the
/// [`Population`](crate::animal::Population) arena. During a tick two fields
/// exist side by side: the current one, read-only, and the next one, which
/// accumulates this tick's placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    depth: usize,
    width: usize,
    cells: Vec<Option<AnimalId>>,
}

impl Field {
    #[must_use]
    pub fn new(depth: usize, width: usize) -> Self {
        Self {
            depth,
            width,
            cells: vec![None; depth * width],
        }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        location.row < self.depth && location.col < self.width
    }

    #[inline]
    fn index(&self, location: Location) -> Option<usize> {
        self.contains(location)
            .then(|| location.row * self.width + location.col)
    }

    #[must_use]
    pub fn occupant_at(&self, location: Location) -> Option<AnimalId> {
        self.index(location).and_then(|idx| self.cells[idx])
    }

    #[must_use]
    pub fn is_free(&self, location: Location) -> bool {
        self.index(location)
            .is_some_and(|idx| self.cells[idx].is_none())
    }

    /// Places `id` at `location`.
    ///
    /// # Errors
    ///
    /// Fails if the location is out of bounds or already holds an animal.
    /// Either case means two placements were computed against the same cell,
    /// which the free-list protocol of the step rules out.
    pub fn place(&mut self, id: AnimalId, location: Location) -> Result<()> {
        let idx = self.index(location).ok_or(SimError::OutOfBounds {
            location,
            depth: self.depth,
            width: self.width,
        })?;
        if let Some(occupant) = self.cells[idx] {
            return Err(SimError::Occupied {
                location,
                occupant,
                incoming: id,
            });
        }
        self.cells[idx] = Some(id);
        Ok(())
    }

    /// Empties a single cell, returning what was there.
    pub fn clear_location(&mut self, location: Location) -> Option<AnimalId> {
        self.index(location).and_then(|idx| self.cells[idx].take())
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// The in-bounds cells surrounding `location`, in compass order.
    #[must_use]
    pub fn adjacent_locations(&self, location: Location) -> Vec<Location> {
        COMPASS
            .iter()
            .filter_map(|&(d_row, d_col)| location.offset(d_row, d_col))
            .filter(|loc| self.contains(*loc))
            .collect()
    }

    /// The subset of [`adjacent_locations`](Self::adjacent_locations) that is
    /// unoccupied in this field instance.
    #[must_use]
    pub fn free_adjacent_locations(&self, location: Location) -> Vec<Location> {
        self.adjacent_locations(location)
            .into_iter()
            .filter(|loc| self.is_free(*loc))
            .collect()
    }

    /// Every occupied cell in row-major order.
    pub fn occupants(&self) -> impl Iterator<Item = (Location, AnimalId)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|id| (Location::new(idx / width, idx % width), id))
        })
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

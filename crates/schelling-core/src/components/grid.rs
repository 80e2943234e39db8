//! Grid Component
//!
//! A bounded lattice where each cell holds at most one agent. The edges are
//! hard: neighborhoods are clipped, never wrapped.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::agent::{Agent, AgentId};
use crate::error::GridError;

/// A cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance to another cell
    pub fn chebyshev(self, other: Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Occupancy of every cell, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<AgentId>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.width + pos.col)
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.width, index % self.width)
    }

    /// Agent occupying a cell, if any
    pub fn agent_at(&self, pos: Position) -> Option<AgentId> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    /// True for an in-bounds cell with no occupant
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.index(pos), Some(i) if self.cells[i].is_none())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| self.position_of(i))
            .collect()
    }

    /// Occupied cells and their agents in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Position, AgentId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|id| (self.position_of(i), id)))
    }

    /// In-bounds cells within Chebyshev distance `radius` of `pos`, excluding
    /// `pos` itself, in row-major order
    pub fn neighborhood(&self, pos: Position, radius: usize) -> Vec<Position> {
        if !self.contains(pos) || radius == 0 {
            return Vec::new();
        }
        let row_end = (pos.row + radius).min(self.height - 1);
        let col_end = (pos.col + radius).min(self.width - 1);

        let mut cells = Vec::new();
        for row in pos.row.saturating_sub(radius)..=row_end {
            for col in pos.col.saturating_sub(radius)..=col_end {
                let cell = Position::new(row, col);
                if cell != pos {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    /// Agents within Chebyshev distance `radius` of `pos`, excluding `pos`
    pub fn neighbors(&self, pos: Position, radius: usize) -> Vec<AgentId> {
        self.neighborhood(pos, radius)
            .into_iter()
            .filter_map(|cell| self.agent_at(cell))
            .collect()
    }

    /// Put an agent on its current position during setup
    pub fn place(&mut self, agent: &Agent) -> Result<(), GridError> {
        let pos = agent.position();
        let index = self.index(pos).ok_or(GridError::OutOfBounds(pos))?;
        if self.cells[index].is_some() {
            return Err(GridError::Occupied(pos));
        }
        self.cells[index] = Some(agent.id());
        Ok(())
    }

    /// Move an agent to an empty cell, vacating its old one
    pub fn relocate(&mut self, agent: &mut Agent, to: Position) -> Result<(), GridError> {
        let target = self.index(to).ok_or(GridError::OutOfBounds(to))?;
        if self.cells[target].is_some() {
            return Err(GridError::Occupied(to));
        }

        if let Some(source) = self.index(agent.position()) {
            debug_assert_eq!(self.cells[source], Some(agent.id()));
            self.cells[source] = None;
        }
        self.cells[target] = Some(agent.id());
        agent.set_position(to);
        Ok(())
    }

    /// Move an agent to an empty cell chosen uniformly from the whole grid
    pub fn relocate_to_random_empty<R: Rng + ?Sized>(
        &mut self,
        agent: &mut Agent,
        rng: &mut R,
    ) -> Result<Position, GridError> {
        let empties = self.empty_cells();
        let &target = empties.choose(rng).ok_or(GridError::NoEmptyCell)?;
        self.relocate(agent, target)?;
        Ok(target)
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }
}

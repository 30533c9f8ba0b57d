//! The authoritative "which level is focused" value.
//!
//! Two reducers write it: `step` for directional keys and `hover` for the
//! pointer. Both return whether the value actually changed, which is what the
//! screen uses to decide if a hover cue fires.

use log::{debug, trace};

/// A directional navigation key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Signed index offset of one step in a grid `columns` wide.
    pub fn offset(self, columns: usize) -> isize {
        let c = columns as isize;
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up => -c,
            Direction::Down => c,
        }
    }
}

/// Selected level index, always in `[0, level_count)` for a non-empty catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    selected: usize,
    level_count: usize,
}

impl SelectionState {
    pub fn new(level_count: usize) -> Self {
        Self { selected: 0, level_count }
    }

    pub fn selected(&self) -> usize { self.selected }
    pub fn level_count(&self) -> usize { self.level_count }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Index one step away in `direction`, if that index exists.
    ///
    /// One candidate, one bounds check: out-of-range candidates are rejected
    /// outright, never wrapped or clamped.
    pub fn candidate(&self, direction: Direction, columns: usize) -> Option<usize> {
        let candidate = self.selected as isize + direction.offset(columns);
        (0..self.level_count as isize)
            .contains(&candidate)
            .then_some(candidate as usize)
    }

    /// Apply a directional step. Returns `true` if the selection moved.
    pub fn step(&mut self, direction: Direction, columns: usize) -> bool {
        match self.candidate(direction, columns) {
            Some(next) => {
                debug!("navigate {direction:?}: {} -> {next}", self.selected);
                self.set(next)
            }
            None => {
                trace!("navigate {direction:?} from {} rejected at grid edge", self.selected);
                false
            }
        }
    }

    /// Pointer reducer: select `index` if it is a valid level.
    /// Returns `true` only when the value changed.
    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.level_count {
            return false;
        }
        self.set(index)
    }

    fn set(&mut self, index: usize) -> bool {
        if self.selected == index {
            return false;
        }
        self.selected = index;
        true
    }
}

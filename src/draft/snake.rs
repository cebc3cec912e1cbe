//! Serpentine (boustrophedon) index cursor
//!
//! Yields `0, 1, .., n-1, n-1, .., 0, 0, 1, ..`: the end slot is repeated when
//! the direction flips, which is what gives a snake draft its A-B-B-A shape.

/// Current walking direction of a [`SnakeCursor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Walking toward the last slot
    Forward,
    /// Walking back toward slot 0
    Backward,
}

/// Infinite serpentine walk over `len` slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeCursor {
    index: usize,
    direction: Direction,
    len: usize,
}

impl SnakeCursor {
    /// Cursor at slot 0, walking forward. A cursor over zero slots yields nothing.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            direction: Direction::Forward,
            len,
        }
    }

    /// Slot that the next call to `next` will yield
    pub fn position(&self) -> usize {
        self.index
    }

    /// Direction the cursor is currently walking
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of slots being walked
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when there are no slots to walk
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of steps that visits every slot at least once from any state
    pub fn full_walk(&self) -> usize {
        self.len * 2
    }

    fn step(&mut self) {
        match self.direction {
            Direction::Forward if self.index + 1 >= self.len => {
                self.direction = Direction::Backward;
            }
            Direction::Forward => self.index += 1,
            Direction::Backward if self.index == 0 => {
                self.direction = Direction::Forward;
            }
            Direction::Backward => self.index -= 1,
        }
    }
}

impl Iterator for SnakeCursor {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let current = self.index;
        self.step();
        Some(current)
    }
}

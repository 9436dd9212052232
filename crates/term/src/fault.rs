//! Write faults recorded by a [`Panel`](crate::panel::Panel).

use std::fmt;

use thiserror::Error;

/// What went wrong with a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// Target row is outside `0..rows`.
    PanelOverflow,
    /// Content ran past the edges of a valid row.
    RowOverflow,
}

impl FaultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::PanelOverflow => "panel overflow",
            FaultKind::RowOverflow => "row overflow",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed write, located at the row and column where it happened.
///
/// Faults are stored on the panel rather than returned, so a frame keeps
/// compositing after one occurs. The display text is what the host prints in
/// place of a faulted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{kind} error in row {row} on col {col}")]
pub struct Fault {
    pub row: isize,
    pub col: isize,
    pub kind: FaultKind,
}

impl Fault {
    pub fn new(kind: FaultKind, row: isize, col: isize) -> Self {
        Self { row, col, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_kind_and_position() {
        let f = Fault::new(FaultKind::RowOverflow, 0, 5);
        assert_eq!(f.to_string(), "row overflow error in row 0 on col 5");

        let f = Fault::new(FaultKind::PanelOverflow, -1, 3);
        assert_eq!(f.to_string(), "panel overflow error in row -1 on col 3");
    }
}

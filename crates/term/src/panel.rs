//! Panel: a fixed-size character grid that frames and composites.
//!
//! Each UI region is built as its own `Panel`, written into, optionally
//! framed, and then inserted into a parent at an offset. The top-level panel
//! is flattened to text once per frame.
//!
//! Writes never panic on bad coordinates. Anything that would land outside
//! the grid is dropped and a [`Fault`] is recorded instead. A panel keeps only
//! the first fault it sees, including faults carried in by inserted children,
//! so the fault reported for a frame is the earliest one in composition order.
//!
//! Every character occupies exactly one cell. Callers drawing a glyph that a
//! terminal shows two columns wide follow it with [`WIDE_PAD`].

use crate::fault::{Fault, FaultKind};

pub const HORIZONTAL: char = '─';
pub const VERTICAL: char = '│';
pub const TOP_LEFT: char = '╭';
pub const TOP_RIGHT: char = '╮';
pub const BOTTOM_LEFT: char = '╰';
pub const BOTTOM_RIGHT: char = '╯';

/// Zero-width filler placed after a double-width glyph.
pub const WIDE_PAD: char = '\0';

const BLANK: char = ' ';

/// Rectangular character buffer, stored row-major in one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
    fault: Option<Fault>,
}

impl Panel {
    /// Create a blank panel.
    ///
    /// Zero-sized panels are allowed: they hold no cells, and every non-empty
    /// write to them records a fault.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![BLANK; rows * cols],
            fault: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// First fault recorded on this panel, if any.
    pub fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.fault.is_none()
    }

    /// Hand the panel back, or its fault if one was recorded.
    pub fn into_result(self) -> Result<Panel, Fault> {
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(self),
        }
    }

    #[inline(always)]
    fn idx(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    /// The cells of one row.
    pub fn row(&self, row: usize) -> Option<&[char]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Record `fault` unless an earlier one is already held.
    fn fail(&mut self, fault: Fault) {
        if self.fault.is_none() {
            self.fault = Some(fault);
        }
    }

    fn in_rows(&self, row: isize) -> bool {
        row >= 0 && (row as usize) < self.rows
    }

    /// Write `text` into `row` starting at `col`, one character per cell.
    ///
    /// Characters past the right edge are dropped and a row overflow is
    /// recorded at `(row, cols)`. Characters left of column 0 are dropped and
    /// a row overflow is recorded at `(row, col)`. A row outside the panel
    /// writes nothing and records a panel overflow at `(row, col)`.
    ///
    /// Returns the column of the last character written, or `col` if nothing
    /// was written.
    pub fn write_line(&mut self, text: &str, row: isize, col: isize) -> isize {
        self.write_chars(text.chars(), row, col)
    }

    fn write_chars<I>(&mut self, chars: I, row: isize, col: isize) -> isize
    where
        I: IntoIterator<Item = char>,
    {
        if !self.in_rows(row) {
            self.fail(Fault::new(FaultKind::PanelOverflow, row, col));
            return col;
        }

        let row = row as usize;
        let mut last = col;
        let mut clipped_left = false;
        let mut clipped_right = false;

        for (i, ch) in chars.into_iter().enumerate() {
            let c = col.saturating_add(i as isize);
            if c < 0 {
                clipped_left = true;
                continue;
            }
            match self.idx(row, c as usize) {
                Some(at) => {
                    self.cells[at] = ch;
                    last = c;
                }
                None => {
                    clipped_right = true;
                    break;
                }
            }
        }

        if clipped_left {
            self.fail(Fault::new(FaultKind::RowOverflow, row as isize, col));
        }
        if clipped_right {
            self.fail(Fault::new(FaultKind::RowOverflow, row as isize, self.cols as isize));
        }
        last
    }

    /// Write each `'\n'`-separated line of `text` on successive rows, all
    /// starting at `col`.
    ///
    /// Every line is attempted even after an earlier one faults. Returns the
    /// row after the last line plus one, usable as a cursor when stacking
    /// blocks with a blank row between them.
    pub fn write_string(&mut self, text: &str, row: isize, col: isize) -> isize {
        let mut row = row;
        for line in text.split('\n') {
            self.write_line(line, row, col);
            row = row.saturating_add(1);
        }
        row.saturating_add(1)
    }

    /// Surround the content with a one-cell border.
    ///
    /// Grows the panel by two in each axis; existing content moves to
    /// `(1, 1)`. Framing twice nests a second border.
    pub fn frame(&mut self) {
        let rows = self.rows + 2;
        let cols = self.cols + 2;
        let mut cells = Vec::with_capacity(rows * cols);

        cells.push(TOP_LEFT);
        cells.extend(std::iter::repeat(HORIZONTAL).take(self.cols));
        cells.push(TOP_RIGHT);

        for r in 0..self.rows {
            cells.push(VERTICAL);
            cells.extend_from_slice(&self.cells[r * self.cols..(r + 1) * self.cols]);
            cells.push(VERTICAL);
        }

        cells.push(BOTTOM_LEFT);
        cells.extend(std::iter::repeat(HORIZONTAL).take(self.cols));
        cells.push(BOTTOM_RIGHT);

        self.rows = rows;
        self.cols = cols;
        self.cells = cells;
    }

    /// Copy `child` into this panel with its top-left corner at `(y, x)`.
    ///
    /// Each child row is written as a line, so clipping and faults follow
    /// [`write_line`](Self::write_line) against this panel's bounds. A fault
    /// already held by the child is adopted if this panel has none. The
    /// panel is never resized.
    pub fn insert(&mut self, child: &Panel, y: isize, x: isize) {
        for r in 0..child.rows {
            let start = r * child.cols;
            let line = &child.cells[start..start + child.cols];
            self.write_chars(line.iter().copied(), y.saturating_add(r as isize), x);
        }

        if let Some(fault) = child.fault {
            self.fail(fault);
        }
    }

    /// Flatten the grid to text, each row followed by a line break.
    ///
    /// Rendering does not consume or change the panel.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for r in 0..self.rows {
            let start = r * self.cols;
            out.extend(&self.cells[start..start + self.cols]);
            out.push('\n');
        }
        out
    }
}

//! GameView: lays out the game snapshot as a tree of panels.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tracing::debug;

use crate::core::{GameSnapshot, ItemLine};
use crate::panel::{Panel, WIDE_PAD};

const COOKIE: char = '\u{1F36A}';

/// Shown in place of the cost when the player cannot afford the item.
const UNAFFORDABLE: &str = "-------";

/// Braille cookie drawn in the lower right region.
pub const COOKIE_ART: [&str; 15] = [
    "⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⣀⡴⠚⣉⡙⠲⠦⠤⠤⣤⡀⠀⠀⠀⠀⠀⠀⠀⠀⠀",
    "⠀⠀⠀⠀⠀⠀⢀⣴⠛⠉⠉⠀⣾⣷⣿⡆⠀⠀⠀⠐⠛⠿⢟⡲⢦⡀⠀⠀⠀⠀",
    "⠀⠀⠀⠀⣠⢞⣭⠎⠀⠀⠀⠀⠘⠛⠛⠀⠀⢀⡀⠀⠀⠀⠀⠈⠓⠿⣄⠀⠀⠀",
    "⠀⠀⠀⡜⣱⠋⠀⠀⣠⣤⢄⠀⠀⠀⠀⠀⠀⣿⡟⣆⠀⠀⠀⠀⠀⠀⠻⢷⡄⠀",
    "⠀⢀⣜⠜⠁⠀⠀⠀⢿⣿⣷⣵⠀⠀⠀⠀⠀⠿⠿⠿⠀⠀⣴⣶⣦⡀⠀⠰⣹⡆",
    "⢀⡞⠆⠀⣀⡀⠀⠀⠘⠛⠉⠁⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⢿⣿⣶⠇⠀⢠⢻⡇",
    "⢸⠃⠘⣾⣏⡇⠀⠀⠀⠀⠀⠀⠀⡀⠀⠀⠀⠀⠀⠀⣠⣤⣤⡉⠁⠀⠀⠈⠫⣧",
    "⡸⡄⠀⠘⠟⠀⠀⠀⠀⠀⠀⣰⣿⣟⢧⠀⠀⠀⠀⠰⡿⣿⣿⢿⠀⠀⣰⣷⢡⢸",
    "⣿⡇⠀⠀⠀⣰⣿⡻⡆⠀⠀⠻⣿⣿⣟⠀⠀⠀⠀⠀⠉⠉⠉⠀⠀⠘⢿⡿⣸⡞",
    "⠹⣽⣤⣤⣤⣹⣿⡿⠇⠀⠀⠀⠀⠉⠁⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⠀⡔⣽⠀",
    "⠀⠙⢻⡙⠟⣹⠟⢷⣶⣄⢀⣴⣶⣄⠀⠀⠀⠀⠀⢀⣤⡦⣄⠀⠀⢠⣾⢸⠏⠀",
    "⠀⠀⠘⠀⠀⠀⠀⠀⠈⢷⢼⣿⡿⡽⠀⠀⠀⠀⠀⠸⣿⣿⣾⠀⣼⡿⣣⠟⠀⠀",
    "⠀⠀⠀⠀⠀⠀⠀⠀⢠⡾⣆⠑⠋⠀⢀⣀⠀⠀⠀⠀⠈⠈⢁⣴⢫⡿⠁⠀⠀⠀",
    "⠀⠀⠀⠀⠀⠀⠀⠀⠈⠙⣧⣄⡄⠴⣿⣶⣿⢀⣤⠶⣞⣋⣩⣵⠏⠀⠀⠀⠀⠀",
    "⠀⠀⠀⠀⠀⠀⠀⠀⠀⢺⣿⢯⣭⣭⣯⣯⣥⡵⠿⠟⠛⠉⠉⠀⠀⠀⠀⠀⠀⠀",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Builds one frame of the game screen.
///
/// Layout, inside a one-cell blank margin:
///
/// ```text
/// +---------------------+---------------------+
/// | item 1 (framed when |  cookie count (rate) |
/// |   selected)         +---------------------+
/// | item 2              |                     |
/// |                     |     cookie art      |
/// | item 3              |                     |
/// +---------------------+---------------------+
/// ```
///
/// Regions are sized from the viewport; when a region's content does not fit
/// the frame carries a fault and [`render`](Self::render) returns the fault
/// description instead of the screen.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    art: &'static [&'static str],
}

impl Default for GameView {
    fn default() -> Self {
        Self { art: &COOKIE_ART }
    }
}

// Panel dimensions from signed layout arithmetic; negative means empty.
fn dim(v: isize) -> usize {
    v.max(0) as usize
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the art drawn in the lower right region.
    pub fn with_art(mut self, art: &'static [&'static str]) -> Self {
        self.art = art;
        self
    }

    /// Composite the whole screen into one panel.
    pub fn compose(&self, snap: &GameSnapshot, viewport: Viewport) -> Panel {
        let height = viewport.height as isize;
        let width = viewport.width as isize;
        let mut background = Panel::new(dim(height), dim(width));

        let rows = height - 2;
        let cols = width - 2;
        let mut frame = Panel::new(dim(rows), dim(cols));

        let status = self.status_panel(snap, (rows - 2) / 4 - 2, cols / 2 - 4);
        frame.insert(&status, 1, cols / 2 + 2);

        let inventory = self.inventory_panel(snap, rows - 2, cols / 2);
        frame.insert(&inventory, 1, 1);

        let art = self.art_panel((rows - 2) / 4 * 3, cols / 2 - 4);
        frame.insert(&art, (rows - 2) / 4, cols / 2 + 2);

        background.insert(&frame, 1, 1);
        background
    }

    /// Render the screen as text, or the fault description if the layout
    /// did not fit.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> String {
        if viewport.width == 0 || viewport.height == 0 {
            return String::new();
        }

        let panel = self.compose(snap, viewport);
        match panel.fault() {
            Some(fault) => {
                debug!(%fault, width = viewport.width, height = viewport.height, "frame faulted");
                fault.to_string()
            }
            None => panel.render(),
        }
    }

    fn status_panel(&self, snap: &GameSnapshot, rows: isize, cols: isize) -> Panel {
        let mut p = Panel::new(dim(rows), dim(cols));
        p.write_string(&status_line(snap), 0, 0);
        p
    }

    fn inventory_panel(&self, snap: &GameSnapshot, rows: isize, cols: isize) -> Panel {
        let mut list = Panel::new(dim(rows), dim(cols));

        for (i, line) in snap.items.iter().enumerate() {
            let mut entry = Panel::new(dim(rows / 5), dim(cols - 2));
            entry.write_string(&item_readout(line), 0, 0);

            if i == snap.selection {
                entry.frame();
            }
            list.insert(&entry, rows / 3 * i as isize, 0);
        }

        list
    }

    fn art_panel(&self, rows: isize, cols: isize) -> Panel {
        let mut p = Panel::new(dim(rows), dim(cols));
        p.write_string(&self.art.join("\n"), 0, 0);
        p
    }
}

/// `"<cookie> : <count> (<rate>)"`, count truncated to a whole number.
pub fn status_line(snap: &GameSnapshot) -> String {
    format!("{COOKIE}{WIDE_PAD}  : {} ({:.1})", snap.cookies as i64, snap.rate)
}

/// One inventory row: icon, owned, production and price of the next unit.
pub fn item_readout(line: &ItemLine) -> String {
    let cost = if line.affordable {
        format!("{:>7}", line.cost as u64)
    } else {
        UNAFFORDABLE.to_string()
    };
    format!(
        "{}{} {:>7}  ({:>8.1})  {}",
        line.icon, WIDE_PAD, line.owned, line.rate, cost
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, ItemKind, ITEM_COUNT};

    #[test]
    fn status_line_truncates_count() {
        let mut snap = GameState::new().snapshot();
        snap.cookies = 12.9;
        snap.rate = 0.3;
        assert_eq!(status_line(&snap), "\u{1F36A}\0  : 12 (0.3)");
    }

    #[test]
    fn readout_hides_unaffordable_cost() {
        let snap = GameState::with_progress(20.0, [0; ITEM_COUNT]).snapshot();
        assert_eq!(
            item_readout(&snap.items[0]),
            "\u{1F449}\0       0  (     0.0)       15"
        );
        assert_eq!(
            item_readout(&snap.items[1]),
            "\u{1F475}\0       0  (     0.0)  -------"
        );
    }

    #[test]
    fn readout_fits_default_entry_width() {
        let mut inventory = [0; ITEM_COUNT];
        inventory[ItemKind::Cursor.index()] = 1_234_567;
        let snap = GameState::with_progress(0.0, inventory).snapshot();
        assert_eq!(item_readout(&snap.items[0]).chars().count(), 31);
    }

    #[test]
    fn zero_viewport_renders_nothing() {
        let snap = GameState::new().snapshot();
        assert_eq!(GameView::default().render(&snap, Viewport::new(0, 24)), "");
        assert_eq!(GameView::default().render(&snap, Viewport::new(80, 0)), "");
    }
}

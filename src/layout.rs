use std::rc::Rc;

use crate::config::Options;
use crate::display_width::{display_width, printable, truncate};
use crate::model::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub tables: Vec<TableLayout>,
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub label: String,
    pub color: String,
    pub seat_count: usize,
    pub seats_per_row: usize,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl TableLayout {
    /// Grid cell (row, col) of the seat at `index`.
    pub fn seat_cell(&self, index: usize) -> (usize, usize) {
        let row = index / self.seats_per_row;
        let col = index % self.seats_per_row;
        (self.y + 1 + row, self.x + 2 + col * SEAT_PITCH)
    }
}

const GAP_X: usize = 2;
const GAP_Y: usize = 1;
const SEAT_PITCH: usize = 2;
// border + padding on each side
const BOX_CHROME: usize = 4;

pub fn compute(tables: &[Rc<Table>], options: &Options) -> BoardLayout {
    let seats_per_row = options.seats_per_row.max(1);
    let max_label = options.width.saturating_sub(BOX_CHROME).max(1);

    let mut placed = Vec::with_capacity(tables.len());
    let (mut x, mut y, mut row_height) = (0, 0, 0);

    for table in tables {
        let label = truncate(
            &printable(&format!("#{} {}", table.number, table.color)),
            max_label,
        );
        let seat_count = table.seats.len();
        let columns = seat_count.min(seats_per_row);
        let rows = seat_count.div_ceil(seats_per_row).max(1);
        let seat_width = (columns * SEAT_PITCH).saturating_sub(1);

        let width = seat_width.max(display_width(&label)) + BOX_CHROME;
        let height = rows + 2;

        if x > 0 && x + width > options.width {
            y += row_height + GAP_Y;
            x = 0;
            row_height = 0;
        }

        placed.push(TableLayout {
            label,
            color: table.color.clone(),
            seat_count,
            seats_per_row,
            x,
            y,
            width,
            height,
        });
        x += width + GAP_X;
        row_height = row_height.max(height);
    }

    let width = placed.iter().map(|t| t.x + t.width).max().unwrap_or(0);
    let height = placed.iter().map(|t| t.y + t.height).max().unwrap_or(0);

    BoardLayout {
        tables: placed,
        width,
        height,
    }
}

use crossterm::style::{Color, Stylize};

use crate::display_width::char_width;
use crate::layout::*;

pub const SEAT_MARKER: char = '■';

// Right half of a double-width character.
const CONTINUATION: char = '\0';

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Option<Color>,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: None,
};

struct Grid {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
}

impl Grid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![BLANK; width]; height],
            width,
            height,
        }
    }

    fn set(&mut self, row: usize, col: usize, ch: char, color: Option<Color>) {
        if row < self.height && col < self.width {
            self.cells[row][col] = Cell { ch, color };
        }
    }

    fn write_str(&mut self, row: usize, col: usize, s: &str) {
        let mut col = col;
        for ch in s.chars() {
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            self.set(row, col, ch, None);
            if w == 2 {
                self.set(row, col + 1, CONTINUATION, None);
            }
            col += w;
        }
    }

    fn to_string(&self, color: bool) -> String {
        self.cells
            .iter()
            .map(|row| render_row(row, color))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_row(row: &[Cell], color: bool) -> String {
    let end = row
        .iter()
        .rposition(|c| c.ch != ' ' && c.ch != CONTINUATION)
        .map_or(0, |i| i + 1);

    let mut line = String::new();
    let mut run = String::new();
    let mut run_color = None;
    for cell in row[..end].iter().filter(|c| c.ch != CONTINUATION) {
        let cell_color = if color { cell.color } else { None };
        if cell_color != run_color {
            flush_run(&mut line, &mut run, run_color);
            run_color = cell_color;
        }
        run.push(cell.ch);
    }
    flush_run(&mut line, &mut run, run_color);
    line
}

fn flush_run(line: &mut String, run: &mut String, color: Option<Color>) {
    if run.is_empty() {
        return;
    }
    match color {
        Some(c) => line.push_str(&run.as_str().with(c).to_string()),
        None => line.push_str(run),
    }
    run.clear();
}

/// Terminal color for a table color name, if the terminal knows it.
pub fn border_color(name: &str) -> Option<Color> {
    Color::try_from(name.trim()).ok()
}

pub fn render(layout: &BoardLayout, color: bool) -> String {
    let mut grid = Grid::new(layout.width, layout.height);
    for table in &layout.tables {
        draw_table(&mut grid, table);
    }
    grid.to_string(color)
}

fn draw_table(grid: &mut Grid, table: &TableLayout) {
    let x = table.x;
    let y = table.y;
    let w = table.width;
    let bottom = y + table.height - 1;
    let color = border_color(&table.color);

    grid.set(y, x, '┌', color);
    grid.set(bottom, x, '└', color);
    for col in (x + 1)..(x + w - 1) {
        grid.set(y, col, '─', color);
        grid.set(bottom, col, '─', color);
    }
    grid.set(y, x + w - 1, '┐', color);
    grid.set(bottom, x + w - 1, '┘', color);

    for row in (y + 1)..bottom {
        grid.set(row, x, '│', color);
        grid.set(row, x + w - 1, '│', color);
    }

    grid.write_str(y, x + 1, &format!(" {} ", table.label));

    for index in 0..table.seat_count {
        let (row, col) = table.seat_cell(index);
        grid.set(row, col, SEAT_MARKER, None);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::config::Options;
    use crate::layout;
    use crate::model::Table;
    use pretty_assertions::assert_eq;

    fn render_tables(specs: &[(&str, u32)], options: &Options) -> String {
        let tables: Vec<Rc<Table>> = specs
            .iter()
            .enumerate()
            .map(|(i, (color, seats))| {
                Rc::new(Table::with_empty_seats(color, i as u32 + 1, *seats))
            })
            .collect();
        render(&layout::compute(&tables, options), options.color)
    }

    #[test]
    fn render_single_table() {
        let output = render_tables(&[("red", 4)], &Options::default());
        let expected = "\
┌ #1 red ─┐
│ ■ ■ ■ ■ │
└─────────┘";
        assert_eq!(output, expected);
    }

    #[test]
    fn render_wrapped_seats() {
        let output = render_tables(&[("blue", 7)], &Options::default());
        let expected = "\
┌ #1 blue ──┐
│ ■ ■ ■ ■ ■ │
│ ■ ■       │
└───────────┘";
        assert_eq!(output, expected);
    }

    #[test]
    fn render_two_tables_side_by_side() {
        let output = render_tables(&[("red", 2), ("green", 1)], &Options::default());
        let expected = "\
┌ #1 red ┐  ┌ #2 green ┐
│ ■ ■    │  │ ■        │
└────────┘  └──────────┘";
        assert_eq!(output, expected);
    }

    #[test]
    fn render_wide_label() {
        let output = render_tables(&[("赤", 1)], &Options::default());
        let expected = "\
┌ #1 赤 ┐
│ ■     │
└───────┘";
        assert_eq!(output, expected);
    }

    #[test]
    fn render_combining_mark_keeps_border() {
        let output = render_tables(&[("e\u{301}", 1)], &Options::default());
        let expected = "\
┌ #1 e ┐
│ ■    │
└──────┘";
        assert_eq!(output, expected);
    }

    #[test]
    fn render_zero_width_space_keeps_border() {
        let output = render_tables(&[("a\u{200b}b", 1)], &Options::default());
        let expected = "\
┌ #1 ab ┐
│ ■     │
└───────┘";
        assert_eq!(output, expected);
    }

    #[test]
    fn render_control_characters_stay_out_of_border() {
        let output = render_tables(&[("a\tb", 2)], &Options::default());
        assert!(!output.contains('\t'));
        let top = output.lines().next().unwrap();
        assert_eq!(top, "┌ #1 ab ┐");
    }

    #[test]
    fn write_str_skips_zero_width_characters() {
        let mut grid = Grid::new(4, 1);
        grid.write_str(0, 0, "a\u{301}b\u{200b}c");
        assert_eq!(grid.to_string(false), "abc");
    }

    #[test]
    fn color_paints_known_colors_only() {
        let options = Options {
            color: true,
            ..Options::default()
        };
        let output = render_tables(&[("red", 1)], &options);
        assert!(output.contains('\u{1b}'), "known color should emit escapes");

        let output = render_tables(&[("salmon", 1)], &options);
        assert!(!output.contains('\u{1b}'), "unknown color renders plain");
    }

    #[test]
    fn plain_output_has_no_escapes() {
        let output = render_tables(&[("red", 1)], &Options::default());
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn border_color_names() {
        assert_eq!(border_color("red"), Some(Color::Red));
        assert_eq!(border_color(" Dark_Blue "), Some(Color::DarkBlue));
        assert_eq!(border_color("salmon"), None);
    }
}

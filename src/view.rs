use crate::config::Options;
use crate::editor::Editor;
use crate::{layout, renderer};

/// Students line followed by the table grid.
pub fn board(editor: &Editor, options: &Options) -> String {
    let mut out = students(editor);
    out.push('\n');
    if editor.tables().is_empty() {
        out.push_str("(no tables)");
    } else {
        let computed = layout::compute(editor.tables(), options);
        out.push_str(&renderer::render(&computed, options.color));
    }
    if editor.is_dialog_open() {
        out.push_str("\n\n");
        out.push_str(&dialog(editor));
    }
    out
}

pub fn students(editor: &Editor) -> String {
    let names: Vec<&str> = editor.students().iter().map(|s| s.name.as_str()).collect();
    if names.is_empty() {
        "Students: (none)".to_string()
    } else {
        format!("Students ({}): {}", names.len(), names.join(", "))
    }
}

/// One line per table with its grid position, used by `select`.
pub fn table_list(editor: &Editor) -> String {
    if editor.tables().is_empty() {
        return "(no tables)".to_string();
    }
    editor
        .tables()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let seats = t.seats.len();
            let noun = if seats == 1 { "seat" } else { "seats" };
            format!("{}. table #{} {}, {seats} {noun}", i + 1, t.number, t.color)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The edit dialog; empty when no table is selected.
pub fn dialog(editor: &Editor) -> String {
    let Some(table) = editor.selected() else {
        return String::new();
    };
    let form = editor.edit_form();
    format!(
        "Edit Table #{}\n  color: {}\n  seats: {}\n  [save] [delete] [cancel]",
        table.number, form.color, form.seats
    )
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use pretty_assertions::assert_eq;

    fn editor_with(tables: &[(&str, &str)]) -> Editor {
        let mut editor = Editor::new();
        for (color, seats) in tables {
            editor.set_color(color);
            editor.set_seats(seats);
            editor.create_table().unwrap();
        }
        editor
    }

    #[test]
    fn empty_board() {
        let output = board(&Editor::new(), &Options::default());
        assert_eq!(output, "Students: (none)\n(no tables)");
    }

    #[test]
    fn students_are_listed_in_order() {
        let mut editor = Editor::new();
        for name in ["Ann", "Bob"] {
            editor.set_student_name(name);
            editor.add_student().unwrap();
        }
        assert_eq!(students(&editor), "Students (2): Ann, Bob");
    }

    #[test]
    fn table_list_shows_positions() {
        let editor = editor_with(&[("red", "1"), ("blue", "3")]);
        let expected = "\
1. table #1 red, 1 seat
2. table #2 blue, 3 seats";
        assert_eq!(table_list(&editor), expected);
    }

    #[test]
    fn board_with_open_dialog() {
        let mut editor = editor_with(&[("red", "2")]);
        let table = Rc::clone(&editor.tables()[0]);
        editor.select_table(table);
        let expected = "\
Students: (none)
┌ #1 red ┐
│ ■ ■    │
└────────┘

Edit Table #1
  color: red
  seats: 2
  [save] [delete] [cancel]";
        assert_eq!(board(&editor, &Options::default()), expected);
    }

    #[test]
    fn dialog_is_empty_when_closed() {
        assert_eq!(dialog(&Editor::new()), "");
    }
}

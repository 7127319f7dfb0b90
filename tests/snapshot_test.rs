use pretty_assertions::assert_eq;
use seating::Options;

#[test]
fn snapshot_create_edit_delete() {
    let script = "\
student Ann
table red 4
select 1
color blue
seats 2
save
select 1
delete
";
    let output = seating::run_script(script, &Options::default());
    let expected = "\
Added student Ann.
Students (1): Ann
┌ #1 red ─┐
│ ■ ■ ■ ■ │
└─────────┘
Edit Table #1
  color: red
  seats: 4
  [save] [delete] [cancel]
Students (1): Ann
┌ #1 blue ┐
│ ■ ■     │
└─────────┘
Edit Table #1
  color: blue
  seats: 2
  [save] [delete] [cancel]
Students (1): Ann
(no tables)";
    assert_eq!(output, expected);
}

#[test]
fn snapshot_validation_alerts() {
    let script = "\
table red 0
color
seats 3
create
table red 3
select 1
seats many
save
cancel
tables
";
    let output = seating::run_script(script, &Options::default());
    let expected = "\
! Please enter a valid color and number of seats.
! Please enter a valid color and number of seats.
Students: (none)
┌ #1 red ┐
│ ■ ■ ■  │
└────────┘
Edit Table #1
  color: red
  seats: 3
  [save] [delete] [cancel]
! Please enter valid color and number of seats.
1. table #1 red, 3 seats";
    assert_eq!(output, expected);
}

#[test]
fn snapshot_grid_wraps_at_width() {
    let script = "\
table red 5
table blue 5
table tan 1
";
    let options = Options {
        width: 26,
        ..Options::default()
    };
    let output = seating::run_script(script, &options);
    let board = output.rsplit("Students: (none)\n").next().unwrap();
    let expected = "\
┌ #1 red ───┐
│ ■ ■ ■ ■ ■ │
└───────────┘

┌ #2 blue ──┐  ┌ #3 tan ┐
│ ■ ■ ■ ■ ■ │  │ ■      │
└───────────┘  └────────┘";
    assert_eq!(board, expected);
}

#[test]
fn snapshot_duplicate_number_after_delete() {
    let script = "\
table a 1
table b 1
table c 1
select 2
delete
table d 1
tables
";
    let output = seating::run_script(script, &Options::default());
    assert!(output.ends_with("\
1. table #1 a, 1 seat
2. table #3 c, 1 seat
3. table #3 d, 1 seat"));
}

#[test]
fn snapshot_help_and_quit() {
    let output = seating::run_script("help\nquit\nstudent Ann\n", &Options::default());
    assert_eq!(output, seating::command::HELP);
}

#[test]
fn snapshot_invisible_characters_in_color() {
    for script in ["table e\u{301} 1\n", "table a\u{200b}b 1\n", "color a\tb\nseats 1\ncreate\n"] {
        let output = seating::run_script(script, &Options::default());
        let board: Vec<&str> = output.lines().skip(1).collect();
        assert_eq!(board.len(), 3, "got: {output}");
        assert!(board[0].ends_with('┐'), "top border lost its corner: {output}");
        assert!(board.iter().all(|line| !line.contains('\t')));
        let widths: Vec<usize> = board.iter().map(|l| seating::display_width::display_width(l)).collect();
        assert!(widths.iter().all(|&w| w == widths[0]), "ragged box: {output}");
    }
}

#[test]
fn snapshot_decimal_seat_count() {
    let output = seating::run_script("table red 2.5\nselect 1\nseats 3.7\nsave\ntables\n", &Options::default());
    assert!(output.ends_with("1. table #1 red, 3 seats"), "got: {output}");
    assert!(output.contains("│ ■ ■    │"), "2.5 should make two seats: {output}");
}

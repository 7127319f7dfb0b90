use std::io::{self, BufRead, Write};
use std::rc::Rc;

use tracing::debug;

use crate::command::{Command, HELP};
use crate::config::Options;
use crate::editor::{Editor, EditorError};
use crate::parser::parse_command;
use crate::view;

/// Result of feeding one line to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Text to show the user; empty when the command has nothing to say.
    Output(String),
    Quit,
}

/// An editor plus the display settings it is rendered with.
#[derive(Debug, Clone, Default)]
pub struct Session {
    editor: Editor,
    options: Options,
}

impl Session {
    pub fn new(options: Options) -> Self {
        Self {
            editor: Editor::with_max_seats(options.max_seats),
            options,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn prompt(&self) -> String {
        match self.editor.selected() {
            Some(table) => format!("edit #{}> ", table.number),
            None => "> ".to_string(),
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        match parse_command(line) {
            Ok(Some(Command::Quit)) => Step::Quit,
            Ok(Some(command)) => Step::Output(self.apply(command)),
            Ok(None) => Step::Output(String::new()),
            Err(e) => {
                debug!(line, error = %e, "unparsable command");
                Step::Output(format!("? {e}"))
            }
        }
    }

    fn apply(&mut self, command: Command) -> String {
        match command {
            Command::SetName(text) => {
                self.editor.set_student_name(&text);
                String::new()
            }
            Command::AddStudent => self.add_student(),
            Command::Student(text) => {
                if self.editor.is_dialog_open() {
                    return alert(EditorError::DialogOpen);
                }
                self.editor.set_student_name(&text);
                self.add_student()
            }
            Command::SetColor(text) => {
                self.editor.set_color(&text);
                String::new()
            }
            Command::SetSeats(text) => {
                self.editor.set_seats(&text);
                String::new()
            }
            Command::CreateTable => self.create_table(),
            Command::Table { color, seats } => {
                if self.editor.is_dialog_open() {
                    return alert(EditorError::DialogOpen);
                }
                self.editor.set_color(&color);
                self.editor.set_seats(&seats);
                self.create_table()
            }
            Command::Select(position) => {
                let Some(table) = position
                    .checked_sub(1)
                    .and_then(|i| self.editor.tables().get(i))
                    .map(Rc::clone)
                else {
                    return format!("? no table at position {position}");
                };
                self.editor.select_table(table);
                view::dialog(&self.editor)
            }
            Command::Save => match self.editor.save_changes() {
                Ok(_) => self.board(),
                Err(e) => alert(e),
            },
            Command::Delete => {
                self.editor.delete_table();
                self.board()
            }
            Command::Cancel => {
                self.editor.cancel();
                String::new()
            }
            Command::Show => self.board(),
            Command::ListStudents => view::students(&self.editor),
            Command::ListTables => view::table_list(&self.editor),
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        }
    }

    fn add_student(&mut self) -> String {
        match self.editor.add_student() {
            Ok(Some(student)) => format!("Added student {}.", student.name),
            Ok(None) => String::new(),
            Err(e) => alert(e),
        }
    }

    fn create_table(&mut self) -> String {
        match self.editor.create_table() {
            Ok(_) => self.board(),
            Err(e) => alert(e),
        }
    }

    fn board(&self) -> String {
        view::board(&self.editor, &self.options)
    }
}

fn alert(error: EditorError) -> String {
    format!("! {error}")
}

/// Runs every line of `script` and joins whatever the session printed.
pub fn run_script(script: &str, options: &Options) -> String {
    let mut session = Session::new(*options);
    let mut shown = Vec::new();
    for line in script.lines() {
        match session.handle_line(line) {
            Step::Output(text) if !text.is_empty() => shown.push(text),
            Step::Output(_) => {}
            Step::Quit => break,
        }
    }
    shown.join("\n")
}

/// Reads commands until end of input or `quit`, writing responses to `out`.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, options: &Options) -> io::Result<Editor> {
    let mut session = Session::new(*options);
    if options.prompt {
        write!(out, "{}", session.prompt())?;
        out.flush()?;
    }

    for line in input.lines() {
        match session.handle_line(&line?) {
            Step::Output(text) => {
                if !text.is_empty() {
                    writeln!(out, "{text}")?;
                }
            }
            Step::Quit => break,
        }
        if options.prompt {
            write!(out, "{}", session.prompt())?;
            out.flush()?;
        }
    }

    debug!(
        students = session.editor.students().len(),
        tables = session.editor.tables().len(),
        "session finished"
    );
    Ok(session.editor)
}

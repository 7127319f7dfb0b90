use std::iter;
use std::rc::Rc;

use tracing::{debug, info};

use crate::config::DEFAULT_MAX_SEATS;
use crate::form::TableForm;
use crate::model::{Student, Table, create_student};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("Please enter a valid color and number of seats.")]
    InvalidNewTable,
    #[error("Please enter valid color and number of seats.")]
    InvalidTableEdit,
    #[error("Close the edit dialog first (save, delete or cancel).")]
    DialogOpen,
    #[error("No more tables can be created.")]
    TableLimit,
}

/// Owns the student and table collections plus the form fields that feed them.
///
/// Collections are never mutated in place: every action builds a new slice and
/// swaps it in, so a snapshot taken earlier stays exactly as it was.
#[derive(Debug, Clone)]
pub struct Editor {
    students: Rc<[Rc<Student>]>,
    tables: Rc<[Rc<Table>]>,
    student_name: String,
    create_form: TableForm,
    edit_form: TableForm,
    selected: Option<Rc<Table>>,
    max_seats: u32,
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_max_seats(DEFAULT_MAX_SEATS)
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty editor whose forms refuse more than `max_seats` seats per table.
    pub fn with_max_seats(max_seats: u32) -> Self {
        Self {
            students: Rc::from([]),
            tables: Rc::from([]),
            student_name: String::new(),
            create_form: TableForm::default(),
            edit_form: TableForm::default(),
            selected: None,
            max_seats,
        }
    }

    pub fn students(&self) -> &[Rc<Student>] {
        &self.students
    }

    pub fn tables(&self) -> &[Rc<Table>] {
        &self.tables
    }

    pub fn students_snapshot(&self) -> Rc<[Rc<Student>]> {
        Rc::clone(&self.students)
    }

    pub fn tables_snapshot(&self) -> Rc<[Rc<Table>]> {
        Rc::clone(&self.tables)
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn create_form(&self) -> &TableForm {
        &self.create_form
    }

    pub fn edit_form(&self) -> &TableForm {
        &self.edit_form
    }

    pub fn selected(&self) -> Option<&Rc<Table>> {
        self.selected.as_ref()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn set_student_name(&mut self, text: &str) {
        self.student_name = text.to_string();
    }

    /// Types into the color field of whichever form is on screen.
    pub fn set_color(&mut self, text: &str) {
        self.visible_form_mut().color = text.to_string();
    }

    /// Types into the seat-count field of whichever form is on screen.
    pub fn set_seats(&mut self, text: &str) {
        self.visible_form_mut().seats = text.to_string();
    }

    fn visible_form_mut(&mut self) -> &mut TableForm {
        if self.selected.is_some() {
            &mut self.edit_form
        } else {
            &mut self.create_form
        }
    }

    /// Appends a student named after the name field. A blank field is a silent
    /// no-op and yields `Ok(None)`.
    pub fn add_student(&mut self) -> Result<Option<Rc<Student>>, EditorError> {
        if self.is_dialog_open() {
            return Err(EditorError::DialogOpen);
        }
        if self.student_name.trim().is_empty() {
            debug!("ignoring blank student name");
            return Ok(None);
        }

        let student = Rc::new(create_student(&self.student_name));
        self.students = self
            .students
            .iter()
            .cloned()
            .chain(iter::once(Rc::clone(&student)))
            .collect();
        self.student_name.clear();
        info!(name = %student.name, count = self.students.len(), "student added");
        Ok(Some(student))
    }

    /// Builds a table from the create form and appends it, numbered one past the
    /// current table count.
    pub fn create_table(&mut self) -> Result<Rc<Table>, EditorError> {
        if self.is_dialog_open() {
            return Err(EditorError::DialogOpen);
        }
        let Some((color, seats)) = self.create_form.validated(self.max_seats) else {
            debug!(
                color = %self.create_form.color,
                seats = %self.create_form.seats,
                "rejected table creation"
            );
            return Err(EditorError::InvalidNewTable);
        };

        // Not stable under deletion: a later table may reuse a number.
        let number = next_table_number(self.tables.len()).ok_or(EditorError::TableLimit)?;
        let table = Rc::new(Table::with_empty_seats(color, number, seats));
        self.tables = self
            .tables
            .iter()
            .cloned()
            .chain(iter::once(Rc::clone(&table)))
            .collect();
        self.create_form.clear();
        info!(number, color = %table.color, seats, "table created");
        Ok(table)
    }

    /// Opens the edit dialog on `table`, replacing any previous selection.
    pub fn select_table(&mut self, table: Rc<Table>) {
        self.edit_form = TableForm {
            color: table.color.clone(),
            seats: table.seats.len().to_string(),
        };
        debug!(number = table.number, "table selected");
        self.selected = Some(table);
    }

    /// Applies the edit form to the selected table. On failure nothing changes
    /// and the dialog stays open.
    pub fn save_changes(&mut self) -> Result<Rc<Table>, EditorError> {
        let Some(selected) = self.selected.as_ref() else {
            debug!("save with no table selected");
            return Err(EditorError::InvalidTableEdit);
        };
        let Some((color, seats)) = self.edit_form.validated(self.max_seats) else {
            debug!(
                number = selected.number,
                color = %self.edit_form.color,
                seats = %self.edit_form.seats,
                "rejected table edit"
            );
            return Err(EditorError::InvalidTableEdit);
        };

        let updated = Rc::new(Table::new(color, selected.number, &selected.resized_seats(seats)));
        self.tables = self
            .tables
            .iter()
            .map(|table| {
                if Rc::ptr_eq(table, selected) {
                    Rc::clone(&updated)
                } else {
                    Rc::clone(table)
                }
            })
            .collect();
        info!(number = updated.number, color = %updated.color, seats, "table updated");
        self.close_dialog();
        Ok(updated)
    }

    /// Removes the selected table, if any, and closes the dialog.
    pub fn delete_table(&mut self) -> Option<Rc<Table>> {
        let removed = self.selected.take();
        if let Some(selected) = &removed {
            self.tables = self
                .tables
                .iter()
                .filter(|table| !Rc::ptr_eq(*table, selected))
                .cloned()
                .collect();
            info!(number = selected.number, remaining = self.tables.len(), "table deleted");
        }
        self.close_dialog();
        removed
    }

    pub fn cancel(&mut self) {
        debug!("edit cancelled");
        self.close_dialog();
    }

    fn close_dialog(&mut self) {
        self.selected = None;
        self.edit_form.clear();
    }
}

/// Number for a table created when `count` tables exist.
fn next_table_number(count: usize) -> Option<u32> {
    u32::try_from(count).ok()?.checked_add(1)
}

/// One line of user input, already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetName(String),
    AddStudent,
    Student(String),
    SetColor(String),
    SetSeats(String),
    CreateTable,
    Table { color: String, seats: String },
    /// 1-based position in the rendered grid.
    Select(usize),
    Save,
    Delete,
    Cancel,
    Show,
    ListStudents,
    ListTables,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
Students
  name <text>          type into the student name field
  add                  add the student named in the field
  student <text>       name + add
Tables
  color <text>         type into the color field
  seats <text>         type into the number-of-seats field
  create               create a table from the fields
  table <color> <n>    color + seats + create
  select <position>    open the edit dialog for a table
Edit dialog
  save | delete | cancel
Other
  show | students | tables | help | quit";

use winnow::prelude::*;
use winnow::ascii::{digit1, space0, space1, till_line_ending};
use winnow::combinator::{eof, opt, preceded};
use winnow::error::{ContextError, ParserError};
use winnow::token::take_while;

use crate::command::{Command, CommandError};

/// Parses one input line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut input = line.trim_end_matches(['\r', '\n']).trim_start();
    if input.is_empty() || input.starts_with('#') {
        return Ok(None);
    }

    let verb = word(&mut input).map_err(|_| CommandError::Unknown(input.to_string()))?;
    let (parsed, usage) = match verb {
        "name" => (rest.map(Command::SetName).parse_next(&mut input), "name <text>"),
        "add" => (bare(Command::AddStudent, &mut input), "add"),
        "student" => (rest.map(Command::Student).parse_next(&mut input), "student <text>"),
        "color" => (rest.map(Command::SetColor).parse_next(&mut input), "color <text>"),
        "seats" => (rest.map(Command::SetSeats).parse_next(&mut input), "seats <text>"),
        "create" => (bare(Command::CreateTable, &mut input), "create"),
        "table" => (table_args(&mut input), "table <color> <seats>"),
        "select" => (select_args(&mut input), "select <position>"),
        "save" => (bare(Command::Save, &mut input), "save"),
        "delete" => (bare(Command::Delete, &mut input), "delete"),
        "cancel" => (bare(Command::Cancel, &mut input), "cancel"),
        "show" => (bare(Command::Show, &mut input), "show"),
        "students" => (bare(Command::ListStudents, &mut input), "students"),
        "tables" => (bare(Command::ListTables, &mut input), "tables"),
        "help" => (bare(Command::Help, &mut input), "help"),
        "quit" | "exit" => (bare(Command::Quit, &mut input), "quit"),
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    parsed.map(Some).map_err(|_| CommandError::Usage(usage))
}

fn word<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    take_while(1.., |c: char| !c.is_whitespace()).parse_next(input)
}

/// Everything after the separating whitespace, kept verbatim. May be empty.
fn rest(input: &mut &str) -> winnow::Result<String> {
    let text = opt(preceded(space1, till_line_ending)).parse_next(input)?;
    eof.parse_next(input)?;
    Ok(text.unwrap_or("").to_string())
}

fn bare(command: Command, input: &mut &str) -> winnow::Result<Command> {
    space0.parse_next(input)?;
    eof.parse_next(input)?;
    Ok(command)
}

fn table_args(input: &mut &str) -> winnow::Result<Command> {
    space1.parse_next(input)?;
    let color = word.parse_next(input)?;
    space1.parse_next(input)?;
    let seats = till_line_ending.parse_next(input)?;
    eof.parse_next(input)?;
    Ok(Command::Table {
        color: color.to_string(),
        seats: seats.trim_end().to_string(),
    })
}

fn select_args(input: &mut &str) -> winnow::Result<Command> {
    space1.parse_next(input)?;
    let digits: &str = digit1.parse_next(input)?;
    let position = digits
        .parse::<usize>()
        .map_err(|_| ContextError::from_input(input))?;
    space0.parse_next(input)?;
    eof.parse_next(input)?;
    Ok(Command::Select(position))
}

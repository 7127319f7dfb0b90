/// When to paint table borders in their color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_SEATS_PER_ROW: usize = 5;
pub const DEFAULT_MAX_SEATS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum width of the table grid in columns.
    pub width: usize,
    /// Seat markers per line inside a table.
    pub seats_per_row: usize,
    /// Largest seat count a table form accepts.
    pub max_seats: u32,
    pub color: bool,
    /// Print a prompt before each command.
    pub prompt: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            seats_per_row: DEFAULT_SEATS_PER_ROW,
            max_seats: DEFAULT_MAX_SEATS,
            color: false,
            prompt: false,
        }
    }
}

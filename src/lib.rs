pub mod command;
pub mod config;
pub mod display_width;
pub mod editor;
pub mod form;
pub mod layout;
pub mod model;
pub mod parser;
pub mod renderer;
pub mod session;
pub mod view;

pub use config::Options;
pub use editor::{Editor, EditorError};
pub use session::{run, run_script};

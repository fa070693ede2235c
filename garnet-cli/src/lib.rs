/*!
Command line types for the `garnet` binary; the executable parses its arguments into a
[`Command`](enum.Command.html) and dispatches to the matching action.
*/

use std::path::PathBuf;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Options applying to all commands.
///
#[derive(Debug)]
pub struct Options {
    /// Whether to colorize report output.
    pub use_color: bool,
    /// The level of logging to perform, from off to trace.
    pub verbose: i8,
}

///
/// One parsed command ready to execute.
///
#[derive(Debug)]
pub enum Command {
    /// Generate a Ruby client SDK for one service of a model.
    Generate(GenerateCommand, Options),
}

///
/// The inputs to a generate action.
///
#[derive(Debug)]
pub struct GenerateCommand {
    /// The JSON AST model file to read.
    pub model_file: PathBuf,
    /// The shape id of the service to generate.
    pub service: String,
    /// The directory to write the generated gem into.
    pub output_dir: PathBuf,
    /// The Ruby module wrapping all generated code, if overridden.
    pub module_name: Option<String>,
    /// The name of the generated gem, if overridden.
    pub gem_name: Option<String>,
}

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

pub mod actions;

pub mod command_line;

pub mod report;

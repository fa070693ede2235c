/*!
Argument parsing for the `garnet` binary.
*/

use crate::{Command, GenerateCommand, Options};
use std::error::Error;
use std::path::PathBuf;
use structopt::StructOpt;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

#[derive(Debug, StructOpt)]
#[structopt(name = "garnet", about = "Generates Ruby client SDKs from Smithy models.")]
pub(crate) struct CommandLine {
    /// The level of logging to perform; from off to trace
    #[structopt(long, short = "v", parse(from_occurrences))]
    verbose: i8,

    #[cfg(feature = "color")]
    /// Turn off color in the output
    #[structopt(long, short)]
    no_color: bool,

    #[structopt(subcommand)]
    cmd: SubCommand,
}

#[derive(Debug, StructOpt)]
pub(crate) enum SubCommand {
    /// Generate a Ruby client SDK for one service of a model file
    Generate {
        /// The JSON AST model file to read
        #[structopt(long, short)]
        model: PathBuf,

        /// The shape id of the service to generate
        #[structopt(long, short)]
        service: String,

        /// The directory to write the generated gem into
        #[structopt(long, short)]
        out: PathBuf,

        /// The Ruby module wrapping all generated code [default: derived from the gem name]
        #[structopt(long)]
        module: Option<String>,

        /// The name of the generated gem [default: derived from the service name]
        #[structopt(long)]
        gem: Option<String>,
    },
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

pub fn parse() -> Result<Command, Box<dyn Error>> {
    let args = CommandLine::from_args();

    #[cfg(feature = "color")]
    let use_color = !args.no_color;
    #[cfg(not(feature = "color"))]
    let use_color = false;

    let options = Options {
        use_color,
        verbose: args.verbose,
    };

    match args.cmd {
        SubCommand::Generate {
            model,
            service,
            out,
            module,
            gem,
        } => Ok(Command::Generate(
            GenerateCommand {
                model_file: model,
                service,
                output_dir: out,
                module_name: module,
                gem_name: gem,
            },
            options,
        )),
    }
}

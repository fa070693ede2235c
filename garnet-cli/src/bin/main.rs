use garnet_cli::{actions, command_line, report, Command};
use garnet_core::error::{Error, ErrorKind};
use std::process::exit;

fn main() {
    let command = match command_line::parse() {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", err);
            exit(2);
        }
    };

    match command {
        Command::Generate(cmd, options) => {
            init_logging(options.verbose);
            match actions::generate(cmd) {
                Ok(files) => report::report_generated_files(&files, options.use_color),
                Err(err) => {
                    eprintln!("{}", err);
                    exit(exit_code(&err));
                }
            }
        }
    }
}

fn init_logging(verbose: i8) {
    let level = match verbose {
        v if v <= 0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .init();
}

fn exit_code(err: &Error) -> i32 {
    match err.kind() {
        ErrorKind::UnsupportedProtocol(_) => 3,
        ErrorKind::Io(_) => 4,
        _ => 2,
    }
}

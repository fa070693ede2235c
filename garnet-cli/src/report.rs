/*!
Reporting of action results to the console.
*/

#[cfg(feature = "color")]
use colored::Colorize;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Print the relative paths of the files written by a generate action.
///
pub fn report_generated_files(files: &[String], use_color: bool) {
    for file in files {
        println!("{}", colorize(file, use_color));
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

#[cfg(feature = "color")]
fn colorize(file: &str, use_color: bool) -> String {
    if use_color {
        file.green().to_string()
    } else {
        file.to_string()
    }
}

#[cfg(not(feature = "color"))]
fn colorize(file: &str, _use_color: bool) -> String {
    file.to_string()
}

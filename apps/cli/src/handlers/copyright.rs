use preface_kernel::config::Settings;
use preface_licensing::copyright_line;

/// Prints `Copyright © <year> <author>`.
pub fn print_copyright(settings: &Settings) {
    println!("{}", copyright_line(settings));
}

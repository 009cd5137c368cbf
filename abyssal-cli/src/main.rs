//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = abyssal_cli::init_logging() {
        eprintln!("abyssal: {err:#}");
    }
    if let Err(err) = abyssal_cli::run() {
        eprintln!("abyssal: {err}");
        std::process::exit(1);
    }
}

use adt_derive::cli;
use colored::Colorize;

fn main() {
    adt_derive::init_tracing();
    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

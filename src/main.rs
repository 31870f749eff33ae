use clap::Parser;

use yaml_guard::cli::Cli;
use yaml_guard::commands::run_validate;

fn main() {
    let cli = Cli::parse();
    let exit_code = run_validate(&cli);
    std::process::exit(exit_code);
}

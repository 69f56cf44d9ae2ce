mod interface;

use clap::Parser;
use interface::Args;

fn main() {
    let args = Args::parse();
    let exit_code = interface::run(args);
    std::process::exit(exit_code);
}

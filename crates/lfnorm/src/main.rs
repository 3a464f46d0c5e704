mod config;
mod normalize;

use clap::Parser;

fn main() -> Result<(), normalize::Error> {
    let args = normalize::Args::parse();
    normalize::run(args)
}

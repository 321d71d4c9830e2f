// src/main.rs

use confdag::{cli, errors::Result, logging, run};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("confdag error [{}]: {err}", err.stage());
        std::process::exit(1);
    }
}

fn run_main() -> Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)
}

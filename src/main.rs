use clap::Parser;
use loan_calculator::cli::{self, Args};
use loan_calculator::constants::INVALID_INPUT_EXIT;
use simple_logger::SimpleLogger;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = SimpleLogger::new()
        .with_level(args.log_level())
        .env()
        .init()
    {
        eprintln!("logger: {}", e);
    }

    let mut stdout = io::stdout().lock();
    match cli::run(&args, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(INVALID_INPUT_EXIT),
        Err(e) => {
            eprintln!("failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}

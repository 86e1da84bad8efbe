use std::env;
use std::io;
use std::path::Path;

use sliding_window::io_examples::case_file;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), String> {
    // logs go to stderr so stdout only carries answers.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // recieve command line args.
    // args[0] is the name of program.
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("window-demo");
    let path = args
        .get(1)
        .ok_or_else(|| format!("usage: {} <cases.json>", program))?;

    let cases = case_file::load(Path::new(path)).map_err(|e| e.to_string())?;
    info!(count = cases.len(), "running cases");
    for case in cases {
        println!("{}", case_file::render(case));
    }
    Ok(())
}

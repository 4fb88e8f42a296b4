use std::io;
use std::path::PathBuf;

use gclog::runtime::{boot, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("usage: gclog <gc-log-file>")?;

    let config = boot::boot()?;
    let stdout = io::stdout();
    run::run(&path, &config, &mut stdout.lock())
}

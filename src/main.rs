//! recordkeeper entry point
//!
//! All startup logic lives in the `cli` module. This only reports a failed
//! start on stderr and exits non-zero.

use recordkeeper::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

//! cyberscore - security scoring and awareness training from the terminal.

use anyhow::Result;

fn main() -> Result<()> {
    cyberscore_cli::run()
}

mod cli;
mod log;
#[cfg(test)]
mod test_utils;

use anyhow::Result;
use cli::ux;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = cli::run().await {
        ux::present_error(e);
        std::process::exit(1);
    }
    Ok(())
}

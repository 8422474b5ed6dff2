//! Resolve a record the same way the submitter does and print the body it would send.
use anyhow::Result;

use prdscore_client::InputSource;

fn main() -> Result<()> {
    let args = std::env::args().skip(1).collect();
    let record = InputSource::from_args(args, std::io::stdin())?.resolve()?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

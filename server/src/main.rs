//! A local stand-in for the scoring backend: answers 200 for valid submissions and logs them.
mod api;

use std::str::FromStr;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
struct Args {
    #[clap(long, default_value_t = String::from("127.0.0.1"))]
    address: String,

    #[clap(long, default_value_t = 10000)]
    port: u16,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let ip = std::net::IpAddr::from_str(&args.address)
        .map_err(|e| anyhow::anyhow!("Could not parse IP address {}: {}", args.address, e))?;

    log::info!("Listening on {}:{}", ip, args.port);
    warp::serve(api::routes()).run((ip, args.port)).await;
    Ok(())
}

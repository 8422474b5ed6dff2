use std::ffi::OsString;

use clap::{ErrorKind, Parser};

use prdscore_client::input::POSITIONAL_ARITY;
use prdscore_client::{InputSource, SubmitConfig};

const USAGE: &str = "\
Usage:
  prdscore_submitter <prdDocName> <prdLink> <submitter> <businessLine> <productScore> \
<backendScore> <frontendScore> <qaScore> <designScore> <globalScore> <globalLevel>
  echo '{\"prdDocName\": \"...\", \"prdLink\": \"...\", \"submitter\": \"...\", \
\"businessLine\": \"...\", \"productScore\": 4, ...}' | prdscore_submitter

In the JSON form globalScore and globalLevel are optional.
Exactly 11 arguments are always taken as field values, even ones starting with '-'.";

/// Submit one PRD review score. Submission failures are logged and never change the exit code.
#[derive(Parser)]
#[clap(allow_negative_numbers = true)]
struct Args {
    /// Overrides the default scoring endpoint.
    #[clap(long, env = "PRD_SCORE_ENDPOINT")]
    endpoint: Option<String>,

    /// Exactly 11 values for the positional form; anything else reads JSON from stdin.
    fields: Vec<String>,
}

fn invalid_input(e: impl std::fmt::Display) -> ! {
    log::error!("Invalid input: {}", e);
    eprintln!("{}", USAGE);
    std::process::exit(1);
}

/// Exactly [POSITIONAL_ARITY] arguments are field values no matter what they look like, so clap
/// only sees the binary name and picks the endpoint up from the environment.
fn parse_args(raw: Vec<OsString>) -> Result<Args, clap::Error> {
    if raw.len() != POSITIONAL_ARITY + 1 {
        return Args::try_parse_from(raw);
    }

    let mut raw = raw.into_iter();
    let mut args = Args::try_parse_from(raw.next())?;
    args.fields = raw
        .map(|a| {
            a.into_string()
                .unwrap_or_else(|a| invalid_input(format!("{:?} is not valid UTF-8", a)))
        })
        .collect();
    Ok(args)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args(std::env::args_os().collect()) {
        Ok(a) => a,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => invalid_input(e),
    };
    let config = SubmitConfig::with_endpoint(args.endpoint);

    let record = match InputSource::from_args(args.fields, std::io::stdin())
        .and_then(|source| source.resolve())
    {
        Ok(r) => r,
        Err(e) => invalid_input(e),
    };

    prdscore_client::send_synchronously(&config, &record);
}

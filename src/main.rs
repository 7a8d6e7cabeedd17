use std::process::ExitCode;

use clap::Parser;

use kuldonc_rust::{DEFAULT_HOST, DEFAULT_PORT, OscArg, send_to};

/// Send a single OSC 1.0 message as one UDP datagram.
#[derive(Parser)]
struct Cli {
    /// OSC address pattern, e.g. /volume
    address: String,
    /// Arguments, typed with a prefix (i:42, f:0.75, s:hello) or bare.
    /// Bare values are inferred: int32 if they parse as one, then float32,
    /// otherwise string.
    values: Vec<String>,
    /// Destination host
    #[clap(long, default_value = DEFAULT_HOST)]
    host: String,
    /// Destination port
    #[clap(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Print each encoding stage to stderr
    #[clap(short, long)]
    debug: bool,
}

fn parse_value(raw: &str) -> Result<OscArg, String> {
    if let Some(rest) = raw.strip_prefix("i:") {
        return rest
            .parse::<i32>()
            .map(OscArg::Int)
            .map_err(|e| format!("'{rest}' is not an int32: {e}"));
    }
    if let Some(rest) = raw.strip_prefix("f:") {
        return rest
            .parse::<f32>()
            .map(OscArg::Float)
            .map_err(|e| format!("'{rest}' is not a float32: {e}"));
    }
    if let Some(rest) = raw.strip_prefix("s:") {
        return Ok(OscArg::Str(rest.to_string()));
    }
    if let Ok(v) = raw.parse::<i32>() {
        return Ok(OscArg::Int(v));
    }
    if let Ok(v) = raw.parse::<f32>() {
        return Ok(OscArg::Float(v));
    }
    Ok(OscArg::Str(raw.to_string()))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut args = Vec::with_capacity(cli.values.len());
    for value in &cli.values {
        match parse_value(value) {
            Ok(arg) => args.push(arg),
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    match send_to(&cli.address, args, &cli.host, cli.port, cli.debug) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

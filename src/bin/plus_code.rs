//! Spot-check CLI for the plus+code codec: `encode`, `decode`, `shorten`, and
//! `recover` subcommands for manual verification from a terminal. Arguments
//! are parsed by hand rather than through an argument-parsing crate, since the
//! handful of positional floats and a code string don't warrant one.

use std::env;
use std::process;

use anyhow::{bail, Context, Result};

fn main() -> Result<()> {
    let mut args = env::args().skip(1);

    let Some(command) = args.next() else {
        usage();
        process::exit(2);
    };

    let rest: Vec<String> = args.collect();

    let output = match command.as_str() {
        "encode" => run_encode(&rest)?,
        "decode" => run_decode(&rest)?,
        "shorten" => run_shorten(&rest)?,
        "recover" => run_recover(&rest)?,
        "help" | "-h" | "--help" => {
            usage();
            return Ok(());
        }
        other => bail!("unknown subcommand '{other}'; run with --help for usage"),
    };

    println!("{output}");
    Ok(())
}

fn usage() {
    eprintln!(
        "usage:\n  \
         plus_code encode <lat> <lng> [code_length]\n  \
         plus_code decode <code>\n  \
         plus_code shorten <code> <ref_lat> <ref_lng>\n  \
         plus_code recover <short_code> <ref_lat> <ref_lng>"
    );
}

fn parse_f64(arg: &str, what: &str) -> Result<f64> {
    arg.parse::<f64>()
        .with_context(|| format!("'{arg}' is not a valid {what}"))
}

fn run_encode(args: &[String]) -> Result<String> {
    let [lat, lng, rest @ ..] = args else {
        bail!("encode needs <lat> <lng> [code_length]");
    };
    let lat = parse_f64(lat, "latitude")?;
    let lng = parse_f64(lng, "longitude")?;
    let code_length = match rest {
        [len] => len.parse::<usize>().with_context(|| format!("'{len}' is not a valid code length"))?,
        [] => 10,
        _ => bail!("encode takes at most three arguments"),
    };

    Ok(pluscode::encode(lat, lng, code_length)?)
}

fn run_decode(args: &[String]) -> Result<String> {
    let [code] = args else {
        bail!("decode needs <code>");
    };
    let area = pluscode::decode(code)?;
    Ok(area.to_string())
}

fn run_shorten(args: &[String]) -> Result<String> {
    let [code, ref_lat, ref_lng] = args else {
        bail!("shorten needs <code> <ref_lat> <ref_lng>");
    };
    let ref_lat = parse_f64(ref_lat, "reference latitude")?;
    let ref_lng = parse_f64(ref_lng, "reference longitude")?;
    Ok(pluscode::shorten(code, ref_lat, ref_lng)?)
}

fn run_recover(args: &[String]) -> Result<String> {
    let [short, ref_lat, ref_lng] = args else {
        bail!("recover needs <short_code> <ref_lat> <ref_lng>");
    };
    let ref_lat = parse_f64(ref_lat, "reference latitude")?;
    let ref_lng = parse_f64(ref_lng, "reference longitude")?;
    Ok(pluscode::recover_nearest(short, ref_lat, ref_lng)?)
}

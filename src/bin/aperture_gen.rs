use aperture_config::{baselines, generate, route, verify};
use clap::Parser;

/// Generate a non-redundant pupil configuration and check it.
#[derive(Parser)]
struct Args {
    /// First measured baseline (d >= 1)
    d: i64,
    /// Number of baselines to measure (m >= 1)
    m: i64,
    /// Emit the pair list as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let selected = route(args.d, args.m)?;
    let pairs = generate(args.d, args.m)?;
    let ok = verify(args.d, args.m, &pairs);

    if args.json {
        println!("{}", serde_json::to_string(&pairs)?);
    } else {
        eprintln!("route: {selected:?}");
        for pair in &pairs {
            println!("{} {}", pair.a, pair.b);
        }
        eprintln!("baselines: {:?}", baselines(&pairs));
    }

    if !ok {
        return Err(format!(
            "configuration for d = {}, m = {} failed verification",
            args.d, args.m
        )
        .into());
    }
    Ok(())
}

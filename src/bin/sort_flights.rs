use clap::Parser;
use flight_path::utils::logger;
use flight_path::{resolve_input, FlightError, FlightOutput, FlightsInput, Result};
use std::io::Read;

#[derive(Parser)]
#[command(name = "sort-flights")]
#[command(about = "Resolve a JSON list of flights into one itinerary without starting a server")]
struct Args {
    /// JSON file with {"flights": [...]}; reads stdin when omitted or "-"
    input: Option<String>,

    /// Pretty-print the result
    #[arg(short, long)]
    pretty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path).map_err(FlightError::IoError),
    }
}

fn run(args: &Args) -> Result<String> {
    let raw = read_input(args.input.as_deref())?;

    let input: FlightsInput = serde_json::from_str(&raw)?;
    tracing::debug!("Loaded {} flights", input.flights.len());

    let flight = resolve_input(&input)?;
    let output = FlightOutput { flight };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(rendered)
}

fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    match run(&args) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}

//! # Quote CLI
//!
//! Prices one checkout request and prints the quote as JSON.
//!
//! ## Usage
//! ```bash
//! # Request from a file
//! ticketing-quote --promos promos.json request.json
//!
//! # Request from stdin
//! echo '{"eventId":"evt-1","subtotalCents":10000,"promoCode":"EARLYBIRD"}' \
//!   | ticketing-quote --config pricing.toml --promos promos.json
//! ```

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use ticketing_quote::logging::init_tracing;
use ticketing_quote::{
    PricingConfig, PromoCatalog, QuoteError, QuoteRequest, QuoteResult, QuoteService,
};

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    promos: Option<PathBuf>,
    request: Option<PathBuf>,
}

fn print_help() {
    println!("Ticketing Quote");
    println!();
    println!("Usage: ticketing-quote [OPTIONS] [REQUEST.json]");
    println!();
    println!("Reads a quote request from REQUEST.json (or stdin) and prints the priced quote.");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>   Pricing config TOML file");
    println!("  -p, --promos <PATH>   Promo catalog JSON file (default: empty catalog)");
    println!("  -h, --help            Show this help message");
}

/// Parses arguments after the program name. `Ok(None)` means help was requested.
fn parse_args<I>(args: I) -> QuoteResult<Option<Args>>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => parsed.config = Some(flag_value(&arg, args.next())?),
            "--promos" | "-p" => parsed.promos = Some(flag_value(&arg, args.next())?),
            "--help" | "-h" => return Ok(None),
            flag if flag.starts_with('-') => {
                return Err(QuoteError::Usage(format!("unknown option '{}'", flag)));
            }
            path => {
                if let Some(first) = &parsed.request {
                    return Err(QuoteError::Usage(format!(
                        "one request file expected, got '{}' and '{}'",
                        first.display(),
                        path
                    )));
                }
                parsed.request = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Some(parsed))
}

fn flag_value(flag: &str, value: Option<String>) -> QuoteResult<PathBuf> {
    match value {
        Some(v) if !v.starts_with('-') => Ok(PathBuf::from(v)),
        _ => Err(QuoteError::Usage(format!("{} requires a <PATH> value", flag))),
    }
}

/// Loads config and catalog, reads one request, writes the quote JSON to `output`.
fn run<R: Read, W: Write>(args: &Args, mut input: R, mut output: W) -> QuoteResult<()> {
    let config = PricingConfig::load(args.config.as_deref())?;
    init_tracing(&config.logging);
    info!(
        config_path = ?args.config,
        currency = %config.pricing.currency,
        reject_unknown_codes = config.pricing.reject_unknown_codes,
        "Configuration loaded"
    );

    let catalog = match &args.promos {
        Some(path) => PromoCatalog::load(path)?,
        None => PromoCatalog::default(),
    };

    let raw = match &args.request {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            input.read_to_string(&mut buf)?;
            buf
        }
    };
    let request: QuoteRequest = serde_json::from_str(&raw)?;

    let service = QuoteService::new(config, catalog);
    let response = service.quote(&request)?;

    writeln!(output, "{}", serde_json::to_string_pretty(&response)?)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("Run 'ticketing-quote --help' for usage.");
            return ExitCode::from(2);
        }
    };

    match run(&args, std::io::stdin().lock(), std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Quote failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn quote_json(args: &Args, stdin: &str) -> QuoteResult<serde_json::Value> {
        let mut out = Vec::new();
        run(args, stdin.as_bytes(), &mut out)?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[test]
    fn test_parse_flags_and_request() {
        let args = parse_args(argv(&["-c", "pricing.toml", "--promos", "promos.json", "req.json"]))
            .unwrap()
            .unwrap();
        assert_eq!(
            args,
            Args {
                config: Some(PathBuf::from("pricing.toml")),
                promos: Some(PathBuf::from("promos.json")),
                request: Some(PathBuf::from("req.json")),
            }
        );

        assert_eq!(parse_args(argv(&[])).unwrap(), Some(Args::default()));
        assert_eq!(parse_args(argv(&["--promos", "p.json", "--help"])).unwrap(), None);
    }

    #[test]
    fn test_parse_flag_without_value() {
        for args in [&["--config"][..], &["-p"][..], &["--config", "--promos", "p.json"][..]] {
            let err = parse_args(argv(args)).unwrap_err();
            assert!(matches!(err, QuoteError::Usage(ref msg) if msg.contains("requires")), "{:?}", args);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_option() {
        let err = parse_args(argv(&["--promo", "p.json"])).unwrap_err();
        assert!(matches!(err, QuoteError::Usage(ref msg) if msg.contains("--promo")));

        let err = parse_args(argv(&["a.json", "b.json"])).unwrap_err();
        assert!(matches!(err, QuoteError::Usage(_)));
    }

    #[test]
    fn test_run_reads_request_from_stdin() {
        let json = quote_json(
            &Args::default(),
            r#"{"eventId": "evt-1", "subtotalCents": 4500}"#,
        )
        .unwrap();
        assert_eq!(json["subtotalCents"], 4500);
        assert_eq!(json["discountCents"], 0);
        assert_eq!(json["totalCents"], 4500);
    }

    #[test]
    fn test_run_reads_request_and_catalog_files() {
        let dir = std::env::temp_dir().join(format!("ticketing-quote-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let promos = dir.join("promos.json");
        let request = dir.join("request.json");
        std::fs::write(
            &promos,
            r#"[{"id": "550e8400-e29b-41d4-a716-446655440000", "code": "THIRD", "rule": {"percentOff": 33}}]"#,
        )
        .unwrap();
        std::fs::write(
            &request,
            r#"{"eventId": "evt-1", "subtotalCents": 10, "promoCode": "third"}"#,
        )
        .unwrap();

        let args = Args {
            config: None,
            promos: Some(promos),
            request: Some(request),
        };
        // stdin is ignored when a request file is given
        let json = quote_json(&args, "not json").unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(json["discountCents"], 3);
        assert_eq!(json["totalCents"], 7);
        assert_eq!(json["promoCode"], "THIRD");
    }

    #[test]
    fn test_run_errors() {
        let args = Args {
            request: Some(PathBuf::from("/nonexistent/ticketing-quote/request.json")),
            ..Args::default()
        };
        assert!(matches!(quote_json(&args, ""), Err(QuoteError::Io(_))));

        assert!(matches!(
            quote_json(&Args::default(), "{\"eventId\": "),
            Err(QuoteError::Json(_))
        ));

        let err = quote_json(
            &Args::default(),
            r#"{"eventId": "evt-1", "subtotalCents": 4500, "promoCode": "NOPE"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, QuoteError::Pricing(_)));
    }
}

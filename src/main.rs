use ratecard::cli::Cli;
use ratecard::config::{Config, OutputFormat};
use ratecard::core::{Locale, RateCard, RateCardExport};
use ratecard::debug_println;
use ratecard::pricing::{request_log_pricing, TierTable, REQUEST_LOG_TIERS};
use std::process;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    // Handle configuration commands
    if cli.init {
        Config::init()?;
        return Ok(());
    }

    if cli.print_config {
        let config = Config::load().unwrap_or_else(|_| Config::default());
        config.print()?;
        return Ok(());
    }

    if cli.check {
        Config::load()?;
        TierTable::new(REQUEST_LOG_TIERS.to_vec())?;
        println!("✓ Configuration valid");
        return Ok(());
    }

    // Load configuration and apply CLI overrides
    let mut config = Config::load().unwrap_or_else(|_| Config::default());

    if let Some(tag) = cli.locale.as_deref() {
        match Locale::from_tag(tag) {
            Some(locale) => config.locale = locale,
            None => {
                eprintln!(
                    "Error: Unknown locale '{}'. Valid tags: {}",
                    tag,
                    Locale::tags().join(", ")
                );
                process::exit(1);
            }
        }
    }

    if cli.no_color {
        config.color = false;
    }

    if cli.json {
        config.format = OutputFormat::Json;
    }

    debug_println!(
        "Rendering with locale={} format={:?} color={}",
        config.locale.as_tag(),
        config.format,
        config.color
    );

    // Render the rate card
    let table = request_log_pricing();
    let card = RateCard::build(table, config.locale);

    match config.format {
        OutputFormat::Table => println!("{}", card.render_text(config.color)),
        OutputFormat::Json => {
            let export = RateCardExport::new(table, &card);
            println!("{}", serde_json::to_string_pretty(&export)?);
        }
    }

    Ok(())
}

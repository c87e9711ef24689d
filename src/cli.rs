use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ratecard")]
#[command(version, about = "Request-log pricing rate card for the terminal")]
pub struct Cli {
    /// Print tier data and formatted rows as JSON
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Digit-grouping locale (en, de, fr, es, ja, zh)
    #[arg(short = 'l', long = "locale", value_name = "TAG")]
    pub locale: Option<String>,

    /// Disable ANSI styling in table output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Validate config file and pricing data
    #[arg(long = "check")]
    pub check: bool,

    /// Print current configuration
    #[arg(long = "print-config")]
    pub print_config: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

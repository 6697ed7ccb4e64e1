use blackjack_advisor_drivers::{
    parse_config_from_file, parse_strategy_kind, run_scenario, DriverError,
};
use clap::Parser;

const DEFAULT_CONFIG_PATH: &str = "~/.blackjack_advisor.yml";
const DEFAULT_CONFIG_FILE_NAME: &str = ".blackjack_advisor.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The strategy to ask, "basic" or "hilo"
    #[arg(short, long, default_value_t = String::from("basic"))]
    strategy: String,

    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,
}

fn resolve_config_path(config: &str) -> Result<String, DriverError> {
    if config != DEFAULT_CONFIG_PATH {
        return Ok(config.to_string());
    }
    let home_dir = home::home_dir().ok_or(DriverError::NoHomeDirectory)?;
    let config_file_path = home_dir.join(DEFAULT_CONFIG_FILE_NAME);
    if !config_file_path.exists() || config_file_path.is_dir() {
        return Err(DriverError::ConfigNotFound(
            config_file_path.display().to_string(),
        ));
    }
    Ok(config_file_path.display().to_string())
}

fn run(args: CommandLineArgs) -> Result<(), DriverError> {
    let kind = parse_strategy_kind(&args.strategy)?;
    let config_path = resolve_config_path(&args.config)?;
    log::info!("reading scenario from {}", config_path);

    let config = parse_config_from_file(&config_path)?;
    let report = run_scenario(kind, &config)?;
    println!("{}", report);
    Ok(())
}

fn main() {
    env_logger::init();
    let args = CommandLineArgs::parse();
    if let Err(err) = run(args) {
        log::error!("{}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

use clap::Parser;
use greetkit::utils::{error::GreetError, logger, validation::Validate};
use greetkit::{CliConfig, GreetingEngine};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting greetkit");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        tracing::error!(
            "Greeting failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}

fn run(config: CliConfig) -> Result<(), GreetError> {
    config.validate()?;
    let config = config.resolve()?;

    let engine = GreetingEngine::new(config);
    let greeting = engine.run()?;
    println!("{}", engine.render(&greeting)?);

    Ok(())
}

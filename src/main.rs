use clap::Parser;
use domainworth::core::Phase;
use domainworth::ui::render::render_view;
use domainworth::utils::error::{ErrorSeverity, ValuationError};
use domainworth::utils::{logger, validation::Validate};
use domainworth::{AppConfig, CliConfig, Controller, GeminiClient, Session, ValuationService};
use std::sync::Arc;

fn exit_code(e: &ValuationError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report(e: &ValuationError) {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match AppConfig::from_cli(&cli).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            report(&e);
            std::process::exit(exit_code(&e).max(1));
        }
    };
    if config.api_key.is_none() {
        tracing::warn!("No API key found; valuation requests will fail");
    }

    let width = config.width;
    let language = config.language;
    let service: Arc<dyn ValuationService> = Arc::new(GeminiClient::new(config)?);

    match cli.domain.as_deref() {
        Some(domain) if cli.json => match service.evaluate(domain, language).await {
            Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
            Err(e) => {
                report(&e);
                std::process::exit(exit_code(&e).max(1));
            }
        },
        Some(domain) => {
            let mut controller = Controller::new(service, language);
            if controller.submit(domain).is_none() {
                let e = ValuationError::EmptyDomainError;
                report(&e);
                std::process::exit(1);
            }
            controller.settle().await;
            print!("{}", render_view(controller.state(), width));
            if matches!(controller.state().phase(), Phase::Error(_)) {
                std::process::exit(2);
            }
        }
        None => {
            let controller = Controller::new(service, language);
            let mut session = Session::new(controller, width);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session.run(stdin.lock(), &mut stdout).await?;
        }
    }

    Ok(())
}

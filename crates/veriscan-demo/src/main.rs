use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use veriscan_classifiers::{Classifier, LexiconClassifier};
use veriscan_demo::cli::{Cli, Commands};
use veriscan_demo::models::{DemoConfig, Mode};
use veriscan_demo::server::run_server;
use veriscan_demo::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            address,
            mode,
            model,
            verbose,
        } => {
            // Initialize logging
            init_logging(verbose);

            let config = DemoConfig {
                address,
                port,
                mode,
                model_repo: model,
            };
            let addr: SocketAddr = format!("{}:{}", config.address, config.port).parse()?;

            // Load the classifier once, before serving traffic.
            let classifier = build_classifier(&config)?;

            println!();
            println!("  ┌───────────────────────────────────────────────┐");
            println!("  │  Veriscan — scam & misinformation detector    │");
            println!("  └───────────────────────────────────────────────┘");
            println!();
            println!("  Mode:       {:?}", config.mode);
            println!("  Classifier: {}", classifier.name());
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            let state = AppState::new(config, classifier)?;
            run_server(state, addr).await?;
        }
    }

    Ok(())
}

fn build_classifier(config: &DemoConfig) -> anyhow::Result<Arc<dyn Classifier>> {
    match config.mode {
        Mode::Lexicon => Ok(Arc::new(LexiconClassifier::new()?)),
        Mode::Ml => {
            #[cfg(feature = "ml-models")]
            match veriscan_classifiers::SstClassifier::from_hub(&config.model_repo) {
                Ok(classifier) => return Ok(Arc::new(classifier)),
                Err(e) => {
                    tracing::warn!("Could not load {}: {e}", config.model_repo);
                    tracing::warn!("Falling back to the lexicon classifier");
                }
            }

            #[cfg(not(feature = "ml-models"))]
            tracing::warn!("Built without ml-models; using the lexicon classifier");

            Ok(Arc::new(LexiconClassifier::new()?))
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "veriscan_demo=debug,veriscan_classifiers=debug,veriscan_extract=debug,tower_http=debug"
    } else {
        "veriscan_demo=info,veriscan_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

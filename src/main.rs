use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use word_shelf::utils::config::DEFAULT_CONFIG_PATH;
use word_shelf::{load_working_set, terminal, AppConfig, CommandSpeaker, Session, SilentSpeaker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut config = AppConfig::load_or_default(Some(DEFAULT_CONFIG_PATH))
        .map_err(|e| anyhow::anyhow!("{DEFAULT_CONFIG_PATH}: {e}"))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("word_shelf={}", config.logging.level).parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(source) = args.get(1) {
        config.data.source = source.clone();
    }
    config.validate()?;

    tracing::info!("Loading word list from {}", config.data.source);
    let working_set = load_working_set(&config.data).await;
    let mut session = Session::new(working_set, config.query.page_size);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    if config.speech.enabled {
        let mut speaker = CommandSpeaker::new(config.speech.program.clone());
        terminal::run(&mut session, &mut speaker, &config.speech, stdin, stdout).await?;
    } else {
        let mut speaker = SilentSpeaker::default();
        terminal::run(&mut session, &mut speaker, &config.speech, stdin, stdout).await?;
    }

    tracing::info!("word-shelf shutting down");
    Ok(())
}

// src/main.rs
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notionglot::config::{CommandLineInput, Settings};
use notionglot::service::{self, AppState};
use notionglot::translator::CompletionTranslator;
use notionglot::types::ApiKey;
use notionglot::{NotionHttpClient, PageTranslator};
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build("notionglot.log")?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();
    setup_logging(cli.verbose).map_err(|e| anyhow::anyhow!("logging setup failed: {}", e))?;

    let settings = Settings::load(&cli.config)?;

    let notion_token = ApiKey::new(settings.notion.api_token.clone())?;
    let notion = NotionHttpClient::new(
        &notion_token,
        &settings.notion.base_url,
        &settings.notion.version,
    )?;

    let completion_key = ApiKey::new(settings.completion.api_key.clone())?;
    let engine = CompletionTranslator::new(&completion_key, &settings.completion)?;

    let translator = PageTranslator::new(Arc::new(notion), Arc::new(engine));
    let state = Arc::new(AppState {
        translator,
        mode: settings.service.mode,
    });

    log::info!("starting notionglot");
    service::serve(&settings.service, state).await?;
    Ok(())
}

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::{error, info};
use std::io::Write;
use wifi_setup::{
    Outcome, Shell,
    config::AppConfig,
    device_client::DeviceClient,
    language::Translations,
    prompt::TerminalPrompt,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    match run().await {
        Ok(Outcome::Connected) => info!("device connected"),
        Ok(Outcome::Quit) => info!("setup left"),
        Ok(Outcome::NotConnected) => {
            error!("device could not connect");
            std::process::exit(1);
        }
        Err(e) => {
            error!("application error: {e:#}");
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<Outcome> {
    initialize();

    let config = AppConfig::get()?;

    let client = DeviceClient::new(&config.device.url, config.device.request_timeout)
        .context("failed to create device client")?;
    let language =
        Translations::load(config.setup.locale).context("failed to load translations")?;

    info!("setting up device at {}", config.device.url);

    let mut shell = Shell::new(
        client,
        TerminalPrompt::stdin(),
        language,
        std::io::stdout(),
    );

    shell
        .run(config.setup.options(), config.auto_connect.as_ref())
        .await
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| writeln!(f, "[{}] {}", record.level(), record.args()));

    // stdout belongs to the page
    builder.target(Target::Stderr).init();

    info!("module version: {}", env!("CARGO_PKG_VERSION"));
}

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::{Args, Command};
use clap::Parser;
use pictor_config::Config;
use pictor_imagegen::{ImageGenService, ImageParams};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load(&args.config)?;

    pictor_telemetry::init(&config.telemetry, "warn")?;

    tracing::debug!(config_path = %args.config.display(), "configuration loaded");

    let service = ImageGenService::new(&config.imagegen)?;

    let cancel = CancellationToken::new();
    let cancel_on_signal = cancel.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, cancelling");
            cancel_on_signal.cancel();
        }
    });

    match args.command {
        Command::Generate {
            description,
            width,
            height,
            quality,
            style,
        } => {
            let params = ImageParams::new(description, width, height)
                .with_quality(quality)
                .with_style(style);

            let url = service.generate_image(&params, &cancel).await?;

            println!("{url}");
        }
    }

    Ok(())
}

//! quotebook watch コマンド

use super::Context;
use crate::notify::ConsoleNotifier;
use clap::Parser;
use owo_colors::OwoColorize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
pub struct Args {
    /// Seconds between sync cycles (default: config, 60)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,
}

pub async fn run(ctx: &Context, args: Args) -> Result<(), String> {
    let widget = ctx.widget().map_err(|e| e.to_string())?;

    let mut config = ctx.config.sync.clone();
    if let Some(secs) = args.interval {
        config.interval = Duration::from_secs(secs);
    }
    let service = ctx
        .sync_service(Arc::new(ConsoleNotifier))
        .with_config(config);

    println!(
        "Syncing with {} every {}s {}",
        service.config().endpoint.cyan(),
        service.config().interval.as_secs(),
        "(Ctrl-C to stop)".dimmed()
    );

    service.spawn_periodic(widget);

    tokio::signal::ctrl_c().await.map_err(|e| e.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        use clap::CommandFactory;
        let cmd = Args::command();
        cmd.debug_assert();
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(Args::try_parse_from(["watch", "--interval", "0"]).is_err());
    }
}

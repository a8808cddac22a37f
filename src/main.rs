// SPDX-License-Identifier: MPL-2.0
use pill_tabs::app::{self, App, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
pill-tabs-demo

USAGE:
  pill-tabs-demo [OPTIONS]

OPTIONS:
  --config-dir DIR   Read settings.toml from DIR
  --start N          Select tab N (zero-based) at startup
  -h, --help         Print this help

ENVIRONMENT:
  PILL_TABS_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG               Log filter (default: pill_tabs=info)
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pill_tabs=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        starting_index: args.opt_value_from_str("--start")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    let app = App::new(flags)?;
    app::run(app)?;
    Ok(())
}

// SPDX-License-Identifier: MPL-2.0
use iced_portfolio::app::{self, paths, Flags};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const HELP: &str = "\
iced_portfolio

USAGE:
  iced_portfolio [OPTIONS]

OPTIONS:
  -h, --help                Print help information
  -v, --verbose             Log debug messages
  --lang <LOCALE>           Force the interface language (e.g. en-US, fr)
  --config-dir <DIR>        Read and write settings.toml in DIR
  --download-dir <DIR>      Save the résumé into DIR
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or(None);
    let download_dir: Option<String> = args.opt_value_from_str("--download-dir").unwrap_or(None);

    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(config_dir, download_dir);

    app::run(Flags {
        lang,
        config_dir: None,
    })
}

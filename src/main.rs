// SPDX-License-Identifier: MPL-2.0
use portfolio::app::{self, Flags};
use portfolio::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Portfolio - personal portfolio showcase

USAGE:
  portfolio [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
      --lang <LOCALE>      Interface language (e.g. en-US, fr)
      --theme <MODE>       Initial theme: light, dark or system
      --config-dir <DIR>   Directory holding settings.toml

ENVIRONMENT:
  PORTFOLIO_CONFIG_DIR     Config directory used when --config-dir is absent
  PORTFOLIO_LOG            Log filter (e.g. debug, portfolio=trace)
";

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "PORTFOLIO_LOG";

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Parses the command line. `Ok(None)` means help was requested.
fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!("ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use iced_gallery::app::{self, paths, CloseAction, Flags};
use log::LevelFilter;

const HELP: &str = "\
iced_gallery - full-screen image slideshow

USAGE:
  iced_gallery [OPTIONS] [PATH]

ARGS:
  <PATH>                  Image file or folder to open

OPTIONS:
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --location <ADDRESS>    Start address, e.g. /p/3?photoId=3
  --interval <SECONDS>    Seconds between two photos (1-60)
  --config-dir <DIR>      Directory holding settings.toml
  --no-close              Slideshow cannot be dismissed
  --quit-on-close         Quit instead of returning to the grid
  -h, --help              Print this help
";

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("iced_gallery", LevelFilter::Debug)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let no_close = args.contains("--no-close");
    let quit_on_close = args.contains("--quit-on-close");
    let close_action = match (no_close, quit_on_close) {
        (true, _) => None,
        (false, true) => Some(CloseAction::Quit),
        (false, false) => Some(CloseAction::ReturnToGallery),
    };

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        location: args.opt_value_from_str("--location")?,
        interval_secs: args.opt_value_from_str("--interval")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        close_action,
        path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    Ok(Some(flags))
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let flags = match parse_flags() {
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

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

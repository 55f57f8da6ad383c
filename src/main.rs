// SPDX-License-Identifier: MPL-2.0
use gallery_lens::app::{self, paths, Flags};
use gallery_lens::ui::theming::ThemeMode;
use std::path::PathBuf;

const HELP: &str = "\
gallery_lens - photo gallery viewer

USAGE:
    gallery_lens [OPTIONS] [GALLERY_DIR]

ARGS:
    <GALLERY_DIR>          Gallery root (defaults to general.gallery_dir, then .)

OPTIONS:
    --category <NAME>      Open this category directly
    --theme <MODE>         light, dark or system
    --config-dir <DIR>     Directory holding settings.toml
    -v, --verbose          More logging (-vv for debug)
    -h, --help             Print this help
";

#[derive(Debug)]
struct Args {
    flags: Flags,
    config_dir: Option<String>,
    verbosity: u8,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let mut verbosity = 0u8;
    if args.contains("-vv") {
        verbosity = 2;
    }
    while args.contains(["-v", "--verbose"]) {
        verbosity = verbosity.saturating_add(1);
    }

    let category: Option<String> = args.opt_value_from_str("--category")?;
    let theme: Option<ThemeMode> = args.opt_value_from_str("--theme")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let gallery_dir: Option<PathBuf> = args.opt_free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring extra arguments: {rest:?}");
    }

    Ok(Some(Args {
        flags: Flags {
            gallery_dir,
            category,
            theme,
        },
        config_dir,
        verbosity,
    }))
}

fn init_logging(verbosity: u8) {
    // 0 (default) = warn, 1 (-v) = info, 2+ (-vv) = debug; RUST_LOG wins when set
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Warn)
        .filter_module("naga", log::LevelFilter::Warn)
        .format_timestamp_millis()
        .init();
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_logging(args.verbosity);
    log::debug!("Command-line args: {args:?}");

    paths::init_cli_overrides(args.config_dir);
    app::run(args.flags)
}

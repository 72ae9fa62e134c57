// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use iced_gallery::config::ReferenceMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedGallery - a lightweight image gallery

USAGE:
    iced_gallery [OPTIONS]

OPTIONS:
    -h, --help                    Print this help and exit
    --lang <ID>                   UI language (e.g. en-US, ja)
    --data-dir <DIR>              Where the gallery and image library are stored
    --config-dir <DIR>            Where settings.toml is read from
    --reference-mode <MODE>       path, session or library

ENVIRONMENT:
    ICED_GALLERY_DATA_DIR         Same as --data-dir
    ICED_GALLERY_CONFIG_DIR       Same as --config-dir
    RUST_LOG                      Log filter (default: iced_gallery=info)
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        reference_mode: args.opt_value_from_str::<_, ReferenceMode>("--reference-mode")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_gallery=info")),
        )
        .with_target(false)
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}

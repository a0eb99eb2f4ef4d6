// SPDX-License-Identifier: MPL-2.0
use avatar_gallery::app::{self, Flags};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
Avatar Gallery

USAGE:
  avatar_gallery [OPTIONS]

OPTIONS:
  -h, --help                 Print help information
      --lang <locale>        Interface language (e.g. en-US, fr)
      --catalog <path>       JSON catalog to show instead of the bundled one
      --config-dir <dir>     Directory holding settings.toml
      --i18n-dir <dir>       Directory with additional .ftl translations
      --diagnostics-out <file>
                             Write a diagnostics report here on exit

ENVIRONMENT:
  AVATAR_GALLERY_CONFIG_DIR  Config directory (overridden by --config-dir)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog: args.opt_value_from_os_str("--catalog", |s| {
            Ok::<PathBuf, std::convert::Infallible>(PathBuf::from(s))
        })?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        diagnostics_out: args.opt_value_from_os_str("--diagnostics-out", |s| {
            Ok::<PathBuf, std::convert::Infallible>(PathBuf::from(s))
        })?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("Error: {error}");
            eprint!("{HELP}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use iced_image_search::app::{self, paths, Flags};
use iced_image_search::infrastructure::credential_from_env;
use std::ffi::OsString;
use std::process::ExitCode;

const HELP: &str = "\
Search photos on Unsplash and browse the results as a thumbnail grid.

USAGE:
  iced_image_search [OPTIONS] [QUERY]

OPTIONS:
  -h, --help               Print this help text
  --lang <LOCALE>          Interface language (e.g. en-US, fr)
  --config-dir <PATH>      Directory holding settings.toml

ARGS:
  <QUERY>                  Search to run as soon as the window opens

ENVIRONMENT:
  UNSPLASH_ACCESS_KEY      Unsplash API access key (required)
";

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let lang: Option<String> = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(err) => return fail(&format!("invalid --lang: {err}")),
    };
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => return fail(&format!("invalid --config-dir: {err}")),
    };
    let initial_query = match initial_query(args.finish()) {
        Ok(query) => query,
        Err(err) => return fail(&err),
    };

    paths::init_cli_override(config_dir);

    let credential = match credential_from_env() {
        Ok(credential) => credential,
        Err(err) => return fail(&err.to_string()),
    };

    let flags = Flags {
        lang,
        initial_query,
        credential,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err.to_string()),
    }
}

fn fail(message: &str) -> ExitCode {
    log::error!("{message}");
    eprintln!("error: {message}");
    ExitCode::FAILURE
}

/// Joins the positional arguments into the startup query.
///
/// Anything left that looks like a long flag was not recognised above.
fn initial_query(free: Vec<OsString>) -> Result<Option<String>, String> {
    let mut words = Vec::with_capacity(free.len());
    for arg in free {
        let arg = arg
            .into_string()
            .map_err(|arg| format!("query is not valid UTF-8: {arg:?}"))?;
        if arg.starts_with("--") {
            return Err(format!("unknown option {arg}, see --help"));
        }
        words.push(arg);
    }

    let query = words.join(" ");
    Ok(Some(query).filter(|q| !q.trim().is_empty()))
}

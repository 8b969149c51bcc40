use std::process::ExitCode;

use glyphstring::prelude::NAME;
use inspector::{Config, Inspector};

mod inspector;

fn main() -> ExitCode {
    env_logger::init();
    match Config::from_env().and_then(|config| Inspector::new(config)?.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("{NAME}: {err}");
            ExitCode::FAILURE
        }
    }
}

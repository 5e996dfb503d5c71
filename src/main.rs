//! # Voxel World Host Entry Point
//!
//! Calls into the library's `run()` with an optional config path.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- world.json
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    let config_path = std::env::args().nth(1);

    match voxel_world::run(config_path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{}", error);
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

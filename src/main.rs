//! Bivariate surface mesh binary executable.
//!
//! Builds the surface mesh described by the command-line arguments and
//! optionally writes the renderer buffers to a JSON file.

use bivariate_mesh::{MeshConfig, run};

fn main() {
    // Initialize logging
    env_logger::init();

    let config = MeshConfig::from_args();
    match run(&config) {
        Ok(_surface) => {
            log::info!("Surface mesh generated successfully");
        }
        Err(e) => {
            log::error!("Surface mesh generation failed: {e}");
            std::process::exit(1);
        }
    }
}

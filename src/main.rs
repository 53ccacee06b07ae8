//! Native viewer binary.
//!
//! ```bash
//! measplot measurements/3/data/            # endpoint on the configured origin
//! measplot https://lab.example.org/measurements/3/data/
//! measplot run.csv
//! measplot --config viewer.yaml
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = measplot::ViewerConfig::from_args(std::env::args().skip(1))?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cfg.log_level.as_str()),
    )
    .init();

    measplot::run_viewer(cfg)?;
    Ok(())
}

// The browser build starts through `measplot::app::start` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}

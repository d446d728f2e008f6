//! Derive the feedback model, write it to a restart file and read it back.
//!
//! ```text
//! cargo run -p feedback --example feedback_tables [config.json]
//! ```
//!
//! Set `RUST_LOG=debug` to see the individual table builds.

use std::error::Error;

use feedback::{DiscreteFeedback, FeedbackConfig};
use restart::{RestartReader, RestartWriter};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use units::{Mass, Time};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => FeedbackConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => FeedbackConfig::default(),
    };

    let model = DiscreteFeedback::new(&config)?;

    let cluster = Mass::from_solar_masses(1.0e5);
    let events = model.expected_events(cluster);
    info!(
        snii = events.popii_snii,
        snia = events.popii_snia,
        popiii_sn = events.popiii_sn,
        "expected events per 1e5 solar masses"
    );

    for mass in [1.0, 8.0, 20.0, 100.0] {
        let m = Mass::from_solar_masses(mass);
        info!(
            mass,
            popii_myr = model.popii_lifetime(m).to_myr(),
            popiii_myr = model.popiii_lifetime(m).to_myr(),
            "stellar lifetime"
        );
    }
    for gyr in [0.1, 1.0, 10.0] {
        info!(
            gyr,
            fraction = model.snia_cumulative_delay(Time::from_gyr(gyr)),
            "SNIa events so far"
        );
    }

    let path = std::env::temp_dir().join("feedback_tables.restart");
    let mut writer = RestartWriter::create(&path)?;
    model.dump(&mut writer)?;
    let values = writer.count();
    writer.finish()?;
    info!(path = %path.display(), values, "wrote restart file");

    let restored = DiscreteFeedback::restore(&mut RestartReader::open(&path)?)?;
    if restored == model {
        info!("restored model is identical");
    } else {
        warn!("restored model differs from the derived one");
    }

    std::fs::remove_file(&path)?;
    Ok(())
}

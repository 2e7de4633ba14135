//! AERO - terminal weather dashboard
//!
//! ```sh
//! # Locate by IP, fall back to San Francisco
//! aero
//!
//! # Pin the position and keep a debug log
//! aero --lat 48.85 --lon 2.35 --log-file aero.log --log-level debug
//! ```

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use aero_core::{Coordinates, Dashboard, DashboardConfig, FixedLocator, NoLocator, Services};
use aero_tui::PollerConfig;
use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Weather dashboard with geolocation and debounced city search
#[derive(Parser, Debug)]
#[command(name = "aero", version)]
#[command(about = "Terminal weather dashboard with geolocation and city search")]
struct Args {
    /// City shown when geolocation is unavailable and after clearing the search
    #[arg(long, default_value = aero_core::config::DEFAULT_CITY)]
    default_city: String,

    /// Latitude to use instead of IP geolocation
    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    lat: Option<f64>,

    /// Longitude to use instead of IP geolocation
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    lon: Option<f64>,

    /// Behave as if no position can be determined
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    no_geolocation: bool,

    /// Quiet period before a typed query is fetched
    #[arg(long, default_value_t = aero_core::config::SEARCH_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Simulated latency of a city fetch
    #[arg(long, default_value_t = aero_core::config::FETCH_LATENCY_MS)]
    latency_ms: u64,

    /// Base URL of the Nominatim reverse geocoder
    #[arg(long, default_value = aero_core::config::NOMINATIM_URL)]
    geocoder_url: String,

    /// IP geolocation endpoint
    #[arg(long, default_value = aero_core::config::IP_LOCATOR_URL)]
    ip_locator_url: String,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `aero_core=trace`
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn config(&self) -> DashboardConfig {
        DashboardConfig {
            default_city: self.default_city.clone(),
            search_debounce: Duration::from_millis(self.debounce_ms),
            fetch_latency: Duration::from_millis(self.latency_ms),
            geocoder_url: self.geocoder_url.clone(),
            ip_locator_url: self.ip_locator_url.clone(),
            ..DashboardConfig::default()
        }
    }

    fn services(&self, config: &DashboardConfig) -> anyhow::Result<Services> {
        let services = Services::network(config).context("building HTTP client")?;
        Ok(match (self.no_geolocation, self.lat, self.lon) {
            (true, _, _) => services.with_locator(NoLocator),
            (false, Some(lat), Some(lon)) => {
                services.with_locator(FixedLocator::at(Coordinates::new(lat, lon)))
            }
            _ => services,
        })
    }
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("invalid log level {:?}", args.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = args.config();
    let services = args.services(&config)?;
    let mut dashboard = Dashboard::new(config, services);

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = aero_tui::run(&mut terminal, &mut dashboard, PollerConfig::default()).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("running dashboard")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["aero"]);
        let config = args.config();
        assert_eq!(config, DashboardConfig::default());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_args_negative_coordinates() {
        let args = Args::parse_from(["aero", "--lat", "-33.87", "--lon", "151.21"]);
        assert_eq!(args.lat, Some(-33.87));
        assert_eq!(args.lon, Some(151.21));
    }

    #[test]
    fn test_args_lat_requires_lon() {
        assert!(Args::try_parse_from(["aero", "--lat", "10"]).is_err());
        assert!(
            Args::try_parse_from(["aero", "--no-geolocation", "--lat", "1", "--lon", "2"]).is_err()
        );
    }

    #[test]
    fn test_args_timings() {
        let args = Args::parse_from(["aero", "--debounce-ms", "300", "--latency-ms", "0"]);
        let config = args.config();
        assert_eq!(config.search_debounce, Duration::from_millis(300));
        assert_eq!(config.fetch_latency, Duration::ZERO);
    }
}

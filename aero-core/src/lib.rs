//! Core of the AERO weather dashboard
//!
//! Everything except drawing lives here, built on the `tui-dispatch`
//! effect store and task manager in a Redux/Elm-style flow:
//!
//! - **Action**: what happened (`SearchInput`, `LocateDidFail`, ...)
//! - **Reducer**: pure `(state, action) -> DispatchResult<Effect>`
//! - **Effect**: async work the reducer asks for (locate, debounce, fetch)
//! - **Dashboard**: owns the store, runs effects as keyed tasks and feeds
//!   their results back as actions
//!
//! # Example
//!
//! ```ignore
//! use aero_core::{Dashboard, DashboardConfig, Services};
//!
//! let config = DashboardConfig::default();
//! let mut dashboard = Dashboard::new(config.clone(), Services::network(&config)?);
//! dashboard.start();
//!
//! while let Some((action, changed)) = dashboard.step().await {
//!     if changed {
//!         render(dashboard.state());
//!     }
//! }
//! ```
//!
//! Results of superseded requests are discarded: every fetch and every
//! geolocation attempt carries a [`RequestId`], and only the latest one
//! may change what is displayed.

pub mod action;
pub mod animate;
pub mod config;
pub mod controller;
pub mod effect;
pub mod error;
pub mod geocode;
pub mod locate;
pub mod reducer;
pub mod snapshot;
pub mod source;
pub mod state;

pub use action::Action;
pub use animate::{AnimatedReadings, COUNT_UP_TICKS};
pub use config::DashboardConfig;
pub use controller::{task, Dashboard, Services};
pub use effect::Effect;
pub use error::{GeocodeError, LocationError};
pub use geocode::{Address, NominatimGeocoder, ReverseGeocoder};
pub use locate::{FixedLocator, IpLocator, Locator, NoLocator};
pub use reducer::reducer;
pub use snapshot::{Alert, Condition, Coordinates, ForecastDay, WeatherSnapshot};
pub use source::{SyntheticSource, WeatherSource};
pub use state::{DashboardState, DisplayState, Phase, RequestId, SearchQuery};

//! Dashboard components
//!
//! Each card is a [`Component`] rendering from borrowed props.
//! [`DashboardView`] composes them and is the only one holding state of its
//! own (the search cursor, through [`SearchBox`] and its `TextInput`).

pub mod alerts;
pub mod banner;
pub mod card;
pub mod dashboard;
pub mod forecast;
pub mod header;
pub mod help_bar;
pub mod hero;
pub mod metrics;
pub mod radar_map;
pub mod search_box;
pub mod skeleton;
pub mod sun_cycle;
pub mod wind_gauge;

pub use tui_dispatch::Component;

pub use alerts::{AlertCard, AlertCardProps};
pub use banner::{Banner, BannerProps};
pub use dashboard::{DashboardView, DashboardViewProps};
pub use forecast::{ForecastList, ForecastListProps};
pub use header::{Header, HeaderProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use hero::{HeroCard, HeroCardProps};
pub use metrics::{MetricGrid, MetricGridProps};
pub use radar_map::{RadarMap, RadarMapProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use skeleton::{Skeleton, SkeletonProps};
pub use sun_cycle::{SunCycle, SunCycleProps};
pub use wind_gauge::{WindGauge, WindGaugeProps};

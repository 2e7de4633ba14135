//! Dashboard controller: store + task manager + collaborators
//!
//! The controller is the single thread of control. View actions are
//! dispatched directly; subscription ticks and finished tasks arrive
//! through an unbounded channel. Everything runs through the reducer one
//! action at a time, and the effects it returns become keyed tasks here.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc;
use tui_dispatch::{
    EffectStoreWithMiddleware, LoggingMiddleware, Subscriptions, TaskKey, TaskManager,
};

use crate::action::Action;
use crate::config::{DashboardConfig, FALLBACK_PLACE};
use crate::effect::Effect;
use crate::error::LocationError;
use crate::geocode::{NominatimGeocoder, ReverseGeocoder};
use crate::locate::{IpLocator, Locator};
use crate::reducer::reducer;
use crate::snapshot::Coordinates;
use crate::source::{SyntheticSource, WeatherSource};
use crate::state::{DashboardState, RequestId};

/// Task keys. Spawning under a key aborts whatever ran under it before.
pub mod task {
    pub const LOCATE: &str = "locate";
    pub const GEOCODE: &str = "geocode";
    /// Debounce timer for the search box
    pub const SEARCH: &str = "search";
    pub const FETCH: &str = "fetch";
}

const TICK: &str = "tick";

/// External collaborators the controller talks to
#[derive(Clone)]
pub struct Services {
    pub locator: Arc<dyn Locator>,
    pub geocoder: Arc<dyn ReverseGeocoder>,
    pub source: Arc<dyn WeatherSource>,
}

impl Services {
    pub fn new(
        locator: impl Locator + 'static,
        geocoder: impl ReverseGeocoder + 'static,
        source: impl WeatherSource + 'static,
    ) -> Self {
        Self {
            locator: Arc::new(locator),
            geocoder: Arc::new(geocoder),
            source: Arc::new(source),
        }
    }

    /// IP geolocation, Nominatim and the synthetic source, all from `config`
    pub fn network(config: &DashboardConfig) -> reqwest::Result<Self> {
        let client = config.http_client()?;
        Ok(Self::new(
            IpLocator::new(client.clone(), config.ip_locator_url.clone()),
            NominatimGeocoder::new(client, config.geocoder_url.clone()),
            SyntheticSource,
        ))
    }

    /// Replace the locator, keeping the other collaborators
    pub fn with_locator(mut self, locator: impl Locator + 'static) -> Self {
        self.locator = Arc::new(locator);
        self
    }
}

type DashboardStore = EffectStoreWithMiddleware<DashboardState, Action, Effect, LoggingMiddleware>;

pub struct Dashboard {
    store: DashboardStore,
    tasks: TaskManager<Action>,
    subscriptions: Subscriptions<Action>,
    services: Services,
    config: DashboardConfig,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl Dashboard {
    pub fn new(config: DashboardConfig, services: Services) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let store = EffectStoreWithMiddleware::new(
            DashboardState::new(&config),
            reducer,
            LoggingMiddleware::new(),
        );
        Self {
            store,
            tasks: TaskManager::new(action_tx.clone()),
            subscriptions: Subscriptions::new(action_tx.clone()),
            services,
            config,
            action_tx,
            action_rx,
        }
    }

    pub fn state(&self) -> &DashboardState {
        self.store.state()
    }

    pub fn tasks(&self) -> &TaskManager<Action> {
        &self.tasks
    }

    /// Queue an action for the next [`next_action`](Self::next_action)
    fn enqueue(&self, action: Action) {
        // The receiver lives in self, so this cannot fail
        let _ = self.action_tx.send(action);
    }

    /// Start the animation tick and kick off the initial geolocation
    pub fn start(&mut self) -> bool {
        tracing::info!(default_city = %self.config.default_city, "Dashboard starting");
        self.subscriptions.interval(TICK, self.config.tick, || Action::Tick);
        self.dispatch(Action::LocateStart)
    }

    /// Run one action through the reducer and start the tasks it asks for.
    /// Returns whether the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.handle_effect(effect);
        }
        result.changed
    }

    /// Wait for the next queued action
    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    /// Wait for the next action and dispatch it
    pub async fn step(&mut self) -> Option<(Action, bool)> {
        let action = self.next_action().await?;
        let changed = self.dispatch(action.clone());
        Some((action, changed))
    }

    /// Stop ticking and abort every in-flight task
    pub fn shutdown(&mut self) {
        tracing::info!("Dashboard shutting down");
        self.subscriptions.cancel_all();
        self.tasks.cancel_all();
    }

    fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Locate { request } => self.locate(request),
            Effect::ResolvePlace { request, coords } => self.resolve_place(request, coords),
            Effect::ScheduleSearch { query } => {
                self.tasks
                    .debounce(task::SEARCH, self.config.search_debounce, async move {
                        Action::SearchDidSettle(query)
                    });
            }
            Effect::CancelSearch => self.tasks.cancel(&TaskKey::new(task::SEARCH)),
            Effect::FetchCity { request, city } => self.fetch_city(request, city),
        }
    }

    fn locate(&mut self, request: RequestId) {
        if !self.services.locator.is_supported() {
            self.enqueue(Action::LocateDidFail {
                request,
                error: LocationError::Unsupported,
            });
            return;
        }

        let locator = Arc::clone(&self.services.locator);
        self.tasks.spawn(task::LOCATE, async move {
            match locator.locate().await {
                Ok(coords) => Action::LocateDidResolve { request, coords },
                Err(error) => Action::LocateDidFail { request, error },
            }
        });
    }

    fn resolve_place(&mut self, request: RequestId, coords: Coordinates) {
        let geocoder = Arc::clone(&self.services.geocoder);
        let source = Arc::clone(&self.services.source);
        self.tasks.spawn(task::GEOCODE, async move {
            let place = match geocoder.reverse(coords).await {
                Ok(address) => address.place_name().to_string(),
                Err(e) => {
                    tracing::warn!(error = %e, %coords, "Reverse geocoding failed");
                    FALLBACK_PLACE.to_string()
                }
            };
            Action::WeatherDidLoad {
                request,
                snapshot: Arc::new(source.snapshot(&place).at(coords)),
                fetched_at: Local::now(),
            }
        });
    }

    fn fetch_city(&mut self, request: RequestId, city: String) {
        let source = Arc::clone(&self.services.source);
        let latency = self.config.fetch_latency;
        self.tasks.spawn(task::FETCH, async move {
            tokio::time::sleep(latency).await;
            Action::WeatherDidLoad {
                request,
                snapshot: Arc::new(source.snapshot(&city)),
                fetched_at: Local::now(),
            }
        });
    }
}

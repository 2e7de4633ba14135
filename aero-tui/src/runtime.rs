//! Main loop: terminal input in, actions through the dashboard, frames out

use std::io;
use std::ops::ControlFlow;

use aero_core::{Action, Dashboard};
use chrono::Local;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tui_dispatch::{process_raw_event, spawn_event_poller, EventKind, PollerConfig, RawEvent};

use crate::components::{Component, DashboardView, DashboardViewProps};

/// Run the dashboard until a `Quit` action arrives.
///
/// Input is polled on a background task. Each event is mapped by the view
/// and its actions are reduced before the next event is looked at, so a
/// burst of keys always sees the state the previous key produced. Task
/// results and ticks come through the dashboard's queue. A frame is drawn
/// only after the state changed.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    dashboard: &mut Dashboard,
    poller: PollerConfig,
) -> io::Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
    let cancel_token = CancellationToken::new();
    let _poller = spawn_event_poller(
        event_tx,
        poller.poll_timeout,
        poller.loop_sleep,
        cancel_token.clone(),
    );

    let mut view = DashboardView::new();
    dashboard.start();
    let mut should_render = true;

    info!("Entering main loop");
    let result = loop {
        if should_render {
            let state = dashboard.state();
            let now = Local::now();
            if let Err(err) = terminal.draw(|frame| {
                let area = frame.area();
                view.render(frame, area, DashboardViewProps { state, now });
            }) {
                break Err(err);
            }
            should_render = false;
        }

        tokio::select! {
            Some(raw) = event_rx.recv() => {
                match apply_event(&mut view, dashboard, &process_raw_event(raw)) {
                    ControlFlow::Break(()) => break Ok(()),
                    ControlFlow::Continue(changed) => should_render |= changed,
                }
            }

            Some(action) = dashboard.next_action() => {
                if matches!(action, Action::Quit) {
                    debug!("Quit requested");
                    break Ok(());
                }
                should_render |= dashboard.dispatch(action);
            }

            else => break Ok(()),
        }
    };

    cancel_token.cancel();
    dashboard.shutdown();
    info!("Main loop finished");
    result
}

/// Map one input event through the view and reduce what it produced.
///
/// Breaks on `Quit`; otherwise continues with whether the state changed.
fn apply_event(
    view: &mut DashboardView,
    dashboard: &mut Dashboard,
    event: &EventKind,
) -> ControlFlow<(), bool> {
    let props = DashboardViewProps {
        state: dashboard.state(),
        now: Local::now(),
    };
    let actions: Vec<Action> = view.handle_event(event, props).into_iter().collect();

    let mut changed = false;
    for action in actions {
        if matches!(action, Action::Quit) {
            debug!("Quit requested");
            return ControlFlow::Break(());
        }
        changed |= dashboard.dispatch(action);
    }
    ControlFlow::Continue(changed)
}

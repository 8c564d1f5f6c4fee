//! # TUI Run Loop
//!
//! The ratatui-specific layer. Bootstraps the terminal, loads the project
//! list once, then ticks at ~60 Hz: one input-processing step and one full
//! redraw per tick, until the state machine reaches `Stopped`.
//!
//! ## Threads
//!
//! - The control thread runs [`run_loop`] and is the only one that touches
//!   the [`App`] state.
//! - A producer thread blocks on the terminal event source and hands each
//!   event over a zero-capacity rendezvous channel. The channel receive is
//!   the single blocking point inside a tick.
//! - The `ctrlc` handler thread only writes the shared [`Shutdown`] flag.
//!   The first interrupt stops the loop cooperatively at the next tick; a
//!   second interrupt restores the terminal and exits immediately.

mod event;
mod ui;

pub use event::{CrosstermEvents, EventSource, TuiEvent, translate};

use log::{debug, info, warn};
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use std::thread;
use std::time::{Duration, Instant};

use ratatui::{DefaultTerminal, Terminal, backend::Backend};

use crate::api::TrackerClient;
use crate::core::action::{Action, update};
use crate::core::state::{App, Phase};

/// Tick period of the steady-state loop (~60 Hz).
pub const TICK_PERIOD: Duration = Duration::from_millis(1000 / 60);

/// Exit code when a second interrupt forces teardown.
const FORCED_EXIT_CODE: i32 = 130;

/// Shared cancellation flag, written by the interrupt handler and read by
/// the run loop. Counts interrupts so the teardown path can tell a first
/// (cooperative) interrupt from a repeated (forced) one.
#[derive(Clone, Debug, Default)]
pub struct Shutdown(Arc<AtomicU8>);

impl Shutdown {
    pub fn new() -> Self {
        Self(Arc::new(AtomicU8::new(0)))
    }

    /// Records one interrupt and returns how many have been seen.
    pub fn request(&self) -> u8 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst) > 0
    }
}

/// Paces the steady-state loop. Injectable so tests can drive individual
/// ticks without wall-clock delays.
pub trait Ticker {
    /// Blocks until the next tick is due.
    fn wait(&mut self);
}

/// Wall-clock ticker. Each deadline advances by a fixed period from the
/// previous deadline, not from the wake-up time, so the cadence does not
/// drift under load.
pub struct IntervalTicker {
    period: Duration,
    deadline: Instant,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: Instant::now() + period,
        }
    }
}

impl Ticker for IntervalTicker {
    fn wait(&mut self) {
        if let Some(remaining) = self.deadline.checked_duration_since(Instant::now()) {
            thread::sleep(remaining);
        }
        self.deadline += self.period;
    }
}

/// Orchestrates all of the moving pieces: interrupt handler, terminal,
/// initial sync, event producer, steady-state loop, and teardown.
///
/// Terminal-backend initialization failure is the one unrecoverable
/// startup error; `ratatui::init` panics on it before any UI is shown.
pub fn run(mut client: TrackerClient) -> std::io::Result<ExitCode> {
    let shutdown = Shutdown::new();
    install_interrupt_handler(shutdown.clone());

    let mut terminal = ratatui::init();
    let mut app = App::new();

    let result = run_app(&mut terminal, &mut app, &mut client, &shutdown);

    ratatui::restore();
    result?;

    // Surface a recorded error only after the terminal is back to normal.
    if let Some(message) = app.error {
        println!("{message}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn install_interrupt_handler(shutdown: Shutdown) {
    let result = ctrlc::set_handler(move || {
        if shutdown.request() > 1 {
            // Second interrupt: skip the cooperative path entirely.
            ratatui::restore();
            std::process::exit(FORCED_EXIT_CODE);
        }
        info!("Interrupt received, stopping at next tick");
    });
    if let Err(err) = result {
        warn!("Could not install interrupt handler: {err}");
    }
}

/// Startup and steady state, with the terminal already initialized.
/// Split out of [`run`] so teardown in the caller happens on every path.
fn run_app(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    client: &mut TrackerClient,
    shutdown: &Shutdown,
) -> std::io::Result<()> {
    app.phase = Phase::LoadingData;
    terminal.draw(|frame| ui::draw(frame, app))?;

    match client.sync() {
        Ok(()) => {
            info!("Initial sync complete: {} projects", client.projects().len());
            app.load_projects(client.projects().to_vec());
        }
        // A failed sync stops the app with the error recorded instead of
        // presenting an empty list as if it were real.
        Err(err) => update(app, Action::Fail(err.to_string())),
    }
    terminal.draw(|frame| ui::draw(frame, app))?;

    let (tx, rx) = sync_channel(0);
    thread::spawn(move || produce_events(CrosstermEvents, tx));

    let mut ticker = IntervalTicker::new(TICK_PERIOD);
    run_loop(terminal, app, &rx, shutdown, &mut ticker)
}

/// Forwards terminal events into the rendezvous channel until the
/// receiver is dropped, which happens once the run loop has exited.
fn produce_events(mut source: impl EventSource, tx: SyncSender<TuiEvent>) {
    loop {
        let event = source.next();
        debug!("Event: {event:?}");
        if tx.send(event).is_err() {
            return;
        }
    }
}

/// The steady-state scheduler: one input-processing step and one full
/// redraw per tick. Exits at the top of the first tick that observes
/// `Stopped`, doing no further work.
pub fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &Receiver<TuiEvent>,
    shutdown: &Shutdown,
    ticker: &mut dyn Ticker,
) -> std::io::Result<()> {
    loop {
        ticker.wait();
        if !tick(terminal, app, events, shutdown)? {
            break;
        }
    }
    info!("Run loop stopped");
    Ok(())
}

/// One logical tick. Folds the shutdown flag into the phase, then either
/// reports that the loop should stop (`false`, before doing any work) or
/// processes one input and redraws.
pub fn tick<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &Receiver<TuiEvent>,
    shutdown: &Shutdown,
) -> std::io::Result<bool> {
    if shutdown.is_requested() {
        app.phase = Phase::Stopped;
    }
    if app.phase == Phase::Stopped {
        return Ok(false);
    }
    if app.phase == Phase::Ready {
        app.phase = Phase::Running;
    }
    process_input(app, events);
    terminal.draw(|frame| ui::draw(frame, app))?;
    Ok(true)
}

/// Waits for exactly one event from the producer and applies it to the
/// state. This is the only blocking point in a tick; the producer polls
/// the terminal continuously, so an event is normally already waiting.
pub fn process_input(app: &mut App, events: &Receiver<TuiEvent>) {
    let event = match events.recv() {
        Ok(event) => event,
        Err(_) => {
            // Channel closed: the producer is gone, stop the application.
            app.phase = Phase::Stopped;
            return;
        }
    };

    let action = match event {
        TuiEvent::Quit => Action::Quit,
        TuiEvent::NextProject => Action::NextProject,
        TuiEvent::PrevProject => Action::PrevProject,
        TuiEvent::Fail(message) => Action::Fail(message),
        // Every tick redraws at the current size, nothing to update.
        TuiEvent::Resize => return,
    };
    update(app, action);
}

//! Terminal host for the game engine.
//!
//! Key presses are read on a plain thread and forwarded as intents into the
//! same channel the gravity timers tick into, so the game loop sees one
//! event at a time. Set `VR_TETRIS_LOG_PATH` to get a trace log; stdout
//! belongs to the renderer.

use std::fs::File;
use std::sync::Mutex;
use std::thread;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vr_tetris::engine::{EngineConfig, Event, GameLoop, TokioScheduler};
use vr_tetris::input::{handle_key_event, should_quit};
use vr_tetris::term::{GameView, TerminalRenderer, Viewport};

const DEFAULT_LOG_FILTER: &str = "vr_tetris=info,vr_tetris_core=info,vr_tetris_engine=info";

/// Things only the host cares about
enum HostSignal {
    Quit,
    Resized,
}

fn main() -> Result<()> {
    init_tracing()?;

    let config = EngineConfig::from_env();
    let session = config.build_session().context("invalid engine configuration")?;
    info!(rows = config.rows, columns = config.columns, "starting terminal host");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let (signals_tx, signals_rx) = mpsc::unbounded_channel();
    let game = GameLoop::new(
        session,
        TokioScheduler::new(events_tx.clone()),
        config.tick_interval,
    )?;

    let mut term = TerminalRenderer::new();
    term.enter()?;
    spawn_key_reader(events_tx, signals_tx);
    let result = runtime.block_on(run(&mut term, game, events_rx, signals_rx));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing() -> Result<()> {
    let Ok(path) = std::env::var("VR_TETRIS_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("cannot create log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn spawn_key_reader(events: UnboundedSender<Event>, signals: UnboundedSender<HostSignal>) {
    thread::spawn(move || loop {
        let read = match event::read() {
            Ok(read) => read,
            Err(err) => {
                warn!(%err, "terminal input failed");
                let _ = signals.send(HostSignal::Quit);
                return;
            }
        };
        let delivered = match read {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    let _ = signals.send(HostSignal::Quit);
                    return;
                }
                match handle_key_event(key) {
                    Some(intent) => events.send(intent.into()).is_ok(),
                    None => true,
                }
            }
            TermEvent::Resize(..) => signals.send(HostSignal::Resized).is_ok(),
            _ => true,
        };
        if !delivered {
            return;
        }
    });
}

async fn run(
    term: &mut TerminalRenderer,
    mut game: GameLoop<TokioScheduler>,
    mut events: UnboundedReceiver<Event>,
    mut signals: UnboundedReceiver<HostSignal>,
) -> Result<()> {
    let view = GameView::new();
    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(view.render(&game.snapshot(), Viewport::new(w, h)))?;

        tokio::select! {
            signal = signals.recv() => match signal {
                Some(HostSignal::Resized) => term.invalidate(),
                Some(HostSignal::Quit) | None => break,
            },
            event = events.recv() => match event {
                Some(event) => {
                    game.handle(event);
                }
                None => break,
            },
        }
    }
    info!(score = game.session().score(), "host exiting");
    Ok(())
}

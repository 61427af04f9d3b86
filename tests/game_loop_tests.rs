//! Game loop timer handling with the manual and tokio schedulers

use std::time::Duration;

use vr_tetris::core::{GameSession, Phase, PieceGenerator, ScoreOnStop, TickOutcome};
use vr_tetris::engine::{Event, GameLoop, ManualScheduler, TokioScheduler};
use vr_tetris::types::{Intent, PieceKind};

const SECOND: Duration = Duration::from_millis(1000);

fn manual_loop(kinds: &[PieceKind]) -> (GameLoop<ManualScheduler>, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let generator = PieceGenerator::scripted(kinds.iter().copied()).unwrap();
    let session = GameSession::new(20, 10, generator).unwrap();
    let game = GameLoop::new(session, scheduler.clone(), SECOND).unwrap();
    (game, scheduler)
}

fn run_for(game: &mut GameLoop<ManualScheduler>, scheduler: &ManualScheduler, time: Duration) {
    for event in scheduler.advance(time) {
        game.handle(event);
    }
}

#[test]
fn tick_from_previous_game_is_ignored() {
    let (mut game, scheduler) = manual_loop(&[PieceKind::O]);
    game.dispatch(Intent::Start);
    let old_timer = game.active_timer().unwrap();

    game.dispatch(Intent::Stop);
    game.dispatch(Intent::Start);
    let new_timer = game.active_timer().unwrap();
    assert_ne!(old_timer, new_timer);
    assert_eq!(scheduler.armed(), vec![new_timer]);

    // a tick already queued by the cancelled timer
    assert_eq!(game.on_tick(old_timer), TickOutcome::Ignored);
    assert!(!game.handle(Event::Tick(old_timer)));
    assert_eq!(game.session().player().position.y, 0);

    assert_eq!(game.on_tick(new_timer), TickOutcome::Fell);
}

#[test]
fn restart_never_doubles_gravity() {
    let (mut game, scheduler) = manual_loop(&[PieceKind::I]);
    game.dispatch(Intent::Start);
    run_for(&mut game, &scheduler, SECOND * 2);
    game.dispatch(Intent::Stop);
    game.dispatch(Intent::Start);

    run_for(&mut game, &scheduler, SECOND * 3);
    assert_eq!(game.session().player().position.y, 3);
    assert_eq!(scheduler.armed().len(), 1);
}

#[test]
fn start_while_running_keeps_the_timer() {
    let (mut game, scheduler) = manual_loop(&[PieceKind::T]);
    game.dispatch(Intent::Start);
    let timer = game.active_timer();
    assert!(!game.dispatch(Intent::Start));
    assert_eq!(game.active_timer(), timer);
    assert_eq!(scheduler.armed().len(), 1);
}

#[test]
fn game_over_cancels_the_timer() {
    let (mut game, scheduler) = manual_loop(&[PieceKind::O]);
    game.dispatch(Intent::Start);

    for _ in 0..400 {
        if game.session().phase() == Phase::GameOver {
            break;
        }
        run_for(&mut game, &scheduler, SECOND);
    }

    assert_eq!(game.session().phase(), Phase::GameOver);
    assert!(scheduler.armed().is_empty());
    assert_eq!(game.active_timer(), None);
    assert!(!game.dispatch(Intent::MoveLeft));

    // a fresh start arms gravity again
    assert!(game.dispatch(Intent::Start));
    assert_eq!(scheduler.armed().len(), 1);
}

#[test]
fn stop_with_discard_clears_score() {
    let (mut game, scheduler) = manual_loop(&[PieceKind::O]);
    game.dispatch(Intent::Start);
    run_for(&mut game, &scheduler, SECOND);
    assert!(game.stop(ScoreOnStop::Discard));
    assert_eq!(game.session().score(), 0);
    assert!(scheduler.armed().is_empty());
    assert!(!game.stop(ScoreOnStop::Keep));
}

#[tokio::test(start_paused = true)]
async fn tokio_scheduler_drives_gravity() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let generator = PieceGenerator::scripted([PieceKind::O]).unwrap();
    let session = GameSession::new(20, 10, generator).unwrap();
    let mut game = GameLoop::new(session, TokioScheduler::new(tx.clone()), SECOND).unwrap();

    tx.send(Intent::Start.into()).unwrap();
    while game.session().player().position.y < 3 {
        let event = rx.recv().await.unwrap();
        game.handle(event);
    }
    assert_eq!(game.session().player().position.y, 3);

    game.dispatch(Intent::Stop);
    let quiet = tokio::time::timeout(SECOND * 5, rx.recv()).await;
    assert!(quiet.is_err(), "gravity kept ticking after stop");
}

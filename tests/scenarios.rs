use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use radial_timer::prelude::*;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn app_with(duration: &str) -> App {
    App::new(&Config {
        duration: duration.to_string(),
        ..Config::default()
    })
}

fn tick(app: &mut App, n: usize) -> Vec<u8> {
    (0..n)
        .map(|_| {
            let msg = app.countdown.tick_msg();
            std::mem::drop(app.update(Box::new(msg)));
            app.countdown.progress()
        })
        .collect()
}

fn settle(app: &mut App) {
    while app.countdown.radial().is_animating() {
        let frame = app.countdown.radial().frame_msg();
        std::mem::drop(app.update(Box::new(frame)));
    }
}

#[test]
fn one_minute_is_half_done_after_thirty_seconds() {
    let mut app = app_with("01:00");
    assert!(app.update(key(KeyCode::Enter)).is_some());

    tick(&mut app, 30);
    settle(&mut app);

    assert_eq!(app.countdown.progress(), 50);
    assert_eq!(app.countdown.radial().progress(), 50);
    let view = lipgloss::strip_ansi(&app.view());
    assert!(view.contains(" 50%"));
}

#[test]
fn empty_input_creates_no_session() {
    let mut app = app_with("");
    std::mem::drop(app.update(key(KeyCode::Enter)));

    assert_eq!(app.notice(), Some(NoticeKind::InputRequired));
    assert!(app.countdown.session().is_none());
    assert!(!app.countdown.running());
}

#[test]
fn five_seconds_runs_to_completion_then_resets() {
    let mut app = app_with("00:05");
    std::mem::drop(app.update(key(KeyCode::Enter)));

    let seen = tick(&mut app, 5);
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(seen, vec![20, 40, 60, 80, 100]);
    assert!(!app.countdown.running());

    settle(&mut app);
    assert_eq!(app.countdown.radial().progress(), 100);

    let finished = CountdownFinishedMsg {
        id: app.countdown.id(),
    };
    std::mem::drop(app.update(Box::new(finished)));
    assert_eq!(app.notice(), Some(NoticeKind::Finished));

    let reset = app.countdown.reset_msg();
    std::mem::drop(app.update(Box::new(reset)));
    settle(&mut app);
    assert_eq!(app.countdown.progress(), 0);
    assert_eq!(app.countdown.radial().progress(), 0);

    std::mem::drop(app.update(key(KeyCode::Enter)));
    assert_eq!(app.notice(), None);
}

#[test]
fn double_start_does_not_double_tick() {
    let mut app = app_with("01:40");
    std::mem::drop(app.update(key(KeyCode::Enter)));
    let first_run = app.countdown.tick_msg();

    assert!(app.update(key(KeyCode::Enter)).is_none());
    // Ticks of the first run are still the ones accepted
    assert!(app.update(Box::new(first_run)).is_some());
    assert_eq!(app.countdown.progress(), 1);
}

#[test]
fn stop_then_start_resumes() {
    let mut app = app_with("01:40");
    std::mem::drop(app.update(key(KeyCode::Enter)));
    tick(&mut app, 25);

    std::mem::drop(app.update(key(KeyCode::Char('p'))));
    let after_stop = app.countdown.tick_msg();
    assert!(app.update(Box::new(after_stop)).is_none());
    assert_eq!(app.countdown.progress(), 25);

    std::mem::drop(app.update(key(KeyCode::Enter)));
    tick(&mut app, 1);
    assert_eq!(app.countdown.progress(), 26);
}

#[test]
fn cancel_always_returns_to_zero() {
    let mut app = app_with("00:30");
    std::mem::drop(app.update(key(KeyCode::Enter)));
    tick(&mut app, 10);
    std::mem::drop(app.update(key(KeyCode::Char('c'))));
    settle(&mut app);

    assert_eq!(app.countdown.progress(), 0);
    assert_eq!(app.countdown.radial().progress(), 0);
    assert!(!app.countdown.running());

    // A fresh start begins from zero, not from where the cancel happened
    std::mem::drop(app.update(key(KeyCode::Enter)));
    tick(&mut app, 3);
    assert_eq!(app.countdown.progress(), 10);
}

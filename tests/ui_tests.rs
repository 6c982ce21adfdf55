// Terminal front end tests: key handling and a render smoke test

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mathdrill::drill::session::WELCOME_PROMPT;
use mathdrill::drill::{
    Answer, DrillConfig, ManualClock, Operation, RandSource, SessionController, SessionPhase,
};
use mathdrill::ui::App;
use ratatui::{backend::TestBackend, Terminal};

fn new_app() -> (App<ManualClock, RandSource>, ManualClock) {
    let clock = ManualClock::new();
    let session = SessionController::new(
        mathdrill::ui::Screen::new(),
        clock.clone(),
        RandSource::seeded(11),
        DrillConfig::default(),
    );
    (App::new(session), clock)
}

fn press(app: &mut App<ManualClock, RandSource>, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<ManualClock, RandSource>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let symbols: Vec<&str> = buffer.content.iter().map(|cell| cell.symbol()).collect();
    symbols
        .chunks(width)
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_mode_keys_select_operations() {
    let (mut app, _clock) = new_app();
    assert_eq!(app.session.phase(), SessionPhase::NotStarted);

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.session.operation(), Some(Operation::Multiply));
    assert_eq!(app.session.phase(), SessionPhase::Running);

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.session.operation(), Some(Operation::Divide));
    assert_eq!(app.session.stats().total(), 2);
}

#[test]
fn test_enter_submits_typed_answer() {
    let (mut app, clock) = new_app();
    press(&mut app, KeyCode::Char('a'));

    let expected = match app.session.current_question().map(|q| q.answer()) {
        Some(Answer::Integer(n)) => n,
        other => panic!("expected an integer answer, got {:?}", other),
    };
    type_text(&mut app, &expected.to_string());
    assert_eq!(app.screen().answer, expected.to_string());

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.session.stats().correct(), 1);
    assert_eq!(app.screen().correct_ratio, "1/1");

    clock.advance_ms(250);
    app.session.poll();
    assert!(app.screen().answer.is_empty());
    assert_eq!(app.session.stats().total(), 2);
}

#[test]
fn test_backspace_edits_answer() {
    let (mut app, _clock) = new_app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "12");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.screen().answer, "1");
}

#[test]
fn test_malformed_answer_shows_invalid_message() {
    let (mut app, _clock) = new_app();
    press(&mut app, KeyCode::Char('s'));
    type_text(&mut app, "1..2");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen().feedback, "Please enter a valid number");
    assert_eq!(app.session.stats().correct(), 0);
    assert_eq!(app.session.stats().total(), 1);
    assert!(!app.session.has_pending_advance());
}

#[test]
fn test_space_toggles_pause() {
    let (mut app, _clock) = new_app();
    assert!(!app.screen().answer_focused);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.session.phase(), SessionPhase::NotStarted);
    assert_eq!(app.status_message, "Nothing to pause yet");
}

#[test]
fn test_pause_after_start() {
    let (mut app, _clock) = new_app();
    press(&mut app, KeyCode::Char('d'));
    assert!(app.screen().answer_focused);

    app.toggle_pause();
    assert_eq!(app.session.phase(), SessionPhase::Paused);
    assert_eq!(app.screen().pause_label, "Resume");
    assert!(!app.screen().answer_focused);

    app.toggle_pause();
    assert_eq!(app.session.phase(), SessionPhase::Running);
    assert_eq!(app.screen().pause_label, "Pause");
    assert!(app.screen().answer_focused);
}

#[test]
fn test_quit_keys() {
    let (mut app, _clock) = new_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);

    let (mut app, _clock) = new_app();
    app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn test_render_smoke() {
    let (mut app, _clock) = new_app();
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();

    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains(WELCOME_PROMPT), "{}", text);
    assert!(text.contains("0/0"));
    assert!(text.contains("0.0 Q/min"));
    assert!(text.contains("READY"));

    press(&mut app, KeyCode::Char('a'));
    terminal.draw(|f| app.render(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Addition"), "{}", text);
    assert!(text.contains("= ?"), "{}", text);
    assert!(text.contains("RUNNING"), "{}", text);
}

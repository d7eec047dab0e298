//! Screen navigation driven end to end through a scripted surface.

use tui_snake::term::{HeadlessSurface, Surface, Viewport};
use tui_snake::types::Key;
use tui_snake::ui::{
    GameLoop, Redirection, ScreenArgs, ScreenId, ScreenRegistry, Settings, Transition,
};

fn seeded_settings() -> Settings {
    Settings::default().with_seed(1234)
}

#[test]
fn exit_from_the_menu_tears_down_once() {
    let settings = Settings::default();
    let surface = HeadlessSurface::new(80, 24).with_keys([Key::Down, Key::Enter, Key::Enter]);
    let mut game = GameLoop::new(surface, &settings, ScreenRegistry::standard()).unwrap();

    game.run().unwrap();

    let surface = game.into_surface();
    assert_eq!(surface.teardowns(), 1);
    assert_eq!(surface.pending_keys(), 0);
}

#[test]
fn declining_exit_returns_to_the_menu() {
    let settings = Settings::default();
    let surface = HeadlessSurface::new(80, 24).with_keys([
        Key::Down,
        Key::Enter,
        Key::Right,
        Key::Enter,
    ]);
    let mut game = GameLoop::new(surface, &settings, ScreenRegistry::standard()).unwrap();

    for _ in 0..2 {
        game.step().unwrap();
    }
    assert_eq!(game.active_id(), ScreenId::Start);
    assert_eq!(game.surface().teardowns(), 0);
    assert_eq!(game.surface().pending_keys(), 0);
}

#[test]
fn play_is_sized_from_the_forwarded_viewport() {
    let settings = seeded_settings();
    let registry = ScreenRegistry::standard();
    let redirection = Redirection::to(ScreenId::Play)
        .with_args(ScreenArgs::default().with_viewport(Viewport::new(120, 40)));

    let Transition::Enter(mut screen) = registry
        .resolve(redirection, ScreenArgs::default(), &settings)
        .unwrap()
    else {
        panic!("play resolved to exit");
    };
    assert_eq!(screen.id(), ScreenId::Play);

    let mut surface = HeadlessSurface::new(120, 40);
    surface.clear();
    screen.render(&mut surface).unwrap();
    // 120 columns: arena spans columns 30..=90.
    assert_eq!(surface.frame().get(30, 5).unwrap().ch, '┌');
    assert_eq!(surface.frame().get(90, 5).unwrap().ch, '┐');
}

#[test]
fn caller_viewport_fills_in_for_play() {
    let settings = seeded_settings();
    let registry = ScreenRegistry::standard();
    let caller = ScreenArgs::default().with_viewport(Viewport::new(80, 24));
    let t = registry
        .resolve(Redirection::to(ScreenId::Play), caller, &settings)
        .unwrap();
    assert!(matches!(t, Transition::Enter(ref s) if s.id() == ScreenId::Play));
}

#[test]
fn a_full_session_from_menu_to_exit() {
    let settings = seeded_settings();
    let mut surface = HeadlessSurface::new(80, 24);
    // Start -> Play.
    surface.push_key(Key::Enter);
    // Let the snake run upward into the wall.
    for _ in 0..20 {
        surface.push_idle();
    }
    // "Try again?" yes -> Start, then Exit -> confirm.
    for key in [Key::Enter, Key::Down, Key::Enter, Key::Enter] {
        surface.push_key(key);
    }

    let mut game = GameLoop::new(surface, &settings, ScreenRegistry::standard()).unwrap();
    game.run().unwrap();

    let surface = game.into_surface();
    assert_eq!(surface.teardowns(), 1);
    assert_eq!(surface.pending_keys(), 0);
    // Every screen change resets the input wait.
    assert!(surface.timeouts().iter().filter(|&&ms| ms == settings.base_tick_ms).count() >= 2);
}

#[test]
fn death_without_retry_exits() {
    let settings = seeded_settings();
    let mut surface = HeadlessSurface::new(80, 24);
    surface.push_key(Key::Enter);
    for _ in 0..20 {
        surface.push_idle();
    }
    surface.push_key(Key::Right);
    surface.push_key(Key::Enter);

    let mut game = GameLoop::new(surface, &settings, ScreenRegistry::standard()).unwrap();
    game.run().unwrap();
    assert_eq!(game.surface().teardowns(), 1);
    assert!(game
        .surface()
        .last_frame()
        .contains("Would you like to try again ?"));
}

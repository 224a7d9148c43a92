// SPDX-License-Identifier: MPL-2.0
use iced::event::Event;
use iced::keyboard::{self, key::Named, Key, Location as KeyLocation, Modifiers};
use iced_gallery::config::{self, Config, SortOrder};
use iced_gallery::gallery::Gallery;
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::location::{Location, Router};
use iced_gallery::ui::slideshow::{Direction, Effect, Message, SlideInterval, State};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn gallery(len: usize) -> Gallery {
    Gallery::new((0..len).map(|i| PathBuf::from(format!("{i}.jpg"))).collect())
}

fn open_at(gallery: &Gallery, index: usize) -> (State, Router) {
    let mut router = Router::new(Location::Photo(index));
    let state = State::open(gallery, &mut router, SlideInterval::default())
        .expect("gallery is not empty");
    (state, router)
}

fn arrow(named: Named) -> Message {
    Message::RawEvent(Event::Keyboard(keyboard::Event::KeyPressed {
        key: Key::Named(named),
        modified_key: Key::Named(named),
        physical_key: keyboard::key::Physical::Unidentified(
            keyboard::key::NativeCode::Unidentified,
        ),
        location: KeyLocation::Standard,
        modifiers: Modifiers::default(),
        text: None,
        repeat: false,
    }))
}

#[test]
fn auto_advance_walks_forward_then_wraps_backward() {
    let images = gallery(3);
    let (mut state, mut router) = open_at(&images, 0);

    state.handle(Message::AutoAdvance, &mut router);
    assert_eq!(state.index(), 1);
    assert_eq!(state.direction(), Direction::Forward);
    assert_eq!(router.current().href(), "/p/1?photoId=1");

    state.handle(Message::AutoAdvance, &mut router);
    state.handle(Message::AutoAdvance, &mut router);
    assert_eq!(state.index(), 0);
    assert_eq!(state.direction(), Direction::Backward);
    assert_eq!(router.current(), Location::Photo(0));
}

#[test]
fn left_arrow_is_guarded_at_first_photo() {
    let images = gallery(3);
    let (mut state, mut router) = open_at(&images, 1);

    state.handle(arrow(Named::ArrowLeft), &mut router);
    assert_eq!(state.index(), 0);
    assert_eq!(state.direction(), Direction::Backward);

    state.handle(arrow(Named::ArrowLeft), &mut router);
    assert_eq!(state.index(), 0);
}

#[test]
fn right_arrow_is_guarded_at_last_photo() {
    let images = gallery(2);
    let (mut state, mut router) = open_at(&images, 0);

    state.handle(arrow(Named::ArrowRight), &mut router);
    state.handle(arrow(Named::ArrowRight), &mut router);
    assert_eq!(state.index(), 1);
    assert_eq!(router.current(), Location::Photo(1));
}

#[test]
fn photo_changes_do_not_grow_history() {
    let images = gallery(5);
    let mut router = Router::default();
    router.push(Location::Photo(0));
    let mut state =
        State::open(&images, &mut router, SlideInterval::default()).expect("gallery is not empty");

    for index in [3, 1, 4, 2] {
        state.handle(Message::ChangePhoto(index), &mut router);
    }
    assert_eq!(router.history_len(), 2);
    assert_eq!(router.current(), Location::Photo(2));
}

#[test]
fn countdown_decrements_then_resets() {
    let images = gallery(3);
    let (mut state, mut router) = open_at(&images, 0);
    assert_eq!(state.countdown(), 5);

    let mut seen = Vec::new();
    for _ in 0..7 {
        state.handle(Message::CountdownTick, &mut router);
        seen.push(state.countdown());
    }
    assert_eq!(seen, vec![4, 3, 2, 1, 0, 5, 4]);
}

#[test]
fn close_reverts_address_and_reports_once() {
    let images = gallery(3);
    let (mut state, mut router) = open_at(&images, 2);

    let effect = state.handle(Message::Close, &mut router);
    assert_eq!(effect, Effect::Closed);
    assert_eq!(router.current(), Location::Home);
    assert_eq!(router.current().href(), "/");
}

#[test]
fn shared_link_reopens_the_same_photo() {
    let images = gallery(6);
    let (mut state, mut router) = open_at(&images, 0);
    state.handle(Message::ChangePhoto(4), &mut router);

    let Effect::CopyLink(href) = state.handle(Message::CopyLink, &mut router) else {
        panic!("expected a link");
    };

    let location: Location = href.parse().expect("link parses");
    let (reopened, _) = open_at(&images, location.photo_id().unwrap_or_default());
    assert_eq!(reopened.index(), 4);
}

#[test]
fn scanned_folder_feeds_the_slideshow() {
    let dir = tempdir().expect("failed to create temp dir");
    for name in ["c.png", "a.jpg", "b.gif", "notes.txt"] {
        fs::write(dir.path().join(name), b"fake").expect("failed to write");
    }

    let (images, start) = Gallery::open(&dir.path().join("b.gif"), SortOrder::Alphabetical)
        .expect("open failed");
    assert_eq!(images.len(), 3);
    assert_eq!(start, Some(1));

    let (mut state, mut router) = open_at(&images, 1);
    state.handle(Message::AutoAdvance, &mut router);
    assert_eq!(images.get(state.index()).map(|image| image.name.as_str()), Some("c.png"));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "fr");
}

#[test]
fn interval_from_config_round_trips() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.slideshow.interval_secs = Some(12);
    config::save_to_path(&config, &config_path).expect("Failed to write config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let interval = SlideInterval::new(loaded.slideshow.interval_secs.unwrap_or_default());
    assert_eq!(interval.value(), 12);
}

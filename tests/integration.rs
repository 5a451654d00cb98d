// SPDX-License-Identifier: MPL-2.0
use speats_site::analytics::RecordingSink;
use speats_site::app::{App, Message};
use speats_site::config::{ConfigStore, MemoryStore, PreferenceStore};
use speats_site::language::Language;
use speats_site::page::document::{Document, ImageSlot, TextSlot};
use speats_site::page::{lang_menu, nav};
use tempfile::tempdir;

fn sample_page() -> Document {
    let mut document = Document::new("https://speats.ch/index.html#services");
    document.push_text_slot(TextSlot::new("nav_home", "Home"));
    document.push_text_slot(TextSlot::new("hero_title", ""));
    document.push_text_slot(TextSlot::new("legacy_banner", "keep me"));
    document.push_image(ImageSlot::new().with_src("hero.webp").hero());
    document.push_image(
        ImageSlot::new()
            .with_data_src("brokerai.webp")
            .with_section_heading("BrokerAI"),
    );
    document
}

#[test]
fn first_visit_detects_renders_and_persists() {
    let mut app = App::new(sample_page(), Box::new(MemoryStore::new(None)), None);
    app.initialize(Some("it-CH"));

    assert_eq!(app.current_language(), Language::It);
    assert_eq!(app.document().flag_indicator(), Some("🇮🇹"));
    assert_eq!(
        app.document().text_slot("hero_title").unwrap().content(),
        "Rivoluziona la Tua Azienda con Soluzioni AI Intelligenti"
    );
    // Unknown keys keep their prior content.
    assert_eq!(
        app.document().text_slot("legacy_banner").unwrap().content(),
        "keep me"
    );
}

#[test]
fn page_load_runs_the_seo_passes() {
    let mut app = App::new(sample_page(), Box::new(MemoryStore::new(None)), None);
    app.initialize(None);

    // Hero image untouched, the other one observed for lazy loading.
    assert!(!app.document().images()[0].is_lazy());
    assert!(app.document().images()[1].is_observed());

    // Alt text backfilled from the section heading.
    assert_eq!(app.document().images()[1].alt(), Some("BrokerAI"));

    // Four language links plus x-default, fragment stripped.
    let links = app.document().head_links();
    assert_eq!(links.len(), 5);
    assert_eq!(links[0].href, "https://speats.ch/index.html?lang=en");
    assert_eq!(links[4].hreflang, "x-default");
    assert_eq!(links[4].href, "https://speats.ch/index.html");

    app.update(Message::ImageVisible { index: 1 });
    assert_eq!(app.document().images()[1].src(), Some("brokerai.webp"));
    assert!(!app.document().images()[1].is_observed());
}

#[test]
fn language_round_trip_survives_reload() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // First visit: browser reports French, preference gets persisted.
    let mut app = App::new(
        sample_page(),
        Box::new(ConfigStore::open(config_path.clone())),
        None,
    );
    app.initialize(Some("fr-FR"));
    assert_eq!(app.current_language(), Language::Fr);

    // The visitor picks German from the menu.
    app.update(Message::LangMenu(lang_menu::Message::Toggle));
    app.update(Message::LangMenu(lang_menu::Message::Select(
        "de".to_string(),
    )));
    assert_eq!(app.current_language(), Language::De);
    assert_eq!(
        app.document().text_slot("nav_home").unwrap().content(),
        "Startseite"
    );

    // Reload: the stored preference wins over a different reported locale.
    let mut reloaded = App::new(
        sample_page(),
        Box::new(ConfigStore::open(config_path.clone())),
        None,
    );
    reloaded.initialize(Some("it-IT"));
    assert_eq!(reloaded.current_language(), Language::De);
    assert_eq!(reloaded.document().flag_indicator(), Some("🇩🇪"));

    let store = ConfigStore::open(config_path);
    assert_eq!(store.language(), Some("de".to_string()));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn unsupported_selection_changes_nothing() {
    let mut app = App::new(sample_page(), Box::new(MemoryStore::new(None)), None);
    app.initialize(None);
    let rendered_home = app
        .document()
        .text_slot("nav_home")
        .unwrap()
        .content()
        .to_string();

    app.update(Message::LangMenu(lang_menu::Message::Toggle));
    app.update(Message::LangMenu(lang_menu::Message::Select(
        "xx".to_string(),
    )));

    assert_eq!(app.current_language(), Language::En);
    assert!(app.language_menu_open());
    assert_eq!(
        app.document().text_slot("nav_home").unwrap().content(),
        rendered_home
    );
}

#[test]
fn nav_and_language_events_reach_the_analytics_sink() {
    let sink = RecordingSink::new();
    let mut app = App::new(
        sample_page(),
        Box::new(MemoryStore::new(None)),
        Some(Box::new(sink.clone())),
    );
    app.initialize(Some("en-GB"));

    app.update(Message::NavLinkClicked {
        label: "Services".to_string(),
    });
    app.update(Message::Nav(nav::Message::ToggleMenu));
    assert!(app.document().body_scroll_locked());
    app.update(Message::Nav(nav::Message::Resized { width: 1440 }));
    assert!(!app.document().body_scroll_locked());

    app.update(Message::LangMenu(lang_menu::Message::Toggle));
    app.update(Message::LangMenu(lang_menu::Message::Select(
        "fr".to_string(),
    )));

    assert_eq!(
        sink.events(),
        vec![
            (
                "Navigation".to_string(),
                "Click".to_string(),
                "Services".to_string()
            ),
            (
                "Language".to_string(),
                "Change".to_string(),
                "Français".to_string()
            ),
        ]
    );
}

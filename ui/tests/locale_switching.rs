//! End-to-end behaviour of the locale store and resolver through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::rstest;
use ui::i18n::{Catalog, HeadlessHost, I18n, Locale, LocaleStore, MemoryHost};

fn example_catalog() -> Catalog {
    Catalog::from_sources([
        (Locale::En, r#"{"hero":{"title":"Welcome"}}"#),
        (Locale::No, r#"{"hero":{"title":"Velkommen"}}"#),
    ])
    .expect("example dictionaries parse")
}

#[test]
fn worked_example() {
    let i18n = I18n::new(LocaleStore::initialized(MemoryHost::new()), example_catalog());

    assert_eq!(i18n.t("hero.title").text(), "Welcome");
    i18n.set_locale(Locale::No);
    assert_eq!(i18n.t("hero.title").text(), "Velkommen");
    for locale in Locale::ALL {
        i18n.set_locale(locale);
        assert_eq!(i18n.t("hero.missing").text(), "hero.missing");
    }
}

#[test]
fn bundled_keys_change_with_the_locale() {
    let i18n = I18n::bundled(MemoryHost::new().with_language("en-US"));
    let catalog = i18n.catalog();

    for key in catalog.key_paths(Locale::DEFAULT) {
        let en = catalog.lookup(Locale::En, &key);
        let no = catalog.lookup(Locale::No, &key);
        assert!(!en.is_missing() && !no.is_missing(), "{key} missing in a locale");

        i18n.set_locale(Locale::En);
        assert_eq!(i18n.t(&key), en);
        i18n.set_locale(Locale::No);
        assert_eq!(i18n.t(&key), no);
    }
}

#[rstest]
#[case("nb-NO")]
#[case("nn-NO")]
#[case("no-NO")]
fn norwegian_environments_start_in_norwegian(#[case] language: &str) {
    let host = MemoryHost::new().with_language(language);
    let store = LocaleStore::initialized(host.clone());
    assert_eq!(store.locale(), Locale::SECONDARY);
    assert_eq!(host.lang_attribute().as_deref(), Some("no"));
}

#[rstest]
#[case("en-US")]
#[case("fr-FR")]
fn other_environments_start_in_the_default(#[case] language: &str) {
    let store = LocaleStore::initialized(MemoryHost::new().with_language(language));
    assert_eq!(store.locale(), Locale::DEFAULT);
}

#[rstest]
#[case("en-US")]
#[case("fr-FR")]
#[case("nb-NO")]
fn persisted_choice_wins_over_environment(#[case] language: &str) {
    let host = MemoryHost::new()
        .with_persisted("no")
        .with_language(language);
    assert_eq!(LocaleStore::initialized(host).locale(), Locale::No);
}

#[test]
fn choice_survives_a_reload() {
    let host = MemoryHost::new().with_language("en-US");
    let first = LocaleStore::initialized(host.clone());
    first.set_locale(Locale::No);

    let reloaded = LocaleStore::initialized(host);
    assert_eq!(reloaded.locale(), Locale::No);
}

#[test]
fn headless_contexts_work_with_defaults() {
    let i18n = I18n::bundled(HeadlessHost);
    assert_eq!(i18n.locale(), Locale::DEFAULT);
    i18n.set_locale(Locale::No);
    assert_eq!(i18n.locale(), Locale::No);
    assert!(!i18n.t("hero.title").is_missing());
}

#[test]
fn every_subscriber_sees_every_set() {
    let i18n = I18n::new(LocaleStore::new(MemoryHost::new()), example_catalog());
    let seen: Rc<RefCell<Vec<(usize, Locale)>>> = Rc::default();
    for consumer in 0..3 {
        let log = Rc::clone(&seen);
        i18n.store()
            .subscribe(move |locale| log.borrow_mut().push((consumer, locale)));
    }

    i18n.set_locale(Locale::No);
    i18n.set_locale(Locale::No);

    assert_eq!(seen.borrow().len(), 6);
    assert!(seen.borrow().iter().all(|(_, locale)| *locale == Locale::No));
}

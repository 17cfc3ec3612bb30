use std::collections::HashSet;
use std::sync::{Arc, Mutex};

mod support;

use sitepage::domain::page::services::UrlSegmentService;
use sitepage::domain::page::PageId;
use sitepage::infrastructure::i18n::StaticTranslator;
use sitepage::infrastructure::util::DefaultSegmentFilter;

fn service() -> UrlSegmentService {
    UrlSegmentService::new(Arc::new(DefaultSegmentFilter))
}

#[test]
fn hooks_can_enforce_uniqueness_against_taken_segments() {
    let taken: Arc<Mutex<HashSet<String>>> = Arc::new(Mutex::new(
        ["about-us".to_string(), "about-us-2".to_string()].into(),
    ));

    let seen = Arc::clone(&taken);
    let service = service().with_hook(Box::new(move |candidate, _| {
        let seen = seen.lock().unwrap();
        let mut unique = candidate.clone();
        let mut counter = 2u32;
        while seen.contains(&unique) {
            unique = format!("{candidate}-{counter}");
            counter += 1;
        }
        *candidate = unique;
    }));

    assert_eq!(service.generate("About Us", None), "about-us-3");
    assert_eq!(service.generate("Contact", None), "contact");
}

#[test]
fn default_segment_slugs_the_translated_new_page_title() {
    let service = service();
    let translator = StaticTranslator::default();
    assert_eq!(
        service.default_segment("Team Page", &translator),
        "new-team-page"
    );
}

#[test]
fn default_segment_honours_registered_translations() {
    let service = service();
    let translator = StaticTranslator::default().with_entry("CMSMain.NEWPAGE", "Neu {pagetype}");
    assert_eq!(service.default_segment("Seite", &translator), "neu-seite");
}

#[test]
fn fallback_applies_before_hooks_run() {
    let service = service().with_hook(Box::new(|candidate, _| {
        *candidate = format!("archive-{candidate}");
    }));
    let id = PageId::new(42).unwrap();

    assert_eq!(service.generate("", Some(id)), "archive-page-42");
    assert_eq!(service.generate("", None), "archive-page-new");
}

#[test]
fn diacritics_fold_into_ascii_segments() {
    assert_eq!(service().generate("Café Über Alles", None), "cafe-uber-alles");
}

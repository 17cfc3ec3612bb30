// src/domain/page/services/mod.rs
pub mod excerpt;

use std::sync::Arc;

use crate::application::ports::i18n::Translator;
use crate::application::ports::util::SegmentFilter;
use crate::domain::page::value_objects::PageId;

/// Post-processing callback invoked with the candidate segment and the
/// original title. Hooks run in registration order and may rewrite the
/// candidate in place (uniqueness enforcement, prefixing).
pub type SegmentHook = Box<dyn Fn(&mut String, &str) + Send + Sync>;

/// Domain service turning an arbitrary title into a URL segment, with a
/// deterministic fallback when the filter output is unusable.
pub struct UrlSegmentService {
    filter: Arc<dyn SegmentFilter>,
    hooks: Vec<SegmentHook>,
}

impl UrlSegmentService {
    pub fn new(filter: Arc<dyn SegmentFilter>) -> Self {
        Self {
            filter,
            hooks: Vec::new(),
        }
    }

    pub fn with_hook(mut self, hook: SegmentHook) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Generate a URL segment for `title`. Degenerate filter output falls
    /// back to `page-<id>`, or `page-new` for a not-yet-persisted page.
    pub fn generate(&self, title: &str, page_id: Option<PageId>) -> String {
        let mut candidate = self.filter.filter(title);

        if is_degenerate(&candidate) {
            candidate = fallback_segment(page_id);
            tracing::debug!(title, segment = %candidate, "degenerate url segment, using fallback");
        }

        for hook in &self.hooks {
            hook(&mut candidate, title);
        }

        candidate
    }

    /// Default segment offered by the admin form for a page that has not
    /// been saved yet, derived from the translated "New {pagetype}" title.
    pub fn default_segment(&self, singular_name: &str, translator: &dyn Translator) -> String {
        let title = translator.translate(
            "CMSMain.NEWPAGE",
            "New {pagetype}",
            &[("pagetype", singular_name)],
        );
        self.generate(&title, None)
    }
}

fn is_degenerate(segment: &str) -> bool {
    segment.is_empty() || segment == "-" || segment == "-1"
}

fn fallback_segment(page_id: Option<PageId>) -> String {
    match page_id {
        Some(id) => format!("page-{}", i64::from(id)),
        None => "page-new".to_string(),
    }
}

/// Join path fragments into a normalized site-relative path: single
/// separators, exactly one trailing `/`.
pub fn join_links<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from("/");
    for part in parts {
        for piece in part.as_ref().split('/').filter(|p| !p.is_empty()) {
            out.push_str(piece);
            out.push('/');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::util::DefaultSegmentFilter;

    fn service() -> UrlSegmentService {
        UrlSegmentService::new(Arc::new(DefaultSegmentFilter))
    }

    #[test]
    fn generates_lowercase_hyphenated_segment() {
        assert_eq!(service().generate("Hello World!", None), "hello-world");
    }

    #[test]
    fn empty_title_falls_back_to_page_id() {
        let id = PageId::new(42).unwrap();
        assert_eq!(service().generate("", Some(id)), "page-42");
    }

    #[test]
    fn unsaved_page_falls_back_to_placeholder() {
        assert_eq!(service().generate("!!!", None), "page-new");
    }

    #[test]
    fn generation_is_idempotent_for_clean_titles() {
        let service = service();
        let once = service.generate("Contact & Directions", None);
        assert_eq!(service.generate(&once, None), once);
    }

    #[test]
    fn degenerate_filter_output_never_escapes() {
        let id = PageId::new(9).unwrap();
        // Titles that filter down to nothing usable.
        for title in ["", "   ", "!!!", "---", "..."] {
            let segment = service().generate(title, Some(id));
            assert_eq!(segment, "page-9", "title {title:?}");
        }
    }

    #[test]
    fn hooks_run_in_registration_order_and_may_override() {
        let service = service()
            .with_hook(Box::new(|candidate, _| {
                *candidate = format!("news-{candidate}");
            }))
            .with_hook(Box::new(|candidate, title| {
                assert_eq!(title, "Hello");
                candidate.push_str("-2");
            }));
        assert_eq!(service.generate("Hello", None), "news-hello-2");
    }

    #[test]
    fn join_links_normalizes_separators() {
        assert_eq!(join_links(["/", "about-us"]), "/about-us/");
        assert_eq!(join_links(["/", "/about-us/", "/"]), "/about-us/");
        assert_eq!(join_links(["/news/", "2026/summer"]), "/news/2026/summer/");
        assert_eq!(join_links::<_, &str>([]), "/");
    }
}

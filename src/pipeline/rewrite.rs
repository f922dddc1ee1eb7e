// src/pipeline/rewrite.rs
// Point links and images back at the upstream site and strip the ticketing widgets.
// Every step here is idempotent: running the pass twice changes nothing the second time.

use url::Url;

use crate::core::sanitize::snippet;
use crate::core::{Document, Selector};
use crate::error::{Error, Result};
use crate::specs::programme::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Relative `href`s made absolute.
    pub links_rewritten: usize,
    /// Relative `src`s made absolute.
    pub images_rewritten: usize,
    pub tickets_removed: usize,
    pub fast_passes_disabled: usize,
    pub festival_tickets_removed: usize,
}

pub fn rewrite(doc: &mut Document, origin: &Url) -> Result<RewriteSummary> {
    let summary = RewriteSummary {
        links_rewritten: rewrite_links(doc, origin),
        images_rewritten: rewrite_images(doc, origin)?,
        tickets_removed: remove_all(doc, &TICKET_WRAPPER),
        fast_passes_disabled: disable_fast_passes(doc),
        festival_tickets_removed: remove_all(doc, &FESTIVAL_TICKET),
    };
    logf!(
        "Rewrote {} links and {} images; removed {} ticket forms and {} festival ticket links; disabled {} fast passes",
        summary.links_rewritten,
        summary.images_rewritten,
        summary.tickets_removed,
        summary.festival_tickets_removed,
        summary.fast_passes_disabled,
    );
    Ok(summary)
}

/// Already carries a scheme (or is protocol-relative).
pub fn is_absolute(href: &str) -> bool {
    ABSOLUTE_PREFIXES
        .iter()
        .any(|p| href.get(..p.len()).is_some_and(|head| head.eq_ignore_ascii_case(p)))
}

/// `Some(absolute)` for a relative reference, `None` when it is already absolute.
/// A reference `Url::join` rejects is glued onto the origin as text instead.
pub fn absolutize(origin: &Url, href: &str) -> Option<String> {
    if is_absolute(href) {
        return None;
    }
    match origin.join(href) {
        Ok(joined) => Some(joined.into()),
        Err(e) => {
            logd!("Cannot join {href:?} onto {origin} ({e}); prefixing instead");
            let base = origin.as_str().trim_end_matches('/');
            Some(if href.starts_with('/') { join!(base, href) } else { join!(base, "/", href) })
        }
    }
}

/// Absolute `href` + open in a new tab. Anchors without an `href` are left alone.
fn rewrite_links(doc: &mut Document, origin: &Url) -> usize {
    let mut rewritten = 0;
    for a in doc.find_all(doc.root(), &LINK) {
        let Some(href) = doc.attr(a, "href").filter(|h| !h.is_empty()) else {
            continue;
        };
        if let Some(abs) = absolutize(origin, href) {
            doc.set_attr(a, "href", abs);
            rewritten += 1;
        }
        doc.set_attr(a, NEW_TAB.0, NEW_TAB.1);
    }
    rewritten
}

/// Absolute `src`. An image with no `src` means the markup changed under us.
fn rewrite_images(doc: &mut Document, origin: &Url) -> Result<usize> {
    let mut rewritten = 0;
    for img in doc.find_all(doc.root(), &IMAGE) {
        let src = doc
            .attr(img, "src")
            .ok_or_else(|| Error::MissingImageSource { node: snippet(&doc.open_tag(img), 160) })?;
        if let Some(abs) = absolutize(origin, src) {
            doc.set_attr(img, "src", abs);
            rewritten += 1;
        }
    }
    Ok(rewritten)
}

/// Detach every match still in the tree; returns how many were detached.
fn remove_all(doc: &mut Document, sel: &Selector) -> usize {
    let mut removed = 0;
    for id in doc.find_all(doc.root(), sel) {
        if doc.is_attached(id) {
            doc.extract(id);
            removed += 1;
        }
    }
    removed
}

/// Fast-pass headers stay visible but stop being links.
fn disable_fast_passes(doc: &mut Document) -> usize {
    doc.find_all(doc.root(), &FAST_PASS_HEADER)
        .into_iter()
        .filter(|&id| doc.remove_attr(id, "href").is_some())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://howthelightgetsin.org").unwrap()
    }

    #[test]
    fn absolute_detection() {
        assert!(is_absolute("https://x.org/a"));
        assert!(is_absolute("HTTP://x.org/a"));
        assert!(is_absolute("//cdn.x.org/a.js"));
        assert!(is_absolute("mailto:a@b.c"));
        assert!(!is_absolute("/events/1"));
        assert!(!is_absolute("events/1"));
        assert!(!is_absolute("é"));
    }

    #[test]
    fn relative_paths_join_the_origin() {
        assert_eq!(
            absolutize(&origin(), "/foo").as_deref(),
            Some("https://howthelightgetsin.org/foo")
        );
        assert_eq!(
            absolutize(&origin(), "assets/a.jpg").as_deref(),
            Some("https://howthelightgetsin.org/assets/a.jpg")
        );
        assert_eq!(absolutize(&origin(), "https://other.org/x"), None);
    }

    #[test]
    fn unjoinable_reference_is_prefixed() {
        assert_eq!(
            absolutize(&origin(), "\\\\[oops").as_deref(),
            Some("https://howthelightgetsin.org/\\\\[oops")
        );
    }
}

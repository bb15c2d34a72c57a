//! Navigation link state and scroll-position section tracking.
//!
//! `NavLinks` mirrors the nav bar: it knows each link's fragment target and
//! which link (if any) is active. Both the click handler and the scroll
//! handler write through it, so the last writer wins and at most one link is
//! ever active.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A section's identifier and its top offset from the page origin.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// The section whose top was most recently scrolled past.
///
/// The reference line sits `margin` pixels below the scroll offset. Among
/// sections whose top is at or above that line, the greatest offset wins;
/// on equal offsets the later section in document order wins. Sections with
/// an empty id are ignored.
#[must_use]
pub fn active_section(sections: &[SectionOffset], scroll_y: f64, margin: f64) -> Option<&str> {
    let reference = scroll_y + margin;
    let mut best: Option<&SectionOffset> = None;
    for section in sections {
        if section.id.is_empty() || section.top > reference {
            continue;
        }
        if best.is_none_or(|b| section.top >= b.top) {
            best = Some(section);
        }
    }
    best.map(|s| s.id.as_str())
}

/// The fragment id of an in-page `href` such as `#about`.
///
/// Returns `None` for external links and for a bare `#`.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// The nav links in document order and the active one.
#[derive(Debug, Clone, Default)]
pub struct NavLinks {
    fragments: Vec<Option<String>>,
    active: Option<usize>,
}

impl NavLinks {
    /// Build from each link's raw `href` attribute, in document order.
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let fragments = hrefs
            .into_iter()
            .map(|href| href.and_then(|h| fragment_id(h.as_ref()).map(str::to_owned)))
            .collect();
        Self { fragments, active: None }
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Fragment target of the link at `index`.
    #[must_use]
    pub fn fragment(&self, index: usize) -> Option<&str> {
        self.fragments.get(index)?.as_deref()
    }

    /// Mark the link at `index` active (click path). Out-of-range clears.
    pub fn activate(&mut self, index: usize) {
        self.active = (index < self.fragments.len()).then_some(index);
    }

    /// Mark active the first link pointing at `section_id` (scroll path).
    ///
    /// With no section, or no link for it, every link ends up inactive.
    pub fn activate_section(&mut self, section_id: Option<&str>) {
        self.active = section_id.and_then(|id| {
            self.fragments
                .iter()
                .position(|f| f.as_deref() == Some(id))
        });
    }
}

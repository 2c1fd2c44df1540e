/// Geometry of the "in view" test used for the section cards.
///
/// Mirrors the IntersectionObserver options the browser is given: the
/// effective viewport is shrunk by `root_margin_top` and
/// `root_margin_bottom` (fractions of the viewport height) and an element
/// counts as intersecting once `threshold` of its height is inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin_top: f64,
    pub root_margin_bottom: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            root_margin_top: 0.2,
            root_margin_bottom: 0.2,
        }
    }
}

/// Vertical extent of an element relative to the viewport top, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl ObserverConfig {
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            percent(self.root_margin_top),
            percent(self.root_margin_bottom)
        )
    }

    pub fn is_intersecting(&self, rect: SectionRect, viewport_height: f64) -> bool {
        let height = rect.bottom - rect.top;
        if height <= 0.0 {
            return false;
        }
        let view_top = viewport_height * self.root_margin_top;
        let view_bottom = viewport_height * (1.0 - self.root_margin_bottom);

        let visible = (rect.bottom.min(view_bottom) - rect.top.max(view_top)).max(0.0);
        visible > 0.0 && visible / height >= self.threshold
    }
}

fn percent(fraction: f64) -> String {
    let value = fraction * 100.0;
    if value.fract().abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{}", value)
    }
}

/// One intersection report for the section at zero-based `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionEntry {
    pub position: usize,
    pub is_intersecting: bool,
}

/// Tracks which of a fixed set of sections is active.
///
/// The active ordinal is 1-based and starts at 1 until a section is seen
/// intersecting. Within a batch, entries are applied in delivery order so
/// the last intersecting one wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivationTracker {
    section_count: usize,
    active: usize,
}

impl ActivationTracker {
    pub fn new(section_count: usize) -> Self {
        Self {
            section_count: section_count.max(1),
            active: 1,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Returns true when the active section changed.
    pub fn apply<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = SectionEntry>,
    {
        let before = self.active;
        for entry in entries {
            if entry.is_intersecting && entry.position < self.section_count {
                self.active = entry.position + 1;
            }
        }
        before != self.active
    }

    /// Evaluates every section against `config` and applies the results as one batch.
    pub fn observe(&mut self, config: &ObserverConfig, rects: &[SectionRect], viewport_height: f64) -> bool {
        self.apply(rects.iter().enumerate().map(|(position, rect)| SectionEntry {
            position,
            is_intersecting: config.is_intersecting(*rect, viewport_height),
        }))
    }
}

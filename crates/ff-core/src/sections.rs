//! Active-section tracking for the in-page nav

use serde::{Deserialize, Serialize};

/// Distance below the viewport top at which a section counts as active
pub const DEFAULT_OFFSET: f64 = 120.0;

/// Document-absolute box of a page section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRect {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The first section, in document order, containing `scroll_y + 120`
pub fn compute_active_section(rects: &[SectionRect], scroll_y: f64) -> Option<&str> {
    compute_active_section_with_offset(rects, scroll_y, DEFAULT_OFFSET)
}

pub fn compute_active_section_with_offset(rects: &[SectionRect], scroll_y: f64, offset: f64) -> Option<&str> {
    let marker = scroll_y + offset;
    rects.iter().find(|r| r.contains(marker)).map(|r| r.id.as_str())
}

/// Keeps the last active section while the marker sits between sections
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    offset: f64,
    active: Option<String>,
}

impl ActiveSectionTracker {
    pub fn new(offset: f64) -> Self {
        Self { offset, active: None }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute for a new scroll position; returns true when the label changed
    pub fn update(&mut self, rects: &[SectionRect], scroll_y: f64) -> bool {
        match compute_active_section_with_offset(rects, scroll_y, self.offset) {
            Some(id) if self.active.as_deref() != Some(id) => {
                self.active = Some(id.to_string());
                true
            }
            _ => false,
        }
    }
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionRect> {
        vec![
            SectionRect::new("home", 0.0, 800.0),
            SectionRect::new("products", 800.0, 1200.0),
            SectionRect::new("about", 2000.0, 600.0),
            // gap between about and cases
            SectionRect::new("cases", 2700.0, 700.0),
            SectionRect::new("contact", 3400.0, 500.0),
        ]
    }

    #[test]
    fn test_marker_inside_contact() {
        // 3300 + 120 lands inside contact
        assert_eq!(compute_active_section(&page(), 3300.0), Some("contact"));
    }

    #[test]
    fn test_boundaries_are_half_open() {
        let rects = page();
        assert_eq!(compute_active_section(&rects, 680.0), Some("products"));
        assert_eq!(compute_active_section(&rects, 679.9), Some("home"));
        assert_eq!(compute_active_section(&rects, 0.0), Some("home"));
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let rects = vec![
            SectionRect::new("outer", 0.0, 1000.0),
            SectionRect::new("inner", 100.0, 200.0),
        ];
        assert_eq!(compute_active_section(&rects, 100.0), Some("outer"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(compute_active_section(&page(), 2500.0), None);
        assert_eq!(compute_active_section(&[], 0.0), None);
        assert_eq!(compute_active_section_with_offset(&page(), 5000.0, 0.0), None);
    }

    #[test]
    fn test_tracker_holds_last_section_in_gaps() {
        let rects = page();
        let mut tracker = ActiveSectionTracker::default();
        assert_eq!(tracker.active(), None);

        assert!(tracker.update(&rects, 2000.0));
        assert_eq!(tracker.active(), Some("about"));
        assert!(!tracker.update(&rects, 2100.0));

        // marker at 2620 falls in the gap
        assert!(!tracker.update(&rects, 2500.0));
        assert_eq!(tracker.active(), Some("about"));

        assert!(tracker.update(&rects, 2600.0));
        assert_eq!(tracker.active(), Some("cases"));
    }
}

//! Section registry and the scroll math behind navigation highlighting.
//!
//! The registry is fixed at startup; the active index is always a valid
//! position into it. Everything here is DOM-free so the tracking logic can be
//! tested without a browser.

pub const SECTIONS: [&str; 4] = ["home", "about", "projects", "contact"];

pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

/// Registry position of a section name, `None` for anything unregistered.
pub fn section_index(name: &str) -> Option<usize> {
    SECTIONS.iter().position(|section| *section == name)
}

pub fn previous_index(current: usize) -> usize {
    current.saturating_sub(1)
}

pub fn next_index(current: usize) -> usize {
    (current + 1).min(SECTIONS.len() - 1)
}

/// Vertical extent of a section element in document order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

/// The probe sits at the vertical middle of the viewport.
pub fn probe_position(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height / 2.0
}

/// Resolves which section contains the probe position.
///
/// Sections are checked in registry order and every match overwrites the
/// previous one, so when bounds overlap the last matching section wins. That
/// tie-break is the authoritative behavior, not an accident to fix.
pub fn active_section(probe: f64, bounds: &[SectionBounds]) -> Option<usize> {
    let mut active = None;
    for (index, section) in bounds.iter().enumerate() {
        if probe >= section.top && probe < section.top + section.height {
            active = Some(index);
        }
    }
    active
}

/// Vertical parallax offset for an element with an optional `data-speed`
/// attribute. A missing or non-numeric attribute means the default speed,
/// never zero.
pub fn parallax_offset(page_y_offset: f64, speed_attr: Option<&str>) -> f64 {
    let speed = speed_attr
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(DEFAULT_PARALLAX_SPEED);
    -(page_y_offset * speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_bounds() -> Vec<SectionBounds> {
        vec![
            SectionBounds { top: 0.0, height: 800.0 },
            SectionBounds { top: 800.0, height: 800.0 },
            SectionBounds { top: 1600.0, height: 800.0 },
            SectionBounds { top: 2400.0, height: 800.0 },
        ]
    }

    #[test]
    fn probe_sits_at_viewport_midpoint() {
        assert_eq!(probe_position(1000.0, 600.0), 1300.0);
    }

    #[test]
    fn resolves_containing_section() {
        let bounds = stacked_bounds();
        assert_eq!(active_section(0.0, &bounds), Some(0));
        assert_eq!(active_section(1200.0, &bounds), Some(1));
        assert_eq!(active_section(3199.0, &bounds), Some(3));
    }

    #[test]
    fn section_bounds_are_half_open() {
        let bounds = stacked_bounds();
        // 800.0 is the top of the second section, not the end of the first.
        assert_eq!(active_section(800.0, &bounds), Some(1));
    }

    #[test]
    fn last_matching_section_wins_on_overlap() {
        let bounds = vec![
            SectionBounds { top: 0.0, height: 1000.0 },
            SectionBounds { top: 500.0, height: 1000.0 },
        ];
        assert_eq!(active_section(700.0, &bounds), Some(1));
    }

    #[test]
    fn probe_outside_every_section_matches_nothing() {
        let bounds = stacked_bounds();
        assert_eq!(active_section(9000.0, &bounds), None);
        assert_eq!(active_section(-1.0, &bounds), None);
    }

    #[test]
    fn registry_lookup() {
        assert_eq!(section_index("home"), Some(0));
        assert_eq!(section_index("contact"), Some(3));
        assert_eq!(section_index("imprint"), None);
    }

    #[test]
    fn prev_and_next_clamp_at_boundaries() {
        let mut index = 0;
        for _ in 0..5 {
            index = previous_index(index);
        }
        assert_eq!(index, 0);
        for _ in 0..10 {
            index = next_index(index);
        }
        assert_eq!(index, SECTIONS.len() - 1);
    }

    #[test]
    fn parallax_uses_attribute_speed() {
        assert_eq!(parallax_offset(100.0, Some("0.3")), -30.0);
    }

    #[test]
    fn parallax_defaults_on_missing_or_garbage_speed() {
        assert_eq!(parallax_offset(100.0, None), -50.0);
        assert_eq!(parallax_offset(100.0, Some("fast")), -50.0);
        assert_eq!(parallax_offset(100.0, Some("")), -50.0);
    }
}

//! Layout queries and the geometry behind the scroll/pointer reactors.
//!
//! DOM handlers ask a `LayoutProbe` for positions and feed the numbers to
//! the pure functions below, which are what the tests exercise.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::constants::*;

/// Read-only view of page geometry.
pub trait LayoutProbe {
    fn scroll_y(&self) -> f64;
    fn viewport_size(&self) -> (f64, f64);
    fn element_top_offset(&self, element: &Element) -> f64;
    fn is_intersecting_viewport(&self, element: &Element) -> bool;
}

pub struct WindowProbe {
    window: Window,
}

impl WindowProbe {
    pub fn new(window: Window) -> Self {
        WindowProbe { window }
    }
}

impl LayoutProbe for WindowProbe {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_size(&self) -> (f64, f64) {
        crate::canvas::surface::viewport_size(&self.window)
    }

    fn element_top_offset(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map(|el| el.offset_top() as f64)
            .unwrap_or(0.0)
    }

    fn is_intersecting_viewport(&self, element: &Element) -> bool {
        let rect = element.get_bounding_client_rect();
        let (w, h) = self.viewport_size();
        rect.bottom() > 0.0 && rect.right() > 0.0 && rect.top() < h && rect.left() < w
    }
}

/// Id of the section the reader is in: the last one whose top lies at most
/// 200px below the scroll position.
pub fn active_section<'a>(scroll_y: f64, sections: &'a [(String, f64)]) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - NAV_SECTION_OFFSET)
        .last()
        .map(|(id, _)| id.as_str())
}

/// `translateY` in px and opacity for the hero block; `None` once scrolled
/// past the first screen.
pub fn parallax(scroll_y: f64, viewport_height: f64) -> Option<(f64, f64)> {
    if scroll_y >= viewport_height || viewport_height <= 0.0 {
        return None;
    }
    let translate = scroll_y * PARALLAX_SPEED;
    let opacity = 1.0 - (scroll_y / viewport_height) * PARALLAX_FADE;
    Some((translate, opacity))
}

/// Tilt `(rotate_x, rotate_y)` in degrees for a pointer at card-local
/// `(x, y)` on a `width` x `height` card.
pub fn tilt_angles(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let rotate_x = (y - height / 2.0) / TILT_DIVISOR;
    let rotate_y = (width / 2.0 - x) / TILT_DIVISOR;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) scale(1.05)",
        rotate_x, rotate_y
    )
}

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) scale(1)";

/// Rotation of the portrait frame following the pointer across the viewport.
pub fn frame_rotation(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (client_x / width - 0.5) * FRAME_TILT_RANGE;
    let y = (client_y / height - 0.5) * FRAME_TILT_RANGE;
    (x, y)
}

pub fn frame_transform(x: f64, y: f64) -> String {
    format!("rotateY({}deg) rotateX({}deg)", x, -y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("home".to_string(), 0.0),
            ("about".to_string(), 800.0),
            ("projects".to_string(), 1600.0),
        ]
    }

    #[test]
    fn section_switches_200px_early() {
        let s = sections();
        assert_eq!(active_section(0.0, &s), Some("home"));
        assert_eq!(active_section(599.0, &s), Some("home"));
        assert_eq!(active_section(600.0, &s), Some("about"));
        assert_eq!(active_section(5000.0, &s), Some("projects"));
    }

    #[test]
    fn no_section_above_first() {
        let s = vec![("late".to_string(), 1000.0)];
        assert_eq!(active_section(0.0, &s), None);
    }

    #[test]
    fn parallax_fades_within_first_screen() {
        assert_eq!(parallax(0.0, 1000.0), Some((0.0, 1.0)));
        let (t, o) = parallax(500.0, 1000.0).unwrap();
        assert!((t - 100.0).abs() < 1e-9);
        assert!((o - 0.85).abs() < 1e-9);
        assert_eq!(parallax(1000.0, 1000.0), None);
    }

    #[test]
    fn tilt_is_zero_at_card_centre() {
        assert_eq!(tilt_angles(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
        let (rx, ry) = tilt_angles(0.0, 0.0, 200.0, 100.0);
        assert_eq!(rx, -2.5);
        assert_eq!(ry, 5.0);
        assert_eq!(
            tilt_transform(rx, ry),
            "perspective(1000px) rotateX(-2.5deg) rotateY(5deg) scale(1.05)"
        );
    }

    #[test]
    fn frame_follows_pointer() {
        assert_eq!(frame_rotation(500.0, 250.0, 1000.0, 500.0), (0.0, 0.0));
        assert_eq!(frame_rotation(1000.0, 0.0, 1000.0, 500.0), (10.0, -10.0));
        assert_eq!(frame_transform(10.0, -10.0), "rotateY(10deg) rotateX(10deg)");
        assert_eq!(frame_rotation(1.0, 1.0, 0.0, 0.0), (0.0, 0.0));
    }
}

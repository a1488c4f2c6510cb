//! Handle placement for view layers.

use serde::Serialize;

use crate::traits::Pixels;

/// Horizontal placement of a handle, in pixels from the timeline epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleStyle {
    /// Offset of the handle's left edge
    pub left: Pixels,
    /// Width of the handle
    pub width: Pixels,
}

impl HandleStyle {
    pub fn new(left: Pixels, width: Pixels) -> Self {
        Self { left, width }
    }

    /// Returns the style translated by `offset` pixels (e.g. to account
    /// for a scrolled viewport).
    pub fn shifted(self, offset: Pixels) -> Self {
        Self {
            left: self.left + offset,
            width: self.width,
        }
    }

    /// Returns a CSS-like style map, e.g. `{"left": "132px", "width": "336px"}`.
    pub fn to_css(&self) -> serde_json::Value {
        serde_json::json!({
            "left": format!("{}px", self.left),
            "width": format!("{}px", self.width),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_css() {
        let style = HandleStyle::new(132.0, 336.5);
        let css = style.to_css();
        assert_eq!(css["left"], "132px");
        assert_eq!(css["width"], "336.5px");
    }

    #[test]
    fn test_shifted_keeps_width() {
        let style = HandleStyle::new(100.0, 40.0).shifted(-30.0);
        assert_eq!(style, HandleStyle::new(70.0, 40.0));
    }
}

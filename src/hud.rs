//! DOM-backed HUD elements

use web_sys::{Document, Element};

use crate::frontend::{OverlayToggle, TextDisplay};

/// Text display bound to a DOM element
pub struct DomText {
    el: Element,
}

impl DomText {
    pub fn new(document: &Document, id: &str) -> Option<Self> {
        let el = document.get_element_by_id(id)?;
        Some(Self { el })
    }
}

impl TextDisplay for DomText {
    fn set_text(&mut self, text: &str) {
        self.el.set_text_content(Some(text));
    }
}

/// Overlay shown and hidden through the `hidden` class
pub struct DomOverlay {
    el: Element,
}

impl DomOverlay {
    pub fn new(document: &Document, id: &str) -> Option<Self> {
        let el = document.get_element_by_id(id)?;
        Some(Self { el })
    }
}

impl OverlayToggle for DomOverlay {
    fn set_visible(&mut self, visible: bool) {
        if visible {
            let _ = self.el.class_list().remove_1("hidden");
        } else {
            let _ = self.el.class_list().add_1("hidden");
        }
    }
}

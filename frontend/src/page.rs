// DOM boundary
//
// Toggles only ever write `src`, `alt` and class membership, so that is all the
// element abstraction exposes. Browser pages use the web_sys impls below.

use web_sys::{Document, Element};

pub trait PageElement: Clone {
    fn set_attr(&self, name: &str, value: &str);
    fn set_class(&self, class: &str, present: bool);
    fn has_class(&self, class: &str) -> bool;

    fn set_source(&self, src: &str) {
        self.set_attr("src", src);
    }

    fn set_label(&self, alt: &str) {
        self.set_attr("alt", alt);
    }
}

pub trait PageLookup {
    type Element: PageElement;

    fn body(&self) -> Option<Self::Element>;
    fn by_id(&self, id: &str) -> Option<Self::Element>;
    fn by_selector(&self, selector: &str) -> Option<Self::Element>;
}

impl PageElement for Element {
    fn set_attr(&self, name: &str, value: &str) {
        if let Err(e) = self.set_attribute(name, value) {
            tracing::warn!(name, value, error = ?e, "attribute write rejected");
        }
    }

    fn set_class(&self, class: &str, present: bool) {
        if let Err(e) = self.class_list().toggle_with_force(class, present) {
            tracing::warn!(class, present, error = ?e, "class toggle rejected");
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

impl PageLookup for Document {
    type Element = Element;

    fn body(&self) -> Option<Element> {
        Document::body(self).map(Element::from)
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.get_element_by_id(id)
    }

    fn by_selector(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).ok().flatten()
    }
}

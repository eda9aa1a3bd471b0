//! In-page navigation: smooth scrolling to the named page sections.

use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Scrollable sections of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Products,
    Services,
    Contact,
}

impl Section {
    /// Sections in navigation order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Products,
        Section::Services,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Products => "products",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "Rólunk",
            Section::Products => "Csomagok",
            Section::Services => "Szolgáltatások",
            Section::Contact => "Kapcsolat",
        }
    }
}

/// Something that can bring an element into view by id.
pub trait ScrollTarget {
    /// Scroll to the element with `id`. Returns `false` when there is no
    /// such element.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// The live browser document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl ScrollTarget for BrowserDocument {
    fn scroll_into_view(&self, id: &str) -> bool {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));

        let Some(element) = element else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Scroll to `section`, then run `close_menu`.
///
/// A missing section is a silent no-op: `close_menu` is not called.
pub fn scroll_to_section<T, F>(target: &T, section: Section, close_menu: F) -> bool
where
    T: ScrollTarget + ?Sized,
    F: FnOnce(),
{
    if target.scroll_into_view(section.id()) {
        close_menu();
        true
    } else {
        log::debug!("Section #{} not found, ignoring navigation", section.id());
        false
    }
}

/// Click handler helper wiring [`scroll_to_section`] to the menu signal.
pub fn go_to(section: Section, set_menu_open: WriteSignal<bool>) {
    scroll_to_section(&BrowserDocument, section, || set_menu_open.set(false));
}

/// Flip the mobile menu flag.
pub fn toggle_menu(open: &mut bool) {
    *open = !*open;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeDocument {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl ScrollTarget for FakeDocument {
        fn scroll_into_view(&self, id: &str) -> bool {
            if self.ids.contains(&id) {
                self.scrolled.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn test_scroll_closes_menu() {
        let document = FakeDocument {
            ids: vec!["about", "contact"],
            scrolled: RefCell::new(Vec::new()),
        };
        let mut menu_open = true;

        let scrolled = scroll_to_section(&document, Section::Contact, || menu_open = false);

        assert!(scrolled);
        assert!(!menu_open);
        assert_eq!(*document.scrolled.borrow(), ["contact"]);
    }

    #[test]
    fn test_missing_section_is_noop() {
        let document = FakeDocument {
            ids: vec!["about"],
            scrolled: RefCell::new(Vec::new()),
        };
        let mut closed = 0;

        assert!(!scroll_to_section(&document, Section::Products, || closed += 1));
        assert!(!scroll_to_section(&document, Section::Services, || closed += 1));

        assert_eq!(closed, 0);
        assert!(document.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_toggle_menu() {
        let mut open = false;
        toggle_menu(&mut open);
        assert!(open);
        toggle_menu(&mut open);
        assert!(!open);
    }

    #[test]
    fn test_section_ids() {
        let ids: Vec<&str> = Section::ALL.iter().map(Section::id).collect();
        assert_eq!(ids, ["about", "products", "services", "contact"]);
    }
}

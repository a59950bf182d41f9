//! Page scrolling helpers: navbar tone and smooth in-page navigation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Background treatment of the fixed navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarTone {
    Translucent,
    Solid,
}

impl NavbarTone {
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Translucent => "background: rgba(15, 15, 26, 0.8);",
            Self::Solid => "background: rgba(15, 15, 26, 0.95);",
        }
    }
}

/// Scroll tracking owned by the navbar component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarScroll {
    pub solid_after_px: f64,
    pub last_scroll_y: f64,
}

impl NavbarScroll {
    #[must_use]
    pub fn new(solid_after_px: f64) -> Self {
        Self { solid_after_px, last_scroll_y: 0.0 }
    }

    pub fn observe(&mut self, scroll_y: f64) -> NavbarTone {
        self.last_scroll_y = scroll_y;
        self.tone()
    }

    #[must_use]
    pub fn tone(&self) -> NavbarTone {
        if self.last_scroll_y > self.solid_after_px {
            NavbarTone::Solid
        } else {
            NavbarTone::Translucent
        }
    }
}

/// Element id targeted by an in-page link, e.g. `"#contact"` → `"contact"`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Where the target lands in the viewport after scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAlign {
    Start,
    Center,
}

/// Smoothly scroll the element with `id` into view. No-op when it is missing.
pub fn scroll_to_id(id: &str, align: ScrollAlign) {
    #[cfg(feature = "csr")]
    {
        let Some(target) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::debug!("scroll target #{id} not found");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(match align {
            ScrollAlign::Start => web_sys::ScrollLogicalPosition::Start,
            ScrollAlign::Center => web_sys::ScrollLogicalPosition::Center,
        });
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, align);
    }
}

//! Image cache for card art, keyed by reference identity.
//!
//! Browsers load images asynchronously and the renderer runs every
//! frame anyway, so there is no load-event wiring: [`AssetCache::ready`]
//! kicks off the fetch on first sight of a reference and simply reports
//! whether the pixels have arrived yet. Repeated lookups hit the cache
//! and never re-trigger a load.

use std::collections::HashMap;

use web_sys::HtmlImageElement;

/// Cache of `HtmlImageElement`s, one per distinct image reference.
#[derive(Default)]
pub struct AssetCache {
    images: HashMap<String, HtmlImageElement>,
}

impl AssetCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The image for `reference`, if it has finished loading.
    ///
    /// On first call for a reference this creates the element and starts
    /// the fetch, returning `None`; later frames poll again.
    pub fn ready(&mut self, reference: &str) -> Option<&HtmlImageElement> {
        if !self.images.contains_key(reference) {
            let Ok(image) = HtmlImageElement::new() else {
                return None;
            };
            image.set_src(reference);
            self.images.insert(reference.to_owned(), image);
        }

        let image = self.images.get(reference)?;
        if image.complete() && image.natural_width() > 0 {
            Some(image)
        } else {
            None
        }
    }
}

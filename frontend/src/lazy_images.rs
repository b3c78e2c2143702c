use log::debug;
use prevos_shared::constants::{LAZY_IMAGE_SELECTOR, LAZY_SRC_ATTR};
use prevos_shared::lazy_image::LazyImageLoader;
use prevos_shared::Result;
use web_sys::Document;

use crate::dom::{query_all, warn_on_err};
use crate::intersection;

pub fn init(document: &Document) -> Result<()> {
    let images = query_all(document, LAZY_IMAGE_SELECTOR)?;
    let mut loader = LazyImageLoader::new();
    for (key, img) in images.iter().enumerate() {
        loader.register(key, img.get_attribute(LAZY_SRC_ATTR).unwrap_or_default());
    }
    let policy = *loader.policy();

    let targets = images.clone();
    intersection::observe(images, &policy, move |batch| {
        loader
            .on_visibility(batch)
            .into_iter()
            .map(|load| {
                if let Some(img) = targets.get(load.key) {
                    warn_on_err("image src", img.set_attribute("src", &load.src));
                    warn_on_err(LAZY_SRC_ATTR, img.remove_attribute(LAZY_SRC_ATTR));
                    debug!("lazy image loaded: {}", load.src);
                }
                load.key
            })
            .collect()
    })
}

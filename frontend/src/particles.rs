use prevos_shared::config::ParticleConfig;
use prevos_shared::constants::{PARTICLES_SELECTOR, PARTICLE_CLASS};
use prevos_shared::particles::generate;
use prevos_shared::Result;
use web_sys::Document;

use crate::dom::{js_err, query_one, set_style};

pub fn init(document: &Document, config: &ParticleConfig) -> Result<()> {
    let Some(container) = query_one(document, PARTICLES_SELECTOR) else {
        return Ok(());
    };

    let mut rng = rand::thread_rng();
    for particle in generate(config, &mut rng) {
        let el = document
            .create_element("div")
            .map_err(|e| js_err("create particle", e))?;
        el.set_class_name(PARTICLE_CLASS);
        for (property, value) in particle.css_properties() {
            set_style(&el, property, &value);
        }
        container
            .append_child(&el)
            .map_err(|e| js_err("append particle", e))?;
    }
    Ok(())
}

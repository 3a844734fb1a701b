use crate::constants::MEDIA_TAG;
use dial_core::VolumeSink;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Applies the dial value to every `<audio>` element on the page at call time.
pub struct MediaVolume {
    document: web::Document,
}

impl MediaVolume {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl VolumeSink for MediaVolume {
    fn set_volume(&self, value: f64) {
        let players = self.document.get_elements_by_tag_name(MEDIA_TAG);
        for i in 0..players.length() {
            if let Some(player) = players
                .item(i)
                .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok())
            {
                player.set_volume(value);
            }
        }
        log::debug!("[media] volume {} on {} players", value, players.length());
    }
}

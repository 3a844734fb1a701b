use dial_core::{Colors, CookieScope, DialConfig, Offset, SurfaceSize};

// Volume applied before any context has written the shared cookie.
pub const DEFAULT_VOLUME: f64 = 0.7;

// Shared cookie entry
pub const COOKIE_PREFIX: &str = "BandcampVolumeControl_";
pub const COOKIE_NAME: &str = "volume";
pub const COOKIE_DOMAIN: &str = ".bandcamp.com";
pub const COOKIE_PATH: &str = "/";

// DOM scaffold
pub const WRAP_CLASS: &str = "bvc-wrap";
pub const HEAD_CLASS: &str = "bvc-head";
pub const TAIL_CLASS: &str = "bvc-tail";

// Window events that end a drag, wherever the pointer is
pub const RELEASE_EVENTS: &[&str] = &["pointerup", "pointercancel"];

// Media elements whose volume follows the dial
pub const MEDIA_TAG: &str = "audio";

// Speaker glyph, http://commons.wikimedia.org/wiki/File:Speaker_Icon.svg
pub const SPEAKER_SVG: &str = r#"<svg viewBox="0 0 75 75"><g><polygon points="39.389,13.769 22.235,28.606 6,28.606 6,47.699 21.989,47.699 39.389,62.75 39.389,13.769" style="stroke-width:5;stroke-linejoin:round;"/><path d="M 48.128,49.03 C 50.057,45.934 51.19,42.291 51.19,38.377 C 51.19,34.399 50.026,30.703 48.043,27.577" style="fill:none;stroke-width:5;stroke-linecap:round"/><path d="M 55.082,20.537 C 58.777,25.523 60.966,31.694 60.966,38.377 C 60.966,44.998 58.815,51.115 55.178,56.076" style="fill:none;stroke-width:5;stroke-linecap:round"/><path d="M 61.71,62.611 C 66.977,55.945 70.128,47.531 70.128,38.378 C 70.128,29.161 66.936,20.696 61.609,14.01" style="fill:none;stroke-width:5;stroke-linecap:round"/></g></svg>"#;

pub fn cookie_scope() -> CookieScope {
    CookieScope {
        prefix: COOKIE_PREFIX.to_string(),
        name: COOKIE_NAME.to_string(),
        domain: COOKIE_DOMAIN.to_string(),
        path: COOKIE_PATH.to_string(),
    }
}

/// Compact dial that fits next to the player controls.
pub fn meter_preset() -> DialConfig {
    DialConfig {
        value: DEFAULT_VOLUME,
        span_angle: 270.0,
        stroke_width: 4.0,
        radius: 15.0,
        offset: Offset {
            top: 20.0,
            left: 20.0,
            angle: 135.0,
        },
        colors: Colors {
            arc: "#ddd".to_string(),
            fill: "#71b2c3".to_string(),
            text: "#629aa9".to_string(),
        },
        font: "10px Arial".to_string(),
        surface: SurfaceSize {
            width: 40,
            height: 40,
        },
    }
}

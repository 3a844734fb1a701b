use crate::constants::{HEAD_CLASS, SPEAKER_SVG, TAIL_CLASS, WRAP_CLASS};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

fn div_with_class(document: &web::Document, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}

/// Build `wrap > (head, tail)` under `parent`: the speaker icon goes in the
/// head and the returned tail is where the dial canvas is mounted.
pub fn build_scaffold(
    document: &web::Document,
    parent: &web::Element,
) -> anyhow::Result<web::Element> {
    let wrap = div_with_class(document, WRAP_CLASS)?;
    let head = div_with_class(document, HEAD_CLASS)?;
    let tail = div_with_class(document, TAIL_CLASS)?;
    head.set_inner_html(SPEAKER_SVG);

    wrap.append_child(&head)
        .and_then(|_| wrap.append_child(&tail))
        .and_then(|_| parent.append_child(&wrap))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    Ok(tail)
}

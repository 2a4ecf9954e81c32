// File: crates/pancake-core/tests/markup.rs
// Purpose: Node tree serialization: escaping, raw opt-in, class renaming, nesting order.

use pancake_core::tags::{div, h2, p, path, span};
use pancake_core::{h, Node, Tag};

#[test]
fn text_is_escaped_by_default() {
    assert_eq!(Node::text(r#"<b>&"'"#).render(), "&lt;b&gt;&amp;&quot;&#x27;");
}

#[test]
fn raw_text_is_verbatim() {
    assert_eq!(Node::raw(r#"<b>&"'"#).render(), r#"<b>&"'"#);
}

#[test]
fn raw_only_applies_to_children_not_attributes() {
    let out = span().attr("title", "&rarr;").raw_child("407.65 ppm &rarr;").render();
    assert_eq!(out, r#"<span title="&amp;rarr;">407.65 ppm &rarr;</span>"#);
}

#[test]
fn attribute_names_are_escaped_too() {
    let out = div().attr("a\"b", 1).render();
    assert_eq!(out, r#"<div a&quot;b="1"></div>"#);
}

#[test]
fn children_render_in_insertion_order() {
    let out = div()
        .class_name("text")
        .child(h2().text("Atmospheric CO₂"))
        .child(
            p().child(span().style("color: #676778").text("•"))
                .child(span().raw_child("monthly average&nbsp;&nbsp;&nbsp;"))
                .child(span().style("color: #ff3e00").text("—"))
                .child(span().text("trend")),
        )
        .render();
    assert_eq!(
        out,
        "<div class=\"text\"><h2>Atmospheric CO₂</h2><p>\
         <span style=\"color: #676778\">•</span>\
         <span>monthly average&nbsp;&nbsp;&nbsp;</span>\
         <span style=\"color: #ff3e00\">—</span>\
         <span>trend</span></p></div>"
    );
}

#[test]
fn path_data_attribute() {
    let out = path().class_name("trend").attr("d", "M0,100L50,0").render();
    assert_eq!(out, r#"<path class="trend" d="M0,100L50,0"></path>"#);
}

#[test]
fn hyperscript_accepts_empty_parts() {
    let out = h(Tag::Em, Vec::<(&str, &str)>::new(), ["no js needed"]).render();
    assert_eq!(out, "<em>no js needed</em>");
}

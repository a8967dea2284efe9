use markdom::{to_html, Element, Tag};

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_render_attribute_order() {
    let el = Element::div()
        .id("f")
        .class("field field-toggle")
        .attr("title", "t")
        .data("on", "true");
    assert_eq!(
        to_html(&el),
        r#"<div id="f" class="field field-toggle" title="t" data-on="true"></div>"#
    );
}

#[test]
fn test_render_void_and_flags() {
    let el = Element::text_input("hi")
        .id("in")
        .flag("autofocus", true)
        .disabled(true);
    assert_eq!(
        to_html(&el),
        r#"<input id="in" autofocus type="text" value="hi" disabled/>"#
    );
}

#[test]
fn test_text_is_escaped_markup_is_not() {
    let text = Element::text("<b>&</b>").id("t");
    assert_eq!(to_html(&text), r#"<span id="t">&lt;b&gt;&amp;&lt;/b&gt;</span>"#);

    let raw = Element::new(Tag::Label).id("l").markup("Line<br/>two");
    assert_eq!(to_html(&raw), r#"<label id="l">Line<br/>two</label>"#);
}

#[test]
fn test_attribute_values_are_escaped() {
    let el = Element::text_input(r#"say "hi""#).id("q");
    assert!(to_html(&el).contains(r#"value="say &quot;hi&quot;""#));
}

#[test]
fn test_nested_children_render_in_order() {
    let el = Element::new(Tag::Ul)
        .id("u")
        .child(Element::new(Tag::Li).id("a").content_text("1"))
        .child(Element::new(Tag::Li).id("b").content_text("2"));
    assert_eq!(
        to_html(&el),
        r#"<ul id="u"><li id="a">1</li><li id="b">2</li></ul>"#
    );
}

#[test]
fn test_class_builder_dedupes_and_splits() {
    let el = Element::div().class("a b").class("b").classes(["c", "a"]);
    assert_eq!(el.classes, vec!["a", "b", "c"]);
}

use markdom::{Color, Document, Element, Rule, Selector, StyleSheet, Tag};

fn toggle(on: bool) -> Element {
    Element::div()
        .id("root")
        .child(
            Element::div()
                .id("field")
                .class("field field-toggle")
                .data("on", on.to_string())
                .child(Element::div().id("knob").class("toggle")),
        )
}

fn sheet() -> StyleSheet {
    StyleSheet::new()
        .rule(Rule::new(".toggle").unwrap().decl("left", "-0.2em"))
        .rule(
            Rule::new(".field-toggle[data-on=true] .toggle")
                .unwrap()
                .decl("left", "calc(100% - 1.8em)")
                .color("background", &Color::rgb(200, 200, 200)),
        )
}

// ============================================================================
// Selector parsing and matching
// ============================================================================

#[test]
fn test_parse_compound_parts() {
    let sel = Selector::parse("div#a.b.c[data-on=true][disabled]").unwrap();
    let compound = &sel.compounds()[0];
    assert_eq!(compound.tag, Some(Tag::Div));
    assert_eq!(compound.id.as_deref(), Some("a"));
    assert_eq!(compound.classes, vec!["b", "c"]);
    assert_eq!(compound.attrs.len(), 2);
    assert_eq!(compound.attrs[1].value, None);
}

#[test]
fn test_parse_errors() {
    assert!(Selector::parse("").is_err());
    assert!(Selector::parse("blink").is_err());
    assert!(Selector::parse(".").is_err());
    assert!(Selector::parse("[x=1").is_err());
    assert!(Selector::parse("a>b").is_err());
}

#[test]
fn test_quoted_attribute_values() {
    let el = Element::div().data("display", "true");
    let sel: Selector = r#"[data-display="true"]"#.parse().unwrap();
    assert!(sel.matches(&el, &[]));
}

#[test]
fn test_descendant_needs_matching_ancestor() {
    let sel = Selector::parse(".menu li").unwrap();
    let li = Element::new(Tag::Li);
    let menu = Element::div().class("menu");
    let other = Element::div().class("other");
    assert!(sel.matches(&li, &[&other, &menu]));
    assert!(!sel.matches(&li, &[&other]));
    assert!(!sel.matches(&li, &[]));
}

// ============================================================================
// Cascade
// ============================================================================

#[test]
fn test_state_rule_overrides_base_rule() {
    let mut doc = Document::new();
    doc.mount(toggle(true)).unwrap();
    let computed = sheet().computed(&doc, "knob");
    assert_eq!(computed.get("left").map(String::as_str), Some("calc(100% - 1.8em)"));
    assert_eq!(
        computed.get("background").map(String::as_str),
        Some("rgb(200, 200, 200)")
    );
}

#[test]
fn test_state_rule_skipped_when_flag_off() {
    let mut doc = Document::new();
    doc.mount(toggle(false)).unwrap();
    let computed = sheet().computed(&doc, "knob");
    assert_eq!(computed.get("left").map(String::as_str), Some("-0.2em"));
    assert!(!computed.contains_key("background"));
}

#[test]
fn test_computed_for_unknown_id_is_empty() {
    let mut doc = Document::new();
    doc.mount(toggle(true)).unwrap();
    assert!(sheet().computed(&doc, "ghost").is_empty());
}

#[test]
fn test_to_css_serializes_rules_in_order() {
    let css = sheet().to_css();
    let base = css.find(".toggle {").unwrap();
    let state = css.find(".field-toggle[data-on=true] .toggle {").unwrap();
    assert!(base < state);
    assert!(css.contains("  left: -0.2em;\n"));
}

#[test]
fn test_color_css_forms() {
    assert_eq!(Color::rgba(0, 0, 0, 0.1).to_css(), "rgba(0, 0, 0, 0.1)");
    assert_eq!(Color::var("--color-controlBackground").to_css(), "var(--color-controlBackground)");
    assert_eq!(Color::oklch(1.0, 0.0, 0.0).to_rgb().r, 255);
}

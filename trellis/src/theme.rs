//! Default look for the widgets.
//!
//! Styling is kept apart from behavior: every rule keys on the classes and
//! `data-*` state attributes the widgets render, so a different sheet can
//! replace this one without touching widget code.

use markdom::{Color, DomError, Rule, StyleSheet};

/// Colors used by the default sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    pub label: Color,
    pub shadow: Color,
    pub knob: Color,
    pub knob_on: Color,
    pub menu_background: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            label: Color::rgb(120, 120, 120),
            shadow: Color::rgba(0, 0, 0, 0.1),
            knob: Color::rgb(220, 220, 220),
            knob_on: Color::rgb(200, 200, 200),
            menu_background: Color::var("--color-activeBackground"),
        }
    }
}

/// The default sheet with the default colors.
pub fn default_stylesheet() -> Result<StyleSheet, DomError> {
    stylesheet(&ThemeColors::default())
}

/// The default sheet with custom colors.
pub fn stylesheet(colors: &ThemeColors) -> Result<StyleSheet, DomError> {
    let mut sheet = StyleSheet::new();
    sheet.extend(field_rules(colors)?);
    sheet.extend(toggle_rules(colors)?);
    sheet.extend(search_rules()?);
    sheet.extend(radio_rules()?);
    sheet.extend(menu_rules(colors)?);
    Ok(sheet)
}

fn field_rules(colors: &ThemeColors) -> Result<StyleSheet, DomError> {
    Ok(StyleSheet::new()
        .rule(
            Rule::new(".field")?
                .decl("position", "relative")
                .decl("display", "flex")
                .decl("flex-direction", "column")
                .decl("align-items", "center"),
        )
        .rule(Rule::new(".field[data-inline=true]")?.decl("flex-direction", "row"))
        .rule(
            Rule::new(".field-label")?
                .decl("font-size", "0.6em")
                .decl("text-transform", "uppercase")
                .decl("white-space", "pre-line")
                .decl("text-align", "right")
                .decl("opacity", "0.8")
                .color("color", &colors.label),
        )
        .rule(Rule::new(".field[data-inline=true] .field-label")?.decl("margin-right", "0.4em"))
        .rule(
            Rule::new(".field .children")?
                .decl("display", "block")
                .decl("width", "100%")
                .decl("border-radius", "2.2em")
                .decl("overflow", "hidden")
                .decl("box-shadow", format!("0 0 1.2rem {}", colors.shadow.to_css())),
        )
        .rule(
            Rule::new(".field .prefix")?
                .decl("position", "absolute")
                .decl("left", "1em")
                .decl("opacity", "0.4")
                .decl("pointer-events", "none"),
        )
        .rule(
            Rule::new(".field .suffix")?
                .decl("position", "absolute")
                .decl("right", "1em")
                .decl("opacity", "0.4")
                .decl("pointer-events", "none"),
        )
        .rule(
            Rule::new(".field input")?
                .decl("border", "none")
                .decl("padding", "1.1rem 3rem")
                .decl("width", "100%"),
        )
        .rule(
            Rule::new(".field select")?
                .decl("border", "none")
                .decl("padding", "1.1rem 3rem")
                .decl("width", "100%")
                .decl("cursor", "pointer")
                .decl("appearance", "none")
                .decl("background-color", "transparent"),
        ))
}

fn toggle_rules(colors: &ThemeColors) -> Result<StyleSheet, DomError> {
    Ok(StyleSheet::new()
        .rule(
            Rule::new(".field-toggle")?
                .decl("cursor", "pointer")
                .decl("overflow", "visible"),
        )
        .rule(
            Rule::new(".field-toggle .children")?
                .decl("overflow", "visible")
                .decl("margin", "0.2em"),
        )
        .rule(
            Rule::new(".field-toggle .toggle")?
                .decl("width", "3em")
                .decl("height", "1.6em")
                .decl("position", "relative")
                .decl("--knob-left", "-0.2em")
                .color("--knob-color", &colors.knob),
        )
        .rule(
            Rule::new(".field-toggle[data-on=true] .toggle")?
                .decl("--knob-left", "calc(100% - 1.8em)")
                .color("--knob-color", &colors.knob_on),
        ))
}

fn search_rules() -> Result<StyleSheet, DomError> {
    Ok(StyleSheet::new()
        .rule(
            Rule::new(".field-search .suffix .icon-clear")?
                .decl("opacity", "0")
                .decl("pointer-events", "none")
                .decl("transform", "translateX(50%)")
                .decl("cursor", "pointer"),
        )
        .rule(
            Rule::new(".field-search .suffix .icon-clear[data-display=true]")?
                .decl("opacity", "0.4")
                .decl("pointer-events", "all")
                .decl("transform", "translateX(0)"),
        ))
}

fn radio_rules() -> Result<StyleSheet, DomError> {
    Ok(StyleSheet::new().rule(
        Rule::new(".field-radiogroup .children")?
            .decl("display", "flex")
            .decl("box-shadow", "none")
            .decl("overflow", "visible"),
    ))
}

fn menu_rules(colors: &ThemeColors) -> Result<StyleSheet, DomError> {
    Ok(StyleSheet::new()
        .rule(Rule::new(".menu-container")?.decl("position", "relative"))
        .rule(
            Rule::new(".menu")?
                .decl("position", "absolute")
                .decl("top", "2rem")
                .decl("border-radius", "1rem")
                .decl("white-space", "nowrap")
                .decl("margin-top", "0.25rem")
                .decl("z-index", "10")
                .color("background", &colors.menu_background),
        )
        .rule(
            Rule::new(".menu[data-align=left]")?
                .decl("left", "0px")
                .decl("max-width", "100%")
                .decl("width", "100%"),
        )
        .rule(
            Rule::new(".menu[data-align=right]")?
                .decl("right", "0px")
                .decl("max-width", "max-content"),
        )
        .rule(
            Rule::new(".menu ul")?
                .decl("padding", "0")
                .decl("margin", "0"),
        )
        .rule(
            Rule::new(".menu li")?
                .decl("display", "block")
                .decl("padding", "1rem 1.5rem"),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sheet_parses() {
        let sheet = default_stylesheet().expect("default sheet");
        assert!(!sheet.rules().is_empty());
        let css = sheet.to_css();
        assert!(css.contains(".field-toggle[data-on=true] .toggle {"));
        assert!(css.contains("var(--color-activeBackground)"));
    }
}

//! Style translation into each CSS dialect.
//!
//! The Tailwind mapping is a fixed set of lookup tables, not a converter:
//! generated code depends on these exact class names.

use convert_case::{Case, Casing};
use trellis_core::{StyleMap, StyleValue, VisualComponent};

use crate::config::CssFramework;

/// Hex colors with a named Tailwind token. Anything else maps to gray-500.
const TAILWIND_COLORS: &[(&str, &str)] = &[
    ("#ffffff", "white"),
    ("#000000", "black"),
    ("#ef4444", "red-500"),
    ("#3b82f6", "blue-500"),
    ("#22c55e", "green-500"),
    ("#eab308", "yellow-500"),
    ("#a855f7", "purple-500"),
];

const TAILWIND_FALLBACK_COLOR: &str = "gray-500";

const TAILWIND_FONT_SIZES: &[(&str, &str)] = &[
    ("12px", "text-xs"),
    ("14px", "text-sm"),
    ("16px", "text-base"),
    ("18px", "text-lg"),
    ("20px", "text-xl"),
    ("24px", "text-2xl"),
    ("30px", "text-3xl"),
];

const TAILWIND_FONT_WEIGHTS: &[(&str, &str)] = &[
    ("300", "font-light"),
    ("400", "font-normal"),
    ("500", "font-medium"),
    ("600", "font-semibold"),
    ("700", "font-bold"),
    ("800", "font-extrabold"),
];

const TAILWIND_RADII: &[(&str, &str)] = &[
    ("0px", "rounded-none"),
    ("2px", "rounded-sm"),
    ("4px", "rounded"),
    ("6px", "rounded-md"),
    ("8px", "rounded-lg"),
    ("12px", "rounded-xl"),
    ("16px", "rounded-2xl"),
];

/// Upper bound (inclusive) of each spacing bucket and its scale step.
const TAILWIND_SPACING: &[(i64, &str)] = &[
    (4, "1"),
    (8, "2"),
    (12, "3"),
    (16, "4"),
    (20, "5"),
    (24, "6"),
];

const TAILWIND_SPACING_CEILING: &str = "8";

const TAILWIND_DISPLAYS: &[&str] = &["flex", "grid", "block", "inline-block"];

/// Class string for a component in the given dialect.
///
/// Custom and Material produce no classes.
pub fn class_names(component: &VisualComponent, css: CssFramework) -> String {
    match css {
        CssFramework::Tailwind => tailwind_classes(&component.styles),
        CssFramework::Bootstrap => bootstrap_classes(&component.component_type).to_string(),
        CssFramework::Material | CssFramework::Custom => String::new(),
    }
}

/// Tailwind utility classes for a style bag.
///
/// Tokens come out in a fixed order: display, padding, margin, background,
/// text color, font size, font weight, border, border radius.
pub fn tailwind_classes(styles: &StyleMap) -> String {
    let mut classes: Vec<String> = Vec::new();

    if let Some(display) = set_value(styles, "display") {
        let display = display.to_string();
        if TAILWIND_DISPLAYS.contains(&display.as_str()) {
            classes.push(display);
        }
    }
    if let Some(padding) = set_value(styles, "padding") {
        classes.push(format!("p-{}", spacing_step(padding)));
    }
    if let Some(margin) = set_value(styles, "margin") {
        classes.push(format!("m-{}", spacing_step(margin)));
    }
    if let Some(background) = set_value(styles, "backgroundColor") {
        classes.push(format!("bg-{}", color_token(background)));
    }
    if let Some(color) = set_value(styles, "color") {
        classes.push(format!("text-{}", color_token(color)));
    }
    if let Some(size) = set_value(styles, "fontSize") {
        classes.push(lookup(TAILWIND_FONT_SIZES, &size.to_string(), "text-base").to_string());
    }
    if let Some(weight) = set_value(styles, "fontWeight") {
        classes.push(lookup(TAILWIND_FONT_WEIGHTS, &weight.to_string(), "font-normal").to_string());
    }
    if set_value(styles, "border").is_some() {
        classes.push("border".to_string());
    }
    if let Some(radius) = set_value(styles, "borderRadius") {
        classes.push(lookup(TAILWIND_RADII, &radius.to_string(), "rounded").to_string());
    }

    classes.join(" ")
}

/// Bootstrap classes are driven by component type, not styles.
pub fn bootstrap_classes(component_type: &str) -> &'static str {
    match component_type {
        "Button" => "btn btn-primary",
        "Input" => "form-control",
        "Container" => "container",
        "Row" => "row",
        "Column" => "col",
        _ => "",
    }
}

/// Spacing scale step for a pixel value.
pub fn spacing_step(value: &StyleValue) -> &'static str {
    let Some(px) = parse_leading_int(&value.to_string()) else {
        return TAILWIND_SPACING_CEILING;
    };
    TAILWIND_SPACING
        .iter()
        .find(|(limit, _)| px <= *limit)
        .map(|(_, step)| *step)
        .unwrap_or(TAILWIND_SPACING_CEILING)
}

/// Tailwind color token for a hex value, compared case-insensitively.
pub fn color_token(value: &StyleValue) -> &'static str {
    let hex = value.to_string().to_lowercase();
    lookup(TAILWIND_COLORS, &hex, TAILWIND_FALLBACK_COLOR)
}

/// Leading integer of a string: optional whitespace and sign, then digits.
///
/// Anything after the digits is ignored; no digits means no number.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }
    let n: i64 = digits.parse().ok()?;
    Some(if negative { -n } else { n })
}

/// Inline style declarations with kebab-case keys, nulls dropped.
pub fn inline_declarations(styles: &StyleMap) -> Vec<(String, String)> {
    styles
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.to_case(Case::Kebab), value.to_string()))
        .collect()
}

/// JSX `style` attribute value: `{{ "padding": "16px" }}`.
pub fn jsx_style_object(styles: &StyleMap) -> Option<String> {
    let declarations = inline_declarations(styles);
    if declarations.is_empty() {
        return None;
    }
    let entries = declarations
        .iter()
        .map(|(key, value)| format!("\"{}\": \"{}\"", key, value))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("{{{{ {} }}}}", entries))
}

/// CSS declaration list for an HTML `style` attribute.
pub fn css_declarations(styles: &StyleMap) -> Option<String> {
    let declarations = inline_declarations(styles);
    if declarations.is_empty() {
        return None;
    }
    Some(
        declarations
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("; "),
    )
}

fn set_value<'a>(styles: &'a StyleMap, key: &str) -> Option<&'a StyleValue> {
    styles.get(key).filter(|v| v.is_set())
}

fn lookup(table: &[(&str, &'static str)], key: &str, fallback: &'static str) -> &'static str {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn styles(pairs: &[(&str, StyleValue)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_spacing_buckets_at_boundaries() {
        let cases = [
            (4, "1"),
            (8, "2"),
            (12, "3"),
            (16, "4"),
            (20, "5"),
            (24, "6"),
            (25, "8"),
            (100, "8"),
        ];
        for (px, step) in cases {
            assert_eq!(spacing_step(&StyleValue::from(format!("{}px", px))), step, "{}px", px);
        }
    }

    #[test]
    fn test_padding_and_margin_classes() {
        let s = styles(&[("padding", "8px".into()), ("margin", "16px".into())]);
        assert_eq!(tailwind_classes(&s), "p-2 m-4");
        let s = styles(&[("padding", "100px".into())]);
        assert_eq!(tailwind_classes(&s), "p-8");
    }

    #[test]
    fn test_spacing_parses_like_parse_int() {
        assert_eq!(spacing_step(&StyleValue::from("8px 16px")), "2");
        assert_eq!(spacing_step(&StyleValue::from(12)), "3");
        assert_eq!(spacing_step(&StyleValue::from("0px")), "1");
        assert_eq!(spacing_step(&StyleValue::from("-4px")), "1");
        assert_eq!(spacing_step(&StyleValue::from("auto")), "8");
        assert_eq!(spacing_step(&StyleValue::from("px8")), "8");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("  42abc"), Some(42));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("+3px"), Some(3));
        assert_eq!(parse_leading_int("1.9"), Some(1));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_color_fallback() {
        let s = styles(&[("backgroundColor", "#123456".into())]);
        assert_eq!(tailwind_classes(&s), "bg-gray-500");
        let s = styles(&[("backgroundColor", "#FFFFFF".into())]);
        assert_eq!(tailwind_classes(&s), "bg-white");
        let s = styles(&[("color", "#EF4444".into())]);
        assert_eq!(tailwind_classes(&s), "text-red-500");
    }

    #[test]
    fn test_display_exact_match_only() {
        assert_eq!(tailwind_classes(&styles(&[("display", "grid".into())])), "grid");
        assert_eq!(
            tailwind_classes(&styles(&[("display", "inline-block".into())])),
            "inline-block"
        );
        assert_eq!(tailwind_classes(&styles(&[("display", "inline-flex".into())])), "");
    }

    #[test]
    fn test_typography_tables_and_fallbacks() {
        let s = styles(&[("fontSize", "24px".into()), ("fontWeight", "700".into())]);
        assert_eq!(tailwind_classes(&s), "text-2xl font-bold");
        let s = styles(&[("fontSize", "13px".into()), ("fontWeight", "bold".into())]);
        assert_eq!(tailwind_classes(&s), "text-base font-normal");
        let s = styles(&[("fontWeight", StyleValue::from(600))]);
        assert_eq!(tailwind_classes(&s), "font-semibold");
    }

    #[test]
    fn test_border_and_radius() {
        let s = styles(&[("border", "1px solid #000".into()), ("borderRadius", "8px".into())]);
        assert_eq!(tailwind_classes(&s), "border rounded-lg");
        let s = styles(&[("borderRadius", "50%".into())]);
        assert_eq!(tailwind_classes(&s), "rounded");
    }

    #[test]
    fn test_class_order_is_fixed() {
        let s = styles(&[
            ("borderRadius", "4px".into()),
            ("border", "1px solid".into()),
            ("fontWeight", "500".into()),
            ("fontSize", "14px".into()),
            ("color", "#000000".into()),
            ("backgroundColor", "#3b82f6".into()),
            ("margin", "4px".into()),
            ("padding", "20px".into()),
            ("display", "flex".into()),
        ]);
        assert_eq!(
            tailwind_classes(&s),
            "flex p-5 m-1 bg-blue-500 text-black text-sm font-medium border rounded"
        );
    }

    #[test]
    fn test_unset_values_emit_nothing() {
        let s = styles(&[
            ("padding", StyleValue::Null),
            ("margin", "".into()),
            ("border", StyleValue::from(0)),
        ]);
        assert_eq!(tailwind_classes(&s), "");
    }

    #[test]
    fn test_bootstrap_classes_by_type() {
        assert_eq!(bootstrap_classes("Button"), "btn btn-primary");
        assert_eq!(bootstrap_classes("Input"), "form-control");
        assert_eq!(bootstrap_classes("Container"), "container");
        assert_eq!(bootstrap_classes("Row"), "row");
        assert_eq!(bootstrap_classes("Column"), "col");
        assert_eq!(bootstrap_classes("Heading"), "");
    }

    #[test]
    fn test_material_and_custom_have_no_classes() {
        let c = VisualComponent::new("Button").with_style("padding", "8px");
        assert_eq!(class_names(&c, CssFramework::Material), "");
        assert_eq!(class_names(&c, CssFramework::Custom), "");
        assert_eq!(class_names(&c, CssFramework::Tailwind), "p-2");
        assert_eq!(class_names(&c, CssFramework::Bootstrap), "btn btn-primary");
    }

    #[test]
    fn test_inline_styles() {
        let s = styles(&[
            ("backgroundColor", "#fff".into()),
            ("padding", StyleValue::from(16)),
            ("margin", StyleValue::Null),
        ]);
        assert_eq!(
            jsx_style_object(&s).unwrap(),
            r##"{{ "background-color": "#fff", "padding": "16" }}"##
        );
        assert_eq!(css_declarations(&s).unwrap(), "background-color: #fff; padding: 16");
        assert!(jsx_style_object(&StyleMap::new()).is_none());
    }

    proptest! {
        #[test]
        fn prop_spacing_step_is_monotonic(a in 0i64..200, b in 0i64..200) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let step = |px: i64| spacing_step(&StyleValue::from(format!("{}px", px))).parse::<u32>().unwrap();
            prop_assert!(step(lo) <= step(hi));
        }
    }
}

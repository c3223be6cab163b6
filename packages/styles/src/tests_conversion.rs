// Forward conversion tests: declarations -> utility classes

use crate::{CssProperty, ProjectConfig, StyleEngine, StyleError};

fn config() -> ProjectConfig {
    ProjectConfig::default()
        .with_named_color("primary", "#3366FF")
        .with_named_color("muted", "#888888")
        .with_named_style("card", "padding: 16; border-radius: 8")
        .with_named_style("heading", "font-size: 24; font-weight: 700")
}

fn convert(raw: &str) -> String {
    let config = config();
    StyleEngine::from_config(&config)
        .convert_declaration(raw)
        .unwrap()
}

fn convert_all(styles: &[&str]) -> Vec<String> {
    let config = config();
    StyleEngine::from_config(&config)
        .convert_declarations(styles)
        .unwrap()
}

#[test]
fn test_builtin_tokens_convert_to_themselves() {
    for token in ["flex", "w-full", "items-center", "justify-between", "truncate"] {
        assert_eq!(convert(token), token);
    }
}

#[test]
fn test_composite_tokens_expand() {
    assert_eq!(convert("row"), "flex flex-row");
    assert_eq!(convert("column"), "flex flex-col");
    assert_eq!(convert("center"), "flex items-center justify-center");
}

#[test]
fn test_pixel_properties() {
    assert_eq!(convert("width: 120"), "w-[120px]");
    assert_eq!(convert("padding-top: 8"), "pt-[8px]");
    assert_eq!(convert("gap: 1.5"), "gap-[1.5px]");
    assert_eq!(convert("border-radius: 4"), "rounded-[4px]");
    assert_eq!(convert("font-size: 14"), "text-[14px]");
    assert_eq!(convert("top: -2"), "top-[-2px]");
}

#[test]
fn test_units_pass_through() {
    assert_eq!(convert("width: 50%"), "w-[50%]");
    assert_eq!(convert("height: 2rem"), "h-[2rem]");
    assert_eq!(convert("line-height: 1.5"), "leading-[1.5]");
}

#[test]
fn test_extent_keywords() {
    assert_eq!(convert("width: 100%"), "w-full");
    assert_eq!(convert("height: 100%"), "h-full");
    assert_eq!(convert("width: fit-content"), "w-fit");
    assert_eq!(convert("max-width: 100%"), "max-w-full");
    assert_eq!(convert("margin-left: auto"), "ml-auto");
}

#[test]
fn test_box_shorthands() {
    assert_eq!(convert("padding: 8"), "p-[8px]");
    assert_eq!(convert("padding: 8 16"), "py-[8px] px-[16px]");
    assert_eq!(convert("margin: 0 auto"), "my-[0px] mx-auto");
    assert_eq!(convert("padding: 1 2 3"), "pt-[1px] px-[2px] pb-[3px]");
    assert_eq!(convert("padding: 1 2 3 4"), "pt-[1px] pr-[2px] pb-[3px] pl-[4px]");
}

#[test]
fn test_flex_keywords() {
    assert_eq!(convert("display: flex"), "flex");
    assert_eq!(convert("display: none"), "hidden");
    assert_eq!(convert("flex-direction: column"), "flex-col");
    assert_eq!(convert("justify-content: space-between"), "justify-between");
    assert_eq!(convert("justify-content: flex-end"), "justify-end");
    assert_eq!(convert("align-items: center"), "items-center");
}

#[test]
fn test_unknown_keyword_becomes_arbitrary_property() {
    assert_eq!(convert("cursor: zoom-in"), "[cursor:zoom-in]");
    assert_eq!(convert("display: table-cell"), "[display:table-cell]");
}

#[test]
fn test_font_weight() {
    assert_eq!(convert("font-weight: 600"), "font-semibold");
    assert_eq!(convert("font-weight: bold"), "font-bold");
    assert_eq!(convert("font-weight: bolder"), "[font-weight:bolder]");
}

#[test]
fn test_palette_colors() {
    assert_eq!(convert("color: primary"), "text-[#3366FF]");
    assert_eq!(convert("background-color: muted"), "bg-[#888888]");
    assert_eq!(convert("color: Primary"), "text-[Primary]");
    assert_eq!(convert("color: #000"), "text-[#000]");
}

#[test]
fn test_border_shorthand() {
    assert_eq!(convert("border: 1px solid primary"), "border border-[#3366FF]");
    assert_eq!(convert("border: 1 solid red"), "border border-[red]");
    assert_eq!(
        convert("border-top: 2 dashed muted"),
        "border-t-[2px] [border-top-style:dashed] border-t-[#888888]"
    );
    assert_eq!(convert("border: none"), "border-0");
    assert_eq!(convert("border-bottom: 3"), "border-b-[3px]");
}

#[test]
fn test_arbitrary_values_escape_spaces() {
    assert_eq!(
        convert("box-shadow: 0 1px 2px #000"),
        "shadow-[0_1px_2px_#000]"
    );
}

#[test]
fn test_pseudo_prefixes() {
    assert_eq!(convert("hover:color: primary"), "hover:text-[#3366FF]");
    assert_eq!(convert("md:hover:padding: 4 8"), "md:hover:py-[4px] md:hover:px-[8px]");
    assert_eq!(convert("focus:flex"), "focus:flex");
}

#[test]
fn test_named_styles() {
    assert_eq!(convert("card"), "p-[16px] rounded-[8px]");
    assert_eq!(convert("hover:heading"), "hover:text-[24px] hover:font-bold");
}

#[test]
fn test_conditional_values() {
    assert_eq!(
        convert("color: {props.active} ? red : blue"),
        "${props.active ? 'text-[red]' : 'text-[blue]'}"
    );
    assert_eq!(
        convert("hover:display: props.open ? flex"),
        "${props.open ? 'hover:flex' : ''}"
    );
    assert_eq!(
        convert("padding: {dense} ? 4 8 : 8"),
        "${dense ? 'py-[4px] px-[8px]' : 'p-[8px]'}"
    );
}

#[test]
fn test_unsupported_declarations() {
    let engine = StyleEngine::standalone();
    assert_eq!(
        engine.convert_declaration("grid-area: main").unwrap_err(),
        StyleError::unsupported("grid-area", "main")
    );
    assert_eq!(
        engine.convert_declaration("not-a-token").unwrap_err(),
        StyleError::unsupported("not-a-token", "")
    );
    assert!(engine.convert_declaration("padding: 1 2 3 4 5").is_err());
    assert!(engine
        .convert_declaration("color: {on} ? red : grid-area")
        .is_ok());
}

#[test]
fn test_symmetric_padding_merges() {
    assert_eq!(
        convert_all(&["padding-top: 8", "padding-bottom: 8"]),
        vec!["py-[8px]"]
    );
    assert_eq!(
        convert_all(&["margin-left: 4", "flex", "margin-right: 4"]),
        vec!["mx-[4px]", "flex"]
    );
    assert_eq!(
        convert_all(&["width: 32", "height: 32"]),
        vec!["size-[32px]"]
    );
    assert_eq!(
        convert_all(&["padding-top: 8", "padding-bottom: 4"]),
        vec!["pt-[8px]", "pb-[4px]"]
    );
}

#[test]
fn test_conversion_errors_stop_the_list() {
    let engine = StyleEngine::standalone();
    let result = engine.convert_declarations(&["flex", "float: left"]);
    assert_eq!(
        result.unwrap_err(),
        StyleError::unsupported("float", "left")
    );
}

#[test]
fn test_class_attribute() {
    let engine = StyleEngine::standalone();
    assert_eq!(
        engine.class_attribute(&["flex", "padding: 4"]).unwrap(),
        "\"flex p-[4px]\""
    );
    assert_eq!(
        engine
            .class_attribute(&["flex", "color: {on} ? red"])
            .unwrap(),
        "{`flex ${on ? 'text-[red]' : ''}`}"
    );
    assert_eq!(engine.class_attribute::<&str>(&[]).unwrap(), "\"\"");
}

#[test]
fn test_plain_border_token() {
    assert_eq!(convert("border"), "border");
    assert_eq!(convert("hover:border"), "hover:border");

    let config = config();
    let css = StyleEngine::from_config(&config)
        .resolve("border", |_| None)
        .unwrap();
    assert_eq!(
        css.properties,
        vec![
            CssProperty::new("border-width", "1px"),
            CssProperty::new("border-style", "solid")
        ]
    );
}

#[test]
fn test_palette_wins_over_named_style() {
    let config = config().with_named_style("color: primary", "font-weight: 700");
    let engine = StyleEngine::from_config(&config);

    assert_eq!(
        engine.convert_declaration("color: primary").unwrap(),
        "text-[#3366FF]"
    );
    assert_eq!(
        engine.resolve("color: primary", |_| None).unwrap().properties,
        vec![CssProperty::new("color", "#3366FF")]
    );

    // a non-palette value still reaches the named style
    let config = config.with_named_style("color: brand", "font-weight: 700");
    let engine = StyleEngine::from_config(&config);
    assert_eq!(engine.convert_declaration("color: brand").unwrap(), "font-bold");
}

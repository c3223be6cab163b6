// Reverse conversion tests: inline CSS / class lists -> declarations

use crate::{CssProperty, ProjectConfig, StyleEngine};

fn config() -> ProjectConfig {
    ProjectConfig::default()
        .with_named_color("primary", "#3366FF")
        .with_named_color("ink", "#111111")
}

fn import_css(css: &str) -> Vec<String> {
    let config = config();
    StyleEngine::from_config(&config).convert_css_text(css)
}

fn import_classes(classes: &str) -> Vec<String> {
    let config = config();
    StyleEngine::from_config(&config).convert_class_list(classes)
}

#[test]
fn test_pixels_are_stripped() {
    assert_eq!(
        import_css("width: 120px; height: 50%; font-size: 14px"),
        vec!["width: 120", "height: 50%", "font-size: 14"]
    );
}

#[test]
fn test_palette_names_are_restored() {
    assert_eq!(
        import_css("color: #3366ff; background-color: #fafafa"),
        vec!["color: primary", "background-color: #fafafa"]
    );
}

#[test]
fn test_outline_becomes_border() {
    assert_eq!(
        import_css("outline: 1px solid #111111; outline-offset: -1px; color: red"),
        vec!["border: 1 solid ink", "color: red"]
    );

    // an explicit border wins
    assert_eq!(
        import_css("border: 2px solid red; outline: 1px solid blue; outline-offset: -1px"),
        vec!["border: 2 solid red", "outline: 1 solid blue", "outline-offset: -1"]
    );

    // any other offset is kept as is
    assert_eq!(
        import_css("outline: 1px solid red; outline-offset: 2px"),
        vec!["outline: 1 solid red", "outline-offset: 2"]
    );
}

#[test]
fn test_padding_collapse() {
    assert_eq!(
        import_css("padding-top: 8px; padding-right: 8px; padding-bottom: 8px; padding-left: 8px"),
        vec!["padding: 8"]
    );
    assert_eq!(
        import_css("padding-left: 16px; padding-top: 8px; padding-right: 16px; padding-bottom: 8px"),
        vec!["padding: 8 16"]
    );
    assert_eq!(
        import_css("padding-top: 1px; padding-right: 2px; padding-bottom: 3px; padding-left: 4px"),
        vec![
            "padding-top: 1",
            "padding-right: 2",
            "padding-bottom: 3",
            "padding-left: 4"
        ]
    );
}

#[test]
fn test_margin_collapse() {
    assert_eq!(
        import_css("color: red; margin-top: 0; margin-bottom: 0; margin-left: auto; margin-right: auto"),
        vec!["color: red", "margin: 0 auto"]
    );
}

#[test]
fn test_builtin_tokens_recognized() {
    assert_eq!(
        import_css("display: flex; flex-direction: column; gap: 4px"),
        vec!["column", "gap: 4"]
    );
    assert_eq!(
        import_css("justify-content: center; display: flex; align-items: center"),
        vec!["center"]
    );
    assert_eq!(import_css("width: 100%; height: 100%"), vec!["size-full"]);
    assert_eq!(import_css("display: FLEX"), vec!["flex"]);
}

#[test]
fn test_duplicates_keep_last_value() {
    assert_eq!(
        import_css("color: red; padding: 4px; color: blue"),
        vec!["color: blue", "padding: 4"]
    );
}

#[test]
fn test_html_style_map() {
    let config = config();
    let engine = StyleEngine::from_config(&config);
    let css = vec![
        CssProperty::new("Position", "absolute"),
        CssProperty::new("top", "0px"),
    ];
    assert_eq!(engine.convert_html_style(&css), vec!["absolute", "top: 0"]);
}

#[test]
fn test_class_list_arbitrary_values() {
    assert_eq!(
        import_classes("pt-[8px] w-[120px] rounded-[4px] min-w-[10px]"),
        vec!["padding-top: 8", "width: 120", "border-radius: 4", "min-width: 10"]
    );
    assert_eq!(
        import_classes("shadow-[0_1px_2px_#000]"),
        vec!["box-shadow: 0 1px 2px #000"]
    );
}

#[test]
fn test_class_list_axis_classes_split() {
    assert_eq!(
        import_classes("py-[8px] size-[32px]"),
        vec![
            "padding-top: 8",
            "padding-bottom: 8",
            "width: 32",
            "height: 32"
        ]
    );
}

#[test]
fn test_class_list_shared_prefixes() {
    assert_eq!(
        import_classes("text-[14px] text-[#3366FF] border-[2px] border-[#eee]"),
        vec![
            "font-size: 14",
            "color: primary",
            "border-width: 2",
            "border-color: #eee"
        ]
    );
}

#[test]
fn test_class_list_keywords_and_tokens() {
    assert_eq!(
        import_classes("flex flex-nowrap justify-around font-semibold"),
        vec![
            "flex",
            "flex-wrap: nowrap",
            "justify-content: space-around",
            "font-weight: 600"
        ]
    );
}

#[test]
fn test_class_list_variants_and_passthrough() {
    assert_eq!(
        import_classes("hover:pt-[8px] md:flex [border-style:dashed] btn-primary"),
        vec![
            "hover:padding-top: 8",
            "md:flex",
            "border-style: dashed",
            "btn-primary"
        ]
    );
}

#[test]
fn test_imported_declarations_convert_back() {
    let config = config();
    let engine = StyleEngine::from_config(&config);
    let declarations = engine.convert_css_text("padding-top: 8px; padding-bottom: 8px; color: #3366FF");
    assert_eq!(declarations, vec!["padding-top: 8", "padding-bottom: 8", "color: primary"]);
    assert_eq!(
        engine.convert_declarations(&declarations).unwrap(),
        vec!["py-[8px]", "text-[#3366FF]"]
    );
}

#[test]
fn test_border_survives_export_and_import() {
    let config = config();
    let engine = StyleEngine::from_config(&config);

    let exported = engine.convert_declarations(&["border: 1px solid red"]).unwrap();
    assert_eq!(exported, vec!["border", "border-[red]"]);

    let imported = engine.convert_class_list(&exported.join(" "));
    assert_eq!(imported, vec!["border", "border-color: red"]);
    assert_eq!(engine.convert_declarations(&imported).unwrap(), exported);

    assert_eq!(
        import_css("border-width: 1px; border-style: solid; border-color: red"),
        vec!["border", "border-color: red"]
    );
}

#[test]
fn test_class_list_literal_underscore() {
    assert_eq!(
        import_classes("[font-family:my\\_font] shadow-[0_1px_#000]"),
        vec!["font-family: my_font", "box-shadow: 0 1px #000"]
    );
}

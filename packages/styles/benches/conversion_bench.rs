use atelier_styles::{ProjectConfig, StyleEngine};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn config() -> ProjectConfig {
    ProjectConfig::default()
        .with_named_color("primary", "#3366FF")
        .with_named_style("card", "padding: 16; border-radius: 8; background-color: #fff")
}

fn convert_single_declaration(c: &mut Criterion) {
    let config = config();
    let engine = StyleEngine::from_config(&config);

    c.bench_function("convert_single_declaration", |b| {
        b.iter(|| engine.convert_declaration(black_box("hover:border: 1px solid primary")))
    });
}

fn convert_node_styles(c: &mut Criterion) {
    let config = config();
    let engine = StyleEngine::from_config(&config);
    let styles = vec![
        "column",
        "card",
        "padding-top: 8",
        "padding-bottom: 8",
        "width: 100%",
        "height: 100%",
        "color: {props.active} ? primary : #666",
        "md:hover:font-weight: 600",
        "justify-content: space-between",
        "box-shadow: 0 1px 2px rgba(0,0,0,0.2)",
    ];

    c.bench_function("convert_node_styles", |b| {
        b.iter(|| engine.convert_declarations(black_box(styles.as_slice())))
    });
}

fn import_inline_style(c: &mut Criterion) {
    let config = config();
    let engine = StyleEngine::from_config(&config);
    let css = "display: flex; flex-direction: column; padding-top: 8px; padding-right: 16px; \
               padding-bottom: 8px; padding-left: 16px; outline: 1px solid #3366FF; \
               outline-offset: -1px; color: #3366FF";

    c.bench_function("import_inline_style", |b| {
        b.iter(|| engine.convert_css_text(black_box(css)))
    });
}

criterion_group!(
    benches,
    convert_single_declaration,
    convert_node_styles,
    import_inline_style
);
criterion_main!(benches);

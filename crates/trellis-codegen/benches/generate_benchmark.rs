//! Generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trellis_codegen::{
    generate_html_code, generate_react_code, CodeGeneratorConfig, CssFramework, Framework,
    GenerationOptions,
};
use trellis_core::{create_component, VisualComponent};

/// `width` rows under one root, each holding `depth` nested cards with a button.
fn build_tree(width: usize, depth: usize) -> Vec<VisualComponent> {
    let root = create_component("Container");
    let root_id = root.id.clone();
    let mut components = vec![root];

    for _ in 0..width {
        let row = create_component("Row").with_parent(root_id.clone());
        let mut parent_id = row.id.clone();
        components.push(row);
        for level in 0..depth {
            let card = create_component("Card").with_parent(parent_id.clone());
            let button = create_component("Button")
                .with_parent(card.id.clone())
                .with_content(format!("Action {}", level));
            parent_id = card.id.clone();
            components.push(card);
            components.push(button);
        }
    }
    components
}

fn generate_react_wide(c: &mut Criterion) {
    let components = build_tree(200, 2);
    let config = CodeGeneratorConfig::new(Framework::React, CssFramework::Tailwind);
    let options = GenerationOptions::new();
    c.bench_function("generate_react_wide", |b| {
        b.iter(|| generate_react_code(black_box(&components), &config, &options))
    });
}

fn generate_react_deep(c: &mut Criterion) {
    let components = build_tree(4, 60);
    let config = CodeGeneratorConfig::new(Framework::React, CssFramework::Custom);
    let options = GenerationOptions::new();
    c.bench_function("generate_react_deep", |b| {
        b.iter(|| generate_react_code(black_box(&components), &config, &options))
    });
}

fn generate_html_wide(c: &mut Criterion) {
    let components = build_tree(200, 2);
    let config = CodeGeneratorConfig::new(Framework::Html, CssFramework::Bootstrap);
    let options = GenerationOptions::new();
    c.bench_function("generate_html_wide", |b| {
        b.iter(|| generate_html_code(black_box(&components), &config, &options))
    });
}

criterion_group!(benches, generate_react_wide, generate_react_deep, generate_html_wide);
criterion_main!(benches);

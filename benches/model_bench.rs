//! Benchmarks for model editing and the solver file codec

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frame_model::prelude::*;

fn create_multi_story_frame(stories: usize, bays: usize) -> FrameModel {
    let mut model = FrameModel::new();

    model.add_frame_section(1, FrameSection::steel(2e5, 8e4, 0.4, 0.4));
    model.add_frame_section(2, FrameSection::steel(2e5, 8e4, 0.3, 0.6));

    let levels = stories + 1;
    let story_height = 3.5;
    let bay_width = 6.0;

    // Create nodes, one column line after the other
    model.add_node_grid([0.0; 3], [bay_width, 1.0, story_height], [bays + 1, 1, levels]);
    let line = levels as i64;

    // Create columns
    model.add_element_pattern(
        &Element::frame(0, 0, 1),
        &TagPattern::new(1, [bays + 1, stories, 1], [line, 1, 0]),
        &TagPattern::new(2, [bays + 1, stories, 1], [line, 1, 0]),
    );

    // Create beams
    model.add_element_pattern(
        &Element::frame(0, 0, 2),
        &TagPattern::new(2, [bays, stories, 1], [line, 1, 0]),
        &TagPattern::new(2 + levels as Tag, [bays, stories, 1], [line, 1, 0]),
    );

    // Add supports at base and masses on the floors
    model.apply_fixity(&TagPattern::new(1, [bays + 1, 1, 1], [line, 0, 0]), Fixity::fixed());
    model.apply_mass(&TagPattern::new(2, [bays + 1, stories, 1], [line, 1, 0]), 25.0);

    model
}

/// Frame with holes in the node and element tag ranges
fn create_sparse_frame(stories: usize, bays: usize) -> FrameModel {
    let mut model = create_multi_story_frame(stories, bays);
    let beams: Vec<Tag> = model
        .elements()
        .filter(|(_, element)| element.section == 2)
        .map(|(tag, _)| tag)
        .collect();
    for tag in beams {
        model.split_element(tag, 3);
    }
    let tags = model.tags(EntityKind::Node);
    for tag in tags.into_iter().step_by(7).skip(1) {
        model.remove_node(tag);
    }
    model
}

fn benchmark_build(c: &mut Criterion) {
    c.bench_function("build_10story_5bay", |b| {
        b.iter(|| black_box(create_multi_story_frame(10, 5)))
    });
}

fn benchmark_compress(c: &mut Criterion) {
    let sparse = create_sparse_frame(10, 5);
    c.bench_function("compress_sparse_10story_5bay", |b| {
        b.iter(|| {
            let mut model = sparse.clone();
            black_box(model.compress());
        })
    });
}

fn benchmark_write(c: &mut Criterion) {
    let model = create_sparse_frame(10, 5);
    c.bench_function("write_10story_5bay", |b| {
        b.iter(|| {
            let mut model = model.clone();
            black_box(model.to_text().unwrap());
        })
    });
}

fn benchmark_read(c: &mut Criterion) {
    let text = create_sparse_frame(10, 5).to_text().unwrap();
    c.bench_function("read_10story_5bay", |b| {
        b.iter(|| {
            let mut model = FrameModel::new();
            model.read_from(black_box(text.as_bytes())).unwrap();
            black_box(&model);
        })
    });
}

criterion_group!(
    benches,
    benchmark_build,
    benchmark_compress,
    benchmark_write,
    benchmark_read,
);

criterion_main!(benches);

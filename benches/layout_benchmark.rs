use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hand_skeleton_viz::frame::layout_frame;
use hand_skeleton_viz::projection::Projector;
use hand_skeleton_viz::synthetic::hands_at;

pub fn criterion_benchmark(c: &mut Criterion) {
    let projector = Projector::default();
    let frames: Vec<_> = (0..300).map(|i| hands_at(i as f32 / 30.0)).collect();

    let mut group = c.benchmark_group("per-frame-layout");
    group.bench_function("layout 300 frames", |b| {
        b.iter(|| {
            for hands in &frames {
                black_box(layout_frame(&projector, hands));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

//! # Cortex Zones Rendering Benchmarks
//!
//! The viewer re-lays out the whole document on every frame, so layout and
//! full-screen draws must stay well under the event poll interval.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};

use cortex_catalog::ZoneCatalog;
use cortex_view::ui::{self, document};
use cortex_view::{App, Document};

fn bench_render_document(c: &mut Criterion) {
    let catalog = ZoneCatalog::developing_cortex();
    let doc = Document::compose(&catalog);

    let mut group = c.benchmark_group("render-document");
    for width in [40u16, 80, 160] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| document::render_document(black_box(&doc), width))
        });
    }
    group.finish();
}

fn bench_full_frame(c: &mut Criterion) {
    let mut app = App::new(ZoneCatalog::developing_cortex());
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test backend");

    c.bench_function("full-frame-120x40", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| ui::render(frame, &mut app))
                .expect("draw");
        })
    });
}

criterion_group!(benches, bench_render_document, bench_full_frame);
criterion_main!(benches);

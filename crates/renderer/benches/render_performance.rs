//! Performance benchmarks for the grid renderer

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use timeline_axis::TimeAxis;
use timeline_renderer::{
    culling::{clip_span, ColumnSpan},
    render_frame, CategoryStyles, FrameInput, GridLayout, VenueIndex, VisibleWindow,
};
use timeline_shared::{Category, Event, ScrollPosition, View, ViewportSize};

/// Spread events over a year and `venue_count` venues
fn create_events(event_count: usize, venue_count: usize) -> Vec<Event> {
    let base = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
    (0..event_count)
        .map(|i| {
            let start = base + Duration::hours((i as i64 * 37) % 8760);
            let end = start + Duration::hours(2 + (i as i64 % 200));
            let category = match i % 3 {
                0 => Category::Art,
                1 => Category::Music,
                _ => Category::Theatre,
            };
            Event::new(
                format!("Event {i}"),
                category,
                format!("Venue {}", i % venue_count),
                start,
                end,
            )
        })
        .collect()
}

fn create_layout() -> GridLayout {
    GridLayout::new(ViewportSize::new(1920.0, 1080.0), 240.0, 120.0, 60.0)
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let anchor = Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap();
    let layout = create_layout();
    let styles = CategoryStyles::default();

    for event_count in [100, 1_000, 10_000] {
        let events = create_events(event_count, 200);
        let venues = VenueIndex::from_events(&events);

        for view in View::ALL {
            let axis = TimeAxis::new(view, anchor);
            let scroll = ScrollPosition::new(layout.initial_scroll_left(&axis), 600.0);

            group.bench_with_input(
                BenchmarkId::new(view.to_string(), event_count),
                &events,
                |b, events| {
                    b.iter(|| {
                        let frame = render_frame(&FrameInput {
                            axis: &axis,
                            layout: &layout,
                            scroll: black_box(scroll),
                            events,
                            venues: &venues,
                            styles: &styles,
                        });
                        black_box(frame)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_column_mapping(c: &mut Criterion) {
    let anchor = Utc.with_ymd_and_hms(2024, 10, 15, 12, 0, 0).unwrap();
    let mut group = c.benchmark_group("column_mapping");

    for view in View::ALL {
        let axis = TimeAxis::new(view, anchor);
        group.bench_function(format!("{view}_round_trip"), |b| {
            b.iter(|| {
                let date = axis.date_of(black_box(183.25));
                black_box(axis.column_index_of(date))
            });
        });
    }

    group.finish();
}

fn bench_span_clipping(c: &mut Criterion) {
    let layout = create_layout();
    let window = VisibleWindow::compute(ScrollPosition::new(183.0 * 120.0, 0.0), &layout);

    c.bench_function("clip_span", |b| {
        b.iter(|| {
            for i in 0..1_000 {
                let start = (i % 366) as f64;
                let (span, _) = ColumnSpan::ordered(start, start + 3.5);
                black_box(clip_span(span, &window, 1, 366));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_render_frame,
    bench_column_mapping,
    bench_span_clipping
);
criterion_main!(benches);

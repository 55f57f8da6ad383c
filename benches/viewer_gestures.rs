// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use gallery_lens::domain::gallery::ImageRef;
use gallery_lens::domain::ui::newtypes::ZoomScale;
use gallery_lens::media::ImageData;
use gallery_lens::ui::state::{cover_fit, PanLimits};
use gallery_lens::ui::viewer::{Command, Navigation, ViewerSettings, ViewerState};
use iced::{Point, Size, Vector};
use std::hint::black_box;

/// A viewer with a loaded 1600x1200 photo in a 1280x720 viewport.
fn loaded_viewer() -> ViewerState {
    let mut viewer = ViewerState::new(ViewerSettings::default());
    viewer.resize(Size::new(1280.0, 720.0));
    let commands = viewer.show(ImageRef::from_path("/bench/photo.jpg"), Navigation::BOTH);
    let generation = commands
        .iter()
        .find_map(|command| match command {
            Command::Load { generation, .. } => Some(*generation),
            Command::ArmHint(_) => None,
        })
        .unwrap_or_default();
    let image = ImageData::from_rgba(1600, 1200, vec![0; 1600 * 1200 * 4]);
    viewer.load_finished(generation, Ok(image));
    viewer
}

fn geometry_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_geometry");
    let natural = Size::new(4000.0, 3000.0);
    let container = Size::new(1280.0, 720.0);

    group.bench_function("cover_fit", |b| {
        b.iter(|| black_box(cover_fit(black_box(natural), black_box(container))));
    });

    if let Some(fit) = cover_fit(natural, container) {
        group.bench_function("clamp_offset", |b| {
            b.iter(|| {
                let limits = PanLimits::new(&fit, black_box(ZoomScale::new(2.5)), container);
                black_box(limits.clamp(black_box(Vector::new(900.0, -700.0))))
            });
        });
    }

    group.finish();
}

fn gesture_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewer_gestures");

    group.bench_function("wheel_zoom_sweep", |b| {
        let mut viewer = loaded_viewer();
        b.iter(|| {
            for delta in [-120.0, -120.0, -120.0, 120.0, 120.0, 120.0] {
                viewer.wheel(black_box(delta));
            }
            black_box(viewer.scale())
        });
    });

    group.bench_function("drag_60_moves", |b| {
        let mut viewer = loaded_viewer();
        viewer.zoom_in();
        viewer.zoom_in();
        b.iter(|| {
            viewer.pointer_pressed(Point::new(640.0, 360.0));
            for step in 0..60u8 {
                let step = f32::from(step);
                viewer.pointer_moved(black_box(Point::new(640.0 + step * 25.0, 360.0 - step * 10.0)));
            }
            viewer.pointer_released();
            black_box(viewer.offset())
        });
    });

    group.bench_function("swipe", |b| {
        let mut viewer = loaded_viewer();
        b.iter(|| {
            viewer.touch_pressed(1, Point::new(900.0, 360.0));
            viewer.touch_moved(1, Point::new(800.0, 362.0));
            black_box(viewer.touch_lifted(1, black_box(Point::new(700.0, 365.0))))
        });
    });

    group.finish();
}

criterion_group!(benches, geometry_benchmark, gesture_benchmark);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::panic::Location;
use tintlog::Level;
use tintlog::fmt::{Flags, Operand, render_header, sprint, tag};

fn bench_sprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprint");

    let text: [&dyn Operand; 2] = [&"connected to ", &"db-primary"];
    group.bench_function("text_only", |b| {
        b.iter(|| sprint(black_box(&text)));
    });

    let mixed: [&dyn Operand; 6] = [&"took ", &12.5, &"ms for ", &3, &4, &" rows"];
    group.bench_function("mixed", |b| {
        b.iter(|| sprint(black_box(&mixed)));
    });

    group.finish();
}

fn bench_tag(c: &mut Criterion) {
    c.bench_function("tag", |b| {
        b.iter(|| tag(black_box(Level::Warn)));
    });
}

fn bench_header(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_header");
    let location = Location::caller();
    let now = chrono::Local::now();

    group.bench_function("standard", |b| {
        b.iter(|| render_header(black_box(Flags::STANDARD), now, location));
    });

    let micros = Flags {
        micros: true,
        long_path: true,
        ..Flags::STANDARD
    };
    group.bench_function("micros_long_path", |b| {
        b.iter(|| render_header(black_box(micros), now, location));
    });

    group.finish();
}

criterion_group!(benches, bench_sprint, bench_tag, bench_header);
criterion_main!(benches);

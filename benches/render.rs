// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;
extern crate asciibrot;

use asciibrot::presets;
use asciibrot::AsciiRenderer;
use criterion::Criterion;

fn full_set(c: &mut Criterion) {
    let view = presets::find("full").unwrap().view;
    c.bench_function("full set, sequential", move |b| {
        let renderer = AsciiRenderer::new(view).unwrap();
        b.iter(|| renderer.render(true).unwrap())
    });
}

fn high_detail(c: &mut Criterion) {
    let view = presets::find("highdetail").unwrap().view;
    c.bench_function("high detail, sequential", move |b| {
        let renderer = AsciiRenderer::new(view).unwrap();
        b.iter(|| renderer.render(true).unwrap())
    });
    c.bench_function("high detail, 4 threads", move |b| {
        let renderer = AsciiRenderer::new(view).unwrap().with_threads(4);
        b.iter(|| renderer.render(true).unwrap())
    });
}

criterion_group!(benches, full_set, high_detail);
criterion_main!(benches);

#[macro_use]
extern crate criterion;

use chunk_translate::chunking::Chunker;
use criterion::{black_box, Criterion};
use std::num::NonZeroUsize;

fn bench_chunking(c: &mut Criterion) {
    //    Define input
    let paragraph = "In findings published Tuesday in Cornell University's arXiv by a team of scientists \
    from the University of Montreal and a separate report published Wednesday in Nature Astronomy by a team \
    from University College London (UCL), the presence of water vapour was confirmed in the atmosphere of \
    K2-18b, a planet circling a star in the constellation Leo.\n\n";
    let text = paragraph.repeat(2000);

    let default_chunker = Chunker::default();
    c.bench_function("Chunking (1500 characters)", |b| {
        b.iter(|| black_box(default_chunker.chunks(&text).count()))
    });

    let narrow_chunker = Chunker::new(NonZeroUsize::new(80).unwrap());
    c.bench_function("Chunking (80 characters)", |b| {
        b.iter(|| black_box(narrow_chunker.chunks(&text).count()))
    });
}

criterion_group! {
name = benches;
config = Criterion::default().sample_size(20);
targets = bench_chunking
}

criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pnmslim::{reduce_width, remove_vertical_seam, CostMap, PixelGrid, SeamFinder};

fn noise(width: u32, height: u32) -> PixelGrid {
    let mut state = 0x2545_f491u32;
    let data = (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            [state as u8, (state >> 8) as u8, (state >> 16) as u8]
        })
        .collect();
    PixelGrid::from_raw(width, height, data).unwrap()
}

fn bench_slimming(c: &mut Criterion) {
    let grid = noise(256, 192);

    c.bench_function("build cost map 256x192", |b| {
        b.iter(|| CostMap::build(black_box(&grid)).unwrap())
    });

    c.bench_function("repair after one seam 256x192", |b| {
        let costs = CostMap::build(&grid).unwrap();
        let seam = costs.find_vertical_seam().unwrap();
        let mut slim = grid.clone();
        remove_vertical_seam(&mut slim, &seam).unwrap();
        b.iter(|| {
            let mut patched = costs.clone();
            patched.repair(black_box(&slim), &seam).unwrap();
            patched
        })
    });

    c.bench_function("remove 32 seams 256x192", |b| {
        b.iter(|| reduce_width(black_box(&grid), 32).unwrap())
    });
}

criterion_group!(benches, bench_slimming);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use termsweeper_core::*;

fn flood_fill(c: &mut Criterion) {
    let size = (MAX_WIDTH, MAX_HEIGHT);
    let empty = Board::with_mines(size, &[]).unwrap();

    let mut config = GameConfig::new(size, 10).unwrap();
    let mut seeded = Board::new(&config).unwrap();
    seeded.setup(config.mine_percent, RandomMineGenerator::new(0x5eed));

    c.bench_function("flood empty 64x64", |b| {
        b.iter(|| {
            let mut board = empty.clone();
            black_box(board.reveal(black_box((31, 31))))
        })
    });

    c.bench_function("flood 10% 64x64", |b| {
        b.iter(|| {
            let mut board = seeded.clone();
            black_box(board.reveal(black_box((0, 0))))
        })
    });

    config.mine_percent = 20;
    c.bench_function("setup 20% 64x64", |b| {
        let mut generator = RandomMineGenerator::new(1);
        b.iter(|| {
            let mut board = Board::new(&config).unwrap();
            board.setup(config.mine_percent, &mut generator);
            black_box(board.is_won())
        })
    });
}

criterion_group!(benches, flood_fill);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minesweep_core::*;
use std::hint::black_box;

const SIZES: [(Coord, Coord); 3] = [(9, 9), (30, 16), (200, 200)];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for difficulty in Difficulty::ALL {
        for (width, height) in SIZES {
            let config = GameConfig::from_difficulty((width, height), difficulty).unwrap();
            group.bench_with_input(
                BenchmarkId::new(difficulty.key(), format!("{width}x{height}")),
                &config,
                |b, &config| {
                    b.iter(|| {
                        Board::with_generator(
                            black_box(config),
                            RandomLayoutGenerator::from_seed(0),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");
    for (width, height) in SIZES {
        let board = Board::from_mine_coords(width, height, &[(width - 1, height - 1)]).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &board,
            |b, board| {
                b.iter(|| {
                    let mut session = GameSession::new(board.clone());
                    session.reveal_cell(0, 0)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_cascade);
criterion_main!(benches);

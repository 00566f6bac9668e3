use criterion::*;

use reversi_core::{Board, Player};
use reversi_search::search;

fn criterion_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let board = Board::initial_position();
    for depth in [2u8, 4, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                search(
                    black_box(board),
                    Player::Black,
                    depth,
                    true,
                    i32::MIN,
                    i32::MAX,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_search);
criterion_main!(benches);

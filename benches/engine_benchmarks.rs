//! Engine performance benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tricheck::{Board, Move, Piece, Searcher, Square, ENPASSANT, NO_FLAGS};

fn bench_movegen(c: &mut Criterion) {
    tricheck::init(0);
    let board = Board::new();

    c.bench_function("movegen/startpos", |b| {
        b.iter(|| black_box(board.generate_all_moves()))
    });
}

fn bench_make_move(c: &mut Criterion) {
    tricheck::init(0);
    let board = Board::new();
    let e2e4 = Move::encode(Square::E2, Square::E4, Piece::Pawn, Piece::Pawn, ENPASSANT);

    c.bench_function("make_move/e2e4", |b| {
        b.iter(|| {
            let mut next = board;
            black_box(next.make_move(black_box(e2e4)))
        })
    });
}

fn bench_perft(c: &mut Criterion) {
    tricheck::init(0);
    let board = Board::new();

    let mut group = c.benchmark_group("perft");
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    tricheck::init(0);

    let mut board = Board::new();
    let opening = [
        Move::encode(Square::E2, Square::E4, Piece::Pawn, Piece::Pawn, ENPASSANT),
        Move::encode(Square::E7, Square::E5, Piece::Pawn, Piece::Pawn, NO_FLAGS),
        Move::encode(Square::G1, Square::F3, Piece::Knight, Piece::Knight, NO_FLAGS),
    ];
    for m in opening {
        assert!(board.make_move(m));
    }

    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    for depth in [3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("opening", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut searcher = Searcher::new();
                searcher.set_search_depth(depth);
                black_box(searcher.search(&board))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_movegen,
    bench_make_move,
    bench_perft,
    bench_search
);
criterion_main!(benches);

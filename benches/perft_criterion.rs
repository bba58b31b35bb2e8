use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hex_chess::game_state::chess_rules::STARTING_POSITION;
use hex_chess::game_state::chess_types::BoardState;
use hex_chess::move_generation::perft::{perft, perft_multi_threaded};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    position: &'static str,
    expected_nodes: &'static [usize],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "start",
        position: STARTING_POSITION,
        expected_nodes: &[51, 2_586],
    },
    BenchCase {
        name: "pins",
        position: "6/7/8/9/10/kq1B1K5/10/5R3/8/5r1/6 w - 0 1",
        expected_nodes: &[15, 585, 15_412],
    },
    BenchCase {
        name: "en_passant",
        position: "1K4/7/8/9/6pP2/11/10/9/8/6k/6 w h6 0 2",
        expected_nodes: &[9, 71, 677],
    },
];

const CASES_STANDARD: &[BenchCase] = &[BenchCase {
    name: "start",
    position: STARTING_POSITION,
    expected_nodes: &[51, 2_586, 137_858],
}];

fn suite_is_standard() -> bool {
    matches!(std::env::var("HEX_BENCH_SUITE"), Ok(value) if value.eq_ignore_ascii_case("standard"))
}

fn bench_perft(c: &mut Criterion) {
    let (suite_name, cases) = if suite_is_standard() {
        ("standard", CASES_STANDARD)
    } else {
        ("quick", CASES_QUICK)
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in cases {
        let board = BoardState::from_position(case.position).expect("benchmark position should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft_multi_threaded(&board, depth);
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes as u64));
            let mut bench_board = BoardState::copy_from(&board);

            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let counts = perft(black_box(&mut bench_board), black_box(depth));
                        assert_eq!(counts.nodes, *expected);
                        black_box(counts.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);

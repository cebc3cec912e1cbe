//! Performance benchmarks for drafting and rating updates

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use court_draft::draft::{DraftRequest, MatchEngine};
use court_draft::rating::{EloRatingCalculator, RatingCalculator};
use court_draft::types::{MatchResult, PlayerGroup, PlayerRecord, Position, Side};
use court_draft::utils::{current_timestamp, generate_game_id};

const POSITIONS: [Position; 6] = [
    Position::Setter,
    Position::Libero,
    Position::Outside,
    Position::Middle,
    Position::Opposite,
    Position::Any,
];

// Spread ratings without a RNG so runs stay comparable
fn bench_roster(size: usize) -> Vec<PlayerRecord> {
    (0..size)
        .map(|i| {
            let rating = 1000 + ((i * 7919) % 1200) as i32;
            PlayerRecord::new(format!("player_{}", i), format!("Player {}", i), rating)
                .with_position(POSITIONS[i % POSITIONS.len()])
        })
        .collect()
}

fn bench_request(size: usize, court_count: usize, balance_positions: bool) -> DraftRequest {
    DraftRequest {
        roster: bench_roster(size),
        court_count,
        team_size: 6,
        balance_positions,
        groups: Vec::new(),
    }
}

fn bench_drafts(c: &mut Criterion) {
    let engine = MatchEngine::default();

    let single = bench_request(12, 1, false);
    c.bench_function("draft_1_court_12_players", |b| {
        b.iter(|| black_box(engine.draft(black_box(&single))))
    });

    let session = bench_request(60, 4, false);
    c.bench_function("draft_4_courts_60_players", |b| {
        b.iter(|| black_box(engine.draft(black_box(&session))))
    });

    let positions = bench_request(48, 4, true);
    c.bench_function("draft_4_courts_positions", |b| {
        b.iter(|| black_box(engine.draft(black_box(&positions))))
    });

    let mut grouped = bench_request(48, 4, false);
    grouped.groups = (0..6)
        .map(|g| {
            PlayerGroup::new(
                format!("group_{}", g),
                (0..3).map(|m| format!("player_{}", g * 3 + m)),
            )
        })
        .collect();
    c.bench_function("draft_4_courts_groups", |b| {
        b.iter(|| black_box(engine.draft(black_box(&grouped))))
    });
}

fn bench_rating_calculations(c: &mut Criterion) {
    let calculator = EloRatingCalculator::default();
    let engine = MatchEngine::default();

    let outcome = engine
        .draft(&bench_request(12, 1, false))
        .expect("bench draft");
    let result = MatchResult::from_assignment(
        generate_game_id(),
        &outcome.courts[0].assignment,
        Side::A,
        current_timestamp(),
    );

    c.bench_function("rating_calculation_12_players", |b| {
        b.iter(|| black_box(calculator.calculate_rating_changes(black_box(&result))))
    });

    c.bench_function("rating_delta_single", |b| {
        b.iter(|| {
            black_box(calculator.rating_delta(
                black_box(1500),
                black_box(1520.0),
                black_box(1480.0),
                true,
            ))
        })
    });
}

criterion_group!(benches, bench_drafts, bench_rating_calculations);
criterion_main!(benches);

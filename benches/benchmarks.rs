criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        ranking_five_cards,
        settling_river_showdown,
        enumerating_turn_equity,
        enumerating_flop_equity,
        sampling_preflop_equity,
        filtering_flop_range,
        hashing_canonical_key,
        hitting_warm_cache,
}

fn ranking_five_cards(c: &mut criterion::Criterion) {
    let five = <[Card; 5]>::try_from(Card::parse("AsKsQsJsTs").unwrap()).unwrap();
    c.bench_function("rank a 5-card hand", |b| b.iter(|| Evaluator.rank5(five)));
}

fn settling_river_showdown(c: &mut criterion::Criterion) {
    let hero = Hole::try_from("AsAh").unwrap();
    let villain = Hole::try_from("KsKh").unwrap();
    let board = <[Card; 5]>::try_from(Card::parse("2c7d9hTc3s").unwrap()).unwrap();
    let showdown = Showdown::new(&Evaluator);
    c.bench_function("settle a River showdown", |b| {
        b.iter(|| showdown.settle(&hero, &villain, &board))
    });
}

fn enumerating_turn_equity(c: &mut criterion::Criterion) {
    let hero = Hole::try_from("AsAh").unwrap();
    let villain = Hole::try_from("KsKh").unwrap();
    let board = Board::try_from("2s7s9hTc").unwrap();
    c.bench_function("enumerate Turn equity", |b| {
        b.iter(|| exact(&Evaluator, &hero, &villain, &board))
    });
}

fn enumerating_flop_equity(c: &mut criterion::Criterion) {
    let hero = Hole::try_from("8s8h").unwrap();
    let villain = Hole::try_from("AsKc").unwrap();
    let board = Board::try_from("2c7d9h").unwrap();
    c.bench_function("enumerate Flop equity", |b| {
        b.iter(|| exact(&Evaluator, &hero, &villain, &board))
    });
}

fn sampling_preflop_equity(c: &mut criterion::Criterion) {
    let hero = Hole::try_from("AsAh").unwrap();
    let villain = Villain::Fixed(Hole::try_from("KsKd").unwrap());
    let board = Board::empty();
    c.bench_function("sample 10k Preflop trials", |b| {
        b.iter(|| simulate(&Evaluator, &hero, villain, &board, 10_000, 12345))
    });
}

fn filtering_flop_range(c: &mut criterion::Criterion) {
    let hero = Hole::try_from("AsAh").unwrap();
    let board = Board::try_from("2c7d9h").unwrap();
    c.bench_function("filter a balanced Flop range", |b| {
        b.iter(|| Range::new(Archetype::Balanced, &hero, &board))
    });
}

fn hashing_canonical_key(c: &mut criterion::Criterion) {
    let query = Query::parse("AsAh", "KsKd", "2c7d9hTc3s").unwrap();
    c.bench_function("hash a canonical key", |b| {
        b.iter(|| CanonicalKey::from(&query))
    });
}

fn hitting_warm_cache(c: &mut criterion::Criterion) {
    let engine = Engine::default();
    let query = Query::parse("8s8h", "AsKc", "2c7d9h").unwrap();
    engine.equity(&query).unwrap();
    c.bench_function("answer from a warm cache", |b| {
        b.iter(|| engine.equity(&query))
    });
}

use rbp_equity::Engine;
use rbp_equity::cache::CanonicalKey;
use rbp_equity::cards::Board;
use rbp_equity::cards::Card;
use rbp_equity::cards::Hole;
use rbp_equity::equity::Query;
use rbp_equity::equity::Villain;
use rbp_equity::equity::exact;
use rbp_equity::equity::simulate;
use rbp_equity::oracle::Evaluator;
use rbp_equity::oracle::Oracle;
use rbp_equity::oracle::Showdown;
use rbp_equity::range::Archetype;
use rbp_equity::range::Range;

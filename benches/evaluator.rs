use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_wild::cards::{parse_cards, parse_wild_cards, Card, Rank, Suit};
use poker_wild::evaluator::{evaluate_five, evaluate_seven};
use poker_wild::hand::WildHand;
use poker_wild::wild::evaluate_seven_wild;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_hands(n: usize) -> Vec<[Card; 7]> {
    let deck: Vec<Card> =
        Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s))).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..n)
        .map(|_| {
            let mut d = deck.clone();
            d.shuffle(&mut rng);
            core::array::from_fn(|i| d[i])
        })
        .collect()
}

fn bench_evaluate_five(c: &mut Criterion) {
    let hi: [Card; 5] = parse_cards("AH KD 7S 5C 2D").unwrap().try_into().unwrap();
    let sf: [Card; 5] = parse_cards("AS KS QS JS TS").unwrap().try_into().unwrap();

    let mut g = c.benchmark_group("evaluate_five");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| evaluate_five(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &sf, |b, input| {
        b.iter(|| evaluate_five(black_box(input)))
    });
    g.finish();
}

fn bench_evaluate_seven(c: &mut Criterion) {
    let hands = seeded_hands(256);
    c.bench_function("evaluate_seven/random_256", |b| {
        b.iter(|| hands.iter().map(|h| evaluate_seven(black_box(h)).score()).max())
    });
}

fn bench_evaluate_seven_wild(c: &mut Criterion) {
    let mut g = c.benchmark_group("evaluate_seven_wild");
    for (name, input) in [
        ("no_joker", "JD TC TH 7C 7D 7S 7H"),
        ("one_joker", "6C 7C 8C 9C TC 5C ?B"),
        ("two_jokers", "TD TC 5H 5C 7C ?R ?B"),
    ] {
        let hand = WildHand::from_slice(&parse_wild_cards(input).unwrap()).unwrap();
        g.bench_with_input(BenchmarkId::new(name, input), &hand, |b, h| {
            b.iter(|| evaluate_seven_wild(black_box(h)))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_evaluate_five, bench_evaluate_seven, bench_evaluate_seven_wild);
criterion_main!(benches);

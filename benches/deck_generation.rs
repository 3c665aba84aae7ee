use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use emotion_memory::{
    is_match, DeckGenerator, EmotionCatalog, GameControllerBuilder, GameRng, Level, MemoryConfig,
    NullSink,
};

fn reference_generator() -> DeckGenerator {
    DeckGenerator::new(EmotionCatalog::reference(), &MemoryConfig::default())
}

/// Deal one deck per level, from the smallest board to the capped one.
fn bench_generate(c: &mut Criterion) {
    let gen = reference_generator();
    let mut group = c.benchmark_group("generate");

    for level in [1u32, 3, 5] {
        let level = Level::new(level).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_cards", gen.summary(level).cards)),
            &level,
            |b, &level| {
                let mut rng = GameRng::new(42);
                b.iter(|| gen.generate(level, &mut rng));
            },
        );
    }
    group.finish();
}

fn bench_is_match(c: &mut Criterion) {
    let gen = reference_generator();
    let deck = gen.generate(Level::new(5).unwrap(), &mut GameRng::new(7));
    let ids = [deck[0].id, deck[deck.len() - 1].id];

    c.bench_function("is_match_24_cards", |b| {
        b.iter(|| is_match(&deck, &ids));
    });
}

/// Play a full level-1 game: every pair found with no misses.
fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_level_1", |b| {
        b.iter(|| {
            let mut game = GameControllerBuilder::new().seed(1).build(NullSink).unwrap();
            let cards: Vec<_> = game.state().cards().iter().cloned().collect();
            for card in &cards {
                if game.state().card(card.id).is_some_and(|c| c.is_matched) {
                    continue;
                }
                let partner = cards
                    .iter()
                    .find(|other| other.id != card.id && other.label() == card.label())
                    .unwrap();
                game.flip(card.id);
                game.flip(partner.id);
                game.advance(Duration::from_millis(1500));
            }
            game.settle();
            game.stats()
        });
    });
}

criterion_group!(deck, bench_generate, bench_is_match);
criterion_group!(session, bench_full_game);
criterion_main!(deck, session);

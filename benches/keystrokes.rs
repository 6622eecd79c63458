//! Benchmarks for ninekey keystroke handling.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ninekey::{Direction, Engine, InputEvent, KeyCode, Keyboard, PointerTarget, TouchMode};
use std::time::Duration;

/// Direction pairs that type "hello" from the default tables.
const HELLO: &[(Direction, Direction)] = &[
    (Direction::Left, Direction::BottomRight), // h
    (Direction::Left, Direction::Right),       // e
    (Direction::Right, Direction::Left),       // l
    (Direction::Right, Direction::Left),       // l
    (Direction::Right, Direction::BottomLeft), // o
];

fn key(c: char) -> InputEvent {
    InputEvent::Key(KeyCode::Char(c))
}

fn benchmark_engine_typing(c: &mut Criterion) {
    c.bench_function("engine two-step typing", |b| {
        b.iter(|| {
            let mut engine = Engine::new();
            for &(block, cell) in HELLO {
                black_box(engine.handle(black_box(block)));
                black_box(engine.handle(black_box(cell)));
            }
            black_box(engine.text().len());
        });
    });
}

fn benchmark_erase_multibyte(c: &mut Criterion) {
    let text: String = "éàçë👍🏽".repeat(50);
    c.bench_function("erase grapheme clusters", |b| {
        b.iter(|| {
            let mut engine = Engine::with_text(text.clone());
            while !engine.text().is_empty() {
                black_box(engine.handle(Direction::UpperLeft));
            }
        });
    });
}

fn benchmark_keyboard_keys(c: &mut Criterion) {
    let mut kb = Keyboard::builder()
        .on_update(|text| {
            black_box(text);
        })
        .build();
    let sequence: Vec<InputEvent> = "8914563".chars().map(key).collect();

    c.bench_function("keyboard numpad dispatch", |b| {
        b.iter(|| {
            for input in &sequence {
                black_box(kb.dispatch(black_box(*input)));
            }
            // Keep the text from growing without bound.
            while !kb.text().is_empty() {
                kb.dispatch(key('7'));
            }
        });
    });
}

fn benchmark_unbound_keys(c: &mut Criterion) {
    let mut kb = Keyboard::new();
    c.bench_function("keyboard unbound keys", |b| {
        b.iter(|| {
            for ch in 'a'..='z' {
                black_box(kb.dispatch(black_box(key(ch))));
            }
        });
    });
}

fn benchmark_pointer_character_mode(c: &mut Criterion) {
    let mut kb = Keyboard::builder().touch_mode(TouchMode::Character).build();
    c.bench_function("pointer single-press typing", |b| {
        b.iter(|| {
            for &(block, cell) in HELLO {
                let target = PointerTarget::new(block, cell);
                black_box(kb.dispatch(black_box(InputEvent::Pointer(target))));
            }
            while !kb.text().is_empty() {
                kb.handle(Direction::UpperLeft);
            }
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(100);
    targets = benchmark_engine_typing,
              benchmark_erase_multibyte,
              benchmark_keyboard_keys,
              benchmark_unbound_keys,
              benchmark_pointer_character_mode
}
criterion_main!(benches);

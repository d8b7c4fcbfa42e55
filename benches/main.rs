use std::{thread::sleep, time::Duration};

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{prelude::SliceRandom, rngs::SmallRng, SeedableRng};

use jpcharset::{jisx0208, kanji};

const VALID: &[&str] = &[
    "人魚は、南の方の海にばかり棲んでいるのではありません。",
    "北方の海にも棲んでいたのであります。",
    "なぜみんな日本語を話してくれないのか",
    "3年B組金八先生",
    "安室奈美恵-with-SUPER-MONKEYS",
    "Hello-Another-Way-それぞれの場所",
    "ひとつ屋根の下2",
    "MajiでKoiする5秒前",
    "パフィーdeルンバ",
    "そのスピードで",
    "-> $1.00 <-",
    "",
];

const INVALID: &[&str] = &[
    "人魚は、南の方の海にばかり髙棲んでいるのではありません。",
    "髙﨑閒",
    "草彅剛",
    "𠮟られる😀",
    "他们为什么不说中文",
    "他們爲什麽不說中文",
    "세계의모든사람들이한국어를이해한다면얼마나좋을까",
    "ⅠⅡⅢ①②③",
    "🦀.☕",
];

const SEED: u64 = 0x5EED_5EED;

fn bench_to_valid(c: &mut Criterion, name: &str, data: &[&'static str]) {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut group = c.benchmark_group(name);

    let domains: [(&str, fn(&str, &str) -> String); 3] = [
        ("jisx0208", |s, r| jisx0208::to_valid(s, r).into_owned()),
        ("regular_use", |s, r| {
            kanji::regular_use::to_valid(s, r).into_owned()
        }),
        ("personal_name", |s, r| {
            kanji::personal_name::to_valid(s, r).into_owned()
        }),
    ];

    for (domain, to_valid) in domains {
        group.bench_function(domain, |b| {
            b.iter_batched_ref(
                || {
                    let mut x = data.to_vec();
                    x.shuffle(&mut rng);
                    x.into_iter()
                },
                |i| {
                    for x in i {
                        black_box(to_valid(black_box(x), "□"));
                    }
                },
                BatchSize::SmallInput,
            );
        });
        sleep(Duration::from_secs(5));
    }
}

fn to_valid(c: &mut Criterion) {
    bench_to_valid(c, "to_valid(valid)", VALID);
    bench_to_valid(c, "to_valid(invalid)", INVALID);
}

fn to_valid_bytes(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(SEED);

    let mut data = INVALID.iter().map(|x| x.as_bytes().to_vec()).collect::<Vec<_>>();
    for x in &mut data {
        x.insert(x.len() / 2, 0xFF);
    }

    c.bench_function("to_valid_bytes(malformed)", |b| {
        b.iter_batched_ref(
            || {
                let mut x = data.clone();
                x.shuffle(&mut rng);
                x.into_iter()
            },
            |i| {
                for x in i {
                    let _ = black_box(jisx0208::to_valid_bytes(black_box(&x), "□"));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, to_valid, to_valid_bytes);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use jsonmend::{Options, loads};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let cases = vec![
        r#"{a:1}"#,
        r#"{"name": "Frodo", "rings": [1, 2, 3], "alive": true}"#,
        r#"// comment
        {"a": 1, /*b*/ "b": 2,}
        "#,
        r#"{'a':2, b: 'x', missing: }"#,
        r#"{"text": "The quick brown fox, \n jumps""#,
        r#"{"a": 1}{"a": 1}{"b": 2}"#,
        r#"[{"k": 1, "k": 2}]"#,
    ];
    let opts = Options::default();
    for (i, s) in cases.into_iter().enumerate() {
        group.bench_function(format!("case_{}", i), |b| {
            b.iter(|| {
                let out = loads(std::hint::black_box(s), &opts).unwrap();
                std::hint::black_box(out);
            })
        });
    }
    group.finish();
}

fn bench_parse_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_large");
    let mut big = String::from("[");
    for i in 0..2000 {
        if i > 0 {
            big.push(',');
        }
        big.push_str(&format!(r#"{{"id": {i}, name: 'row {i}', ok: true}}"#));
    }
    // unclosed on purpose
    let opts = Options::default();
    group.bench_function("array_of_objects_unclosed", |b| {
        b.iter(|| {
            let out = loads(std::hint::black_box(&big), &opts).unwrap();
            std::hint::black_box(out);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_parse_large);
criterion_main!(benches);

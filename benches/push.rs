use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dynamic_array::DynamicArray;

fn bench_push_std(c: &mut Criterion) {
    c.bench_function("std_vec_push", |b| {
        b.iter(|| {
            let mut v = Vec::new();
            for i in 0..1000 {
                v.push(black_box(i));
            }
            v
        })
    });
}

fn bench_push_dynamic(c: &mut Criterion) {
    c.bench_function("dynamic_array_push", |b| {
        b.iter(|| {
            let mut v = DynamicArray::new();
            for i in 0..1000 {
                v.push(black_box(i)).unwrap();
            }
            v
        })
    });
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("dynamic_array_insert_front", |b| {
        b.iter(|| {
            let mut v = DynamicArray::new();
            for i in 0..256 {
                v.insert(0, black_box(i)).unwrap();
            }
            v
        })
    });
}

fn bench_iter_dynamic(c: &mut Criterion) {
    let mut v = DynamicArray::with_capacity(1000).unwrap();
    for i in 0..1000 {
        v.push(i).unwrap();
    }
    c.bench_function("dynamic_array_iter", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for &x in black_box(&v) {
                sum += i64::from(x);
            }
            sum
        })
    });
}

criterion_group!(benches, bench_push_std, bench_push_dynamic, bench_insert_front, bench_iter_dynamic);
criterion_main!(benches);

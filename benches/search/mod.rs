use avlset::{AvlTree, Bst, SearchTree};
use criterion::{measurement::Measurement, BatchSize, BenchmarkGroup, BenchmarkId, Criterion};

use crate::Lfsr;

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("search");

    for n_values in [1_000, 10_000] {
        let mut rand = Lfsr::default();
        let elements = (0..n_values).map(|_| rand.next()).collect::<Vec<_>>();

        let avl = elements.iter().copied().collect::<AvlTree<_>>();
        let bst = elements.iter().copied().collect::<Bst<_>>();

        for n_lookups in [100, 1_000] {
            bench_tree(&mut g, "avl", &avl, &rand, n_values, n_lookups);
            bench_tree(&mut g, "bst", &bst, &rand, n_values, n_lookups);
        }
    }
}

/// Count how many of the next `n` LFSR outputs are present in `t`.
fn count_found<T>(t: &T, mut rand: Lfsr, n: usize) -> usize
where
    T: SearchTree<u16>,
{
    (0..n).filter(|_| t.search(&rand.next())).count()
}

/// Measure `n_lookups` searches of elements held by `t`, then `n_lookups`
/// searches of elements it does not hold.
///
/// `after` is the LFSR state once every element of `t` was generated, so its
/// outputs are all absent from `t`.
fn bench_tree<M, T>(
    g: &mut BenchmarkGroup<'_, M>,
    layer: &str,
    t: &T,
    after: &Lfsr,
    n_values: usize,
    n_lookups: usize,
) where
    M: Measurement,
    T: SearchTree<u16>,
{
    assert!(n_lookups <= n_values);

    let id = BenchmarkId::new(format!("{layer}_{n_values}_present"), n_lookups);
    g.bench_function(id, |b| {
        b.iter_batched(
            Lfsr::default,
            |rand| assert_eq!(count_found(t, rand, n_lookups), n_lookups),
            BatchSize::SmallInput,
        )
    });

    let id = BenchmarkId::new(format!("{layer}_{n_values}_absent"), n_lookups);
    g.bench_function(id, |b| {
        b.iter_batched(
            || after.clone(),
            |rand| assert_eq!(count_found(t, rand, n_lookups), 0),
            BatchSize::SmallInput,
        )
    });
}

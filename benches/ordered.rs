use aa_arena::associative::aa_tree_map::TreeMap;
use aa_arena::hierarchies::aa_tree::AATree;
use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::BTreeMap;
use std::hint::black_box;

pub fn bench_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_collections");

    // You can easily adjust this set
    let sizes: [u64; 4] = [10, 100, 1_000, 10_000];

    //
    // Custom AATree
    //
    let text = "Custom AATree";
    println!("\n{text}");
    underline(text.len());
    println!();

    for &n in &sizes {
        group.bench_with_input(format!("aa_tree_insert_{n}"), &n, |b, &n| {
            b.iter(|| {
                let mut tree = AATree::new();
                for i in 0..n {
                    tree.insert(black_box(i));
                }
                black_box(tree);
            })
        });

        group.bench_with_input(format!("aa_tree_remove_{n}"), &n, |b, &n| {
            b.iter(|| {
                let mut tree = {
                    let mut t = AATree::new();
                    for i in 0..n {
                        t.insert(i);
                    }
                    t
                };
                for i in 0..n {
                    black_box(tree.remove(&i));
                }
            });
        });

        group.bench_with_input(format!("aa_tree_search_{n}"), &n, |b, &n| {
            let mut tree = AATree::new();
            for i in 0..n {
                tree.insert(i);
            }
            b.iter(|| {
                for i in 0..n {
                    black_box(tree.contains(&i));
                }
            })
        });

        group.bench_with_input(format!("aa_tree_scan_{n}"), &n, |b, &n| {
            let mut tree = AATree::new();
            for i in 0..n {
                tree.insert(i);
            }
            b.iter(|| {
                let mut sum: u64 = 0;
                for &key in tree.iter() {
                    sum += key;
                }
                black_box(sum);
            })
        });
    }

    //
    // Custom TreeMap facade
    //
    let text = "Custom TreeMap";
    println!("\n{text}");
    underline(text.len());
    println!();

    for &n in &sizes {
        group.bench_with_input(format!("tree_map_put_{n}"), &n, |b, &n| {
            b.iter(|| {
                let mut map = TreeMap::new();
                for i in 0..n {
                    map.put(black_box(i), black_box("value"));
                }
                black_box(map);
            })
        });

        group.bench_with_input(format!("tree_map_search_{n}"), &n, |b, &n| {
            let mut map = TreeMap::new();
            for i in 0..n {
                map.put(i, "value");
            }
            b.iter(|| {
                for i in 0..n {
                    black_box(map.contains(&i));
                }
            })
        });
    }

    //
    // std::collections::BTreeMap
    //
    let text = "std BTreeMap";
    println!("\n{text}");
    underline(text.len());
    println!();

    for &n in &sizes {
        group.bench_with_input(format!("std_btreemap_insert_{n}"), &n, |b, &n| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for i in 0..n {
                    map.insert(black_box(i), "value");
                }
                black_box(map);
            })
        });

        group.bench_with_input(format!("std_btreemap_remove_{n}"), &n, |b, &n| {
            b.iter(|| {
                let mut map = {
                    let mut m = BTreeMap::new();
                    for i in 0..n {
                        m.insert(i, "value");
                    }
                    m
                };
                for i in 0..n {
                    black_box(map.remove(&i));
                }
            });
        });

        group.bench_with_input(format!("std_btreemap_search_{n}"), &n, |b, &n| {
            let mut map = BTreeMap::new();
            for i in 0..n {
                map.insert(i, "value");
            }
            b.iter(|| {
                for i in 0..n {
                    black_box(map.contains_key(&i));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ordered);
criterion_main!(benches);

fn underline(len: usize) {
    for _ in 0..len {
        print!("=");
    }
    println!();
}

//! Fills a list with random values, prints it, sorts it and destroys it.
//!
//! `DEMO_LEN` sets how many random elements are appended (default 20) and
//! `RUST_LOG` controls log output (default `info`).

use std::cmp::Ordering;
use std::env;
use std::error::Error;

use mola_list::linked_list::owned::List;
use rand::Rng;
use tracing::{info, trace};
use tracing_subscriber::EnvFilter;

const DEFAULT_LEN: usize = 20;

#[derive(Debug)]
struct Foo {
    bar: i32,
    baz: &'static str,
}

fn free_foo(foo: Foo) {
    trace!(bar = foo.bar, baz = foo.baz, "freeing foo");
}

fn compare_foo(a: &Foo, b: &Foo) -> Ordering {
    a.bar.cmp(&b.bar)
}

fn foo_to_string(foo: &Foo) -> String {
    foo.bar.to_string()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let len = env::var("DEMO_LEN")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_LEN);

    let mut list = List::create(Foo { bar: 1, baz: "Test" }, "foo", size_of::<Foo>(), free_foo)?;
    println!("Here is the basic list...");
    print!("{}", list.table(foo_to_string));

    let mut rng = rand::rng();
    for _ in 0..len {
        list.append(Foo {
            bar: rng.random_range(0..1000),
            baz: "More test!",
        });
    }
    println!("Here is a list with more elements...");
    print!("{}", list.table(foo_to_string));

    println!("Sorting in ascending order...");
    let stats = list.sort_by(compare_foo);
    info!(passes = stats.passes, comparisons = stats.comparisons, "sorted {} elements", list.len());
    print!("{}", list.table(foo_to_string));

    println!("Deleting list...");
    list.destroy();

    println!("All done!");
    Ok(())
}

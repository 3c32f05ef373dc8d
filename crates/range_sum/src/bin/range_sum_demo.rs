use clap::{Parser, ValueEnum};
use range_sum::{FenwickTree, LazySegmentTree, RangeSumError};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Scenario {
    Fenwick,
    Lazy,
    Point,
    All,
}

/// Runs the range-sum walkthroughs and prints each answer.
#[derive(Debug, Parser)]
#[command(name = "range_sum_demo")]
struct Args {
    #[arg(long, value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,
}

fn fenwick() -> Result<(), RangeSumError> {
    println!("Fenwick Tree");
    let values: Vec<i64> = (1..=9).collect();
    let mut ft = FenwickTree::new(values.len())?;
    ft.build(&values)?;

    println!("query(0, 4) = {}", ft.query(0, 4)?);
    println!("query(0, 0) = {}", ft.query(0, 0)?);
    println!("query(0, 8) = {}", ft.query(0, 8)?);
    ft.update(3, 6)?;
    println!("after update(3, 6): query(0, 4) = {}", ft.query(0, 4)?);
    Ok(())
}

fn lazy() -> Result<(), RangeSumError> {
    println!("Segment Tree with Lazy Propagation");
    let mut seg = LazySegmentTree::from_values(&[1, 1, 1, 1, 1])?;

    println!("query(0, 2) = {}", seg.query(0, 2)?);
    seg.update(0, 2, 2)?;
    println!("after update(0, 2, 2): query(0, 2) = {}", seg.query(0, 2)?);
    Ok(())
}

fn point() -> Result<(), RangeSumError> {
    println!("Segment Tree with point assignment");
    let mut seg = LazySegmentTree::from_values(&[1, 3, 5, 7, 9, 11])?;

    println!("query(0, 2) = {}", seg.query(0, 2)?);
    println!("query(1, 3) = {}", seg.query(1, 3)?);
    seg.set(2, 10)?;
    println!("after set(2, 10): query(0, 2) = {}", seg.query(0, 2)?);
    println!("after set(2, 10): query(1, 3) = {}", seg.query(1, 3)?);
    Ok(())
}

fn main() -> Result<(), RangeSumError> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("running scenario {:?}", args.scenario);

    match args.scenario {
        Scenario::Fenwick => fenwick(),
        Scenario::Lazy => lazy(),
        Scenario::Point => point(),
        Scenario::All => {
            fenwick()?;
            lazy()?;
            point()
        }
    }
}

use std::hint::black_box;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pattern_algorithms::{
    Grid, binary_search, coin_change, count_components, find_first, find_kth_largest,
    length_of_lis, length_of_lis_quadratic, length_of_longest_substring, lower_bound,
    max_sum_subarray, merge_sort, network_delay_time, num_islands, quickselect_with,
    quicksort_with, three_sum,
};

const DEFAULT_SEED: u64 = 0x1234_5678_9ABC_DEF0;
const WINDOW: usize = 64;
const COINS: [u32; 4] = [1, 7, 13, 29];
/// Longest search input whose doubled values still fit in `i32`.
const MAX_SEARCH_LEN: usize = 1 << 30;

#[derive(Parser, Debug)]
#[command(name = "perf_harness", about = "Time one routine over generated input", version)]
struct Args {
    /// Benchmark to run (see --list)
    #[arg(long, value_enum, required_unless_present = "list")]
    bench: Option<Bench>,

    /// Input length (elements, nodes or grid side; bench-specific default)
    #[arg(long)]
    len: Option<usize>,

    /// Iterations (bench-specific default)
    #[arg(long)]
    iters: Option<usize>,

    /// RNG seed for input generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Skip resetting in-place inputs each iteration
    #[arg(long)]
    no_reset: bool,

    /// Run a quick correctness check before benchmarking
    #[arg(long)]
    verify: bool,

    /// Print throughput summary after the run
    #[arg(long)]
    report: bool,

    /// Show available benches
    #[arg(long)]
    list: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
enum Bench {
    MergeSort,
    Quicksort,
    Quickselect,
    KthLargest,
    BinarySearch,
    FindFirst,
    LowerBound,
    Lis,
    LisQuadratic,
    CoinChange,
    MaxSumSubarray,
    LongestSubstring,
    ThreeSum,
    NumIslands,
    CountComponents,
    NetworkDelay,
}

#[derive(Clone, Copy, Debug)]
struct Config {
    bench: Bench,
    len: usize,
    iters: usize,
    seed: u64,
    reset: bool,
    verify: bool,
    report: bool,
}

type SearchFn = fn(&[i32], &i32) -> Option<usize>;
type SequenceFn = fn(&[i32]) -> usize;

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    if args.list {
        list_benches();
        return Ok(());
    }

    let config = Config::from_args(&args)?;
    info!(
        "bench={} len={} iters={} seed={:#x}",
        config.bench.name(),
        config.len,
        config.iters,
        config.seed
    );

    if config.verify {
        verify_bench(config.bench)
            .with_context(|| format!("verification failed for {}", config.bench.name()))?;
        info!("verification passed");
    }

    run_bench(config)
}

impl Config {
    fn from_args(args: &Args) -> Result<Self> {
        let bench = args.bench.context("missing --bench")?;
        let len = args.len.unwrap_or_else(|| bench.default_len());
        if matches!(bench, Bench::BinarySearch | Bench::FindFirst | Bench::LowerBound) {
            ensure!(
                len <= MAX_SEARCH_LEN,
                "--len {len} exceeds {MAX_SEARCH_LEN} for {}: sorted i32 input would overflow",
                bench.name()
            );
        }
        Ok(Self {
            bench,
            len,
            iters: args.iters.unwrap_or_else(|| bench.default_iters()),
            seed: args.seed,
            reset: !args.no_reset,
            verify: args.verify,
            report: args.report,
        })
    }
}

fn list_benches() {
    for bench in Bench::value_variants() {
        println!("{}", bench.name());
    }
}

impl Bench {
    fn default_len(self) -> usize {
        match self {
            Bench::MergeSort | Bench::Quicksort | Bench::Quickselect | Bench::KthLargest => {
                1_000_000
            }
            Bench::BinarySearch | Bench::FindFirst | Bench::LowerBound => 1_000_000,
            Bench::Lis => 1_000_000,
            Bench::LisQuadratic => 5_000,
            Bench::CoinChange => 1_000_000,
            Bench::MaxSumSubarray | Bench::LongestSubstring => 1_000_000,
            Bench::ThreeSum => 3_000,
            Bench::NumIslands => 1_000,
            Bench::CountComponents | Bench::NetworkDelay => 100_000,
        }
    }

    fn default_iters(self) -> usize {
        match self {
            Bench::MergeSort | Bench::Quicksort | Bench::Quickselect | Bench::KthLargest => 5,
            Bench::BinarySearch | Bench::FindFirst | Bench::LowerBound => 5,
            Bench::Lis | Bench::LisQuadratic => 3,
            Bench::CoinChange => 5,
            Bench::MaxSumSubarray | Bench::LongestSubstring => 10,
            Bench::ThreeSum => 3,
            Bench::NumIslands => 5,
            Bench::CountComponents | Bench::NetworkDelay => 5,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Bench::MergeSort => "merge_sort",
            Bench::Quicksort => "quicksort",
            Bench::Quickselect => "quickselect",
            Bench::KthLargest => "kth_largest",
            Bench::BinarySearch => "binary_search",
            Bench::FindFirst => "find_first",
            Bench::LowerBound => "lower_bound",
            Bench::Lis => "lis",
            Bench::LisQuadratic => "lis_quadratic",
            Bench::CoinChange => "coin_change",
            Bench::MaxSumSubarray => "max_sum_subarray",
            Bench::LongestSubstring => "longest_substring",
            Bench::ThreeSum => "three_sum",
            Bench::NumIslands => "num_islands",
            Bench::CountComponents => "count_components",
            Bench::NetworkDelay => "network_delay",
        }
    }
}

fn make_i32_input(len: usize, rng: &mut StdRng) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(i32::MIN..=i32::MAX)).collect()
}

fn make_sorted_values(len: usize) -> Vec<i32> {
    (0..len).map(|i| (i as i32) * 2).collect()
}

fn make_search_queries(values: &[i32], rng: &mut StdRng) -> Vec<i32> {
    (0..values.len())
        .map(|_| values[rng.gen_range(0..values.len())])
        .collect()
}

fn make_text(len: usize, rng: &mut StdRng) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn make_grid(side: usize, rng: &mut StdRng) -> Result<Grid> {
    let rows: Vec<Vec<u8>> = (0..side)
        .map(|_| (0..side).map(|_| u8::from(rng.gen_bool(0.45))).collect())
        .collect();
    Ok(Grid::from_rows(rows.as_slice())?)
}

/// Random weighted edges between 1-based labels, four per node.
fn make_weighted_edges(nodes: usize, rng: &mut StdRng) -> Vec<(usize, usize, u32)> {
    let mut edges = Vec::with_capacity(nodes * 4);
    // A spine from node 1 keeps every node reachable.
    for v in 2..=nodes {
        edges.push((v - 1, v, rng.gen_range(1..100)));
    }
    while edges.len() < nodes * 4 {
        edges.push((
            rng.gen_range(1..=nodes),
            rng.gen_range(1..=nodes),
            rng.gen_range(1..100),
        ));
    }
    edges
}

fn run_bench(config: Config) -> Result<()> {
    let stats = bench_stats(config.bench, &config);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let start = Instant::now();
    match config.bench {
        Bench::MergeSort => bench_merge_sort(config, &mut rng),
        Bench::Quicksort => bench_quicksort(config, &mut rng),
        Bench::Quickselect => bench_quickselect(config, &mut rng),
        Bench::KthLargest => bench_kth_largest(config, &mut rng),
        Bench::BinarySearch => bench_search(config, &mut rng, binary_search),
        Bench::FindFirst => bench_search(config, &mut rng, find_first),
        Bench::LowerBound => bench_lower_bound(config, &mut rng),
        Bench::Lis => bench_sequence(config, &mut rng, length_of_lis),
        Bench::LisQuadratic => bench_sequence(config, &mut rng, length_of_lis_quadratic),
        Bench::CoinChange => bench_coin_change(config),
        Bench::MaxSumSubarray => bench_max_sum_subarray(config, &mut rng),
        Bench::LongestSubstring => bench_longest_substring(config, &mut rng),
        Bench::ThreeSum => bench_three_sum(config, &mut rng),
        Bench::NumIslands => bench_num_islands(config, &mut rng)?,
        Bench::CountComponents => bench_count_components(config, &mut rng)?,
        Bench::NetworkDelay => bench_network_delay(config, &mut rng)?,
    }
    let elapsed = start.elapsed();
    debug!("elapsed {elapsed:?}");
    if config.report {
        print_report(config.bench, &config, stats, elapsed);
    }
    Ok(())
}

struct BenchStats {
    work_items: u128,
    bytes: u128,
    unit: &'static str,
}

fn bench_stats(bench: Bench, config: &Config) -> BenchStats {
    let len = config.len as u128;
    let iters = config.iters as u128;
    let work_items = len * iters;
    match bench {
        Bench::MergeSort
        | Bench::Quicksort
        | Bench::Quickselect
        | Bench::KthLargest
        | Bench::Lis
        | Bench::MaxSumSubarray => BenchStats {
            work_items,
            bytes: work_items * 4,
            unit: "elem",
        },
        Bench::BinarySearch | Bench::FindFirst | Bench::LowerBound => BenchStats {
            work_items,
            bytes: work_items * 4,
            unit: "query",
        },
        Bench::LisQuadratic | Bench::ThreeSum => BenchStats {
            work_items: len * len * iters,
            bytes: len * len * iters * 4,
            unit: "pair",
        },
        Bench::CoinChange => BenchStats {
            work_items: work_items * COINS.len() as u128,
            bytes: work_items * 4,
            unit: "step",
        },
        Bench::LongestSubstring => BenchStats {
            work_items,
            bytes: work_items,
            unit: "char",
        },
        Bench::NumIslands => BenchStats {
            work_items: len * len * iters,
            bytes: len * len * iters,
            unit: "cell",
        },
        Bench::CountComponents | Bench::NetworkDelay => BenchStats {
            work_items: work_items * 4,
            bytes: work_items * 4 * 24,
            unit: "edge",
        },
    }
}

fn print_report(bench: Bench, config: &Config, stats: BenchStats, elapsed: Duration) {
    let elapsed_s = elapsed.as_secs_f64();
    let items_per_s = stats.work_items as f64 / elapsed_s;
    let bytes_per_s = stats.bytes as f64 / elapsed_s;
    let ns_per_item = (elapsed_s * 1.0e9) / stats.work_items as f64;

    let lines = [
        format!(
            "bench={} len={} iters={}",
            bench.name(),
            config.len,
            config.iters
        ),
        format!(
            "elapsed_s={:.6} ns_per_item={:.3} throughput={}",
            elapsed_s,
            ns_per_item,
            format_rate(items_per_s, stats.unit)
        ),
        format!("work_items={} unit={}", stats.work_items, stats.unit),
        format!(
            "bytes={} byte_throughput={}",
            stats.bytes,
            format_rate(bytes_per_s, "B")
        ),
    ];
    println!("{}", lines.join("\n"));
}

fn format_rate(rate: f64, unit: &str) -> String {
    let (value, prefix) = if rate >= 1.0e12 {
        (rate / 1.0e12, "T")
    } else if rate >= 1.0e9 {
        (rate / 1.0e9, "G")
    } else if rate >= 1.0e6 {
        (rate / 1.0e6, "M")
    } else if rate >= 1.0e3 {
        (rate / 1.0e3, "K")
    } else {
        (rate, "")
    };
    format!("{value:.3} {prefix}{unit}/s")
}

fn verify_bench(bench: Bench) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
    match bench {
        Bench::MergeSort => {
            ensure!(merge_sort(&[5, 2, 4, 6, 1, 3]) == [1, 2, 3, 4, 5, 6]);
        }
        Bench::Quicksort => {
            let mut values = [3, 6, 1, 8, 1, 9, 2];
            quicksort_with(&mut values, &mut rng);
            ensure!(values == [1, 1, 2, 3, 6, 8, 9]);
        }
        Bench::Quickselect => {
            let mut values = [3, 2, 1, 5, 6, 4];
            ensure!(quickselect_with(&mut values, 4, &mut rng) == Some(&5));
        }
        Bench::KthLargest => {
            ensure!(find_kth_largest(&[3, 2, 1, 5, 6, 4], 2) == Some(5));
        }
        Bench::BinarySearch => {
            let values = [1, 3, 5, 7, 9];
            ensure!(binary_search(&values, &5) == Some(2));
            ensure!(binary_search(&values, &6).is_none());
        }
        Bench::FindFirst => {
            ensure!(find_first(&[5, 7, 7, 8, 8, 10], &8) == Some(3));
            ensure!(find_first(&[5, 7, 7, 8, 8, 10], &6).is_none());
        }
        Bench::LowerBound => {
            ensure!(lower_bound(&[1, 3, 3, 5], &3) == 1);
            ensure!(lower_bound(&[1, 3, 3, 5], &6) == 4);
        }
        Bench::Lis => ensure!(length_of_lis(&[10, 9, 2, 5, 3, 7, 101, 18]) == 4),
        Bench::LisQuadratic => {
            ensure!(length_of_lis_quadratic(&[10, 9, 2, 5, 3, 7, 101, 18]) == 4);
        }
        Bench::CoinChange => {
            ensure!(coin_change(&[1, 2, 5], 11) == Some(3));
            ensure!(coin_change(&[2], 3).is_none());
        }
        Bench::MaxSumSubarray => {
            ensure!(max_sum_subarray(&[2, 1, 5, 1, 3, 2], 3) == Some(9));
        }
        Bench::LongestSubstring => ensure!(length_of_longest_substring("abcabcbb") == 3),
        Bench::ThreeSum => {
            let mut values = [-1, 0, 1, 2, -1, -4];
            ensure!(three_sum(&mut values, 0) == [[-1, -1, 2], [-1, 0, 1]]);
        }
        Bench::NumIslands => {
            let mut grid = Grid::parse(&["11000", "11000", "00100", "00011"])?;
            ensure!(num_islands(&mut grid) == 3);
        }
        Bench::CountComponents => {
            ensure!(count_components(5, &[(0, 1), (1, 2), (3, 4)])? == 2);
        }
        Bench::NetworkDelay => {
            let times = [(2, 1, 1), (2, 3, 1), (3, 4, 1)];
            ensure!(network_delay_time(&times, 4, 2)? == Some(2));
        }
    }
    Ok(())
}

fn bench_merge_sort(config: Config, rng: &mut StdRng) {
    let input = make_i32_input(config.len, rng);
    let mut acc = 0i64;
    for _ in 0..config.iters {
        let sorted = merge_sort(black_box(input.as_slice()));
        acc ^= sorted.last().copied().unwrap_or(0) as i64;
        black_box(&sorted);
    }
    black_box(acc);
}

fn bench_quicksort(config: Config, rng: &mut StdRng) {
    let base = make_i32_input(config.len, rng);
    let mut values = base.clone();
    let mut acc = 0i64;
    for _ in 0..config.iters {
        if config.reset {
            values.copy_from_slice(&base);
        }
        quicksort_with(black_box(values.as_mut_slice()), rng);
        acc ^= values.last().copied().unwrap_or(0) as i64;
    }
    black_box(acc);
}

fn bench_quickselect(config: Config, rng: &mut StdRng) {
    let base = make_i32_input(config.len, rng);
    let mut values = base.clone();
    let k = config.len / 2;
    let mut acc = 0i64;
    for _ in 0..config.iters {
        if config.reset {
            values.copy_from_slice(&base);
        }
        if let Some(&v) = quickselect_with(black_box(values.as_mut_slice()), k, rng) {
            acc ^= v as i64;
        }
    }
    black_box(acc);
}

fn bench_kth_largest(config: Config, rng: &mut StdRng) {
    let input = make_i32_input(config.len, rng);
    let k = config.len.min(100);
    let mut acc = 0i64;
    for _ in 0..config.iters {
        if let Some(v) = find_kth_largest(black_box(&input), k) {
            acc ^= v as i64;
        }
    }
    black_box(acc);
}

fn bench_search(config: Config, rng: &mut StdRng, func: SearchFn) {
    if config.len == 0 {
        return;
    }

    let values = make_sorted_values(config.len);
    let queries = make_search_queries(&values, rng);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        let haystack = black_box(values.as_slice());
        for q in &queries {
            if let Some(idx) = func(haystack, black_box(q)) {
                acc ^= idx;
            }
        }
    }
    black_box(acc);
}

fn bench_lower_bound(config: Config, rng: &mut StdRng) {
    if config.len == 0 {
        return;
    }

    let values = make_sorted_values(config.len);
    // Odd queries fall between stored values.
    let queries: Vec<i32> = make_search_queries(&values, rng)
        .into_iter()
        .map(|q| q | 1)
        .collect();
    let mut acc = 0usize;
    for _ in 0..config.iters {
        let haystack = black_box(values.as_slice());
        for q in &queries {
            acc ^= lower_bound(haystack, black_box(q));
        }
    }
    black_box(acc);
}

fn bench_sequence(config: Config, rng: &mut StdRng, func: SequenceFn) {
    let input = make_i32_input(config.len, rng);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        acc ^= func(black_box(&input));
    }
    black_box(acc);
}

fn bench_coin_change(config: Config) {
    let amount = u32::try_from(config.len).unwrap_or(u32::MAX);
    let mut acc = 0u32;
    for _ in 0..config.iters {
        if let Some(coins) = coin_change(black_box(COINS.as_slice()), black_box(amount)) {
            acc ^= coins;
        }
    }
    black_box(acc);
}

fn bench_max_sum_subarray(config: Config, rng: &mut StdRng) {
    let input: Vec<i32> = (0..config.len).map(|_| rng.gen_range(-1000..1000)).collect();
    let mut acc = 0i64;
    for _ in 0..config.iters {
        if let Some(sum) = max_sum_subarray(black_box(&input), WINDOW) {
            acc ^= sum;
        }
    }
    black_box(acc);
}

fn bench_longest_substring(config: Config, rng: &mut StdRng) {
    let text = make_text(config.len, rng);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        acc ^= length_of_longest_substring(black_box(&text));
    }
    black_box(acc);
}

fn bench_three_sum(config: Config, rng: &mut StdRng) {
    let base: Vec<i32> = (0..config.len).map(|_| rng.gen_range(-1000..1000)).collect();
    let mut values = base.clone();
    let mut acc = 0usize;
    for _ in 0..config.iters {
        if config.reset {
            values.copy_from_slice(&base);
        }
        acc ^= three_sum(black_box(values.as_mut_slice()), 0).len();
    }
    black_box(acc);
}

fn bench_num_islands(config: Config, rng: &mut StdRng) -> Result<()> {
    let base = make_grid(config.len, rng)?;
    debug!("grid has {} land cells", base.land_count());
    let mut acc = 0usize;
    for _ in 0..config.iters {
        // The traversal consumes land, so every pass needs a fresh copy.
        let mut grid = base.clone();
        acc ^= num_islands(black_box(&mut grid));
    }
    black_box(acc);
    Ok(())
}

fn bench_count_components(config: Config, rng: &mut StdRng) -> Result<()> {
    if config.len == 0 {
        return Ok(());
    }

    let nodes = config.len;
    let edges: Vec<(usize, usize)> = (0..nodes * 4)
        .map(|_| (rng.gen_range(0..nodes), rng.gen_range(0..nodes)))
        .collect();
    let mut acc = 0usize;
    for _ in 0..config.iters {
        acc ^= count_components(nodes, black_box(&edges))?;
    }
    black_box(acc);
    Ok(())
}

fn bench_network_delay(config: Config, rng: &mut StdRng) -> Result<()> {
    if config.len == 0 {
        return Ok(());
    }

    let nodes = config.len;
    let times = make_weighted_edges(nodes, rng);
    let mut acc = 0u64;
    for _ in 0..config.iters {
        let delay = network_delay_time(black_box(&times), nodes, 1)?;
        acc ^= delay.context("spine edges left a node unreachable")?;
    }
    black_box(acc);
    Ok(())
}

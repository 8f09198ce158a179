use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_word_finder::sample;
use rs_word_finder::*;
use std::alloc::{GlobalAlloc, Layout, System};
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Tracks the number of live heap bytes so the benchmark can report how much
/// memory each searcher retains.
struct CountingAllocator;

static LIVE_BYTES: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            LIVE_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        LIVE_BYTES.fetch_sub(layout.size(), Ordering::Relaxed);
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

/// Simple program to find the most frequent query words hidden in a
/// character grid.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a small fixed sample grid with every searcher.
    Demo,
    /// Time every searcher against a generated 64x64 grid.
    Benchmark {
        /// Number of search iterations to average over.
        #[clap(short, long, default_value_t = 10)]
        iterations: u32,

        /// Searcher to benchmark: "brute-force", "dfs" or "trie". Any other
        /// name selects the trie searcher. All three run when omitted.
        #[clap(short, long)]
        searcher: Option<String>,
    },
}

const SEARCHER_NAMES: [&str; 3] = ["brute-force", "dfs", "trie"];

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Demo => run_demo()?,
        Command::Benchmark {
            iterations,
            searcher,
        } => match searcher {
            Some(name) => run_benchmark(&name, iterations)?,
            None => {
                for name in SEARCHER_NAMES {
                    run_benchmark(name, iterations)?;
                }
            }
        },
    }
    Ok(())
}

fn run_demo() -> Result<(), Box<dyn Error>> {
    let rows = ["chill", "coldw", "windy", "storm", "rainy"];
    let stream = ["chill", "cold", "wind", "storm", "rain", "snow", "wind", "cold"];

    let mut finder = WordFinder::new(&rows)?;
    println!("Default (brute-force): {}", finder.find(&stream).join(", "));

    for name in ["dfs", "trie"] {
        finder.set_searcher(searcher_for_name(name));
        println!("{}: {}", name, finder.find(&stream).join(", "));
    }
    Ok(())
}

fn embedded_words() -> Vec<&'static str> {
    vec![
        "algorithm",
        "binary",
        "compile",
        "debug",
        "execute",
        "function",
        "hardware",
        "iterate",
        "kernel",
        "library",
        "memory",
        "network",
        "object",
        "program",
        "search",
        "sort",
        "stack",
        "queue",
        "tree",
        "graph",
        "hash",
        "heap",
        "array",
        "pointer",
        "recursion",
        "syntax",
        "variable",
        "loop",
        "class",
        "method",
        "interface",
        "exception",
        "thread",
        "process",
        "mutex",
        "semaphore",
        "monitor",
        "lock",
        "index",
        "cache",
    ]
}

/// Builds a query stream of findable words, repeats, and words that are not
/// in the grid.
fn query_stream(embedded: &[&str]) -> Vec<String> {
    let mut stream: Vec<String> = embedded.iter().map(|word| word.to_string()).collect();
    stream.extend(embedded.iter().take(20).map(|word| word.to_string()));
    stream.extend((1..=10).map(|index| format!("notinthegrid{}", index)));
    stream
}

fn run_benchmark(searcher_name: &str, iterations: u32) -> Result<(), Box<dyn Error>> {
    let embedded = embedded_words();
    let mut rng = StdRng::seed_from_u64(42);
    let rows = sample::generate_grid(&mut rng, 64, &embedded);
    let stream = query_stream(&embedded);

    let mut total_millis = 0.0;
    let mut total_retained_bytes: i64 = 0;

    for _ in 0..iterations {
        let bytes_before = LIVE_BYTES.load(Ordering::Relaxed);
        let start_time = Instant::now();

        let mut finder = WordFinder::new(&rows)?;
        finder.set_searcher(searcher_for_name(searcher_name));
        let found = finder.find(&stream);

        total_millis += start_time.elapsed().as_secs_f64() * 1000.0;
        let bytes_after = LIVE_BYTES.load(Ordering::Relaxed);
        total_retained_bytes += bytes_after as i64 - bytes_before as i64;
        drop(found);
    }

    println!(
        "Searcher: {}, Average Time Taken: {:.2} ms, Average Memory Used: {:.2} KB",
        searcher_name,
        total_millis / iterations as f64,
        total_retained_bytes as f64 / iterations as f64 / 1024.0
    );
    Ok(())
}

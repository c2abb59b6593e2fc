//! Benchmarks for the document-wide string operations
//!
//! Run with: cargo bench text_ops

use text_helper::format::{convert_text, OutputFormat};
use text_helper::util::{count_substring, get_stats, replace_text, strip_text, to_upper};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample_text(line_count: usize) -> String {
    "  The quick brown fox, jumps over the \"lazy\" dog.  \r\n".repeat(line_count)
}

// ============================================================================
// Transforms
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn strip_lines(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| strip_text(divan::black_box(&text)));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn uppercase(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| to_upper(divan::black_box(&text)));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn replace_word(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| replace_text(divan::black_box(&text), "fox", "cat"));
}

// ============================================================================
// Queries
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn count_word(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| count_substring(divan::black_box(&text), "the"));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn stats(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| get_stats(divan::black_box(&text)));
}

// ============================================================================
// Conversion
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn convert_csv(bencher: divan::Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher.bench(|| convert_text(divan::black_box(&text), "bench", OutputFormat::Csv));
}

//! Benchmark runner for substring searchers
//!
//! Checks every searcher against a fixed list of cases, then times them on
//! generated haystacks and prints JSON results.
//!
//! Usage: bm-benchmark [TARGET_MS]

use std::time::{Duration, Instant};

use boyer_moore::{baselines::*, BoyerMooreSearcher, SubstringSearcher};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Serialize)]
struct BenchmarkResult {
    name: String,
    ops_per_second: f64,
    total_time_ns: u64,
    iterations: u64,
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<BenchmarkResult>,
    correctness: bool,
    /// Boyer-Moore throughput over memchr's
    boyer_moore_vs_memchr: Option<f64>,
}

fn generate_test_data() -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut rng = rand::thread_rng();
    let mut cases = Vec::new();

    // Large haystack with needle at various positions
    let large: Vec<u8> = (0..100_000).map(|_| rng.gen_range(b'a'..=b'z')).collect();

    // Needle at end
    let mut haystack1 = large.clone();
    let needle1 = b"MARKER".to_vec();
    haystack1.extend_from_slice(&needle1);
    cases.push((haystack1, needle1));

    // Needle at beginning
    let mut haystack2 = b"NEEDLE".to_vec();
    haystack2.extend_from_slice(&large);
    cases.push((haystack2, b"NEEDLE".to_vec()));

    // Needle in middle
    let mut haystack3 = large[..50_000].to_vec();
    haystack3.extend_from_slice(b"FINDME");
    haystack3.extend_from_slice(&large[50_000..]);
    cases.push((haystack3, b"FINDME".to_vec()));

    // Needle not present
    cases.push((large.clone(), b"ZZZZZ".to_vec()));

    // Long needle: the bad-character rule skips most of the haystack
    cases.push((large.clone(), b"the quick brown fox jumps over the lazy dog".to_vec()));

    // Needle whose suffix recurs inside it, driving the good-suffix rule
    let mut haystack4 = b"ABYXCDEYX".repeat(5_000);
    haystack4.extend_from_slice(b"ABYXCDBYX");
    cases.push((haystack4, b"ABYXCDBYX".to_vec()));

    // Short haystack, short needle
    cases.push((b"hello world".to_vec(), b"wor".to_vec()));

    // Single byte needle (memchr's specialty)
    cases.push((large.clone(), b"x".to_vec()));

    // Medium haystack over a small alphabet
    let medium: Vec<u8> = (0..10_000).map(|_| rng.gen_range(b'a'..=b'd')).collect();
    cases.push((medium, b"abcd".to_vec()));

    // Repeated pattern haystack
    let repeated: Vec<u8> = b"abcdefgh".repeat(10_000);
    cases.push((repeated, b"efgh".to_vec()));

    // Binary data
    let binary: Vec<u8> = (0..50_000).map(|_| rng.gen::<u8>()).collect();
    cases.push((binary, vec![0x00, 0x01, 0x02, 0x03]));

    // DNA-like sequence
    let dna: Vec<u8> = (0..100_000)
        .filter_map(|_| [b'A', b'C', b'G', b'T'].choose(&mut rng).copied())
        .collect();
    cases.push((dna, b"GATTACA".to_vec()));

    cases
}

fn verify_correctness<S: SubstringSearcher>(searcher: &S, name: &str) -> bool {
    let tests = vec![
        (b"hello world".as_slice(), b"world".as_slice(), Some(6)),
        (b"hello", b"hello", Some(0)),
        (b"hello", b"ello", Some(1)),
        (b"hello", b"xyz", None),
        (b"hello", b"", Some(0)),
        (b"", b"a", None),
        (b"aaaa", b"aa", Some(0)),
        (b"abcabc", b"abc", Some(0)),
        (b"ABYXCDEYX", b"ABYXCDBYX", None),
        (b"PANAMANAP ANPANMAN", b"ANPANMAN", Some(10)),
    ];

    for (haystack, needle, expected) in tests {
        let result = searcher.find(haystack, needle);
        if result != expected {
            log::error!(
                "{}: find({:?}, {:?}) = {:?}, expected {:?}",
                name,
                haystack,
                needle,
                result,
                expected
            );
            return false;
        }
    }
    true
}

/// Cross-check a searcher against memchr on the generated data.
fn verify_against_memchr<S: SubstringSearcher>(
    searcher: &S,
    name: &str,
    test_data: &[(Vec<u8>, Vec<u8>)],
) -> bool {
    test_data.iter().all(|(haystack, needle)| {
        let ok = searcher.find(haystack, needle) == MemchrSearcher.find(haystack, needle);
        if !ok {
            log::error!("{}: disagrees with memchr on needle {:?}", name, needle);
        }
        ok
    })
}

fn benchmark<S: SubstringSearcher>(
    searcher: &S,
    name: &str,
    test_data: &[(Vec<u8>, Vec<u8>)],
    target_time: Duration,
) -> BenchmarkResult {
    // Warmup
    for _ in 0..10 {
        for (haystack, needle) in test_data {
            let _ = searcher.find(haystack, needle);
        }
    }

    let mut total_iterations: u64 = 0;
    let start = Instant::now();

    while start.elapsed() < target_time {
        for (haystack, needle) in test_data {
            let _ = searcher.find(haystack, needle);
        }
        total_iterations += test_data.len() as u64;
    }

    let elapsed = start.elapsed();
    let ops_per_second = total_iterations as f64 / elapsed.as_secs_f64();
    log::info!("{}: {:.0} ops/s", name, ops_per_second);

    BenchmarkResult {
        name: name.to_string(),
        ops_per_second,
        total_time_ns: elapsed.as_nanos() as u64,
        iterations: total_iterations,
    }
}

fn main() -> boyer_moore::Result<()> {
    env_logger::init();

    let target_ms: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(500);
    let target_time = Duration::from_millis(target_ms);

    let test_data = generate_test_data();

    let all_correct = verify_correctness(&NaiveSearcher, "naive")
        && verify_correctness(&StdSearcher, "std")
        && verify_correctness(&MemchrSearcher, "memchr")
        && verify_correctness(&BoyerMooreSearcher, "boyer-moore")
        && verify_against_memchr(&BoyerMooreSearcher, "boyer-moore", &test_data);

    if !all_correct {
        let results = FullResults {
            results: vec![],
            correctness: false,
            boyer_moore_vs_memchr: None,
        };
        println!("{}", serde_json::to_string(&results)?);
        return Ok(());
    }

    let results = vec![
        benchmark(&NaiveSearcher, "naive", &test_data, target_time),
        benchmark(&StdSearcher, "std", &test_data, target_time),
        benchmark(&MemchrSearcher, "memchr", &test_data, target_time),
        benchmark(&BoyerMooreSearcher, "boyer-moore", &test_data, target_time),
    ];

    let ops = |name: &str| {
        results
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.ops_per_second)
    };
    let boyer_moore_vs_memchr = match (ops("boyer-moore"), ops("memchr")) {
        (Some(bm), Some(memchr)) if memchr > 0.0 => Some(bm / memchr),
        _ => None,
    };

    let full_results = FullResults {
        results,
        correctness: true,
        boyer_moore_vs_memchr,
    };

    println!("{}", serde_json::to_string(&full_results)?);
    Ok(())
}

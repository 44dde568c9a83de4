//! Benchmarks for indexing and ancestry resolution.
//!
//! Run with: cargo bench --bench resolve_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use crumbs::domain::{NoteId, Settings, resolve};
use crumbs::index::{IndexBuilder, VaultIndex, validate_vault};
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Folders notes are spread across, so links resolve by name and by path
const FOLDERS: &[&str] = &["", "areas", "areas/health", "projects", "archive/2024"];

fn note_path(i: usize) -> String {
    let folder = FOLDERS[i % FOLDERS.len()];
    if folder.is_empty() {
        format!("Note {i}.md")
    } else {
        format!("{folder}/Note {i}.md")
    }
}

fn note_id(i: usize) -> NoteId {
    NoteId::new(&note_path(i)).expect("generated path is valid")
}

/// Creates a vault where note `i` links to notes `2i+1` and `2i+2` (a binary
/// tree under `Note 0`), plus a few cross links that make ancestry ambiguous.
fn create_vault(count: usize) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    for i in 0..count {
        let mut body = format!("# Note {i}\n\n");
        for child in [2 * i + 1, 2 * i + 2] {
            if child < count {
                body.push_str(&format!("- [[Note {child}]]\n"));
            }
        }
        if i % 7 == 3 && i + 11 < count {
            body.push_str(&format!("See also [note](../Note%20{}.md).\n", i + 11));
        }
        if i % 5 == 0 && i > 0 {
            body.push_str(&format!("\nparent:: [[Note {}]]\n", (i - 1) / 2));
        }

        let path = dir.path().join(note_path(i));
        fs::create_dir_all(path.parent().expect("note has a folder")).expect("Failed to create folder");
        fs::write(path, body).expect("Failed to write note");
    }

    dir
}

/// In-memory chain `N0 <- N1 <- ... <- N{len-1}`.
fn chain_index(len: usize) -> VaultIndex {
    let mut index = VaultIndex::new();
    for i in 0..len {
        index.insert_note(note_id(i));
    }
    for i in 1..len {
        index.add_link(note_id(i - 1), note_id(i));
    }
    index
}

/// One note with `fan_in` backlinks, all competing to be its parent.
fn fan_in_index(fan_in: usize) -> VaultIndex {
    let mut index = VaultIndex::new();
    let leaf = NoteId::new("Leaf.md").expect("valid path");
    index.insert_note(leaf.clone());
    for i in 0..fan_in {
        index.insert_note(note_id(i));
        index.add_link(note_id(i), leaf.clone());
    }
    index
}

// =============================================================================
// Index Build Benchmarks
// =============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 500, 1000] {
        let dir = create_vault(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("notes", size), &size, |b, _| {
            let builder = IndexBuilder::new(dir.path());
            b.iter(|| builder.build().unwrap());
        });
    }

    group.finish();
}

// =============================================================================
// Resolution Benchmarks
// =============================================================================

fn bench_deep_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_deep_chain");
    let index = chain_index(1000);

    for depth in [5, 50, 500] {
        let settings = Settings::new(note_id(0)).with_max_depth(depth);
        group.bench_with_input(BenchmarkId::new("max_depth", depth), &depth, |b, _| {
            b.iter(|| resolve(black_box(&note_id(999)), &index, &index, &settings));
        });
    }

    group.finish();
}

fn bench_wide_fan_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_fan_in");
    let leaf = NoteId::new("Leaf.md").expect("valid path");
    let settings = Settings::default();

    for fan_in in [2, 100, 5000] {
        let index = fan_in_index(fan_in);
        group.bench_with_input(BenchmarkId::new("backlinks", fan_in), &fan_in, |b, _| {
            b.iter(|| resolve(black_box(&leaf), &index, &index, &settings));
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for size in [100, 1000] {
        let dir = create_vault(size);
        let index = IndexBuilder::new(dir.path()).build().unwrap().index;
        let settings = Settings::new(note_id(0));

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("notes", size), &size, |b, _| {
            b.iter(|| validate_vault(&index, &settings));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_deep_chain,
    bench_wide_fan_in,
    bench_validate
);
criterion_main!(benches);

//! Benchmarks for circuit list operations
//!
//! Run with: cargo bench -p qlist-ir

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qlist_ir::{CircuitList, Instruction};

/// A layered circuit with every angle-carrying opcode.
fn sample_lines(num_bits: usize, layers: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for layer in 0..layers {
        for q in 0..num_bits {
            lines.push(format!("HAD2\tAT\t{q}"));
            lines.push(format!("ROTX\t{}\tAT\t{q}", layer * 3 + q));
            lines.push(format!("ROTN\t#{layer}\t-#{q}*2\t15\tAT\t{q}"));
        }
        for q in 1..num_bits {
            lines.push(format!("SIGX\tAT\t{q}\tIF\t{}T", q - 1));
        }
        lines.push(format!("DIAG\tIF\t1(1)\t0(0)\tBY\t10\t20\t30\tf#{layer}"));
    }
    lines
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for layers in &[1, 10, 100] {
        let lines = sample_lines(8, *layers);
        group.bench_with_input(BenchmarkId::new("from_lines", layers), &lines, |b, lines| {
            b.iter(|| CircuitList::from_lines(8, black_box(lines)).unwrap());
        });
    }

    group.bench_function("single_line", |b| {
        b.iter(|| {
            black_box("MP_Y\tAT\t2\tIF\t1(0)\t0F\tBY\t30\t#4")
                .parse::<Instruction>()
                .unwrap()
        });
    });

    group.finish();
}

fn bench_herm(c: &mut Criterion) {
    let mut group = c.benchmark_group("herm");

    for layers in &[1, 10, 100] {
        let circuit = CircuitList::from_lines(8, sample_lines(8, *layers)).unwrap();
        group.bench_with_input(BenchmarkId::new("herm", layers), &circuit, |b, circuit| {
            b.iter(|| circuit.herm().unwrap());
        });
    }

    group.finish();
}

fn bench_collect(c: &mut Criterion) {
    let circuit = CircuitList::from_lines(8, sample_lines(8, 50)).unwrap();
    c.bench_function("collect_variables_and_functions", |b| {
        b.iter(|| black_box(&circuit).collect_variables_and_functions());
    });
}

criterion_group!(benches, bench_parse, bench_herm, bench_collect);
criterion_main!(benches);

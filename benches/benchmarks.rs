use autonpm_cli::installer::{build_args, InstallOptions};
use autonpm_cli::resolver::specifier::{dependency_key, is_external_name};
use autonpm_cli::utils::kebab::kebab_case;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark dependency-key derivation
fn bench_dependency_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependency_key");

    let specifiers = [
        "react",
        "lodash/fp/curry",
        "@babel/core/lib/index.js",
        "./client/components/App",
    ];

    group.bench_function("derive_and_classify", |b| {
        b.iter(|| {
            for specifier in &specifiers {
                let key = dependency_key(black_box(specifier));
                black_box(is_external_name(&key));
            }
        });
    });

    group.finish();
}

/// Benchmark install argument construction
fn bench_build_args(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_args");

    let options = InstallOptions::new()
        .with_save(true)
        .with_flag("registry", "https://registry.example.com")
        .with_flag("legacyPeerDeps", true)
        .with_flag("audit", false);

    group.bench_function("typical_flags", |b| {
        b.iter(|| black_box(build_args(black_box("left-pad"), &options)));
    });

    group.bench_function("kebab_case", |b| {
        b.iter(|| black_box(kebab_case(black_box("legacyPeerDeps"))));
    });

    group.finish();
}

criterion_group!(benches, bench_dependency_key, bench_build_args);
criterion_main!(benches);

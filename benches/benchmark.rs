use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resume_screener::{
    similarity_score, BatchScreener, CandidateDocument, ReferenceDocument, ReferenceSet, ScreeningConfig,
    LinguisticResources, TextNormalizer,
};

const VOCAB: &[&str] = &[
    "python", "sql", "excel", "tableau", "statistics", "machine", "learning", "deep", "tensorflow",
    "docker", "kubernetes", "aws", "react", "typescript", "leadership", "design", "pipeline",
    "analytics", "reporting", "visualization", "rust", "golang", "microservices", "testing",
];

// 疑似ランダムな履歴書テキスト
fn synthetic_resume(seed: usize, words: usize) -> String {
    let mut state = (seed as u64).wrapping_mul(2654435761).wrapping_add(1);
    let mut text = format!("Candidate {seed} | candidate{seed}@mail.example | 98765{:05}\n", seed % 100_000);
    for i in 0..words {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        text.push_str(VOCAB[((state >> 33) as usize) % VOCAB.len()]);
        text.push(if i % 12 == 11 { '\n' } else { ' ' });
    }
    text
}

fn references() -> ReferenceSet {
    ReferenceSet::new(
        Some(ReferenceDocument::new(
            "jd.txt",
            "Looking for a Data Scientist with Python, Machine Learning, SQL and visualization experience.",
        )),
        vec![
            ReferenceDocument::new("data_analyst.txt", "SQL Excel Tableau statistics reporting visualization"),
            ReferenceDocument::new("ml_engineer.txt", "Python machine learning deep learning TensorFlow Docker"),
            ReferenceDocument::new("backend_engineer.txt", "Rust Golang microservices Kubernetes AWS testing"),
        ],
    )
}

fn screening_benchmark(c: &mut Criterion) {
    let resume = synthetic_resume(7, 400);
    let normalizer = TextNormalizer::default();

    c.bench_function("normalize", |b| {
        b.iter(|| normalizer.normalize(black_box(&resume)));
    });

    let normalized = normalizer.normalize(&resume);
    let jd = normalizer.normalize("python machine learning sql visualization data scientist");
    c.bench_function("similarity_score", |b| {
        b.iter(|| similarity_score(black_box(&normalized), black_box(&jd)));
    });

    let candidates: Vec<CandidateDocument> = (0..200)
        .map(|i| CandidateDocument::new(format!("resume{i}.txt"), synthetic_resume(i, 300)))
        .collect();
    let refs = references();

    let parallel = BatchScreener::default();
    c.bench_function("screen_batch_parallel_200", |b| {
        b.iter(|| parallel.screen_batch(black_box(&candidates), &refs));
    });

    let config = ScreeningConfig {
        parallel: false,
        ..ScreeningConfig::default()
    };
    if let Ok(sequential) = BatchScreener::new(config, LinguisticResources::english()) {
        c.bench_function("screen_batch_sequential_200", |b| {
            b.iter(|| sequential.screen_batch(black_box(&candidates), &refs));
        });
    }
}

criterion_group!(benches, screening_benchmark);
criterion_main!(benches);

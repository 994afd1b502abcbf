// Criterion benchmarks for Octopets

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use octopets::core::extract::{parse_analysis, parse_recommendations};
use octopets::core::mean_rating;
use octopets::core::prompts::compatibility_prompt;
use octopets::models::{PetProfile, Review};
use uuid::Uuid;

const FULL_REPLY: &str = r#"{
  "suitabilityScore": "8/10 - Calm and well socialized",
  "recommendedVenueTypes": ["dog park", "pet cafe", "outdoor restaurant"],
  "venueRequirements": ["secure fencing", "water stations"],
  "behaviorPrediction": "Relaxed around people, curious about other dogs",
  "safetyConsiderations": ["Keep leashed near roads", "Watch for overheating"],
  "recommendedAmenities": ["shade", "water bowls", "waste stations"],
  "generalAdvice": "Start with quiet hours and build up"
}"#;

fn reviews(n: usize) -> Vec<Review> {
    (0..n)
        .map(|i| Review {
            id: Uuid::new_v4(),
            user_id: i.to_string(),
            user_name: format!("User {}", i),
            rating: 1 + (i % 5) as u8,
            comment: String::new(),
            date: Utc::now().date_naive(),
        })
        .collect()
}

fn bench_parse_analysis(c: &mut Criterion) {
    let fenced = format!("```json\n{}\n```", FULL_REPLY);

    let mut group = c.benchmark_group("parse_analysis");
    group.bench_function("plain", |b| b.iter(|| parse_analysis(black_box("Rex"), black_box(FULL_REPLY))));
    group.bench_function("fenced", |b| b.iter(|| parse_analysis(black_box("Rex"), black_box(&fenced))));
    group.bench_function("invalid", |b| {
        b.iter(|| parse_analysis(black_box("Rex"), black_box("Rex is a very good boy")))
    });
    group.finish();
}

fn bench_parse_recommendations(c: &mut Criterion) {
    let reply = r#"["Dog parks", "Pet-friendly cafes", "Outdoor restaurants", "Hiking trails"]"#;
    c.bench_function("parse_recommendations", |b| b.iter(|| parse_recommendations(black_box(reply))));
}

fn bench_prompt(c: &mut Criterion) {
    let profile = PetProfile {
        special_needs: vec!["arthritis".to_string(), "reactive to bikes".to_string()],
        ..PetProfile::probe()
    };
    c.bench_function("compatibility_prompt", |b| b.iter(|| compatibility_prompt(black_box(&profile))));
}

fn bench_mean_rating(c: &mut Criterion) {
    let mut group = c.benchmark_group("mean_rating");

    for size in [10, 100, 1000].iter() {
        let data = reviews(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| mean_rating(black_box(data)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_analysis,
    bench_parse_recommendations,
    bench_prompt,
    bench_mean_rating
);
criterion_main!(benches);

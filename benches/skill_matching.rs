use std::hint::black_box;

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use skillswap::matching::match_profiles;
use skillswap::models::{Skill, SkillCategory, SkillLevel, UserProfile};

/// Generate a profile with the given numbers of offered and wanted skills
fn generate_profile(id: &str, offered: usize, wanted: usize) -> UserProfile {
    let categories = SkillCategory::ALL;
    let skill = |prefix: &str, i: usize| Skill {
        id: format!("{prefix}-{i}"),
        name: format!("Skill name {}", i % 40),
        category: categories[i % categories.len()],
        level: SkillLevel::Intermediate,
        description: String::new(),
        tags: Vec::new(),
    };

    UserProfile {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        display_name: id.to_string(),
        photo_url: None,
        bio: None,
        location: String::new(),
        timezone: "UTC".to_string(),
        skills_offered: (0..offered).map(|i| skill("offered", i)).collect(),
        skills_wanted: (0..wanted).map(|i| skill("wanted", i + 3)).collect(),
        rating: 0.0,
        total_swaps: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        is_online: false,
        last_seen: Utc::now(),
    }
}

fn bench_skill_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("skill_matching");

    // Square profiles: n offered x n wanted on both sides
    for size in [4usize, 16, 64].iter() {
        let me = generate_profile("me", *size, *size);
        let other = generate_profile("other", *size, *size);

        group.throughput(Throughput::Elements((*size * *size * 2) as u64));
        group.bench_with_input(BenchmarkId::new("square", size), size, |b, _| {
            b.iter(|| match_profiles(black_box(&me), black_box(&other)));
        });
    }

    // Typical page render: one requesting profile against 20 candidates
    let me = generate_profile("me", 5, 5);
    let candidates: Vec<UserProfile> =
        (0..20).map(|i| generate_profile(&format!("candidate-{i}"), 5, 5)).collect();

    group.bench_function("page_of_candidates", |b| {
        b.iter(|| {
            candidates
                .iter()
                .map(|candidate| match_profiles(black_box(&me), black_box(candidate)).len())
                .sum::<usize>()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_skill_matching);
criterion_main!(benches);

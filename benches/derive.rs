use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use storygloss_rs::article::heading_index;
use storygloss_rs::story::display_title;

fn synthetic_article(sections: usize) -> String {
    let mut content = String::from("# Folktales of Japan\n\n");
    for n in 0..sections {
        content.push_str(&format!("## Section {n}\n\nBody paragraph {n}.\n\n"));
        content.push_str(&format!("### Detail {n}\n\nMore text.\n\n"));
    }
    content
}

fn bench_heading_index(c: &mut Criterion) {
    for &sections in &[10usize, 100, 500] {
        let content = synthetic_article(sections);
        c.bench_with_input(
            BenchmarkId::new("heading_index", sections),
            &content,
            |b, content| {
                b.iter(|| {
                    let index = heading_index(content);
                    black_box(index.len());
                });
            },
        );
    }
}

fn bench_display_title(c: &mut Criterion) {
    const NAMES: &[&str] = &[
        "momotaro--oni_island",
        "urashima_taro",
        "kasajizo",
        "hanasaka_jiisan--the_withered_tree",
    ];
    for &name in NAMES {
        c.bench_with_input(BenchmarkId::new("display_title", name), &name, |b, &name| {
            b.iter(|| {
                black_box(display_title(name));
            });
        });
    }
}

criterion_group!(benches, bench_heading_index, bench_display_title);
criterion_main!(benches);

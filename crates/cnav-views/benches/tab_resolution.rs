//! Benchmarks for tab resolution.

use std::sync::Arc;

use cnav_access::{MockAccessControl, MockEnrollmentStore, Viewer};
use cnav_course::{Course, CourseKey};
use cnav_settings::{ENABLE_DISCUSSION_SERVICE, ENABLE_TEXTBOOK, Settings};
use cnav_tabs::{TabDocument, TabList, TabRegistry};
use cnav_views::{RouteTable, TabResolver};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// Create a course with the given number of textbooks on its shelf.
fn create_course(books: usize) -> Course {
    let mut course = Course::new(
        CourseKey::new("course-v1:RW+NAV101+2026"),
        "Navigation 101",
    );
    for i in 0..books {
        course = course.with_textbook(format!("Book {i}"));
    }
    course
}

fn create_resolver(course: &Course) -> TabResolver {
    TabResolver::new(
        Arc::new(TabRegistry::new()),
        Arc::new(MockAccessControl::new().with_staff("teacher", &course.key)),
        Arc::new(MockEnrollmentStore::new().with_enrollment("learner", &course.key)),
        Arc::new(RouteTable::course_defaults()),
    )
}

fn create_tabs(registry: &TabRegistry) -> TabList {
    let docs = vec![
        TabDocument::new("courseware"),
        TabDocument::new("course_info").with_name("Course Info"),
        TabDocument::new("textbooks"),
        TabDocument::new("discussion").with_name("Discussion"),
        TabDocument::new("wiki").with_name("Wiki"),
        TabDocument::new("progress").with_name("Progress"),
        TabDocument::new("static_tab")
            .with_name("Handouts")
            .with_url_slug("handouts"),
    ];
    TabList::from_documents(&docs, registry).unwrap()
}

fn settings() -> Settings {
    Settings::default()
        .with_feature(ENABLE_DISCUSSION_SERVICE, true)
        .with_feature(ENABLE_TEXTBOOK, true)
}

fn bench_resolve_per_viewer(c: &mut Criterion) {
    let course = create_course(4);
    let resolver = create_resolver(&course);
    let tabs = create_tabs(resolver.registry());
    let settings = settings();
    let learner = Viewer::authenticated("learner");
    let teacher = Viewer::authenticated("teacher");
    let anonymous = Viewer::anonymous();

    let mut group = c.benchmark_group("resolve");

    group.bench_function("enrolled", |b| {
        b.iter(|| resolver.resolve_visible_tabs(&tabs, &course, &settings, Some(&learner)))
    });

    group.bench_function("staff", |b| {
        b.iter(|| resolver.resolve_visible_tabs(&tabs, &course, &settings, Some(&teacher)))
    });

    group.bench_function("anonymous", |b| {
        b.iter(|| resolver.resolve_visible_tabs(&tabs, &course, &settings, Some(&anonymous)))
    });

    group.bench_function("preview", |b| {
        b.iter(|| resolver.resolve_visible_tabs(&tabs, &course, &settings, None))
    });

    group.finish();
}

fn bench_collection_expansion(c: &mut Criterion) {
    let settings = settings();
    let learner = Viewer::authenticated("learner");

    let mut group = c.benchmark_group("expand_shelf");

    for books in [4, 16, 64] {
        let course = create_course(books);
        let resolver = create_resolver(&course);
        let tabs = create_tabs(resolver.registry());

        group.bench_with_input(
            BenchmarkId::new("books", books),
            &course,
            |b, course| {
                b.iter(|| resolver.resolve_visible_tabs(&tabs, course, &settings, Some(&learner)))
            },
        );
    }

    group.finish();
}

fn bench_materialize_documents(c: &mut Criterion) {
    let registry = TabRegistry::new();
    let docs: Vec<TabDocument> = (0..20)
        .map(|i| {
            TabDocument::new("static_tab")
                .with_name(format!("Page {i}"))
                .with_url_slug(format!("page-{i}"))
        })
        .collect();

    let mut group = c.benchmark_group("materialize");

    group.bench_function("static_tabs_20", |b| {
        b.iter(|| TabList::from_documents(&docs, &registry))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_per_viewer,
    bench_collection_expansion,
    bench_materialize_documents,
);

criterion_main!(benches);

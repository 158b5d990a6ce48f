use axum::{body::Body, http::Request, Router};
use cardform::adapters::page_handler::PageHandler;
use cardform::catalog::Catalog;
use cardform::config::{
    AssetSettings, ClientSettings, RendererSettings, ServerSettings, Settings,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use tower::util::ServiceExt;

fn create_settings() -> Arc<Settings> {
    Arc::new(Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        renderer: RendererSettings::default(),
        assets: AssetSettings::default(),
        client: ClientSettings::default(),
        catalog: Catalog::default(),
    })
}

fn create_test_app() -> Router {
    cardform::create_app(create_settings()).unwrap()
}

fn benchmark_render_index(c: &mut Criterion) {
    let handler = PageHandler::new(create_settings()).unwrap();

    c.bench_function("render_index", |b| {
        b.iter(|| black_box(handler.render_index().unwrap()));
    });
}

fn benchmark_get_index(c: &mut Criterion) {
    let app = create_test_app();
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("get_index", |b| {
        b.to_async(&rt).iter(|| {
            let app = app.clone();
            async move {
                let request = Request::builder().uri("/").body(Body::empty()).unwrap();
                black_box(app.oneshot(request).await.unwrap())
            }
        });
    });
}

fn benchmark_request_throughput(c: &mut Criterion) {
    let app = create_test_app();
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("throughput");
    group.throughput(Throughput::Elements(1));

    group.bench_function("health_requests_per_second", |b| {
        b.to_async(&rt).iter(|| {
            let app = app.clone();
            async move {
                let request = Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap();
                black_box(app.oneshot(request).await.unwrap())
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_render_index,
    benchmark_get_index,
    benchmark_request_throughput
);
criterion_main!(benches);

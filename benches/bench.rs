// Criterion benchmarks for FitHub ML Service

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fithub_ml::core::{PlaceholderRecommender, PlaceholderSegmenter, Recommender, Segmenter};
use fithub_ml::models::{
    JsonObject, RecommendationRequest, RecommendationResponse, SegmentRequest,
};
use serde_json::Value;

fn bench_request_parsing(c: &mut Criterion) {
    let recommend = r#"{"product_id":"sku-123","limit":5}"#;
    let segment = r#"{"user_id":"user-123","features":{"orders":12,"avg_basket":48.5,"channels":["web","app"]}}"#;

    c.bench_function("parse_recommendation_request", |b| {
        b.iter(|| {
            serde_json::from_str::<JsonObject>(black_box(recommend)).map(RecommendationRequest::from)
        })
    });

    c.bench_function("parse_segment_request", |b| {
        b.iter(|| {
            serde_json::from_str::<JsonObject>(black_box(segment)).map(SegmentRequest::from)
        })
    });
}

fn bench_placeholder_models(c: &mut Criterion) {
    let recommender = PlaceholderRecommender;
    let segmenter = PlaceholderSegmenter;
    let product_id = Value::from("sku-123");
    let user_id = Value::from("user-123");
    let features = Value::Null;

    c.bench_function("recommend_and_serialize", |b| {
        b.iter(|| {
            let recommendations = recommender.recommend(black_box(&product_id), 5).unwrap();
            serde_json::to_vec(&RecommendationResponse {
                success: true,
                product_id: product_id.clone(),
                recommendations,
            })
        })
    });

    c.bench_function("segment", |b| {
        b.iter(|| segmenter.segment(black_box(&user_id), &features))
    });
}

criterion_group!(benches, bench_request_parsing, bench_placeholder_models);
criterion_main!(benches);

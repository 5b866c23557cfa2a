// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 Marquee

mod common;

use std::time::Duration;

use axum::{
	Router,
	body::{Body, to_bytes},
	http::{Method, Request, StatusCode, header},
	response::Response,
};
use common::{POPULAR, TOP_250, state};
use marquee_sub_server_http::{HttpConfig, router};
use tower::ServiceExt;

fn app() -> Router {
	router(state(&HttpConfig::default()))
}

async fn get(app: Router, uri: &str, if_none_match: Option<&str>) -> Response {
	let mut request = Request::builder().method(Method::GET).uri(uri);
	if let Some(validator) = if_none_match {
		request = request.header(header::IF_NONE_MATCH, validator);
	}
	app.oneshot(request.body(Body::empty()).unwrap()).await.unwrap()
}

async fn body(response: Response) -> Vec<u8> {
	to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

fn etag(response: &Response) -> String {
	response.headers()[header::ETAG].to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_catalog_then_revalidate() {
	let app = app();

	let first = get(app.clone(), "/catalog/movie/imdb-top-250.json", None).await;
	assert_eq!(first.status(), StatusCode::OK);
	assert_eq!(first.headers()[header::CONTENT_TYPE], "application/json");
	assert_eq!(first.headers()[header::CACHE_CONTROL], "max-age=43200, public");
	let tag = etag(&first);
	assert_eq!(tag.len(), 32);

	let content = body(first).await;
	let json: serde_json::Value = serde_json::from_slice(&content).unwrap();
	let ids: Vec<&str> = json["metas"].as_array().unwrap().iter().map(|m| m["id"].as_str().unwrap()).collect();
	assert_eq!(ids, vec!["tt1", "tt3"]);

	let second = get(app, "/catalog/movie/imdb-top-250.json", Some(&tag)).await;
	assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
	assert_eq!(etag(&second), tag);
	assert_eq!(second.headers()[header::CACHE_CONTROL], "max-age=43200, public");
	assert!(body(second).await.is_empty());
}

#[tokio::test]
async fn test_catalogs_have_distinct_etags() {
	let app = app();
	let top = get(app.clone(), &format!("/catalog/movie/{}.json", TOP_250), None).await;
	let popular = get(app, &format!("/catalog/movie/{}.json", POPULAR), None).await;
	assert_eq!(popular.status(), StatusCode::OK);
	assert_ne!(etag(&top), etag(&popular));
}

#[tokio::test]
async fn test_unsupported_type_is_not_found() {
	let response = get(app(), "/catalog/series/imdb-top-250.json", None).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert!(response.headers().get(header::ETAG).is_none());
}

#[tokio::test]
async fn test_unknown_catalog_is_not_found() {
	let response = get(app(), "/catalog/movie/unknown-id.json", None).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert!(body(response).await.is_empty());
}

#[tokio::test]
async fn test_missing_json_suffix_is_not_found() {
	let response = get(app(), "/catalog/movie/imdb-top-250", None).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wildcard_is_not_modified() {
	let app = app();
	let expected = etag(&get(app.clone(), "/catalog/movie/imdb-top-250.json", None).await);

	let response = get(app, "/catalog/movie/imdb-top-250.json", Some("*")).await;
	assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
	assert_eq!(etag(&response), expected);
}

#[tokio::test]
async fn test_wildcard_does_not_hide_unknown_catalog() {
	let app = app();
	let unknown = get(app.clone(), "/catalog/movie/unknown-id.json", Some("*")).await;
	assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

	let wrong_type = get(app, "/catalog/series/imdb-top-250.json", Some("*")).await;
	assert_eq!(wrong_type.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stale_or_quoted_validator_gets_full_body() {
	let app = app();
	let tag = etag(&get(app.clone(), "/catalog/movie/imdb-top-250.json", None).await);

	let stale = get(app.clone(), "/catalog/movie/imdb-top-250.json", Some("0123456789abcdef0123456789abcdef")).await;
	assert_eq!(stale.status(), StatusCode::OK);
	assert_eq!(etag(&stale), tag);
	assert!(!body(stale).await.is_empty());

	let quoted = get(app, "/catalog/movie/imdb-top-250.json", Some(&format!("\"{}\"", tag))).await;
	assert_eq!(quoted.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_another_catalogs_etag_does_not_match() {
	let app = app();
	let popular = etag(&get(app.clone(), "/catalog/movie/imdb-most-popular.json", None).await);

	let response = get(app, "/catalog/movie/imdb-top-250.json", Some(&popular)).await;
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
	let response = get(app(), "/health", None).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body(response).await, b"OK");
}

#[tokio::test]
async fn test_manifest() {
	let response = get(app(), "/manifest.json", None).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

	let json: serde_json::Value = serde_json::from_slice(&body(response).await).unwrap();
	assert_eq!(json["version"], "1.2.3");
	assert_eq!(json["types"], serde_json::json!(["movie"]));
	assert_eq!(json["catalogs"][0]["id"], TOP_250);
	assert_eq!(json["catalogs"][1]["id"], POPULAR);
}

#[tokio::test]
async fn test_root_redirects_permanently() {
	let config = HttpConfig::default().with_redirect_url("https://example.com/addon");
	let response = get(router(state(&config)), "/", None).await;
	assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
	assert_eq!(response.headers()[header::LOCATION], "https://example.com/addon");
}

#[tokio::test]
async fn test_configured_max_age() {
	let config = HttpConfig::default().with_max_age(Duration::from_secs(60));
	let response = get(router(state(&config)), "/catalog/movie/imdb-top-250.json", None).await;
	assert_eq!(response.headers()[header::CACHE_CONTROL], "max-age=60, public");
}

#[tokio::test]
async fn test_other_methods_are_rejected() {
	let request = Request::builder()
		.method(Method::POST)
		.uri("/catalog/movie/imdb-top-250.json")
		.body(Body::empty())
		.unwrap();
	let response = app().oneshot(request).await.unwrap();
	assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
	let response = get(app(), "/catalogs", None).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

//! Consumer contract tests: the real client against an in-process mock provider

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use bookshelf_core::{ApiClient, BookQuery, BookshelfError, Notice, SortOrder};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// A canned response for a path and (optionally) an exact set of query pairs
struct Interaction {
    path: String,
    query: Option<Vec<(String, String)>>,
    status: StatusCode,
    body: Body,
}

enum Body {
    Json(Value),
    Raw(Vec<u8>),
}

#[derive(Debug, Clone)]
struct Received {
    path: String,
    query: Vec<(String, String)>,
    accept: Option<String>,
}

#[derive(Clone, Default)]
struct MockProvider {
    interactions: Arc<Mutex<Vec<Interaction>>>,
    received: Arc<Mutex<Vec<Received>>>,
}

impl MockProvider {
    fn given(&self, path: &str, query: Option<&[(&str, &str)]>, status: StatusCode, body: Value) {
        self.push(path, query, status, Body::Json(body));
    }

    fn given_raw(&self, path: &str, status: StatusCode, body: &[u8]) {
        self.push(path, None, status, Body::Raw(body.to_vec()));
    }

    fn push(&self, path: &str, query: Option<&[(&str, &str)]>, status: StatusCode, body: Body) {
        self.interactions.lock().unwrap().push(Interaction {
            path: path.to_string(),
            query: query.map(|q| {
                q.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            }),
            status,
            body,
        });
    }

    fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }

    /// Serve on an ephemeral port and return the base URL
    async fn start(&self) -> String {
        let app = Router::new().fallback(respond).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

async fn respond(
    State(provider): State<MockProvider>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    provider.received.lock().unwrap().push(Received {
        path: uri.path().to_string(),
        query: query.clone(),
        accept: headers
            .get(header::ACCEPT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    let interactions = provider.interactions.lock().unwrap();
    let matched = interactions.iter().find(|i| {
        i.path == uri.path() && i.query.as_ref().map_or(true, |expected| *expected == query)
    });

    match matched {
        Some(Interaction {
            status,
            body: Body::Json(body),
            ..
        }) => (*status, axum::Json(body.clone())).into_response(),
        Some(Interaction {
            status,
            body: Body::Raw(bytes),
            ..
        }) => (*status, bytes.clone()).into_response(),
        None => (
            StatusCode::IM_A_TEAPOT,
            format!("no interaction for {}", uri),
        )
            .into_response(),
    }
}

fn book_json() -> Value {
    json!({
        "id": 1,
        "title": "Azure AI Services at Scale for Cloud, Mobile, and Edge",
        "subtitle": "Building Intelligent Apps with Azure Cognitive Services and Machine Learning",
        "isbn10": "1098108043",
        "isbn13": 9781098108045u64,
        "asin": "B01LXWQUFF",
        "pages": 228,
        "edition": 1,
        "pub_date": "2022-05-24T00:00:00Z",
        "book_file_size": 55425169,
        "cover_file_name": "1098108043.jpg",
        "publisher": "OReilly",
        "language": "English",
        "author_ids": [1],
        "category_ids": [1],
        "file_type_ids": [1],
        "tag_ids": []
    })
}

fn page_json(page: u32, size: u32, total_pages: u32, total_elements: u64, content: Value) -> Value {
    json!({
        "data": {
            "page": page,
            "size": size,
            "total_pages": total_pages,
            "total_elements": total_elements,
            "content": content
        }
    })
}

#[tokio::test]
async fn test_list_books_request_and_response() {
    let provider = MockProvider::default();
    provider.given(
        "/v1/books",
        Some(&[
            ("page", "1"),
            ("size", "1"),
            ("sort", "updated_at,desc"),
            ("query", ""),
        ]),
        StatusCode::OK,
        page_json(1, 1, 8620, 8620, json!([book_json()])),
    );
    let client = ApiClient::new(provider.start().await).unwrap();

    let page = client
        .list_books(&BookQuery::new().page(1).size(1))
        .await
        .unwrap();

    assert_eq!(page.total_pages, 8620);
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].publisher.as_deref(), Some("OReilly"));
    assert_eq!(page.content[0].isbn13, Some(9781098108045));

    let received = provider.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].accept.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_list_books_with_filters() {
    let provider = MockProvider::default();
    provider.given(
        "/v1/books",
        None,
        StatusCode::OK,
        page_json(3, 10, 3, 25, json!([])),
    );
    let client = ApiClient::new(provider.start().await).unwrap();

    let query = BookQuery::new()
        .page(3)
        .sort(SortOrder::TitleAsc)
        .search("rust & go")
        .publishers([7, 11]);
    let page = client.list_books(&query).await.unwrap();
    assert!(page.is_empty());

    let received = provider.received();
    let pairs: Vec<(&str, &str)> = received[0]
        .query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("page", "3"),
            ("size", "10"),
            ("sort", "title,asc"),
            ("query", "rust & go"),
            ("publisher_ids", "7"),
            ("publisher_ids", "11"),
        ]
    );
}

#[tokio::test]
async fn test_file_types_page() {
    let provider = MockProvider::default();
    provider.given(
        "/v1/file_types",
        Some(&[("page", "1"), ("size", "2"), ("sort", "name,asc")]),
        StatusCode::OK,
        page_json(
            1,
            2,
            2,
            4,
            json!([{"id": 1, "name": "pdf"}, {"id": 2, "name": "epub"}]),
        ),
    );
    let client = ApiClient::new(provider.start().await).unwrap();

    let page = client.file_types_page(1, 2, "name,asc").await.unwrap();
    assert_eq!(page.total_elements, 4);
    assert_eq!(page.content[1].name, "epub");
}

#[tokio::test]
async fn test_get_book_detail() {
    let provider = MockProvider::default();
    let mut detail = book_json();
    detail["authors"] = json!(["Anand Raman", "Chris Hoder"]);
    detail["categories"] = json!(["AI"]);
    detail["file_types"] = json!(["pdf"]);
    detail["description"] = json!("<p>Build apps.</p>");
    provider.given(
        "/v1/books/1",
        None,
        StatusCode::OK,
        json!({ "data": detail }),
    );
    let client = ApiClient::new(provider.start().await).unwrap();

    let book = client.get_book(1).await.unwrap();
    assert_eq!(book.authors, vec!["Anand Raman", "Chris Hoder"]);
    assert_eq!(book.summary.asin.as_deref(), Some("B01LXWQUFF"));
    assert_eq!(book.description.as_deref(), Some("<p>Build apps.</p>"));
}

#[tokio::test]
async fn test_all_publishers_walks_every_page() {
    let provider = MockProvider::default();
    for (page, content) in [
        ("1", json!([{"id": 1, "name": "Apress"}, {"id": 2, "name": "Manning"}])),
        ("2", json!([{"id": 3, "name": "No Starch"}, {"id": 4, "name": "OReilly"}])),
        ("3", json!([{"id": 5, "name": "Packt"}])),
    ] {
        let number: u32 = page.parse().unwrap();
        provider.given(
            "/v1/publishers",
            Some(&[("page", page), ("size", "50"), ("sort", "name,asc")]),
            StatusCode::OK,
            page_json(number, 50, 3, 5, content),
        );
    }
    let client = ApiClient::new(provider.start().await).unwrap();

    let publishers = client.all_publishers().await.unwrap();
    assert_eq!(publishers.len(), 5);
    assert_eq!(publishers.get(4), Some("OReilly"));

    let pages: Vec<String> = provider
        .received()
        .into_iter()
        .map(|r| r.query[0].1.clone())
        .collect();
    assert_eq!(pages, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_all_publishers_stops_on_failed_page() {
    let provider = MockProvider::default();
    provider.given(
        "/v1/publishers",
        Some(&[("page", "1"), ("size", "50"), ("sort", "name,asc")]),
        StatusCode::OK,
        page_json(1, 50, 4, 200, json!([{"id": 1, "name": "Apress"}])),
    );
    provider.given(
        "/v1/publishers",
        None,
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"errors": [{"field": "", "message": "database unavailable"}]}),
    );
    let client = ApiClient::new(provider.start().await).unwrap();

    let err = client.all_publishers().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(provider.received().len(), 2);
}

#[tokio::test]
async fn test_all_file_types_single_page() {
    let provider = MockProvider::default();
    provider.given(
        "/v1/file_types",
        Some(&[("page", "1"), ("size", "100"), ("sort", "name,asc")]),
        StatusCode::OK,
        page_json(
            1,
            100,
            1,
            3,
            json!([{"id": 1, "name": "pdf"}, {"id": 2, "name": "epub"}, {"id": 3, "name": "mobi"}]),
        ),
    );
    let client = ApiClient::new(provider.start().await).unwrap();

    let file_types = client.all_file_types().await.unwrap();
    assert_eq!(file_types.resolve(&[3, 1, 99]), vec!["mobi", "pdf"]);
}

#[tokio::test]
async fn test_error_envelope_becomes_notice() {
    let provider = MockProvider::default();
    provider.given(
        "/v1/books",
        None,
        StatusCode::BAD_REQUEST,
        json!({"errors": [
            {"field": "size", "message": "size must be at most 100"},
            {"field": "sort", "message": "unknown sort field"}
        ]}),
    );
    let client = ApiClient::new(provider.start().await).unwrap();

    let err = client
        .list_books(&BookQuery::new().size(1000))
        .await
        .unwrap_err();
    assert!(err.is_api_error());

    let notice = Notice::from_error("Book list fetch error", &err).unwrap();
    assert_eq!(
        notice.message,
        "size must be at most 100,unknown sort field"
    );
}

#[tokio::test]
async fn test_not_found_without_envelope() {
    let provider = MockProvider::default();
    provider.given_raw("/v1/books/999", StatusCode::NOT_FOUND, b"not here");
    let client = ApiClient::new(provider.start().await).unwrap();

    let err = client.get_book(999).await.unwrap_err();
    match err {
        BookshelfError::Api { status, errors } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(errors.message(), "Not Found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let provider = MockProvider::default();
    provider.given_raw("/v1/books/1", StatusCode::OK, b"{\"data\": ");
    let client = ApiClient::new(provider.start().await).unwrap();

    let err = client.get_book(1).await.unwrap_err();
    assert!(matches!(err, BookshelfError::Decode(_)));
    assert!(Notice::from_error("Book fetch error", &err).is_none());
}

#[tokio::test]
async fn test_download_streams_body() {
    let provider = MockProvider::default();
    let payload: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    provider.given_raw("/v1/books/5/download", StatusCode::OK, &payload);
    let client = ApiClient::new(provider.start().await).unwrap();

    let mut sink: Vec<u8> = Vec::new();
    let mut last_progress = 0;
    let written = client
        .download_book(5, &mut sink, |done, _total| last_progress = done)
        .await
        .unwrap();

    assert_eq!(written, payload.len() as u64);
    assert_eq!(last_progress, written);
    assert_eq!(sink, payload);
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Bind and drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{}", addr)).unwrap();
    let err = client.all_file_types().await.unwrap_err();
    assert!(matches!(err, BookshelfError::Http(_)));
    assert!(Notice::from_error("File types fetch error", &err).is_none());
}

//! End-to-end tests for the GraphQL API over the in-memory backend.

use std::sync::Arc;
use std::time::Duration;

use async_graphql::Request;
use futures::StreamExt;

use kinograph::catalog::{CallerIdentity, CatalogService};
use kinograph::graphql::{self, CatalogSchema};
use kinograph::notify::ChangeNotifier;
use kinograph::store::MemoryStore;

fn build_test_schema() -> CatalogSchema {
    let catalog = Arc::new(CatalogService::new(
        Arc::new(MemoryStore::new()),
        Arc::new(ChangeNotifier::new()),
    ));
    graphql::build_schema(catalog)
}

fn authed(query: impl Into<String>) -> Request {
    Request::new(query).data(CallerIdentity("tester".to_string()))
}

const ADD_36TH_CHAMBER: &str = r#"
    mutation {
        addMovie(movie: {
            title: "36th Chamber",
            releaseDate: "10-10-1983",
            rating: 5,
            status: WATCHED,
            actor: { name: "Gordon Liu" }
        }) {
            id
            title
            releaseDate
            rating
            status
            actor { id name }
        }
    }
"#;

#[tokio::test]
async fn query_movies_starts_empty() {
    let schema = build_test_schema();

    let res = schema.execute(Request::new("{ movies { id title } }")).await;

    assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
    let data = res.data.into_json().expect("Failed to convert to JSON");
    assert_eq!(data["movies"].as_array().expect("movies should be array").len(), 0);
}

#[tokio::test]
async fn add_movie_with_identity_creates_one_movie() {
    let schema = build_test_schema();

    let res = schema.execute(authed(ADD_36TH_CHAMBER)).await;

    assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
    let data = res.data.into_json().expect("Failed to convert to JSON");
    let added = data["addMovie"].as_array().expect("addMovie should be array");
    assert_eq!(added.len(), 1);
    assert_eq!(added[0]["title"], "36th Chamber");
    assert_eq!(added[0]["rating"], 5);
    assert_eq!(added[0]["status"], "WATCHED");
    // 1983-10-10 midnight UTC as epoch seconds
    assert_eq!(added[0]["releaseDate"], 434592000);
    assert_eq!(added[0]["actor"]["name"], "Gordon Liu");

    let res = schema.execute(Request::new("{ movies { title } }")).await;
    let data = res.data.into_json().unwrap();
    assert_eq!(data["movies"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn add_movie_without_identity_is_a_read() {
    let schema = build_test_schema();
    schema.execute(authed(ADD_36TH_CHAMBER)).await;

    let res = schema
        .execute(Request::new(
            r#"mutation { addMovie(movie: { title: "Dirty Ho" }) { title } }"#,
        ))
        .await;

    assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
    let data = res.data.into_json().unwrap();
    let returned = data["addMovie"].as_array().unwrap();
    // The anonymous branch returns the existing list, untouched.
    assert_eq!(returned.len(), 1);
    assert_eq!(returned[0]["title"], "36th Chamber");

    let res = schema.execute(Request::new("{ movies { title } }")).await;
    let data = res.data.into_json().unwrap();
    let movies = data["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "36th Chamber");
}

#[tokio::test]
async fn movie_lookup_by_id_and_not_found_null() {
    let schema = build_test_schema();

    let res = schema.execute(authed(ADD_36TH_CHAMBER)).await;
    let data = res.data.into_json().unwrap();
    let id = data["addMovie"][0]["id"].as_str().unwrap().to_string();

    let res = schema
        .execute(Request::new(format!(r#"{{ movie(id: "{id}") {{ id title }} }}"#)))
        .await;
    assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
    let data = res.data.into_json().unwrap();
    assert_eq!(data["movie"]["id"], id.as_str());
    assert_eq!(data["movie"]["title"], "36th Chamber");

    let res = schema
        .execute(Request::new(r#"{ movie(id: "nonexistent") { id } }"#))
        .await;
    assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
    let data = res.data.into_json().unwrap();
    assert!(data["movie"].is_null());
}

#[tokio::test]
async fn repeated_actor_names_reuse_the_record() {
    let schema = build_test_schema();

    let first = schema.execute(authed(ADD_36TH_CHAMBER)).await;
    let second = schema
        .execute(authed(
            r#"mutation {
                addMovie(movie: { title: "Heroes of the East", actor: { name: "Gordon Liu" } }) {
                    actor { id }
                }
            }"#,
        ))
        .await;

    let a = first.data.into_json().unwrap()["addMovie"][0]["actor"]["id"].clone();
    let b = second.data.into_json().unwrap()["addMovie"][0]["actor"]["id"].clone();
    assert_eq!(a, b);
}

#[tokio::test]
async fn release_date_accepts_epoch_integers() {
    let schema = build_test_schema();

    let res = schema
        .execute(authed(
            r#"mutation {
                addMovie(movie: { title: "5 Deadly Venoms", releaseDate: 434592000 }) {
                    releaseDate
                    status
                }
            }"#,
        ))
        .await;

    assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
    let data = res.data.into_json().unwrap();
    assert_eq!(data["addMovie"][0]["releaseDate"], 434592000);
    // status defaults to UNKNOWN when absent
    assert_eq!(data["addMovie"][0]["status"], "UNKNOWN");
}

#[tokio::test]
async fn movie_added_subscription_sees_new_movies() {
    let schema = build_test_schema();

    let mut stream = schema.execute_stream(Request::new(
        "subscription { movieAdded { title actor { name } } }",
    ));

    let mutation_schema = schema.clone();
    let writer = tokio::spawn(async move {
        // Give the subscription a moment to register before publishing.
        tokio::time::sleep(Duration::from_millis(100)).await;
        mutation_schema.execute(authed(ADD_36TH_CHAMBER)).await
    });

    let event = tokio::time::timeout(Duration::from_secs(5), stream.next())
        .await
        .expect("subscription timed out")
        .expect("subscription ended early");

    assert!(event.errors.is_empty(), "Errors: {:?}", event.errors);
    let data = event.data.into_json().unwrap();
    assert_eq!(data["movieAdded"]["title"], "36th Chamber");
    assert_eq!(data["movieAdded"]["actor"]["name"], "Gordon Liu");

    let res = writer.await.unwrap();
    assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
}

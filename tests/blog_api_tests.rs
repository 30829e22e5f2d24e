//! End-to-end tests of the blog API over an in-memory store

use axum::http::StatusCode;
use axum_test::TestServer;
use bloglist::prelude::*;
use serde_json::{Value, json};

fn initial_blogs() -> Vec<Blog> {
    [
        ("React patterns", "Michael Chan", "https://reactpatterns.com/", 7),
        (
            "Go To Statement Considered Harmful",
            "Edsger W. Dijkstra",
            "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html",
            5,
        ),
        (
            "Canonical string reduction",
            "Edsger W. Dijkstra",
            "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html",
            12,
        ),
    ]
    .into_iter()
    .map(|(title, author, url, likes)| Blog::from_new(NewBlog::new(title, author, url, likes)))
    .collect()
}

fn create_test_server() -> (TestServer, InMemoryBlogService) {
    let service = InMemoryBlogService::with_blogs(initial_blogs());

    let app = ServerBuilder::new()
        .with_blog_service(service.clone())
        .build()
        .expect("Failed to build app");

    let server = TestServer::new(app).expect("Failed to create test server");
    (server, service)
}

async fn blogs_in_store(service: &InMemoryBlogService) -> Vec<Blog> {
    service.list().await.unwrap()
}

fn type_wars() -> Value {
    json!({
        "title": "Type wars",
        "author": "Robert C. Martin",
        "url": "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html",
        "likes": 2,
    })
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let (server, _) = create_test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

mod read_tests {
    use super::*;

    #[tokio::test]
    async fn test_blogs_are_returned_as_json() {
        let (server, _) = create_test_server();

        let response = server.get("/api/blogs").await;
        response.assert_status_ok();

        let content_type = response.header("content-type");
        assert!(content_type.to_str().unwrap().contains("application/json"));

        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 3);
    }

    #[tokio::test]
    async fn test_blogs_have_id() {
        let (server, _) = create_test_server();

        let body: Vec<Value> = server.get("/api/blogs").await.json();
        for blog in body {
            assert!(blog["id"].as_str().is_some());
            assert!(blog.get("_id").is_none());
        }
    }

    #[tokio::test]
    async fn test_get_single_blog() {
        let (server, service) = create_test_server();
        let first = blogs_in_store(&service).await.remove(0);

        let response = server.get(&format!("/api/blogs/{}", first.id)).await;
        response.assert_status_ok();

        let body: Blog = response.json();
        assert_eq!(body, first);
    }

    #[tokio::test]
    async fn test_unknown_id_is_404() {
        let (server, _) = create_test_server();

        let response = server.get(&format!("/api/blogs/{}", Uuid::new_v4())).await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["code"], "BLOG_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_id_is_400() {
        let (server, _) = create_test_server();

        let response = server.get("/api/blogs/not-a-uuid").await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_ID");
        assert!(body["message"].as_str().unwrap().contains("not-a-uuid"));
    }
}

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_a_blog_can_be_added() {
        let (server, service) = create_test_server();

        let response = server.post("/api/blogs").json(&type_wars()).await;
        response.assert_status(StatusCode::CREATED);

        let blogs = blogs_in_store(&service).await;
        assert_eq!(blogs.len(), 4);
        assert!(blogs.iter().any(|b| b.title == "Type wars"));
    }

    #[tokio::test]
    async fn test_missing_likes_defaults_to_zero() {
        let (server, _) = create_test_server();

        let response = server
            .post("/api/blogs")
            .json(&json!({
                "title": "Type wars",
                "author": "Robert C. Martin",
                "url": "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html",
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let blogs: Vec<Value> = server.get("/api/blogs").await.json();
        let added = blogs
            .iter()
            .find(|b| b["title"] == "Type wars")
            .expect("added blog should be listed");
        assert_eq!(added["likes"], 0);
    }

    #[tokio::test]
    async fn test_blog_without_title_or_url_is_rejected() {
        let (server, service) = create_test_server();

        let payloads = [
            json!({ "author": "Robert C. Martin", "likes": 5 }),
            json!({
                "author": "Robert C. Martin",
                "url": "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html",
                "likes": 5,
            }),
            json!({ "title": "Type wars", "author": "Robert C. Martin", "likes": 5 }),
        ];

        for payload in payloads {
            let response = server.post("/api/blogs").json(&payload).await;
            response.assert_status_bad_request();

            let body: Value = response.json();
            assert_eq!(body["code"], "VALIDATION_ERROR");
            assert_eq!(blogs_in_store(&service).await.len(), 3);
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_rejected() {
        let (server, service) = create_test_server();

        let response = server
            .post("/api/blogs")
            .json(&json!({ "title": "t", "url": "u", "likes": "many" }))
            .await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_JSON");
        assert_eq!(blogs_in_store(&service).await.len(), 3);
    }
}

mod update_delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_deleting_a_blog() {
        let (server, service) = create_test_server();
        let to_delete = blogs_in_store(&service).await.remove(0);

        server
            .delete(&format!("/api/blogs/{}", to_delete.id))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let blogs = blogs_in_store(&service).await;
        assert_eq!(blogs.len(), 2);
        assert!(!blogs.iter().any(|b| b.title == to_delete.title));

        server
            .delete(&format!("/api/blogs/{}", to_delete.id))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_updating_a_blog() {
        let (server, service) = create_test_server();
        let to_update = blogs_in_store(&service).await.remove(0);

        let response = server
            .put(&format!("/api/blogs/{}", to_update.id))
            .json(&json!({
                "title": to_update.title,
                "author": to_update.author,
                "url": to_update.url,
                "likes": 100,
            }))
            .await;
        response.assert_status_ok();

        let body: Blog = response.json();
        assert_eq!(body.id, to_update.id);
        assert_eq!(body.likes, 100);

        let stored = service.get(&to_update.id).await.unwrap().unwrap();
        assert_eq!(stored.likes, 100);
        assert_eq!(stored.created_at, to_update.created_at);
    }

    #[tokio::test]
    async fn test_updating_unknown_blog_is_404() {
        let (server, _) = create_test_server();

        server
            .put(&format!("/api/blogs/{}", Uuid::new_v4()))
            .json(&type_wars())
            .await
            .assert_status_not_found();
    }
}

mod summary_tests {
    use super::*;

    #[tokio::test]
    async fn test_summary_of_initial_blogs() {
        let (server, _) = create_test_server();

        let response = server.get("/api/blogs/summary").await;
        response.assert_status_ok();

        let summary: BlogSummary = response.json();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_likes, 24);
        assert_eq!(
            summary.favorite_blog.unwrap().title,
            "Canonical string reduction"
        );
        assert_eq!(
            summary.most_blogs,
            Some(AuthorBlogs {
                author: "Edsger W. Dijkstra".to_string(),
                blogs: 2,
            })
        );
        assert_eq!(
            summary.most_likes,
            Some(AuthorLikes {
                author: "Edsger W. Dijkstra".to_string(),
                likes: 17,
            })
        );
    }

    #[tokio::test]
    async fn test_summary_of_empty_store() {
        let app = ServerBuilder::new()
            .with_blog_service(InMemoryBlogService::new())
            .build()
            .unwrap();
        let server = TestServer::new(app).unwrap();

        let body: Value = server.get("/api/blogs/summary").await.json();
        assert_eq!(body["count"], 0);
        assert_eq!(body["total_likes"], 0);
        assert!(body["favorite_blog"].is_null());
        assert!(body["most_blogs"].is_null());
        assert!(body["most_likes"].is_null());
    }
}

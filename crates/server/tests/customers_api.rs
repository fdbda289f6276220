use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use service::customer::domain::NewCustomer;
use service::customer::repository::memory::InMemoryCustomerRepository;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn customers(&self) -> String { format!("{}/api/v1/customers", self.base_url) }
    fn customer(&self, id: i64) -> String { format!("{}/api/v1/customers/{}", self.base_url, id) }
}

/// Server over an in-memory store seeded with Ann (id 1) and Bo (id 2).
async fn start_server() -> anyhow::Result<TestApp> {
    let repo = InMemoryCustomerRepository::seeded([
        NewCustomer { name: "Ann".into(), age: 30, email: "ann@x.com".into() },
        NewCustomer { name: "Bo".into(), age: 40, email: "bo@x.com".into() },
    ]);
    let app = server::startup::app(repo);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn health_and_openapi_are_public() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["status"], "ok");

    let res = c.get(format!("{}/api-docs/openapi.json", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<Value>().await?;
    assert!(doc["paths"]["/api/v1/customers/{id}"].is_object());
    Ok(())
}

#[tokio::test]
async fn list_and_get_customers() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(app.customers()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["email"], "ann@x.com");

    let res = c.get(app.customer(2)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"id": 2, "name": "Bo", "age": 40, "email": "bo@x.com"}));

    let res = c.get(app.customer(99)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "customer with id [99] not found");
    Ok(())
}

#[tokio::test]
async fn register_customer_and_reject_taken_email() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.customers())
        .json(&json!({"name": "Cy", "age": 25, "email": "cy@x.com"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(res.json::<Value>().await?["id"], 3);

    let res = c.post(app.customers())
        .json(&json!({"name": "Imposter", "age": 25, "email": "ann@x.com"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    assert_eq!(res.json::<Value>().await?["message"], "email already taken");

    let res = c.post(app.customers())
        .json(&json!({"name": "", "age": 25, "email": "blank@x.com"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let list = c.get(app.customers()).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(list.len(), 3);
    Ok(())
}

#[tokio::test]
async fn update_customer_scenarios() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    // email of another customer
    let res = c.put(app.customer(1)).json(&json!({"email": "bo@x.com"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    let ann = c.get(app.customer(1)).send().await?.json::<Value>().await?;
    assert_eq!(ann["email"], "ann@x.com");

    // nothing effectively changes
    let res = c.put(app.customer(1)).json(&json!({"name": "Ann"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["message"], "no changes found");

    let res = c.put(app.customer(1)).json(&json!({})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c.put(app.customer(1)).json(&json!({"age": 31})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"id": 1, "name": "Ann", "age": 31, "email": "ann@x.com"}));

    let res = c.put(app.customer(42)).json(&json!({"age": 31})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_customer() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.delete(app.customer(2)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.delete(app.customer(2)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.get(app.customer(2)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

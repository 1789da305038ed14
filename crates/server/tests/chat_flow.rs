use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use nexora_protocol::{ChatReply, ErrorEnvelope, ObjectId};
use nexora_server::{build_app, ChatService, INVALID_COMPANY_ID};
use nexora_similarity::NO_ANSWER;
use nexora_store::{Collection, Document, DocumentStore, Filter, MemoryStore, TimedStore};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

fn company_a() -> ObjectId {
    ObjectId::parse("aaaaaaaaaaaaaaaaaaaaaaaa").unwrap()
}

fn company_b() -> ObjectId {
    ObjectId::parse("bbbbbbbbbbbbbbbbbbbbbbbb").unwrap()
}

fn seeded() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.insert(
        Collection::Employees,
        json!({
            "_id": "100000000000000000000001",
            "companyId": company_a().to_string(),
            "name": "דוד",
            "lastName": "כהן",
        }),
    );
    store.insert(
        Collection::Employees,
        json!({
            "_id": "100000000000000000000002",
            "companyId": company_b().to_string(),
            "name": "רות",
            "lastName": "אברמוב",
        }),
    );
    store.insert(
        Collection::Departments,
        json!({
            "_id": "200000000000000000000001",
            "companyId": company_a().to_string(),
            "name": "מכירות",
            "departmentManager": "100000000000000000000001",
        }),
    );
    store.insert(
        Collection::Departments,
        json!({
            "_id": "200000000000000000000002",
            "companyId": company_b().to_string(),
            "name": "מכירות",
            "departmentManager": "100000000000000000000002",
        }),
    );
    store
}

/// Counts every store access, so memo-hit tests can prove the second call
/// never reaches the store.
struct CountingStore {
    inner: MemoryStore,
    queries: AtomicUsize,
}

impl CountingStore {
    fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            queries: AtomicUsize::new(0),
        }
    }

    fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> nexora_store::Result<Vec<Document>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.find(collection, filter).await
    }

    async fn find_by_id(
        &self,
        company: ObjectId,
        collection: Collection,
        id: ObjectId,
    ) -> nexora_store::Result<Option<Document>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(company, collection, id).await
    }
}

/// A store whose every query hangs, for exercising the timeout path.
struct StalledStore;

#[async_trait]
impl DocumentStore for StalledStore {
    async fn find(
        &self,
        _collection: Collection,
        _filter: &Filter,
    ) -> nexora_store::Result<Vec<Document>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }

    async fn find_by_id(
        &self,
        _company: ObjectId,
        _collection: Collection,
        _id: ObjectId,
    ) -> nexora_store::Result<Option<Document>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }
}

async fn post_chat(
    app: axum::Router,
    company_id: &str,
    message: &str,
) -> (StatusCode, Vec<u8>) {
    let body = serde_json::to_vec(&json!({
        "message": message,
        "companyId": company_id,
    }))
    .unwrap();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn chat_answers_a_routed_question() {
    let service = Arc::new(ChatService::new(Arc::new(seeded())));
    let app = build_app(service);

    let (status, body) = post_chat(
        app,
        &company_a().to_string(),
        "מי המנהל של מחלקה מכירות",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let reply: ChatReply = serde_json::from_slice(&body).unwrap();
    assert_eq!(reply.reply, "המנהל של מחלקת מכירות הוא דוד כהן.");
}

#[tokio::test]
async fn malformed_company_id_is_rejected_with_the_fixed_sentence() {
    let service = Arc::new(ChatService::new(Arc::new(seeded())));
    let app = build_app(service);

    let (status, body) = post_chat(app, "not-a-company", "מה המצב?").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let envelope: ErrorEnvelope = serde_json::from_slice(&body).unwrap();
    assert_eq!(envelope.code, "invalid_company_id");
    assert_eq!(envelope.message, INVALID_COMPANY_ID);
}

#[tokio::test]
async fn stalled_store_maps_to_bad_gateway_not_a_crash() {
    let store = Arc::new(TimedStore::new(StalledStore, Duration::from_millis(20)));
    let service = Arc::new(ChatService::new(store));
    let app = build_app(service);

    let (status, body) = post_chat(
        app,
        &company_a().to_string(),
        "מי המנהל של מחלקה מכירות",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let envelope: ErrorEnvelope = serde_json::from_slice(&body).unwrap();
    assert_eq!(envelope.code, "store_timeout");
}

#[tokio::test]
async fn health_endpoint_answers() {
    let service = Arc::new(ChatService::new(Arc::new(seeded())));
    let app = build_app(service);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn second_identical_question_is_a_memo_hit_without_store_access() {
    let store = Arc::new(CountingStore::new(seeded()));
    let service = ChatService::new(store.clone() as Arc<dyn DocumentStore>);

    let question = "מי המנהל של מחלקה מכירות";
    let first = service
        .answer(&company_a().to_string(), question)
        .await
        .unwrap();
    let queries_after_first = store.query_count();

    let second = service
        .answer(&company_a().to_string(), question)
        .await
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(
        store.query_count(),
        queries_after_first,
        "memo hit must not re-query the store"
    );
}

#[tokio::test]
async fn tenants_with_same_named_departments_never_share_answers() {
    let service = ChatService::new(Arc::new(seeded()));
    let question = "מי המנהל של מחלקה מכירות";

    // First tenant's request warms its corpus and memo.
    let a = service
        .answer(&company_a().to_string(), question)
        .await
        .unwrap();
    assert_eq!(a, "המנהל של מחלקת מכירות הוא דוד כהן.");

    // The second tenant asks the exact same question text and must get its
    // own record, not the first tenant's cached one.
    let b = service
        .answer(&company_b().to_string(), question)
        .await
        .unwrap();
    assert_eq!(b, "המנהל של מחלקת מכירות הוא רות אברמוב.");
}

#[tokio::test]
async fn unrouted_question_falls_back_to_similarity() {
    let service = ChatService::new(Arc::new(seeded()));
    let reply = service
        .answer(&company_a().to_string(), "בראבו גרביים סגולות")
        .await
        .unwrap();
    assert_eq!(reply, NO_ANSWER);
}

#[tokio::test]
async fn empty_tenant_gets_the_no_answer_sentence() {
    let service = ChatService::new(Arc::new(MemoryStore::new()));
    let reply = service
        .answer(&ObjectId::parse("cccccccccccccccccccccccc").unwrap().to_string(), "שלום לך")
        .await
        .unwrap();
    assert_eq!(reply, NO_ANSWER);
}

#[tokio::test]
async fn store_can_be_seeded_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seed.json");
    let seed = json!({
        "products": [{
            "_id": "300000000000000000000001",
            "companyId": company_a().to_string(),
            "productName": "מסך",
            "unitPrice": 799,
        }],
    });
    tokio::fs::write(&path, serde_json::to_vec_pretty(&seed).unwrap())
        .await
        .unwrap();

    let store = MemoryStore::from_seed_file(&path).await.unwrap();
    let service = ChatService::new(Arc::new(store));
    let reply = service
        .answer(&company_a().to_string(), "מה המחיר של מוצר מסך?")
        .await
        .unwrap();
    assert_eq!(reply, "מחיר המוצר מסך הוא 799 ש\"ח.");
}

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use dramalist::catalog::Catalog;
use dramalist::folders::FolderManager;
use dramalist::http::{build_router, state::AppState};
use dramalist::store::{Record, RecordStore};

struct TestApp {
    dir: TempDir,
    state: AppState,
}

impl TestApp {
    fn new(records: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let folders = FolderManager::new(dir.path().join("Dramas"));
        folders.ensure_root().unwrap();
        let store = RecordStore::new(dir.path().join("dramas.csv"));
        let seed: Vec<_> = records.iter().map(|(n, g)| Record::new(*n, *g)).collect();
        store.write(&seed).unwrap();
        for record in &seed {
            folders.create(&record.name).unwrap();
        }
        let state = AppState::new(Catalog::new(store, folders));
        TestApp { dir, state }
    }

    fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    fn records(&self) -> Vec<Record> {
        self.state.catalog.list().unwrap()
    }

    fn folder(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join("Dramas").join(name)
    }

    async fn get(&self, uri: &str) -> axum::response::Response {
        self.router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(&self, uri: &str, form: &'static str) -> axum::response::Response {
        self.router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(form))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn assert_redirects_home(response: &axum::response::Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/");
}

// ── GET / ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn index_lists_records_and_form() {
    let app = TestApp::new(&[("Parasite", "Thriller"), ("Goblin", "Fantasy")]);
    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let ct = response.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(ct.contains("text/html"), "Expected text/html, got: {ct}");

    let text = body_text(response).await;
    assert!(text.contains("<td>Parasite</td><td>Thriller</td>"), "{text}");
    assert!(text.contains("href=\"/edit/1\""));
    assert!(text.contains("href=\"/delete/0\""));
    assert!(text.contains("name=\"drama_name\""));
    assert!(text.contains("/download_pdf"));
}

#[tokio::test]
async fn index_escapes_record_text() {
    let app = TestApp::new(&[("<script>", "A & B")]);
    let text = body_text(app.get("/").await).await;
    assert!(!text.contains("<script>"));
    assert!(text.contains("&lt;script&gt;"));
    assert!(text.contains("A &amp; B"));
}

#[tokio::test]
async fn index_with_missing_store_is_empty_listing() {
    let app = TestApp::new(&[]);
    std::fs::remove_file(app.dir.path().join("dramas.csv")).unwrap();
    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No dramas saved yet"));
}

// ── POST / ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_appends_record_creates_folder_and_redirects() {
    let app = TestApp::new(&[("A", "X")]);
    let response = app.post_form("/", "drama_name=Parasite&genre=Thriller").await;

    assert_redirects_home(&response);
    assert_eq!(
        app.records(),
        vec![Record::new("A", "X"), Record::new("Parasite", "Thriller")]
    );
    assert!(app.folder("Parasite").is_dir());
    let csv = std::fs::read_to_string(app.dir.path().join("dramas.csv")).unwrap();
    assert!(csv.contains("Parasite,Thriller"));
}

#[tokio::test]
async fn create_decodes_form_encoding() {
    let app = TestApp::new(&[]);
    app.post_form("/", "drama_name=Crash+Landing+on+You&genre=Rom%2FCom").await;
    assert_eq!(app.records(), vec![Record::new("Crash Landing on You", "Rom/Com")]);
    assert!(app.folder("Crash Landing on You").is_dir());
}

#[tokio::test]
async fn create_with_missing_field_is_rejected() {
    let app = TestApp::new(&[]);
    let response = app.post_form("/", "drama_name=Parasite").await;
    assert!(response.status().is_client_error());
    assert!(app.records().is_empty());
}

#[tokio::test]
async fn create_with_path_name_is_bad_request() {
    let app = TestApp::new(&[]);
    let response = app.post_form("/", "drama_name=..%2F..%2Fetc&genre=X").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.records().is_empty());
}

// ── GET /delete/{index} ───────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_record_and_empty_folder() {
    let app = TestApp::new(&[("A", "X"), ("B", "Y")]);
    let response = app.get("/delete/0").await;

    assert_redirects_home(&response);
    assert_eq!(app.records(), vec![Record::new("B", "Y")]);
    assert!(!app.folder("A").exists());
    assert!(app.folder("B").is_dir());
}

#[tokio::test]
async fn delete_out_of_range_redirects_without_change() {
    let app = TestApp::new(&[("A", "X")]);
    let response = app.get("/delete/7").await;
    assert_redirects_home(&response);
    assert_eq!(app.records(), vec![Record::new("A", "X")]);
}

#[tokio::test]
async fn delete_with_non_numeric_index_is_bad_request() {
    let app = TestApp::new(&[("A", "X")]);
    let response = app.get("/delete/first").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.records().len(), 1);
}

// ── /edit/{index} ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn edit_form_is_prefilled() {
    let app = TestApp::new(&[("A", "X"), ("Goblin", "Fantasy")]);
    let response = app.get("/edit/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await;
    assert!(text.contains("value=\"Goblin\""), "{text}");
    assert!(text.contains("value=\"Fantasy\""));
    assert!(text.contains("action=\"/edit/1\""));
}

#[tokio::test]
async fn edit_form_out_of_range_redirects() {
    let app = TestApp::new(&[("A", "X")]);
    assert_redirects_home(&app.get("/edit/1").await);
}

#[tokio::test]
async fn edit_updates_record_and_renames_folder() {
    let app = TestApp::new(&[("A", "X"), ("B", "Y")]);
    let response = app.post_form("/edit/1", "drama_name=Beta&genre=Mystery").await;

    assert_redirects_home(&response);
    assert_eq!(
        app.records(),
        vec![Record::new("A", "X"), Record::new("Beta", "Mystery")]
    );
    assert!(!app.folder("B").exists());
    assert!(app.folder("Beta").is_dir());
}

#[tokio::test]
async fn edit_out_of_range_redirects_without_change() {
    let app = TestApp::new(&[("A", "X")]);
    let response = app.post_form("/edit/4", "drama_name=Z&genre=Q").await;
    assert_redirects_home(&response);
    assert_eq!(app.records(), vec![Record::new("A", "X")]);
    assert!(!app.folder("Z").exists());
}

// ── GET /download_pdf ─────────────────────────────────────────────────────────

#[tokio::test]
async fn download_pdf_is_attachment() {
    let app = TestApp::new(&[("Parasite", "Thriller")]);
    let response = app.get("/download_pdf").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/pdf");
    let disposition = response
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("kdramas.pdf"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn download_pdf_with_empty_store() {
    let app = TestApp::new(&[]);
    let response = app.get("/download_pdf").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = TestApp::new(&[]);
    assert_eq!(app.get("/nope").await.status(), StatusCode::NOT_FOUND);
}

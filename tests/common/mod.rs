#![allow(dead_code)]

use std::net::SocketAddr;

use sea_orm::DatabaseConnection;
use serde_json::Value;
use tempfile::TempDir;

use labsite::config::{AppConfig, CorsConfig, DatabaseConfig, ImportConfig, ServerConfig};
use labsite::state::AppState;

/// A running application instance backed by a throwaway SQLite database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub db: DatabaseConnection,
    _db_dir: TempDir,
}

pub struct TestResponse {
    pub status: u16,
    pub body: Value,
    pub text: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let (db_dir, db) = test_db().await;

        let config = test_config();
        let app = labsite::build_router(AppState {
            db: db.clone(),
            config,
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server crashed");
        });

        Self {
            addr,
            client: reqwest::Client::new(),
            db,
            _db_dir: db_dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed");
        into_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed");
        into_response(res).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PATCH request failed");
        into_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE request failed");
        into_response(res).await
    }
}

/// An initialized throwaway database without a running server, for importer
/// and domain-level tests.
pub async fn test_db() -> (TempDir, DatabaseConnection) {
    let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = db_dir.path().join("test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let db = labsite::database::init_db(&db_url)
        .await
        .expect("Failed to initialize test database");
    (db_dir, db)
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors: CorsConfig {
                allow_origins: vec!["*".into()],
                max_age: 3600,
            },
        },
        database: DatabaseConfig {
            url: String::new(),
        },
        import: ImportConfig {
            competition_csv: "images/Competition.csv".into(),
            lab_fixture: "emolabs-website.json".into(),
        },
    }
}

/// Direct-to-database row factories for test setup.
pub mod seed {
    use chrono::NaiveDate;
    use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

    use labsite::entity::achievement::{self, Category};
    use labsite::entity::partner::{self, PartnerType};
    use labsite::entity::{news, team_member};

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub async fn team_member(
        db: &DatabaseConnection,
        name: &str,
        order: i32,
    ) -> team_member::Model {
        let now = chrono::Utc::now();
        team_member::ActiveModel {
            name: Set(name.to_string()),
            role: Set("Researcher".into()),
            description: Set("Test member".into()),
            photo: Set(None),
            order: Set(order),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to seed team member")
    }

    pub async fn news(
        db: &DatabaseConnection,
        title: &str,
        date: NaiveDate,
        is_published: bool,
    ) -> news::Model {
        let now = chrono::Utc::now();
        news::ActiveModel {
            title: Set(title.to_string()),
            date: Set(date),
            content: Set("Test content".into()),
            is_published: Set(is_published),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to seed news item")
    }

    pub async fn achievement(
        db: &DatabaseConnection,
        category: Category,
        event_name: &str,
        event_date: NaiveDate,
    ) -> achievement::Model {
        let now = chrono::Utc::now();
        achievement::ActiveModel {
            category: Set(category),
            event_name: Set(event_name.to_string()),
            work_title: Set(format!("{event_name} entry")),
            award: Set("第一名".into()),
            event_date: Set(event_date),
            certificate_image: Set(None),
            description: Set(String::new()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to seed achievement")
    }

    pub async fn partner(
        db: &DatabaseConnection,
        name: &str,
        partner_type: PartnerType,
        is_active: bool,
    ) -> partner::Model {
        let now = chrono::Utc::now();
        partner::ActiveModel {
            name: Set(name.to_string()),
            partner_type: Set(partner_type),
            description: Set(String::new()),
            website_url: Set(String::new()),
            logo: Set(None),
            order: Set(0),
            is_active: Set(is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to seed partner")
    }
}

async fn into_response(res: reqwest::Response) -> TestResponse {
    let status = res.status().as_u16();
    let text = res.text().await.unwrap_or_default();
    let body = serde_json::from_str(&text).unwrap_or(Value::Null);
    TestResponse { status, body, text }
}

mod common;

use common::{TestApp, seed};
use labsite::entity::lab_info::{self, LabInfoData};
use labsite::entity::partner::PartnerType;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

mod team_members {
    use super::*;

    #[tokio::test]
    async fn create_read_update_delete_round_trip() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                "/api/admin/team-members",
                &json!({
                    "name": "Alice",
                    "role": "PhD Student",
                    "description": "Works on distributed systems",
                    "order": 2
                }),
            )
            .await;
        assert_eq!(res.status, 201);
        let id = res.body["id"].as_i64().unwrap();
        assert_eq!(res.body["name"], "Alice");
        assert_eq!(res.body["order"], 2);

        let res = app.get(&format!("/api/admin/team-members/{id}")).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["role"], "PhD Student");

        let res = app
            .patch(
                &format!("/api/admin/team-members/{id}"),
                &json!({ "role": "Postdoc" }),
            )
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["role"], "Postdoc");
        assert_eq!(res.body["name"], "Alice");

        let res = app.delete(&format!("/api/admin/team-members/{id}")).await;
        assert_eq!(res.status, 204);

        let res = app.get(&format!("/api/admin/team-members/{id}")).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                "/api/admin/team-members",
                &json!({ "name": "   ", "role": "PhD", "description": "x" }),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn malformed_body_reports_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post("/api/admin/team-members", &json!({ "name": 42 }))
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert!(
            res.body["message"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body")
        );
    }

    #[tokio::test]
    async fn patch_with_null_photo_clears_it() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                "/api/admin/team-members",
                &json!({
                    "name": "Bob",
                    "role": "MSc",
                    "description": "x",
                    "photo": "bob.png"
                }),
            )
            .await;
        let id = res.body["id"].as_i64().unwrap();
        assert_eq!(res.body["photo"], "bob.png");

        let res = app
            .patch(
                &format!("/api/admin/team-members/{id}"),
                &json!({ "photo": null }),
            )
            .await;
        assert_eq!(res.status, 200);
        assert!(res.body["photo"].is_null());
    }

    #[tokio::test]
    async fn list_paginates_and_searches() {
        let app = TestApp::spawn().await;
        for i in 0..25 {
            seed::team_member(&app.db, &format!("Member {i:02}"), i).await;
        }
        seed::team_member(&app.db, "Grace Hopper", 99).await;

        let res = app.get("/api/admin/team-members?per_page=10&page=2").await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["data"].as_array().unwrap().len(), 10);
        assert_eq!(res.body["pagination"]["page"], 2);
        assert_eq!(res.body["pagination"]["total"], 26);
        assert_eq!(res.body["pagination"]["total_pages"], 3);

        let res = app.get("/api/admin/team-members?search=grace").await;
        assert_eq!(res.status, 200);
        let data = res.body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["name"], "Grace Hopper");
    }

    #[tokio::test]
    async fn search_wildcards_are_matched_literally() {
        let app = TestApp::spawn().await;
        seed::team_member(&app.db, "50% effort", 0).await;
        seed::team_member(&app.db, "Full effort", 1).await;

        let res = app.get("/api/admin/team-members?search=50%25").await;
        assert_eq!(res.status, 200);
        let data = res.body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["name"], "50% effort");
    }
}

mod achievements {
    use super::*;

    #[tokio::test]
    async fn create_and_update_achievement() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                "/api/admin/achievements",
                &json!({
                    "category": "competition",
                    "event_name": "ICPC Regional",
                    "work_title": "Team Rocket",
                    "award": "金牌",
                    "event_date": "2025-04-12"
                }),
            )
            .await;
        assert_eq!(res.status, 201);
        let id = res.body["id"].as_i64().unwrap();
        assert_eq!(res.body["category"], "competition");
        assert_eq!(res.body["category_label"], "競賽");

        let res = app
            .patch(
                &format!("/api/admin/achievements/{id}"),
                &json!({ "category": "award", "award": "最佳論文" }),
            )
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["category"], "award");
        assert_eq!(res.body["category_label"], "論文獲獎");
        assert_eq!(res.body["award"], "最佳論文");
    }

    #[tokio::test]
    async fn unknown_category_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                "/api/admin/achievements",
                &json!({
                    "category": "trophy",
                    "event_name": "X",
                    "work_title": "Y",
                    "award": "Z",
                    "event_date": "2025-04-12"
                }),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod news_items {
    use super::*;

    #[tokio::test]
    async fn defaults_apply_on_create() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                "/api/admin/news",
                &json!({ "title": "Open house", "date": "2025-09-01" }),
            )
            .await;
        assert_eq!(res.status, 201);
        assert_eq!(res.body["content"], "");
        assert_eq!(res.body["is_published"], true);
    }

    #[tokio::test]
    async fn unpublishing_hides_the_item_from_the_public_list() {
        let app = TestApp::spawn().await;
        let item = seed::news(&app.db, "Visible", seed::date(2025, 9, 1), true).await;

        let res = app
            .patch(
                &format!("/api/admin/news/{}", item.id),
                &json!({ "is_published": false }),
            )
            .await;
        assert_eq!(res.status, 200);

        let res = app.get("/api/pages/news").await;
        assert_eq!(res.body["news_list"].as_array().unwrap().len(), 0);

        // Still reachable through the admin surface.
        let res = app.get(&format!("/api/admin/news/{}", item.id)).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["is_published"], false);
    }
}

mod partners {
    use super::*;

    #[tokio::test]
    async fn create_carries_type_label_and_defaults() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                "/api/admin/partners",
                &json!({ "name": "Acme Corp", "partner_type": "company" }),
            )
            .await;
        assert_eq!(res.status, 201);
        assert_eq!(res.body["partner_type"], "company");
        assert_eq!(res.body["partner_type_label"], "企業");
        assert_eq!(res.body["is_active"], true);
        assert_eq!(res.body["order"], 0);
    }

    #[tokio::test]
    async fn deactivated_partner_leaves_the_public_page() {
        let app = TestApp::spawn().await;
        let model = seed::partner(&app.db, "Acme Corp", PartnerType::Company, true).await;

        let res = app
            .patch(
                &format!("/api/admin/partners/{}", model.id),
                &json!({ "is_active": false }),
            )
            .await;
        assert_eq!(res.status, 200);

        let res = app.get("/api/pages/partners").await;
        assert_eq!(res.body["companies"].as_array().unwrap().len(), 0);
    }
}

mod lab_info_singleton {
    use super::*;

    fn create_payload() -> serde_json::Value {
        json!({
            "name": "EMO Lab",
            "full_name": "Eternal Matrix of Omniscience Laboratory",
            "founded_date": "2024-08-31",
            "slogan": "Ever onward",
            "mission": "Research for everyone",
            "email": "lab@example.com"
        })
    }

    #[tokio::test]
    async fn first_create_succeeds_and_second_is_refused() {
        let app = TestApp::spawn().await;

        let res = app.post("/api/admin/lab-info", &create_payload()).await;
        assert_eq!(res.status, 201);
        assert_eq!(res.body["name"], "EMO Lab");

        let res = app.post("/api/admin/lab-info", &create_payload()).await;
        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "CONFLICT");

        let count = lab_info::Entity::find().count(&app.db).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn get_returns_null_then_the_record() {
        let app = TestApp::spawn().await;

        let res = app.get("/api/admin/lab-info").await;
        assert_eq!(res.status, 200);
        assert!(res.body.is_null());

        app.post("/api/admin/lab-info", &create_payload()).await;

        let res = app.get("/api/admin/lab-info").await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["slogan"], "Ever onward");
    }

    #[tokio::test]
    async fn patch_updates_in_place_and_404s_without_a_record() {
        let app = TestApp::spawn().await;

        let res = app
            .patch("/api/admin/lab-info", &json!({ "slogan": "New slogan" }))
            .await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");

        app.post("/api/admin/lab-info", &create_payload()).await;

        let res = app
            .patch("/api/admin/lab-info", &json!({ "slogan": "New slogan" }))
            .await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["slogan"], "New slogan");
        assert_eq!(res.body["name"], "EMO Lab");
    }

    #[tokio::test]
    async fn delete_is_accepted_but_never_removes_the_record() {
        let app = TestApp::spawn().await;
        app.post("/api/admin/lab-info", &create_payload()).await;

        let res = app.delete("/api/admin/lab-info").await;
        assert_eq!(res.status, 204);

        let count = lab_info::Entity::find().count(&app.db).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn save_collapses_a_second_identity_into_the_existing_row() {
        let (_dir, db) = common::test_db().await;

        let first = lab_info::save(
            &db,
            LabInfoData {
                name: "EMO Lab".into(),
                full_name: "Eternal Matrix of Omniscience Laboratory".into(),
                founded_date: seed::date(2024, 8, 31),
                slogan: "Ever onward".into(),
                mission: "Research".into(),
                email: "lab@example.com".into(),
                github_url: String::new(),
                website_url: String::new(),
            },
        )
        .await
        .unwrap();

        let second = lab_info::save(
            &db,
            LabInfoData {
                name: "Renamed Lab".into(),
                full_name: "Renamed Laboratory".into(),
                founded_date: seed::date(2025, 1, 1),
                slogan: "Different".into(),
                mission: "Also different".into(),
                email: "new@example.com".into(),
                github_url: String::new(),
                website_url: String::new(),
            },
        )
        .await
        .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.name, "Renamed Lab");
        assert_eq!(lab_info::Entity::find().count(&db).await.unwrap(), 1);
    }
}

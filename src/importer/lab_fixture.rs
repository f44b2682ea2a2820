//! Importer for the lab website JSON fixture.
//!
//! The fixture seeds the lab identity, team roster, news, and partner
//! organizations in one pass. Every section is get-or-create keyed on a
//! natural key, so repeated runs reconcile instead of duplicating.

use std::path::Path;

use chrono::NaiveDate;
use sea_orm::*;
use serde::Deserialize;
use tracing::{error, info};

use super::ImportReport;
use crate::entity::partner::PartnerType;
use crate::entity::{lab_info, news, partner, team_member};

/// Creation-time defaults applied when the fixture omits a lab field.
const DEFAULT_LAB_NAME: &str = "EMO Lab";
const DEFAULT_LAB_FULL_NAME: &str = "Eternal Matrix of Omniscience Laboratory";
const DEFAULT_LAB_EMAIL: &str = "emolab0831@gmail.com";
const LAB_GITHUB_URL: &str = "https://github.com/EMO-Labs";
const LAB_WEBSITE_URL: &str = "https://sites.google.com/view/emo-lab";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LabFixture {
    pub lab: LabSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabSection {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub founded: Option<String>,
    pub slogan: Option<String>,
    pub mission: Option<String>,
    pub contact: ContactSection,
    pub team: Vec<TeamEntry>,
    pub news: Vec<NewsEntry>,
    pub partners: PartnerLists,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactSection {
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TeamEntry {
    pub name: String,
    pub role: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewsEntry {
    pub title: String,
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PartnerLists {
    pub universities: Vec<String>,
    pub schools: Vec<String>,
    pub companies: Vec<String>,
}

/// Read the fixture at `path` and reconcile all entities against it.
///
/// A missing file is reported and treated as a no-op rather than an error.
pub async fn run(db: &DatabaseConnection, path: &Path) -> anyhow::Result<ImportReport> {
    if !path.exists() {
        error!("Lab fixture not found at {}", path.display());
        return Ok(ImportReport::default());
    }

    let raw = tokio::fs::read_to_string(path).await?;
    let fixture: LabFixture = serde_json::from_str(&raw)?;

    Ok(import_fixture(db, fixture).await?)
}

pub async fn import_fixture(
    db: &DatabaseConnection,
    fixture: LabFixture,
) -> Result<ImportReport, DbErr> {
    let mut report = ImportReport::default();
    let lab = fixture.lab;

    import_lab_info(db, &lab, &mut report).await?;
    import_team(db, &lab.team, &mut report).await?;
    import_news(db, &lab.news, &mut report).await?;
    import_partners(db, &lab.partners, &mut report).await?;

    Ok(report)
}

/// Get-or-create the lab info record keyed by name.
///
/// The create path goes through [`lab_info::save`], so even a fixture with a
/// new name collapses into the existing singleton row instead of adding a
/// second one.
async fn import_lab_info(
    db: &DatabaseConnection,
    lab: &LabSection,
    report: &mut ImportReport,
) -> Result<(), DbErr> {
    let name = lab.name.clone().unwrap_or_else(|| DEFAULT_LAB_NAME.into());

    let txn = db.begin().await?;
    let existing = lab_info::Entity::find()
        .filter(lab_info::Column::Name.eq(&name))
        .one(&txn)
        .await?;

    match existing {
        Some(found) => {
            info!("Matched existing lab info: {}", found.name);
            report.matched += 1;
        }
        None => {
            let founded = lab
                .founded
                .as_deref()
                .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
                .unwrap_or_else(default_founded_date);

            let created = lab_info::save(
                &txn,
                lab_info::LabInfoData {
                    name,
                    full_name: lab
                        .full_name
                        .clone()
                        .unwrap_or_else(|| DEFAULT_LAB_FULL_NAME.into()),
                    founded_date: founded,
                    slogan: lab.slogan.clone().unwrap_or_default(),
                    mission: lab.mission.clone().unwrap_or_default(),
                    email: lab
                        .contact
                        .email
                        .clone()
                        .unwrap_or_else(|| DEFAULT_LAB_EMAIL.into()),
                    github_url: LAB_GITHUB_URL.into(),
                    website_url: LAB_WEBSITE_URL.into(),
                },
            )
            .await?;

            info!("Created lab info: {}", created.name);
            report.created += 1;
        }
    }
    txn.commit().await?;

    Ok(())
}

/// Get-or-create team members keyed by name. The display order is the
/// zero-based fixture position, assigned at first creation only.
async fn import_team(
    db: &DatabaseConnection,
    team: &[TeamEntry],
    report: &mut ImportReport,
) -> Result<(), DbErr> {
    for (position, entry) in team.iter().enumerate() {
        let txn = db.begin().await?;
        let existing = team_member::Entity::find()
            .filter(team_member::Column::Name.eq(&entry.name))
            .one(&txn)
            .await?;

        match existing {
            Some(found) => {
                info!("Matched existing team member: {}", found.name);
                report.matched += 1;
            }
            None => {
                let now = chrono::Utc::now();
                let created = team_member::ActiveModel {
                    name: Set(entry.name.clone()),
                    role: Set(entry.role.clone()),
                    description: Set(entry.description.clone()),
                    photo: Set(None),
                    order: Set(position as i32),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;

                info!("Created team member: {}", created.name);
                report.created += 1;
            }
        }
        txn.commit().await?;
    }

    Ok(())
}

/// Get-or-create news items keyed by (title, date). Content starts empty
/// and items are published immediately.
async fn import_news(
    db: &DatabaseConnection,
    items: &[NewsEntry],
    report: &mut ImportReport,
) -> Result<(), DbErr> {
    for entry in items {
        let date = NaiveDate::parse_from_str(entry.date.trim(), "%Y-%m-%d")
            .unwrap_or_else(|_| default_news_date());

        let txn = db.begin().await?;
        let existing = news::Entity::find()
            .filter(news::Column::Title.eq(&entry.title))
            .filter(news::Column::Date.eq(date))
            .one(&txn)
            .await?;

        match existing {
            Some(found) => {
                info!("Matched existing news item: {}", found.title);
                report.matched += 1;
            }
            None => {
                let now = chrono::Utc::now();
                let created = news::ActiveModel {
                    title: Set(entry.title.clone()),
                    date: Set(date),
                    content: Set(String::new()),
                    is_published: Set(true),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;

                info!("Created news item: {}", created.title);
                report.created += 1;
            }
        }
        txn.commit().await?;
    }

    Ok(())
}

/// Get-or-create partners keyed by name; the fixture list a name appears in
/// fixes its type, and imported partners start active.
async fn import_partners(
    db: &DatabaseConnection,
    partners: &PartnerLists,
    report: &mut ImportReport,
) -> Result<(), DbErr> {
    let groups = [
        (PartnerType::University, &partners.universities),
        (PartnerType::School, &partners.schools),
        (PartnerType::Company, &partners.companies),
    ];

    for (partner_type, names) in groups {
        for name in names {
            let txn = db.begin().await?;
            let existing = partner::Entity::find()
                .filter(partner::Column::Name.eq(name))
                .one(&txn)
                .await?;

            match existing {
                Some(found) => {
                    info!("Matched existing partner: {}", found.name);
                    report.matched += 1;
                }
                None => {
                    let now = chrono::Utc::now();
                    let created = partner::ActiveModel {
                        name: Set(name.clone()),
                        partner_type: Set(partner_type),
                        description: Set(String::new()),
                        website_url: Set(String::new()),
                        logo: Set(None),
                        order: Set(0),
                        is_active: Set(true),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    }
                    .insert(&txn)
                    .await?;

                    info!("Created partner: {}", created.name);
                    report.created += 1;
                }
            }
            txn.commit().await?;
        }
    }

    Ok(())
}

fn default_founded_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 31).unwrap()
}

fn default_news_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

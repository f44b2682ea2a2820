//! Page-context payloads for the server-rendered site.
//!
//! Template rendering itself lives outside this service; each page route
//! returns the context the template would receive.

use serde::Serialize;

use super::achievement::AchievementResponse;
use super::lab_info::LabInfoResponse;
use super::news::NewsResponse;
use super::partner::PartnerResponse;
use super::team::TeamMemberResponse;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HomePage {
    /// The lab info singleton, or null when none has been created yet.
    pub lab_info: Option<LabInfoResponse>,
    /// The five most recent published news items, newest first.
    pub news: Vec<NewsResponse>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TeamPage {
    pub members: Vec<TeamMemberResponse>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AchievementsPage {
    /// All achievements, most recent event first.
    pub achievements: Vec<AchievementResponse>,
    pub competitions: Vec<AchievementResponse>,
    pub papers: Vec<AchievementResponse>,
    pub awards: Vec<AchievementResponse>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PartnersPage {
    pub universities: Vec<PartnerResponse>,
    pub schools: Vec<PartnerResponse>,
    pub companies: Vec<PartnerResponse>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ContactPage {
    pub lab_info: Option<LabInfoResponse>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct NewsListPage {
    pub news_list: Vec<NewsResponse>,
}

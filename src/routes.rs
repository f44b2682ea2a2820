use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers::{achievement, api, lab_info, news, pages, partner, team};
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/pages", page_routes())
        .routes(routes!(api::achievements_json))
        .routes(routes!(api::team_members_json))
        .nest("/admin", admin_routes())
}

fn page_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(pages::home_page))
        .routes(routes!(pages::team_page))
        .routes(routes!(pages::achievements_page))
        .routes(routes!(pages::achievement_detail))
        .routes(routes!(pages::partners_page))
        .routes(routes!(pages::contact_page))
        .routes(routes!(pages::news_list))
        .routes(routes!(pages::news_detail))
}

fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(team::list_team_members, team::create_team_member))
        .routes(routes!(
            team::get_team_member,
            team::update_team_member,
            team::delete_team_member
        ))
        .routes(routes!(
            achievement::list_achievements,
            achievement::create_achievement
        ))
        .routes(routes!(
            achievement::get_achievement,
            achievement::update_achievement,
            achievement::delete_achievement
        ))
        .routes(routes!(news::list_news, news::create_news))
        .routes(routes!(news::get_news, news::update_news, news::delete_news))
        .routes(routes!(partner::list_partners, partner::create_partner))
        .routes(routes!(
            partner::get_partner,
            partner::update_partner,
            partner::delete_partner
        ))
        .routes(routes!(
            lab_info::get_lab_info,
            lab_info::create_lab_info,
            lab_info::update_lab_info,
            lab_info::delete_lab_info
        ))
}

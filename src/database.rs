use std::time::Duration;

use sea_orm::sea_query::{
    Index, IndexCreateStatement, MysqlQueryBuilder, PostgresQueryBuilder, SqliteQueryBuilder,
};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema,
};

use crate::entity::{achievement, lab_info, news, partner, team_member};

/// Connect to the datastore and bring the schema up to date.
pub async fn init_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url.to_owned());

    opt.max_connections(20)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    create_tables(&db).await?;
    ensure_indexes(&db).await?;

    Ok(db)
}

async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = vec![
        schema.create_table_from_entity(team_member::Entity),
        schema.create_table_from_entity(achievement::Entity),
        schema.create_table_from_entity(news::Entity),
        schema.create_table_from_entity(partner::Entity),
        schema.create_table_from_entity(lab_info::Entity),
    ];

    for mut stmt in statements {
        stmt.if_not_exists();
        db.execute(backend.build(&stmt)).await?;
    }

    Ok(())
}

/// Ensure lookup indexes exist for the importer natural keys and the
/// published-news query on the home page.
async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    let statements: Vec<IndexCreateStatement> = vec![
        Index::create()
            .if_not_exists()
            .name("idx_achievement_event_work")
            .table(achievement::Entity)
            .col(achievement::Column::EventName)
            .col(achievement::Column::WorkTitle)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_news_title_date")
            .table(news::Entity)
            .col(news::Column::Title)
            .col(news::Column::Date)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_news_published_date")
            .table(news::Entity)
            .col(news::Column::IsPublished)
            .col(news::Column::Date)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_partner_name")
            .table(partner::Entity)
            .col(partner::Column::Name)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_team_member_name")
            .table(team_member::Entity)
            .col(team_member::Column::Name)
            .to_owned(),
    ];

    for stmt in statements {
        let sql = match backend {
            DbBackend::Postgres => stmt.to_string(PostgresQueryBuilder),
            DbBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
            DbBackend::MySql => stmt.to_string(MysqlQueryBuilder),
        };

        if let Err(e) = db.execute_unprepared(&sql).await {
            tracing::warn!("Failed to create index: {}", e);
        }
    }

    Ok(())
}

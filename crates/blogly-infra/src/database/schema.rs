//! Table bootstrap from the entity definitions.

use sea_orm::{ConnectionTrait, DbErr, EntityName, EntityTrait, Schema};

use super::entity::{post, user};

/// Create the `users` and `posts` tables if they are missing.
///
/// `users` goes first since `posts.user_id` references it with
/// `ON DELETE CASCADE`.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    create_table(db, user::Entity).await?;
    create_table(db, post::Entity).await?;
    tracing::info!("Database schema ready");
    Ok(())
}

async fn create_table<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let table = entity.table_name().to_owned();
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    tracing::debug!(%table, "Ensured table");
    Ok(())
}

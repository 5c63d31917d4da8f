use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Actor::Table)
                    .if_not_exists()
                    .col(string(Actor::Id).primary_key())
                    .col(string(Actor::Name))
                    .to_owned(),
            )
            .await?;

        // The name column is the upsert key; ON CONFLICT targets this index.
        manager
            .create_index(
                Index::create()
                    .name("idx_actor_name_unique")
                    .table(Actor::Table)
                    .col(Actor::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(string(Movie::Id).primary_key())
                    .col(string(Movie::Title))
                    .col(big_integer_null(Movie::ReleaseDate))
                    .col(integer_null(Movie::Rating))
                    .col(integer(Movie::Status))
                    .col(string_null(Movie::ActorId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_actor_id")
                    .table(Movie::Table)
                    .col(Movie::ActorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Actor::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Actor {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Title,
    ReleaseDate,
    Rating,
    Status,
    ActorId,
}

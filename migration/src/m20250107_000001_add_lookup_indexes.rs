use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_movie_category")
                    .table(Movie::Table)
                    .col(Movie::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_shot_movie")
                    .table(MovieShot::Table)
                    .col(MovieShot::MovieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rating_movie")
                    .table(Rating::Table)
                    .col(Rating::MovieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_movie")
                    .table(Review::Table)
                    .col(Review::MovieId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_parent")
                    .table(Review::Table)
                    .col(Review::ParentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_review_parent").table(Review::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_review_movie").table(Review::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_rating_movie").table(Rating::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_movie_shot_movie").table(MovieShot::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_movie_category").table(Movie::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    CategoryId,
}

#[derive(DeriveIden)]
enum MovieShot {
    Table,
    MovieId,
}

#[derive(DeriveIden)]
enum Rating {
    Table,
    MovieId,
}

#[derive(DeriveIden)]
enum Review {
    Table,
    MovieId,
    ParentId,
}

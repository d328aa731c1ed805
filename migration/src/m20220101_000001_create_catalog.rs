use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string_len(Category::Name, 256))
                    .col(text(Category::Description))
                    .col(string_len(Category::Slug, 256))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_category_slug")
                    .table(Category::Table)
                    .col(Category::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Actor::Table)
                    .if_not_exists()
                    .col(pk_auto(Actor::Id))
                    .col(string_len(Actor::Name, 128))
                    .col(
                        small_integer(Actor::Age)
                            .default(0)
                            .check(Expr::col(Actor::Age).gte(0)),
                    )
                    .col(text(Actor::Description))
                    .col(string_len(Actor::Image, 256))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Genre::Table)
                    .if_not_exists()
                    .col(pk_auto(Genre::Id))
                    .col(string_len(Genre::Name, 128))
                    .col(text(Genre::Description))
                    .col(string_len(Genre::Slug, 256))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_genre_slug")
                    .table(Genre::Table)
                    .col(Genre::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(string_len(Movie::Title, 128))
                    .col(string_len(Movie::Tagline, 128).default(""))
                    .col(text(Movie::Description))
                    .col(string_len(Movie::Poster, 256))
                    .col(small_integer(Movie::Year))
                    .col(string_len(Movie::Country, 64))
                    .col(date(Movie::WorldPremiere))
                    .col(
                        big_integer(Movie::Budget)
                            .default(0)
                            .check(Expr::col(Movie::Budget).gte(0)),
                    )
                    .col(
                        big_integer(Movie::BoxOfficeUs)
                            .default(0)
                            .check(Expr::col(Movie::BoxOfficeUs).gte(0)),
                    )
                    .col(
                        big_integer(Movie::BoxOfficeWorld)
                            .default(0)
                            .check(Expr::col(Movie::BoxOfficeWorld).gte(0)),
                    )
                    .col(integer_null(Movie::CategoryId))
                    .col(string_len(Movie::Slug, 256))
                    .col(boolean(Movie::Draft).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_category")
                            .from(Movie::Table, Movie::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_slug")
                    .table(Movie::Table)
                    .col(Movie::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieDirector::Table)
                    .if_not_exists()
                    .col(integer(MovieDirector::MovieId))
                    .col(integer(MovieDirector::ActorId))
                    .primary_key(
                        Index::create()
                            .col(MovieDirector::MovieId)
                            .col(MovieDirector::ActorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_director_movie")
                            .from(MovieDirector::Table, MovieDirector::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_director_actor")
                            .from(MovieDirector::Table, MovieDirector::ActorId)
                            .to(Actor::Table, Actor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieActor::Table)
                    .if_not_exists()
                    .col(integer(MovieActor::MovieId))
                    .col(integer(MovieActor::ActorId))
                    .primary_key(
                        Index::create()
                            .col(MovieActor::MovieId)
                            .col(MovieActor::ActorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_actor_movie")
                            .from(MovieActor::Table, MovieActor::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_actor_actor")
                            .from(MovieActor::Table, MovieActor::ActorId)
                            .to(Actor::Table, Actor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieGenre::Table)
                    .if_not_exists()
                    .col(integer(MovieGenre::MovieId))
                    .col(integer(MovieGenre::GenreId))
                    .primary_key(
                        Index::create()
                            .col(MovieGenre::MovieId)
                            .col(MovieGenre::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genre_movie")
                            .from(MovieGenre::Table, MovieGenre::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_genre_genre")
                            .from(MovieGenre::Table, MovieGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MovieShot::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieShot::Id))
                    .col(string_len(MovieShot::Title, 128))
                    .col(text(MovieShot::Description))
                    .col(string_len(MovieShot::Image, 256))
                    .col(integer(MovieShot::MovieId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_shot_movie")
                            .from(MovieShot::Table, MovieShot::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RatingStar::Table)
                    .if_not_exists()
                    .col(pk_auto(RatingStar::Id))
                    .col(small_integer(RatingStar::Value).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rating::Table)
                    .if_not_exists()
                    .col(pk_auto(Rating::Id))
                    .col(string_len(Rating::Ip, 39))
                    .col(integer(Rating::StarId))
                    .col(integer(Rating::MovieId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_star")
                            .from(Rating::Table, Rating::StarId)
                            .to(RatingStar::Table, RatingStar::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_movie")
                            .from(Rating::Table, Rating::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(string_len(Review::Email, 254))
                    .col(string_len(Review::Name, 128))
                    .col(string_len(Review::Text, 8000))
                    .col(integer_null(Review::ParentId))
                    .col(integer(Review::MovieId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_parent")
                            .from(Review::Table, Review::ParentId)
                            .to(Review::Table, Review::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_movie")
                            .from(Review::Table, Review::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Review::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Rating::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(RatingStar::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieShot::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieGenre::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieActor::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MovieDirector::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Genre::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Actor::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Category::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
    Name,
    Description,
    Slug,
}

#[derive(DeriveIden)]
enum Actor {
    Table,
    Id,
    Name,
    Age,
    Description,
    Image,
}

#[derive(DeriveIden)]
enum Genre {
    Table,
    Id,
    Name,
    Description,
    Slug,
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    Title,
    Tagline,
    Description,
    Poster,
    Year,
    Country,
    WorldPremiere,
    Budget,
    BoxOfficeUs,
    BoxOfficeWorld,
    CategoryId,
    Slug,
    Draft,
}

#[derive(DeriveIden)]
enum MovieDirector {
    Table,
    MovieId,
    ActorId,
}

#[derive(DeriveIden)]
enum MovieActor {
    Table,
    MovieId,
    ActorId,
}

#[derive(DeriveIden)]
enum MovieGenre {
    Table,
    MovieId,
    GenreId,
}

#[derive(DeriveIden)]
enum MovieShot {
    Table,
    Id,
    Title,
    Description,
    Image,
    MovieId,
}

#[derive(DeriveIden)]
enum RatingStar {
    Table,
    Id,
    Value,
}

#[derive(DeriveIden)]
enum Rating {
    Table,
    Id,
    Ip,
    StarId,
    MovieId,
}

#[derive(DeriveIden)]
enum Review {
    Table,
    Id,
    Email,
    Name,
    Text,
    ParentId,
    MovieId,
}

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::{
    entities::{
        actor, category, genre, movie, movie_actor, movie_director, movie_genre, movie_shot,
        rating, rating_star, review,
    },
    error::AppResult,
    media,
    models::{NewActor, NewMovie, NewReview},
};

/// Query and command surface over the catalog schema. Constraint violations
/// raised by the storage engine pass through unmodified.
#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn create_category(
        &self,
        name: &str,
        description: &str,
        slug: &str,
    ) -> AppResult<category::Model> {
        let model = category::ActiveModel {
            id: Default::default(),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            slug: Set(slug.to_string()),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn delete_category(&self, id: i32) -> AppResult<()> {
        category::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn create_genre(
        &self,
        name: &str,
        description: &str,
        slug: &str,
    ) -> AppResult<genre::Model> {
        let model = genre::ActiveModel {
            id: Default::default(),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            slug: Set(slug.to_string()),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn create_actor(&self, new: NewActor) -> AppResult<actor::Model> {
        let model = actor::ActiveModel {
            id: Default::default(),
            name: Set(new.name),
            age: Set(new.age),
            description: Set(new.description),
            image: Set(media::stored_path(media::ACTOR_IMAGE_DIR, &new.image)),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn actor_by_name(&self, name: &str) -> AppResult<Option<actor::Model>> {
        Ok(actor::Entity::find().filter(actor::Column::Name.eq(name)).one(&self.db).await?)
    }

    pub async fn create_movie(&self, new: NewMovie) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            tagline: Set(new.tagline),
            description: Set(new.description),
            poster: Set(media::stored_path(media::POSTER_DIR, &new.poster)),
            year: Set(new.year),
            country: Set(new.country),
            world_premiere: Set(new.world_premiere),
            budget: Set(new.budget),
            box_office_us: Set(new.box_office_us),
            box_office_world: Set(new.box_office_world),
            category_id: Set(new.category_id),
            slug: Set(new.slug),
            draft: Set(new.draft),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn movie_by_slug(&self, slug: &str) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find().filter(movie::Column::Slug.eq(slug)).one(&self.db).await?)
    }

    pub async fn published_movies(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().filter(movie::Column::Draft.eq(false)).all(&self.db).await?)
    }

    pub async fn delete_movie(&self, id: i32) -> AppResult<()> {
        movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn set_directors(&self, movie_id: i32, actor_ids: &[i32]) -> AppResult<()> {
        let txn = self.db.begin().await?;

        movie_director::Entity::delete_many()
            .filter(movie_director::Column::MovieId.eq(movie_id))
            .exec(&txn)
            .await?;

        for actor_id in actor_ids {
            let link = movie_director::ActiveModel {
                movie_id: Set(movie_id),
                actor_id: Set(*actor_id),
            };
            movie_director::Entity::insert(link).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn set_cast(&self, movie_id: i32, actor_ids: &[i32]) -> AppResult<()> {
        let txn = self.db.begin().await?;

        movie_actor::Entity::delete_many()
            .filter(movie_actor::Column::MovieId.eq(movie_id))
            .exec(&txn)
            .await?;

        for actor_id in actor_ids {
            let link = movie_actor::ActiveModel {
                movie_id: Set(movie_id),
                actor_id: Set(*actor_id),
            };
            movie_actor::Entity::insert(link).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn set_genres(&self, movie_id: i32, genre_ids: &[i32]) -> AppResult<()> {
        let txn = self.db.begin().await?;

        movie_genre::Entity::delete_many()
            .filter(movie_genre::Column::MovieId.eq(movie_id))
            .exec(&txn)
            .await?;

        for genre_id in genre_ids {
            let link = movie_genre::ActiveModel {
                movie_id: Set(movie_id),
                genre_id: Set(*genre_id),
            };
            movie_genre::Entity::insert(link).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn directors(&self, movie: &movie::Model) -> AppResult<Vec<actor::Model>> {
        Ok(movie.find_linked(movie::Directors).all(&self.db).await?)
    }

    pub async fn cast(&self, movie: &movie::Model) -> AppResult<Vec<actor::Model>> {
        Ok(movie.find_linked(movie::Cast).all(&self.db).await?)
    }

    pub async fn genres(&self, movie: &movie::Model) -> AppResult<Vec<genre::Model>> {
        Ok(movie.find_related(genre::Entity).all(&self.db).await?)
    }

    pub async fn add_shot(
        &self,
        movie_id: i32,
        title: &str,
        description: &str,
        image: &str,
    ) -> AppResult<movie_shot::Model> {
        let model = movie_shot::ActiveModel {
            id: Default::default(),
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            image: Set(media::stored_path(media::SHOT_DIR, image)),
            movie_id: Set(movie_id),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn shots(&self, movie_id: i32) -> AppResult<Vec<movie_shot::Model>> {
        Ok(movie_shot::Entity::find()
            .filter(movie_shot::Column::MovieId.eq(movie_id))
            .all(&self.db)
            .await?)
    }

    pub async fn create_star(&self, value: i16) -> AppResult<rating_star::Model> {
        let model = rating_star::ActiveModel {
            id: Default::default(),
            value: Set(value),
        };
        Ok(model.insert(&self.db).await?)
    }

    /// The scale in display order: highest star first.
    pub async fn rating_stars(&self) -> AppResult<Vec<rating_star::Model>> {
        Ok(rating_star::Entity::find()
            .order_by_desc(rating_star::Column::Value)
            .all(&self.db)
            .await?)
    }

    pub async fn rate(&self, ip: &str, star_id: i32, movie_id: i32) -> AppResult<rating::Model> {
        let model = rating::ActiveModel {
            id: Default::default(),
            ip: Set(ip.to_string()),
            star_id: Set(star_id),
            movie_id: Set(movie_id),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn ratings(&self, movie_id: i32) -> AppResult<Vec<rating::Model>> {
        Ok(rating::Entity::find()
            .filter(rating::Column::MovieId.eq(movie_id))
            .all(&self.db)
            .await?)
    }

    /// "star - movie" label for administrative listings.
    pub async fn rating_label(&self, rating: &rating::Model) -> AppResult<String> {
        let star = rating
            .find_related(rating_star::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("rating {} has no star", rating.id))?;
        let movie = rating
            .find_related(movie::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("rating {} has no movie", rating.id))?;
        Ok(format!("{star} - {movie}"))
    }

    pub async fn add_review(&self, movie_id: i32, new: NewReview) -> AppResult<review::Model> {
        let model = review::ActiveModel {
            id: Default::default(),
            email: Set(new.email),
            name: Set(new.name),
            text: Set(new.text),
            parent_id: Set(new.parent_id),
            movie_id: Set(movie_id),
        };
        Ok(model.insert(&self.db).await?)
    }

    /// Reviews with no parent: the top of each thread, in storage order.
    pub async fn top_level_reviews(&self, movie_id: i32) -> AppResult<Vec<review::Model>> {
        Ok(review::Entity::find()
            .filter(review::Column::MovieId.eq(movie_id))
            .filter(review::Column::ParentId.is_null())
            .all(&self.db)
            .await?)
    }

    /// Direct replies to a review. The tree stores only the child-to-parent
    /// edge; this is the derived reverse lookup.
    pub async fn replies(&self, review_id: i32) -> AppResult<Vec<review::Model>> {
        Ok(review::Entity::find()
            .filter(review::Column::ParentId.eq(review_id))
            .all(&self.db)
            .await?)
    }

    pub async fn delete_review(&self, id: i32) -> AppResult<()> {
        review::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    /// "name - movie" label for administrative listings.
    pub async fn review_label(&self, review: &review::Model) -> AppResult<String> {
        let movie = review
            .find_related(movie::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("review {} has no movie", review.id))?;
        Ok(format!("{} - {}", review.name, movie))
    }
}

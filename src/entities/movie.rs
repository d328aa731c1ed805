use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub tagline: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub poster: String,
    pub year: i16,
    pub country: String,
    pub world_premiere: Date,
    pub budget: i64,
    pub box_office_us: i64,
    pub box_office_world: i64,
    pub category_id: Option<i32>,
    #[sea_orm(unique)]
    pub slug: String,
    pub draft: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(has_many = "super::movie_shot::Entity")]
    MovieShot,
    #[sea_orm(has_many = "super::rating::Entity")]
    Rating,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::movie_shot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieShot.def()
    }
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::genre::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_genre::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_genre::Relation::Movie.def().rev())
    }
}

/// Directors and cast both point into `actor`, so only one of them can be
/// the `Related<actor::Entity>` impl. Both are expressed as links instead.
#[derive(Debug)]
pub struct Directors;

impl Linked for Directors {
    type FromEntity = Entity;
    type ToEntity = super::actor::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::movie_director::Relation::Movie.def().rev(),
            super::movie_director::Relation::Actor.def(),
        ]
    }
}

#[derive(Debug)]
pub struct Cast;

impl Linked for Cast {
    type FromEntity = Entity;
    type ToEntity = super::actor::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::movie_actor::Relation::Movie.def().rev(),
            super::movie_actor::Relation::Actor.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Detail-page locator for the external routing layer, keyed by slug.
    pub fn absolute_url(&self) -> String {
        format!("/movie/{}/", self.slug)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

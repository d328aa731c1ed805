use sea_orm::entity::prelude::*;

/// People on either side of the camera. A row can sit in a movie's director
/// set, its cast set, or both; the roles live on the junction tables, not
/// here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "actor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i16,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Detail-page locator for the external routing layer, keyed by name.
    pub fn absolute_url(&self) -> String {
        format!("/actor/{}/", urlencoding::encode(&self.name))
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_catalog;
mod m20250107_000001_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_catalog::Migration),
            Box::new(m20250107_000001_add_lookup_indexes::Migration),
        ]
    }
}

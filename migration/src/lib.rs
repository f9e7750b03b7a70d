pub use sea_orm_migration::prelude::*;

mod m20251201_000001_app_user;
mod m20251201_000002_auth_token;
mod m20251201_000003_ingredient;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251201_000001_app_user::Migration),
            Box::new(m20251201_000002_auth_token::Migration),
            Box::new(m20251201_000003_ingredient::Migration),
        ]
    }
}

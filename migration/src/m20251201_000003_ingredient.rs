use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251201_000001_app_user::AppUser;

static IDX_INGREDIENT_USER_ID: &str = "idx-ingredient-user_id";
static FK_INGREDIENT_USER_ID: &str = "fk-ingredient-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredient::Table)
                    .if_not_exists()
                    .col(pk_auto(Ingredient::Id))
                    .col(string_len(Ingredient::Name, 255))
                    .col(integer(Ingredient::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INGREDIENT_USER_ID)
                            .from(Ingredient::Table, Ingredient::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INGREDIENT_USER_ID)
                    .table(Ingredient::Table)
                    .col(Ingredient::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INGREDIENT_USER_ID)
                    .table(Ingredient::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ingredient::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    UserId,
}

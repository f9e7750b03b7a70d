use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251201_000001_app_user::AppUser;

static FK_AUTH_TOKEN_USER_ID: &str = "fk-auth_token-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline since SQLite cannot add them afterwards
        manager
            .create_table(
                Table::create()
                    .table(AuthToken::Table)
                    .if_not_exists()
                    .col(string_len(AuthToken::Key, 40).primary_key())
                    .col(integer_uniq(AuthToken::UserId))
                    .col(timestamp(AuthToken::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_AUTH_TOKEN_USER_ID)
                            .from(AuthToken::Table, AuthToken::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthToken::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuthToken {
    Table,
    Key,
    UserId,
    CreatedAt,
}

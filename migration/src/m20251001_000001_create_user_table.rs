use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(string_null(User::Email).unique_key())
                    .col(string(User::PasswordHash))
                    .col(string(User::CountryCode).default("+91"))
                    .col(string_uniq(User::Phone))
                    .col(string(User::Role).default("resident"))
                    .col(boolean(User::HasPet).default(false))
                    .col(string_null(User::BloodGroup))
                    .col(string_null(User::Occupation))
                    .col(json(User::Interests))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    CountryCode,
    Phone,
    Role,
    HasPet,
    BloodGroup,
    Occupation,
    Interests,
    CreatedAt,
}

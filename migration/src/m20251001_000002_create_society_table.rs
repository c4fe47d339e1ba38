use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Society::Table)
                    .if_not_exists()
                    .col(pk_auto(Society::Id))
                    .col(string(Society::Name))
                    .col(string(Society::Address))
                    .col(string_uniq(Society::RegistrationNumber))
                    .col(integer(Society::OwnerId))
                    .col(json(Society::Amenities))
                    .col(double(Society::MaintenanceFee).default(0.0))
                    .col(json(Society::Rules))
                    .col(string_null(Society::ContactPhone))
                    .col(string_null(Society::ContactEmail))
                    .col(string_null(Society::Logo))
                    .col(boolean(Society::Status).default(true))
                    .col(json(Society::Wings))
                    .col(integer(Society::Version).default(0))
                    .col(timestamp_with_time_zone(Society::CreatedAt))
                    .col(timestamp_with_time_zone(Society::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_society_owner_id")
                    .table(Society::Table)
                    .col(Society::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Society::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Society {
    Table,
    Id,
    Name,
    Address,
    RegistrationNumber,
    OwnerId,
    Amenities,
    MaintenanceFee,
    Rules,
    ContactPhone,
    ContactEmail,
    Logo,
    Status,
    Wings,
    Version,
    CreatedAt,
    UpdatedAt,
}

//! Migration: Create the laptops catalog table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Laptops::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Laptops::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Laptops::Name).string().not_null())
                    .col(ColumnDef::new(Laptops::Brand).string().not_null())
                    .col(ColumnDef::new(Laptops::Price).big_integer().not_null())
                    .col(
                        ColumnDef::new(Laptops::OriginalPrice)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Laptops::Image).text().not_null())
                    .col(ColumnDef::new(Laptops::Description).text().null())
                    .col(ColumnDef::new(Laptops::Processor).string().not_null())
                    .col(ColumnDef::new(Laptops::Ram).string().not_null())
                    .col(ColumnDef::new(Laptops::Storage).string().not_null())
                    .col(ColumnDef::new(Laptops::Display).string().not_null())
                    .col(ColumnDef::new(Laptops::Os).string().not_null())
                    .col(
                        ColumnDef::new(Laptops::InStock)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Laptops::IsNew)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Laptops::Rating)
                            .double()
                            .not_null()
                            .default(4.0),
                    )
                    .col(
                        ColumnDef::new(Laptops::Reviews)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Laptops::Discount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Laptops::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Laptops::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Laptops::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Laptops {
    Table,
    Id,
    Name,
    Brand,
    Price,
    OriginalPrice,
    Image,
    Description,
    Processor,
    Ram,
    Storage,
    Display,
    Os,
    InStock,
    IsNew,
    Rating,
    Reviews,
    Discount,
    CreatedAt,
    UpdatedAt,
}

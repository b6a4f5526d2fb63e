//! Migration: Create the wishlists table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wishlists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wishlists::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Wishlists::UserId).uuid().not_null())
                    .col(ColumnDef::new(Wishlists::LaptopId).uuid().not_null())
                    .col(
                        ColumnDef::new(Wishlists::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Wishlists::Table, Wishlists::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Wishlists::Table, Wishlists::LaptopId)
                            .to(Laptops::Table, Laptops::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One wishlist entry per (user, laptop) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_wishlists_user_laptop")
                    .table(Wishlists::Table)
                    .col(Wishlists::UserId)
                    .col(Wishlists::LaptopId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_wishlists_user_laptop")
                    .table(Wishlists::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Wishlists::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Wishlists {
    Table,
    Id,
    UserId,
    LaptopId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Laptops {
    Table,
    Id,
}

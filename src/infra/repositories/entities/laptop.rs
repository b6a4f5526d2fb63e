//! SeaORM entity for the `laptops` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "laptops")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub price: i64,
    pub original_price: i64,
    #[sea_orm(column_type = "Text")]
    pub image: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub processor: String,
    pub ram: String,
    pub storage: String,
    pub display: String,
    pub os: String,
    pub in_stock: bool,
    pub is_new: bool,
    pub rating: f64,
    pub reviews: i32,
    pub discount: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
    #[sea_orm(has_many = "super::wishlist::Entity")]
    Wishlists,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl Related<super::wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishlists.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Laptop {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            brand: model.brand,
            price: model.price,
            original_price: model.original_price,
            image: model.image,
            description: model.description,
            processor: model.processor,
            ram: model.ram,
            storage: model.storage,
            display: model.display,
            os: model.os,
            in_stock: model.in_stock,
            is_new: model.is_new,
            rating: model.rating,
            reviews: model.reviews,
            discount: model.discount,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

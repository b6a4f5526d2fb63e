//! SeaORM entity for the `order_items` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub order_id: String,
    pub laptop_id: Uuid,
    pub laptop_name: String,
    #[sea_orm(column_type = "Text")]
    pub laptop_image: String,
    pub quantity: i32,
    pub price: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::laptop::Entity",
        from = "Column::LaptopId",
        to = "super::laptop::Column::Id"
    )]
    Laptop,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::laptop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Laptop.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::OrderItem {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            laptop_id: model.laptop_id,
            laptop_name: model.laptop_name,
            laptop_image: model.laptop_image,
            quantity: model.quantity,
            price: model.price,
            created_at: model.created_at,
        }
    }
}

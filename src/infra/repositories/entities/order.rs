//! SeaORM entity for the `orders` table.
//!
//! Status and payment method are stored as text; the domain enums own the
//! valid values and the request layer rejects anything else.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    // Caller-supplied opaque id, e.g. "ORD-1722945600000"
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub phone_number: String,
    #[sea_orm(column_type = "Text")]
    pub delivery_address: String,
    pub payment_method: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub additional_notes: Option<String>,
    pub total_amount: i64,
    pub status: String,
    pub estimated_delivery: Date,
    pub order_date: Date,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Order {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            user_name: model.user_name,
            user_email: model.user_email,
            phone_number: model.phone_number,
            delivery_address: model.delivery_address,
            payment_method: crate::domain::PaymentMethod::from(model.payment_method.as_str()),
            additional_notes: model.additional_notes,
            total_amount: model.total_amount,
            status: crate::domain::OrderStatus::from(model.status.as_str()),
            estimated_delivery: model.estimated_delivery,
            order_date: model.order_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

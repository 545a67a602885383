//! Product database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Product;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub producer: String,
    pub price: Decimal,
    pub expiration_date: Date,
    /// Creation timestamp (NULL when the row was inserted without one)
    pub creation_time: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            id: Some(model.id),
            name: model.name,
            producer: model.producer,
            price: model.price,
            expiration_date: model.expiration_date,
            creation_time: model.creation_time,
        }
    }
}

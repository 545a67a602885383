//! Product repository: one statement per call against the `products` table.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter, Set};

use super::entities::product::{self, Entity as ProductEntity};
use common::{OperationError, OperationResult};
use domain::Product;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product and assign the storage-generated id to the entity
    async fn save(&self, product: &mut Product) -> OperationResult<()>;

    /// Fetch every stored product
    async fn find_all(&self) -> OperationResult<Vec<Product>>;

    /// Fetch one product by id
    async fn find_by_id(&self, id: i64) -> OperationResult<Product>;

    /// Overwrite the row matching the entity's id
    async fn update(&self, product: &Product) -> OperationResult<()>;

    /// Delete the row matching the entity's id
    async fn remove(&self, product: &Product) -> OperationResult<()>;
}

/// Concrete implementation of ProductRepository.
///
/// Holds no state besides the connection provider; every operation is
/// self-contained, so the store is safe to share across tasks.
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map entity fields into an active model with the id left unset.
///
/// `creation_time` binds as a nullable parameter, giving inserts and updates
/// a single statement shape whether or not the value is present.
fn active_model(product: &Product) -> product::ActiveModel {
    product::ActiveModel {
        id: NotSet,
        name: Set(product.name.clone()),
        producer: Set(product.producer.clone()),
        price: Set(product.price),
        expiration_date: Set(product.expiration_date),
        creation_time: Set(product.creation_time),
    }
}

/// The id a statement may address: present and positive.
fn validated_id(product: &Product) -> OperationResult<i64> {
    match product.id {
        None => Err(OperationError::MissingId),
        Some(id) if id <= 0 => Err(OperationError::InvalidId(id)),
        Some(id) => Ok(id),
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn save(&self, product: &mut Product) -> OperationResult<()> {
        let inserted = ProductEntity::insert(active_model(product))
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotInserted => OperationError::KeyNotGenerated,
                other => OperationError::from(other),
            })?;

        product.id = Some(inserted.last_insert_id);
        Ok(())
    }

    async fn find_all(&self) -> OperationResult<Vec<Product>> {
        let models = ProductEntity::find()
            .all(&self.db)
            .await
            .map_err(OperationError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> OperationResult<Product> {
        let model = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(OperationError::from)?;

        model.map(Product::from).ok_or(OperationError::NotFound(id))
    }

    async fn update(&self, product: &Product) -> OperationResult<()> {
        let id = validated_id(product)?;

        // rows_affected is not inspected: an update against an id with no
        // row is accepted as a no-op
        ProductEntity::update_many()
            .set(active_model(product))
            .filter(product::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(OperationError::from)?;

        Ok(())
    }

    async fn remove(&self, product: &Product) -> OperationResult<()> {
        let id = validated_id(product)?;

        ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(OperationError::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn product_with_id(id: Option<i64>) -> Product {
        Product {
            id,
            name: "Milk".to_string(),
            producer: "Acme".to_string(),
            price: dec!(1.99),
            expiration_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            creation_time: None,
        }
    }

    #[test]
    fn validated_id_accepts_positive_ids() {
        assert_eq!(validated_id(&product_with_id(Some(7))).unwrap(), 7);
    }

    #[test]
    fn validated_id_rejects_missing_id() {
        let err = validated_id(&product_with_id(None)).unwrap_err();
        assert!(matches!(err, OperationError::MissingId));
    }

    #[test]
    fn validated_id_rejects_non_positive_ids() {
        let err = validated_id(&product_with_id(Some(0))).unwrap_err();
        assert!(matches!(err, OperationError::InvalidId(0)));

        let err = validated_id(&product_with_id(Some(-5))).unwrap_err();
        assert!(matches!(err, OperationError::InvalidId(-5)));
    }

    #[tokio::test]
    async fn mocked_repository_drives_the_trait_object() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id()
            .with(eq(99))
            .returning(|id| Err(OperationError::NotFound(id)));

        let repo: Arc<dyn ProductRepository> = Arc::new(repo);
        let err = repo.find_by_id(99).await.unwrap_err();
        assert!(matches!(err, OperationError::NotFound(99)));
    }
}

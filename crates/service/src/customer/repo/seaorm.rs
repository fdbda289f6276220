use sea_orm::DatabaseConnection;

use crate::customer::domain::{Customer, CustomerId, NewCustomer};
use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn select_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        let rows = models::customer::find_all(&self.db).await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn select_customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, ServiceError> {
        Ok(models::customer::find(&self.db, id).await?.map(Customer::from))
    }

    async fn exists_customer_with_id(&self, id: CustomerId) -> Result<bool, ServiceError> {
        Ok(models::customer::exists(&self.db, id).await?)
    }

    async fn exists_customer_with_email(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(models::customer::email_exists(&self.db, email).await?)
    }

    async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer, ServiceError> {
        let created = models::customer::create(&self.db, &customer.name, customer.age, &customer.email).await?;
        Ok(created.into())
    }

    async fn update_customer(&self, customer: Customer) -> Result<Customer, ServiceError> {
        let updated = models::customer::overwrite(&self.db, customer.id, &customer.name, customer.age, &customer.email)
            .await
            .map_err(|e| match e {
                models::errors::ModelError::NotFound(_) => ServiceError::customer_not_found(customer.id),
                other => other.into(),
            })?;
        Ok(updated.into())
    }

    async fn delete_customer_by_id(&self, id: CustomerId) -> Result<(), ServiceError> {
        Ok(models::customer::hard_delete(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, skip_db_tests};
    use uuid::Uuid;

    #[tokio::test]
    async fn seaorm_repository_primitives() -> Result<(), anyhow::Error> {
        if skip_db_tests() { return Ok(()); }
        let repo = SeaOrmCustomerRepository::new(get_db().await?);

        let email = format!("repo_{}@example.com", Uuid::new_v4());
        let created = repo.insert_customer(NewCustomer { name: "Repo".into(), age: 22, email: email.clone() }).await?;
        assert!(repo.exists_customer_with_id(created.id).await?);
        assert!(repo.exists_customer_with_email(&email).await?);

        let changed = repo.update_customer(Customer { age: 23, ..created.clone() }).await?;
        assert_eq!(changed, Customer { age: 23, ..created.clone() });

        let dup = repo.insert_customer(NewCustomer { name: "Other".into(), age: 1, email: email.clone() }).await.unwrap_err();
        assert!(matches!(dup, ServiceError::DuplicateResource(_)));

        repo.delete_customer_by_id(created.id).await?;
        assert!(repo.select_customer_by_id(created.id).await?.is_none());

        let missing = repo.update_customer(created).await.unwrap_err();
        assert!(matches!(missing, ServiceError::NotFound(_)));
        Ok(())
    }
}

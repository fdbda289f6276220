use async_trait::async_trait;

use super::domain::{Customer, CustomerId, NewCustomer};
use crate::errors::ServiceError;

/// Persistence primitives for customers. Implementations enforce nothing
/// beyond raw storage; business rules live in `CustomerService`.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn select_all_customers(&self) -> Result<Vec<Customer>, ServiceError>;
    async fn select_customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, ServiceError>;
    async fn exists_customer_with_id(&self, id: CustomerId) -> Result<bool, ServiceError>;
    async fn exists_customer_with_email(&self, email: &str) -> Result<bool, ServiceError>;
    async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer, ServiceError>;
    /// Full-record overwrite by id.
    async fn update_customer(&self, customer: Customer) -> Result<Customer, ServiceError>;
    async fn delete_customer_by_id(&self, id: CustomerId) -> Result<(), ServiceError>;
}

/// In-memory repository for tests, doc examples and `STORE_BACKEND=memory`.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Rows {
        next_id: CustomerId,
        by_id: BTreeMap<CustomerId, Customer>,
    }

    #[derive(Default)]
    pub struct InMemoryCustomerRepository {
        rows: Mutex<Rows>,
    }

    impl InMemoryCustomerRepository {
        /// Repository pre-filled with `customers`, ids assigned from 1 in order.
        pub fn seeded(customers: impl IntoIterator<Item = NewCustomer>) -> Self {
            let mut rows = Rows::default();
            for c in customers {
                rows.next_id += 1;
                rows.by_id.insert(rows.next_id, c.with_id(rows.next_id));
            }
            Self { rows: Mutex::new(rows) }
        }

        fn rows(&self) -> Result<MutexGuard<'_, Rows>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("customer store lock poisoned".into()))
        }

        fn email_taken_by_other(rows: &Rows, email: &str, id: Option<CustomerId>) -> bool {
            rows.by_id.values().any(|c| c.email == email && Some(c.id) != id)
        }
    }

    #[async_trait]
    impl CustomerRepository for InMemoryCustomerRepository {
        async fn select_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
            Ok(self.rows()?.by_id.values().cloned().collect())
        }

        async fn select_customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, ServiceError> {
            Ok(self.rows()?.by_id.get(&id).cloned())
        }

        async fn exists_customer_with_id(&self, id: CustomerId) -> Result<bool, ServiceError> {
            Ok(self.rows()?.by_id.contains_key(&id))
        }

        async fn exists_customer_with_email(&self, email: &str) -> Result<bool, ServiceError> {
            Ok(self.rows()?.by_id.values().any(|c| c.email == email))
        }

        async fn insert_customer(&self, customer: NewCustomer) -> Result<Customer, ServiceError> {
            let mut rows = self.rows()?;
            // mirrors the unique index on customer.email
            if Self::email_taken_by_other(&rows, &customer.email, None) {
                return Err(ServiceError::email_taken());
            }
            rows.next_id += 1;
            let created = customer.with_id(rows.next_id);
            rows.by_id.insert(created.id, created.clone());
            Ok(created)
        }

        async fn update_customer(&self, customer: Customer) -> Result<Customer, ServiceError> {
            let mut rows = self.rows()?;
            if !rows.by_id.contains_key(&customer.id) {
                return Err(ServiceError::customer_not_found(customer.id));
            }
            if Self::email_taken_by_other(&rows, &customer.email, Some(customer.id)) {
                return Err(ServiceError::email_taken());
            }
            rows.by_id.insert(customer.id, customer.clone());
            Ok(customer)
        }

        async fn delete_customer_by_id(&self, id: CustomerId) -> Result<(), ServiceError> {
            self.rows()?.by_id.remove(&id);
            Ok(())
        }
    }

}

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Customer, CustomerId, CustomerRegistrationRequest, CustomerUpdateRequest, NewCustomer};
use super::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Customer business service independent of web framework and storage engine.
pub struct CustomerService<R: CustomerRepository> {
    repo: Arc<R>,
}

/// `Some(requested)` when a value was supplied and differs from `current`.
fn effective_change<T: PartialEq + Clone>(requested: &Option<T>, current: &T) -> Option<T> {
    requested.as_ref().filter(|v| *v != current).cloned()
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        self.repo.select_all_customers().await
    }

    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, ServiceError> {
        self.repo
            .select_customer_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::customer_not_found(id))
    }

    /// Register a new customer; the store assigns its id.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{CustomerService, repository::memory::InMemoryCustomerRepository};
    /// use service::customer::domain::CustomerRegistrationRequest;
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerRepository::default()));
    /// let req = CustomerRegistrationRequest { name: "Ann".into(), age: 30, email: "ann@x.com".into() };
    /// let created = tokio_test::block_on(svc.add_customer(req.clone())).unwrap();
    /// assert_eq!(created.email, "ann@x.com");
    /// assert!(tokio_test::block_on(svc.add_customer(req)).is_err());
    /// ```
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn add_customer(&self, request: CustomerRegistrationRequest) -> Result<Customer, ServiceError> {
        let request = request.normalized();
        request.validate()?;
        if self.repo.exists_customer_with_email(&request.email).await? {
            debug!("email already registered");
            return Err(ServiceError::email_taken());
        }
        let created = self.repo.insert_customer(NewCustomer::from(request)).await?;
        info!(customer_id = created.id, "customer_registered");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete_customer_by_id(&self, id: CustomerId) -> Result<(), ServiceError> {
        if !self.repo.exists_customer_with_id(id).await? {
            return Err(ServiceError::customer_not_found(id));
        }
        self.repo.delete_customer_by_id(id).await?;
        info!(customer_id = id, "customer_deleted");
        Ok(())
    }

    /// Apply the supplied fields that differ from the stored record.
    ///
    /// Fails with `Validation("no changes found")` when nothing would change and
    /// with `DuplicateResource` when the new email belongs to another customer;
    /// neither failure writes anything.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{CustomerService, repository::memory::InMemoryCustomerRepository};
    /// use service::customer::domain::{CustomerUpdateRequest, NewCustomer};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let repo = InMemoryCustomerRepository::seeded([NewCustomer { name: "Ann".into(), age: 30, email: "ann@x.com".into() }]);
    /// let svc = CustomerService::new(Arc::new(repo));
    /// let same = CustomerUpdateRequest { age: Some(30), ..Default::default() };
    /// assert!(matches!(tokio_test::block_on(svc.update_customer(1, same)), Err(ServiceError::Validation(_))));
    /// let older = CustomerUpdateRequest { age: Some(31), ..Default::default() };
    /// assert_eq!(tokio_test::block_on(svc.update_customer(1, older)).unwrap().age, 31);
    /// ```
    #[instrument(skip(self, update))]
    pub async fn update_customer(&self, id: CustomerId, update: CustomerUpdateRequest) -> Result<Customer, ServiceError> {
        let mut customer = self.get_customer(id).await?;
        let update = update.normalized();
        update.validate()?;

        let name = effective_change(&update.name, &customer.name);
        let age = effective_change(&update.age, &customer.age);
        let email = effective_change(&update.email, &customer.email);

        if let Some(email) = &email {
            if self.repo.exists_customer_with_email(email).await? {
                debug!(email = %email, "email already registered");
                return Err(ServiceError::email_taken());
            }
        }

        if name.is_none() && age.is_none() && email.is_none() {
            return Err(ServiceError::Validation("no changes found".into()));
        }

        if let Some(name) = name { customer.name = name; }
        if let Some(age) = age { customer.age = age; }
        if let Some(email) = email { customer.email = email; }

        let updated = self.repo.update_customer(customer).await?;
        info!(customer_id = updated.id, "customer_updated");
        Ok(updated)
    }
}

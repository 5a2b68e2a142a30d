use crate::{error::BookingServiceError, shared::usecase::UseCase};
use barber_booking_domain::{ContactDetails, Customer};
use barber_booking_infra::BookingContext;
use tracing::info;

/// Finds the customer owning the given contact details or creates one.
///
/// Lookup and insert are two separate store calls, so two concurrent
/// requests with the same contact details may both create a customer.
#[derive(Debug)]
pub struct ResolveCustomerUseCase {
    pub contact: ContactDetails,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError(String),
}

impl From<UseCaseError> for BookingServiceError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError(msg) => Self::InternalError(msg),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ResolveCustomerUseCase {
    type Response = Customer;

    type Error = UseCaseError;

    const NAME: &'static str = "ResolveCustomer";

    async fn execute(&mut self, ctx: &BookingContext) -> Result<Self::Response, Self::Error> {
        let existing = ctx
            .repos
            .customers
            .find_by_contact(&self.contact)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;
        if let Some(customer) = existing {
            return Ok(customer);
        }

        let customer = Customer::new(self.contact.clone(), ctx.sys.get_timestamp_millis());
        ctx.repos
            .customers
            .insert(&customer)
            .await
            .map_err(|e| UseCaseError::StorageError(e.to_string()))?;
        info!("Created customer: {}", customer.id);

        Ok(customer)
    }
}

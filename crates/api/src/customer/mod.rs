mod resolve_customer;

pub use resolve_customer::{ResolveCustomerUseCase, UseCaseError as ResolveCustomerError};

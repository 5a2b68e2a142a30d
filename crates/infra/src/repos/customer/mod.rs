mod inmemory;
mod postgres;

use barber_booking_domain::{ContactDetails, Customer};
pub use inmemory::InMemoryCustomerRepo;
pub use postgres::PostgresCustomerRepo;

#[async_trait::async_trait]
pub trait ICustomerRepo: Send + Sync {
    async fn insert(&self, customer: &Customer) -> anyhow::Result<()>;
    /// Finds the customer the given contact details belong to. A phone match
    /// wins over an email match and among equal matches the oldest customer
    /// is returned.
    async fn find_by_contact(&self, contact: &ContactDetails) -> anyhow::Result<Option<Customer>>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, Repos};
    use barber_booking_domain::{ContactDetails, Customer, ID};

    async fn create_repos() -> Vec<Repos> {
        vec![Repos::create_inmemory(), setup_context().await.repos]
    }

    fn unique(prefix: &str) -> String {
        format!("{}-{}", prefix, ID::default())
    }

    fn contact(phone: Option<&str>, email: Option<&str>) -> ContactDetails {
        ContactDetails {
            name: Some("Alex".into()),
            phone: phone.map(String::from),
            email: email.map(String::from),
        }
    }

    #[tokio::test]
    async fn it_finds_customer_by_phone_or_email() {
        for repos in create_repos().await {
            let phone = unique("phone");
            let email = unique("email");
            let customer = Customer::new(contact(Some(&phone), Some(&email)), 10);
            repos.customers.insert(&customer).await.unwrap();

            let by_phone = repos
                .customers
                .find_by_contact(&contact(Some(&phone), None))
                .await
                .unwrap();
            assert_eq!(by_phone.map(|c| c.id), Some(customer.id));

            let by_email = repos
                .customers
                .find_by_contact(&contact(Some(&unique("other")), Some(&email)))
                .await
                .unwrap();
            assert_eq!(by_email.map(|c| c.id), Some(customer.id));

            let none = repos
                .customers
                .find_by_contact(&contact(Some(&unique("other")), Some(&unique("other"))))
                .await
                .unwrap();
            assert!(none.is_none());
        }
    }

    #[tokio::test]
    async fn phone_match_wins_over_older_email_match() {
        for repos in create_repos().await {
            let phone = unique("phone");
            let email = unique("email");
            let email_owner = Customer::new(contact(None, Some(&email)), 1);
            let phone_owner = Customer::new(contact(Some(&phone), None), 2);
            repos.customers.insert(&email_owner).await.unwrap();
            repos.customers.insert(&phone_owner).await.unwrap();

            let found = repos
                .customers
                .find_by_contact(&contact(Some(&phone), Some(&email)))
                .await
                .unwrap();
            assert_eq!(found.map(|c| c.id), Some(phone_owner.id));
        }
    }

    #[tokio::test]
    async fn oldest_customer_wins_among_equal_matches() {
        for repos in create_repos().await {
            let phone = unique("phone");
            let newer = Customer::new(contact(Some(&phone), None), 20);
            let older = Customer::new(contact(Some(&phone), None), 5);
            repos.customers.insert(&newer).await.unwrap();
            repos.customers.insert(&older).await.unwrap();

            let found = repos
                .customers
                .find_by_contact(&contact(Some(&phone), None))
                .await
                .unwrap();
            assert_eq!(found.map(|c| c.id), Some(older.id));
        }
    }

    #[tokio::test]
    async fn blank_contact_details_never_match() {
        for repos in create_repos().await {
            let blank = Customer::new(contact(Some(""), Some("")), 0);
            repos.customers.insert(&blank).await.unwrap();

            let found = repos
                .customers
                .find_by_contact(&contact(Some("  "), Some("")))
                .await
                .unwrap();
            assert!(found.is_none());
        }
    }
}

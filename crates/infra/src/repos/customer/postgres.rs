use super::ICustomerRepo;
use barber_booking_domain::{ContactDetails, Customer};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresCustomerRepo {
    pool: PgPool,
}

impl PostgresCustomerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CustomerRaw {
    id: Uuid,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    created_at: i64,
}

impl From<CustomerRaw> for Customer {
    fn from(e: CustomerRaw) -> Self {
        Self {
            id: e.id.into(),
            name: e.name,
            email: e.email,
            phone: e.phone,
            created: e.created_at,
        }
    }
}

#[async_trait::async_trait]
impl ICustomerRepo for PostgresCustomerRepo {
    async fn insert(&self, customer: &Customer) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO customers(id, name, email, phone, created_at)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(customer.id.inner())
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(customer.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert customer: {:?}. DB returned error: {:?}",
                customer, e
            );
            e
        })?;

        Ok(())
    }

    async fn find_by_contact(&self, contact: &ContactDetails) -> anyhow::Result<Option<Customer>> {
        let phone = contact.lookup_phone();
        let email = contact.lookup_email();
        if phone.is_none() && email.is_none() {
            return Ok(None);
        }

        let res: Option<CustomerRaw> = sqlx::query_as(
            r#"
            SELECT * FROM customers AS c
            WHERE ($1::text IS NOT NULL AND c.phone = $1)
            OR ($2::text IS NOT NULL AND c.email = $2)
            ORDER BY
                CASE WHEN $1::text IS NOT NULL AND c.phone = $1 THEN 0 ELSE 1 END,
                c.created_at ASC
            LIMIT 1
            "#,
        )
        .bind(phone)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find customer by contact: {:?} failed. DB returned error: {:?}",
                contact, e
            );
            e
        })?;

        Ok(res.map(|customer| customer.into()))
    }
}

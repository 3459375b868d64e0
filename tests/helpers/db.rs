use chrono::NaiveDate;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::PgConnection;

use lightbnb::models::{NewProperty, NewUser, Property, User};
use lightbnb::schema::{properties, property_reviews, reservations, users};
use lightbnb::{Settings, Store};

const SCHEMA_SQL: &str = include_str!("../../migrations/2023-06-20-000000_create_lightbnb/up.sql");

/// A throwaway Postgres schema with the LightBnB tables, dropped on drop.
///
/// Needs `TEST_DATABASE_URL`. Tests using it are `#[ignore]`d and run with
/// `cargo test -- --ignored`.
pub struct TestDb {
    conn: PgConnection,
    schema: String,
    store: Store,
}

impl TestDb {
    pub fn new() -> Self {
        let base_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must point at a Postgres database");

        let schema = format!("lightbnb_test_{}", uuid::Uuid::new_v4().simple());

        let mut conn =
            PgConnection::establish(&base_url).expect("Failed to connect to test database");
        conn.batch_execute(&format!(
            "CREATE SCHEMA {schema}; SET search_path TO {schema}; {SCHEMA_SQL}"
        ))
        .expect("Failed to create test schema");

        let separator = if base_url.contains('?') { '&' } else { '?' };
        let settings = Settings {
            database_url: format!("{base_url}{separator}options=-csearch_path%3D{schema}"),
            pool_size: 2,
            drafts_seed_path: None,
        };
        let store = Store::open(&settings).expect("Failed to open store");

        Self {
            conn,
            schema,
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn seed_user(&mut self, name: &str, email: &str) -> User {
        diesel::insert_into(users::table)
            .values(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_string(),
            })
            .returning(User::as_returning())
            .get_result(&mut self.conn)
            .expect("Failed to seed user")
    }

    pub fn seed_property(&mut self, property: NewProperty) -> Property {
        diesel::insert_into(properties::table)
            .values(property)
            .returning(Property::as_returning())
            .get_result(&mut self.conn)
            .expect("Failed to seed property")
    }

    pub fn seed_reservation(
        &mut self,
        guest_id: i32,
        property_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> i32 {
        diesel::insert_into(reservations::table)
            .values((
                reservations::guest_id.eq(guest_id),
                reservations::property_id.eq(property_id),
                reservations::start_date.eq(start),
                reservations::end_date.eq(end),
            ))
            .returning(reservations::id)
            .get_result(&mut self.conn)
            .expect("Failed to seed reservation")
    }

    /// Adds a review, creating the reservation it hangs off.
    pub fn seed_review(&mut self, guest_id: i32, property_id: i32, rating: i16) {
        let day = NaiveDate::from_ymd_opt(2019, 6, 1).expect("date");
        let reservation_id = self.seed_reservation(guest_id, property_id, day, day);

        diesel::insert_into(property_reviews::table)
            .values((
                property_reviews::guest_id.eq(guest_id),
                property_reviews::property_id.eq(property_id),
                property_reviews::reservation_id.eq(reservation_id),
                property_reviews::rating.eq(rating),
                property_reviews::message.eq(Some("messages")),
            ))
            .execute(&mut self.conn)
            .expect("Failed to seed review");
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        self.store.close();
        let _ = self
            .conn
            .batch_execute(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema));
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

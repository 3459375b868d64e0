use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::errors::StoreError;
use crate::models::ReservationListing;
use crate::store::Store;

/// Rows returned by `get_all_reservations`, whatever limit the caller asks for.
pub const RESERVATIONS_CAP: i64 = 10;

const GUEST_RESERVATIONS: &str = "SELECT reservations.id AS reservation_id, \
    reservations.start_date, reservations.end_date, properties.*, \
    avg(property_reviews.rating)::float8 AS average_rating \
    FROM reservations \
    JOIN properties ON reservations.property_id = properties.id \
    JOIN property_reviews ON properties.id = property_reviews.property_id \
    WHERE reservations.guest_id = $1 \
    GROUP BY properties.id, reservations.id \
    ORDER BY reservations.start_date \
    LIMIT 10";

impl Store {
    /// A guest's reservations, earliest first. Reservations of properties
    /// with no reviews are left out.
    ///
    /// `limit` is accepted but not applied: the query always returns at most
    /// [`RESERVATIONS_CAP`] rows. Whether callers should be able to raise or
    /// lower it is still undecided.
    pub async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> Result<Vec<ReservationListing>, StoreError> {
        if limit != RESERVATIONS_CAP {
            tracing::debug!(limit, cap = RESERVATIONS_CAP, "Reservation limit ignored");
        }

        self.interact("get_all_reservations", move |conn| {
            diesel::sql_query(GUEST_RESERVATIONS)
                .bind::<Integer, _>(guest_id)
                .load::<ReservationListing>(conn)
        })
        .await
    }
}

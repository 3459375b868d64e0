use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text};

use crate::errors::StoreError;
use crate::filters::{Bind, PropertyFilter, PropertySearch};
use crate::models::{NewProperty, Property, PropertyListing};
use crate::store::Store;

pub const DEFAULT_LIMIT: i64 = 10;

const LISTING_SELECT: &str = "SELECT properties.*, \
    avg(property_reviews.rating)::float8 AS average_rating \
    FROM properties \
    JOIN property_reviews ON properties.id = property_reviews.property_id ";

impl Store {
    /// Reviewed properties matching `search`, cheapest first. Properties
    /// without any review never appear.
    pub async fn get_all_properties(
        &self,
        search: &PropertySearch,
        limit: i64,
    ) -> Result<Vec<PropertyListing>, StoreError> {
        let filter = PropertyFilter::from_search(search);
        tracing::debug!(
            where_clause = %filter.where_clause(),
            binds = filter.binds().len(),
            limit,
            "Searching properties"
        );

        self.interact("get_all_properties", move |conn| {
            let mut query = diesel::sql_query(LISTING_SELECT)
                .into_boxed::<Pg>()
                .sql(filter.where_clause());

            for bind in filter.binds() {
                query = match bind {
                    Bind::Int(value) => query.bind::<Integer, _>(value),
                    Bind::Text(value) => query.bind::<Text, _>(value),
                };
            }

            query
                .sql(format!(
                    " GROUP BY properties.id ORDER BY cost_per_night LIMIT ${}",
                    filter.next_placeholder()
                ))
                .bind::<BigInt, _>(limit)
                .load::<PropertyListing>(conn)
        })
        .await
    }

    /// Stores the property in the in-memory drafts, not in the database.
    pub fn add_property(&self, property: NewProperty) -> Property {
        let property = self.drafts().add(property);
        tracing::info!(id = property.id, owner_id = property.owner_id, "Added property draft");
        property
    }
}

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::{Date, Double, Integer};
use serde::{Deserialize, Serialize};

use crate::schema::{properties, users};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Selectable, Queryable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Selectable, Queryable, QueryableByName)]
#[diesel(table_name = properties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents.
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// A property as submitted by an owner, before it has an id.
#[derive(Debug, Clone, PartialEq, Deserialize, Insertable)]
#[diesel(table_name = properties)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub post_code: String,
}

impl NewProperty {
    pub fn with_id(self, id: i32) -> Property {
        Property {
            id,
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            thumbnail_photo_url: self.thumbnail_photo_url,
            cover_photo_url: self.cover_photo_url,
            cost_per_night: self.cost_per_night,
            parking_spaces: self.parking_spaces,
            number_of_bathrooms: self.number_of_bathrooms,
            number_of_bedrooms: self.number_of_bedrooms,
            country: self.country,
            street: self.street,
            city: self.city,
            province: self.province,
            post_code: self.post_code,
            active: true,
        }
    }
}

/// A property row joined against its reviews.
#[derive(Debug, Clone, Serialize, QueryableByName)]
pub struct PropertyListing {
    #[diesel(embed)]
    #[serde(flatten)]
    pub property: Property,
    #[diesel(sql_type = Double)]
    pub average_rating: f64,
}

/// A guest's reservation with the reserved property and its rating.
#[derive(Debug, Clone, Serialize, QueryableByName)]
pub struct ReservationListing {
    #[diesel(sql_type = Integer)]
    pub reservation_id: i32,
    #[diesel(sql_type = Date)]
    pub start_date: NaiveDate,
    #[diesel(sql_type = Date)]
    pub end_date: NaiveDate,
    #[diesel(embed)]
    #[serde(flatten)]
    pub property: Property,
    #[diesel(sql_type = Double)]
    pub average_rating: f64,
}

use askama::Template;
use chrono::NaiveDate;

use crate::models::{PropertyListing, ReservationListing};

/// The fields a listing card shows, taken from either a property search row
/// or a reservation row.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub thumbnail_photo_url: String,
    pub title: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: i32,
    pub parking_spaces: i32,
    pub average_rating: f64,
    /// Cents.
    pub cost_per_night: i32,
    pub city: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<&PropertyListing> for ListingCard {
    fn from(listing: &PropertyListing) -> Self {
        let p = &listing.property;
        Self {
            thumbnail_photo_url: p.thumbnail_photo_url.clone(),
            title: p.title.clone(),
            number_of_bedrooms: p.number_of_bedrooms,
            number_of_bathrooms: p.number_of_bathrooms,
            parking_spaces: p.parking_spaces,
            average_rating: listing.average_rating,
            cost_per_night: p.cost_per_night,
            city: p.city.clone(),
            start_date: None,
            end_date: None,
        }
    }
}

impl From<&ReservationListing> for ListingCard {
    fn from(reservation: &ReservationListing) -> Self {
        let p = &reservation.property;
        Self {
            thumbnail_photo_url: p.thumbnail_photo_url.clone(),
            title: p.title.clone(),
            number_of_bedrooms: p.number_of_bedrooms,
            number_of_bathrooms: p.number_of_bathrooms,
            parking_spaces: p.parking_spaces,
            average_rating: reservation.average_rating,
            cost_per_night: p.cost_per_night,
            city: p.city.clone(),
            start_date: Some(reservation.start_date),
            end_date: Some(reservation.end_date),
        }
    }
}

#[derive(Template)]
#[template(path = "property_listing.html")]
struct ListingTemplate<'a> {
    thumbnail_photo_url: &'a str,
    title: &'a str,
    number_of_bedrooms: i32,
    number_of_bathrooms: i32,
    parking_spaces: i32,
    rating: f64,
    price: f64,
    city: &'a str,
    dates: Option<String>,
}

/// Renders one listing card. The date range is shown only for reservations.
/// Interpolated text is HTML-escaped.
pub fn create_listing(card: &ListingCard, is_reservation: bool) -> Result<String, askama::Error> {
    let dates = match (is_reservation, card.start_date, card.end_date) {
        (true, Some(start), Some(end)) => Some(format_date_range(start, end)),
        _ => None,
    };

    ListingTemplate {
        thumbnail_photo_url: &card.thumbnail_photo_url,
        title: &card.title,
        number_of_bedrooms: card.number_of_bedrooms,
        number_of_bathrooms: card.number_of_bathrooms,
        parking_spaces: card.parking_spaces,
        rating: round_rating(card.average_rating),
        price: f64::from(card.cost_per_night) / 100.0,
        city: &card.city,
        dates,
    }
    .render()
}

fn round_rating(rating: f64) -> f64 {
    (rating * 100.0).round() / 100.0
}

/// "Jan 1, 2020 - Jan 8, 2020"
fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
}

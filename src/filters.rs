//! Optional search filters for property listings, rendered as a parameterized
//! WHERE clause.
//!
//! Predicates are kept in a fixed order (owner, price range, city) and every
//! value is carried as a bind parameter. Placeholder numbering is derived from
//! the position of each bind, so the SQL text and the bind list cannot drift.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertySearch {
    pub owner_id: Option<i32>,
    /// Whole dollars.
    pub minimum_price_per_night: Option<i32>,
    /// Whole dollars.
    pub maximum_price_per_night: Option<i32>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    OwnerId(i32),
    /// Exclusive bounds, in cents.
    PriceRange { min_cents: i32, max_cents: i32 },
    /// A `LIKE` pattern over the lowercased city.
    City(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    Int(i32),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    predicates: Vec<Predicate>,
}

impl PropertyFilter {
    pub fn from_search(search: &PropertySearch) -> Self {
        let mut predicates = Vec::new();

        // Zero means "unset" for every numeric filter.
        let given = |value: Option<i32>| value.filter(|&v| v != 0);

        if let Some(owner_id) = given(search.owner_id) {
            predicates.push(Predicate::OwnerId(owner_id));
        }

        // A single bound is ignored; the range only applies with both ends.
        if let (Some(min), Some(max)) = (
            given(search.minimum_price_per_night),
            given(search.maximum_price_per_night),
        ) {
            predicates.push(Predicate::PriceRange {
                min_cents: min.saturating_mul(100),
                max_cents: max.saturating_mul(100),
            });
        }

        if let Some(city) = search.city.as_deref().filter(|c| !c.is_empty()) {
            predicates.push(Predicate::City(format!("%{}%", city.to_lowercase())));
        }

        Self { predicates }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn binds(&self) -> Vec<Bind> {
        self.predicates
            .iter()
            .flat_map(|predicate| match predicate {
                Predicate::OwnerId(id) => vec![Bind::Int(*id)],
                Predicate::PriceRange {
                    min_cents,
                    max_cents,
                } => vec![Bind::Int(*min_cents), Bind::Int(*max_cents)],
                Predicate::City(pattern) => vec![Bind::Text(pattern.clone())],
            })
            .collect()
    }

    /// `WHERE 1=1` followed by one `AND` term per bound value, numbered from `$1`.
    pub fn where_clause(&self) -> String {
        let mut clause = String::from("WHERE 1=1");
        let mut index = 0;
        let mut next = || {
            index += 1;
            index
        };

        for predicate in &self.predicates {
            match predicate {
                Predicate::OwnerId(_) => {
                    clause.push_str(&format!(" AND owner_id = ${}", next()));
                }
                Predicate::PriceRange { .. } => {
                    clause.push_str(&format!(" AND cost_per_night > ${}", next()));
                    clause.push_str(&format!(" AND cost_per_night < ${}", next()));
                }
                Predicate::City(_) => {
                    clause.push_str(&format!(" AND LOWER(city) LIKE ${}", next()));
                }
            }
        }

        clause
    }

    /// Placeholder index for a parameter appended after the filter binds.
    pub fn next_placeholder(&self) -> usize {
        self.binds().len() + 1
    }
}

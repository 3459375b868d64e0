use diesel::prelude::*;

use crate::errors::StoreError;
use crate::models::{NewUser, User};
use crate::schema::users;
use crate::store::Store;

impl Store {
    /// Exact match on email. `Ok(None)` when no user has it.
    pub async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let email = email.to_owned();

        self.interact("get_user_with_email", move |conn| {
            users::table
                .filter(users::email.eq(email))
                .select(User::as_select())
                .first(conn)
                .optional()
        })
        .await
    }

    pub async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        self.interact("get_user_with_id", move |conn| {
            users::table
                .find(id)
                .select(User::as_select())
                .first(conn)
                .optional()
        })
        .await
    }

    /// Inserts the user and returns the stored row with its generated id.
    /// Duplicate emails are only rejected if the database enforces it.
    pub async fn add_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        self.interact("add_user", |conn| {
            diesel::insert_into(users::table)
                .values(new_user)
                .returning(User::as_returning())
                .get_result(conn)
        })
        .await
    }
}

//! This file defines the `Category` type and the API routes for categories.
//! A category is a named label that can be attached to transactions.

mod create;
mod db;
mod delete;
mod get;
mod list;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub use create::create_category_endpoint;
pub use db::{
    create_category, create_category_table, delete_category, get_all_categories, get_category,
};
pub use delete::delete_category_endpoint;
pub use get::get_category_endpoint;
pub use list::list_categories_endpoint;

use crate::Error;

/// The caller-chosen ID of a category, unique within a session.
pub type CategoryId = i64;

/// The name of a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidPayload] if `name` is empty
    /// or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.trim().is_empty() {
            Err(Error::InvalidPayload(
                "category name cannot be empty".to_owned(),
            ))
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryName::new(&value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A label for grouping transactions, e.g. 'Groceries', 'Rent', 'Wages'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,

    /// The name of the category.
    pub name: CategoryName,
}

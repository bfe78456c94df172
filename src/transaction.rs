//! Transactions record money moving into or out of an account, and the API
//! routes for creating, listing, replacing, recategorising and deleting them.

mod create;
mod db;
mod delete;
mod domain;
mod get;
mod list;
mod patch_category;
mod replace;

pub use create::create_transaction_endpoint;
pub use db::{
    TransactionQuery, create_transaction, create_transaction_table, delete_transaction,
    get_transaction, query_transactions, replace_transaction, set_transaction_category,
};
pub use delete::delete_transaction_endpoint;
pub use domain::{Amount, Transaction, TransactionId, TransactionPayload, TransactionType};
pub use get::get_transaction_endpoint;
pub use list::list_transactions_endpoint;
pub use patch_category::patch_transaction_category_endpoint;
pub use replace::replace_transaction_endpoint;

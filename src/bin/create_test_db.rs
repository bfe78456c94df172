use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use ledger_rs::{
    Amount, Category, CategoryName, Transaction, TransactionType, create_category,
    create_session, create_transaction, initialize_db,
};

/// A utility for creating a test database for the REST API server of ledger_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test session...");
    let session_id = create_session(&conn)?;

    println!("Creating test categories...");
    let groceries = create_category(
        session_id,
        Category {
            id: 1,
            name: CategoryName::new("Groceries")?,
        },
        &conn,
    )?;
    let salary = create_category(
        session_id,
        Category {
            id: 2,
            name: CategoryName::new("Salary")?,
        },
        &conn,
    )?;

    println!("Creating test transactions...");
    let transactions: [(i64, &str, i64, TransactionType, Option<Category>); 5] = [
        (1, "2025-01-31T09:00:00Z", 5000, TransactionType::Deposit, Some(salary.clone())),
        (2, "2025-02-01T17:30:00Z", 84, TransactionType::Withdrawal, Some(groceries.clone())),
        (3, "2025-02-03T12:15:00Z", 12, TransactionType::Withdrawal, None),
        (4, "2025-02-28T09:00:00Z", 5000, TransactionType::Deposit, Some(salary)),
        (5, "2025-03-02T18:45:00Z", 103, TransactionType::Withdrawal, Some(groceries)),
    ];

    for (id, date, amount, kind, category) in transactions {
        create_transaction(
            session_id,
            Transaction {
                id,
                date: date.to_owned(),
                amount: Amount::from(amount),
                external_iban: "NL91ABNA0417164300".to_owned(),
                kind,
                category,
            },
            &conn,
        )?;
    }

    println!("Success! Use the header 'X-session-ID: {session_id}' to access the test data.");

    Ok(())
}

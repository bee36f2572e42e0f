//! Schema bootstrap
//!
//! Creates the tables from the SeaORM entities and inserts the reference data
//! a fresh database starts with. There is no migration history: tables are
//! created with `IF NOT EXISTS` and seeding only runs on an empty database.

use rust_decimal::Decimal;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema, Set,
    TransactionTrait,
};

use crate::domain::entities::{AccountType, ClientType};
use crate::entity::{accounts, addresses, clients};

/// Create missing tables, then seed them if the database is empty
pub async fn ensure_created(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // Parents before children so foreign keys resolve
    let mut statements = [
        schema.create_table_from_entity(addresses::Entity),
        schema.create_table_from_entity(clients::Entity),
        schema.create_table_from_entity(accounts::Entity),
    ];

    for statement in statements.iter_mut() {
        statement.if_not_exists();
        db.execute(backend.build(&*statement)).await?;
    }

    if addresses::Entity::find().count(db).await? == 0 {
        seed(db).await?;
        tracing::info!("Seeded empty database with reference data");
    }

    Ok(())
}

/// Insert reference rows. Ids are assigned by the store in insertion order,
/// so a fresh database holds addresses 1..=3, clients 1..=5, accounts 1..=5.
async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
    let txn = db.begin().await?;

    let seed_addresses = [
        ("12 Harbour Road", "Porto"),
        ("4 Station Square", "Leeds"),
        ("88 Mill Lane", "Ghent"),
    ];
    addresses::Entity::insert_many(seed_addresses.iter().map(|(street, city)| {
        addresses::ActiveModel {
            street: Set(street.to_string()),
            city: Set(city.to_string()),
            ..Default::default()
        }
    }))
    .exec(&txn)
    .await?;

    let seed_clients = [
        ("Ana Ribeiro", "351-912-345", ClientType::Residential, "ana.ribeiro@example.com", 1),
        ("Tom Hardcastle", "441-132-448", ClientType::Residential, "tom.h@example.com", 2),
        ("Mill Lane Bakery", "329-224-117", ClientType::Business, "orders@millbakery.example", 3),
        ("Ines Duarte", "351-933-002", ClientType::Residential, "ines.duarte@example.com", 1),
        ("Harbour Logistics", "351-220-900", ClientType::Business, "ops@harbour.example", 1),
    ];
    clients::Entity::insert_many(seed_clients.iter().map(
        |(name, phone, client_type, email, address_id)| clients::ActiveModel {
            name: Set(name.to_string()),
            phone_number: Set(Some(phone.to_string())),
            client_type: Set(client_type.to_string()),
            email: Set(Some(email.to_string())),
            address_id: Set(*address_id),
            ..Default::default()
        },
    ))
    .exec(&txn)
    .await?;

    let seed_accounts = [
        ("Everyday Savings", AccountType::SavingsAccount, 150_000, true, 1),
        ("Home Loan", AccountType::Loan, -8_500_000, true, 1),
        ("Travel Card", AccountType::CreditCard, -4_250, true, 2),
        ("Business Reserve", AccountType::SavingsAccount, 2_300_000, true, 3),
        ("Old Card", AccountType::CreditCard, 0, false, 4),
    ];
    accounts::Entity::insert_many(seed_accounts.iter().map(
        |(name, account_type, cents, is_active, client_id)| accounts::ActiveModel {
            name: Set(name.to_string()),
            account_type: Set(account_type.to_string()),
            balance: Set(Decimal::new(*cents, 2).to_string()),
            is_active: Set(*is_active),
            client_id: Set(*client_id),
            ..Default::default()
        },
    ))
    .exec(&txn)
    .await?;

    txn.commit().await
}

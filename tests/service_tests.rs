mod common;

use chrono::{NaiveDate, NaiveTime};
use farmbook_core::{
    domain::{
        common::PaymentMethod,
        company::Company,
        expense::{Expense, CASH_IN_KIND},
        farmer::Farmer,
        invoice::{SalesInvoice, SalesLine},
        item::Item,
        transaction::{CashBankTransaction, TransactionKind},
    },
    services::{
        CompanyService, ExpenseService, FarmerService, InvoiceService, ItemService,
        ReportService, ServiceError, TransactionService,
    },
};

use common::setup_test_store;

const COMPANY: &str = "C001";

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
}

fn at(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

#[test]
fn farmer_crud_roundtrip() {
    let store = setup_test_store();
    let farmer = FarmerService::add(
        &store,
        COMPANY,
        Farmer::draft("Ravi")
            .with_village("Khandwa")
            .with_phone("9876500000"),
    )
    .unwrap();

    let mut update = farmer.clone();
    update.village = Some("Harsud".into());
    FarmerService::update(&store, COMPANY, update).unwrap();

    let fetched = FarmerService::get(&store, COMPANY, &farmer.id)
        .unwrap()
        .unwrap();
    assert_eq!(fetched.village.as_deref(), Some("Harsud"));

    FarmerService::remove(&store, COMPANY, &farmer.id).unwrap();
    assert!(FarmerService::list(&store, COMPANY).unwrap().is_empty());
}

#[test]
fn entity_ids_continue_past_deletions() {
    let store = setup_test_store();
    let first = FarmerService::add(&store, COMPANY, Farmer::draft("Ravi")).unwrap();
    let second = FarmerService::add(&store, COMPANY, Farmer::draft("Meena")).unwrap();
    FarmerService::remove(&store, COMPANY, &first.id).unwrap();

    // Max+1 derivation over the remaining collection.
    let third = FarmerService::add(&store, COMPANY, Farmer::draft("Suresh")).unwrap();
    assert_eq!(second.id, "F002");
    assert_eq!(third.id, "F003");
}

#[test]
fn company_roster_and_financial_years() {
    let store = setup_test_store();
    let company = CompanyService::add(
        &store,
        Company::draft("Shri Traders").with_address("Indore"),
    )
    .unwrap();
    CompanyService::record_financial_year(&store, &company.id, "2025-2026").unwrap();

    let listed = CompanyService::list(&store).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].financial_years, vec!["2025-2026".to_string()]);
}

#[test]
fn transaction_updates_are_validated() {
    let store = setup_test_store();
    let txn = TransactionService::add(
        &store,
        COMPANY,
        CashBankTransaction::draft(
            TransactionKind::PaymentIn,
            "F001",
            "Ravi",
            250.0,
            PaymentMethod::Bank,
            day(1),
            at(10),
        )
        .with_remarks("part payment"),
    )
    .unwrap();

    let mut bad = txn.clone();
    bad.amount = -5.0;
    let err = TransactionService::update(&store, COMPANY, bad).unwrap_err();
    assert!(matches!(err, ServiceError::Invalid(_)));

    let mut good = txn.clone();
    good.amount = 400.0;
    TransactionService::update(&store, COMPANY, good).unwrap();
    let listed = TransactionService::list(&store, COMPANY).unwrap();
    assert_eq!(listed[0].amount, 400.0);
}

#[test]
fn expense_entries_feed_cash_flow() {
    let store = setup_test_store();
    ExpenseService::add(
        &store,
        COMPANY,
        Expense::draft(CASH_IN_KIND, 5000.0, PaymentMethod::NotApplicable, day(1), at(9)),
    )
    .unwrap();
    ExpenseService::add(
        &store,
        COMPANY,
        Expense::draft("Labour", 300.0, PaymentMethod::Cash, day(2), at(9)),
    )
    .unwrap();
    ExpenseService::add(
        &store,
        COMPANY,
        Expense::draft("Transport", 450.0, PaymentMethod::Bank, day(3), at(9)),
    )
    .unwrap();

    let summary = ReportService::cash_flow(&store, COMPANY).unwrap();
    assert_eq!(summary.cash_in_hand, 4700.0);
    assert_eq!(summary.total_cash_in_from_external, 5000.0);
    assert_eq!(summary.total_operating_expenses, 750.0);
}

#[test]
fn sale_against_missing_item_is_rejected() {
    let store = setup_test_store();
    ItemService::add(&store, COMPANY, Item::draft("Wheat", 25.0).with_stock(100.0)).unwrap();
    let invoice = SalesInvoice::draft(
        day(4),
        at(11),
        Farmer::new("F001", COMPANY, "Ravi").snapshot(),
        vec![SalesLine::new("I999", "Ghost", 10.0, 25.0)],
        0.0,
    );
    let err = InvoiceService::submit_sale(&store, COMPANY, invoice).unwrap_err();
    assert!(matches!(err, ServiceError::Billing(_)));
}

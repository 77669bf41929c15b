//! The canonical category-to-risk-bucket table.
//!
//! Bucket membership is a build-time invariant: every non-sentinel category
//! has exactly one entry, and [`validate_mapping`] is the startup self-check
//! that proves it. Lookups never fail; anything absent resolves to
//! [`RiskBucket::Other`].

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::types::{Category, RiskBucket};

static CATEGORY_BUCKETS: Lazy<HashMap<Category, RiskBucket>> = Lazy::new(|| {
    use Category as C;
    use RiskBucket as B;

    HashMap::from([
        // Income
        (C::SalaryWages, B::Income),
        (C::BusinessRevenue, B::Income),
        (C::InterestIncome, B::Income),
        (C::Dividends, B::Income),
        (C::RefundReimbursement, B::Income),
        (C::GovernmentPayment, B::Income),
        (C::OtherIncome, B::Income),
        (C::InvestmentSell, B::Income),
        // Operating (recurring/necessary)
        (C::Rent, B::OperatingExpense),
        (C::Mortgage, B::OperatingExpense),
        (C::Utilities, B::OperatingExpense),
        (C::TelecomInternet, B::OperatingExpense),
        (C::PayrollSalaries, B::OperatingExpense),
        (C::ProfessionalServices, B::OperatingExpense),
        (C::OfficeSupplies, B::OperatingExpense),
        (C::SoftwareSubscriptions, B::OperatingExpense),
        (C::MarketingAdvertising, B::OperatingExpense),
        (C::VendorPayment, B::OperatingExpense),
        (C::Insurance, B::OperatingExpense),
        (C::HealthcareMedical, B::OperatingExpense),
        (C::HomeMaintenance, B::OperatingExpense),
        (C::Childcare, B::OperatingExpense),
        (C::EducationTuition, B::OperatingExpense),
        // Discretionary
        (C::Groceries, B::DiscretionaryExpense),
        (C::Dining, B::DiscretionaryExpense),
        (C::Transportation, B::DiscretionaryExpense),
        (C::TravelLodging, B::DiscretionaryExpense),
        (C::Entertainment, B::DiscretionaryExpense),
        (C::PersonalCare, B::DiscretionaryExpense),
        (C::CharityDonation, B::DiscretionaryExpense),
        // Financing / debt
        (C::LoanPayment, B::Financing),
        (C::CreditCardPayment, B::Financing),
        (C::InterestExpense, B::Financing),
        // Taxes
        (C::TaxPayment, B::Taxes),
        // Capital / investments
        (C::CapitalExpenditure, B::Capital),
        (C::InvestmentBuy, B::Capital),
        // Fees / interest
        (C::BankFees, B::FeesInterest),
        // Liquidity moves
        (C::TransferIn, B::LiquidityMovement),
        (C::TransferOut, B::LiquidityMovement),
        (C::CashDeposit, B::LiquidityMovement),
        (C::Withdrawal, B::LiquidityMovement),
        // Fallbacks
        (C::Other, B::Other),
        (C::Error, B::Other),
    ])
});

/// Resolves a category to its risk bucket.
///
/// Unmapped categories (including the [`Category::Error`] sentinel) resolve
/// to [`RiskBucket::Other`] - a data-quality signal, never a failure.
#[must_use]
pub fn bucket_of(category: Category) -> RiskBucket {
    CATEGORY_BUCKETS
        .get(&category)
        .copied()
        .unwrap_or(RiskBucket::Other)
}

/// Returns the categories missing from the bucket table.
///
/// Checks the given subset, or the full enumeration minus the error sentinel
/// when `categories` is `None`. Must return an empty list for the shipped
/// table; callers use it as a startup self-check.
#[must_use]
pub fn validate_mapping(categories: Option<&[Category]>) -> Vec<Category> {
    let cats = categories.unwrap_or(Category::all());
    cats.iter()
        .copied()
        .filter(|c| !CATEGORY_BUCKETS.contains_key(c))
        .collect()
}

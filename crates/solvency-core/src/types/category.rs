//! Transaction category and risk-bucket enumerations.
//!
//! Both enumerations are closed: the category set is the contract with the
//! upstream classification step, and the bucket set is the contract with the
//! aggregate analytics. Unknown input resolves to the [`Category::Error`]
//! sentinel rather than failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Leaf spending/income category assigned to a transaction by the upstream
/// classification step.
///
/// The engine never decides *what* category a transaction has; it only maps
/// categories onto risk buckets. Input that could not be classified carries
/// the [`Category::Error`] sentinel. `Ord` follows declaration order and
/// keeps category-keyed groupings reproducible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Income
    /// Salary and wage deposits.
    SalaryWages,
    /// Business revenue / sales receipts.
    BusinessRevenue,
    /// Interest earned.
    InterestIncome,
    /// Dividend income.
    Dividends,
    /// Refunds and reimbursements.
    RefundReimbursement,
    /// Government payments (benefits, tax refunds).
    GovernmentPayment,
    /// Income not covered by a more specific category.
    OtherIncome,

    // Housing / facilities
    /// Rent payments.
    Rent,
    /// Mortgage payments.
    Mortgage,
    /// Utility bills (power, water, gas).
    Utilities,
    /// Telecom and internet service.
    TelecomInternet,

    // Operating / living expenses
    /// Payroll and salaries paid out.
    PayrollSalaries,
    /// Professional services (legal, accounting).
    ProfessionalServices,
    /// Office supplies.
    OfficeSupplies,
    /// Software subscriptions.
    SoftwareSubscriptions,
    /// Marketing and advertising spend.
    MarketingAdvertising,
    /// Vendor and supplier payments.
    VendorPayment,
    /// Groceries.
    Groceries,
    /// Restaurants and dining.
    Dining,
    /// Ground transportation and fuel.
    Transportation,
    /// Travel and lodging.
    TravelLodging,
    /// Healthcare and medical expenses.
    HealthcareMedical,
    /// Insurance premiums.
    Insurance,
    /// Education and tuition.
    EducationTuition,
    /// Childcare.
    Childcare,
    /// Entertainment.
    Entertainment,
    /// Personal care.
    PersonalCare,
    /// Charitable donations.
    CharityDonation,
    /// Home maintenance and repair.
    HomeMaintenance,

    // Financing / debt
    /// Loan principal/interest payments.
    LoanPayment,
    /// Credit-card payments.
    CreditCardPayment,
    /// Tax payments.
    TaxPayment,
    /// Bank service fees.
    BankFees,
    /// Interest charged.
    InterestExpense,

    // Capital / assets
    /// Capital expenditure.
    CapitalExpenditure,
    /// Investment purchases.
    InvestmentBuy,
    /// Investment sales proceeds.
    InvestmentSell,

    // Liquidity movements
    /// Incoming transfers between own accounts.
    TransferIn,
    /// Outgoing transfers between own accounts.
    TransferOut,
    /// Cash deposits.
    CashDeposit,
    /// Cash withdrawals.
    Withdrawal,

    // Fallbacks
    /// Classified, but no specific category applies.
    Other,
    /// Sentinel for input the classifier could not handle.
    #[default]
    Error,
}

impl Category {
    /// Returns every category in declaration order, excluding the
    /// [`Category::Error`] sentinel.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::SalaryWages,
            Self::BusinessRevenue,
            Self::InterestIncome,
            Self::Dividends,
            Self::RefundReimbursement,
            Self::GovernmentPayment,
            Self::OtherIncome,
            Self::Rent,
            Self::Mortgage,
            Self::Utilities,
            Self::TelecomInternet,
            Self::PayrollSalaries,
            Self::ProfessionalServices,
            Self::OfficeSupplies,
            Self::SoftwareSubscriptions,
            Self::MarketingAdvertising,
            Self::VendorPayment,
            Self::Groceries,
            Self::Dining,
            Self::Transportation,
            Self::TravelLodging,
            Self::HealthcareMedical,
            Self::Insurance,
            Self::EducationTuition,
            Self::Childcare,
            Self::Entertainment,
            Self::PersonalCare,
            Self::CharityDonation,
            Self::HomeMaintenance,
            Self::LoanPayment,
            Self::CreditCardPayment,
            Self::TaxPayment,
            Self::BankFees,
            Self::InterestExpense,
            Self::CapitalExpenditure,
            Self::InvestmentBuy,
            Self::InvestmentSell,
            Self::TransferIn,
            Self::TransferOut,
            Self::CashDeposit,
            Self::Withdrawal,
            Self::Other,
        ]
    }

    /// Returns the wire code for this category (e.g. `"salary_wages"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SalaryWages => "salary_wages",
            Self::BusinessRevenue => "business_revenue",
            Self::InterestIncome => "interest_income",
            Self::Dividends => "dividends",
            Self::RefundReimbursement => "refund_reimbursement",
            Self::GovernmentPayment => "government_payment",
            Self::OtherIncome => "other_income",
            Self::Rent => "rent",
            Self::Mortgage => "mortgage",
            Self::Utilities => "utilities",
            Self::TelecomInternet => "telecom_internet",
            Self::PayrollSalaries => "payroll_salaries",
            Self::ProfessionalServices => "professional_services",
            Self::OfficeSupplies => "office_supplies",
            Self::SoftwareSubscriptions => "software_subscriptions",
            Self::MarketingAdvertising => "marketing_advertising",
            Self::VendorPayment => "vendor_payment",
            Self::Groceries => "groceries",
            Self::Dining => "dining",
            Self::Transportation => "transportation",
            Self::TravelLodging => "travel_lodging",
            Self::HealthcareMedical => "healthcare_medical",
            Self::Insurance => "insurance",
            Self::EducationTuition => "education_tuition",
            Self::Childcare => "childcare",
            Self::Entertainment => "entertainment",
            Self::PersonalCare => "personal_care",
            Self::CharityDonation => "charity_donation",
            Self::HomeMaintenance => "home_maintenance",
            Self::LoanPayment => "loan_payment",
            Self::CreditCardPayment => "credit_card_payment",
            Self::TaxPayment => "tax_payment",
            Self::BankFees => "bank_fees",
            Self::InterestExpense => "interest_expense",
            Self::CapitalExpenditure => "capital_expenditure",
            Self::InvestmentBuy => "investment_buy",
            Self::InvestmentSell => "investment_sell",
            Self::TransferIn => "transfer_in",
            Self::TransferOut => "transfer_out",
            Self::CashDeposit => "cash_deposit",
            Self::Withdrawal => "withdrawal",
            Self::Other => "other",
            Self::Error => "error",
        }
    }

    /// Parses a wire code, falling back to [`Category::Error`] for anything
    /// unrecognized.
    ///
    /// Upstream classifiers occasionally emit stale or malformed codes;
    /// those must degrade to the sentinel rather than abort an analysis.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == code)
            .unwrap_or(Self::Error)
    }

    /// Returns true for categories that represent income.
    #[must_use]
    pub fn is_income(&self) -> bool {
        matches!(
            self,
            Self::SalaryWages
                | Self::BusinessRevenue
                | Self::InterestIncome
                | Self::Dividends
                | Self::RefundReimbursement
                | Self::GovernmentPayment
                | Self::OtherIncome
                | Self::InvestmentSell
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse risk bucket used for aggregate analysis.
///
/// Every category maps onto exactly one bucket through the canonical table
/// (see [`crate::bucket_of`]). The `Ord` derive follows declaration order and
/// gives bucket-keyed maps a reproducible iteration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskBucket {
    /// Revenue and other inflows.
    Income,
    /// Recurring, necessary operating expenses.
    OperatingExpense,
    /// Discretionary spending.
    DiscretionaryExpense,
    /// Debt service (loans, credit cards, interest paid).
    Financing,
    /// Tax payments.
    Taxes,
    /// Capital expenditure and investment purchases.
    Capital,
    /// Bank fees and service charges.
    FeesInterest,
    /// Transfers and cash movements that are not cash flow.
    LiquidityMovement,
    /// Everything else, including unclassifiable input.
    #[default]
    Other,
}

impl RiskBucket {
    /// Returns all buckets in declaration order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Income,
            Self::OperatingExpense,
            Self::DiscretionaryExpense,
            Self::Financing,
            Self::Taxes,
            Self::Capital,
            Self::FeesInterest,
            Self::LiquidityMovement,
            Self::Other,
        ]
    }

    /// Returns the wire code for this bucket (e.g. `"operating_expense"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::OperatingExpense => "operating_expense",
            Self::DiscretionaryExpense => "discretionary_expense",
            Self::Financing => "financing",
            Self::Taxes => "taxes",
            Self::Capital => "capital",
            Self::FeesInterest => "fees_interest",
            Self::LiquidityMovement => "liquidity_movement",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_excludes_error_sentinel() {
        assert!(!Category::all().contains(&Category::Error));
        // 41 leaf categories + Other
        assert_eq!(Category::all().len(), 42);
    }

    #[test]
    fn test_from_code_round_trip() {
        for cat in Category::all() {
            assert_eq!(Category::from_code(cat.as_str()), *cat);
        }
    }

    #[test]
    fn test_from_code_unknown_falls_back_to_error() {
        assert_eq!(Category::from_code("quantum_lending"), Category::Error);
        assert_eq!(Category::from_code(""), Category::Error);
    }

    #[test]
    fn test_is_income() {
        assert!(Category::SalaryWages.is_income());
        assert!(Category::InvestmentSell.is_income());
        assert!(!Category::Rent.is_income());
        assert!(!Category::TransferIn.is_income());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Category::SalaryWages).unwrap();
        assert_eq!(json, "\"salary_wages\"");
        let json = serde_json::to_string(&RiskBucket::OperatingExpense).unwrap();
        assert_eq!(json, "\"operating_expense\"");
    }

    #[test]
    fn test_bucket_ordering_follows_declaration() {
        assert!(RiskBucket::Income < RiskBucket::OperatingExpense);
        assert!(RiskBucket::LiquidityMovement < RiskBucket::Other);
    }
}

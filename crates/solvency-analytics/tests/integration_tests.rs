//! End-to-end tests over a realistic multi-month statement.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use solvency_analytics::prelude::*;

/// Builds three months of statement activity for a small business:
/// payroll-like Stripe settlements, rent, utilities, a car loan, transfers
/// to savings, and some noise.
fn sample_statement() -> Vec<TransactionRecord> {
    let mut txns = Vec::new();

    let deposit = |date: (i32, u32, u32), desc: &str, merchant: &str, amount: Decimal| {
        TransactionRecord::builder()
            .document_id("stmt-2025-q1")
            .date_ymd(date.0, date.1, date.2)
            .amount(amount)
            .description(desc)
            .direction(Direction::Credit)
            .category(Category::BusinessRevenue)
            .merchant(merchant)
            .build().unwrap()
    };
    let spend = |date: (i32, u32, u32),
                 desc: &str,
                 merchant: &str,
                 category: Category,
                 amount: Decimal| {
        TransactionRecord::builder()
            .document_id("stmt-2025-q1")
            .date_ymd(date.0, date.1, date.2)
            .amount(amount)
            .description(desc)
            .direction(Direction::Debit)
            .category(category)
            .merchant(merchant)
            .build().unwrap()
    };

    for (month, stripe_amount) in [(1u32, dec!(9000)), (2, dec!(10000)), (3, dec!(11000))] {
        txns.push(deposit(
            (2025, month, 3),
            "STRIPE TRANSFER ST-889",
            "Stripe",
            stripe_amount,
        ));
        txns.push(deposit(
            (2025, month, 18),
            "WIRE REF CLIENT ALPHA",
            "Alpha Industries",
            dec!(2500),
        ));
        txns.push(spend(
            (2025, month, 1),
            "OAKDALE PROPERTIES RENT",
            "Oakdale Properties",
            Category::Rent,
            dec!(3200),
        ));
        txns.push(spend(
            (2025, month, 5),
            "CITY POWER AUTOPAY",
            "City Power",
            Category::Utilities,
            dec!(180),
        ));
        txns.push(spend(
            (2025, month, 15),
            "MERIDIAN AUTO FINANCE PMT",
            "Meridian Auto Finance",
            Category::LoanPayment,
            dec!(450),
        ));
        txns.push(spend(
            (2025, month, 20),
            "TRANSFER TO SAVINGS",
            "",
            Category::TransferOut,
            dec!(1000),
        ));
        txns.push(spend(
            (2025, month, 22),
            "RIVERSIDE BISTRO",
            "Riverside Bistro",
            Category::Dining,
            dec!(140),
        ));
    }

    txns
}

#[test]
fn test_full_metrics_pipeline() {
    let txns = sample_statement();
    let config = AnalyticsConfig::default();
    let metrics = UnderwritingMetrics::calculate(&txns, None, &config).unwrap();

    assert_eq!(metrics.transaction_count, 21);

    // Income: three Stripe settlements + three wires, transfers excluded
    assert_eq!(metrics.cash_flow.income, dec!(37500));
    // Expenses: (3200 + 180 + 450 + 140) x 3
    assert_eq!(metrics.cash_flow.expenses, dec!(11910));
    assert_eq!(metrics.cash_flow.net_cash_flow, dec!(25590));
    assert!(metrics.cash_flow.cash_flow_margin > 60.0);

    // Debt: the car loan is the only financing activity
    assert_eq!(metrics.debt.existing_debt_service, dec!(1350));
    let dscr = metrics.debt.dscr_existing.unwrap();
    assert!((dscr - 18.955_555).abs() < 1e-3);

    // Liquidity movements are informational
    assert_eq!(metrics.liquidity_in, Decimal::ZERO);
    assert_eq!(metrics.liquidity_out, dec!(3000));

    // Monthly rollup is ascending and complete
    let yms: Vec<&str> = metrics.monthly_rollup.iter().map(|m| m.ym.as_str()).collect();
    assert_eq!(yms, vec!["2025-01", "2025-02", "2025-03"]);

    // Growing deposits: positive slope, modest CV
    assert!(metrics.stability.deposit_slope_per_month > 0.0);
    assert!(metrics.stability.deposit_cv > 0.0 && metrics.stability.deposit_cv < 0.2);
    assert_eq!(metrics.stability.unique_payers, 2);
    // Stripe settles 30000 of 37500
    assert!((metrics.stability.top_payer_share - 0.8).abs() < 1e-9);

    // Processor mix: Stripe settlements recognized from descriptions
    assert_eq!(metrics.processor_mix.card_settlements, dec!(30000));
    assert_eq!(metrics.processor_mix.other, dec!(7500));
    assert_eq!(
        metrics.processor_mix.top_processors,
        vec![("Stripe".to_string(), dec!(30000))]
    );

    // Recurring bills: rent, loan, utilities, dining all recur monthly
    assert!(metrics
        .recurring_bills
        .iter()
        .any(|b| b.merchant == "oakdale properties" && b.cadence == Cadence::Monthly));
    assert!(metrics
        .recurring_bills
        .iter()
        .any(|b| b.merchant == "meridian auto finance"));

    // Loan signal for the car loan
    assert_eq!(metrics.loan_signals.len(), 1);
    assert_eq!(metrics.loan_signals[0].lender, "meridian auto finance");
    assert_eq!(metrics.loan_signals[0].cadence, Cadence::Monthly);
    assert_eq!(metrics.loan_signals[0].avg_payment, dec!(450));

    // No red flags in this statement
    assert_eq!(metrics.red_flags.chargebacks_count, 0);
    assert_eq!(metrics.red_flags.gambling_crypto_hits, 0);

    // Partition property
    let breakdown_total: Decimal = metrics.bucket_breakdown.iter().map(|b| b.total_amount).sum();
    let abs_total: Decimal = txns.iter().map(|t| t.amount).sum();
    assert_eq!(breakdown_total, abs_total);
    let pct_total: f64 = metrics.bucket_breakdown.iter().map(|b| b.pct_of_total).sum();
    assert!((pct_total - 100.0).abs() < 1e-6);
}

#[test]
fn test_pro_forma_scenario() {
    let txns = sample_statement();
    let config = AnalyticsConfig::default();
    let terms = LoanTerms {
        principal: dec!(10000),
        annual_rate: 0.12,
        term_months: 12,
    };
    let metrics = UnderwritingMetrics::calculate(&txns, Some(&terms), &config).unwrap();

    assert_eq!(metrics.debt.pro_forma_payment, dec!(888.49));
    // DSCR falls once the proposed payment joins existing service
    assert!(metrics.debt.dscr_pro_forma.unwrap() < metrics.debt.dscr_existing.unwrap());
}

#[test]
fn test_by_month_matches_single_month_run() {
    let txns = sample_statement();
    let config = AnalyticsConfig::default();
    let by_month = UnderwritingMetrics::calculate_by_month(&txns, &config).unwrap();

    assert_eq!(by_month.len(), 3);
    let january: Vec<TransactionRecord> =
        txns.iter().filter(|t| t.date.format("%Y-%m").to_string() == "2025-01").cloned().collect();
    let single = UnderwritingMetrics::calculate(&january, None, &config).unwrap();

    assert_eq!(
        by_month["2025-01"].cash_flow.net_cash_flow,
        single.cash_flow.net_cash_flow
    );
    assert_eq!(by_month["2025-01"].transaction_count, single.transaction_count);
}

#[test]
fn test_reconciliation_against_statement_balances() {
    let txns = sample_statement();
    let net: Decimal = txns.iter().map(TransactionRecord::signed_amount).sum();

    let opening = dec!(5000.00);
    assert!(reconcile(Some(opening), Some(opening + net), &txns));
    assert!(!reconcile(Some(opening), Some(opening + net + dec!(0.01)), &txns));
}

#[test]
fn test_risk_score_over_statement() {
    let txns = sample_statement();
    let score = score_risk(&txns);

    // Healthy margin, strong coverage, moderate activity, mid-size income:
    // 50 + 40 + 30 + 10 + 5 = 100 capped
    assert_eq!(score.score, 100);
    assert_eq!(score.rating, RiskRating::A);
}

#[test]
fn test_category_table_is_total() {
    assert!(validate_mapping(None).is_empty());
}

#[test]
fn test_unclassified_input_degrades_to_other_bucket() {
    let txn = TransactionRecord::builder()
        .document_id("stmt-x")
        .date_ymd(2025, 4, 2)
        .amount(dec!(77))
        .description("MYSTERY POS 0042")
        .direction(Direction::Debit)
        .category(Category::from_code("definitely_not_a_category"))
        .build().unwrap();

    let metrics =
        UnderwritingMetrics::calculate(&[txn], None, &AnalyticsConfig::default()).unwrap();
    assert_eq!(metrics.bucket_breakdown.len(), 1);
    assert_eq!(metrics.bucket_breakdown[0].bucket, RiskBucket::Other);
}

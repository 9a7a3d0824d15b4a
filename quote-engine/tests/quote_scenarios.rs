//! End-to-end scenarios through the public engine API

use quote_engine::{
    allocate_deposits, DepositPlan, DiscountSettings, LineItem, MemoCache, PricingMode,
    QuoteEngine, QuoteInputs,
};

fn standard_quote() -> QuoteInputs {
    QuoteInputs {
        products: vec![LineItem::new(1, 10.0, 100.0)],
        surcharges: vec![],
        hardware: vec![LineItem::new(2, 1.0, 50.0)],
        installation: vec![LineItem::new(3, 1.0, 95.0)],
        discount: DiscountSettings {
            percent: 10.0,
            percent_enabled: true,
            fixed: 0.0,
            fixed_enabled: false,
        },
        pricing_mode: PricingMode::Standard,
        reverse_charge: false,
    }
}

#[test]
fn standard_quote_totals_and_default_deposits() {
    let engine = QuoteEngine::new();
    let totals = engine.furniture_totals(&standard_quote());

    assert_eq!(totals.after_discount, 900.0);
    assert_eq!(totals.net_total, 1045.0);
    assert_eq!(totals.vat_amount, 240.35);
    assert_eq!(totals.gross_total, 1285.35);
    assert_eq!(totals.effective_base, 1285.35);

    let plan = DepositPlan::default_split();
    let amounts = allocate_deposits(totals.effective_base, &plan);
    let values: Vec<f64> = amounts.iter().map(|a| a.amount).collect();
    // 771.21 → 780, 385.605 → 390, exact remainder
    assert_eq!(values, vec![780.0, 390.0, 115.35]);
    assert!((values.iter().sum::<f64>() - totals.effective_base).abs() < 1e-9);
}

#[test]
fn negotiated_price_quote_and_deposits() {
    let engine = QuoteEngine::new();
    let mut inputs = standard_quote();
    inputs.pricing_mode = PricingMode::Negotiated {
        gross: Some(1000.0),
    };
    let totals = engine.furniture_totals(&inputs);

    assert_eq!(totals.gross_total, 1000.0);
    assert_eq!(totals.net_total, 813.01);
    assert_eq!(totals.vat_amount, 186.99);

    // Deposits based on the negotiated gross; 600 and 300 are already
    // multiples of 10, remainder 100
    let plan = DepositPlan::default_split();
    let values: Vec<f64> = allocate_deposits(totals.effective_base, &plan)
        .iter()
        .map(|a| a.amount)
        .collect();
    assert_eq!(values, vec![600.0, 300.0, 100.0]);
}

#[test]
fn reverse_charge_bases_deposits_on_net() {
    let engine = QuoteEngine::new();
    let mut inputs = standard_quote();
    inputs.reverse_charge = true;
    let totals = engine.furniture_totals(&inputs);

    assert_eq!(totals.net_total, 1045.0);
    assert_eq!(totals.gross_total, 1285.35);
    assert_eq!(totals.effective_base, 1045.0);

    let plan = DepositPlan::default_split();
    let values: Vec<f64> = allocate_deposits(totals.effective_base, &plan)
        .iter()
        .map(|a| a.amount)
        .collect();
    assert_eq!(values, vec![630.0, 320.0, 95.0]);
    assert_eq!(values.iter().sum::<f64>(), 1045.0);
}

#[test]
fn negotiated_price_wins_over_reverse_charge_for_deposit_base() {
    let engine = QuoteEngine::new();
    let mut inputs = standard_quote();
    inputs.reverse_charge = true;
    inputs.pricing_mode = PricingMode::Negotiated {
        gross: Some(1000.0),
    };
    let totals = engine.furniture_totals(&inputs);
    // The joint case resolves to the negotiated gross
    assert_eq!(totals.effective_base, 1000.0);
}

#[test]
fn fixed_amount_survives_unrelated_line_item_changes() {
    let engine = QuoteEngine::new();
    let mut plan = DepositPlan::default_split();
    plan.set_fixed_amount(1, 400.0).unwrap();

    let base_before = engine.furniture_totals(&standard_quote()).effective_base;
    let before = allocate_deposits(base_before, &plan);

    // A line-item change the caller chose not to propagate to the plan:
    // the fixed deposit keeps its displayed value
    let mut changed = standard_quote();
    changed.products.push(LineItem::new(4, 1.0, 10.0));
    let base_after = engine.furniture_totals(&changed).effective_base;
    let after = allocate_deposits(base_after, &plan);

    assert_eq!(before[0].amount, 400.0);
    assert_eq!(after[0].amount, 400.0);
    // The percentage-based deposits track the new base
    assert_ne!(before[1].amount, after[1].amount);
}

#[test]
fn base_change_invalidation_restores_percentage_allocation() {
    let engine = QuoteEngine::new();
    let mut plan = DepositPlan::default_split();
    plan.set_fixed_amount(2, 99.0).unwrap();

    // Caller edits a line item, so the effective base changed; the contract
    // requires clearing all fixed amounts
    plan.clear_fixed_amounts();

    let totals = engine.furniture_totals(&standard_quote());
    let values: Vec<f64> = allocate_deposits(totals.effective_base, &plan)
        .iter()
        .map(|a| a.amount)
        .collect();
    assert_eq!(values, vec![780.0, 390.0, 115.35]);
}

#[test]
fn cache_idempotence_across_structurally_identical_inputs() {
    use std::cell::Cell;

    let engine = QuoteEngine::new();
    let calls = Cell::new(0);
    let deps = standard_quote();

    let run = || {
        engine.memoized(&deps, || {
            calls.set(calls.get() + 1);
            engine.furniture_totals(&standard_quote()).gross_total
        })
    };
    assert_eq!(run(), 1285.35);
    assert_eq!(run(), 1285.35);
    assert_eq!(calls.get(), 1);

    engine.clear_cache();
    run();
    assert_eq!(calls.get(), 2);
}

#[test]
fn short_ttl_engine_recomputes_after_expiry() {
    use std::cell::Cell;

    let engine = QuoteEngine::with_cache(MemoCache::with_ttl_ms(10));
    let calls = Cell::new(0);
    let run = || {
        engine.memoized(&1, || {
            calls.set(calls.get() + 1);
            1_i32
        })
    };
    run();
    std::thread::sleep(std::time::Duration::from_millis(30));
    run();
    assert_eq!(calls.get(), 2);
}

#[test]
fn emptied_form_fields_still_produce_totals() {
    // Surface the coercion warnings in test output
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    // Mid-edit state: NaN quantity, infinite price, negative correction row
    let engine = QuoteEngine::new();
    let inputs = QuoteInputs {
        products: vec![
            LineItem::new(1, f64::NAN, 500.0),
            LineItem::new(2, 1.0, f64::INFINITY),
            LineItem::new(3, -2.0, 25.0),
        ],
        ..QuoteInputs::default()
    };
    let totals = engine.furniture_totals(&inputs);
    assert_eq!(totals.products_total, -50.0);
    assert!(totals.gross_total.is_finite());
}

//! End-to-end pricing tests against closed-form anchors.

use crate::bermudan::BermudanSwaptionPricer;
use crate::error::PricerError;
use crate::grid::LatticeConfig;
use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
use pricer_core::types::Currency;
use pricer_models::analytical::european_swaption_value;
use pricer_models::instruments::rates::cashflow::{CashFlowEquivalentProjector, CashFlowProjector};
use pricer_models::instruments::rates::swap::{FixedIborSwap, SwapDirection};
use pricer_models::instruments::rates::swaption::{BermudanSwaption, Position, SwaptionType};
use pricer_models::models::rates::{HullWhiteModel, HullWhiteParams};
use pricer_models::models::ShortRateAnalytics;
use proptest::prelude::*;

const NOTIONAL: f64 = 1_000_000.0;
const SWAP_END: f64 = 6.0;
const EXERCISE_DATES: [f64; 2] = [1.0, 2.0];

fn bermudan(strike: f64, direction: SwapDirection, position: Position) -> BermudanSwaption<f64> {
    let tails: Vec<_> = EXERCISE_DATES
        .iter()
        .map(|&start| {
            FixedIborSwap::from_tenor(
                NOTIONAL,
                strike,
                start,
                SWAP_END,
                1,
                direction,
                Currency::EUR,
            )
            .unwrap()
        })
        .collect();
    BermudanSwaption::new(EXERCISE_DATES.to_vec(), tails, position).unwrap()
}

fn model(volatility: f64) -> HullWhiteModel<f64> {
    HullWhiteModel::new(HullWhiteParams::constant(0.02, volatility).unwrap())
}

/// Closed-form European price of one exercise date's swap: the option's
/// cash-flow-equivalent strip with alphas taken against the expiry bond.
fn european(
    swap: &FixedIborSwap<f64>,
    expiry: f64,
    model: &HullWhiteModel<f64>,
    curve: &FlatCurve<f64>,
    swaption_type: SwaptionType,
) -> f64 {
    let flows = CashFlowEquivalentProjector.project(swap, curve).unwrap();
    let discounted: Vec<f64> = flows
        .iter()
        .map(|f| f.amount() * curve.discount_factor(f.time()).unwrap())
        .collect();
    let alphas: Vec<f64> = flows
        .iter()
        .map(|f| model.alpha(0.0, expiry, expiry, f.time()))
        .collect();
    let kappa = model.kappa(&discounted, &alphas).unwrap();
    european_swaption_value(&discounted, &alphas, kappa, swaption_type)
}

/// Forward value today of one swap's cash-flow-equivalent strip.
fn forward_swap_value(swap: &FixedIborSwap<f64>, curve: &FlatCurve<f64>) -> f64 {
    CashFlowEquivalentProjector
        .project(swap, curve)
        .unwrap()
        .iter()
        .map(|f| f.amount() * curve.discount_factor(f.time()).unwrap())
        .sum()
}

#[test]
fn test_bermudan_dominates_each_european() {
    let curve = FlatCurve::new(0.03);
    let model = model(0.01);
    let swaption = bermudan(0.03, SwapDirection::PayFixed, Position::Long);

    let pv = BermudanSwaptionPricer::with_defaults()
        .present_value(&swaption, &model, &curve, &CashFlowEquivalentProjector)
        .unwrap();

    for (swap, &expiry) in swaption.underlying().iter().zip(EXERCISE_DATES.iter()) {
        let single = european(swap, expiry, &model, &curve, SwaptionType::Payer);
        assert!(
            pv.amount() > single,
            "bermudan {} not above european {} at expiry {}",
            pv.amount(),
            single,
            expiry
        );
    }
}

#[test]
fn test_grid_convergence() {
    let curve = FlatCurve::new(0.03);
    let model = model(0.01);
    let swaption = bermudan(0.03, SwapDirection::PayFixed, Position::Long);

    let price_at = |n: usize| {
        BermudanSwaptionPricer::new(LatticeConfig::new(n))
            .present_value(&swaption, &model, &curve, &CashFlowEquivalentProjector)
            .unwrap()
            .amount()
    };
    let coarse = price_at(20);
    let medium = price_at(50);
    let fine = price_at(100);

    // Each refinement at least halves the step change.
    assert!(
        (fine - medium).abs() <= 0.5 * (medium - coarse).abs(),
        "refinement steps {} -> {} did not shrink",
        (medium - coarse).abs(),
        (fine - medium).abs()
    );
}

#[test]
fn test_long_short_negation() {
    let curve = FlatCurve::new(0.03);
    let model = model(0.01);
    let pricer = BermudanSwaptionPricer::with_defaults();

    let long = pricer
        .present_value(
            &bermudan(0.03, SwapDirection::PayFixed, Position::Long),
            &model,
            &curve,
            &CashFlowEquivalentProjector,
        )
        .unwrap();
    let short = pricer
        .present_value(
            &bermudan(0.03, SwapDirection::PayFixed, Position::Short),
            &model,
            &curve,
            &CashFlowEquivalentProjector,
        )
        .unwrap();

    assert_eq!(short.amount(), -long.amount());
    assert_eq!(short.currency(), long.currency());
}

#[test]
fn test_vanishing_volatility_recovers_intrinsic() {
    // With almost no volatility the option is worth the best forward swap.
    let curve = FlatCurve::new(0.03);
    let model = model(1e-6);
    let swaption = bermudan(0.03, SwapDirection::PayFixed, Position::Long);

    let pv = BermudanSwaptionPricer::with_defaults()
        .present_value(&swaption, &model, &curve, &CashFlowEquivalentProjector)
        .unwrap();

    let best = swaption
        .underlying()
        .iter()
        .map(|swap| forward_swap_value(swap, &curve))
        .fold(0.0_f64, f64::max);
    assert!(best > 0.0);
    assert!(
        (pv.amount() - best).abs() <= 1e-3 * best,
        "pv {} vs intrinsic {}",
        pv.amount(),
        best
    );
}

#[test]
fn test_payer_and_receiver_both_positive() {
    let curve = FlatCurve::new(0.03);
    let model = model(0.01);
    let pricer = BermudanSwaptionPricer::with_defaults();

    let payer = pricer
        .present_value(
            &bermudan(0.03, SwapDirection::PayFixed, Position::Long),
            &model,
            &curve,
            &CashFlowEquivalentProjector,
        )
        .unwrap();
    let receiver = pricer
        .present_value(
            &bermudan(0.03, SwapDirection::ReceiveFixed, Position::Long),
            &model,
            &curve,
            &CashFlowEquivalentProjector,
        )
        .unwrap();

    assert!(payer.amount() > 0.0);
    assert!(receiver.amount() > 0.0);
}

#[test]
fn test_single_date_rejected() {
    let curve = FlatCurve::new(0.03);
    let model = model(0.01);
    let swap = FixedIborSwap::from_tenor(
        NOTIONAL,
        0.03,
        1.0,
        SWAP_END,
        1,
        SwapDirection::PayFixed,
        Currency::EUR,
    )
    .unwrap();
    let single = BermudanSwaption::new(vec![1.0], vec![swap], Position::Long).unwrap();

    let result = BermudanSwaptionPricer::with_defaults().present_value(
        &single,
        &model,
        &curve,
        &CashFlowEquivalentProjector,
    );
    assert!(matches!(result, Err(PricerError::InvalidInstrument { .. })));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_price_is_finite_positive_and_sign_symmetric(
        strike in 0.02_f64..0.04,
        volatility in 0.005_f64..0.02,
    ) {
        let curve = FlatCurve::new(0.03);
        let model = model(volatility);
        let pricer = BermudanSwaptionPricer::new(LatticeConfig::new(20));

        let long = pricer
            .present_value(
                &bermudan(strike, SwapDirection::PayFixed, Position::Long),
                &model,
                &curve,
                &CashFlowEquivalentProjector,
            )
            .unwrap();
        let short = pricer
            .present_value(
                &bermudan(strike, SwapDirection::PayFixed, Position::Short),
                &model,
                &curve,
                &CashFlowEquivalentProjector,
            )
            .unwrap();

        prop_assert!(long.amount().is_finite());
        prop_assert!(long.amount() > 0.0);
        prop_assert_eq!(short.amount(), -long.amount());
    }
}

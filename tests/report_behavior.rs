//! Behavior tests for report rendering.
//!
//! The assembler is pure, so these tests build snapshots by hand and assert
//! on the exact text a reader would see.

use marketrecap_core::report::{
    canned_correlation, ANALYSIS_UNAVAILABLE, FALLING_YIELDS_BULLISH, FALLING_YIELDS_DECOUPLED,
    RISING_YIELDS_BEARISH, RISING_YIELDS_RESILIENT,
};
use marketrecap_core::{
    AssetRecord, AssetSlot, Change, MarketSnapshot, RateRecord, RateSlot, ReportAssembler,
    ReportDates, ReportMode, Sentiment, Symbol, TreasuryMaturity, YieldRecord,
};
use time::macros::date;

const GOLDEN_CLOSING: &str = "\
🚀 DAILY MARKET RECAP - October 15, 2026 🚀
📊 Based on October 15, 2026 Market Closing Prices
📅 Report Generated: October 16, 2026

📈 CRYPTOCURRENCY PERFORMANCE (Day-over-Day):
🟢 BTC: $67,000.50 (+1.52% from previous close)
🔴 ETH: $2,450.25 (-1.99% from previous close)
🟢 XRP: $0.55 (+5.77% from previous close)

🏛️ TREASURY YIELD UPDATE (Closing):
📊 10Y Treasury: 4.10% (+0.05bps from previous close)

💵 SHORT-TERM RATES (Closing):
🔴 Fed Funds Rate: 5.33% (+0.00bps from previous close)
🟢 3 Month Tbill: 5.25% (+0.05bps from previous close)
🔴 2 Year Treasury: 3.90% (-0.05bps from previous close)

🔗 MARKET CORRELATION ANALYSIS:
📈 Despite rising yields, crypto showing resilience - risk appetite remains strong

📋 MARKET SUMMARY:
🎯 Overall Sentiment: BULLISH
🌊 Risk Appetite: High
💡 Key Takeaway: Risk-on environment favors crypto

#Crypto #Markets #Treasury #Finance #DigitalAssets #TradFi #DeFi #MarketRecap #ClosingPrices
";

fn symbol(ticker: &str) -> Symbol {
    Symbol::parse(ticker).expect("valid symbol")
}

fn closing_asset(ticker: &str, current: f64, previous: f64) -> AssetSlot {
    let record = AssetRecord::from_closes(symbol(ticker), current, previous, None, None)
        .expect("finite closes");
    AssetSlot::new(symbol(ticker), Some(record))
}

fn absent_asset(ticker: &str) -> AssetSlot {
    AssetSlot::absent(symbol(ticker))
}

fn yield_record(current: f64, previous: f64) -> YieldRecord {
    YieldRecord::from_change(Change::between(current, previous).expect("finite"))
}

fn rate(key: &str, name: &str, current: f64, previous: f64) -> RateSlot {
    let record = RateRecord::from_change(Change::between(current, previous).expect("finite"));
    RateSlot::new(key, name, Some(record))
}

fn golden_assets() -> Vec<AssetSlot> {
    vec![
        closing_asset("BTC", 67_000.5, 66_000.0),
        closing_asset("ETH", 2_450.25, 2_500.0),
        closing_asset("XRP", 0.55, 0.52),
    ]
}

fn golden_rates() -> Vec<RateSlot> {
    vec![
        rate("fed_funds_rate", "Fed Funds Rate", 5.33, 5.33),
        rate("3_month_tbill", "3 Month Tbill", 5.25, 5.20),
        rate("2_year_treasury", "2 Year Treasury", 3.90, 3.95),
    ]
}

fn golden_snapshot() -> MarketSnapshot {
    MarketSnapshot::new(golden_assets(), Some(yield_record(4.10, 4.05)), golden_rates())
}

fn assembler(mode: ReportMode) -> ReportAssembler {
    ReportAssembler::new(
        mode,
        ReportDates::for_run(date!(2026 - 10 - 16)),
        TreasuryMaturity::TenYear,
    )
}

fn correlation_line(text: &str) -> &str {
    text.lines()
        .skip_while(|line| *line != "🔗 MARKET CORRELATION ANALYSIS:")
        .nth(1)
        .expect("correlation section present")
}

// =============================================================================
// Full Report Layout
// =============================================================================

#[test]
fn when_every_feed_succeeds_closing_report_matches_expected_text() {
    // Given: Three assets, the benchmark yield and three short rates
    let snapshot = golden_snapshot();

    // When: A closing report is assembled on Friday 2026-10-16
    let text = assembler(ReportMode::Closing).assemble(&snapshot, None);

    // Then: The text matches line for line, including the data-date header
    assert_eq!(text, GOLDEN_CLOSING);
}

#[test]
fn when_spot_mode_renders_header_and_lines_have_no_close_wording() {
    let text = assembler(ReportMode::Spot).assemble(&golden_snapshot(), None);

    assert!(text.starts_with("🚀 CRYPTO MARKET UPDATE - October 16, 2026 🚀\n\n"));
    assert!(text.contains("📈 CRYPTOCURRENCY PERFORMANCE (24h):"));
    assert!(text.contains("🟢 BTC: $67,000.50 (+1.52%)"));
    assert!(text.contains("🏛️ TREASURY YIELD UPDATE:\n📊 10Y Treasury: 4.10% (+0.05bps)"));
    assert!(text.contains("💵 SHORT-TERM RATES:"));
    assert!(!text.contains("from previous close"));
    assert!(!text.contains("(Closing)"));
    assert!(text.ends_with("#Crypto #Markets #Treasury #Finance #DigitalAssets #TradFi #DeFi\n"));
}

#[test]
fn when_assembled_twice_output_is_identical() {
    let snapshot = golden_snapshot();
    let assembler = assembler(ReportMode::Closing);

    assert_eq!(
        assembler.assemble(&snapshot, Some("Same narrative.")),
        assembler.assemble(&snapshot, Some("Same narrative."))
    );
}

// =============================================================================
// Sections Dropped or Kept
// =============================================================================

#[test]
fn when_yield_is_absent_its_section_is_omitted_entirely() {
    let snapshot = MarketSnapshot::new(golden_assets(), None, golden_rates());

    let text = assembler(ReportMode::Closing).assemble(&snapshot, None);

    assert!(!text.contains("TREASURY YIELD UPDATE"));
    assert!(!text.contains("10Y Treasury"));
    assert!(text.contains("💵 SHORT-TERM RATES (Closing):"));
}

#[test]
fn when_no_rate_is_present_rate_header_is_not_printed() {
    let rates = vec![
        RateSlot::new("fed_funds_rate", "Fed Funds Rate", None),
        RateSlot::new("3_month_tbill", "3 Month Tbill", None),
    ];
    let snapshot = MarketSnapshot::new(golden_assets(), Some(yield_record(4.10, 4.05)), rates);

    let text = assembler(ReportMode::Closing).assemble(&snapshot, None);

    assert!(!text.contains("SHORT-TERM RATES"));
}

#[test]
fn when_an_asset_is_absent_only_its_line_is_missing() {
    let assets = vec![
        closing_asset("BTC", 67_000.5, 66_000.0),
        absent_asset("ETH"),
        closing_asset("XRP", 0.55, 0.52),
    ];
    let snapshot = MarketSnapshot::new(assets, Some(yield_record(4.10, 4.05)), golden_rates());

    let text = assembler(ReportMode::Closing).assemble(&snapshot, None);

    assert!(text.contains("🟢 BTC: $67,000.50"));
    assert!(!text.contains("ETH"));
    assert!(text.contains("🟢 XRP: $0.55"));
    assert!(text.contains("🎯 Overall Sentiment: BULLISH"));
}

#[test]
fn when_snapshot_is_empty_report_still_has_summary_and_unavailable_line() {
    let text = assembler(ReportMode::Closing).assemble(&MarketSnapshot::empty(), None);

    assert!(text.contains("📈 CRYPTOCURRENCY PERFORMANCE (Day-over-Day):\n\n🔗"));
    assert_eq!(correlation_line(&text), ANALYSIS_UNAVAILABLE);
    assert!(text.contains("🎯 Overall Sentiment: MIXED"));
    assert!(text.contains("🌊 Risk Appetite: Mixed"));
    assert!(text.contains("💡 Key Takeaway: Mixed signals suggest cautious approach"));
}

// =============================================================================
// Approximation Notes
// =============================================================================

#[test]
fn when_rate_is_approximated_note_is_rendered_verbatim() {
    let bill = RateRecord::from_change(Change::between(5.25, 5.20).expect("finite"));
    let fed_funds = RateRecord::approximated_from(&bill, "Approximated from 3M Treasury");
    let rates = vec![
        RateSlot::new("fed_funds_rate", "Fed Funds Rate", Some(fed_funds)),
        RateSlot::new("3_month_tbill", "3 Month Tbill", Some(bill)),
    ];
    let snapshot = MarketSnapshot::new(golden_assets(), None, rates);

    let text = assembler(ReportMode::Closing).assemble(&snapshot, None);

    assert!(text.contains(
        "🟢 Fed Funds Rate: 5.25% (+0.05bps from previous close) Approximated from 3M Treasury\n"
    ));
    assert!(text.contains("🟢 3 Month Tbill: 5.25% (+0.05bps from previous close)\n"));
}

#[test]
fn when_no_record_carries_a_note_no_note_text_appears() {
    let text = assembler(ReportMode::Closing).assemble(&golden_snapshot(), None);
    assert!(!text.contains("Approximated"));
}

// =============================================================================
// Correlation Analysis
// =============================================================================

#[test]
fn when_narrative_is_present_it_replaces_the_canned_sentence() {
    let text = assembler(ReportMode::Closing)
        .assemble(&golden_snapshot(), Some("  Yields rose while crypto held firm.  \n"));

    assert_eq!(correlation_line(&text), "Yields rose while crypto held firm.");
    assert!(!text.contains(RISING_YIELDS_RESILIENT));
}

#[test]
fn when_narrative_is_blank_canned_sentence_is_used() {
    let text = assembler(ReportMode::Closing).assemble(&golden_snapshot(), Some("   "));
    assert_eq!(correlation_line(&text), RISING_YIELDS_RESILIENT);
}

#[test]
fn when_yield_is_absent_without_narrative_analysis_is_unavailable() {
    let snapshot = MarketSnapshot::new(golden_assets(), None, golden_rates());
    let text = assembler(ReportMode::Closing).assemble(&snapshot, None);
    assert_eq!(correlation_line(&text), ANALYSIS_UNAVAILABLE);
}

#[test]
fn when_no_asset_is_present_without_narrative_analysis_is_unavailable() {
    let snapshot = MarketSnapshot::new(
        vec![absent_asset("BTC")],
        Some(yield_record(4.10, 4.05)),
        golden_rates(),
    );
    let text = assembler(ReportMode::Closing).assemble(&snapshot, None);
    assert_eq!(correlation_line(&text), ANALYSIS_UNAVAILABLE);
}

#[test]
fn canned_sentence_follows_yield_direction_and_sentiment() {
    assert_eq!(canned_correlation(0.05, Sentiment::Bearish), RISING_YIELDS_BEARISH);
    assert_eq!(canned_correlation(0.05, Sentiment::Bullish), RISING_YIELDS_RESILIENT);
    assert_eq!(canned_correlation(0.05, Sentiment::Mixed), RISING_YIELDS_RESILIENT);
    assert_eq!(canned_correlation(-0.05, Sentiment::Bullish), FALLING_YIELDS_BULLISH);
    assert_eq!(canned_correlation(-0.05, Sentiment::Bearish), FALLING_YIELDS_DECOUPLED);
    assert_eq!(canned_correlation(-0.05, Sentiment::Mixed), FALLING_YIELDS_DECOUPLED);
    assert_eq!(canned_correlation(0.0, Sentiment::Bullish), FALLING_YIELDS_BULLISH);
}

#[test]
fn when_majority_of_assets_fall_summary_is_bearish() {
    let assets = vec![
        closing_asset("BTC", 65_000.0, 66_000.0),
        closing_asset("ETH", 2_400.0, 2_500.0),
        closing_asset("XRP", 0.55, 0.52),
    ];
    let snapshot = MarketSnapshot::new(assets, Some(yield_record(4.10, 4.05)), Vec::new());

    let text = assembler(ReportMode::Closing).assemble(&snapshot, None);

    assert!(text.contains("🎯 Overall Sentiment: BEARISH"));
    assert!(text.contains("🌊 Risk Appetite: Low"));
    assert!(text.contains("💡 Key Takeaway: Risk-off sentiment prevails"));
    assert_eq!(correlation_line(&text), RISING_YIELDS_BEARISH);
}

//! Integration tests for the itinerary assembly flow.
//!
//! These tests verify the end-to-end path:
//! 1. AssemblePreviewHandler fetches rows and builds the day-grouped view model
//! 2. DestinationMetaHandler merges the history payload with trip overrides
//! 3. FxSession converts the assembled totals through one rate snapshot
//!
//! Uses the in-memory adapters, so no external dependencies are needed.

use chrono::{NaiveDate, Utc};
use serde_json::json;
use std::sync::{Arc, Once};
use tracing_subscriber::EnvFilter;

use itinero_engine::adapters::memory::{
    InMemoryDestinationReader, InMemoryFxProvider, InMemoryItineraryReader,
};
use itinero_engine::application::handlers::{
    AssemblePreviewHandler, AssemblePreviewQuery, DestinationMetaHandler, DestinationMetaQuery,
    FxSession,
};
use itinero_engine::domain::foundation::{CurrencyCode, ItemId, PlaceId, TripId};
use itinero_engine::domain::fx::FxSnapshot;
use itinero_engine::domain::itinerary::{CostAggregator, ItineraryItem, Place, TimeOfDay};
use itinero_engine::domain::preview::DayRoute;
use itinero_engine::domain::trip::TripRecord;
use itinero_engine::ports::HistoryRecord;

static TRACING: Once = Once::new();

/// Installs the log subscriber once for the whole suite, so the engine's
/// debug/warn lines show up under `RUST_LOG`.
fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
}

fn item(
    trip_id: TripId,
    day_index: i32,
    order_index: i32,
    place_id: Option<PlaceId>,
    est_cost: Option<f64>,
) -> ItineraryItem {
    ItineraryItem {
        id: ItemId::new(),
        trip_id,
        day_index,
        date: Some(date(1 + day_index as u32)),
        order_index,
        when: TimeOfDay::Morning,
        place_id,
        title: format!("stop {day_index}/{order_index}"),
        est_cost,
        duration_min: Some(60),
        travel_min_from_prev: Some(12),
        notes: None,
    }
}

fn lisbon_trip(id: TripId) -> TripRecord {
    TripRecord {
        id,
        title: Some("Lisbon long weekend".to_string()),
        start_date: Some(date(1)),
        end_date: Some(date(3)),
        est_total_cost: Some(420.0),
        currency: Some("EUR".to_string()),
        inputs: Some(json!({
            "destinations": [{"name": "Lisbon", "lat": 38.72, "lng": -9.14}],
            "lodging": {"name": "Alfama flat", "lat": 38.71, "lng": -9.13},
            "destination_meta": {"currency_code": "EUR", "city": "Lisbon"}
        })),
    }
}

#[tokio::test]
async fn assembles_days_places_and_routes_end_to_end() {
    init_tracing();
    let trip_id = TripId::new();
    let place_id = PlaceId::new();

    let reader = InMemoryItineraryReader::new()
        .with_trip(lisbon_trip(trip_id))
        .with_items(vec![
            // Out of order on purpose; the reader sorts before returning.
            item(trip_id, 1, 1, None, Some(12.4)),
            item(trip_id, 0, 0, Some(place_id), Some(30.0)),
            item(trip_id, 1, 0, None, Some(7.2)),
        ])
        .with_place(Place::named(place_id, "Mercado da Ribeira"))
        .with_routes(
            trip_id,
            vec![DayRoute {
                date: Some(date(2)),
                polyline6: Some("p6_day2".to_string()),
                polyline: Some("p5_day2".to_string()),
            }],
        );

    let handler = AssemblePreviewHandler::new(Arc::new(reader));
    let preview = handler
        .handle(AssemblePreviewQuery { trip_id })
        .await
        .unwrap();

    assert_eq!(preview.trip_summary.total_days, 2);
    assert_eq!(preview.trip_summary.currency.as_str(), "EUR");
    assert_eq!(preview.days[0].blocks.len(), 1);
    assert_eq!(preview.days[1].blocks.len(), 2);
    // Within-day ordering survives assembly.
    assert_eq!(preview.days[1].blocks[0].order_index, 0);
    assert_eq!(preview.days[1].blocks[1].order_index, 1);
    // The route table binds by date; day 1 has no route row.
    assert!(preview.days[0].map_polyline.is_none());
    assert_eq!(preview.days[1].map_polyline.as_deref(), Some("p6_day2"));
    // Lodging is copied onto each day.
    for day in &preview.days {
        assert_eq!(day.lodging.as_ref().unwrap().name, "Alfama flat");
    }
    assert_eq!(preview.places.len(), 1);

    // Totals round only at the aggregate: 30 + 7.2 + 12.4 = 49.6 -> 50.
    let totals = CostAggregator::trip_totals(&preview.days);
    assert_eq!(totals.est_cost, 50);
    assert_eq!(totals.duration_min, 180);
    assert_eq!(totals.travel_min, 36);
}

#[tokio::test]
async fn destination_meta_merges_history_and_overrides() {
    init_tracing();
    let trip_id = TripId::new();
    let itinerary = InMemoryItineraryReader::new().with_trip(lisbon_trip(trip_id));
    let destinations = InMemoryDestinationReader::new().with_history(
        trip_id,
        HistoryRecord {
            // The payload arrives as a JSON string in production rows.
            payload: Some(json!(
                r#"{"about":"Hilly coastal capital.","kbyg":{"currency":"JPY","plugs":"C, F","languages":"Portuguese"}}"#
            )),
            backdrop_image_url: Some("https://img.example/lisbon.jpg".to_string()),
            country_code: Some("PT".to_string()),
        },
    );

    let handler = DestinationMetaHandler::new(Arc::new(itinerary), Arc::new(destinations));
    let meta = handler
        .handle(DestinationMetaQuery { trip_id })
        .await
        .unwrap();

    // Trip-level override beats the history payload.
    assert_eq!(meta.currency_code.as_deref(), Some("EUR"));
    assert_eq!(meta.city.as_deref(), Some("Lisbon"));
    // Untouched history fields come through.
    assert_eq!(meta.description.as_deref(), Some("Hilly coastal capital."));
    assert_eq!(
        meta.plugs.as_deref(),
        Some(&["C".to_string(), "F".to_string()][..])
    );
    // History-row columns fill what the merge left empty.
    assert_eq!(meta.country_code.as_deref(), Some("PT"));
    assert_eq!(meta.image.as_deref(), Some("https://img.example/lisbon.jpg"));

    let preview_meta = meta.preview();
    assert_eq!(preview_meta.plugs_joined().as_deref(), Some("C, F"));
}

#[tokio::test]
async fn fx_session_prices_the_assembled_total() {
    init_tracing();
    let trip_id = TripId::new();
    let reader = InMemoryItineraryReader::new()
        .with_trip(lisbon_trip(trip_id))
        .with_items(vec![item(trip_id, 0, 0, None, Some(100.0))]);

    let handler = AssemblePreviewHandler::new(Arc::new(reader));
    let preview = handler
        .handle(AssemblePreviewQuery { trip_id })
        .await
        .unwrap();
    let totals = CostAggregator::trip_totals(&preview.days);

    let snapshot = FxSnapshot::new(CurrencyCode::usd(), Utc::now())
        .with_rate(CurrencyCode::parse("EUR").unwrap(), 0.8)
        .with_rate(CurrencyCode::parse("JPY").unwrap(), 160.0);
    let provider = Arc::new(InMemoryFxProvider::new().with_snapshot(snapshot));
    let session = FxSession::new(provider.clone(), CurrencyCode::usd());

    let trip_currency = preview.trip_summary.currency.as_str().to_string();

    // EUR -> JPY pivots through the USD base: 100 * (160 / 0.8).
    let in_jpy = session
        .convert(Some(totals.est_cost as f64), &trip_currency, "JPY")
        .await;
    assert_eq!(in_jpy, Some(20_000.0));

    // Identity means "already in the display currency": no converted figure.
    let identity = session
        .convert(Some(totals.est_cost as f64), &trip_currency, "eur")
        .await;
    assert_eq!(identity, None);

    // Unknown quote currency degrades to unpriced, never an error.
    let unknown = session
        .convert(Some(totals.est_cost as f64), &trip_currency, "GBP")
        .await;
    assert_eq!(unknown, None);

    // All conversions shared one snapshot fetch.
    assert_eq!(provider.fetch_count(), 1);
}

#[tokio::test]
async fn fx_outage_leaves_the_preview_usable() {
    init_tracing();
    let trip_id = TripId::new();
    let reader = InMemoryItineraryReader::new()
        .with_trip(lisbon_trip(trip_id))
        .with_items(vec![item(trip_id, 0, 0, None, Some(55.0))]);

    let handler = AssemblePreviewHandler::new(Arc::new(reader));
    let preview = handler
        .handle(AssemblePreviewQuery { trip_id })
        .await
        .unwrap();

    let session = FxSession::new(Arc::new(InMemoryFxProvider::failing()), CurrencyCode::usd());
    let converted = session.convert(Some(55.0), "EUR", "USD").await;

    // The view model stands on its own; conversion is an overlay.
    assert_eq!(converted, None);
    assert_eq!(preview.trip_summary.total_days, 1);
    assert_eq!(CostAggregator::trip_totals(&preview.days).est_cost, 55);
}

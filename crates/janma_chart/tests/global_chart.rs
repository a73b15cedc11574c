//! Chart computation through the process-wide engine cell.
//!
//! Own binary: the first assertion needs the cell untouched.

use janma_chart::*;
use janma_ephem::{EphemConfig, InitError};

#[test]
fn init_error_surfaces_before_any_query_then_chart_works() {
    let details = BirthDetails::new(2000, 1, 1, 12, 0, 5.5);
    let geo = GeoPosition::new(28.6, 77.2).unwrap();

    let err = compute_chart_global(&details, &geo, &ChartOptions::default()).unwrap_err();
    assert_eq!(err, ChartError::EngineInit(InitError::NotInitialized));

    janma_ephem::init(EphemConfig::default()).expect("init");

    let chart = compute_chart_global(&details, &geo, &ChartOptions::default()).expect("chart");
    assert_eq!(chart.grahas.len(), 9);
    assert!((0.0..360.0).contains(&chart.lagna.sidereal_deg));
}

//! Water access strategy module.
//!
//! Rainfall is bucketed into four non-overlapping bands, evaluated
//! high-to-low with the first match winning. Each band fixes the primary
//! method, technique list, and a storage recommendation whose litre target
//! scales with aridity. Two order-independent modifiers run after band
//! selection: coastal desalination and upland spring capture.

use terraplan_types::{EnvironmentalData, WaterStrategy};

/// Produce the water access strategy for one snapshot.
pub fn water_strategy(env: &EnvironmentalData) -> WaterStrategy {
    let rainfall = env.climate.annual_rainfall_mm;
    let zone = env.climate.climate_zone;
    let elevation = env.terrain.elevation_m;
    let is_coastal = env.location.is_coastal;

    let mut trace = vec![format!(
        "Annual rainfall: {rainfall}mm. Climate zone: {zone}."
    )];

    let (primary_method, mut techniques, storage_recommendation) = if rainfall > 1000.0 {
        // High rainfall: harvest the rain itself.
        trace.push(String::from(
            "Rainfall >1000mm: primary strategy is rainwater harvesting.",
        ));
        let techniques = vec![
            String::from("Roof-fed catchment systems with guttering"),
            String::from("Ferro-cement storage tanks (5,000-20,000 L)"),
            String::from("Underground cisterns with sealed covers"),
            String::from("First-flush diverters to remove contaminants"),
            String::from("Slow-sand filtration before consumption"),
        ];
        let storage = String::from(
            "Minimum 5,000 L per household. Target 20,000 L for 3-month dry season buffer. \
             Elevated tank preferred for gravity-fed distribution.",
        );
        trace.push(String::from(
            "Recommendation: roof catchment + ferro-cement tanks + first-flush diverter.",
        ));
        (String::from("Rainwater harvesting"), techniques, storage)
    } else if rainfall >= 500.0 {
        // Moderate rainfall: harvesting alone will not bridge the dry season.
        trace.push(String::from(
            "Rainfall 500-1000mm: combined rainwater harvesting and groundwater recommended.",
        ));
        let techniques = vec![
            String::from("Roof catchment and storage tanks"),
            String::from("Shallow well installation (3-15m depth)"),
            String::from("Check dams and swales to recharge groundwater"),
            String::from("Keyline water design for landscape water retention"),
            String::from("Ceramic pot filtration for drinking water"),
        ];
        let storage = String::from(
            "Minimum 10,000 L per household. Pair with shallow well as backup. Swales and \
             check dams to extend groundwater availability into dry season.",
        );
        trace.push(String::from(
            "Recommendation: roof catchment + shallow wells + landscape water retention.",
        ));
        (
            String::from("Combined rainwater harvesting + groundwater"),
            techniques,
            storage,
        )
    } else if rainfall >= 250.0 {
        // Semi-arid: groundwater primary, atmospheric collection supplemental.
        trace.push(String::from(
            "Rainfall 250-500mm (semi-arid): groundwater and supplemental collection recommended.",
        ));
        let techniques = vec![
            String::from("Deep wells (15-60m) with hand pumps"),
            String::from("Fog collection nets (polypropylene mesh) on ridges"),
            String::from("Dew collection sheets on cool surfaces overnight"),
            String::from("Underground infiltration galleries"),
            String::from("Drip irrigation to minimize water loss"),
            String::from("Mulching at 10-15cm depth to suppress evaporation"),
        ];
        let storage = String::from(
            "Minimum 15,000 L per household. Deep well required as primary. Fog nets \
             effective if elevation >400m with coastal or highland humidity.",
        );
        trace.push(String::from(
            "Recommendation: deep wells + fog nets + aggressive mulching + drip irrigation.",
        ));
        (
            String::from("Groundwater extraction + supplemental fog/dew collection"),
            techniques,
            storage,
        )
    } else {
        // Arid: every litre must be pumped, recycled, or condensed.
        trace.push(String::from(
            "Rainfall <250mm (arid): deep groundwater and water recycling are essential.",
        ));
        let techniques = vec![
            String::from("Borehole drilling to deep aquifers (60-200m)"),
            String::from("Solar-powered submersible pumps"),
            String::from("Greywater recycling for irrigation"),
            String::from("Atmospheric water generation (in humid desert zones)"),
            String::from("Wicking bed irrigation systems"),
            String::from("Minimal-water composting toilets"),
        ];
        let storage = String::from(
            "Minimum 20,000 L per household. Borehole essential. Greywater recycling \
             mandatory. Target near-zero water wastage.",
        );
        trace.push(String::from(
            "Recommendation: deep borehole + solar pump + greywater recycling system.",
        ));
        (
            String::from("Deep groundwater + closed-loop water recycling"),
            techniques,
            storage,
        )
    };

    // Coastal modifier: low-rainfall coastal sites gain a desalination
    // supplement.
    if is_coastal && rainfall < 500.0 {
        techniques.push(String::from(
            "Small-scale solar still for supplemental fresh water from seawater",
        ));
        trace.push(String::from(
            "Coastal location with low rainfall: added solar desalination as supplemental source.",
        ));
    }

    // Elevation modifier: uplands with adequate rainfall support spring
    // capture.
    if elevation > 500 && rainfall > 500.0 {
        techniques.push(String::from(
            "Spring capture from upland sources with gravity-fed pipe systems",
        ));
        trace.push(format!(
            "Elevation {elevation}m with adequate rainfall: spring capture viable."
        ));
    }

    WaterStrategy {
        primary_method,
        techniques,
        estimated_annual_rainfall_mm: rainfall,
        storage_recommendation,
        reasoning_trace: trace,
    }
}

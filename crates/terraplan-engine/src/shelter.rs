//! Shelter strategy module.
//!
//! Material/technique/consideration triples dispatch on the climate zone,
//! each tuned to the zone's dominant stressor: moisture and ventilation in
//! the tropics, thermal mass in arid zones, insulation for continental and
//! polar cold. Four zone-independent modifiers follow: slope terracing,
//! flood-siting, coastal corrosion, and high-wind bracing. Local,
//! sourceable materials only.

use terraplan_types::{ClimateZone, EnvironmentalData, ShelterStrategy, SlopeAssessment};

/// Average wind speed above which structural wind measures are added, km/h.
const HIGH_WIND_KMH: f64 = 30.0;

/// Produce the shelter strategy for one snapshot.
pub fn shelter_strategy(env: &EnvironmentalData) -> ShelterStrategy {
    let zone = env.climate.climate_zone;
    let rainfall = env.climate.annual_rainfall_mm;
    let wind = env.climate.avg_wind_speed_kmh;
    let elevation = env.terrain.elevation_m;
    let slope = env.terrain.slope_assessment;
    let is_coastal = env.location.is_coastal;

    let mut trace = vec![format!(
        "Climate zone: {zone}. Slope: {slope}. Elevation: {elevation}m."
    )];

    let (mut materials, mut techniques, mut considerations) = match zone {
        ClimateZone::Tropical => {
            trace.push(String::from(
                "Tropical zone: prioritizing ventilation, rain shedding, and moisture-resistant materials.",
            ));
            let materials = vec![
                String::from("Bamboo (fast-growing, high tensile strength, locally abundant)"),
                String::from("Timber from sustainably managed local hardwoods"),
                String::from("Clay bricks (sun-dried adobe or fired)"),
                String::from("Thatch from local grasses (alang-alang, palm frond, sago)"),
                String::from("Split bamboo for flooring and wall screens"),
                String::from("Lime plaster from locally burned limestone"),
            ];
            let techniques = vec![
                String::from(
                    "Raised platform foundation (0.5-1m off ground) for ventilation and flood protection",
                ),
                String::from("Steep roof pitch (>35\u{b0}) for rapid rain shedding"),
                String::from("Wide eaves (>1m overhang) to protect walls from rain"),
                String::from("Cross-ventilation: openings on opposing walls"),
                String::from("Screen walls (woven bamboo) for airflow without rain entry"),
                String::from("Covered outdoor spaces to expand usable area in rain"),
            ];
            let considerations = vec![
                String::from(
                    "Humidity: treat bamboo with borax-boric acid solution to prevent mold and insects",
                ),
                String::from("Termites: raise all wood off soil, use termite-resistant species"),
                String::from(
                    "Cyclone zones: use tie-downs and triangulated bracing on all roof structures",
                ),
            ];
            trace.push(String::from(
                "Selected raised bamboo/timber construction with steep thatch roof.",
            ));
            (materials, techniques, considerations)
        }
        ClimateZone::Arid => {
            trace.push(String::from(
                "Arid zone: thermal mass materials to moderate extreme diurnal temperature swings.",
            ));
            let materials = vec![
                String::from("Adobe (sun-dried mud brick) as primary walling material"),
                String::from("Rammed earth (pis\u{e9}) for load-bearing walls"),
                String::from("Stone (locally quarried granite, sandstone, or limestone)"),
                String::from("Lime plaster for waterproofing exterior surfaces"),
                String::from("Stabilized compressed earth blocks (SCEB) where equipment available"),
                String::from("Palm timber or desert hardwoods for roof structure"),
            ];
            let techniques = vec![
                String::from(
                    "Thick walls (40-60cm) for thermal mass: absorbs heat by day, releases at night",
                ),
                String::from(
                    "Small, deeply-recessed windows on sun-facing walls to reduce solar gain",
                ),
                String::from("Flat or low-pitch roof with high parapet for shade"),
                String::from(
                    "Courtyard design: central shaded outdoor space creates microclimate",
                ),
                String::from("Barrel-vaulted roof (no timber needed) from adobe or fired brick"),
                String::from("Buried or semi-buried rooms for natural cooling"),
            ];
            let considerations = vec![
                String::from("Waterproofing: lime or clay render must be maintained annually"),
                String::from("Wind: seal all gaps to prevent dust/sand infiltration"),
                String::from("Flash flood risk at valley floor: build on slightly elevated ground"),
            ];
            trace.push(String::from(
                "Selected thick adobe/rammed earth construction with thermal mass courtyard design.",
            ));
            (materials, techniques, considerations)
        }
        ClimateZone::Temperate => {
            trace.push(String::from(
                "Temperate zone: balanced insulation and weather resistance.",
            ));
            let materials = vec![
                String::from("Timber framing from locally milled softwood or hardwood"),
                String::from("Cob (clay, sand, straw mix) for thick insulating walls"),
                String::from("Stone masonry for foundations and ground-level walls"),
                String::from("Fired clay brick where kiln resources available"),
                String::from("Straw bale for super-insulated alternative walls"),
                String::from("Reed or thatch for roof (good insulation, 30+ year lifespan)"),
            ];
            let techniques = vec![
                String::from("Insulated walls (R-value equivalent to modern standards)"),
                String::from("Moderate roof pitch (25-35\u{b0}) for rain shedding and snow load"),
                String::from(
                    "South-facing main windows (northern hemisphere) for passive solar gain",
                ),
                String::from("Thermal buffer zones: unheated porch or attached greenhouse"),
                String::from("Root cellar integrated into north side of structure"),
                String::from("Timber mortise-and-tenon joinery without metal fasteners"),
            ];
            let considerations = vec![
                String::from("Moisture: ensure cob and straw bale have raised stone foundation"),
                String::from("Fire: wood-burning stove with proper chimney and spark protection"),
                String::from("Maintenance: external lime wash or clay render annually"),
            ];
            trace.push(String::from(
                "Selected timber-frame or cob construction with passive solar orientation.",
            ));
            (materials, techniques, considerations)
        }
        ClimateZone::Continental => {
            trace.push(String::from(
                "Continental zone: maximum insulation and structural resilience for extreme cold and snow load.",
            ));
            let materials = vec![
                String::from("Log construction from local timber (pine, spruce, fir)"),
                String::from("Stone for foundations and lower walls"),
                String::from("Earth-sheltered construction (high insulation, frost protection)"),
                String::from("Wool, straw, or wood fiber for wall insulation"),
                String::from("Clay tile or metal (salvaged) for steep snow-shedding roof"),
                String::from("Lime mortar for stone and log chinking"),
            ];
            let techniques = vec![
                String::from("Steep roof pitch (>45\u{b0}) to shed heavy snow loads"),
                String::from("Earth berming on north-facing walls for insulation"),
                String::from("Triple-glazed or shuttered windows on all sides"),
                String::from("Vestibule/airlock entry to prevent heat loss on entry"),
                String::from("South-facing glazing maximized for winter solar gain"),
                String::from("Compact floor plan to minimize heat loss surface area"),
            ];
            let considerations = vec![
                String::from("Foundation frost: footings must extend below frost line depth"),
                String::from(
                    "Snow load: roof structure engineered for 200-400 kg/m\u{b2} snow accumulation",
                ),
                String::from("Ice dam prevention: continuous insulation at roof-wall junction"),
            ];
            trace.push(String::from(
                "Selected log or earth-sheltered construction with south-facing passive solar design.",
            ));
            (materials, techniques, considerations)
        }
        // Polar doubles as the conservative fallback set.
        ClimateZone::Polar => {
            trace.push(String::from(
                "Polar zone: extreme insulation and minimal thermal bridging are critical for survival.",
            ));
            let materials = vec![
                String::from("Insulated structural panels (if prefabricated materials accessible)"),
                String::from("Stone masonry for outer windbreak walls"),
                String::from("Earth-sheltering with turf roof (traditional arctic technique)"),
                String::from("Dense wool, animal hide, or cork for insulation"),
                String::from("Timber (where available) for interior structure"),
            ];
            let techniques = vec![
                String::from(
                    "Earth-sheltered or semi-buried structure to use geothermal stability",
                ),
                String::from("Entrance tunnel (tunnel airlock) facing away from prevailing wind"),
                String::from("Minimal window area with triple or quadruple glazing"),
                String::from("Compact dome or barrel form to minimize surface-to-volume ratio"),
                String::from(
                    "Interior thermal mass with wood or masonry stove centrally located",
                ),
                String::from(
                    "Insulated floor slab critical: ground contact is primary heat loss path",
                ),
            ];
            let considerations = vec![
                String::from(
                    "Permafrost: if present, build on piles or gravel pad to prevent frost heave",
                ),
                String::from(
                    "Wind: all penetrations heavily sealed; structure must resist 150+ km/h gusts",
                ),
                String::from(
                    "Condensation: ventilation-heat exchanger (HRV) to prevent moisture buildup",
                ),
            ];
            trace.push(String::from(
                "Selected earth-sheltered polar construction with maximum insulation and airlock entry.",
            ));
            (materials, techniques, considerations)
        }
    };

    // Terrain modifier: sloped ground needs a level platform before
    // anything else.
    if matches!(slope, SlopeAssessment::Steep | SlopeAssessment::Moderate) {
        techniques.push(String::from(
            "Terraced foundation on sloped ground to create level building platform",
        ));
        techniques.push(String::from(
            "Retaining walls from local stone or gabion baskets to stabilize slope",
        ));
        considerations.push(String::from(
            "Landslide risk on steep slopes: vegetate all disturbed soil immediately",
        ));
        trace.push(format!(
            "Slope ({slope}): added terracing and retaining wall guidance."
        ));
    }

    // Flood risk modifier.
    if elevation < 50 && rainfall > 1000.0 {
        techniques.push(String::from(
            "Raised platform foundation or stilts to clear potential flood level",
        ));
        considerations.push(String::from(
            "Flood risk: site building on slightly elevated ground; avoid valley floors",
        ));
        trace.push(String::from(
            "Low elevation + high rainfall: raised platform recommended as flood precaution.",
        ));
    }

    // Coastal modifier.
    if is_coastal {
        materials.push(String::from(
            "Salt-resistant lime render for external finishes",
        ));
        considerations.push(String::from(
            "Coastal salt air: avoid uncoated steel; use galvanized or stainless fixings only",
        ));
        considerations.push(String::from(
            "Storm surge: site above historical flood line; verify with local knowledge",
        ));
        trace.push(String::from(
            "Coastal location: added corrosion and storm surge guidance.",
        ));
    }

    // High wind modifier.
    if wind > HIGH_WIND_KMH {
        techniques.push(String::from(
            "Roof tie-down straps anchored through walls to foundation",
        ));
        techniques.push(String::from(
            "Windbreak walls or dense hedgerow on prevailing wind side",
        ));
        trace.push(format!(
            "High average wind ({wind} km/h): added structural wind resistance measures."
        ));
    }

    ShelterStrategy {
        recommended_materials: materials,
        construction_techniques: techniques,
        climate_considerations: considerations,
        reasoning_trace: trace,
    }
}

//! Food production strategy module.
//!
//! Crop and technique selection dispatches on the climate zone via an
//! exhaustive match; the polar arm carries the indoor/greenhouse set that
//! also serves as the conservative fallback. The growing-season estimate
//! models monthly temperature as a sinusoid anchored to the annual
//! average/min/max and counts months above the 5 °C growth threshold. The
//! two derivations are independent and can disagree on synthetic inputs.

use std::f64::consts::PI;

use terraplan_types::{ClimateZone, EnvironmentalData, FoodStrategy};

/// Monthly mean temperature above which a month counts toward the growing
/// season, °C.
const GROWTH_THRESHOLD_C: f64 = 5.0;

/// Estimate the growing season from annual temperature statistics.
///
/// Monthly temperatures are approximated with 12 samples of a sinusoid
/// whose trough aligns with the annual minimum and peak with the maximum:
/// `avg + ((max - min) / 2) * sin(2*pi*month/12 - pi/2)`.
fn derive_growing_season(avg_temp: f64, min_temp: f64, max_temp: f64) -> String {
    let amplitude = (max_temp - min_temp) / 2.0;
    let mut warm_months: u32 = 0;
    for month in 0..12_u32 {
        let angle = 2.0 * PI * f64::from(month) / 12.0;
        let month_temp = avg_temp + amplitude * (angle - PI / 2.0).sin();
        if month_temp > GROWTH_THRESHOLD_C {
            warm_months = warm_months.saturating_add(1);
        }
    }

    if warm_months >= 11 {
        String::from("Year-round growing (>10 months above 5\u{b0}C)")
    } else if warm_months >= 8 {
        format!("Long season (approximately {warm_months} months)")
    } else if warm_months >= 5 {
        format!("Moderate season (approximately {warm_months} months)")
    } else if warm_months >= 3 {
        format!("Short season (approximately {warm_months} months) - cold frames advised")
    } else {
        String::from("Very short season (<3 months) - greenhouse or indoor growing required")
    }
}

/// Produce the food production strategy for one snapshot.
pub fn food_strategy(env: &EnvironmentalData) -> FoodStrategy {
    let zone = env.climate.climate_zone;
    let avg = env.climate.avg_temperature_c;
    let rainfall = env.climate.annual_rainfall_mm;

    let mut trace = vec![format!(
        "Climate zone: {zone}. Avg temp: {avg}\u{b0}C. Rainfall: {rainfall}mm."
    )];

    let (crops, techniques) = match zone {
        ClimateZone::Tropical => {
            trace.push(String::from(
                "Tropical zone: selecting high-yield year-round food crops.",
            ));
            let crops = vec![
                String::from("Cassava (drought-tolerant, high calorie, 12-month harvest)"),
                String::from("Sweet potato (fast-growing, nutritious ground cover)"),
                String::from("Banana and plantain (perennial, high yield)"),
                String::from("Moringa (fast-growing, highly nutritious leafy tree)"),
                String::from("Coconut (multi-purpose: food, oil, water, materials)"),
                String::from("Papaya (fast bearing, 6-month maturity)"),
                String::from("Taro (shade-tolerant, flood-resilient)"),
                String::from("Yam (high calorie, stores well)"),
                String::from("Breadfruit (tree crop, minimal maintenance)"),
                String::from("Legumes: cowpea, pigeon pea (nitrogen-fixing)"),
            ];
            let techniques = vec![
                String::from(
                    "Agroforestry: multi-story canopy system (trees, shrubs, ground crops)",
                ),
                String::from("Polyculture - never monoculture, always mixed species"),
                String::from("Heavy mulching (15-20cm) to maintain soil moisture"),
                String::from("Nitrogen-fixing cover crops between rows"),
                String::from("Swale-based water infiltration for root zone moisture"),
                String::from("Composting using biomass from persistent vegetation"),
                String::from("Perennial staples prioritized over annual crops"),
            ];
            trace.push(String::from(
                "Selected perennial-dominant tropical agroforestry approach.",
            ));
            (crops, techniques)
        }
        ClimateZone::Arid => {
            trace.push(String::from(
                "Arid zone: selecting drought-tolerant crops and water-minimal growing systems.",
            ));
            let crops = vec![
                String::from("Date palm (deep-rooted, drought-tolerant, high calorie)"),
                String::from("Millet and sorghum (drought-resistant grains)"),
                String::from("Drought-resistant beans (tepary bean, moth bean)"),
                String::from("Amaranth (heat and drought tolerant, nutritious)"),
                String::from("Prickly pear cactus (water source + food)"),
                String::from("Jujube (drought-tolerant fruit tree)"),
                String::from("Barley (lower water need than wheat)"),
                String::from("Desert herbs: rosemary, thyme, sage (medicinal + culinary)"),
            ];
            let techniques = vec![
                String::from("Drip irrigation (80% water reduction vs. flood irrigation)"),
                String::from("Wicking beds for intensive vegetable production"),
                String::from("Zai pits: micro-basins to concentrate rainfall at plant base"),
                String::from("Shade structures to reduce heat stress on crops"),
                String::from("Deep 15-20cm mulch to cut soil evaporation"),
                String::from("Keyhole garden beds for water efficiency"),
                String::from("Seasonal planting timed to any rainfall events"),
            ];
            trace.push(String::from(
                "Selected drought-tolerant crops with zai pit and drip irrigation approach.",
            ));
            (crops, techniques)
        }
        ClimateZone::Temperate => {
            trace.push(String::from(
                "Temperate zone: selecting diverse seasonal and perennial food crops.",
            ));
            let crops = vec![
                String::from("Potato (high yield per m\u{b2}, stores well)"),
                String::from("Wheat and rye (primary grain crops)"),
                String::from("Legumes: peas, beans, lentils (protein + nitrogen fixation)"),
                String::from("Leafy greens: kale, chard, spinach (cold-tolerant)"),
                String::from("Root vegetables: carrots, beets, parsnips, turnips"),
                String::from("Fruit trees: apple, pear, plum, cherry (perennial)"),
                String::from("Berries: strawberry, raspberry, currant, gooseberry"),
                String::from("Squash and pumpkin (stores well, high calorie)"),
                String::from("Herbs: parsley, chives, mint (year-round)"),
            ];
            let techniques = vec![
                String::from("Crop rotation (4-year cycle: grain, legume, root, brassica)"),
                String::from("Companion planting: Three Sisters (corn, beans, squash)"),
                String::from("Hot composting to maintain soil fertility"),
                String::from("Cover cropping with clover or vetch in winter"),
                String::from("Raised beds for improved drainage and earlier spring planting"),
                String::from("Food forest design with 7-layer canopy for perennials"),
                String::from("Seed saving of locally-adapted varieties"),
            ];
            trace.push(String::from(
                "Selected diverse seasonal growing with crop rotation and food forest integration.",
            ));
            (crops, techniques)
        }
        ClimateZone::Continental => {
            trace.push(String::from(
                "Continental zone: selecting cold-hardy crops with season extension methods.",
            ));
            let crops = vec![
                String::from(
                    "Root vegetables: potato, carrot, beet, turnip, parsnip (store all winter)",
                ),
                String::from("Cabbages and brassicas: cold-hardy, high nutrition"),
                String::from("Rye and barley (cold-tolerant grains)"),
                String::from("Hardy fruit trees: apple, pear, plum (cold-adapted varieties)"),
                String::from("Garlic and onion (plant autumn, harvest summer)"),
                String::from("Dried beans and lentils (long storage)"),
                String::from("Sunflower (oil + seeds + bird attraction)"),
                String::from("Herbs: dill, caraway, horseradish (cold-tolerant)"),
            ];
            let techniques = vec![
                String::from("Cold frames and low tunnels to extend growing season 4-6 weeks"),
                String::from("Root cellars for winter storage of vegetables"),
                String::from("Short-season crop varieties (60-70 day maturity)"),
                String::from("Autumn planting of garlic and cold-tolerant greens"),
                String::from("Snow catchment and melt management for spring irrigation"),
                String::from("Windbreaks of hardy trees to protect growing areas"),
                String::from("Greenhouse or polytunnel for winter greens production"),
            ];
            trace.push(String::from(
                "Selected cold-hardy varieties with season extension and root cellar storage.",
            ));
            (crops, techniques)
        }
        // The polar set is also the conservative fallback for any zone the
        // classifier cannot place more precisely.
        ClimateZone::Polar => {
            trace.push(String::from(
                "Polar/extreme cold zone: greenhouse growing is essential for food production.",
            ));
            let crops = vec![
                String::from("Leafy greens: lettuce, spinach, kale (fast-growing under lights)"),
                String::from("Root vegetables: radish, carrot, beet (compact varieties)"),
                String::from("Microgreens for dense nutrition in small space"),
                String::from("Herbs: parsley, chives, mint"),
                String::from("Cherry tomatoes (with supplemental light)"),
                String::from("Dwarf pea varieties"),
            ];
            let techniques = vec![
                String::from("Insulated greenhouse or polytunnel as primary growing structure"),
                String::from("Hydroponic nutrient film technique (NFT) for water efficiency"),
                String::from("LED supplemental lighting during polar winter"),
                String::from("Thermal mass (water barrels) inside greenhouse for overnight heat"),
                String::from("Algae cultivation for protein supplementation"),
                String::from("Preserved and fermented foods from short summer harvest"),
            ];
            trace.push(String::from(
                "Selected indoor/greenhouse growing system for polar conditions.",
            ));
            (crops, techniques)
        }
    };

    let growing_seasons = derive_growing_season(
        avg,
        env.climate.min_temperature_c,
        env.climate.max_temperature_c,
    );
    trace.push(format!("Growing season estimate: {growing_seasons}."));

    FoodStrategy {
        climate_zone: zone,
        recommended_crops: crops,
        growing_seasons,
        techniques,
        reasoning_trace: trace,
    }
}

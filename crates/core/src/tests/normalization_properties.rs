//! Property-based tests for record normalization.
//!
//! Properties verified:
//! - A normalized plant always has a non-empty id, name and species
//! - Positional ids stay unique across a list without device ids
//! - Readings render either a number or the missing marker

use proptest::prelude::*;

use crate::models::{MISSING_READING, PlantReading, PlantSummary, RawDeviceRecord};

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[ \t]{1,4}".prop_map(Some),
        "[A-Za-z][A-Za-z ]{0,20}".prop_map(Some),
    ]
}

prop_compose! {
    fn raw_record()(
        device_id in optional_text(),
        id in optional_text(),
        plant_name in optional_text(),
        name in optional_text(),
        species in optional_text(),
        is_connected in proptest::option::of(any::<bool>()),
        moisture in proptest::option::of(-1_000.0f64..1_000.0),
    ) -> RawDeviceRecord {
        RawDeviceRecord {
            device_id,
            id,
            plant_name,
            name,
            species,
            is_connected,
            moisture,
            ..RawDeviceRecord::default()
        }
    }
}

proptest! {
    #[test]
    fn prop_summary_fields_never_blank(raw in raw_record(), index in 0usize..1_000) {
        let summary = PlantSummary::from_raw(&raw, index);

        prop_assert!(!summary.id.trim().is_empty());
        prop_assert!(!summary.name.trim().is_empty());
        prop_assert!(!summary.species.trim().is_empty());
    }

    #[test]
    fn prop_positional_ids_are_unique(count in 1usize..50) {
        let records = vec![RawDeviceRecord::default(); count];

        let plants = PlantSummary::from_raw_list(&records);

        let mut ids: Vec<&str> = plants.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), count);
    }

    #[test]
    fn prop_reading_keeps_requested_id_when_record_has_none(
        raw in raw_record(),
        requested in "[a-z0-9]{1,12}",
    ) {
        let reading = PlantReading::from_raw(&raw, &requested);

        match raw.identifier() {
            Some(id) => prop_assert_eq!(reading.id.as_str(), id),
            None => prop_assert_eq!(reading.id.as_str(), requested.as_str()),
        }
        prop_assert!(!reading.name.trim().is_empty());
    }

    #[test]
    fn prop_moisture_display_is_number_or_marker(raw in raw_record()) {
        let reading = PlantReading::from_raw(&raw, "device");
        let shown = reading.moisture_display();

        if raw.moisture.is_some() {
            prop_assert!(shown.ends_with('%'));
        } else {
            prop_assert_eq!(shown, MISSING_READING);
        }
    }
}

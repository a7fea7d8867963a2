use super::*;

fn providence() -> Bounds {
    Bounds { min_lat: 41.79, max_lat: 41.84, min_lon: -71.44, max_lon: -71.39 }
}

fn feature_names(data: &GeoData) -> Vec<&str> {
    data.features.iter().filter_map(|f| f.name()).collect()
}

#[test]
fn bundled_data_loads() {
    let service = MapService::bundled().unwrap();
    assert_eq!(service.dataset().features.len(), 6);
    assert_eq!(service.notes().len(), 5);
}

#[test]
fn overlay_filters_bundled_dataset_by_bounds() {
    let mut service = MapService::bundled().unwrap();
    let overlay = service.overlay(&providence(), 0.0);
    assert_eq!(feature_names(&overlay), vec!["College Hill", "West End", "South Providence"]);
}

#[test]
fn overlay_world_skips_features_without_geometry() {
    let mut service = MapService::bundled().unwrap();
    let overlay = service.overlay(&Bounds::WORLD, 0.0);
    assert_eq!(overlay.features.len(), 5);
    assert!(!feature_names(&overlay).contains(&"Unmapped"));
}

#[test]
fn overlay_repeat_request_hits_cache() {
    let mut service = MapService::bundled().unwrap();
    let first = service.overlay(&providence(), 0.0);
    let second = service.overlay(&providence(), 10.0);
    assert_eq!(first, second);
    assert_eq!(service.cache_stats(), CacheStats { hits: 1, misses: 1 });
}

#[test]
fn search_notes_matches_keyword_inside_bounds() {
    let service = MapService::bundled().unwrap();
    let titles: Vec<String> = service
        .search_notes("world", &Bounds::WORLD)
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, vec!["World Trade Center".to_owned()]);
    assert!(service.search_notes("brown", &providence()).len() == 1);
}

#[test]
fn from_json_reports_malformed_overlay() {
    let err = MapService::from_json("{", "[]").unwrap_err();
    assert!(matches!(err, DatasetError::Decode { name: "overlay", .. }));
}

#[test]
fn from_json_reports_invalid_note() {
    let notes = r#"[{ "title": "pole", "note": "", "latitude": 95.0, "longitude": 0.0 }]"#;
    let err = MapService::from_json(r#"{ "type": "FeatureCollection", "features": [] }"#, notes).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidNote { name: "notes", .. }));
    assert!(err.to_string().starts_with("invalid note in notes:"));
}

#[test]
fn default_service_is_empty() {
    let mut service = MapService::default();
    assert!(service.overlay(&Bounds::WORLD, 0.0).features.is_empty());
    assert!(service.search_notes("", &Bounds::WORLD).is_empty());
}

#[test]
fn add_note_returns_seeded_notes_then_new_one() {
    let mut service = MapService::bundled().unwrap();
    let notes = service.add_note(Note::new("city", "nothing", 41.0, -71.0)).unwrap();
    assert_eq!(notes.len(), 6);
    assert_eq!(notes[3], Note::new("Providence", "Brown University", 41.8393, -71.4162));
    assert_eq!(notes[5], Note::new("city", "nothing", 41.0, -71.0));
    assert_eq!(service.notes().len(), 6);
}

#[test]
fn add_note_rejects_out_of_range_longitude() {
    let mut service = MapService::bundled().unwrap();
    let err = service.add_note(Note::new("edge", "", 0.0, -181.0)).unwrap_err();
    assert_eq!(err, NoteError::LongitudeOutOfRange { title: "edge".to_owned(), longitude: -181.0 });
    assert_eq!(err.notice(), "invalid input: note \"edge\" has longitude -181 outside [-180, 180]");
    assert_eq!(service.notes().len(), 5);
}

use concert_catalog_core::db::{open_db_in_memory, open_db_in_memory_with};
use concert_catalog_core::{
    Band, BandRepository, CatalogService, Concert, NewBand, RepoError, SqliteCatalogRepository,
    StoreOptions, ValidationError, Venue,
};

#[test]
fn add_band_then_get_returns_same_fields() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let id = catalog.add_band("The Beatles", "Liverpool").unwrap();

    let loaded = catalog.get_band(id).unwrap().unwrap();
    assert_eq!(
        loaded,
        Band {
            id,
            name: "The Beatles".to_string(),
            hometown: "Liverpool".to_string(),
        }
    );
}

#[test]
fn add_venue_then_get_returns_same_fields() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let id = catalog.add_venue("Madison Square Garden", "New York").unwrap();

    let loaded = catalog.get_venue(id).unwrap().unwrap();
    assert_eq!(
        loaded,
        Venue {
            id,
            title: "Madison Square Garden".to_string(),
            city: "New York".to_string(),
        }
    );
}

#[test]
fn inserts_return_distinct_generated_ids() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let first = catalog.add_band("Blur", "Colchester").unwrap();
    let second = catalog.add_band("Oasis", "Manchester").unwrap();
    assert_ne!(first, second);

    let venue = catalog.add_venue("Knebworth Park", "Stevenage").unwrap();
    let concert = catalog.add_concert(second, venue, "1996-08-10").unwrap();

    let loaded = catalog.get_concert(concert).unwrap().unwrap();
    assert_eq!(
        loaded,
        Concert {
            id: concert,
            band_id: second,
            venue_id: venue,
            date: "1996-08-10".to_string(),
        }
    );
}

#[test]
fn lookups_for_unknown_ids_return_none() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    assert!(catalog.get_band(42).unwrap().is_none());
    assert!(catalog.get_venue(42).unwrap().is_none());
    assert!(catalog.get_concert(42).unwrap().is_none());
}

#[test]
fn blank_text_fields_are_rejected_before_insert() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let err = catalog.add_band("", "Liverpool").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyField {
            entity: "band",
            field: "name"
        })
    ));

    let err = catalog.add_venue("The O2", "   ").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyField {
            entity: "venue",
            field: "city"
        })
    ));

    let band = catalog.add_band("Suede", "London").unwrap();
    let venue = catalog.add_venue("Brixton Academy", "London").unwrap();
    let err = catalog.add_concert(band, venue, "").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM concerts;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn dangling_concert_reference_is_a_constraint_violation() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let band = catalog.add_band("Radiohead", "Abingdon").unwrap();
    let err = catalog.add_concert(band, 999, "1997-06-28").unwrap_err();

    assert!(matches!(err, RepoError::ConstraintViolation(_)));
}

#[test]
fn dangling_concert_reference_is_stored_when_foreign_keys_are_off() {
    let options = StoreOptions {
        enforce_foreign_keys: false,
        ..StoreOptions::default()
    };
    let conn = open_db_in_memory_with(&options).unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let id = catalog.add_concert(7, 9, "2001-01-01").unwrap();

    let loaded = catalog.get_concert(id).unwrap().unwrap();
    assert_eq!(loaded.band_id, 7);
    assert_eq!(loaded.venue_id, 9);
}

#[test]
fn repository_can_be_used_without_service() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCatalogRepository::try_new(&conn).unwrap();

    let id = repo.create_band(&NewBand::new("Kraftwerk", "Düsseldorf")).unwrap();

    let band = repo.get_band(id).unwrap().unwrap();
    assert_eq!(band.hometown, "Düsseldorf");
}

#[test]
fn records_serialize_with_field_names() {
    let band = Band {
        id: 3,
        name: "Portishead".to_string(),
        hometown: "Bristol".to_string(),
    };

    let value = serde_json::to_value(&band).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "id": 3, "name": "Portishead", "hometown": "Bristol" })
    );
}

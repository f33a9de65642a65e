use concert_catalog_core::db::open_db_in_memory;
use concert_catalog_core::{
    BandConcert, CatalogService, PerformanceCount, SqliteCatalogRepository, Venue,
};

#[test]
fn concerts_lists_every_concert_with_venue_fields() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let band = catalog.add_band("The Beatles", "Liverpool").unwrap();
    let garden = catalog.add_venue("Madison Square Garden", "New York").unwrap();
    let cavern = catalog.add_venue("The Cavern Club", "Liverpool").unwrap();
    let first = catalog.add_concert(band, garden, "1964-02-09").unwrap();
    let second = catalog.add_concert(band, cavern, "1963-08-03").unwrap();
    let third = catalog.add_concert(band, garden, "1965-08-15").unwrap();

    let concerts = catalog.band(band).concerts().unwrap();
    assert_eq!(concerts.len(), 3);
    assert_eq!(
        concerts,
        vec![
            BandConcert {
                concert_id: first,
                venue_title: "Madison Square Garden".to_string(),
                venue_city: "New York".to_string(),
                date: "1964-02-09".to_string(),
            },
            BandConcert {
                concert_id: second,
                venue_title: "The Cavern Club".to_string(),
                venue_city: "Liverpool".to_string(),
                date: "1963-08-03".to_string(),
            },
            BandConcert {
                concert_id: third,
                venue_title: "Madison Square Garden".to_string(),
                venue_city: "New York".to_string(),
                date: "1965-08-15".to_string(),
            },
        ]
    );
}

#[test]
fn concerts_excludes_other_bands() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let band = catalog.add_band("Blondie", "New York").unwrap();
    let other = catalog.add_band("Ramones", "New York").unwrap();
    let venue = catalog.add_venue("CBGB", "New York").unwrap();
    catalog.add_concert(other, venue, "1976-01-01").unwrap();

    assert!(catalog.band(band).concerts().unwrap().is_empty());
    assert_eq!(catalog.band(other).concerts().unwrap().len(), 1);
}

#[test]
fn venues_repeats_a_venue_once_per_concert() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let band = catalog.add_band("Led Zeppelin", "London").unwrap();
    let o2 = catalog.add_venue("The O2", "London").unwrap();
    catalog.add_concert(band, o2, "2007-12-10").unwrap();
    catalog.add_concert(band, o2, "2007-12-11").unwrap();

    let venues = catalog.band(band).venues().unwrap();
    let expected = Venue {
        id: o2,
        title: "The O2".to_string(),
        city: "London".to_string(),
    };
    assert_eq!(venues, vec![expected.clone(), expected]);
}

#[test]
fn play_in_venue_books_the_named_venue() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let band = catalog.add_band("Pixies", "Boston").unwrap();
    let venue = catalog.add_venue("Paradise Rock Club", "Boston").unwrap();

    let concert_id = catalog
        .band(band)
        .play_in_venue("Paradise Rock Club", "1988-05-01")
        .unwrap()
        .unwrap();

    let concert = catalog.get_concert(concert_id).unwrap().unwrap();
    assert_eq!(concert.band_id, band);
    assert_eq!(concert.venue_id, venue);
    assert_eq!(concert.date, "1988-05-01");
}

#[test]
fn play_in_venue_with_unknown_title_inserts_nothing() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let band = catalog.add_band("Pixies", "Boston").unwrap();
    catalog.add_venue("Paradise Rock Club", "Boston").unwrap();
    let view = catalog.band(band);
    assert_eq!(view.id(), band);
    let before = view.concerts().unwrap().len();

    let outcome = view.play_in_venue("paradise rock club", "1988-05-01").unwrap();

    assert!(outcome.is_none());
    assert_eq!(view.concerts().unwrap().len(), before);
}

#[test]
fn play_in_venue_prefers_smallest_venue_id_for_repeated_titles() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let band = catalog.add_band("Air", "Versailles").unwrap();
    let first = catalog.add_venue("Olympia", "Paris").unwrap();
    catalog.add_venue("Olympia", "London").unwrap();

    let concert_id = catalog
        .band(band)
        .play_in_venue("Olympia", "2004-03-03")
        .unwrap()
        .unwrap();

    assert_eq!(catalog.get_concert(concert_id).unwrap().unwrap().venue_id, first);
}

#[test]
fn all_introductions_follow_concert_order() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let band = catalog.add_band("The Beatles", "Liverpool").unwrap();
    let garden = catalog.add_venue("Madison Square Garden", "New York").unwrap();
    let cavern = catalog.add_venue("The Cavern Club", "Liverpool").unwrap();
    catalog.add_concert(band, garden, "1964-02-09").unwrap();
    catalog.add_concert(band, cavern, "1963-08-03").unwrap();

    let introductions = catalog.band(band).all_introductions().unwrap();
    assert_eq!(
        introductions,
        vec![
            "Hello New York!!!!! We are The Beatles and we're from Liverpool".to_string(),
            "Hello Liverpool!!!!! We are The Beatles and we're from Liverpool".to_string(),
        ]
    );
}

#[test]
fn most_performances_returns_band_with_most_concerts() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let band_a = catalog.add_band("Band A", "Leeds").unwrap();
    let band_b = catalog.add_band("Band B", "York").unwrap();
    let venue = catalog.add_venue("Town Hall", "Leeds").unwrap();
    catalog.add_concert(band_b, venue, "2020-01-01").unwrap();
    for date in ["2020-02-01", "2020-03-01", "2020-04-01"] {
        catalog.add_concert(band_a, venue, date).unwrap();
    }

    let expected = PerformanceCount {
        band_id: band_a,
        name: "Band A".to_string(),
        count: 3,
    };
    assert_eq!(catalog.most_performances().unwrap(), Some(expected.clone()));
    assert_eq!(catalog.band(band_b).most_performances().unwrap(), Some(expected));
}

#[test]
fn most_performances_breaks_ties_by_smallest_band_id() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());

    let first = catalog.add_band("First", "Leeds").unwrap();
    let second = catalog.add_band("Second", "York").unwrap();
    let venue = catalog.add_venue("Town Hall", "Leeds").unwrap();
    catalog.add_concert(second, venue, "2020-01-01").unwrap();
    catalog.add_concert(first, venue, "2020-01-02").unwrap();

    let top = catalog.most_performances().unwrap().unwrap();
    assert_eq!(top.band_id, first);
    assert_eq!(top.count, 1);
}

#[test]
fn most_performances_is_none_without_concerts() {
    let conn = open_db_in_memory().unwrap();
    let catalog = CatalogService::new(SqliteCatalogRepository::try_new(&conn).unwrap());
    catalog.add_band("Lonely", "Nowhere").unwrap();

    assert!(catalog.most_performances().unwrap().is_none());
}

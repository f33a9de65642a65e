//! Concert catalog demo.
//!
//! Opens `concerts.db` in the working directory, seeds a small catalog and
//! prints every derived view as one JSON line each.

use anyhow::{Context, Result};
use concert_catalog_core::{
    default_log_level, init_logging, open_db, CatalogService, SqliteCatalogRepository,
};
use log::info;
use serde::Serialize;

const DB_FILE_NAME: &str = "concerts.db";
const LOG_DIR_NAME: &str = "logs";

fn main() -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    init_logging(default_log_level(), cwd.join(LOG_DIR_NAME))
        .context("failed to initialize logging")?;

    let conn = open_db(cwd.join(DB_FILE_NAME)).context("failed to open catalog database")?;
    let repo = SqliteCatalogRepository::try_new(&conn).context("catalog schema is not ready")?;
    let catalog = CatalogService::new(repo);

    let beatles = catalog
        .add_band("The Beatles", "Liverpool")
        .context("failed to add The Beatles")?;
    let zeppelin = catalog
        .add_band("Led Zeppelin", "London")
        .context("failed to add Led Zeppelin")?;
    let garden = catalog
        .add_venue("Madison Square Garden", "New York")
        .context("failed to add Madison Square Garden")?;
    let o2 = catalog
        .add_venue("The O2", "London")
        .context("failed to add The O2")?;

    let first_concert = catalog
        .add_concert(beatles, garden, "2023-10-01")
        .context("failed to add Beatles concert")?;
    catalog
        .add_concert(zeppelin, o2, "2023-11-15")
        .context("failed to add Led Zeppelin concert")?;
    info!("event=demo_seed module=cli status=ok");

    let concert = catalog.concert(first_concert);
    print_json("hometown_show", &concert.hometown_show()?)?;
    print_json("introduction", &concert.introduction()?)?;

    let venue = catalog.venue(garden);
    print_json("venue_concerts", &venue.concerts()?)?;
    print_json("venue_bands", &venue.bands()?)?;

    let band = catalog.band(beatles);
    print_json("band_concerts", &band.concerts()?)?;
    print_json("band_venues", &band.venues()?)?;
    print_json("band_introductions", &band.all_introductions()?)?;

    print_json("most_performances", &catalog.most_performances()?)?;
    print_json("most_frequent_band", &venue.most_frequent_band()?)?;

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(label: &str, value: &T) -> Result<()> {
    let encoded =
        serde_json::to_string(value).with_context(|| format!("failed to encode {label}"))?;
    println!("{label}: {encoded}");
    Ok(())
}

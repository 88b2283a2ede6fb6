use mgrs_grid_rs::{GridTile, Grids, Mgrs, MgrsGridError, Utm, ZonePartition};

fn main() -> Result<(), MgrsGridError> {
    env_logger::init();

    let lon = -76.9953;
    let lat = 38.8856;

    let mgrs = Mgrs::from(&(lon, lat));
    println!("MGRS: {}", mgrs);

    let utm = Utm::from(&(lon, lat));
    println!("UTM: {}", utm);

    let parsed: Mgrs = "18SUJ2693805973".parse()?;
    let point = parsed.to_point();
    println!("Point: ({}, {})", point.longitude(), point.latitude());

    if let Some(zone) = ZonePartition::global().grid_zone(parsed.zone_number(), parsed.band_letter())
    {
        let bounds = zone.bounds();
        println!(
            "Grid zone {}: lon {} to {}, lat {} to {}",
            zone,
            bounds.min_x(),
            bounds.max_x(),
            bounds.min_y(),
            bounds.max_y()
        );
    }

    let grids = Grids::new();
    let tile = GridTile::xyz(256, 256, 1171, 1566, 12);
    let content = grids.tile_content(&tile);
    println!("Tile lines: {}", content.lines.len());
    println!("Tile labels: {}", content.labels.len());

    Ok(())
}

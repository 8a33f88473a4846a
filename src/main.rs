//! Command-line inspector for a parcel export: loads the GeoJSON data
//! set, prints a summary, and optionally resolves one identifier pair
//! the same way the viewer's selection click does.

use std::path::PathBuf;

use anyhow::{bail, Context};
use asetgis::{
    bounding_box, format_currency, format_document_area, format_updated_date, Parcel, ParcelStore,
};

fn main() -> anyhow::Result<()> {
    asetgis::init_logging()?;

    let mut args = std::env::args().skip(1);
    let Some(data_path) = args.next().map(PathBuf::from) else {
        bail!("usage: asetgis <data.geojson> [LAND_ID [BLOCK_CODE]]");
    };
    let land_id = args.next();
    let block_code = args.next();

    let store = ParcelStore::load_from_file(&data_path)
        .with_context(|| format!("loading {}", data_path.display()))?;

    println!("{} parcels", store.len());
    if let Some(date) = store.last_updated() {
        println!("data updated: {}", format_updated_date(date));
    }

    if land_id.is_some() || block_code.is_some() {
        match store.find_best(land_id.as_deref(), block_code.as_deref()) {
            Some(parcel) => print_detail(parcel),
            None => println!("no matching parcel"),
        }
    }

    Ok(())
}

fn print_detail(parcel: &Parcel) {
    let a = &parcel.attributes;
    println!("land id      : {}", a.land_id);
    println!("block code   : {}", a.block_code);
    println!("owner        : {}", a.owner_name.as_deref().unwrap_or("-"));
    println!("former owner : {}", a.former_owner.as_deref().unwrap_or("-"));
    println!("tenure       : {}", a.tenure_type.as_deref().unwrap_or("-"));
    let address = a.full_address();
    println!(
        "address      : {}",
        if address.is_empty() { "-" } else { &address }
    );
    println!("document area: {}", format_document_area(a.document_area));
    println!("surveyed area: {}", format_document_area(a.surveyed_area));
    println!("price (m²)   : {}", format_currency(a.price_per_metre));
    println!("price (total): {}", format_currency(a.price_total));

    if let Some(extent) = bounding_box(&parcel.geometry) {
        println!(
            "extent       : {:.6},{:.6} to {:.6},{:.6}",
            extent.min().x,
            extent.min().y,
            extent.max().x,
            extent.max().y
        );
    }
}

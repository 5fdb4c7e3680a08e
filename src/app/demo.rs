use crate::adapters::ScriptedFieldSupplier;
use crate::core::registry::AgencyRegistry;
use crate::utils::error::Result;
use std::io::Write;

/// Registers one newspaper and one radio station, prints the table, updates a
/// field on each and prints it again.
pub fn run_demo<W: Write>(out: &mut W) -> Result<AgencyRegistry> {
    let mut registry = AgencyRegistry::new();

    registry.register_new_agency(
        "PrintNews",
        "News",
        "12345",
        "CityA",
        "Print Media",
        ScriptedFieldSupplier::new(["Daily", "10000"]),
    )?;
    registry.register_new_agency(
        "RadioWave",
        "Music",
        "67890",
        "CityB",
        "Radio Station",
        ScriptedFieldSupplier::new(["FM", "101.5"]),
    )?;

    registry.display_all(out)?;

    registry.update_field("PrintNews", "Print Media", "Circulation", "15000")?;
    registry.update_field("RadioWave", "Radio Station", "Frequency Range", "AM")?;

    registry.display_all(out)?;

    Ok(registry)
}

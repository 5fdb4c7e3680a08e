use anyhow::Result;
use media_registry::app::demo::run_demo;
use media_registry::app::shell::Shell;
use media_registry::AgencyRegistry;
use std::io::Cursor;

const BEFORE: &str = "\
Print Media Agency Information:
Name: PrintNews
Profile: News
License Number: 12345
Location: CityA
Periodicity: Daily
Circulation: 10000

Radio Station Agency Information:
Name: RadioWave
Profile: Music
License Number: 67890
Location: CityB
Frequency Range: FM
Frequency: 101.5

";

const AFTER: &str = "\
Print Media Agency Information:
Name: PrintNews
Profile: News
License Number: 12345
Location: CityA
Periodicity: Daily
Circulation: 15000

Radio Station Agency Information:
Name: RadioWave
Profile: Music
License Number: 67890
Location: CityB
Frequency Range: AM
Frequency: 101.5

";

#[test]
fn test_demo_prints_table_before_and_after_updates() -> Result<()> {
    let mut out = Vec::new();
    let registry = run_demo(&mut out)?;

    assert_eq!(String::from_utf8(out)?, format!("{}{}", BEFORE, AFTER));
    assert_eq!(registry.names(), vec!["PrintNews", "RadioWave"]);
    Ok(())
}

#[test]
fn test_same_scenario_through_the_shell() -> Result<()> {
    let script = "\
register
PrintNews
News
12345
CityA
Print Media
Daily
10000
register
RadioWave
Music
67890
CityB
Radio Station
FM
101.5
update
PrintNews
Print Media
Circulation
15000
update
RadioWave
Radio Station
Frequency Range
AM
list
quit
";
    let mut registry = AgencyRegistry::new();
    let mut shell = Shell::new(Cursor::new(script), Vec::new(), Vec::new());
    shell.run(&mut registry)?;

    let (out, err) = shell.into_writers();
    let out = String::from_utf8(out)?;
    assert!(err.is_empty());
    assert!(out.ends_with(&format!("{}> ", AFTER)));

    let mut direct = Vec::new();
    registry.display_all(&mut direct)?;
    assert_eq!(String::from_utf8(direct)?, AFTER);
    Ok(())
}

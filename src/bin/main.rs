use addr_core::{all_formats, AddressComponents, BuildingType};
use crossterm::style::Stylize;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

const USAGE: &str =
    "usage: addr_formats <components.json | -> [premise_number] [building_type] [plain_address]";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(source) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let payload = match read_payload(source) {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("{} cannot read {source}: {err}", "error:".red());
            return ExitCode::FAILURE;
        }
    };

    let components = match AddressComponents::from_json(&payload) {
        Ok(components) => components,
        Err(err) => {
            eprintln!("{} {err}", "error:".red());
            return ExitCode::FAILURE;
        }
    };

    let premise_number = args.get(1).map(String::as_str);
    let building_type = args.get(2).map(|raw| BuildingType::from(raw.as_str()));
    let plain_address = args.get(3).map(String::as_str).unwrap_or("");

    let formats = all_formats(plain_address, Some(&components), premise_number, building_type);

    println!("{}", "Address formats".bold());
    println!("{} {}", "all:".dark_grey(), formats.all);
    println!("{} {}", "street_only:".dark_grey(), formats.street_only);
    println!(
        "{} {}",
        "finishing_with_village:".dark_grey(),
        formats.finishing_with_village
    );
    println!(
        "{} {}",
        "starting_with_street:".dark_grey(),
        formats.starting_with_street
    );
    println!(
        "{} {}",
        "finishing_with_street:".dark_grey(),
        formats.finishing_with_street
    );

    ExitCode::SUCCESS
}

fn read_payload(source: &str) -> io::Result<String> {
    if source == "-" {
        let mut payload = String::new();
        io::stdin().read_to_string(&mut payload)?;
        Ok(payload)
    } else {
        fs::read_to_string(source)
    }
}

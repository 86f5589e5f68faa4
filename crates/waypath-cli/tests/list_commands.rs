use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;

fn fixture_vehicles() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/vehicles.csv")
        .canonicalize()
        .expect("vehicle fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("waypath-cli");
    cmd.env("RUST_LOG", "error")
        .env_remove("WAYPATH_NETWORK")
        .env_remove("WAYPATH_VEHICLES")
        .arg("--no-color");
    cmd
}

#[test]
fn lists_reference_locations() {
    let mut cmd = cli();
    cmd.arg("locations");

    cmd.assert()
        .success()
        .stdout(contains("Locations (16):"))
        .stdout(contains(" - Hyderabad"))
        .stdout(contains(" - Amaravati"));
}

#[test]
fn lists_builtin_vehicles() {
    let mut cmd = cli();
    cmd.arg("vehicles");

    cmd.assert()
        .success()
        .stdout(contains("Available vehicles (3):"))
        .stdout(contains("Car"))
        .stdout(contains("60.0"))
        .stdout(contains("Bus"))
        .stdout(contains("40.0"));
}

#[test]
fn lists_vehicles_from_catalog_file() {
    let mut cmd = cli();
    cmd.arg("--vehicles").arg(fixture_vehicles()).arg("vehicles");

    cmd.assert()
        .success()
        .stdout(contains("Available vehicles (4):"))
        .stdout(contains("Truck"))
        .stdout(contains("45.0"));
}

#[test]
fn custom_vehicle_is_routable() {
    let mut cmd = cli();
    cmd.arg("--vehicles")
        .arg(fixture_vehicles())
        .args(["--conditions", "1", "--format", "basic"])
        .args(["route", "--from", "Hyderabad", "--to", "Warangal", "--vehicle", "truck"]);

    cmd.assert()
        .success()
        .stdout(contains("140.00 km, 3.11 hours, ₹280.00"));
}

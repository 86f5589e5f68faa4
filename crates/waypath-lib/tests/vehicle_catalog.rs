mod common;

use common::{fixtures_dir, write_temp_csv};
use waypath_lib::{Error, VehicleCatalog};

#[test]
fn fixture_catalog_loads_with_header_synonyms() {
    let path = fixtures_dir().join("vehicles.csv");
    let catalog = VehicleCatalog::from_path(&path).expect("fixture loads");
    assert_eq!(catalog.vehicle_names(), vec!["Car", "Bike", "Bus", "Truck"]);
    assert_eq!(catalog.lookup("truck").unwrap().speed_kmh, 45.0);
    assert_eq!(catalog.source_path(), Some(path.as_path()));
}

#[test]
fn duplicate_vehicle_is_rejected() {
    let (_dir, path) = write_temp_csv("dup.csv", "name,speed_kmh\nCar,60\ncar,70\n");
    let err = VehicleCatalog::from_path(&path).expect_err("duplicate");
    assert!(matches!(err, Error::DuplicateVehicle { ref name } if name == "car"));
}

#[test]
fn zero_speed_is_rejected() {
    let csv = "name,speed_kmh\nSnail,0\n";
    let err = VehicleCatalog::from_reader(csv.as_bytes()).expect_err("zero speed");
    assert!(matches!(err, Error::VehicleData { .. }));
}

#[test]
fn missing_speed_column_is_reported() {
    let csv = "name,colour\nCar,red\n";
    let err = VehicleCatalog::from_reader(csv.as_bytes()).expect_err("no speed column");
    assert!(err.to_string().contains("speed_kmh"), "got {err}");
}

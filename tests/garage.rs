//! Integration tests for the record store.

use std::fs;
use std::path::PathBuf;

use paddock::error::Error;
use paddock::store::Garage;
use tempfile::TempDir;

fn garage_path(dir: &TempDir) -> PathBuf {
    dir.path().join("garage.csv")
}

#[test]
fn generated_ids_are_unique_per_collection() {
    let dir = TempDir::new().unwrap();
    let mut garage = Garage::open(garage_path(&dir)).unwrap();

    // Interleave creates across all three kinds
    for i in 0..5 {
        garage.add_kart(&format!("Kart {i}")).unwrap();
        garage.add_track(&format!("Track {i}"), 300.0 + f64::from(i), "").unwrap();
        garage.add_part(&format!("Chain {i}"), "", "Chain").unwrap();
    }

    let mut kart_ids: Vec<u64> = garage.karts().iter().map(|k| k.id).collect();
    kart_ids.dedup();
    assert_eq!(kart_ids.len(), 5);

    let mut track_ids: Vec<u64> = garage.tracks().iter().map(|t| t.id).collect();
    track_ids.dedup();
    assert_eq!(track_ids.len(), 5);

    let mut part_ids: Vec<String> = garage.parts().iter().map(|p| p.id.clone()).collect();
    part_ids.sort();
    part_ids.dedup();
    assert_eq!(part_ids.len(), 5);

    assert_eq!(garage.counter(), 15);
}

#[test]
fn save_then_load_reproduces_the_store() {
    let dir = TempDir::new().unwrap();
    let path = garage_path(&dir);

    let mut garage = Garage::open(&path).unwrap();
    let kart = garage.add_kart("Red Kart").unwrap();
    let track = garage.add_track("Oval", 400.0, "paved").unwrap();
    let part = garage.add_part("Chain", "520 pitch", "Chain").unwrap();
    garage.mount_part(kart.id, &part.id).unwrap();
    garage.add_kart_mileage(kart.id, 12.5).unwrap();

    let reloaded = Garage::open(&path).unwrap();
    assert_eq!(reloaded.counter(), garage.counter());
    assert_eq!(reloaded.karts(), garage.karts());
    assert_eq!(reloaded.parts(), garage.parts());
    assert_eq!(reloaded.tracks(), garage.tracks());
    assert_eq!(reloaded.track(track.id).unwrap().details, "paved");
}

#[test]
fn kart_mileage_propagates_to_mounted_parts_only() {
    let dir = TempDir::new().unwrap();
    let mut garage = Garage::open(garage_path(&dir)).unwrap();

    let kart = garage.add_kart("Red Kart").unwrap();
    let mounted = garage.add_part("Chain", "", "Chain").unwrap();
    let shelf = garage.add_part("Spare Chain", "", "Chain").unwrap();
    garage.mount_part(kart.id, &mounted.id).unwrap();

    garage.add_kart_mileage(kart.id, 7.5).unwrap();

    assert_eq!(garage.kart(kart.id).unwrap().mileage, 7.5);
    assert_eq!(garage.part(&mounted.id).unwrap().mileage, 7.5);
    assert_eq!(garage.part(&shelf.id).unwrap().mileage, 0.0);
}

#[test]
fn part_mileage_is_independent_of_kart() {
    let dir = TempDir::new().unwrap();
    let mut garage = Garage::open(garage_path(&dir)).unwrap();

    let kart = garage.add_kart("Red Kart").unwrap();
    let part = garage.add_part("Tyres", "slicks", "Tyres").unwrap();
    garage.mount_part(kart.id, &part.id).unwrap();

    garage.add_part_mileage(&part.id, 3.0).unwrap();

    assert_eq!(garage.part(&part.id).unwrap().mileage, 3.0);
    assert_eq!(garage.kart(kart.id).unwrap().mileage, 0.0);
}

#[test]
fn unmount_then_mount_restores_assignment() {
    let dir = TempDir::new().unwrap();
    let mut garage = Garage::open(garage_path(&dir)).unwrap();

    let kart = garage.add_kart("Red Kart").unwrap();
    let part = garage.add_part("Clutch", "", "Clutch").unwrap();
    garage.mount_part(kart.id, &part.id).unwrap();
    let before = garage.part(&part.id).unwrap().kart_id;

    garage.unmount_part(&part.id).unwrap();
    assert_eq!(garage.part(&part.id).unwrap().kart_id, None);

    garage.mount_part(kart.id, &part.id).unwrap();
    assert_eq!(garage.part(&part.id).unwrap().kart_id, before);
}

#[test]
fn worked_example_from_empty_file() {
    let dir = TempDir::new().unwrap();
    let mut garage = Garage::open(garage_path(&dir)).unwrap();

    let kart = garage.add_kart("Red Kart").unwrap();
    garage.add_track("Oval", 400.0, "paved").unwrap();
    let part = garage.add_part("Chain", "520 pitch", "Chain").unwrap();
    garage.mount_part(kart.id, &part.id).unwrap();
    garage.add_kart_mileage(kart.id, 10.0).unwrap();

    assert_eq!(garage.kart(kart.id).unwrap().mileage, 10.0);
    let part = garage.part(&part.id).unwrap();
    assert_eq!(part.mileage, 10.0);
    assert_eq!(part.kart_id, Some(kart.id));
}

#[test]
fn unknown_part_type_aborts_add() {
    let dir = TempDir::new().unwrap();
    let path = garage_path(&dir);
    let mut garage = Garage::open(&path).unwrap();

    garage.add_kart("Red Kart").unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let err = garage.add_part("Mystery", "", "Flux Capacitor").unwrap_err();
    assert!(matches!(err, Error::UnknownPartType { .. }));

    // Nothing committed: no part, no counter advance, file untouched
    assert!(garage.parts().is_empty());
    assert_eq!(garage.counter(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn part_ids_stay_eight_chars_at_the_sequence_boundary() {
    let dir = TempDir::new().unwrap();
    let path = garage_path(&dir);

    // Karts and tracks advance the shared counter too, so a long-lived
    // garage can reach the edge of the 4-digit sequence space.
    fs::write(
        &path,
        "id,name,type,details,mileage,kart_id\n00009998,,util,,0,\n",
    )
    .unwrap();

    let mut garage = Garage::open(&path).unwrap();

    // The last sequence number still fits the 4-digit field
    let last = garage.add_part("Chain", "", "Chain").unwrap();
    assert_eq!(last.id.len(), 8);
    assert_eq!(last.id, "00049999");

    // One past it must abort instead of emitting a 9-character id
    let before = fs::read_to_string(&path).unwrap();
    let err = garage.add_part("Chain", "", "Chain").unwrap_err();
    assert!(matches!(err, Error::PartIdsExhausted { counter: 9999 }));
    assert_eq!(garage.parts().len(), 1);
    assert_eq!(garage.counter(), 9999);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);

    // Karts are counter-derived, not width-bound, so they keep working
    assert!(garage.add_kart("Red Kart").is_ok());
}

#[test]
fn remove_kart_unassigns_parts() {
    let dir = TempDir::new().unwrap();
    let path = garage_path(&dir);
    let mut garage = Garage::open(&path).unwrap();

    let kart = garage.add_kart("Red Kart").unwrap();
    let part = garage.add_part("Axle", "40mm", "Axle").unwrap();
    garage.mount_part(kart.id, &part.id).unwrap();

    garage.remove_kart(kart.id).unwrap();

    assert_eq!(garage.part(&part.id).unwrap().kart_id, None);

    // The cascade is persisted, not just in memory
    let reloaded = Garage::open(&path).unwrap();
    assert_eq!(reloaded.part(&part.id).unwrap().kart_id, None);
}

#[test]
fn counter_survives_reload_so_ids_are_never_reused() {
    let dir = TempDir::new().unwrap();
    let path = garage_path(&dir);

    let mut garage = Garage::open(&path).unwrap();
    let first = garage.add_kart("First").unwrap();
    garage.remove_kart(first.id).unwrap();

    let mut reloaded = Garage::open(&path).unwrap();
    let second = reloaded.add_kart("Second").unwrap();

    assert_ne!(second.id, first.id);
    assert!(second.id > first.id);
}

#[test]
fn load_tolerates_handwritten_rows() {
    let dir = TempDir::new().unwrap();
    let path = garage_path(&dir);

    // Older files: part row missing the details field, no util row,
    // and a row kind this version does not know about.
    fs::write(
        &path,
        "id,name,type,details,mileage,kart_id\n\
         00040001,Chain,part\n\
         1,Red Kart,kart,,25,1\n\
         9,Someone,driver,,0,\n",
    )
    .unwrap();

    let garage = Garage::open(&path).unwrap();
    assert_eq!(garage.counter(), 0);
    assert_eq!(garage.parts().len(), 1);
    assert_eq!(garage.parts()[0].details, "");
    assert_eq!(garage.karts().len(), 1);
    assert_eq!(garage.karts()[0].mileage, 25.0);
}

#[test]
fn load_rejects_malformed_mileage() {
    let dir = TempDir::new().unwrap();
    let path = garage_path(&dir);

    fs::write(
        &path,
        "id,name,type,details,mileage,kart_id\n1,Red Kart,kart,,not-a-number,1\n",
    )
    .unwrap();

    let err = Garage::open(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedRow { line: 2, .. }));
}

#[test]
fn log_laps_converts_track_length() {
    let dir = TempDir::new().unwrap();
    let mut garage = Garage::open(garage_path(&dir)).unwrap();

    let kart = garage.add_kart("Red Kart").unwrap();
    let track = garage.add_track("Oval", 0.4, "").unwrap();
    let part = garage.add_part("Engine", "IAME X30", "Engine").unwrap();
    garage.mount_part(kart.id, &part.id).unwrap();

    let delta = garage.log_laps(kart.id, track.id, 25.0).unwrap();

    assert_eq!(delta, 10.0);
    assert_eq!(garage.kart(kart.id).unwrap().mileage, 10.0);
    assert_eq!(garage.part(&part.id).unwrap().mileage, 10.0);
}

#[test]
fn mount_requires_existing_kart_and_part() {
    let dir = TempDir::new().unwrap();
    let mut garage = Garage::open(garage_path(&dir)).unwrap();

    let kart = garage.add_kart("Red Kart").unwrap();
    let part = garage.add_part("Seat", "", "Seat").unwrap();

    assert!(matches!(
        garage.mount_part(99, &part.id),
        Err(Error::KartNotFound { id: 99 })
    ));
    assert!(matches!(
        garage.mount_part(kart.id, "00110099"),
        Err(Error::PartNotFound { .. })
    ));

    // The failed attempts changed nothing
    assert_eq!(garage.part(&part.id).unwrap().kart_id, None);
}

#[test]
fn remounting_moves_a_part_between_karts() {
    let dir = TempDir::new().unwrap();
    let mut garage = Garage::open(garage_path(&dir)).unwrap();

    let red = garage.add_kart("Red").unwrap();
    let blue = garage.add_kart("Blue").unwrap();
    let part = garage.add_part("Engine", "", "Engine").unwrap();

    garage.mount_part(red.id, &part.id).unwrap();
    garage.mount_part(blue.id, &part.id).unwrap();

    assert_eq!(garage.part(&part.id).unwrap().kart_id, Some(blue.id));
    assert!(garage.parts_on(red.id).is_empty());
    assert_eq!(garage.parts_on(blue.id).len(), 1);
}

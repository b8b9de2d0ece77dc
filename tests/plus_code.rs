use pluscode::{decode, encode, is_full, is_short, is_valid, recover_nearest, shorten};

#[test]
fn seed_scenarios_encode_and_decode() {
    let cases = [
        (20.375, 2.775, 6usize, "7FG49Q00+"),
        (47.0000625, 8.0000625, 11, "8FVC2222+235"),
    ];

    let failures: Vec<_> = cases
        .iter()
        .filter_map(|&(lat, lng, len, expected)| {
            let actual = encode(lat, lng, len).unwrap();
            (actual != expected).then(|| format!("encode({lat}, {lng}, {len}) = {actual}, expected {expected}"))
        })
        .collect();

    assert_eq!(failures, Vec::<String>::new());
}

#[test]
fn decode_seed_scenario_one_matches_published_bounds() {
    let area = decode("7FG49Q00+").unwrap();
    assert!((area.lat_lo - 20.35).abs() < 1e-9);
    assert!((area.lng_lo - 2.75).abs() < 1e-9);
    assert!((area.lat_hi - 20.4).abs() < 1e-9);
    assert!((area.lng_hi - 2.8).abs() < 1e-9);
    assert_eq!(area.code_length, 6);
}

#[test]
fn shorten_and_recover_round_trip_seed_scenario_three() {
    let short = shorten("9C3W9QCJ+2VX", 51.3701125, -1.217765625).unwrap();
    assert_eq!(short, "CJ+2VX");

    let full = recover_nearest(&short, 51.3701125, -1.217765625).unwrap();
    assert_eq!(full, "9C3W9QCJ+2VX");
}

#[test]
fn validator_partition_holds_across_a_sample_of_codes() {
    let codes = [
        "9C3W9QCJ+2VX",
        "CJ+2VX",
        "8FWC2345+G",
        "8FWC2345+",
        "00000000+",
        "not a code",
        "CFX30000+",
    ];

    let violations: Vec<_> = codes
        .iter()
        .filter(|&&code| {
            let short = is_short(code);
            let full = is_full(code);
            let valid = is_valid(code);
            (short && full) || ((short || full) && !valid)
        })
        .collect();

    assert_eq!(violations, Vec::<&&str>::new());
}

#[test]
fn round_trip_holds_for_every_legal_length_across_a_coordinate_grid() {
    let lengths = [2usize, 4, 6, 8, 10, 11, 12, 14];
    let points = [
        (20.375, 2.775),
        (51.3701125, -1.217765625),
        (-33.8, 151.2),
        (0.0, 0.0),
        (-90.0, 0.0),
        (45.0, 179.999),
    ];

    let mut failures = Vec::new();
    for &len in &lengths {
        for &(lat, lng) in &points {
            let code = encode(lat, lng, len).unwrap();
            let area = decode(&code).unwrap();

            let clipped_lat = lat.clamp(-90.0, 90.0);
            let within_lat = area.lat_lo - 1e-9 <= clipped_lat && clipped_lat <= area.lat_hi + 1e-9;
            if !within_lat && (clipped_lat - 90.0).abs() > 1e-9 {
                failures.push(format!("lat {lat} len {len} escaped cell [{}, {}]", area.lat_lo, area.lat_hi));
            }
        }
    }

    assert_eq!(failures, Vec::<String>::new());
}

#[test]
fn longitude_wraps_on_full_turns_for_every_legal_length() {
    let lengths = [2usize, 6, 10, 12];

    let mismatches: Vec<_> = lengths
        .iter()
        .filter(|&&len| encode(12.3, 45.6, len).unwrap() != encode(12.3, 45.6 + 360.0, len).unwrap())
        .collect();

    assert_eq!(mismatches, Vec::<&usize>::new());
}

#[test]
fn north_pole_never_decodes_past_ninety() {
    let code = encode(90.0, 0.0, 10).unwrap();
    let area = decode(&code).unwrap();
    assert!(area.lat_hi <= 90.0);
}

#[test]
fn recovery_near_the_pole_never_exceeds_ninety() {
    let full = recover_nearest("22+", 89.6, 0.0).unwrap();
    let area = decode(&full).unwrap();
    assert!(area.lat_center() <= 90.0);
}

#[test]
fn recovery_round_trips_for_every_reference_within_half_a_cell() {
    let code = encode(51.3701125, -1.217765625, 10).unwrap();
    let area = decode(&code).unwrap();
    let short = shorten(&code, area.lat_center(), area.lng_center()).unwrap();

    let offsets = [-0.4, -0.1, 0.0, 0.1, 0.4];
    let failures: Vec<_> = offsets
        .iter()
        .flat_map(|&dlat| offsets.iter().map(move |&dlng| (dlat, dlng)))
        .filter_map(|(dlat, dlng)| {
            let ref_lat = area.lat_center() + (area.lat_hi - area.lat_lo) * dlat;
            let ref_lng = area.lng_center() + (area.lng_hi - area.lng_lo) * dlng;
            let recovered = recover_nearest(&short, ref_lat, ref_lng).unwrap();
            (recovered != code).then(|| format!("reference offset ({dlat}, {dlng}) recovered {recovered}, expected {code}"))
        })
        .collect();

    assert_eq!(failures, Vec::<String>::new());
}

use tests::{
    models::{Device, Status},
    *,
};

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn device_round_trip(s: impl Setup) {
    let db = s.setup(models!(Device));
    assert_ok!(db.create_table::<Device>());

    let device = Device {
        status: Status::Online,
        active: true,
        score: 0.25,
        seen_at: Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 58).unwrap(),
        firmware: Some(vec![0, 1, 2, 254, 255]),
        ..Device::new("sensor")
    };
    assert_ok!(db.insert(&device));

    let loaded = assert_ok!(db.first_where::<Device>(Device::ID.eq(device.id))).unwrap();
    assert_eq!(loaded, device);
}

fn date_time_is_stored_to_the_second(s: impl Setup) {
    let db = s.setup(models!(Device));
    assert_ok!(db.create_table::<Device>());

    let seen_at = Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap();
    let device = Device {
        seen_at: seen_at + chrono::Duration::milliseconds(750),
        ..Device::new("clock")
    };
    assert_ok!(db.insert(&device));

    let loaded = assert_ok!(db.select_all::<Device>());
    assert_eq!(loaded[0].seen_at, seen_at);
}

fn filter_by_each_type(s: impl Setup) {
    let db = s.setup(models!(Device));
    assert_ok!(db.create_table::<Device>());

    let online = Device {
        status: Status::Online,
        active: true,
        score: 9.5,
        seen_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ..Device::new("online")
    };
    let retired = Device {
        status: Status::Retired,
        score: 1.0,
        seen_at: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        ..Device::new("retired")
    };
    assert_ok!(db.insert_many(&[online.clone(), retired.clone()]));

    let label = |filter: sqlactive::Expr<bool>| -> Vec<String> {
        assert_ok!(db.select_where::<Device>(filter))
            .into_iter()
            .map(|device| device.label)
            .collect()
    };

    assert_eq!(label(Device::ID.eq(retired.id)), ["retired"]);
    assert_eq!(label(Device::STATUS.eq(Status::Online)), ["online"]);
    assert_eq!(label(Device::STATUS.ne(Status::Offline)), ["online", "retired"]);
    assert_eq!(label(Device::ACTIVE.eq(true)), ["online"]);
    assert_eq!(label(Device::SCORE.lt(5.0)), ["retired"]);
    assert_eq!(
        label(Device::SEEN_AT.ge(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap())),
        ["online"]
    );
}

fn unknown_enum_discriminant_is_rejected(s: impl Setup) {
    let db = s.setup(models!(Device));
    assert_ok!(db.create_table::<Device>());

    let mut device = Device::new("sensor");
    assert_ok!(db.insert(&device));

    // Integers converted to the enum must name a declared variant
    let retired = sqlactive::Expr::<i64>::from_value(2_i64.into()).convert::<Status>();
    assert!(assert_ok!(db.select_where::<Device>(Device::STATUS.eq(retired))).is_empty());

    let unknown = sqlactive::Expr::<i64>::from_value(7_i64.into()).convert::<Status>();
    let err = assert_err!(db.select_where::<Device>(Device::STATUS.eq(unknown)));
    assert!(err.is_type_conversion(), "{err}");

    device.label = "renamed".to_string();
    assert!(assert_ok!(db.update(&device)));
    assert_eq!(assert_ok!(db.select_all::<Device>())[0].label, "renamed");
}

tests!(
    device_round_trip,
    date_time_is_stored_to_the_second,
    filter_by_each_type,
    unknown_enum_discriminant_is_rejected,
);

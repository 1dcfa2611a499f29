use tests::{
    models::{Device, Note, User},
    *,
};

use pretty_assertions::assert_eq;

fn null_on_not_null_column_fails_before_sql(s: impl Setup) {
    let db = s.setup(models!(Note));

    // The table does not exist: a statement reaching the store would fail
    // with a backend error instead.
    let err = assert_err!(db.insert(&Note {
        body: Some("draft".to_string()),
        ..Note::default()
    }));
    assert!(err.is_null_constraint(), "{err}");
    assert_eq!(
        err.to_string(),
        "null is not allowed for column `Title` in table `Note`"
    );
}

fn nullable_column_accepts_null(s: impl Setup) {
    let db = s.setup(models!(Note));
    assert_ok!(db.create_table::<Note>());

    let id = assert_ok!(db.insert(&Note {
        title: Some("todo".to_string()),
        ..Note::default()
    }));

    let note = assert_ok!(db.first_where::<Note>(Note::BODY.is_null())).unwrap();
    assert_eq!(
        note,
        Note {
            id,
            title: Some("todo".to_string()),
            body: None,
        }
    );

    assert!(assert_ok!(db.first_where::<Note>(Note::BODY.is_not_null())).is_none());
}

fn update_and_delete_require_a_key(s: impl Setup) {
    let db = s.setup(models!(User));

    let user = User::new("Alice", 20);

    let err = assert_err!(db.update(&user));
    assert!(err.is_missing_primary_key(), "{err}");

    let err = assert_err!(db.delete(&user));
    assert!(err.is_missing_primary_key(), "{err}");
}

fn nil_identifier_is_a_null_key(s: impl Setup) {
    let db = s.setup(models!(Device));
    assert_ok!(db.create_table::<Device>());

    let device = Device {
        id: uuid::Uuid::nil(),
        ..Device::new("sensor")
    };

    let err = assert_err!(db.insert(&device));
    assert!(err.is_null_constraint(), "{err}");

    let err = assert_err!(db.delete(&device));
    assert!(err.is_missing_primary_key(), "{err}");
}

fn duplicate_key_is_a_backend_error(s: impl Setup) {
    let db = s.setup(models!(Device));
    assert_ok!(db.create_table::<Device>());

    let device = Device::new("sensor");
    assert_ok!(db.insert(&device));

    let err = assert_err!(db.insert(&device));
    assert!(err.is_backend_execution(), "{err}");
    assert!(err.sql().unwrap().starts_with("INSERT INTO Devices"));
}

fn insert_many_rejects_empty_input(s: impl Setup) {
    let db = s.setup(models!(User));
    assert_ok!(db.create_table::<User>());

    let err = assert_err!(db.insert_many::<User>(&[]));
    assert!(err.is_invalid_model(), "{err}");
}

fn insert_many_rolls_back_on_failure(s: impl Setup) {
    let db = s.setup(models!(Device));
    assert_ok!(db.create_table::<Device>());

    let first = Device::new("first");
    let err = assert_err!(db.insert_many(&[first.clone(), Device::new("second"), first]));
    assert!(err.is_backend_execution(), "{err}");

    assert!(assert_ok!(db.select_all::<Device>()).is_empty());
}

fn insert_many_without_transaction_keeps_prefix(s: impl Setup) {
    let mut builder = models!(Device);
    builder.atomic_batches(false);
    let db = s.setup(builder);
    assert_ok!(db.create_table::<Device>());

    let first = Device::new("first");
    let second = Device::new("second");
    let err = assert_err!(db.insert_many(&[
        first.clone(),
        second.clone(),
        first.clone(),
        Device::new("never"),
    ]));
    assert!(err.is_backend_execution(), "{err}");

    let labels: Vec<_> = assert_ok!(db.select_all::<Device>())
        .into_iter()
        .map(|device| device.label)
        .collect();
    assert_eq!(labels, ["first", "second"]);
}

fn insert_many_without_transaction_keeps_prefix_before_invalid_record(s: impl Setup) {
    let mut builder = models!(Note);
    builder.atomic_batches(false);
    let db = s.setup(builder);
    assert_ok!(db.create_table::<Note>());

    let valid = Note {
        title: Some("ok".to_string()),
        ..Note::default()
    };

    let err = assert_err!(db.insert_many(&[valid.clone(), Note::default(), valid.clone()]));
    assert!(err.is_null_constraint(), "{err}");

    let notes = assert_ok!(db.select_all::<Note>());
    assert_eq!(
        notes,
        vec![Note {
            id: 1,
            ..valid
        }]
    );
}

fn insert_many_validates_every_record_first(s: impl Setup) {
    let db = s.setup(models!(Note));
    assert_ok!(db.create_table::<Note>());

    let valid = Note {
        title: Some("ok".to_string()),
        ..Note::default()
    };

    let err = assert_err!(db.insert_many(&[valid.clone(), Note::default()]));
    assert!(err.is_null_constraint(), "{err}");

    assert!(assert_ok!(db.select_all::<Note>()).is_empty());
}

tests!(
    null_on_not_null_column_fails_before_sql,
    nullable_column_accepts_null,
    update_and_delete_require_a_key,
    nil_identifier_is_a_null_key,
    duplicate_key_is_a_backend_error,
    insert_many_rejects_empty_input,
    insert_many_rolls_back_on_failure,
    insert_many_without_transaction_keeps_prefix,
    insert_many_without_transaction_keeps_prefix_before_invalid_record,
    insert_many_validates_every_record_first,
);

use tests::{models::User, *};

use pretty_assertions::assert_eq;

fn crud_user(s: impl Setup) {
    let db = s.setup(models!(User));
    assert_ok!(db.create_table::<User>());

    // Creating the table twice is harmless
    assert_ok!(db.create_table::<User>());

    let alice_id = assert_ok!(db.insert(&User::new("Alice", 20)));
    let bob_id = assert_ok!(db.insert(&User::new("Bob", 15)));
    assert_eq!(alice_id, 1);
    assert_eq!(bob_id, 2);

    let users: Vec<User> = assert_ok!(db.select_all());
    assert_eq!(
        users,
        vec![
            User {
                id: 1,
                name: "Alice".to_string(),
                age: 20,
                email: String::new(),
            },
            User {
                id: 2,
                name: "Bob".to_string(),
                age: 15,
                email: String::new(),
            },
        ]
    );

    let mut bob = users[1].clone();
    bob.age = 16;
    assert!(assert_ok!(db.update(&bob)));

    let reloaded = assert_ok!(db.first_where::<User>(User::ID.eq(bob_id))).unwrap();
    assert_eq!(reloaded, bob);

    assert!(assert_ok!(db.delete(&bob)));
    assert!(!assert_ok!(db.delete(&bob)));

    let users: Vec<User> = assert_ok!(db.select_all());
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Alice");
}

fn update_missing_row_reports_false(s: impl Setup) {
    let db = s.setup(models!(User));
    assert_ok!(db.create_table::<User>());

    let ghost = User {
        id: 42,
        ..User::new("Ghost", 99)
    };

    assert!(!assert_ok!(db.update(&ghost)));
    assert!(assert_ok!(db.select_all::<User>()).is_empty());
}

fn ignored_field_is_not_stored(s: impl Setup) {
    let db = s.setup(models!(User));
    assert_ok!(db.create_table::<User>());

    let user = User {
        email: "alice@example.com".to_string(),
        ..User::new("Alice", 20)
    };
    let id = assert_ok!(db.insert(&user));

    let loaded = assert_ok!(db.first_where::<User>(User::ID.eq(id))).unwrap();
    assert_eq!(loaded.name, "Alice");
    assert_eq!(loaded.email, "");

    // Filtering on an ignored field is rejected before reaching the store
    let err = assert_err!(db.select_where::<User>(User::EMAIL.eq("alice@example.com")));
    assert!(err.is_invalid_expression(), "{err}");
}

fn insert_many_returns_ids_in_order(s: impl Setup) {
    let db = s.setup(models!(User));
    assert_ok!(db.create_table::<User>());

    let ids = assert_ok!(db.insert_many(&[
        User::new("Alice", 20),
        User::new("Bob", 15),
        User::new("Carol", 33),
    ]));
    assert_eq!(ids, vec![1, 2, 3]);

    let names: Vec<_> = assert_ok!(db.select_all::<User>())
        .into_iter()
        .map(|user| user.name)
        .collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
}

fn drop_table(s: impl Setup) {
    let db = s.setup(models!(User));

    // Nothing to drop yet
    assert_ok!(db.drop_table_if_exists::<User>());
    let err = assert_err!(db.drop_table::<User>());
    assert!(err.is_backend_execution(), "{err}");
    assert_eq!(err.sql(), Some("DROP TABLE Users;"));

    assert_ok!(db.create_table::<User>());
    assert_ok!(db.insert(&User::new("Alice", 20)));
    assert_ok!(db.drop_table::<User>());

    let err = assert_err!(db.select_all::<User>());
    assert!(err.is_backend_execution(), "{err}");
}

tests!(
    crud_user,
    update_missing_row_reports_false,
    ignored_field_is_not_stored,
    insert_many_returns_ids_in_order,
    drop_table,
);

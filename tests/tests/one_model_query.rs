use tests::{models::User, *};

use pretty_assertions::assert_eq;
use sqlactive::raw::{stmt::Value, Serializer};

fn seed(db: &Db) {
    assert_ok!(db.create_table::<User>());
    assert_ok!(db.insert_many(&[User::new("Alice", 20), User::new("Bob", 15)]));
}

fn adults_with_a_name(s: impl Setup) {
    let db = s.setup(models!(User));
    seed(&db);

    let filter = User::AGE.gt(18).and(User::NAME.ne(None::<String>));

    let stmt = assert_ok!(db.select_statement::<User>(filter.clone()));
    let mut params: Vec<Value> = vec![];
    let sql = Serializer::new().serialize(&stmt, &mut params);
    assert_eq!(
        sql,
        "SELECT * FROM Users WHERE ((age > 18) and (name is not ?));"
    );
    assert_eq!(params, vec![Value::Null]);

    let users: Vec<User> = assert_ok!(db.select_where(filter));
    assert_eq!(
        users,
        vec![User {
            id: 1,
            name: "Alice".to_string(),
            age: 20,
            email: String::new(),
        }]
    );
}

fn parameterized_literals_select_the_same_rows(s: impl Setup) {
    let mut builder = models!(User);
    builder.inline_literals(false);
    let db = s.setup(builder);
    seed(&db);

    let filter = User::AGE.ge(15).and(User::NAME.eq("Bob"));

    let stmt = assert_ok!(db.select_statement::<User>(filter.clone()));
    let mut params: Vec<Value> = vec![];
    let sql = Serializer::new().serialize(&stmt, &mut params);
    assert_eq!(sql, "SELECT * FROM Users WHERE ((age >= ?) and (name = ?));");
    assert_eq!(params, vec![Value::I32(15), Value::from("Bob")]);

    let users: Vec<User> = assert_ok!(db.select_where(filter));
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Bob");
}

fn string_methods(s: impl Setup) {
    let db = s.setup(models!(User));
    assert_ok!(db.create_table::<User>());
    assert_ok!(db.insert_many(&[
        User::new("Alice", 20),
        User::new("Alicia", 31),
        User::new("Malice", 44),
        User::new("Bob", 15),
    ]));

    let names = |filter: sqlactive::Expr<bool>| -> Vec<String> {
        assert_ok!(db.select_where::<User>(filter))
            .into_iter()
            .map(|user| user.name)
            .collect()
    };

    assert_eq!(names(User::NAME.contains("lic")), ["Alice", "Alicia", "Malice"]);
    assert_eq!(names(User::NAME.starts_with("Ali")), ["Alice", "Alicia"]);
    assert_eq!(names(User::NAME.ends_with("ice")), ["Alice", "Malice"]);
    assert_eq!(names(User::NAME.like("_ob")), ["Bob"]);
    assert_eq!(names(User::NAME.equals("Bob")), ["Bob"]);
    assert!(names(User::NAME.contains("zzz")).is_empty());
}

fn or_and_captured_values(s: impl Setup) {
    let db = s.setup(models!(User));
    seed(&db);

    let min_age = 30;
    let filter = User::AGE
        .gt(sqlactive::Expr::captured("min_age", min_age))
        .or(User::NAME.eq("Bob"));

    let users: Vec<User> = assert_ok!(db.select_where(filter));
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Bob");
}

fn first_where_without_match(s: impl Setup) {
    let db = s.setup(models!(User));
    seed(&db);

    let user = assert_ok!(db.first_where::<User>(User::AGE.gt(100)));
    assert_eq!(user, None);

    let user = assert_ok!(db.first_where::<User>(User::AGE.lt(18))).unwrap();
    assert_eq!(user.name, "Bob");
}

fn null_ordering_is_rejected(s: impl Setup) {
    let db = s.setup(models!(User));
    seed(&db);

    let err = assert_err!(db.select_where::<User>(User::NAME.gt(None::<String>)));
    assert!(err.is_null_comparison(), "{err}");
}

tests!(
    adults_with_a_name,
    parameterized_literals_select_the_same_rows,
    string_methods,
    or_and_captured_values,
    first_where_without_match,
    null_ordering_is_rejected,
);

use tests::{models::User, *};

use pretty_assertions::assert_eq;
use std::{
    sync::{Arc, Mutex},
    thread,
};

#[test]
fn clones_share_the_statement_lock() {
    let s = SetupSqliteFile::new();
    let db = s.setup(models!(User));
    assert_ok!(db.create_table::<User>());

    thread::scope(|scope| {
        for worker in 0..4 {
            let db = db.clone();
            scope.spawn(move || {
                for i in 0..25 {
                    assert_ok!(db.insert(&User::new(&format!("worker-{worker}-{i}"), i)));
                }
            });
        }
    });

    let users = assert_ok!(db.select_all::<User>());
    assert_eq!(users.len(), 100);

    let mut ids: Vec<_> = users.iter().map(|user| user.id).collect();
    ids.sort();
    assert_eq!(ids, (1..=100).collect::<Vec<_>>());
}

#[test]
fn engines_with_an_injected_lock_serialize_writes() {
    let s = SetupSqliteFile::new();
    let lock = Arc::new(Mutex::new(()));

    let engines: Vec<Db> = (0..3)
        .map(|_| {
            let mut builder = models!(User);
            builder.lock(lock.clone());
            s.setup(builder)
        })
        .collect();

    assert_ok!(engines[0].create_table::<User>());

    thread::scope(|scope| {
        for (n, db) in engines.iter().enumerate() {
            scope.spawn(move || {
                let batch: Vec<_> = (0..10)
                    .map(|i| User::new(&format!("engine-{n}-{i}"), i))
                    .collect();
                assert_ok!(db.insert_many(&batch));
            });
        }
    });

    for db in &engines {
        assert_eq!(assert_ok!(db.select_all::<User>()).len(), 30);
    }
}

#[test]
fn readers_and_writers_interleave() {
    let s = SetupSqliteFile::new();
    let db = s.setup(models!(User));
    assert_ok!(db.create_table::<User>());

    thread::scope(|scope| {
        let writer = db.clone();
        scope.spawn(move || {
            for i in 0..50 {
                assert_ok!(writer.insert(&User::new("writer", i)));
            }
        });

        let reader = db.clone();
        scope.spawn(move || {
            let mut last = 0;
            for _ in 0..50 {
                let count = assert_ok!(reader.select_all::<User>()).len();
                assert!(count >= last);
                last = count;
            }
        });
    });

    assert_eq!(assert_ok!(db.select_all::<User>()).len(), 50);
}

use super::{Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

use sqlactive_core::stmt::Value;

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(
            f, "CREATE TABLE IF NOT EXISTS " Ident(&self.table) " (" Comma(&self.columns) ")"
        );
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        fmt!(f, "DROP TABLE " if_exists Ident(&self.table));
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "INSERT INTO " Ident(&self.table));

        if self.columns.is_empty() {
            fmt!(f, " DEFAULT VALUES");
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        fmt!(f, " (" columns ") VALUES (" Comma(&self.values) ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let assignments = Comma(self.assignments.iter().map(Assignment::from));
        fmt!(
            f, "UPDATE " Ident(&self.table) " SET " assignments " WHERE " Assignment::from(&self.key)
        );
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(
            f, "DELETE FROM " Ident(&self.table) " WHERE " Assignment::from(&self.key)
        );
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "SELECT * FROM " Ident(&self.table));

        if let Some(filter) = &self.filter {
            let sql = filter.sql.as_str();
            fmt!(f, " WHERE " sql);

            // The predicate text already carries its placeholders
            for param in &filter.params {
                f.params.push(param);
            }
        }
    }
}

/// `column = ?`, used by `SET` and by primary key filters.
struct Assignment<'a> {
    column: &'a str,
    value: &'a Value,
}

impl<'a> From<&'a (String, Value)> for Assignment<'a> {
    fn from((column, value): &'a (String, Value)) -> Self {
        Assignment { column, value }
    }
}

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(self.column) " = " self.value);
    }
}

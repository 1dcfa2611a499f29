use super::{Formatter, Ident, Params, ToSql};

use crate::stmt::ColumnDef;

impl ToSql for &ColumnDef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let ty = self.ty.to_string();
        fmt!(f, Ident(&self.name) " " ty.as_str());

        for keyword in &self.keywords {
            fmt!(f, " " keyword);
        }
    }
}

use super::{Comma, Formatter, Ident, ToSql};

use crate::stmt::{CreateTable, Select, Statement};

use jsonmap_core::{
    schema::db::{Column, Table},
    stmt::Expr,
    Error, Result,
};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let name = Ident(&self.table.name);
        let columns = Comma(self.table.columns().map(ColumnDef));

        fmt!(f, "CREATE TABLE " name " (" columns ")");
        Ok(())
    }
}

struct ColumnDef<'a>(&'a Column);

impl ToSql for ColumnDef<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let name = Ident(&self.0.name);
        let ty = self.0.storage_ty.sql_name(f.serializer.dialect);

        fmt!(f, name " " ty);

        if !self.0.nullable {
            fmt!(f, " NOT NULL");
        }
        Ok(())
    }
}

impl ToSql for &Select {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let table = f.serializer.catalog.table(self.model).ok_or_else(|| {
            Error::invalid_schema(format!("model `{}` is not registered", self.model.name()))
        })?;

        let columns = Comma(table.columns().map(|column| SelectColumn(&table, column)));
        let name = Ident(&table.name);
        let alias = Ident(f.serializer.alias.clone());

        fmt!(f, "SELECT " columns " FROM " name " " alias);

        if let Some(filter) = &self.filter {
            let filter: &Expr = filter;
            fmt!(f, " WHERE " filter);
        }
        Ok(())
    }
}

struct SelectColumn<'a>(&'a Table, &'a Column);

impl ToSql for SelectColumn<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        let column = f.serializer.column_ref(self.0, &self.1.field)?;
        fmt!(f, column);
        Ok(())
    }
}

use super::{flavor::Flavor, Comma, Formatter, ToSql};

use jsonmap_core::{stmt, Error, Result};

impl ToSql for &stmt::Value {
    fn to_sql(self, f: &mut Formatter<'_>) -> Result<()> {
        use stmt::Value::*;

        match self {
            Null => f.dst.push_str("NULL"),
            Bool(value) if f.serializer.flavor.has_bool_literals() => {
                f.dst.push_str(if *value { "true" } else { "false" })
            }
            Bool(value) => f.dst.push_str(if *value { "1" } else { "0" }),
            I64(value) => f.dst.push_str(&value.to_string()),
            F64(value) if value.is_finite() => f.dst.push_str(&value.to_string()),
            F64(value) => {
                return Err(Error::type_conversion(F64(*value), "SQL literal"));
            }
            String(value) => string_literal(value, f),
            Bytes(value) => {
                let hex: std::string::String =
                    value.iter().map(|byte| format!("{byte:02X}")).collect();

                match f.serializer.flavor {
                    Flavor::Postgresql => {
                        fmt!(f, "'\\x" hex "'");
                    }
                    Flavor::SqlServer => {
                        fmt!(f, "0x" hex);
                    }
                    _ => {
                        fmt!(f, "X'" hex "'");
                    }
                }
            }
            // Enums are stored by discriminant
            Enum(value) => f.dst.push_str(&value.discriminant.to_string()),
            List(items) => {
                fmt!(f, "(" Comma(items) ")");
            }
            Json(value) => string_literal(&value.to_string(), f),
            Object(value) => {
                return Err(Error::unsupported_expression(format!(
                    "a `{}` value cannot be inlined as a SQL literal",
                    value.ty().name()
                )));
            }
        }

        Ok(())
    }
}

fn string_literal(value: &str, f: &mut Formatter<'_>) {
    if f.serializer.flavor == Flavor::SqlServer {
        f.dst.push('N');
    }

    f.dst.push('\'');
    for c in value.chars() {
        if c == '\'' {
            f.dst.push('\'');
        }
        f.dst.push(c);
    }
    f.dst.push('\'');
}

use super::{JsonCodec, JsonMap};

use jsonmap_core::{
    convert::{ReadHandler, WriteHandler},
    stmt::{Type, TypeKey, TypeObject, Value},
    Result,
};

/// Decodes raw column values of registered types.
pub(super) struct ReadHook {
    map: JsonMap,
}

impl ReadHook {
    pub(super) fn new(map: JsonMap) -> Self {
        Self { map }
    }
}

impl ReadHandler for ReadHook {
    fn read(&self, raw: &Value, ty: &Type) -> Option<Result<Value>> {
        let declared = self.map.registry().get(ty.json_key()?)?;
        let codec = self.map.codec();

        Some(match (raw, ty) {
            (Value::Null, _) => Ok(Value::Null),
            (Value::List(_), Type::List(_)) => Ok(raw.clone()),
            (Value::String(text), Type::List(item)) => codec.decode_list(text, item),
            (Value::Json(json), Type::List(item)) => codec.decode_list_json(json.clone(), item),
            (Value::Object(value), _) if *value.ty() == declared => Ok(raw.clone()),
            (Value::String(text), _) => codec.decode_value(text, &declared).map(Value::Object),
            (Value::Json(json), _) => codec.decode_json(json.clone(), &declared).map(Value::Object),
            _ => return None,
        })
    }
}

/// Encodes values of exactly one registered type.
pub(super) struct TypeWriteHook {
    codec: JsonCodec,
    ty: TypeObject,
}

impl TypeWriteHook {
    pub(super) fn new(codec: JsonCodec, ty: TypeObject) -> Self {
        Self { codec, ty }
    }
}

impl WriteHandler for TypeWriteHook {
    fn write(&self, value: &Value, ty: &Type) -> Option<Result<Value>> {
        let res = match (value, ty) {
            (Value::Object(value), _) if *value.ty() == self.ty => {
                self.codec.encode_value(value, &self.ty)
            }
            (Value::List(items), Type::List(item))
                if TypeKey::list_of(item) == Some(self.ty.key()) =>
            {
                self.codec.encode_list(items)
            }
            _ => return None,
        };

        Some(res.map(Value::String))
    }
}

/// Runs the per-type write hooks registered so far.
pub(super) struct WriteDispatch {
    map: JsonMap,
}

impl WriteDispatch {
    pub(super) fn new(map: JsonMap) -> Self {
        Self { map }
    }
}

impl WriteHandler for WriteDispatch {
    fn write(&self, value: &Value, ty: &Type) -> Option<Result<Value>> {
        self.map
            .write_hooks()
            .iter()
            .find_map(|hook| hook.write(value, ty))
    }
}

use crate::syntax::*;
use crate::FILE_EXTENSION;
use garnet_core::error::{ErrorKind, Result as ModelResult, ResultExt};
use garnet_core::io::ModelReader;
use garnet_core::model::shapes::{
    HasTraits, ListOrSet, Map as MapShape, MemberShape, Operation, Service, ShapeKind, Simple,
    StructureOrUnion, TopLevelShape,
};
use garnet_core::model::values::{Value as NodeValue, ValueMap};
use garnet_core::model::{Identifier, Model, ShapeID};
use garnet_core::Version;
use log::warn;
use serde_json::{from_reader, Map, Value};
use std::io::Read;
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// Read a [Model](../garnet_core/model/struct.Model.html) from the JSON AST representation.
///
#[allow(missing_debug_implementations)]
#[derive(Default)]
pub struct JsonReader;

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl ModelReader for JsonReader {
    fn read(&mut self, r: &mut impl Read) -> ModelResult<Model> {
        let json: Value = from_reader(r).chain_err(|| {
            ErrorKind::Deserialization(
                FILE_EXTENSION.to_string(),
                "ModelReader::read".to_string(),
                None,
            )
            .to_string()
        })?;
        self.model(json)
    }
}

impl JsonReader {
    fn model(&self, json: Value) -> ModelResult<Model> {
        if let Value::Object(vs) = json {
            let version = self.version(vs.get(K_SMITHY))?;
            let mut model = Model::new(version);

            for (key, value) in self.metadata(vs.get(K_METADATA))? {
                let _ = model.add_metadata(key, value);
            }

            for shape in self.shapes(vs.get(K_SHAPES))? {
                let _ = model.add_shape(shape);
            }
            return Ok(model);
        }
        Err(ErrorKind::Deserialization(
            FILE_EXTENSION.to_string(),
            "JsonReader::model".to_string(),
            None,
        )
        .into())
    }

    fn version(&self, json: Option<&Value>) -> ModelResult<Version> {
        if let Some(Value::String(version)) = json {
            Ok(Version::from_str(version)?)
        } else {
            Err(ErrorKind::Deserialization(
                FILE_EXTENSION.to_string(),
                "JsonReader::version".to_string(),
                Some(format!("{:#?}", json)),
            )
            .into())
        }
    }

    fn metadata(&self, json: Option<&Value>) -> ModelResult<ValueMap> {
        let mut metadata: ValueMap = Default::default();
        if let Some(Value::Object(vs)) = json {
            for (k, v) in vs {
                let _ = metadata.insert(k.clone(), self.value(v)?);
            }
        }
        Ok(metadata)
    }

    fn shapes(&self, json: Option<&Value>) -> ModelResult<Vec<TopLevelShape>> {
        let mut shapes: Vec<TopLevelShape> = Default::default();
        if let Some(Value::Object(vs)) = json {
            for (k, v) in vs {
                let id = ShapeID::from_str(k)?;
                let inner = match self.shape(&id, v)? {
                    Some(inner) => inner,
                    None => continue,
                };
                let mut shape = TopLevelShape::new(id, inner);

                if let Some(Value::Object(vs)) = v.get(K_TRAITS) {
                    shape.append_traits(&self.traits(vs)?)?;
                };

                shapes.push(shape)
            }
        }
        Ok(shapes)
    }

    fn shape(&self, id: &ShapeID, outer: &Value) -> ModelResult<Option<ShapeKind>> {
        if let Some(Value::String(s)) = outer.get(K_TYPE) {
            let s = s.as_str();
            return if let Ok(st) = Simple::from_str(s) {
                Ok(Some(ShapeKind::Simple(st)))
            } else if s == V_APPLY {
                // apply statements attach traits to other shapes; a resolved model has already
                // folded them in, so they carry no shape of their own.
                warn!("ignoring apply statement for '{}'", id);
                Ok(None)
            } else if s == V_LIST {
                Ok(Some(ShapeKind::List(ListOrSet::new(
                    id,
                    self.target(outer.get(K_MEMBER))?,
                ))))
            } else if s == V_SET {
                Ok(Some(ShapeKind::Set(ListOrSet::new(
                    id,
                    self.target(outer.get(K_MEMBER))?,
                ))))
            } else if s == V_MAP {
                Ok(Some(ShapeKind::Map(MapShape::new(
                    id,
                    self.target(outer.get(K_KEY))?,
                    self.target(outer.get(K_VALUE))?,
                ))))
            } else if s == V_STRUCTURE {
                Ok(Some(ShapeKind::Structure(self.structure(id, outer)?)))
            } else if s == V_UNION {
                Ok(Some(ShapeKind::Union(self.structure(id, outer)?)))
            } else if s == V_SERVICE {
                Ok(Some(ShapeKind::Service(self.service(outer)?)))
            } else if s == V_OPERATION {
                Ok(Some(ShapeKind::Operation(self.operation(outer)?)))
            } else {
                Err(ErrorKind::Deserialization(
                    FILE_EXTENSION.to_string(),
                    "JsonReader::shape/type".to_string(),
                    Some(format!("{:#?}", outer)),
                )
                .into())
            };
        }
        Err(ErrorKind::Deserialization(
            FILE_EXTENSION.to_string(),
            "JsonReader::shape".to_string(),
            Some(format!("{:#?}", outer)),
        )
        .into())
    }

    fn structure(&self, id: &ShapeID, outer: &Value) -> ModelResult<StructureOrUnion> {
        let members = if let Some(Value::Object(vs)) = outer.get(K_MEMBERS) {
            self.members(id, vs)?
        } else {
            Default::default()
        };
        Ok(StructureOrUnion::with_members(members.as_slice()))
    }

    fn service(&self, outer: &Value) -> ModelResult<Service> {
        let version = if let Some(Value::String(version)) = outer.get(K_VERSION) {
            version.clone()
        } else {
            return Err(ErrorKind::Deserialization(
                FILE_EXTENSION.to_string(),
                "JsonReader::service/version".to_string(),
                Some(format!("{:#?}", outer)),
            )
            .into());
        };
        let mut service = Service::new(&version);
        for target in self.target_list(outer.get(K_OPERATIONS))? {
            service.add_operation(target);
        }
        Ok(service)
    }

    fn operation(&self, outer: &Value) -> ModelResult<Operation> {
        let mut operation = Operation::default();
        if outer.get(K_INPUT).is_some() {
            operation.set_input(self.target(outer.get(K_INPUT))?);
        }
        if outer.get(K_OUTPUT).is_some() {
            operation.set_output(self.target(outer.get(K_OUTPUT))?);
        }
        for target in self.target_list(outer.get(K_ERRORS))? {
            operation.add_error(target);
        }
        Ok(operation)
    }

    fn traits(&self, json: &Map<String, Value>) -> ModelResult<garnet_core::model::shapes::AppliedTraits> {
        let mut traits: garnet_core::model::shapes::AppliedTraits = Default::default();
        for (k, v) in json {
            let id = ShapeID::from_str(k)?;
            let inner = self.value(v)?;
            let _ = traits.insert(id, Some(inner));
        }
        Ok(traits)
    }

    fn members(
        &self,
        parent_id: &ShapeID,
        json: &Map<String, Value>,
    ) -> ModelResult<Vec<MemberShape>> {
        let mut members: Vec<MemberShape> = Default::default();
        for (k, v) in json {
            if let Value::Object(obj) = v {
                let target = if let Some(Value::String(target)) = obj.get(K_TARGET) {
                    ShapeID::from_str(target)?
                } else {
                    return Err(ErrorKind::Deserialization(
                        FILE_EXTENSION.to_string(),
                        "JsonReader::members/target".to_string(),
                        Some(format!("{:#?}", obj)),
                    )
                    .into());
                };
                let mut member =
                    MemberShape::new(parent_id.make_member(Identifier::from_str(k)?), target);
                if let Some(Value::Object(traits)) = obj.get(K_TRAITS) {
                    member.append_traits(&self.traits(traits)?)?;
                }
                members.push(member);
            } else {
                return Err(ErrorKind::Deserialization(
                    FILE_EXTENSION.to_string(),
                    "JsonReader::members".to_string(),
                    Some(format!("{:#?}", v)),
                )
                .into());
            }
        }
        Ok(members)
    }

    fn target(&self, member: Option<&Value>) -> ModelResult<ShapeID> {
        if let Some(Value::Object(ms)) = member {
            if let Some(Value::String(member_id)) = ms.get(K_TARGET) {
                return ShapeID::from_str(member_id);
            }
        }
        Err(ErrorKind::Deserialization(
            FILE_EXTENSION.to_string(),
            "JsonReader::target".to_string(),
            Some(format!("{:#?}", member)),
        )
        .into())
    }

    fn target_list(&self, json: Option<&Value>) -> ModelResult<Vec<ShapeID>> {
        let mut targets: Vec<ShapeID> = Default::default();
        if let Some(Value::Array(vs)) = json {
            for v in vs {
                targets.push(self.target(Some(v))?);
            }
        }
        Ok(targets)
    }

    fn value(&self, json: &Value) -> ModelResult<NodeValue> {
        match json {
            Value::Null => Ok(NodeValue::None),
            Value::Bool(v) => Ok(NodeValue::from(*v)),
            Value::Number(v) => {
                if v.is_f64() {
                    Ok(NodeValue::from(v.as_f64().unwrap()))
                } else if v.is_i64() {
                    Ok(NodeValue::from(v.as_i64().unwrap()))
                } else if v.is_u64() {
                    Ok(NodeValue::from(v.as_u64().unwrap() as i64))
                } else {
                    Err(ErrorKind::Deserialization(
                        FILE_EXTENSION.to_string(),
                        "JsonReader::value".to_string(),
                        Some(format!("{:#?}", json)),
                    )
                    .into())
                }
            }
            Value::String(v) => Ok(NodeValue::from(v.to_string())),
            Value::Array(vs) => {
                let result: ModelResult<Vec<NodeValue>> =
                    vs.iter().map(|v| self.value(v)).collect();
                Ok(NodeValue::Array(result?))
            }
            Value::Object(vs) => {
                let mut object: ValueMap = Default::default();
                for (k, v) in vs {
                    let _ = object.insert(k.clone(), self.value(v)?);
                }
                Ok(NodeValue::Object(object))
            }
        }
    }
}

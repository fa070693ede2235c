/*!
Emits `types.rb`; a data record for each structure, a tagged sum for each union, and a module of
string constants for each enum-traited string shape.
*/

use crate::context::GenerationContext;
use crate::generators::{begin_file, documentation_of, enum_values_of, open_modules, ruby_string};
use crate::symbols::enum_constant_name;
use crate::writer::RubyWriter;
use garnet_core::error::Result;
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::{
    HasTraits, MemberShape, Simple, StructureOrUnion, TopLevelShape,
};
use garnet_core::model::visitor::{visit_shape, ShapeVisitor};
use garnet_core::model::{ShapeID, Target};
use std::collections::HashSet;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Generate `types.rb` for every shape reachable from the service's operations.
///
pub fn generate(ctx: &mut GenerationContext<'_>) -> Result<()> {
    let mut writer = RubyWriter::new();
    begin_file(&mut writer, &[]);
    open_modules(&mut writer, ctx, Some("Types"));

    let mut generator = TypesGenerator {
        ctx: &mut *ctx,
        writer,
        emitted: Default::default(),
    };
    for operation in generator.ctx.operations()? {
        generator.shapes_of(operation.id())?;
    }

    let mut writer = generator.writer;
    writer.close_all()?;
    let path = ctx.settings.lib_path("types");
    ctx.manifest.write_file(&path, writer.finish()?)
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

struct TypesGenerator<'a, 'b> {
    ctx: &'b mut GenerationContext<'a>,
    writer: RubyWriter,
    emitted: HashSet<ShapeID>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl<'a, 'b> TypesGenerator<'a, 'b> {
    fn shapes_of(&mut self, root: &ShapeID) -> Result<()> {
        let walker = self.ctx.model.walk(root);
        for result in walker {
            let shape = result?;
            if !self.emitted.insert(shape.id().clone()) {
                continue;
            }
            visit_shape(self, shape)?;
        }
        Ok(())
    }

    fn member_docs(&mut self, structure: &StructureOrUnion) {
        let members: Vec<(String, String)> = structure
            .members()
            .map(|member| {
                (
                    self.ctx.symbols.member_name(member),
                    self.return_type_doc(member),
                )
            })
            .collect();
        for (name, return_type) in members {
            self.writer.write(&format!("# @!attribute {}", name));
            self.writer.write(&format!("#   @return [{}]", return_type));
        }
    }

    fn return_type_doc(&mut self, member: &MemberShape) -> String {
        match self.ctx.model.resolve_target(member.target()) {
            Ok(Target::Simple(simple)) => simple_type_doc(simple).to_string(),
            Ok(Target::Shape(shape)) => {
                if shape.is_list() || shape.is_set() {
                    "Array".to_string()
                } else if shape.is_map() {
                    "Hash".to_string()
                } else if shape.is_structure() || shape.is_union() {
                    format!("Types::{}", self.ctx.symbols.shape_symbol(shape).name())
                } else if let Some(simple) = shape.body().as_simple() {
                    simple_type_doc(*simple).to_string()
                } else {
                    "Object".to_string()
                }
            }
            Err(_) => "Object".to_string(),
        }
    }

    fn struct_sensitive_to_s(&mut self, name: &str, structure: &StructureOrUnion) -> Result<()> {
        let qualified = format!(
            "{}::Types::{}",
            self.ctx.settings.module_name(),
            name
        );
        let members: Vec<(String, bool)> = structure
            .members()
            .map(|member| {
                (
                    self.ctx.symbols.member_name(member),
                    member.is_sensitive(),
                )
            })
            .collect();
        self.writer.blank();
        self.writer
            .write("# Prevents sensitive member values from appearing in logs.");
        self.writer.open_block("def to_s", "end");
        self.writer
            .write(&format!("\"#<struct {} \" \\", qualified));
        self.writer.indent();
        let count = members.len();
        for (index, (member_name, sensitive)) in members.into_iter().enumerate() {
            let last = index + 1 == count;
            let line = match (sensitive, last) {
                (true, false) => format!("\"{}=\\\"[SENSITIVE]\\\", \" \\", member_name),
                (true, true) => format!("\"{}=\\\"[SENSITIVE]\\\">\"", member_name),
                (false, false) => format!("\"{}=#{{{}}}, \" \\", member_name, member_name),
                (false, true) => format!("\"{}=#{{{}}}>\"", member_name, member_name),
            };
            self.writer.write(&line);
        }
        self.writer.outdent();
        self.writer.close_block()
    }
}

impl<'a, 'b> ShapeVisitor for TypesGenerator<'a, 'b> {
    type Output = Result<()>;

    fn default_shape(&mut self, _shape: &TopLevelShape) -> Self::Output {
        Ok(())
    }

    fn simple_shape(&mut self, shape: &TopLevelShape, _body: &Simple) -> Self::Output {
        let values = match enum_values_of(shape) {
            Some(values) => values,
            None => return Ok(()),
        };
        let symbol = self.ctx.symbols.shape_symbol(shape);
        self.writer.blank();
        if let Some(doc) = documentation_of(shape) {
            self.writer.doc_comment(&doc);
        }
        self.writer
            .open_block(&format!("module {}", symbol.name()), "end");
        for value in values {
            self.writer.write(&format!(
                "{} = {}",
                enum_constant_name(&value),
                ruby_string(&value)
            ));
        }
        self.writer.close_block()
    }

    fn structure(&mut self, shape: &TopLevelShape, body: &StructureOrUnion) -> Self::Output {
        let symbol = self.ctx.symbols.shape_symbol(shape);
        let name = symbol.name().to_string();
        self.writer.blank();
        if let Some(doc) = documentation_of(shape) {
            self.writer.doc_comment(&doc);
            self.writer.write("#");
        }
        self.member_docs(body);
        self.writer.write(&format!("{} = ::Struct.new(", name));
        self.writer.indent();
        if body.has_members() {
            let member_names: Vec<String> = body
                .members()
                .map(|member| self.ctx.symbols.member_name(member))
                .collect();
            for member_name in member_names {
                self.writer.write(&format!(":{},", member_name));
            }
        } else {
            self.writer.write("nil,");
        }
        self.writer.write("keyword_init: true");
        self.writer.outdent();
        self.writer.open_block(") do", "end");
        self.writer.write("include Garnet::Structure");
        if body.members().any(|member| member.is_sensitive()) {
            self.struct_sensitive_to_s(&name, body)?;
        }
        self.writer.close_block()
    }

    fn union(&mut self, shape: &TopLevelShape, body: &StructureOrUnion) -> Self::Output {
        let symbol = self.ctx.symbols.shape_symbol(shape);
        let name = symbol.name().to_string();
        self.writer.blank();
        if let Some(doc) = documentation_of(shape) {
            self.writer.doc_comment(&doc);
        }
        self.writer
            .open_block(&format!("class {} < Garnet::Union", name), "end");
        let variants: Vec<String> = body.members().map(variant_name).collect();
        for variant in variants {
            self.writer
                .write(&format!("class {} < {}", variant, name));
            self.writer.write("end");
            self.writer.blank();
        }
        self.writer.write("# Handles unmodeled members.");
        self.writer
            .open_block(&format!("class Unknown < {}", name), "end");
        self.writer
            .open_block("def initialize(name: '', value: nil)", "end");
        self.writer.write("super({name: name, value: value})");
        self.writer.close_block()?;
        self.writer.close_block()?;
        self.writer.close_block()
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn simple_type_doc(simple: Simple) -> &'static str {
    match simple {
        Simple::Blob | Simple::String => "String",
        Simple::Boolean => "Boolean",
        Simple::Byte | Simple::Short | Simple::Integer | Simple::Long | Simple::BigInteger => {
            "Integer"
        }
        Simple::Float | Simple::Double | Simple::BigDecimal => "Float",
        Simple::Timestamp => "Time",
        Simple::Document => "Hash, Array, String, Numeric, Boolean",
    }
}

fn variant_name(member: &MemberShape) -> String {
    use heck::CamelCase;
    member.member_name().as_ref().to_camel_case()
}

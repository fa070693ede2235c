/*!
Emits `parsers.rb`; a response parser per operation honoring the operation's HTTP bindings in
reverse, a parser per modeled error, and a parser per transitive aggregate shape.
*/

use crate::bindings::{
    member_string, timestamp_format, BindingLocation, StructureBindings, TimestampFormat,
};
use crate::context::GenerationContext;
use crate::generators::{begin_file, open_modules, ruby_string};
use crate::protocol::PayloadCodec;
use crate::writer::RubyWriter;
use garnet_core::error::{ErrorKind, Result};
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::{
    HasTraits, ListOrSet, Map, MemberShape, ShapeKind, Simple, StructureOrUnion, TopLevelShape,
};
use garnet_core::model::visitor::{visit_shape, ShapeVisitor};
use garnet_core::model::{ShapeID, Target};
use garnet_core::prelude::{TRAIT_MEDIATYPE, TRAIT_SPARSE};
use std::collections::HashSet;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Generate `parsers.rb` for every operation of the service, the declared errors, and the
/// transitive aggregate shapes of each operation's output and errors.
///
pub fn generate(ctx: &mut GenerationContext<'_>, codec: &PayloadCodec) -> Result<()> {
    let mut writer = RubyWriter::new();
    begin_file(&mut writer, &["base64"]);
    open_modules(&mut writer, ctx, Some("Parsers"));

    let mut generator = ParsersGenerator {
        ctx: &mut *ctx,
        codec,
        writer,
        emitted: Default::default(),
    };
    for operation in generator.ctx.operations()? {
        generator.operation_parser(operation)?;
        for error in crate::transport::operation_errors(generator.ctx, operation)? {
            generator.error_parser(error)?;
        }
        if let Some(output) = super::output_root(operation) {
            generator.shapes_of(output)?;
        }
        let errors: Vec<&ShapeID> = operation
            .body()
            .as_operation()
            .map(|body| body.errors().collect())
            .unwrap_or_default();
        for error in errors {
            generator.shapes_of(error)?;
        }
    }

    let mut writer = generator.writer;
    writer.close_all()?;
    let path = ctx.settings.lib_path("parsers");
    ctx.manifest.write_file(&path, writer.finish()?)
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

struct ParsersGenerator<'a, 'b> {
    ctx: &'b mut GenerationContext<'a>,
    codec: &'b PayloadCodec,
    writer: RubyWriter,
    emitted: HashSet<ShapeID>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl<'a, 'b> ParsersGenerator<'a, 'b> {
    fn shapes_of(&mut self, root: &ShapeID) -> Result<()> {
        // The root structure is parsed by the operation, or error, parser emitted above.
        let _ = self.emitted.insert(root.clone());
        let walker = self.ctx.model.walk(root);
        for result in walker {
            let shape = result?;
            if shape.id() == root {
                continue;
            }
            if !self.emitted.insert(shape.id().clone()) {
                continue;
            }
            visit_shape(self, shape)?;
        }
        Ok(())
    }

    fn operation_parser(&mut self, operation: &'a TopLevelShape) -> Result<()> {
        let name = self.ctx.symbols.shape_symbol(operation).name().to_string();
        self.writer.blank();
        self.writer.write(&format!("# Parser for {}.", name));
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.parse(http_resp)", "end");
        match super::output_root(operation) {
            Some(output) => {
                let shape = self.ctx.model.expect_shape(output)?;
                let structure = shape.body().as_structure().ok_or_else(|| {
                    ErrorKind::InvalidShapeVariant("Structure".to_string())
                })?;
                let type_name = self.ctx.symbols.shape_symbol(shape).name().to_string();
                self.parse_structure(&type_name, structure)?;
            }
            None => {
                self.writer.write("{}");
            }
        }
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn error_parser(&mut self, error: &'a TopLevelShape) -> Result<()> {
        if !self.emitted.insert(error.id().clone()) {
            return Ok(());
        }
        let structure = match error.body().as_structure() {
            Some(structure) => structure,
            None => {
                return Err(ErrorKind::InvalidShapeVariant("Structure".to_string()).into());
            }
        };
        let name = self.ctx.symbols.shape_symbol(error).name().to_string();
        self.writer.blank();
        self.writer
            .write(&format!("# Parser for the {} error.", name));
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.parse(http_resp)", "end");
        self.parse_structure(&name, structure)?;
        self.writer.close_block()?;
        self.writer.close_block()
    }

    ///
    /// The shared response-to-structure body; status code, headers, prefix headers, and body
    /// members, in that order.
    ///
    fn parse_structure(&mut self, type_name: &str, structure: &'a StructureOrUnion) -> Result<()> {
        let bindings = StructureBindings::index(self.ctx.model, structure);
        self.writer
            .write(&format!("data = Types::{}.new", type_name));

        if let Some(member) = bindings.response_code {
            let member_name = self.ctx.symbols.member_name(member);
            self.writer
                .write(&format!("data.{} = http_resp.status", member_name));
        }

        let headers: Vec<(&MemberShape, String)> = bindings
            .headers
            .iter()
            .map(|(member, name)| (*member, name.clone()))
            .collect();
        for (member, header_name) in headers {
            let member_name = self.ctx.symbols.member_name(member);
            let header_expr = format!("http_resp.headers[{}]", ruby_string(&header_name));
            let expr = self.header_value(member, &header_expr)?;
            self.writer.write(&format!(
                "data.{} = {} unless {}.nil?",
                member_name, expr, header_expr
            ));
        }

        let prefixed: Vec<(&MemberShape, String)> = bindings
            .prefix_headers
            .iter()
            .map(|(member, prefix)| (*member, prefix.clone()))
            .collect();
        for (member, prefix) in prefixed {
            let member_name = self.ctx.symbols.member_name(member);
            self.writer.write(&format!("data.{} = {{}}", member_name));
            self.writer
                .open_block("http_resp.headers.each do |key, value|", "end");
            self.writer.open_block(
                &format!("if key.start_with?({})", ruby_string(&prefix)),
                "end",
            );
            self.writer.write(&format!(
                "data.{}[key.delete_prefix({})] = value",
                member_name,
                ruby_string(&prefix)
            ));
            self.writer.close_block()?;
            self.writer.close_block()?;
        }

        if let Some(member) = bindings.payload {
            self.parse_payload(member)?;
        } else if bindings.has_document_body() {
            self.writer.write(&format!(
                "map = {}(http_resp.body.read)",
                self.codec.parse_fn
            ));
            let members: Vec<&MemberShape> = bindings.body.clone();
            for member in members {
                let member_name = self.ctx.symbols.member_name(member);
                let wire = format!("map[{}]", ruby_string(&member.member_name().to_string()));
                let (expr, guard) = self.body_value(member, &wire)?;
                if guard {
                    self.writer.write(&format!(
                        "data.{} = {} unless {}.nil?",
                        member_name, expr, wire
                    ));
                } else {
                    self.writer
                        .write(&format!("data.{} = {}", member_name, expr));
                }
            }
        }
        self.writer.write("data");
        Ok(())
    }

    fn parse_payload(&mut self, member: &MemberShape) -> Result<()> {
        let member_name = self.ctx.symbols.member_name(member);
        match self.ctx.model.resolve_target(member.target())? {
            Target::Shape(shape) if shape.is_structure() || shape.is_union() => {
                let parser = self.ctx.symbols.shape_symbol(shape).name().to_string();
                self.writer.write(&format!(
                    "map = {}(http_resp.body.read)",
                    self.codec.parse_fn
                ));
                self.writer
                    .write(&format!("data.{} = {}.parse(map)", member_name, parser));
            }
            Target::Simple(Simple::Blob) | Target::Simple(Simple::String) => {
                self.writer
                    .write(&format!("data.{} = http_resp.body.read", member_name));
            }
            Target::Shape(shape)
                if matches!(
                    shape.body().as_simple(),
                    Some(Simple::Blob) | Some(Simple::String)
                ) =>
            {
                self.writer
                    .write(&format!("data.{} = http_resp.body.read", member_name));
            }
            _ => {
                return Err(ErrorKind::NotImplemented(format!(
                    "httpPayload member '{}'",
                    member.id()
                ))
                .into());
            }
        }
        Ok(())
    }

    fn header_value(&mut self, member: &MemberShape, header_expr: &str) -> Result<String> {
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(simple) => Ok(self.header_simple(member, simple, header_expr)),
            Target::Shape(shape) => match shape.body() {
                ShapeKind::Simple(simple) => Ok(self.header_simple(member, *simple, header_expr)),
                ShapeKind::List(body) | ShapeKind::Set(body) => {
                    let element = self.header_element(body.member())?;
                    Ok(format!(
                        "Garnet::HTTP.split_header_list_values({}).map {{ |value| {} }}",
                        header_expr, element
                    ))
                }
                _ => Err(ErrorKind::NotImplemented(format!(
                    "httpHeader member '{}'",
                    member.id()
                ))
                .into()),
            },
        }
    }

    fn header_simple(&mut self, member: &MemberShape, simple: Simple, value_expr: &str) -> String {
        match simple {
            Simple::String => {
                if member_string(self.ctx.model, member, TRAIT_MEDIATYPE).is_some() {
                    format!("::Base64::decode64({})", value_expr)
                } else {
                    value_expr.to_string()
                }
            }
            Simple::Byte | Simple::Short | Simple::Integer | Simple::Long | Simple::BigInteger => {
                format!("{}.to_i", value_expr)
            }
            Simple::Float | Simple::Double | Simple::BigDecimal => {
                format!("{}.to_f", value_expr)
            }
            Simple::Boolean => format!("{} == 'true'", value_expr),
            Simple::Timestamp => self.header_timestamp(member, value_expr),
            Simple::Blob => format!("::Base64::decode64({})", value_expr),
            Simple::Document => value_expr.to_string(),
        }
    }

    fn header_element(&mut self, member: &MemberShape) -> Result<String> {
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(simple) => Ok(self.header_simple(member, simple, "value")),
            Target::Shape(shape) => match shape.body().as_simple() {
                Some(simple) => Ok(self.header_simple(member, *simple, "value")),
                None => Err(ErrorKind::NotImplemented(format!(
                    "httpHeader list member '{}'",
                    member.id()
                ))
                .into()),
            },
        }
    }

    fn header_timestamp(&mut self, member: &MemberShape, value_expr: &str) -> String {
        match timestamp_format(
            self.ctx.model,
            member,
            BindingLocation::Header,
            self.codec.body_timestamp_format,
        ) {
            TimestampFormat::EpochSeconds => format!("Time.at({}.to_f)", value_expr),
            _ => format!("Time.parse({})", value_expr),
        }
    }

    ///
    /// The body deserialization of one member; the second element is `true` when the expression
    /// must be guarded against a missing key.
    ///
    fn body_value(&mut self, member: &MemberShape, value_expr: &str) -> Result<(String, bool)> {
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(simple) => Ok(self.body_simple(member, simple, value_expr)),
            Target::Shape(shape) => {
                if shape.is_structure()
                    || shape.is_union()
                    || shape.is_list()
                    || shape.is_set()
                    || shape.is_map()
                {
                    let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
                    Ok((format!("{}.parse({})", name, value_expr), true))
                } else if let Some(simple) = shape.body().as_simple() {
                    Ok(self.body_simple(member, *simple, value_expr))
                } else {
                    Err(ErrorKind::NotImplemented(format!(
                        "body member '{}'",
                        member.id()
                    ))
                    .into())
                }
            }
        }
    }

    fn body_simple(
        &mut self,
        member: &MemberShape,
        simple: Simple,
        value_expr: &str,
    ) -> (String, bool) {
        match simple {
            Simple::Timestamp => {
                let format = timestamp_format(
                    self.ctx.model,
                    member,
                    BindingLocation::Body,
                    self.codec.body_timestamp_format,
                );
                match format {
                    TimestampFormat::EpochSeconds => {
                        (format!("Time.at({})", value_expr), true)
                    }
                    _ => (format!("Time.parse({})", value_expr), true),
                }
            }
            Simple::Blob => (format!("::Base64::decode64({})", value_expr), true),
            _ => (value_expr.to_string(), false),
        }
    }
}

impl<'a, 'b> ShapeVisitor for ParsersGenerator<'a, 'b> {
    type Output = Result<()>;

    fn default_shape(&mut self, _shape: &TopLevelShape) -> Self::Output {
        Ok(())
    }

    fn structure(&mut self, shape: &TopLevelShape, body: &StructureOrUnion) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer.open_block("def self.parse(map)", "end");
        self.writer
            .write(&format!("data = Types::{}.new", name));
        let members: Vec<&MemberShape> = body.members().collect();
        for member in members {
            let member_name = self.ctx.symbols.member_name(member);
            let wire = format!("map[{}]", ruby_string(&member.member_name().to_string()));
            let (expr, guard) = self.body_value(member, &wire)?;
            if guard {
                self.writer.write(&format!(
                    "data.{} = {} unless {}.nil?",
                    member_name, expr, wire
                ));
            } else {
                self.writer
                    .write(&format!("data.{} = {}", member_name, expr));
            }
        }
        self.writer.write("data");
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn union(&mut self, shape: &TopLevelShape, body: &StructureOrUnion) -> Self::Output {
        use heck::CamelCase;
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer.open_block("def self.parse(map)", "end");
        self.writer.write("key, value = map.flatten");
        self.writer.open_block("case key", "end");
        let members: Vec<&MemberShape> = body.members().collect();
        for member in members {
            let variant = member.member_name().as_ref().to_camel_case();
            let wire_name = member.member_name().to_string();
            self.writer
                .write(&format!("when {}", ruby_string(&wire_name)));
            self.writer.indent();
            let (expr, guard) = self.body_value(member, "value")?;
            if guard {
                self.writer
                    .write(&format!("value = {} unless value.nil?", expr));
                self.writer
                    .write(&format!("Types::{}::{}.new(value)", name, variant));
            } else {
                self.writer
                    .write(&format!("Types::{}::{}.new({})", name, variant, expr));
            }
            self.writer.outdent();
        }
        self.writer.write("else");
        self.writer.indent();
        self.writer
            .write(&format!("Types::{}::Unknown.new(name: key, value: value)", name));
        self.writer.outdent();
        self.writer.close_block()?;
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn list(&mut self, shape: &TopLevelShape, body: &ListOrSet) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        let sparse = shape.has_prelude_trait(TRAIT_SPARSE);
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer.open_block("def self.parse(list)", "end");
        let (expr, _) = self.body_value(body.member(), "value")?;
        if sparse {
            self.writer.open_block("list.map do |value|", "end");
            self.writer
                .write(&format!("value.nil? ? nil : {}", expr));
        } else {
            self.writer.open_block("list.compact.map do |value|", "end");
            self.writer.write(&expr);
        }
        self.writer.close_block()?;
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn set(&mut self, shape: &TopLevelShape, body: &ListOrSet) -> Self::Output {
        self.list(shape, body)
    }

    fn map(&mut self, shape: &TopLevelShape, body: &Map) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        let sparse = shape.has_prelude_trait(TRAIT_SPARSE);
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer.open_block("def self.parse(map)", "end");
        self.writer.write("data = {}");
        self.writer.open_block("map.each do |key, value|", "end");
        let (expr, _) = self.body_value(body.value(), "value")?;
        if sparse {
            self.writer
                .write(&format!("data[key] = value.nil? ? nil : {}", expr));
        } else {
            self.writer
                .write(&format!("data[key] = {} unless value.nil?", expr));
        }
        self.writer.close_block()?;
        self.writer.write("data");
        self.writer.close_block()?;
        self.writer.close_block()
    }
}

/*!
Emits `stubs.rb`; for every reachable shape a `default(visited)` producing a plausible value,
and for every operation a `stub(http_resp, stub:)` that materializes a synthetic response from a
user-supplied stub map. Recursive shapes short-circuit through the `visited` list.
*/

use crate::bindings::{
    member_string, timestamp_format, BindingLocation, HttpTrait, StructureBindings,
    TimestampFormat,
};
use crate::context::GenerationContext;
use crate::generators::{begin_file, open_modules, ruby_string};
use crate::protocol::PayloadCodec;
use crate::writer::RubyWriter;
use garnet_core::error::{ErrorKind, Result};
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::{
    ListOrSet, Map, MemberShape, Simple, StructureOrUnion, TopLevelShape,
};
use garnet_core::model::visitor::{visit_shape, ShapeVisitor};
use garnet_core::model::{ShapeID, Target};
use garnet_core::prelude::TRAIT_MEDIATYPE;
use heck::CamelCase;
use std::collections::HashSet;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Generate `stubs.rb` for every operation of the service and the transitive aggregate shapes
/// of each operation's output.
///
pub fn generate(ctx: &mut GenerationContext<'_>, codec: &PayloadCodec) -> Result<()> {
    let mut writer = RubyWriter::new();
    begin_file(&mut writer, &["base64", "stringio"]);
    open_modules(&mut writer, ctx, Some("Stubs"));

    let mut generator = StubsGenerator {
        ctx: &mut *ctx,
        codec,
        writer,
        emitted: Default::default(),
    };
    for operation in generator.ctx.operations()? {
        generator.operation_stub(operation)?;
        if let Some(output) = super::output_root(operation) {
            generator.shapes_of(output)?;
        }
    }

    let mut writer = generator.writer;
    writer.close_all()?;
    let path = ctx.settings.lib_path("stubs");
    ctx.manifest.write_file(&path, writer.finish()?)
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

struct StubsGenerator<'a, 'b> {
    ctx: &'b mut GenerationContext<'a>,
    codec: &'b PayloadCodec,
    writer: RubyWriter,
    emitted: HashSet<ShapeID>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl<'a, 'b> StubsGenerator<'a, 'b> {
    fn shapes_of(&mut self, root: &ShapeID) -> Result<()> {
        // The output structure itself is stubbed inline by the operation stub.
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

    fn operation_stub(&mut self, operation: &'a TopLevelShape) -> Result<()> {
        let http = HttpTrait::of(operation)?;
        let name = self.ctx.symbols.shape_symbol(operation).name().to_string();
        let output = match super::output_root(operation) {
            Some(output) => Some(self.ctx.model.expect_shape(output)?),
            None => None,
        };
        let empty = StructureOrUnion::new();
        let structure = output
            .and_then(|shape| shape.body().as_structure())
            .unwrap_or(&empty);
        let bindings = StructureBindings::index(self.ctx.model, structure);

        self.writer.blank();
        self.writer
            .write(&format!("# Stubs for {}.", name));
        self.writer.open_block(&format!("class {}", name), "end");

        // default
        self.writer.open_block("def self.default(visited = [])", "end");
        if structure.has_members() {
            self.writer.open_block("{", "}");
            let members: Vec<&MemberShape> = structure.members().collect();
            for member in members {
                let member_name = self.ctx.symbols.member_name(member);
                let expr = self.default_value(member)?;
                self.writer
                    .write(&format!("{}: {},", member_name, expr));
            }
            self.writer.close_block()?;
        } else {
            self.writer.write("{}");
        }
        self.writer.close_block()?;
        self.writer.blank();

        // stub
        self.writer
            .open_block("def self.stub(http_resp, stub:)", "end");
        self.writer.write("data = {}");
        self.writer
            .write(&format!("http_resp.status = {}", http.code));
        if let Some(member) = bindings.response_code {
            let member_name = self.ctx.symbols.member_name(member);
            self.writer.write(&format!(
                "http_resp.status = stub[:{}] unless stub[:{}].nil?",
                member_name, member_name
            ));
        }
        let headers: Vec<(&MemberShape, String)> = bindings
            .headers
            .iter()
            .map(|(member, name)| (*member, name.clone()))
            .collect();
        for (member, header_name) in headers {
            let member_name = self.ctx.symbols.member_name(member);
            let expr = self.header_value(member, &format!("stub[:{}]", member_name))?;
            self.writer.write(&format!(
                "http_resp.headers[{}] = {} unless stub[:{}].nil?",
                ruby_string(&header_name),
                expr,
                member_name
            ));
        }
        let prefixed: Vec<(&MemberShape, String)> = bindings
            .prefix_headers
            .iter()
            .map(|(member, prefix)| (*member, prefix.clone()))
            .collect();
        for (member, prefix) in prefixed {
            let member_name = self.ctx.symbols.member_name(member);
            self.writer.write(&format!(
                "stub[:{}].each {{ |key, value| http_resp.headers[\"{}#{{key}}\"] = value }} unless stub[:{}].nil?",
                member_name, prefix, member_name
            ));
        }
        if let Some(member) = bindings.payload {
            self.payload_stub(member)?;
        } else if bindings.has_document_body() {
            self.writer.write(&format!(
                "http_resp.headers['Content-Type'] = {}",
                ruby_string(self.codec.content_type)
            ));
            let members: Vec<&MemberShape> = bindings.body.clone();
            for member in members {
                let member_name = self.ctx.symbols.member_name(member);
                let wire_name = member.member_name().to_string();
                let expr = self.stub_value(member, &format!("stub[:{}]", member_name))?;
                self.writer.write(&format!(
                    "data[{}] = {} unless stub[:{}].nil?",
                    ruby_string(&wire_name),
                    expr,
                    member_name
                ));
            }
            self.writer.write(&format!(
                "http_resp.body = StringIO.new({}(data))",
                self.codec.dump_fn
            ));
        }
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn payload_stub(&mut self, member: &MemberShape) -> Result<()> {
        let member_name = self.ctx.symbols.member_name(member);
        let content_type = member_string(self.ctx.model, member, TRAIT_MEDIATYPE);
        match self.ctx.model.resolve_target(member.target())? {
            Target::Shape(shape) if shape.is_structure() || shape.is_union() => {
                let stubber = self.ctx.symbols.shape_symbol(shape).name().to_string();
                self.writer.write(&format!(
                    "http_resp.headers['Content-Type'] = {}",
                    ruby_string(content_type.as_deref().unwrap_or(self.codec.content_type))
                ));
                self.writer.write(&format!(
                    "http_resp.body = StringIO.new({}({}.stub(stub[:{}])))",
                    self.codec.dump_fn, stubber, member_name
                ));
            }
            _ => {
                self.writer.write(&format!(
                    "http_resp.headers['Content-Type'] = {}",
                    ruby_string(content_type.as_deref().unwrap_or("application/octet-stream"))
                ));
                self.writer.write(&format!(
                    "http_resp.body = StringIO.new(stub[:{}] || '')",
                    member_name
                ));
            }
        }
        Ok(())
    }

    ///
    /// The default value for one member; aggregates delegate to their shape's `default`, simple
    /// kinds use the fixed defaults table.
    ///
    fn default_value(&mut self, member: &MemberShape) -> Result<String> {
        let member_name = self.ctx.symbols.member_name(member);
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(simple) => Ok(simple_default(simple, &member_name, "Document")),
            Target::Shape(shape) => {
                if shape.is_structure()
                    || shape.is_union()
                    || shape.is_list()
                    || shape.is_set()
                    || shape.is_map()
                {
                    let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
                    Ok(format!("{}.default(visited)", name))
                } else if let Some(simple) = shape.body().as_simple() {
                    let shape_name = shape.id().shape_name().to_string();
                    Ok(simple_default(*simple, &member_name, &shape_name))
                } else {
                    Err(ErrorKind::NotImplemented(format!(
                        "default for member '{}'",
                        member.id()
                    ))
                    .into())
                }
            }
        }
    }

    /// The stub serialization of one member into the response body.
    fn stub_value(&mut self, member: &MemberShape, value_expr: &str) -> Result<String> {
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(simple) => Ok(self.stub_simple(member, simple, value_expr)),
            Target::Shape(shape) => {
                if shape.is_structure()
                    || shape.is_union()
                    || shape.is_list()
                    || shape.is_set()
                    || shape.is_map()
                {
                    let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
                    Ok(format!("{}.stub({})", name, value_expr))
                } else if let Some(simple) = shape.body().as_simple() {
                    Ok(self.stub_simple(member, *simple, value_expr))
                } else {
                    Err(ErrorKind::NotImplemented(format!(
                        "stub for member '{}'",
                        member.id()
                    ))
                    .into())
                }
            }
        }
    }

    fn stub_simple(&mut self, member: &MemberShape, simple: Simple, value_expr: &str) -> String {
        match simple {
            Simple::Timestamp => {
                let format = timestamp_format(
                    self.ctx.model,
                    member,
                    BindingLocation::Body,
                    self.codec.body_timestamp_format,
                );
                match format {
                    TimestampFormat::EpochSeconds => format!(
                        "Garnet::TimeHelper.to_epoch_seconds({}).to_i",
                        value_expr
                    ),
                    TimestampFormat::HttpDate => {
                        format!("Garnet::TimeHelper.to_http_date({})", value_expr)
                    }
                    TimestampFormat::DateTime => {
                        format!("Garnet::TimeHelper.to_date_time({})", value_expr)
                    }
                }
            }
            Simple::Blob => format!("::Base64::strict_encode64({})", value_expr),
            _ => value_expr.to_string(),
        }
    }

    fn header_value(&mut self, member: &MemberShape, value_expr: &str) -> Result<String> {
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(Simple::Timestamp) => Ok(self.header_timestamp(member, value_expr)),
            Target::Shape(shape)
                if matches!(shape.body().as_simple(), Some(Simple::Timestamp)) =>
            {
                Ok(self.header_timestamp(member, value_expr))
            }
            Target::Simple(Simple::String) | Target::Shape(_)
                if member_string(self.ctx.model, member, TRAIT_MEDIATYPE).is_some() =>
            {
                Ok(format!("::Base64::strict_encode64({}).strip", value_expr))
            }
            Target::Simple(Simple::String) => Ok(value_expr.to_string()),
            Target::Shape(shape) if shape.is_list() || shape.is_set() => {
                Ok(format!(
                    "{}.map {{ |value| value.to_s }}.join(', ')",
                    value_expr
                ))
            }
            _ => Ok(format!("{}.to_s", value_expr)),
        }
    }

    fn header_timestamp(&mut self, member: &MemberShape, value_expr: &str) -> String {
        match timestamp_format(
            self.ctx.model,
            member,
            BindingLocation::Header,
            self.codec.body_timestamp_format,
        ) {
            TimestampFormat::EpochSeconds => format!(
                "Garnet::TimeHelper.to_epoch_seconds({}).to_i.to_s",
                value_expr
            ),
            TimestampFormat::HttpDate => {
                format!("Garnet::TimeHelper.to_http_date({})", value_expr)
            }
            TimestampFormat::DateTime => {
                format!("Garnet::TimeHelper.to_date_time({})", value_expr)
            }
        }
    }
}

impl<'a, 'b> ShapeVisitor for StubsGenerator<'a, 'b> {
    type Output = Result<()>;

    fn default_shape(&mut self, _shape: &TopLevelShape) -> Self::Output {
        Ok(())
    }

    fn structure(&mut self, shape: &TopLevelShape, body: &StructureOrUnion) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.default(visited = [])", "end");
        self.writer
            .write(&format!("return nil if visited.include?('{}')", name));
        self.writer
            .write(&format!("visited = visited + ['{}']", name));
        if body.has_members() {
            self.writer.open_block("{", "}");
            let members: Vec<&MemberShape> = body.members().collect();
            for member in members {
                let member_name = self.ctx.symbols.member_name(member);
                let expr = self.default_value(member)?;
                self.writer.write(&format!("{}: {},", member_name, expr));
            }
            self.writer.close_block()?;
        } else {
            self.writer.write("{}");
        }
        self.writer.close_block()?;
        self.writer.blank();
        self.writer.open_block("def self.stub(stub = {})", "end");
        self.writer
            .write(&format!("stub ||= Types::{}.new", name));
        self.writer.write("data = {}");
        let members: Vec<&MemberShape> = body.members().collect();
        for member in members {
            let member_name = self.ctx.symbols.member_name(member);
            let wire_name = member.member_name().to_string();
            let expr = self.stub_value(member, &format!("stub[:{}]", member_name))?;
            self.writer.write(&format!(
                "data[{}] = {} unless stub[:{}].nil?",
                ruby_string(&wire_name),
                expr,
                member_name
            ));
        }
        self.writer.write("data");
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn union(&mut self, shape: &TopLevelShape, body: &StructureOrUnion) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.default(visited = [])", "end");
        self.writer
            .write(&format!("return nil if visited.include?('{}')", name));
        self.writer
            .write(&format!("visited = visited + ['{}']", name));
        if let Some(member) = body.members().next() {
            let member_name = self.ctx.symbols.member_name(member);
            let expr = self.default_value(member)?;
            self.writer.open_block("{", "}");
            self.writer.write(&format!("{}: {},", member_name, expr));
            self.writer.close_block()?;
        } else {
            self.writer.write("{}");
        }
        self.writer.close_block()?;
        self.writer.blank();
        self.writer.open_block("def self.stub(stub)", "end");
        self.writer.write("data = {}");
        self.writer.open_block("case stub", "end");
        let members: Vec<&MemberShape> = body.members().collect();
        for member in members {
            let variant = member.member_name().as_ref().to_camel_case();
            let wire_name = member.member_name().to_string();
            self.writer
                .write(&format!("when Types::{}::{}", name, variant));
            self.writer.indent();
            let expr = self.stub_value(member, "stub.__getobj__")?;
            self.writer
                .write(&format!("data[{}] = {}", ruby_string(&wire_name), expr));
            self.writer.outdent();
        }
        self.writer.write("else");
        self.writer.indent();
        self.writer.write(&format!(
            "raise ArgumentError, \"Expected input to be one of the subclasses of Types::{}\"",
            name
        ));
        self.writer.outdent();
        self.writer.close_block()?;
        self.writer.write("data");
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn list(&mut self, shape: &TopLevelShape, body: &ListOrSet) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.default(visited = [])", "end");
        self.writer
            .write(&format!("return nil if visited.include?('{}')", name));
        self.writer
            .write(&format!("visited = visited + ['{}']", name));
        let element_default = self.default_value(body.member())?;
        self.writer.open_block("[", "]");
        self.writer.write(&element_default);
        self.writer.close_block()?;
        self.writer.close_block()?;
        self.writer.blank();
        self.writer.open_block("def self.stub(stub = [])", "end");
        self.writer.write("stub ||= []");
        self.writer.write("data = []");
        self.writer.open_block("stub.each do |element|", "end");
        let expr = self.stub_value(body.member(), "element")?;
        self.writer
            .write(&format!("data << {} unless element.nil?", expr));
        self.writer.close_block()?;
        self.writer.write("data");
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn set(&mut self, shape: &TopLevelShape, body: &ListOrSet) -> Self::Output {
        self.list(shape, body)
    }

    fn map(&mut self, shape: &TopLevelShape, body: &Map) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.default(visited = [])", "end");
        self.writer
            .write(&format!("return nil if visited.include?('{}')", name));
        self.writer
            .write(&format!("visited = visited + ['{}']", name));
        let value_default = self.default_value(body.value())?;
        self.writer.open_block("{", "}");
        self.writer
            .write(&format!("test_key: {},", value_default));
        self.writer.close_block()?;
        self.writer.close_block()?;
        self.writer.blank();
        self.writer.open_block("def self.stub(stub = {})", "end");
        self.writer.write("stub ||= {}");
        self.writer.write("data = {}");
        self.writer.open_block("stub.each do |key, value|", "end");
        let expr = self.stub_value(body.value(), "value")?;
        self.writer
            .write(&format!("data[key] = {} unless value.nil?", expr));
        self.writer.close_block()?;
        self.writer.write("data");
        self.writer.close_block()?;
        self.writer.close_block()
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn simple_default(simple: Simple, member_name: &str, shape_name: &str) -> String {
    match simple {
        Simple::String => ruby_string(member_name),
        Simple::Blob => ruby_string(member_name),
        Simple::Boolean => "false".to_string(),
        Simple::Byte | Simple::Short | Simple::Integer | Simple::Long | Simple::BigInteger => {
            "1".to_string()
        }
        Simple::Float | Simple::Double | Simple::BigDecimal => "1.0".to_string(),
        Simple::Timestamp => "Time.now".to_string(),
        Simple::Document => format!("{{ '{}' => [0, 1, 2] }}", shape_name),
    }
}

/*!
Emits `builders.rb`; a request builder per operation honoring the operation's HTTP bindings, and
a serializer class per transitive aggregate shape. Builders construct the request in a fixed
order: method, path labels and static query, query members, headers, then the body.
*/

use crate::bindings::{
    host_label_member, host_prefix, member_has, member_string, timestamp_format, BindingLocation,
    HttpTrait, QueryBinding, StructureBindings, TimestampFormat,
};
use crate::context::GenerationContext;
use crate::generators::{begin_file, open_modules, ruby_string};
use crate::protocol::PayloadCodec;
use crate::uri::{HostPrefixTemplate, PathSegment};
use crate::writer::RubyWriter;
use garnet_core::error::{ErrorKind, Result};
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::{
    HasTraits, ListOrSet, Map, MemberShape, Simple, StructureOrUnion, TopLevelShape,
};
use garnet_core::model::visitor::{visit_shape, ShapeVisitor};
use garnet_core::model::{ShapeID, Target};
use garnet_core::prelude::{TRAIT_MEDIATYPE, TRAIT_SPARSE, TRAIT_STREAMING};
use log::warn;
use std::collections::HashSet;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Generate `builders.rb` for every operation of the service and the transitive aggregate
/// shapes of each operation's input.
///
pub fn generate(ctx: &mut GenerationContext<'_>, codec: &PayloadCodec) -> Result<()> {
    let mut writer = RubyWriter::new();
    begin_file(&mut writer, &["base64", "stringio"]);
    open_modules(&mut writer, ctx, Some("Builders"));

    let mut generator = BuildersGenerator {
        ctx: &mut *ctx,
        codec,
        writer,
        emitted: Default::default(),
    };
    for operation in generator.ctx.operations()? {
        generator.operation_builder(operation)?;
        if let Some(input) = super::input_root(operation) {
            generator.shapes_of(input)?;
        }
    }

    let mut writer = generator.writer;
    writer.close_all()?;
    let path = ctx.settings.lib_path("builders");
    ctx.manifest.write_file(&path, writer.finish()?)
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

struct BuildersGenerator<'a, 'b> {
    ctx: &'b mut GenerationContext<'a>,
    codec: &'b PayloadCodec,
    writer: RubyWriter,
    emitted: HashSet<ShapeID>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl<'a, 'b> BuildersGenerator<'a, 'b> {
    fn shapes_of(&mut self, root: &ShapeID) -> Result<()> {
        // The input structure itself is serialized inline by the operation builder.
        let _ = self.emitted.insert(root.clone());
        let walker = self.ctx.model.walk(root);
        for result in walker {
            let shape = result?;
            if shape.id() != root && !self.emitted.insert(shape.id().clone()) {
                continue;
            }
            if shape.id() == root {
                continue;
            }
            visit_shape(self, shape)?;
        }
        Ok(())
    }

    fn operation_builder(&mut self, operation: &'a TopLevelShape) -> Result<()> {
        let http = HttpTrait::of(operation)?;
        let name = self.ctx.symbols.shape_symbol(operation).name().to_string();
        let input = match super::input_root(operation) {
            Some(input) => Some(self.ctx.model.expect_shape(input)?),
            None => None,
        };
        let empty = StructureOrUnion::new();
        let structure = input
            .and_then(|shape| shape.body().as_structure())
            .unwrap_or(&empty);
        let bindings = StructureBindings::index(self.ctx.model, structure);

        self.writer.blank();
        self.writer
            .write(&format!("# Builder for {}.", name));
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.build(http_req, input:)", "end");

        self.writer.write(&format!(
            "http_req.http_method = {}",
            ruby_string(&http.method)
        ));
        self.host_label_checks(operation, structure)?;
        self.path(&http, &bindings)?;
        self.query(&http, &bindings)?;
        self.headers(&bindings)?;
        self.body(&bindings)?;

        self.writer.close_block()?;
        self.writer.close_block()
    }

    // --------------------------------------------------------------------------------------------

    ///
    /// Host prefix labels from the `endpoint` trait carry the same runtime check as path
    /// labels; the prefix itself renders through the HostPrefix middleware.
    ///
    fn host_label_checks(
        &mut self,
        operation: &TopLevelShape,
        structure: &StructureOrUnion,
    ) -> Result<()> {
        let prefix = match host_prefix(operation) {
            Some(prefix) => prefix,
            None => return Ok(()),
        };
        let template = HostPrefixTemplate::parse(&prefix)?;
        for label in template.labels() {
            let member = host_label_member(self.ctx.model, structure, label).ok_or_else(|| {
                ErrorKind::UnknownMember(format!("no hostLabel member for '{{{}}}'", label))
            })?;
            let member_name = self.ctx.symbols.member_name(member);
            self.writer.open_block(
                &format!("if input[:{}].to_s.empty?", member_name),
                "end",
            );
            self.writer.write(&format!(
                "raise ArgumentError, \"Host label :{} cannot be nil or empty.\"",
                member_name
            ));
            self.writer.close_block()?;
        }
        Ok(())
    }

    fn path(&mut self, http: &HttpTrait, bindings: &StructureBindings<'_>) -> Result<()> {
        if !http.uri.has_labels() {
            let path: String = http
                .uri
                .segments()
                .map(|segment| match segment {
                    PathSegment::Literal(text) => format!("/{}", text),
                    _ => unreachable!(),
                })
                .collect();
            let path = if path.is_empty() { "/".to_string() } else { path };
            self.writer
                .write(&format!("http_req.append_path({})", ruby_string(&path)));
            return Ok(());
        }
        for (label, _greedy) in http.uri.labels() {
            let member = bindings.label_named(label).ok_or_else(|| {
                ErrorKind::UnknownMember(format!("no httpLabel member for '{{{}}}'", label))
            })?;
            let member_name = self.ctx.symbols.member_name(member);
            self.writer.open_block(
                &format!("if input[:{}].to_s.empty?", member_name),
                "end",
            );
            self.writer.write(&format!(
                "raise ArgumentError, \"HTTP label :{} cannot be nil or empty.\"",
                member_name
            ));
            self.writer.close_block()?;
        }
        self.writer.write("http_req.append_path(format(");
        self.writer.indent();
        self.writer.indent();
        self.writer
            .write(&format!("{},", ruby_string(&http.uri.format_string())));
        let labels = http.uri.labels();
        for (index, (label, greedy)) in labels.iter().enumerate() {
            let member = bindings.label_named(label).unwrap();
            let member_name = self.ctx.symbols.member_name(member);
            let value = self.label_value(member, &member_name)?;
            let expr = if *greedy {
                format!(
                    "{}.split('/').map {{ |s| Garnet::HTTP.uri_escape(s) }}.join('/')",
                    value
                )
            } else {
                format!("Garnet::HTTP.uri_escape({})", value)
            };
            let separator = if index + 1 == labels.len() { "" } else { "," };
            self.writer
                .write(&format!("{}: {}{}", label, expr, separator));
        }
        self.writer.outdent();
        self.writer.write(")");
        self.writer.outdent();
        self.writer.write(")");
        Ok(())
    }

    fn label_value(&mut self, member: &MemberShape, member_name: &str) -> Result<String> {
        let expr = format!("input[:{}]", member_name);
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(Simple::Timestamp) => Ok(self.timestamp_expr(
                member,
                &expr,
                BindingLocation::Label,
            )),
            Target::Shape(shape) if matches!(shape.body().as_simple(), Some(Simple::Timestamp)) => {
                Ok(self.timestamp_expr(member, &expr, BindingLocation::Label))
            }
            _ => Ok(format!("{}.to_s", expr)),
        }
    }

    fn timestamp_expr(
        &mut self,
        member: &MemberShape,
        value_expr: &str,
        location: BindingLocation,
    ) -> String {
        let format = timestamp_format(
            self.ctx.model,
            member,
            location,
            self.codec.body_timestamp_format,
        );
        timestamp_call(format, value_expr)
    }

    // --------------------------------------------------------------------------------------------

    fn query(&mut self, http: &HttpTrait, bindings: &StructureBindings<'_>) -> Result<()> {
        let static_query: Vec<(String, Option<String>)> =
            http.uri.static_query().cloned().collect();
        if static_query.is_empty() && bindings.query.is_empty() {
            return Ok(());
        }
        self.writer.write("params = Garnet::Query::ParamList.new");
        for (key, value) in &static_query {
            self.writer.write(&format!(
                "params[{}] = {}",
                ruby_string(key),
                ruby_string(value.as_deref().unwrap_or(""))
            ));
        }
        for binding in &bindings.query {
            match binding {
                QueryBinding::Named(member, query_name) => {
                    let member_name = self.ctx.symbols.member_name(member);
                    let expr = self.query_value(member, &format!("input[:{}]", member_name))?;
                    self.writer.write(&format!(
                        "params[{}] = {} unless input[:{}].nil?",
                        ruby_string(query_name),
                        expr,
                        member_name
                    ));
                }
                QueryBinding::Params(member) => {
                    let member_name = self.ctx.symbols.member_name(member);
                    let value_expr = self.query_params_value(member)?;
                    self.writer.write(&format!(
                        "input[:{}].each {{ |k, v| params[k] = {} }} unless input[:{}].nil?",
                        member_name, value_expr, member_name
                    ));
                }
            }
        }
        self.writer.write("http_req.append_query_param_list(params)");
        Ok(())
    }

    fn query_value(&mut self, member: &MemberShape, value_expr: &str) -> Result<String> {
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(simple) => Ok(query_simple(
                simple,
                value_expr,
                self.query_timestamp(member),
            )),
            Target::Shape(shape) => match shape.body() {
                garnet_core::model::shapes::ShapeKind::Simple(simple) => Ok(query_simple(
                    *simple,
                    value_expr,
                    self.query_timestamp(member),
                )),
                garnet_core::model::shapes::ShapeKind::List(body)
                | garnet_core::model::shapes::ShapeKind::Set(body) => {
                    let element = self.query_element(body.member())?;
                    Ok(format!("{}.map {{ |value| {} }}", value_expr, element))
                }
                _ => {
                    warn!(
                        "query member '{}' targets an unsupported shape; serialized with to_s",
                        member.id()
                    );
                    Ok(format!("{}.to_s", value_expr))
                }
            },
        }
    }

    fn query_element(&mut self, member: &MemberShape) -> Result<String> {
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(simple) => Ok(query_simple(simple, "value", self.query_timestamp(member))),
            Target::Shape(shape) => match shape.body().as_simple() {
                Some(simple) => Ok(query_simple(*simple, "value", self.query_timestamp(member))),
                None => Ok("value.to_s".to_string()),
            },
        }
    }

    fn query_timestamp(&mut self, member: &MemberShape) -> TimestampFormat {
        timestamp_format(
            self.ctx.model,
            member,
            BindingLocation::Query,
            self.codec.body_timestamp_format,
        )
    }

    fn query_params_value(&mut self, member: &MemberShape) -> Result<String> {
        // map values append as-is; lists of values append as repeated pairs
        if let Target::Shape(shape) = self.ctx.model.resolve_target(member.target())? {
            if let Some(map) = shape.body().as_map() {
                if let Target::Shape(value_shape) =
                    self.ctx.model.resolve_target(map.value().target())?
                {
                    if value_shape.is_list() || value_shape.is_set() {
                        return Ok("v.map { |value| value.to_s }".to_string());
                    }
                }
                return Ok("v.to_s".to_string());
            }
        }
        Ok("v.to_s".to_string())
    }

    // --------------------------------------------------------------------------------------------

    fn headers(&mut self, bindings: &StructureBindings<'_>) -> Result<()> {
        let headers: Vec<(&MemberShape, String)> = bindings
            .headers
            .iter()
            .map(|(member, name)| (*member, name.clone()))
            .collect();
        for (member, header_name) in headers {
            let member_name = self.ctx.symbols.member_name(member);
            let expr = self.header_value(member, &format!("input[:{}]", member_name))?;
            self.writer.write(&format!(
                "http_req.headers[{}] = {} unless input[:{}].nil?",
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
                "input[:{}].each {{ |key, value| http_req.headers[\"{}#{{key}}\"] = value }} unless input[:{}].nil?",
                member_name, prefix, member_name
            ));
        }
        Ok(())
    }

    fn header_value(&mut self, member: &MemberShape, value_expr: &str) -> Result<String> {
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(simple) => Ok(self.header_simple(member, simple, value_expr)),
            Target::Shape(shape) => match shape.body() {
                garnet_core::model::shapes::ShapeKind::Simple(simple) => {
                    Ok(self.header_simple(member, *simple, value_expr))
                }
                garnet_core::model::shapes::ShapeKind::List(body)
                | garnet_core::model::shapes::ShapeKind::Set(body) => {
                    let element = self.header_element(body.member())?;
                    let quoted = ".map { |value| (value.include?('\"') || value.include?(',')) ? \"\\\"#{value.gsub('\"', '\\\"')}\\\"\" : value }";
                    Ok(format!(
                        "{}.compact.map {{ |value| {} }}{}.join(', ')",
                        value_expr, element, quoted
                    ))
                }
                _ => {
                    warn!(
                        "header member '{}' targets an unsupported shape; serialized with to_s",
                        member.id()
                    );
                    Ok(format!("{}.to_s", value_expr))
                }
            },
        }
    }

    fn header_simple(&mut self, member: &MemberShape, simple: Simple, value_expr: &str) -> String {
        match simple {
            Simple::String => {
                if member_string(self.ctx.model, member, TRAIT_MEDIATYPE).is_some() {
                    format!("::Base64::strict_encode64({}).strip", value_expr)
                } else {
                    value_expr.to_string()
                }
            }
            Simple::Timestamp => self.timestamp_expr(member, value_expr, BindingLocation::Header),
            Simple::Blob => format!("::Base64::strict_encode64({}).strip", value_expr),
            _ => format!("{}.to_s", value_expr),
        }
    }

    fn header_element(&mut self, member: &MemberShape) -> Result<String> {
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(Simple::Timestamp) => Ok(timestamp_call(
                timestamp_format(
                    self.ctx.model,
                    member,
                    BindingLocation::Header,
                    self.codec.body_timestamp_format,
                ),
                "value",
            )),
            Target::Shape(shape) if matches!(shape.body().as_simple(), Some(Simple::Timestamp)) => {
                Ok(timestamp_call(
                    timestamp_format(
                        self.ctx.model,
                        member,
                        BindingLocation::Header,
                        self.codec.body_timestamp_format,
                    ),
                    "value",
                ))
            }
            _ => Ok("value.to_s".to_string()),
        }
    }

    // --------------------------------------------------------------------------------------------

    fn body(&mut self, bindings: &StructureBindings<'_>) -> Result<()> {
        if let Some(member) = bindings.payload {
            return self.payload_body(member);
        }
        if !bindings.has_document_body() {
            return Ok(());
        }
        self.writer.write(&format!(
            "http_req.headers['Content-Type'] = {}",
            ruby_string(self.codec.content_type)
        ));
        self.writer.write("data = {}");
        let members: Vec<&MemberShape> = bindings.body.clone();
        for member in members {
            let member_name = self.ctx.symbols.member_name(member);
            let wire_name = member.member_name().to_string();
            let (expr, _) =
                self.body_value(member, &format!("input[:{}]", member_name))?;
            self.writer.write(&format!(
                "data[{}] = {} unless input[:{}].nil?",
                ruby_string(&wire_name),
                expr,
                member_name
            ));
        }
        self.writer.write(&format!(
            "http_req.body = StringIO.new({}(data))",
            self.codec.dump_fn
        ));
        Ok(())
    }

    fn payload_body(&mut self, member: &MemberShape) -> Result<()> {
        let member_name = self.ctx.symbols.member_name(member);
        let content_type = member_string(self.ctx.model, member, TRAIT_MEDIATYPE);
        let streaming = member_has(self.ctx.model, member, TRAIT_STREAMING);
        self.writer
            .open_block(&format!("unless input[:{}].nil?", member_name), "end");
        match self.ctx.model.resolve_target(member.target())? {
            Target::Shape(shape) if shape.is_structure() || shape.is_union() => {
                let builder = self.ctx.symbols.shape_symbol(shape).name().to_string();
                self.writer.write(&format!(
                    "http_req.headers['Content-Type'] = {}",
                    ruby_string(
                        content_type
                            .as_deref()
                            .unwrap_or(self.codec.content_type)
                    )
                ));
                self.writer.write(&format!(
                    "http_req.body = StringIO.new({}({}.build(input[:{}])))",
                    self.codec.dump_fn, builder, member_name
                ));
            }
            Target::Simple(Simple::Blob) | Target::Simple(Simple::String) => {
                self.writer.write(&format!(
                    "http_req.headers['Content-Type'] = {}",
                    ruby_string(
                        content_type
                            .as_deref()
                            .unwrap_or("application/octet-stream")
                    )
                ));
                if streaming {
                    self.writer
                        .write(&format!("http_req.body = input[:{}]", member_name));
                } else {
                    self.writer.write(&format!(
                        "http_req.body = StringIO.new(input[:{}])",
                        member_name
                    ));
                }
            }
            Target::Shape(shape)
                if matches!(
                    shape.body().as_simple(),
                    Some(Simple::Blob) | Some(Simple::String)
                ) =>
            {
                self.writer.write(&format!(
                    "http_req.headers['Content-Type'] = {}",
                    ruby_string(
                        content_type
                            .as_deref()
                            .unwrap_or("application/octet-stream")
                    )
                ));
                if streaming {
                    self.writer
                        .write(&format!("http_req.body = input[:{}]", member_name));
                } else {
                    self.writer.write(&format!(
                        "http_req.body = StringIO.new(input[:{}])",
                        member_name
                    ));
                }
            }
            _ => {
                return Err(ErrorKind::NotImplemented(format!(
                    "httpPayload member '{}'",
                    member.id()
                ))
                .into());
            }
        }
        self.writer.close_block()
    }

    ///
    /// The body serialization of one member; the second element is `true` when the target is an
    /// aggregate handled by a generated serializer class.
    ///
    fn body_value(&mut self, member: &MemberShape, value_expr: &str) -> Result<(String, bool)> {
        match self.ctx.model.resolve_target(member.target())? {
            Target::Simple(simple) => Ok((
                self.body_simple(member, simple, value_expr),
                false,
            )),
            Target::Shape(shape) => {
                if shape.is_structure()
                    || shape.is_union()
                    || shape.is_list()
                    || shape.is_set()
                    || shape.is_map()
                {
                    let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
                    Ok((format!("{}.build({})", name, value_expr), true))
                } else if let Some(simple) = shape.body().as_simple() {
                    Ok((self.body_simple(member, *simple, value_expr), false))
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

    fn body_simple(&mut self, member: &MemberShape, simple: Simple, value_expr: &str) -> String {
        match simple {
            Simple::Timestamp => {
                let expr = self.timestamp_expr(member, value_expr, BindingLocation::Body);
                if timestamp_format(
                    self.ctx.model,
                    member,
                    BindingLocation::Body,
                    self.codec.body_timestamp_format,
                ) == TimestampFormat::EpochSeconds
                {
                    format!("{}.to_i", expr)
                } else {
                    expr
                }
            }
            Simple::Blob => format!("::Base64::strict_encode64({})", value_expr),
            _ => value_expr.to_string(),
        }
    }
}

impl<'a, 'b> ShapeVisitor for BuildersGenerator<'a, 'b> {
    type Output = Result<()>;

    fn default_shape(&mut self, _shape: &TopLevelShape) -> Self::Output {
        Ok(())
    }

    fn structure(&mut self, shape: &TopLevelShape, body: &StructureOrUnion) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer.open_block("def self.build(input)", "end");
        self.writer.write("data = {}");
        let members: Vec<&MemberShape> = body.members().collect();
        for member in members {
            let member_name = self.ctx.symbols.member_name(member);
            let wire_name = member.member_name().to_string();
            let (expr, _) = self.body_value(member, &format!("input[:{}]", member_name))?;
            self.writer.write(&format!(
                "data[{}] = {} unless input[:{}].nil?",
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
        self.writer.open_block("def self.build(input)", "end");
        self.writer.write("data = {}");
        self.writer.open_block("case input", "end");
        let members: Vec<&MemberShape> = body.members().collect();
        for member in members {
            use heck::CamelCase;
            let variant = member.member_name().as_ref().to_camel_case();
            let wire_name = member.member_name().to_string();
            self.writer
                .write(&format!("when Types::{}::{}", name, variant));
            self.writer.indent();
            let (expr, _) = self.body_value(member, "input.__getobj__")?;
            self.writer.write(&format!(
                "data[{}] = {}",
                ruby_string(&wire_name),
                expr
            ));
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
        let sparse = is_sparse(shape);
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer.open_block("def self.build(input)", "end");
        self.writer.write("data = []");
        self.writer.open_block("input.each do |element|", "end");
        let (expr, _) = self.body_value(body.member(), "element")?;
        if sparse {
            self.writer
                .write(&format!("data << (element.nil? ? nil : {})", expr));
        } else {
            self.writer
                .write(&format!("data << {} unless element.nil?", expr));
        }
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
        let sparse = is_sparse(shape);
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer.open_block("def self.build(input)", "end");
        self.writer.write("data = {}");
        self.writer.open_block("input.each do |key, value|", "end");
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

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn timestamp_call(format: TimestampFormat, value_expr: &str) -> String {
    match format {
        TimestampFormat::EpochSeconds => {
            format!("Garnet::TimeHelper.to_epoch_seconds({})", value_expr)
        }
        TimestampFormat::HttpDate => format!("Garnet::TimeHelper.to_http_date({})", value_expr),
        TimestampFormat::DateTime => format!("Garnet::TimeHelper.to_date_time({})", value_expr),
    }
}

fn query_simple(simple: Simple, value_expr: &str, format: TimestampFormat) -> String {
    match simple {
        Simple::String => value_expr.to_string(),
        Simple::Timestamp => timestamp_call(format, value_expr),
        _ => format!("{}.to_s", value_expr),
    }
}

fn is_sparse(shape: &TopLevelShape) -> bool {
    shape.has_prelude_trait(TRAIT_SPARSE)
}

/*!
Emits `params.rb`; per-shape normalizers that turn loosely-typed user input (hashes, arrays) into
the strict `Types` records, validating the container types on the way in.
*/

use crate::context::GenerationContext;
use crate::generators::{begin_file, open_modules};
use crate::writer::RubyWriter;
use garnet_core::error::Result;
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::{
    HasTraits, ListOrSet, Map, MemberShape, StructureOrUnion, TopLevelShape,
};
use garnet_core::model::visitor::{visit_shape, ShapeVisitor};
use garnet_core::model::{ShapeID, Target};
use garnet_core::prelude::TRAIT_IDEMPOTENCYTOKEN;
use heck::CamelCase;
use std::collections::HashSet;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Generate `params.rb` for every shape reachable from the service's operation inputs.
///
pub fn generate(ctx: &mut GenerationContext<'_>) -> Result<()> {
    let uses_idempotency_token = inputs_use_idempotency_token(ctx)?;
    let mut writer = RubyWriter::new();
    let requires: &[&str] = if uses_idempotency_token {
        &["securerandom"]
    } else {
        &[]
    };
    begin_file(&mut writer, requires);
    open_modules(&mut writer, ctx, Some("Params"));

    let mut generator = ParamsGenerator {
        ctx: &mut *ctx,
        writer,
        emitted: Default::default(),
    };
    for operation in generator.ctx.operations()? {
        if let Some(input) = super::input_root(operation) {
            generator.shapes_of(input)?;
        }
    }

    let mut writer = generator.writer;
    writer.close_all()?;
    let path = ctx.settings.lib_path("params");
    ctx.manifest.write_file(&path, writer.finish()?)
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

struct ParamsGenerator<'a, 'b> {
    ctx: &'b mut GenerationContext<'a>,
    writer: RubyWriter,
    emitted: HashSet<ShapeID>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl<'a, 'b> ParamsGenerator<'a, 'b> {
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

    ///
    /// The expression normalizing one value; nested aggregates delegate to their own `build`.
    /// The second element is `true` when the expression must be guarded against `nil`.
    ///
    fn build_expr(
        &mut self,
        target: &ShapeID,
        value_expr: &str,
        context_expr: &str,
    ) -> Result<(String, bool)> {
        match self.ctx.model.resolve_target(target)? {
            Target::Simple(_) => Ok((value_expr.to_string(), false)),
            Target::Shape(shape) => {
                if shape.is_structure()
                    || shape.is_union()
                    || shape.is_list()
                    || shape.is_set()
                    || shape.is_map()
                {
                    let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
                    Ok((
                        format!(
                            "{}.build({}, context: \"{}\")",
                            name, value_expr, context_expr
                        ),
                        true,
                    ))
                } else {
                    Ok((value_expr.to_string(), false))
                }
            }
        }
    }
}

impl<'a, 'b> ShapeVisitor for ParamsGenerator<'a, 'b> {
    type Output = Result<()>;

    fn default_shape(&mut self, _shape: &TopLevelShape) -> Self::Output {
        Ok(())
    }

    fn structure(&mut self, shape: &TopLevelShape, body: &StructureOrUnion) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer
            .open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.build(params, context: '')", "end");
        self.writer.write(&format!(
            "Garnet::Params.validate_types!(params, ::Hash, Types::{}, context: context)",
            name
        ));
        self.writer.write(&format!("type = Types::{}.new", name));
        let members: Vec<(String, &MemberShape)> = body
            .members()
            .map(|member| (self.ctx.symbols.member_name(member), member))
            .collect();
        for (member_name, member) in members {
            let value_expr = format!("params[:{}]", member_name);
            let context_expr = format!("#{{context}}[:{}]", member_name);
            if member.has_prelude_trait(TRAIT_IDEMPOTENCYTOKEN) {
                self.writer.write(&format!(
                    "type.{} = params[:{}] || ::SecureRandom.uuid",
                    member_name, member_name
                ));
                continue;
            }
            let (expr, guard) = self.build_expr(member.target(), &value_expr, &context_expr)?;
            if guard {
                self.writer.write(&format!(
                    "type.{} = {} unless params[:{}].nil?",
                    member_name, expr, member_name
                ));
            } else {
                self.writer
                    .write(&format!("type.{} = {}", member_name, expr));
            }
        }
        self.writer.write("type");
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn union(&mut self, shape: &TopLevelShape, body: &StructureOrUnion) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer
            .open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.build(params, context: '')", "end");
        self.writer
            .write(&format!("return params if params.is_a?(Types::{})", name));
        self.writer.write(&format!(
            "Garnet::Params.validate_types!(params, ::Hash, Types::{}, context: context)",
            name
        ));
        self.writer
            .open_block("unless params.size == 1", "end");
        self.writer.write(
            "raise ArgumentError, \"Expected #{context} to have exactly one member, got: #{params}\"",
        );
        self.writer.close_block()?;
        self.writer.write("key, value = params.flatten");
        self.writer.open_block("case key", "end");
        let members: Vec<(String, String, &MemberShape)> = body
            .members()
            .map(|member| {
                (
                    self.ctx.symbols.member_name(member),
                    member.member_name().as_ref().to_camel_case(),
                    member,
                )
            })
            .collect();
        let member_names: Vec<String> = members
            .iter()
            .map(|(member_name, _, _)| format!(":{}", member_name))
            .collect();
        for (member_name, variant, member) in members {
            self.writer.write(&format!("when :{}", member_name));
            self.writer.indent();
            let context_expr = format!("#{{context}}[:{}]", member_name);
            let (expr, guard) = self.build_expr(member.target(), "value", &context_expr)?;
            if guard {
                self.writer.write(&format!(
                    "Types::{}::{}.new(({} unless value.nil?))",
                    name, variant, expr
                ));
            } else {
                self.writer
                    .write(&format!("Types::{}::{}.new({})", name, variant, expr));
            }
            self.writer.outdent();
        }
        self.writer.write("else");
        self.writer.indent();
        self.writer.write(&format!(
            "raise ArgumentError, \"Expected #{{context}} to have one of {} set\"",
            member_names.join(", ")
        ));
        self.writer.outdent();
        self.writer.close_block()?;
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn list(&mut self, shape: &TopLevelShape, body: &ListOrSet) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer
            .open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.build(params, context: '')", "end");
        self.writer
            .write("Garnet::Params.validate_types!(params, ::Array, context: context)");
        self.writer
            .open_block("params.each_with_index.map do |element, index|", "end");
        let (expr, _) =
            self.build_expr(body.member().target(), "element", "#{context}[#{index}]")?;
        self.writer.write(&expr);
        self.writer.close_block()?;
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn set(&mut self, shape: &TopLevelShape, body: &ListOrSet) -> Self::Output {
        self.list(shape, body)
    }

    fn map(&mut self, shape: &TopLevelShape, body: &Map) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer
            .open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.build(params, context: '')", "end");
        self.writer
            .write("Garnet::Params.validate_types!(params, ::Hash, context: context)");
        self.writer.write("data = {}");
        self.writer.open_block("params.each do |key, value|", "end");
        let (expr, guard) =
            self.build_expr(body.value().target(), "value", "#{context}[#{key}]")?;
        if guard {
            self.writer
                .write(&format!("data[key] = {} unless value.nil?", expr));
        } else {
            self.writer.write(&format!("data[key] = {}", expr));
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

fn inputs_use_idempotency_token(ctx: &GenerationContext<'_>) -> Result<bool> {
    for operation in ctx.operations()? {
        if let Some(input) = super::input_root(operation) {
            for result in ctx.model.walk(input) {
                let shape = result?;
                if let Some(structure) = shape.body().as_structure() {
                    if structure
                        .members()
                        .any(|member| member.has_prelude_trait(TRAIT_IDEMPOTENCYTOKEN))
                    {
                        return Ok(true);
                    }
                }
            }
        }
    }
    Ok(false)
}

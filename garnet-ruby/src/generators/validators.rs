/*!
Emits `validators.rb`; per-shape validators that check member kinds recursively, required-ness,
and the IO-likeness of streaming members, raising `Garnet::Errors::ValidationError` with a
dotted path context on failure.
*/

use crate::bindings::member_has;
use crate::context::GenerationContext;
use crate::generators::{begin_file, enum_values_of, open_modules, ruby_string};
use crate::writer::RubyWriter;
use garnet_core::error::Result;
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::{
    HasTraits, ListOrSet, Map, MemberShape, Simple, StructureOrUnion, TopLevelShape,
};
use garnet_core::model::visitor::{visit_shape, ShapeVisitor};
use garnet_core::model::{ShapeID, Target};
use garnet_core::prelude::TRAIT_STREAMING;
use heck::CamelCase;
use std::collections::HashSet;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Generate `validators.rb` for every shape reachable from the service's operation inputs.
///
pub fn generate(ctx: &mut GenerationContext<'_>) -> Result<()> {
    let mut writer = RubyWriter::new();
    begin_file(&mut writer, &[]);
    open_modules(&mut writer, ctx, Some("Validators"));

    let mut generator = ValidatorsGenerator {
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
    let path = ctx.settings.lib_path("validators");
    ctx.manifest.write_file(&path, writer.finish()?)
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

struct ValidatorsGenerator<'a, 'b> {
    ctx: &'b mut GenerationContext<'a>,
    writer: RubyWriter,
    emitted: HashSet<ShapeID>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl<'a, 'b> ValidatorsGenerator<'a, 'b> {
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
    /// The validation lines for one value expression against its target. The second element is
    /// `true` when the lines must be guarded against a `nil` value.
    ///
    fn validate_value(
        &mut self,
        target: &ShapeID,
        streaming: bool,
        value_expr: &str,
        context_expr: &str,
    ) -> Result<(Vec<String>, bool)> {
        if streaming {
            return Ok((
                vec![format!(
                    "Garnet::Validator.validate_responds_to!({}, :read, :rewind, context: \"{}\")",
                    value_expr, context_expr
                )],
                false,
            ));
        }
        match self.ctx.model.resolve_target(target)? {
            Target::Simple(simple) => Ok((
                simple_checks(simple, value_expr, context_expr),
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
                    Ok((
                        vec![format!(
                            "{}.validate!({}, context: \"{}\")",
                            name, value_expr, context_expr
                        )],
                        true,
                    ))
                } else if let Some(simple) = shape.body().as_simple() {
                    let mut lines = simple_checks(*simple, value_expr, context_expr);
                    if let Some(values) = enum_values_of(shape) {
                        let list = values
                            .iter()
                            .map(|value| ruby_string(value))
                            .collect::<Vec<String>>()
                            .join(", ");
                        lines.push(format!(
                            "Garnet::Validator.validate_included!({}, [{}], context: \"{}\")",
                            value_expr, list, context_expr
                        ));
                    }
                    Ok((lines, false))
                } else {
                    Ok((Default::default(), false))
                }
            }
        }
    }
}

impl<'a, 'b> ShapeVisitor for ValidatorsGenerator<'a, 'b> {
    type Output = Result<()>;

    fn default_shape(&mut self, _shape: &TopLevelShape) -> Self::Output {
        Ok(())
    }

    fn structure(&mut self, shape: &TopLevelShape, body: &StructureOrUnion) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.validate!(input, context:)", "end");
        self.writer.write(&format!(
            "Garnet::Validator.validate_types!(input, Types::{}, context: context)",
            name
        ));
        let members: Vec<(String, bool, bool, &MemberShape)> = body
            .members()
            .map(|member| {
                (
                    self.ctx.symbols.member_name(member),
                    member.is_required(),
                    member_has(self.ctx.model, member, TRAIT_STREAMING),
                    member,
                )
            })
            .collect();
        for (member_name, required, streaming, member) in members {
            let value_expr = format!("input[:{}]", member_name);
            let context_expr = format!("#{{context}}[:{}]", member_name);
            if required {
                self.writer.write(&format!(
                    "Garnet::Validator.validate_required!({}, context: \"{}\")",
                    value_expr, context_expr
                ));
            }
            let (lines, guard) =
                self.validate_value(member.target(), streaming, &value_expr, &context_expr)?;
            for line in lines {
                if guard {
                    self.writer
                        .write(&format!("{} unless {}.nil?", line, value_expr));
                } else {
                    self.writer.write(&line);
                }
            }
        }
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn union(&mut self, shape: &TopLevelShape, body: &StructureOrUnion) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.validate!(input, context:)", "end");
        self.writer.open_block("case input", "end");
        let members: Vec<(String, &MemberShape)> = body
            .members()
            .map(|member| (member.member_name().as_ref().to_camel_case(), member))
            .collect();
        for (variant, member) in members {
            self.writer
                .write(&format!("when Types::{}::{}", name, variant));
            self.writer.indent();
            let (lines, guard) = self.validate_value(
                member.target(),
                false,
                "input.__getobj__",
                "#{context}",
            )?;
            for line in lines {
                if guard {
                    self.writer
                        .write(&format!("{} unless input.__getobj__.nil?", line));
                } else {
                    self.writer.write(&line);
                }
            }
            self.writer.outdent();
        }
        self.writer.write("else");
        self.writer.indent();
        self.writer.write(&format!(
            "raise Garnet::Errors::ValidationError, \"Expected #{{context}} to be a union member of Types::{}, got #{{input.class}}.\"",
            name
        ));
        self.writer.outdent();
        self.writer.close_block()?;
        self.writer.close_block()?;
        self.writer.close_block()
    }

    fn list(&mut self, shape: &TopLevelShape, body: &ListOrSet) -> Self::Output {
        let name = self.ctx.symbols.shape_symbol(shape).name().to_string();
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.validate!(input, context:)", "end");
        self.writer
            .write("Garnet::Validator.validate_types!(input, ::Array, context: context)");
        self.writer
            .open_block("input.each_with_index do |element, index|", "end");
        let (lines, _) = self.validate_value(
            body.member().target(),
            false,
            "element",
            "#{context}[#{index}]",
        )?;
        for line in lines {
            self.writer
                .write(&format!("{} unless element.nil?", line));
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
        self.writer.blank();
        self.writer.open_block(&format!("class {}", name), "end");
        self.writer
            .open_block("def self.validate!(input, context:)", "end");
        self.writer
            .write("Garnet::Validator.validate_types!(input, ::Hash, context: context)");
        self.writer.open_block("input.each do |key, value|", "end");
        self.writer.write(
            "Garnet::Validator.validate_types!(key, ::String, ::Symbol, context: \"#{context}.keys\")",
        );
        let (lines, guard) = self.validate_value(
            body.value().target(),
            false,
            "value",
            "#{context}[#{key}]",
        )?;
        for line in lines {
            if guard {
                self.writer.write(&format!("{} unless value.nil?", line));
            } else {
                self.writer.write(&line);
            }
        }
        self.writer.close_block()?;
        self.writer.close_block()?;
        self.writer.close_block()
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn simple_checks(simple: Simple, value_expr: &str, context_expr: &str) -> Vec<String> {
    let types = match simple {
        Simple::Blob | Simple::String => "::String",
        Simple::Boolean => "::TrueClass, ::FalseClass",
        Simple::Byte | Simple::Short | Simple::Integer | Simple::Long | Simple::BigInteger => {
            "::Integer"
        }
        Simple::Float | Simple::Double => "::Float, ::Integer",
        Simple::BigDecimal => "::Numeric",
        Simple::Timestamp => "::Time",
        Simple::Document => return Default::default(),
    };
    vec![format!(
        "Garnet::Validator.validate_types!({}, {}, context: \"{}\")",
        value_expr, types, context_expr
    )]
}

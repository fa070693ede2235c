/*!
The application-transport model; the constructor fragments and default middleware an emitted
client uses to move bytes. The default HTTP transport builds requests from the `endpoint`
config value, clients from the `logger`/`log_level`/`http_wire_trace` values, and composes the
standard pipeline: Validate, Build, HostPrefix, ContentLength, ContentMD5, Send, and Parse.
*/

use crate::bindings::{has_streaming_payload, host_label_member, host_prefix, HttpTrait};
use crate::context::GenerationContext;
use crate::middleware::{MiddlewareRecord, MiddlewareStep};
use crate::uri::{HostPrefixPart, HostPrefixTemplate};
use garnet_core::error::{ErrorKind, Result};
use garnet_core::model::identity::HasIdentity;
use garnet_core::model::shapes::{HasTraits, TopLevelShape};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// One key in the emitted client configuration.
///
#[derive(Clone, Debug)]
pub struct ConfigField {
    name: String,
    ruby_type: String,
    default_expr: Option<String>,
    documentation: String,
    operation_override: bool,
}

///
/// An HTTP-like transport; the request, response, and client constructor fragments plus the
/// transport's configuration keys and default middleware.
///
#[derive(Debug)]
pub struct ApplicationTransport {
    name: String,
    request_fragment: String,
    response_fragment: String,
    client_fragment: String,
    config: Vec<ConfigField>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl ConfigField {
    /// Construct a new config field.
    pub fn new(name: &str, ruby_type: &str, default_expr: Option<&str>, documentation: &str) -> Self {
        Self {
            name: name.to_string(),
            ruby_type: ruby_type.to_string(),
            default_expr: default_expr.map(str::to_string),
            documentation: documentation.to_string(),
            operation_override: false,
        }
    }

    /// Mark this key as overridable per operation call through the `options` hash.
    pub fn with_operation_override(mut self) -> Self {
        self.operation_override = true;
        self
    }

    /// Returns `true` if this key may be overridden per operation call, else `false`.
    pub fn operation_override(&self) -> bool {
        self.operation_override
    }

    /// The config key name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The Ruby type the emitted validation checks for.
    pub fn ruby_type(&self) -> &str {
        &self.ruby_type
    }

    /// The Ruby expression providing the default value, if any.
    pub fn default_expr(&self) -> Option<&str> {
        self.default_expr.as_deref()
    }

    /// The documentation emitted above the key.
    pub fn documentation(&self) -> &str {
        &self.documentation
    }
}

// ------------------------------------------------------------------------------------------------

impl ApplicationTransport {
    /// The transport name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The Ruby expression constructing the per-request shell.
    pub fn request_fragment(&self) -> &str {
        &self.request_fragment
    }

    /// The Ruby expression constructing the per-request response shell.
    pub fn response_fragment(&self) -> &str {
        &self.response_fragment
    }

    /// The Ruby expression constructing the transport client.
    pub fn client_fragment(&self) -> &str {
        &self.client_fragment
    }

    /// The configuration keys this transport contributes to the client config.
    pub fn config(&self) -> impl Iterator<Item = &ConfigField> {
        self.config.iter()
    }

    ///
    /// The default middleware for this transport, in registration order.
    ///
    pub fn default_middleware(&self) -> Vec<MiddlewareRecord> {
        let client_fragment = self.client_fragment.clone();
        vec![
            MiddlewareRecord::builder("Garnet::Middleware::Validate", MiddlewareStep::Initialize)
                .operation_predicate(|_, _, operation| {
                    operation
                        .body()
                        .as_operation()
                        .map(|body| body.has_input())
                        .unwrap_or(false)
                })
                .operation_params(|ctx, operation| {
                    let input = operation_input(ctx, operation)?;
                    let symbol = ctx.symbols.shape_symbol(input);
                    Ok(vec![
                        (
                            "validator".to_string(),
                            symbol.in_module("Validators"),
                        ),
                        (
                            "validate_input".to_string(),
                            "@config.validate_input".to_string(),
                        ),
                    ])
                })
                .client_config(ConfigField::new(
                    "validate_input",
                    "TrueClass, FalseClass",
                    Some("true"),
                    "When `true`, request parameters are validated using the modeled shapes.",
                ))
                .build(),
            MiddlewareRecord::builder("Garnet::Middleware::Build", MiddlewareStep::Serialize)
                .operation_params(|ctx, operation| {
                    let symbol = ctx.symbols.shape_symbol(operation);
                    Ok(vec![("builder".to_string(), symbol.in_module("Builders"))])
                })
                .build(),
            MiddlewareRecord::builder("Garnet::Middleware::HostPrefix", MiddlewareStep::Build)
                .order(-10)
                .operation_predicate(|_, _, operation| host_prefix(operation).is_some())
                .operation_params(|ctx, operation| {
                    let prefix = host_prefix(operation).ok_or_else(|| {
                        ErrorKind::UnknownMember(format!("{}$endpoint", operation.id()))
                    })?;
                    let template = HostPrefixTemplate::parse(&prefix)?;
                    let rendered = if template.has_labels() {
                        let input = operation_input(ctx, operation)?;
                        let structure = input.body().as_structure().ok_or_else(|| {
                            ErrorKind::InvalidShapeVariant("Structure".to_string())
                        })?;
                        let mut rendered = String::from("\"");
                        for part in template.parts() {
                            match part {
                                HostPrefixPart::Literal(text) => rendered.push_str(
                                    &text
                                        .replace('\\', "\\\\")
                                        .replace('"', "\\\"")
                                        .replace('#', "\\#"),
                                ),
                                HostPrefixPart::Label(label) => {
                                    let member = host_label_member(ctx.model, structure, label)
                                        .ok_or_else(|| {
                                            ErrorKind::UnknownMember(format!(
                                                "no hostLabel member for '{{{}}}'",
                                                label
                                            ))
                                        })?;
                                    let member_name = ctx.symbols.member_name(member);
                                    rendered
                                        .push_str(&format!("#{{input[:{}]}}", member_name));
                                }
                            }
                        }
                        rendered.push('"');
                        rendered
                    } else {
                        format!("'{}'", prefix)
                    };
                    Ok(vec![
                        (
                            "disable_host_prefix".to_string(),
                            "@config.disable_host_prefix".to_string(),
                        ),
                        ("host_prefix".to_string(), rendered),
                    ])
                })
                .client_config(ConfigField::new(
                    "disable_host_prefix",
                    "TrueClass, FalseClass",
                    Some("false"),
                    "When `true`, the modeled host prefix is not prepended to the endpoint host.",
                ))
                .build(),
            MiddlewareRecord::builder("Garnet::Middleware::ContentLength", MiddlewareStep::Build)
                .operation_predicate(|model, _, operation| {
                    !has_streaming_payload(model, operation)
                })
                .build(),
            MiddlewareRecord::builder("Garnet::Middleware::ContentMD5", MiddlewareStep::Build)
                .order(10)
                .operation_predicate(|_, _, operation| operation.is_checksum_required())
                .build(),
            MiddlewareRecord::builder("Garnet::Middleware::Send", MiddlewareStep::Finalize)
                .operation_params(move |ctx, operation| {
                    let symbol = ctx.symbols.shape_symbol(operation);
                    Ok(vec![
                        (
                            "stub_responses".to_string(),
                            "@config.stub_responses".to_string(),
                        ),
                        ("client".to_string(), client_fragment.clone()),
                        ("stub_class".to_string(), symbol.in_module("Stubs")),
                        ("stubs".to_string(), "@stubs".to_string()),
                    ])
                })
                .client_config(ConfigField::new(
                    "stub_responses",
                    "TrueClass, FalseClass",
                    Some("false"),
                    "When `true`, requests are not sent and stubbed responses are returned.",
                ))
                .build(),
            MiddlewareRecord::builder("Garnet::Middleware::Parse", MiddlewareStep::Deserialize)
                .operation_params(|ctx, operation| {
                    let http = HttpTrait::of(operation)?;
                    let errors = operation_errors(ctx, operation)?;
                    let error_list = errors
                        .iter()
                        .map(|error| {
                            let symbol = ctx.symbols.shape_symbol(error);
                            symbol.in_module("Errors")
                        })
                        .collect::<Vec<String>>()
                        .join(", ");
                    let symbol = ctx.symbols.shape_symbol(operation);
                    Ok(vec![
                        (
                            "error_parser".to_string(),
                            format!(
                                "Garnet::HTTP::ErrorParser.new(error_module: Errors, success_status: {}, errors: [{}])",
                                http.code, error_list
                            ),
                        ),
                        ("data_parser".to_string(), symbol.in_module("Parsers")),
                    ])
                })
                .build(),
        ]
    }
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// The default HTTP transport.
///
pub fn http_transport() -> ApplicationTransport {
    ApplicationTransport {
        name: "http".to_string(),
        request_fragment:
            "Garnet::HTTP::Request.new(url: options.fetch(:endpoint, @config.endpoint))"
                .to_string(),
        response_fragment: "Garnet::HTTP::Response.new(body: StringIO.new)".to_string(),
        client_fragment:
            "Garnet::HTTP::Client.new(logger: @config.logger, http_wire_trace: @config.http_wire_trace)"
                .to_string(),
        config: vec![
            ConfigField::new(
                "endpoint",
                "String",
                None,
                "Endpoint of the service; a full URL including the scheme.",
            )
            .with_operation_override(),
            ConfigField::new(
                "http_wire_trace",
                "TrueClass, FalseClass",
                Some("false"),
                "When `true`, HTTP debug output is sent to the configured logger.",
            ),
            ConfigField::new(
                "log_level",
                "Symbol",
                Some(":info"),
                "The default log level to use with the logger.",
            ),
            ConfigField::new(
                "logger",
                "Logger",
                Some("proc { |cfg| Logger.new($stdout, level: cfg[:log_level]) }"),
                "The logger used to emit log messages.",
            ),
        ],
    }
}

///
/// The input structure shape of an operation; absence is a model integrity failure at the call
/// sites that require one.
///
pub fn operation_input<'a>(
    ctx: &GenerationContext<'a>,
    operation: &TopLevelShape,
) -> Result<&'a TopLevelShape> {
    let body = operation
        .body()
        .as_operation()
        .ok_or_else(|| ErrorKind::InvalidShapeVariant("Operation".to_string()))?;
    let input = body
        .input()
        .ok_or_else(|| ErrorKind::UnknownMember(format!("{}$input", operation.id())))?;
    ctx.model.expect_shape(input)
}

///
/// The error shapes declared on an operation, in model order.
///
pub fn operation_errors<'a>(
    ctx: &GenerationContext<'a>,
    operation: &TopLevelShape,
) -> Result<Vec<&'a TopLevelShape>> {
    let body = operation
        .body()
        .as_operation()
        .ok_or_else(|| ErrorKind::InvalidShapeVariant("Operation".to_string()))?;
    body.errors()
        .map(|error| ctx.model.expect_shape(error))
        .collect()
}

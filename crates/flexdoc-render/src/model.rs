//! Serializable view model handed to the templates.
//!
//! Both renderers share this model, so everything that decides *what* is
//! shown (defaults, fallbacks, expansion, the schema preview) lives here and
//! the templates only decide layout.

use flexdoc_core::config::ShellConfig;
use flexdoc_core::options::{SchemaPreview, ViewerOptions};
use flexdoc_core::parse::path_item::Operation;
use flexdoc_core::parse::request_body::RequestBodyOrRef;
use flexdoc_core::parse::response::{ResponseOrRef, is_json};
use flexdoc_core::parse::schema::SchemaOrRef;
use flexdoc_core::parse::security::{ApiKeyLocation, SecuritySchemeType};
use flexdoc_core::project::{DocumentView, HttpMethod, OperationEntry};
use flexdoc_core::theme::{MethodColor, Palette, PaletteOverrides, Theme};
use flexdoc_core::{OpenApiDocument, SectionId, SelectionState};
use heck::ToKebabCase;
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "API Documentation";
pub const DEFAULT_VERSION: &str = "1.0";
pub const DEFAULT_DESCRIPTION: &str = "Example API demonstrating Swagger integration";
/// Title shown when a selected operation has no summary at render time.
pub const FALLBACK_OPERATION_TITLE: &str = "Create a pet";
pub const NO_SUMMARY: &str = "No summary";
pub const NO_AUTH: &str = "No authentication required";
pub const MISSING_SPEC: &str = "No OpenAPI specification provided";
pub const SIDEBAR_FOOTER: &str = "Powered by FlexDoc";

/// Everything a renderer needs besides the view and the state. The theme is
/// always resolved before it gets here.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub theme: Theme,
    pub options: ViewerOptions,
    pub palette: PaletteOverrides,
    pub shell: ShellConfig,
    /// ANSI colours in text output.
    pub color: bool,
}

impl RenderContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            options: ViewerOptions::default(),
            palette: PaletteOverrides::default(),
            shell: ShellConfig::default(),
            color: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewerModel {
    pub missing: bool,
    pub missing_message: &'static str,
    pub theme: &'static str,
    pub toggle_theme: &'static str,
    pub palette: Palette,
    /// Palette of the other theme, for the page shell's toggle.
    pub toggle_palette: Palette,
    pub header: HeaderModel,
    pub sidebar: SidebarModel,
    pub overview: Option<OverviewModel>,
    pub detail: Option<DetailModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderModel {
    pub title: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarModel {
    pub show_search: bool,
    pub search_term: String,
    pub groups: Vec<GroupModel>,
    pub footer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupModel {
    pub name: String,
    pub anchor: String,
    pub description: Option<String>,
    pub count: usize,
    pub expanded: bool,
    pub endpoints: Vec<EndpointModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointModel {
    pub id: String,
    pub method: String,
    pub color: &'static str,
    pub hex: &'static str,
    pub path: String,
    pub summary: String,
    pub operation_id: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewModel {
    pub cards: Vec<CardModel>,
    pub distribution: Vec<MethodCellModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardModel {
    pub label: &'static str,
    pub value: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodCellModel {
    pub method: &'static str,
    pub count: usize,
    pub color: &'static str,
    pub hex: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailModel {
    pub id: String,
    pub method: String,
    pub color: &'static str,
    pub hex: &'static str,
    pub path: String,
    pub title: String,
    pub description: Option<String>,
    pub operation_id: Option<String>,
    pub deprecated: bool,
    pub auth: String,
    pub request_body: Option<RequestBodyModel>,
    pub responses_expanded: bool,
    pub responses: Vec<ResponseModel>,
    pub code_examples_expanded: bool,
    pub code_example: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestBodyModel {
    pub required: bool,
    pub expanded: bool,
    pub description: Option<String>,
    pub content_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseModel {
    pub status: String,
    pub description: String,
    pub content_type: Option<String>,
    pub schema: Option<SchemaPreviewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaPreviewModel {
    pub kind: String,
    pub fields: Vec<FieldModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldModel {
    pub name: String,
    pub type_label: String,
    pub required: bool,
    pub description: Option<String>,
}

impl ViewerModel {
    pub fn build(view: &DocumentView<'_>, state: &SelectionState, ctx: &RenderContext) -> Self {
        let palette = Palette::resolve(ctx.theme, &ctx.palette);
        let toggle_palette = Palette::resolve(ctx.theme.toggled(), &ctx.palette);
        let Some(doc) = view.document() else {
            return Self {
                missing: true,
                missing_message: MISSING_SPEC,
                theme: ctx.theme.as_str(),
                toggle_theme: ctx.theme.toggled().as_str(),
                palette,
                toggle_palette,
                header: header(None, &ctx.options),
                sidebar: SidebarModel {
                    show_search: false,
                    search_term: String::new(),
                    groups: Vec::new(),
                    footer: SIDEBAR_FOOTER,
                },
                overview: None,
                detail: None,
            };
        };

        let detail = state
            .selected_entry(view)
            .map(|entry| detail(doc, entry, state, &ctx.options));
        let overview = detail.is_none().then(|| overview(view));
        log::debug!(
            "building {} view ({} theme)",
            if detail.is_some() { "detail" } else { "overview" },
            ctx.theme.as_str()
        );

        Self {
            missing: false,
            missing_message: MISSING_SPEC,
            theme: ctx.theme.as_str(),
            toggle_theme: ctx.theme.toggled().as_str(),
            palette,
            toggle_palette,
            header: header(Some(doc), &ctx.options),
            sidebar: sidebar(doc, view, state, &ctx.options),
            overview,
            detail,
        }
    }
}

fn header(doc: Option<&OpenApiDocument>, options: &ViewerOptions) -> HeaderModel {
    let info = doc.map(|d| &d.info);
    HeaderModel {
        title: options
            .title
            .clone()
            .or_else(|| info.and_then(|i| i.title.clone()))
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        version: info
            .and_then(|i| i.version.clone())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        description: info
            .and_then(|i| i.description.clone())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
    }
}

fn sidebar(
    doc: &OpenApiDocument,
    view: &DocumentView<'_>,
    state: &SelectionState,
    options: &ViewerOptions,
) -> SidebarModel {
    let selected = state.selected();
    let groups = view
        .sidebar_groups(options, state.search_term())
        .into_iter()
        .map(|(name, ops)| {
            let expanded = state.is_group_expanded(name);
            GroupModel {
                name: name.to_string(),
                anchor: format!("group-{}", name.to_kebab_case()),
                description: doc.tag_description(name).map(String::from),
                count: ops.len(),
                expanded,
                endpoints: ops
                    .iter()
                    .map(|op| EndpointModel {
                        id: op.id.to_string(),
                        method: op.method.to_string(),
                        color: color_of(&op.method).name(),
                        hex: color_of(&op.method).hex(),
                        path: op.path.to_string(),
                        summary: op.summary().unwrap_or(NO_SUMMARY).to_string(),
                        operation_id: options
                            .display_operation_id
                            .then(|| op.operation.operation_id.clone())
                            .flatten(),
                        selected: selected == Some(&op.id),
                    })
                    .collect(),
            }
        })
        .collect();

    SidebarModel {
        show_search: options.filter,
        search_term: state.search_term().to_string(),
        groups,
        footer: SIDEBAR_FOOTER,
    }
}

fn overview(view: &DocumentView<'_>) -> OverviewModel {
    let stats = view.statistics();
    OverviewModel {
        cards: vec![
            CardModel {
                label: "Total Endpoints",
                value: stats.endpoint_count,
            },
            CardModel {
                label: "Servers",
                value: stats.server_count,
            },
            CardModel {
                label: "Tags",
                value: stats.group_count,
            },
            CardModel {
                label: "Security Schemes",
                value: stats.security_scheme_count,
            },
        ],
        distribution: stats
            .distribution()
            .into_iter()
            .map(|(method, count)| {
                let color = MethodColor::for_method(method);
                MethodCellModel {
                    method,
                    count,
                    color: color.name(),
                    hex: color.hex(),
                }
            })
            .collect(),
    }
}

fn detail(
    doc: &OpenApiDocument,
    entry: &OperationEntry<'_>,
    state: &SelectionState,
    options: &ViewerOptions,
) -> DetailModel {
    let op = entry.operation;
    let color = color_of(&entry.method);

    let request_body = op.request_body.as_ref().map(|body| RequestBodyModel {
        required: body.is_required(),
        expanded: state.is_expanded(&SectionId::RequestBody),
        description: match body {
            RequestBodyOrRef::RequestBody(b) => b.description.clone(),
            RequestBodyOrRef::Ref { ref_path } => Some(ref_path.clone()),
        },
        content_types: body.content_types().into_iter().map(String::from).collect(),
    });

    let responses = op
        .responses
        .iter()
        .map(|(status, response)| response_model(status, response, options.schema_preview))
        .collect();

    DetailModel {
        id: entry.id.to_string(),
        method: entry.method.to_string(),
        color: color.name(),
        hex: color.hex(),
        path: entry.path.to_string(),
        title: entry
            .summary()
            .unwrap_or(FALLBACK_OPERATION_TITLE)
            .to_string(),
        description: op.description.clone(),
        operation_id: op.operation_id.clone(),
        deprecated: op.deprecated,
        auth: auth_label(doc, op),
        request_body,
        responses_expanded: state.is_expanded(&SectionId::Responses),
        responses,
        code_examples_expanded: state.is_expanded(&SectionId::CodeExamples),
        code_example: curl_example(doc, entry, options.hide_hostname),
    }
}

fn response_model(status: &str, response: &ResponseOrRef, preview: SchemaPreview) -> ResponseModel {
    match response {
        ResponseOrRef::Ref { ref_path } => ResponseModel {
            status: status.to_string(),
            description: ref_path.clone(),
            content_type: None,
            schema: None,
        },
        ResponseOrRef::Response(r) => {
            let json = r.json_content();
            let content_type = json
                .map(|(ct, _)| ct.to_string())
                .or_else(|| r.content.keys().next().cloned());
            let schema = json.map(|(_, media)| match preview {
                SchemaPreview::Placeholder => placeholder_preview(),
                SchemaPreview::Declared => declared_preview(media.schema.as_ref()),
            });
            ResponseModel {
                status: status.to_string(),
                description: r.description.clone(),
                content_type,
                schema,
            }
        }
    }
}

/// The fixed example structure shown for every JSON response.
pub fn placeholder_preview() -> SchemaPreviewModel {
    let field = |name: &str, type_label: &str, description: &str| FieldModel {
        name: name.to_string(),
        type_label: type_label.to_string(),
        required: true,
        description: Some(description.to_string()),
    };
    SchemaPreviewModel {
        kind: "Object".to_string(),
        fields: vec![
            field("name", "string", "The name of the pet"),
            field("species", "string", "The species of the pet"),
            field("age", "number", "The age of the pet"),
            field("id", "number", "The unique identifier of the pet"),
        ],
    }
}

/// Top-level properties of the declared schema. References are not
/// followed; a `$ref` schema shows only its target.
pub fn declared_preview(schema: Option<&SchemaOrRef>) -> SchemaPreviewModel {
    match schema {
        None => SchemaPreviewModel {
            kind: "any".to_string(),
            fields: Vec::new(),
        },
        Some(SchemaOrRef::Ref { ref_path }) => SchemaPreviewModel {
            kind: ref_path.clone(),
            fields: Vec::new(),
        },
        Some(SchemaOrRef::Schema(s)) => SchemaPreviewModel {
            kind: s.type_label(),
            fields: s
                .properties
                .iter()
                .map(|(name, prop)| FieldModel {
                    name: name.clone(),
                    type_label: prop.type_label(),
                    required: s.is_required(name),
                    description: match prop {
                        SchemaOrRef::Schema(p) => p.description.clone(),
                        SchemaOrRef::Ref { .. } => None,
                    },
                })
                .collect(),
        },
    }
}

/// Operation-level security wins over the document default; an explicit
/// empty list means no authentication.
fn auth_label(doc: &OpenApiDocument, op: &Operation) -> String {
    let names = required_schemes(doc, op);
    if names.is_empty() {
        return NO_AUTH.to_string();
    }
    let schemes = doc.components.as_ref().map(|c| &c.security_schemes);
    names
        .iter()
        .map(|name| match schemes.and_then(|s| s.get(*name)) {
            Some(scheme) => format!("{name} ({})", scheme.label()),
            None => name.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn required_schemes<'d>(doc: &'d OpenApiDocument, op: &'d Operation) -> Vec<&'d str> {
    let requirements = op.security.as_ref().or(doc.security.as_ref());
    let mut names: Vec<&str> = Vec::new();
    for requirement in requirements.into_iter().flatten() {
        for name in requirement.keys() {
            if !names.contains(&name.as_str()) {
                names.push(name.as_str());
            }
        }
    }
    names
}

fn curl_example(doc: &OpenApiDocument, entry: &OperationEntry<'_>, hide_hostname: bool) -> Vec<String> {
    let base = if hide_hostname {
        ""
    } else {
        doc.servers
            .first()
            .map(|s| s.url.trim_end_matches('/'))
            .unwrap_or("")
    };
    let mut lines = vec![format!("curl -X {} \"{}{}\"", entry.method, base, entry.path)];

    if let Some(content_type) = entry
        .operation
        .request_body
        .as_ref()
        .and_then(|b| b.content_types().first().map(|ct| ct.to_string()))
    {
        lines.push(format!("-H \"Content-Type: {content_type}\""));
        if is_json(&content_type) {
            lines.push("-d '{}'".to_string());
        }
    }

    let schemes = doc.components.as_ref().map(|c| &c.security_schemes);
    for name in required_schemes(doc, entry.operation) {
        let Some(scheme) = schemes.and_then(|s| s.get(name)) else {
            continue;
        };
        let header = match scheme.scheme_type {
            SecuritySchemeType::Http => match scheme.scheme.as_deref().map(str::to_ascii_lowercase).as_deref() {
                Some("basic") => Some("Authorization: Basic <credentials>".to_string()),
                _ => Some("Authorization: Bearer <token>".to_string()),
            },
            SecuritySchemeType::ApiKey if scheme.location == Some(ApiKeyLocation::Header) => scheme
                .name
                .as_ref()
                .map(|header| format!("{header}: <api-key>")),
            SecuritySchemeType::OAuth2 | SecuritySchemeType::OpenIdConnect => {
                Some("Authorization: Bearer <token>".to_string())
            }
            _ => None,
        };
        if let Some(header) = header {
            lines.push(format!("-H \"{header}\""));
        }
    }

    let last = lines.len() - 1;
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let indent = if i == 0 { "" } else { "  " };
            let cont = if i == last { "" } else { " \\" };
            format!("{indent}{line}{cont}")
        })
        .collect()
}

fn color_of(method: &HttpMethod) -> MethodColor {
    MethodColor::for_method(method.as_str())
}

use tera::{Context, Tera};
use tracing::info;

use crate::context::ReportContext;
use crate::error::ExportError;
use crate::template::{DEFAULT_REPORT_TEMPLATE, DEFAULT_TEMPLATE_NAME};

/// Render a Tera template with a report context.
///
/// The `template_content` is the raw template string (Jinja2 syntax); the
/// context fields become the template variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    context: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let tera_context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &tera_context)?;
    info!(template = template_name, len = rendered.len(), "report rendered");
    Ok(rendered)
}

/// Render with the built-in report template.
pub fn render_default_report(context: &ReportContext) -> Result<String, ExportError> {
    render_template(DEFAULT_TEMPLATE_NAME, DEFAULT_REPORT_TEMPLATE, context)
}

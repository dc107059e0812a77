use crate::app::controllers::target_document;
use crate::app::domain::{Document, SigSettings};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::host::{EditorHost, StyleToken};
use crate::app::services::signature_ranges;

/// Owns the process-wide decoration style and paints signature ranges with it.
#[derive(Debug, Default)]
pub struct VisibilityController {
    style: Option<StyleToken>,
}

impl VisibilityController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> Option<StyleToken> {
        self.style
    }

    /// Dim every signature in `document`.
    ///
    /// The style token is recreated first so it always reflects the current
    /// settings, even when `enabled` is off and nothing is drawn.
    pub fn apply<H: EditorHost + ?Sized>(
        &mut self,
        host: &H,
        document: Option<&Document>,
        settings: &SigSettings,
    ) -> Result<()> {
        let Some(doc) = target_document(document) else {
            return Ok(());
        };

        let token = self.restyle(host, settings);
        if !settings.enabled {
            tracing::debug!("signature hiding disabled, style refreshed only");
            return Ok(());
        }

        let ranges = signature_ranges(&doc.text);
        tracing::debug!(document = doc.id.0, count = ranges.len(), "decorating signatures");
        host.apply_decorations(token, &ranges)
    }

    /// Dispose the current style token and create a fresh one from `settings`.
    pub fn restyle<H: EditorHost + ?Sized>(&mut self, host: &H, settings: &SigSettings) -> StyleToken {
        if let Some(old) = self.style.take() {
            host.dispose_decoration_style(old);
        }
        let token = host.create_decoration_style(&settings.decoration_options());
        self.style = Some(token);
        token
    }

    /// Release the style token, removing its decorations.
    pub fn teardown<H: EditorHost + ?Sized>(&mut self, host: &H) {
        if let Some(token) = self.style.take() {
            host.dispose_decoration_style(token);
        }
    }
}

use crate::app::controllers::target_document;
use crate::app::domain::{Document, Position, Selection, SigSettings};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::host::{EditorHost, HostCommand};
use crate::app::services::{LineIndex, SignatureKind, signature_regions};

/// One caret per block signature that should collapse.
///
/// A block whose lines contain the primary cursor is left open.
pub fn foldable_selections(document: &Document) -> Vec<Selection> {
    let index = LineIndex::new(&document.text);
    let cursor_line = document.cursor_line();

    signature_regions(&document.text, SignatureKind::Block)
        .into_iter()
        .map(|region| index.range(region.start, region.end))
        .filter(|range| !range.contains_line(cursor_line))
        .map(|range| Selection::caret(Position::new(range.start.line, 0)))
        .collect()
}

/// Collapse every block signature the cursor is not in.
///
/// The host's fold commands act on the current selections, so the fold
/// targets are selected, `unfoldAll` then `fold` run in order, and the user's
/// primary selection is put back.
pub async fn apply_folding<H: EditorHost + ?Sized>(
    host: &H,
    document: Option<&Document>,
    settings: &SigSettings,
) -> Result<()> {
    let Some(doc) = target_document(document) else {
        return Ok(());
    };
    if !settings.enabled {
        return Ok(());
    }

    let original = doc.primary_selection();
    let targets = foldable_selections(doc);
    if targets.is_empty() {
        tracing::debug!(document = doc.id.0, "no signatures to fold");
        return Ok(());
    }

    tracing::debug!(document = doc.id.0, count = targets.len(), "folding signatures");
    host.set_selections(targets);
    host.execute_command(HostCommand::UnfoldAll).await?;
    host.execute_command(HostCommand::Fold).await?;
    host.set_selections(vec![original]);
    Ok(())
}

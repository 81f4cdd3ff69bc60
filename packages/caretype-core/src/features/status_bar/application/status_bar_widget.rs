//! Status bar widget
//!
//! Turns editor events into the `(label, name)` pair shown in the status bar.
//! Events are handled synchronously in delivery order and every event fully
//! overwrites the state of its editor.

use std::collections::HashMap;

use crate::config::{CaretypeConfig, StatusBarConfig};
use crate::features::status_bar::domain::{DisplayState, EditorEvent, EditorId};
use crate::features::status_bar::ports::{DocumentSource, UpdateSink, WidgetUpdate};
use crate::features::type_hint::InferAtCursorUseCase;

const DISPLAY_NAME: &str = "Caret Type Status Bar";

pub struct StatusBarWidget<S: UpdateSink> {
    config: StatusBarConfig,
    inference: InferAtCursorUseCase,
    states: HashMap<EditorId, DisplayState>,
    /// Editor whose state `label()` and `name()` report
    active: Option<EditorId>,
    sink: S,
}

impl<S: UpdateSink> StatusBarWidget<S> {
    pub fn new(config: &CaretypeConfig, sink: S) -> Self {
        Self {
            config: config.status_bar.clone(),
            inference: InferAtCursorUseCase::new(config.inference.clone()),
            states: HashMap::new(),
            active: None,
            sink,
        }
    }

    /// Apply one editor event. Returns whether the displayed content changed.
    ///
    /// A caret event with exactly one caret runs inference; anything else
    /// (several carets, removed carets, selection changes, editors without a
    /// document) clears the editor's state.
    pub fn handle<D: DocumentSource>(&mut self, event: &EditorEvent, documents: &D) -> bool {
        let editor = event.editor().clone();

        let next = match event.inference_offset() {
            Some(offset) => match documents.syntax_tree(&editor) {
                Some(tree) => self.inference.infer(tree, offset),
                None => {
                    tracing::debug!(editor = %editor, "no document for editor");
                    None
                }
            },
            None => {
                tracing::trace!(editor = %editor, event = event.event_type(), "clearing state");
                None
            }
        };

        let switched = self.active.as_ref() != Some(&editor);
        self.active = Some(editor.clone());

        let changed = self.states.entry(editor.clone()).or_default().replace(next);
        if changed || switched {
            let update = self.update_for(&editor);
            tracing::debug!(
                editor = %editor,
                label = %update.label,
                name = %update.name,
                "status bar changed"
            );
            self.sink.widget_changed(update);
        }
        changed || switched
    }

    /// Drop the state of a closed editor
    pub fn forget(&mut self, editor: &EditorId) {
        self.states.remove(editor);
        if self.active.as_ref() == Some(editor) {
            self.active = None;
        }
    }

    /// Label of the active editor, or the empty placeholder
    pub fn label(&self) -> String {
        self.active
            .as_ref()
            .map(|editor| self.label_for(editor))
            .unwrap_or_else(|| self.config.empty_label.clone())
    }

    /// Variable name of the active editor, or the unknown placeholder
    pub fn name(&self) -> String {
        self.active
            .as_ref()
            .map(|editor| self.name_for(editor))
            .unwrap_or_else(|| self.config.unknown_name.clone())
    }

    pub fn tooltip(&self) -> String {
        tooltip_text(&self.name())
    }

    pub fn label_for(&self, editor: &EditorId) -> String {
        self.states
            .get(editor)
            .and_then(|state| state.label())
            .unwrap_or(&self.config.empty_label)
            .to_string()
    }

    pub fn name_for(&self, editor: &EditorId) -> String {
        self.states
            .get(editor)
            .and_then(|state| state.name())
            .unwrap_or(&self.config.unknown_name)
            .to_string()
    }

    pub fn active_editor(&self) -> Option<&EditorId> {
        self.active.as_ref()
    }

    pub fn id(&self) -> &str {
        &self.config.widget_id
    }

    pub fn display_name(&self) -> &'static str {
        DISPLAY_NAME
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn update_for(&self, editor: &EditorId) -> WidgetUpdate {
        let name = self.name_for(editor);
        WidgetUpdate {
            editor: editor.clone(),
            label: self.label_for(editor),
            tooltip: tooltip_text(&name),
            name,
        }
    }
}

fn tooltip_text(name: &str) -> String {
    format!("Current variable's name is: {}", name)
}

//! Toolbar runtime: per-button interaction state, captions and clicks.

use skinbar_skin::SkinRegistry;

use crate::composer::ToolbarLayout;
use crate::descriptor::{ButtonDescriptor, EditorCommand, SelectionState};
use crate::resolver::{InteractionState, ResolvedStyle, resolve};

/// The editing engine as seen from the toolbar.
pub trait EditorCommands {
    /// Run a command. The result is not observed by the toolbar; state
    /// changes come back through [`Toolbar::apply_selection`].
    fn execute(&mut self, command: EditorCommand);
}

/// Styles resolved for one registry generation.
#[derive(Debug, Clone)]
struct StyleCache {
    generation: u64,
    styles: Vec<ResolvedStyle>,
}

/// A live toolbar.
#[derive(Debug, Clone)]
pub struct Toolbar {
    layout: ToolbarLayout,
    hovered: Vec<bool>,
    selection: SelectionState,
    cache: Option<StyleCache>,
}

impl Toolbar {
    pub fn new(layout: ToolbarLayout) -> Self {
        let hovered = vec![false; layout.buttons.len()];
        Self {
            layout,
            hovered,
            selection: SelectionState::default(),
            cache: None,
        }
    }

    pub fn buttons(&self) -> &[ButtonDescriptor] {
        &self.layout.buttons
    }

    pub fn len(&self) -> usize {
        self.layout.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.buttons.is_empty()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Interaction state of button `index`.
    pub fn state(&self, index: usize) -> Option<InteractionState> {
        let button = self.layout.buttons.get(index)?;
        Some(InteractionState {
            active: button.is_active(&self.selection),
            hovered: self.hovered[index],
        })
    }

    /// Pointer entered (`true`) or left (`false`) button `index`.
    pub fn set_hovered(&mut self, index: usize, hovered: bool) {
        let Some(slot) = self.hovered.get_mut(index) else {
            log::debug!("hover on missing toolbar button {index}");
            return;
        };
        if *slot != hovered {
            *slot = hovered;
            self.invalidate();
        }
    }

    /// Take a new selection snapshot from the editing engine.
    pub fn apply_selection(&mut self, selection: &SelectionState) {
        if self.selection != *selection {
            self.selection = *selection;
            self.invalidate();
        }
    }

    /// Send button `index`'s command to the editor. Returns `false` if there
    /// is no such button.
    pub fn click(&self, index: usize, editor: &mut dyn EditorCommands) -> bool {
        let Some(button) = self.layout.buttons.get(index) else {
            log::debug!("click on missing toolbar button {index}");
            return false;
        };
        editor.execute(button.command_for(&self.selection));
        true
    }

    /// Resolved styles of every button, in order.
    ///
    /// Cached until the registry's generation or any interaction state
    /// changes.
    pub fn styles(&mut self, registry: &SkinRegistry) -> &[ResolvedStyle] {
        let generation = registry.generation();
        let stale = self
            .cache
            .as_ref()
            .is_none_or(|c| c.generation != generation);
        if stale {
            let ctx = registry.snapshot();
            let styles = (0..self.layout.buttons.len())
                .filter_map(|i| {
                    let state = self.state(i)?;
                    Some(resolve(&self.layout.buttons[i], state, &ctx))
                })
                .collect();
            self.cache = Some(StyleCache { generation, styles });
        }
        match &self.cache {
            Some(c) => &c.styles,
            None => &[],
        }
    }

    /// Caption of the hovered icon button, else the idle caption.
    pub fn caption(&mut self, registry: &SkinRegistry) -> &'static str {
        let idle = self.layout.idle_caption;
        self.styles(registry)
            .iter()
            .find_map(|s| s.hover_caption)
            .unwrap_or(idle)
    }

    fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            log::debug!("toolbar styles invalidated");
        }
    }
}

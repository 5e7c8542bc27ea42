//! Skin registry and the per-call style context.
//!
//! The registry holds every registered token set plus the current skin and
//! editor mode. It has a single writer (the preference handler); readers
//! take an immutable [`StyleContext`] snapshot per resolution call instead of
//! consulting process-wide globals. Every write takes a new generation so
//! the rendering layer can tell that previously resolved styles are stale.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use skinbar_types::config::EditorMode;
use skinbar_types::error::{Result, SkinbarError};

use crate::DEFAULT_SKIN;
use crate::builtin;
use crate::id::SkinId;
use crate::theme::SkinTokens;

static DEFAULT_TOKENS: LazyLock<SkinTokens> = LazyLock::new(SkinTokens::default);

// Shared by all registries, so a generation identifies one registry state
// even across clones.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Immutable inputs of one style resolution.
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    pub skin: SkinId,
    pub mode: EditorMode,
    pub tokens: &'a SkinTokens,
}

impl StyleContext<'_> {
    /// A context over the built-in default token set, independent of any
    /// registry.
    pub fn fallback(skin: SkinId, mode: EditorMode) -> StyleContext<'static> {
        StyleContext {
            skin,
            mode,
            tokens: &DEFAULT_TOKENS,
        }
    }
}

/// Registered skins and the current skin/editor-mode selection.
#[derive(Debug, Clone)]
pub struct SkinRegistry {
    skins: HashMap<SkinId, SkinTokens>,
    current: SkinId,
    mode: EditorMode,
    generation: u64,
}

impl Default for SkinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SkinRegistry {
    /// An empty registry. Lookups fall back to the default token set until
    /// skins are registered.
    pub fn new() -> Self {
        Self {
            skins: HashMap::new(),
            current: DEFAULT_SKIN,
            mode: EditorMode::Edit,
            generation: next_generation(),
        }
    }

    /// A registry with every built-in skin registered.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        for &id in builtin::builtin_ids() {
            match builtin::load_builtin(id) {
                Ok(tokens) => reg.register(id, tokens),
                Err(e) => log::error!("Built-in skin {id} failed to load: {e}"),
            }
        }
        reg
    }

    /// Insert or replace a skin's token set.
    pub fn register(&mut self, skin: SkinId, tokens: SkinTokens) {
        self.skins.insert(skin, tokens);
        self.generation = next_generation();
    }

    pub fn contains(&self, skin: SkinId) -> bool {
        self.skins.contains_key(&skin)
    }

    /// Registered skins, in menu order.
    pub fn registered(&self) -> Vec<SkinId> {
        SkinId::ALL
            .into_iter()
            .filter(|id| self.skins.contains_key(id))
            .collect()
    }

    /// Look up a skin's token set.
    pub fn tokens(&self, skin: SkinId) -> Result<&SkinTokens> {
        self.skins
            .get(&skin)
            .ok_or_else(|| SkinbarError::UnknownSkin(skin.name().to_string()))
    }

    /// Look up a skin's token set, falling back to the default set.
    pub fn tokens_or_default(&self, skin: SkinId) -> &SkinTokens {
        match self.tokens(skin) {
            Ok(tokens) => tokens,
            Err(e) => {
                log::warn!("{e} -- using default skin tokens");
                &DEFAULT_TOKENS
            },
        }
    }

    pub fn current_skin(&self) -> SkinId {
        self.current
    }

    /// Switch the current skin. Takes effect on the next resolution.
    pub fn set_skin(&mut self, skin: SkinId) {
        if self.current != skin {
            log::info!("Skin switched: {} -> {skin}", self.current);
            self.current = skin;
            self.generation = next_generation();
        }
    }

    /// Switch skins by display name.
    pub fn select_by_name(&mut self, name: &str) -> Result<SkinId> {
        let skin: SkinId = name.parse()?;
        self.set_skin(skin);
        Ok(skin)
    }

    pub fn editor_mode(&self) -> EditorMode {
        self.mode
    }

    pub fn set_editor_mode(&mut self, mode: EditorMode) {
        if self.mode != mode {
            log::info!("Editor mode switched: {} -> {mode}", self.mode);
            self.mode = mode;
            self.generation = next_generation();
        }
    }

    /// Identifies the registry state. Every write, on any registry, yields a
    /// value never seen before; a clone shares its source's value until one
    /// of them is written.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Context for the current selection.
    pub fn snapshot(&self) -> StyleContext<'_> {
        self.context_for(self.current, self.mode)
    }

    /// Context for an explicit skin and mode.
    pub fn context_for(&self, skin: SkinId, mode: EditorMode) -> StyleContext<'_> {
        StyleContext {
            skin,
            mode,
            tokens: self.tokens_or_default(skin),
        }
    }
}

/// A registry shared between threads behind one exclusive lock.
///
/// Only needed when the host is multi-threaded; a single UI thread can own
/// a plain [`SkinRegistry`].
#[derive(Debug, Clone, Default)]
pub struct SharedSkinRegistry {
    inner: Arc<Mutex<SkinRegistry>>,
}

impl SharedSkinRegistry {
    pub fn new(registry: SkinRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    // Registry state is valid after any panic, so a poisoned lock is reused.
    fn lock(&self) -> MutexGuard<'_, SkinRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_skin(&self, skin: SkinId) {
        self.lock().set_skin(skin);
    }

    pub fn current_skin(&self) -> SkinId {
        self.lock().current_skin()
    }

    pub fn tokens(&self, skin: SkinId) -> Result<SkinTokens> {
        self.lock().tokens(skin).cloned()
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation()
    }

    /// Run `f` with the registry locked.
    pub fn with<R>(&self, f: impl FnOnce(&SkinRegistry) -> R) -> R {
        f(&self.lock())
    }

    /// Run `f` with the registry locked for writing.
    pub fn update<R>(&self, f: impl FnOnce(&mut SkinRegistry) -> R) -> R {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinbar_types::color::Color;

    #[test]
    fn new_is_empty() {
        let reg = SkinRegistry::new();
        assert!(reg.registered().is_empty());
        assert_eq!(reg.current_skin(), DEFAULT_SKIN);
        assert_eq!(reg.editor_mode(), EditorMode::Edit);
    }

    #[test]
    fn with_builtins_registers_all() {
        let reg = SkinRegistry::with_builtins();
        assert_eq!(reg.registered(), SkinId::ALL.to_vec());
    }

    #[test]
    fn tokens_missing_is_unknown_skin() {
        let reg = SkinRegistry::new();
        let err = reg.tokens(SkinId::Lcars).unwrap_err();
        assert!(matches!(err, SkinbarError::UnknownSkin(ref n) if n == "LCARS"));
    }

    #[test]
    fn tokens_or_default_falls_back() {
        let reg = SkinRegistry::new();
        assert_eq!(*reg.tokens_or_default(SkinId::Lcars), SkinTokens::default());
    }

    #[test]
    fn register_is_idempotent_overwrite() {
        let mut reg = SkinRegistry::new();
        let mut tokens = SkinTokens::default();
        tokens.palette.text = Color::YELLOW;
        reg.register(SkinId::TerminalLog, tokens.clone());
        reg.register(SkinId::TerminalLog, tokens.clone());
        assert_eq!(reg.registered(), vec![SkinId::TerminalLog]);
        assert_eq!(*reg.tokens(SkinId::TerminalLog).unwrap(), tokens);
    }

    #[test]
    fn set_skin_bumps_generation_once() {
        let mut reg = SkinRegistry::with_builtins();
        let g = reg.generation();
        reg.set_skin(SkinId::Lcars);
        let switched = reg.generation();
        assert!(switched > g);
        reg.set_skin(SkinId::Lcars);
        assert_eq!(reg.generation(), switched);
        assert_eq!(reg.current_skin(), SkinId::Lcars);
    }

    #[test]
    fn diverging_clones_never_share_a_generation() {
        let mut a = SkinRegistry::with_builtins();
        let mut b = a.clone();
        assert_eq!(a.generation(), b.generation());
        a.set_skin(SkinId::TerminalLog);
        b.set_skin(SkinId::Lcars);
        assert_ne!(a.generation(), b.generation());
    }

    #[test]
    fn fresh_registries_differ() {
        let a = SkinRegistry::with_builtins();
        let mut b = SkinRegistry::with_builtins();
        b.set_skin(SkinId::Lcars);
        let c = SkinRegistry::with_builtins();
        assert_ne!(a.generation(), b.generation());
        assert_ne!(b.generation(), c.generation());
    }

    #[test]
    fn select_by_name() {
        let mut reg = SkinRegistry::with_builtins();
        assert_eq!(
            reg.select_by_name("the establishment").unwrap(),
            SkinId::TheEstablishment
        );
        assert_eq!(reg.current_skin(), SkinId::TheEstablishment);
        assert!(reg.select_by_name("Borg").is_err());
        assert_eq!(reg.current_skin(), SkinId::TheEstablishment);
    }

    #[test]
    fn editor_mode_switch() {
        let mut reg = SkinRegistry::new();
        let g = reg.generation();
        reg.set_editor_mode(EditorMode::Log);
        assert_eq!(reg.editor_mode(), EditorMode::Log);
        assert!(reg.generation() > g);
    }

    #[test]
    fn snapshot_reflects_selection() {
        let mut reg = SkinRegistry::with_builtins();
        reg.set_skin(SkinId::Lcars);
        reg.set_editor_mode(EditorMode::Log);
        let ctx = reg.snapshot();
        assert_eq!(ctx.skin, SkinId::Lcars);
        assert_eq!(ctx.mode, EditorMode::Log);
        assert!(ctx.tokens.capsule.is_some());
    }

    #[test]
    fn fallback_context_uses_default_tokens() {
        let ctx = StyleContext::fallback(SkinId::Lcars, EditorMode::Edit);
        assert_eq!(*ctx.tokens, SkinTokens::default());
    }

    #[test]
    fn shared_registry_serializes_access() {
        let shared = SharedSkinRegistry::new(SkinRegistry::with_builtins());
        let handles: Vec<_> = SkinId::ALL
            .into_iter()
            .map(|id| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    shared.set_skin(id);
                    shared.tokens(id).is_ok()
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
        assert!(SkinId::ALL.contains(&shared.current_skin()));
        let registered = shared.with(|reg| reg.registered().len());
        assert_eq!(registered, SkinId::ALL.len());
    }

    #[test]
    fn shared_update_writes_through() {
        let shared = SharedSkinRegistry::default();
        let g = shared.generation();
        shared.update(|reg| reg.set_editor_mode(EditorMode::Log));
        assert_eq!(shared.with(|reg| reg.editor_mode()), EditorMode::Log);
        assert!(shared.generation() > g);
    }
}

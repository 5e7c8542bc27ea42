//! Skin-driven style resolution.
//!
//! [`resolve`] turns a button descriptor, its interaction state and a
//! [`StyleContext`] into a [`ResolvedStyle`]. It is pure and total: the same
//! inputs always give the same output, and every input combination yields a
//! style. Per-skin differences live entirely in the skin's token set, so the
//! function itself has no skin-specific branches.
//!
//! Resolution runs in four steps:
//!
//! 1. Editor-mode override. On the Log surface, skins that are not
//!    icon-only render every button as text with its literal label.
//!    Descriptors flagged `log_text_always` do so even on icon-only skins,
//!    and descriptors without an icon are always text.
//! 2. The skin's rules for the chosen render kind supply frame, padding,
//!    font, corner and border.
//! 3. The effective active flag picks the foreground and background; a
//!    hovered icon button exposes its caption.
//! 4. Skins with a capsule overlay draw a label inside the capsule instead
//!    of a glyph.

use serde::Serialize;

use skinbar_skin::{
    Border, CornerStyle, FontSpec, RenderKind, SkinId, SkinRegistry, StyleContext,
};
use skinbar_types::color::Color;
use skinbar_types::config::EditorMode;
use skinbar_types::layout::{FrameSize, Padding};

use crate::descriptor::{ButtonDescriptor, ButtonRole};
use crate::icon::Icon;
use crate::label::LabelResolver;

/// Interaction state owned by the rendering layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InteractionState {
    pub active: bool,
    pub hovered: bool,
}

impl InteractionState {
    pub const IDLE: Self = Self {
        active: false,
        hovered: false,
    };

    pub fn new(active: bool, hovered: bool) -> Self {
        Self { active, hovered }
    }
}

/// What the rendering layer draws for a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// A glyph.
    Icon,
    /// A word.
    Text,
    /// A word inside a filled capsule; any glyph is ignored.
    Capsule,
}

/// Capsule fill and label placement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CapsuleStyle {
    pub fill: Color,
    pub font: FontSpec,
    pub label_padding: Padding,
}

/// Final visual attributes of one button at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedStyle {
    pub role: ButtonRole,
    pub kind: RenderKind,
    pub presentation: Presentation,
    /// Set for text and capsule presentations.
    pub label: Option<String>,
    /// Set for icon presentations.
    pub icon: Option<Icon>,
    pub foreground: Color,
    pub background: Option<Color>,
    pub background_bottom_inset: u16,
    /// `None` is the platform default font.
    pub font: Option<FontSpec>,
    pub padding: Padding,
    pub frame: Option<FrameSize>,
    pub corner: CornerStyle,
    pub corner_radius: u16,
    pub border: Option<Border>,
    pub capsule: Option<CapsuleStyle>,
    pub hover_caption: Option<&'static str>,
    /// Effective active flag.
    pub active: bool,
}

/// Render kind a descriptor takes in a context.
pub fn render_kind(descriptor: &ButtonDescriptor, ctx: &StyleContext<'_>) -> RenderKind {
    if descriptor.icon.is_none() {
        return RenderKind::Text;
    }
    let log_text =
        ctx.mode == EditorMode::Log && (!ctx.tokens.icon_only || descriptor.log_text_always);
    if log_text {
        RenderKind::Text
    } else {
        RenderKind::Icon
    }
}

/// Resolve the style of one button.
pub fn resolve(
    descriptor: &ButtonDescriptor,
    state: InteractionState,
    ctx: &StyleContext<'_>,
) -> ResolvedStyle {
    let tokens = ctx.tokens;
    let kind = render_kind(descriptor, ctx);
    let rules = tokens.rules(kind);
    let active = state.active && descriptor.shows_active(kind);

    let word = match (kind, descriptor.icon) {
        (RenderKind::Icon, Some(icon)) => LabelResolver::label_for_icon(icon),
        _ => descriptor.label,
    };
    let word = if rules.uppercase {
        word.to_uppercase()
    } else {
        word.to_string()
    };

    let capsule = tokens.capsule.as_ref().map(|c| CapsuleStyle {
        fill: c.fill.resolve(&tokens.palette),
        font: c.font.clone(),
        label_padding: c.label_padding,
    });

    let (presentation, label, icon) = match (&capsule, kind) {
        (Some(_), _) => (Presentation::Capsule, Some(word), None),
        (None, RenderKind::Text) => (Presentation::Text, Some(word), None),
        (None, RenderKind::Icon) => (Presentation::Icon, None, descriptor.icon),
    };

    let hover_caption = (state.hovered && kind == RenderKind::Icon).then_some(descriptor.caption);

    ResolvedStyle {
        role: descriptor.role,
        kind,
        presentation,
        label,
        icon,
        foreground: rules.foreground_for(active, &tokens.palette),
        background: rules.background_for(active, &tokens.palette),
        background_bottom_inset: rules.background_bottom_inset,
        font: rules.font.clone(),
        padding: rules.padding,
        frame: rules.frame,
        corner: rules.corner,
        corner_radius: rules.corner_radius,
        border: rules.border_for(&tokens.palette),
        capsule,
        hover_caption,
        active,
    }
}

/// Resolution against a registry, addressed by skin and mode.
///
/// Skins missing from the registry resolve with the default token set.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    registry: &'a SkinRegistry,
}

impl<'a> StyleResolver<'a> {
    pub fn new(registry: &'a SkinRegistry) -> Self {
        Self { registry }
    }

    pub fn resolve(
        &self,
        descriptor: &ButtonDescriptor,
        state: InteractionState,
        skin: SkinId,
        mode: EditorMode,
    ) -> ResolvedStyle {
        resolve(descriptor, state, &self.registry.context_for(skin, mode))
    }

    /// Resolve with the registry's current skin and editor mode.
    pub fn resolve_current(
        &self,
        descriptor: &ButtonDescriptor,
        state: InteractionState,
    ) -> ResolvedStyle {
        resolve(descriptor, state, &self.registry.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinbar_skin::{ActiveChannel, SkinTokens};

    const MODES: [EditorMode; 2] = [EditorMode::Edit, EditorMode::Log];

    fn states() -> [InteractionState; 4] {
        [
            InteractionState::new(false, false),
            InteractionState::new(true, false),
            InteractionState::new(false, true),
            InteractionState::new(true, true),
        ]
    }

    fn bold() -> ButtonDescriptor {
        ButtonDescriptor::for_role(ButtonRole::Bold)
    }

    #[test]
    fn stock_science_fiction_bold_idle() {
        let reg = SkinRegistry::with_builtins();
        let ctx = reg.context_for(SkinId::StockScienceFiction, EditorMode::Edit);
        let s = resolve(&bold(), InteractionState::IDLE, &ctx);
        assert_eq!(s.presentation, Presentation::Icon);
        assert_eq!(s.icon, Some(Icon::Bold));
        assert!(s.label.is_none());
        assert_eq!(s.foreground, ctx.tokens.palette.icon);
        assert!(s.background.is_none());
        assert_eq!(s.frame, Some(FrameSize::new(36, 30)));
        assert!(!s.active);
    }

    #[test]
    fn stock_science_fiction_bold_active_is_red() {
        let reg = SkinRegistry::with_builtins();
        let ctx = reg.context_for(SkinId::StockScienceFiction, EditorMode::Edit);
        let s = resolve(&bold(), InteractionState::new(true, false), &ctx);
        assert_eq!(s.foreground, Color::RED);
        assert!(s.background.is_none());
        assert!(s.active);
    }

    #[test]
    fn lcars_undo_in_log_is_capsule() {
        let reg = SkinRegistry::with_builtins();
        let ctx = reg.context_for(SkinId::Lcars, EditorMode::Log);
        let undo = ButtonDescriptor::for_role(ButtonRole::Undo);
        let s = resolve(&undo, InteractionState::IDLE, &ctx);
        assert_eq!(s.presentation, Presentation::Capsule);
        assert_eq!(s.label.as_deref(), Some("UNDO"));
        assert_eq!(s.frame, Some(FrameSize::new(90, 36)));
        assert!(s.icon.is_none());
        let capsule = s.capsule.unwrap();
        assert_eq!(capsule.fill, Color::RED);
        assert_eq!(capsule.font, FontSpec::new("Futura-CondensedMedium", 18));
    }

    #[test]
    fn lcars_edit_uses_icon_word_or_generic() {
        let reg = SkinRegistry::with_builtins();
        let ctx = reg.context_for(SkinId::Lcars, EditorMode::Edit);
        let s = resolve(&bold(), InteractionState::IDLE, &ctx);
        assert_eq!(s.kind, RenderKind::Icon);
        assert_eq!(s.presentation, Presentation::Capsule);
        assert_eq!(s.label.as_deref(), Some("BOLD"));
        let sub = ButtonDescriptor::for_role(ButtonRole::Subhead);
        let s = resolve(&sub, InteractionState::IDLE, &ctx);
        assert_eq!(s.label.as_deref(), Some("BUTTON"));
    }

    #[test]
    fn lcars_text_active_is_yellow_foreground() {
        let reg = SkinRegistry::with_builtins();
        let ctx = reg.context_for(SkinId::Lcars, EditorMode::Log);
        let off = resolve(&bold(), InteractionState::IDLE, &ctx);
        let on = resolve(&bold(), InteractionState::new(true, false), &ctx);
        assert_eq!(on.foreground, Color::YELLOW);
        assert_ne!(off.foreground, on.foreground);
        assert_eq!(off.background, on.background);
    }

    #[test]
    fn establishment_keeps_icons_in_log() {
        let reg = SkinRegistry::with_builtins();
        let ctx = reg.context_for(SkinId::TheEstablishment, EditorMode::Log);
        let s = resolve(&bold(), InteractionState::IDLE, &ctx);
        assert_eq!(s.presentation, Presentation::Icon);
        let undo = ButtonDescriptor::for_role(ButtonRole::Undo);
        let s = resolve(&undo, InteractionState::IDLE, &ctx);
        assert_eq!(s.presentation, Presentation::Text);
        assert_eq!(s.label.as_deref(), Some("UNDO"));
    }

    #[test]
    fn terminal_log_text_background_inset() {
        let reg = SkinRegistry::with_builtins();
        let ctx = reg.context_for(SkinId::TerminalLog, EditorMode::Log);
        let s = resolve(&bold(), InteractionState::IDLE, &ctx);
        assert_eq!(s.background_bottom_inset, 35);
        assert_eq!(s.padding.bottom, 35);
    }

    #[test]
    fn stock_fantasy_text_is_bordered_uppercase() {
        let reg = SkinRegistry::with_builtins();
        let ctx = reg.context_for(SkinId::StockFantasy, EditorMode::Log);
        let s = resolve(&bold(), InteractionState::IDLE, &ctx);
        assert_eq!(s.label.as_deref(), Some("BOLD"));
        assert_eq!(s.border.map(|b| b.width), Some(3));
    }

    #[test]
    fn hover_caption_only_on_icons() {
        let reg = SkinRegistry::with_builtins();
        let hovered = InteractionState::new(false, true);
        let edit = reg.context_for(SkinId::StockScienceFiction, EditorMode::Edit);
        assert_eq!(resolve(&bold(), hovered, &edit).hover_caption, Some("Bold"));
        assert_eq!(resolve(&bold(), InteractionState::IDLE, &edit).hover_caption, None);
        let log = reg.context_for(SkinId::StockScienceFiction, EditorMode::Log);
        assert_eq!(resolve(&bold(), hovered, &log).hover_caption, None);
    }

    #[test]
    fn active_ignored_without_source() {
        let reg = SkinRegistry::with_builtins();
        let undo = ButtonDescriptor::for_role(ButtonRole::Undo);
        for skin in SkinId::ALL {
            for mode in MODES {
                let ctx = reg.context_for(skin, mode);
                let off = resolve(&undo, InteractionState::IDLE, &ctx);
                let on = resolve(&undo, InteractionState::new(true, false), &ctx);
                assert_eq!(off, on, "{skin} {mode}");
                assert!(!on.active);
            }
        }
    }

    #[test]
    fn subhead_word_never_lights_up() {
        let reg = SkinRegistry::with_builtins();
        let subhead = ButtonDescriptor::for_role(ButtonRole::Subhead);
        let on = InteractionState::new(true, false);
        let log = reg.context_for(SkinId::StockScienceFiction, EditorMode::Log);
        let s = resolve(&subhead, on, &log);
        assert_eq!(s.presentation, Presentation::Text);
        assert!(!s.active);
        assert_eq!(s, resolve(&subhead, InteractionState::IDLE, &log));
        let edit = reg.context_for(SkinId::LeanScienceFiction, EditorMode::Edit);
        let s = resolve(&subhead, on, &edit);
        assert_eq!(s.presentation, Presentation::Icon);
        assert!(s.active);
        assert_eq!(s.foreground, Color::RED);
    }

    #[test]
    fn descriptor_without_icon_is_text() {
        let reg = SkinRegistry::with_builtins();
        let ctx = reg.context_for(SkinId::StockScienceFiction, EditorMode::Edit);
        let d = ButtonDescriptor {
            icon: None,
            ..bold()
        };
        let s = resolve(&d, InteractionState::IDLE, &ctx);
        assert_eq!(s.presentation, Presentation::Text);
        assert_eq!(s.label.as_deref(), Some("BOLD"));
    }

    #[test]
    fn every_combination_resolves() {
        let reg = SkinRegistry::with_builtins();
        for skin in SkinId::ALL {
            for mode in MODES {
                let ctx = reg.context_for(skin, mode);
                for role in ButtonRole::ALL {
                    let d = ButtonDescriptor::for_role(role);
                    for state in states() {
                        let s = resolve(&d, state, &ctx);
                        assert_eq!(s.role, role);
                        match s.presentation {
                            Presentation::Icon => assert!(s.icon.is_some()),
                            Presentation::Text | Presentation::Capsule => {
                                assert!(s.label.as_deref().is_some_and(|l| !l.is_empty()))
                            },
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn active_changes_only_declared_channels() {
        let reg = SkinRegistry::with_builtins();
        for skin in SkinId::ALL {
            for mode in MODES {
                let ctx = reg.context_for(skin, mode);
                let off = resolve(&bold(), InteractionState::IDLE, &ctx);
                let on = resolve(&bold(), InteractionState::new(true, false), &ctx);
                let channel = ctx.tokens.active_channel(off.kind);
                let fg = off.foreground != on.foreground;
                let bg = off.background != on.background;
                let expected = match channel {
                    ActiveChannel::None => (false, false),
                    ActiveChannel::Foreground => (true, false),
                    ActiveChannel::Background => (false, true),
                    ActiveChannel::Both => (true, true),
                };
                assert_eq!((fg, bg), expected, "{skin} {mode}");
                assert_eq!(off.padding, on.padding);
                assert_eq!(off.frame, on.frame);
                assert_eq!(off.font, on.font);
            }
        }
    }

    #[test]
    fn text_buttons_highlight_background_except_lcars() {
        let reg = SkinRegistry::with_builtins();
        for skin in SkinId::ALL {
            let ctx = reg.context_for(skin, EditorMode::Log);
            let undo_like = ButtonDescriptor {
                icon: None,
                ..bold()
            };
            let off = resolve(&undo_like, InteractionState::IDLE, &ctx);
            let on = resolve(&undo_like, InteractionState::new(true, false), &ctx);
            if skin == SkinId::Lcars {
                assert_ne!(off.foreground, on.foreground);
                assert_eq!(off.background, on.background);
            } else {
                assert_eq!(off.foreground, on.foreground, "{skin}");
                assert_ne!(off.background, on.background, "{skin}");
            }
        }
    }

    #[test]
    fn unregistered_skin_uses_default_tokens() {
        let reg = SkinRegistry::new();
        let resolver = StyleResolver::new(&reg);
        let s = resolver.resolve(
            &bold(),
            InteractionState::IDLE,
            SkinId::Lcars,
            EditorMode::Edit,
        );
        let expected = resolve(
            &bold(),
            InteractionState::IDLE,
            &StyleContext::fallback(SkinId::Lcars, EditorMode::Edit),
        );
        assert_eq!(s, expected);
        assert_eq!(s.foreground, SkinTokens::default().palette.icon);
        assert!(s.capsule.is_none());
    }

    #[test]
    fn resolve_current_follows_skin_switch() {
        let mut reg = SkinRegistry::with_builtins();
        let before = StyleResolver::new(&reg).resolve_current(&bold(), InteractionState::IDLE);
        assert_eq!(before.presentation, Presentation::Icon);
        reg.set_skin(SkinId::Lcars);
        let after = StyleResolver::new(&reg).resolve_current(&bold(), InteractionState::IDLE);
        assert_eq!(after.presentation, Presentation::Capsule);
    }

    #[test]
    fn serializes_for_dump() {
        let reg = SkinRegistry::with_builtins();
        let ctx = reg.context_for(SkinId::Lcars, EditorMode::Log);
        let s = resolve(&bold(), InteractionState::IDLE, &ctx);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["presentation"], "capsule");
        assert_eq!(json["label"], "BOLD");
        assert_eq!(json["capsule"]["fill"], "#FF3B30");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn skin() -> impl Strategy<Value = SkinId> {
            (0..SkinId::ALL.len()).prop_map(|i| SkinId::ALL[i])
        }

        fn role() -> impl Strategy<Value = ButtonRole> {
            (0..ButtonRole::ALL.len()).prop_map(|i| ButtonRole::ALL[i])
        }

        fn mode() -> impl Strategy<Value = EditorMode> {
            any::<bool>().prop_map(|log| if log { EditorMode::Log } else { EditorMode::Edit })
        }

        proptest! {
            #[test]
            fn resolution_is_pure(
                skin in skin(),
                role in role(),
                mode in mode(),
                active in any::<bool>(),
                hovered in any::<bool>(),
            ) {
                let reg = SkinRegistry::with_builtins();
                let d = ButtonDescriptor::for_role(role);
                let state = InteractionState::new(active, hovered);
                let a = resolve(&d, state, &reg.context_for(skin, mode));
                let b = resolve(&d, state, &reg.context_for(skin, mode));
                prop_assert_eq!(a, b);
            }

            #[test]
            fn log_mode_renders_words(
                skin in skin(),
                role in role(),
                active in any::<bool>(),
                hovered in any::<bool>(),
            ) {
                prop_assume!(skin != SkinId::TheEstablishment);
                let reg = SkinRegistry::with_builtins();
                let d = ButtonDescriptor::for_role(role);
                let ctx = reg.context_for(skin, EditorMode::Log);
                let s = resolve(&d, InteractionState::new(active, hovered), &ctx);
                prop_assert!(s.label.as_deref().is_some_and(|l| !l.is_empty()));
                prop_assert!(s.icon.is_none());
                prop_assert_eq!(s.label.as_deref(), Some(d.label));
            }
        }
    }
}

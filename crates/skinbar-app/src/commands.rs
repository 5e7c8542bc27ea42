//! The `list` and `show` commands.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use skinbar_skin::{SkinId, SkinRegistry, discover_skin_files};
use skinbar_toolbar::{
    Presentation, ResolvedStyle, Toolbar, build_correction_toolbar, build_format_toolbar,
};
use skinbar_types::config::{EditorMode, ToolbarConfig};

/// One resolved toolbar, as printed.
#[derive(Debug, Serialize)]
pub struct ToolbarDump {
    pub name: &'static str,
    pub caption: &'static str,
    pub buttons: Vec<ResolvedStyle>,
}

/// Everything `show` prints.
#[derive(Debug, Serialize)]
pub struct Report {
    pub skin: SkinId,
    pub editor_mode: EditorMode,
    pub toolbars: Vec<ToolbarDump>,
}

/// Resolve both toolbars under the registry's current selection.
pub fn resolve_toolbars(registry: &SkinRegistry, config: &ToolbarConfig) -> Report {
    let layouts = [
        ("format", build_format_toolbar(&config.format)),
        ("correction", build_correction_toolbar()),
    ];
    let toolbars = layouts
        .into_iter()
        .map(|(name, layout)| {
            let mut toolbar = Toolbar::new(layout);
            ToolbarDump {
                name,
                caption: toolbar.caption(registry),
                buttons: toolbar.styles(registry).to_vec(),
            }
        })
        .collect();
    Report {
        skin: registry.current_skin(),
        editor_mode: registry.editor_mode(),
        toolbars,
    }
}

/// Plain-text rendering of a report, one line per button.
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Skin: {} ({})", report.skin, report.editor_mode);
    for toolbar in &report.toolbars {
        let _ = writeln!(out, "\n[{}] {}", toolbar.name, toolbar.caption);
        for style in &toolbar.buttons {
            let _ = writeln!(out, "  {}", format_style(style));
        }
    }
    out
}

fn format_style(style: &ResolvedStyle) -> String {
    let face = match (style.presentation, &style.label, style.icon) {
        (Presentation::Icon, _, Some(icon)) => format!("icon {icon}"),
        (Presentation::Capsule, Some(label), _) => format!("capsule \"{label}\""),
        (_, Some(label), _) => format!("text \"{label}\""),
        _ => "empty".to_string(),
    };
    let mut line = format!("{:<14} {face:<34} fg {}", style.role, style.foreground);
    if let Some(bg) = style.background {
        let _ = write!(line, " bg {bg}");
    }
    if let Some(frame) = style.frame {
        let _ = write!(line, " frame {}x{}", frame.width, frame.height);
    }
    if let Some(font) = &style.font {
        let _ = write!(line, " font {} {}", font.family, font.size);
    }
    line
}

/// Built-in skins plus any override files in `skins_dir`.
pub fn list_skins(registry: &SkinRegistry, skins_dir: Option<&Path>) -> String {
    let mut out = String::from("Skins:\n");
    for id in registry.registered() {
        let marker = if id == registry.current_skin() { "*" } else { " " };
        let _ = writeln!(out, " {marker} {id}");
    }
    if let Some(dir) = skins_dir {
        let files = discover_skin_files(dir);
        if !files.is_empty() {
            let _ = writeln!(out, "\nOverride files ({}):", dir.display());
            for path in files {
                let _ = writeln!(out, "   {}", path.display());
            }
        }
    }
    out
}

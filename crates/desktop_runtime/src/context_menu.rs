//! Desktop context-menu placement.

use crate::model::{ContextMenuPlacement, Viewport};

/// Horizontal room the menu needs before it flips left of the pointer.
pub const FLIP_X_THRESHOLD: i32 = 200;
/// Vertical room the menu needs before it flips above the pointer.
pub const FLIP_Y_THRESHOLD: i32 = 250;
/// Distance the menu is shifted when it flips.
pub const FLIP_OFFSET: i32 = 200;

/// Computes the menu's top-left corner for a right-click at `(x, y)`.
///
/// Results are not clamped to the viewport, so a click near the top-left of a tiny viewport may
/// yield negative coordinates.
pub fn place(x: i32, y: i32, viewport: Viewport) -> ContextMenuPlacement {
    let left = if viewport.w - x < FLIP_X_THRESHOLD {
        x - FLIP_OFFSET
    } else {
        x
    };
    let top = if viewport.h - y < FLIP_Y_THRESHOLD {
        y - FLIP_OFFSET
    } else {
        y
    };
    ContextMenuPlacement { left, top }
}

/// Entries rendered in the desktop context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuEntry {
    NewFolder,
    SortBy,
    CleanDesktop,
    GetInfo,
}

impl ContextMenuEntry {
    pub const ALL: [ContextMenuEntry; 4] = [
        Self::NewFolder,
        Self::SortBy,
        Self::CleanDesktop,
        Self::GetInfo,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::NewFolder => "Nueva Carpeta",
            Self::SortBy => "Organizar por",
            Self::CleanDesktop => "Limpiar Escritorio",
            Self::GetInfo => "Obtener Información",
        }
    }

    /// A separator is drawn after these entries.
    pub const fn ends_group(self) -> bool {
        matches!(self, Self::NewFolder | Self::CleanDesktop)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: Viewport = Viewport { w: 1280, h: 800 };

    #[test]
    fn opens_at_pointer_with_room() {
        assert_eq!(
            place(300, 200, VIEWPORT),
            ContextMenuPlacement {
                left: 300,
                top: 200
            }
        );
    }

    #[test]
    fn flips_near_right_and_bottom_edges() {
        assert_eq!(
            place(1200, 700, VIEWPORT),
            ContextMenuPlacement {
                left: 1000,
                top: 500
            }
        );
        // Exactly at the threshold keeps the pointer position.
        assert_eq!(place(1080, 550, VIEWPORT).left, 1080);
        assert_eq!(place(1080, 550, VIEWPORT).top, 550);
    }

    #[test]
    fn tiny_viewport_is_not_clamped() {
        let placement = place(50, 40, Viewport { w: 150, h: 200 });
        assert_eq!(
            placement,
            ContextMenuPlacement {
                left: -150,
                top: -160
            }
        );
    }

    #[test]
    fn separators_split_the_menu_into_three_groups() {
        let breaks = ContextMenuEntry::ALL
            .into_iter()
            .filter(|entry| entry.ends_group())
            .collect::<Vec<_>>();
        assert_eq!(
            breaks,
            vec![ContextMenuEntry::NewFolder, ContextMenuEntry::CleanDesktop]
        );
    }
}

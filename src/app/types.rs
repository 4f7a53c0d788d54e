//! Type definitions for the application state.

/// Which of the three mutually exclusive views is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Chat,
    Documents,
    Settings,
}

impl ActiveView {
    /// All views in navigation order.
    pub const ALL: [ActiveView; 3] = [
        ActiveView::Chat,
        ActiveView::Documents,
        ActiveView::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveView::Chat => "Chat",
            ActiveView::Documents => "Documents",
            ActiveView::Settings => "Settings",
        }
    }

    /// Next view in navigation order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            ActiveView::Chat => ActiveView::Documents,
            ActiveView::Documents => ActiveView::Settings,
            ActiveView::Settings => ActiveView::Chat,
        }
    }
}

/// Which input has focus within the chat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Message,
    UploadPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all_views() {
        let mut view = ActiveView::Chat;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(view);
            view = view.next();
        }
        assert_eq!(view, ActiveView::Chat);
        assert_eq!(seen, ActiveView::ALL.to_vec());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ActiveView::Chat.label(), "Chat");
        assert_eq!(ActiveView::Documents.label(), "Documents");
        assert_eq!(ActiveView::Settings.label(), "Settings");
    }
}

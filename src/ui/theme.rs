//! Class helpers so every page styles buttons, inputs and panels the same way.
//! The classes themselves live in `assets/main.css`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Ghost,
    Danger,
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "btn btn-primary",
        Tone::Secondary => "btn btn-secondary",
        Tone::Ghost => "btn btn-ghost",
        Tone::Danger => "btn btn-danger",
    }
}

pub fn btn_small(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "btn btn-sm btn-primary",
        Tone::Secondary => "btn btn-sm btn-secondary",
        Tone::Ghost => "btn btn-sm btn-ghost",
        Tone::Danger => "btn btn-sm btn-danger",
    }
}

pub fn tab(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class() -> &'static str {
    "input"
}

pub fn select_class() -> &'static str {
    "input select"
}

pub fn textarea_class() -> &'static str {
    "input textarea"
}

// ============================================
// PANEL / TEXT STYLES
// ============================================

pub fn panel() -> &'static str {
    "panel"
}

pub fn label_class() -> &'static str {
    "label"
}

pub fn text_muted() -> &'static str {
    "text-muted"
}

pub fn heading() -> &'static str {
    "heading"
}

// ============================================
// BADGES
// ============================================

pub fn badge(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "badge badge-primary",
        Tone::Secondary => "badge badge-secondary",
        Tone::Ghost => "badge badge-outline",
        Tone::Danger => "badge badge-danger",
    }
}

/// Badge colour for an exchange request status.
pub fn status_badge(status: crate::domain::RequestStatus) -> &'static str {
    use crate::domain::RequestStatus;
    match status {
        RequestStatus::Pending => "badge badge-pending",
        RequestStatus::Accepted | RequestStatus::Completed => "badge badge-success",
        RequestStatus::Declined => "badge badge-danger",
    }
}

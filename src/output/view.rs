//! Form UI state and its terminal rendering

use std::fmt;

use serde::Serialize;

use crate::domain::model::{Clip, Mode, Platform};
use crate::domain::rules::normalize_origin;
use crate::utils::time::format_range;

/// Label of the submit control when idle
pub const SUBMIT_LABEL: &str = "Gerar cortes";

/// Label of the submit control while a request is in flight
pub fn busy_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Url => "Baixando e gerando cortes...",
        Mode::Upload => "Enviando vídeo e gerando cortes...",
    }
}

/// Placeholder image for a clip card
pub fn thumbnail_url(id: &str) -> String {
    format!("https://via.placeholder.com/320x180?text=Corte+{}", id)
}

/// Submit control state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            enabled: true,
        }
    }
}

/// One rendered clip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipCard {
    pub id: String,
    pub thumbnail_url: String,
    pub title: String,
    pub time_range: String,
    pub platform_label: String,
    /// Output frame, e.g. `1080x1920`, for platforms the backend knows
    pub frame: Option<String>,
    pub download_url: String,
    pub opens_in_new_tab: bool,
}

impl ClipCard {
    pub fn new(clip: &Clip, mode: &str, platform: &Platform, origin: &str) -> Self {
        let id = clip.id.to_string();
        Self {
            thumbnail_url: thumbnail_url(&id),
            title: format!("Corte #{} ({})", id, mode),
            time_range: format_range(clip.start, clip.end),
            platform_label: platform.label(),
            frame: platform
                .frame()
                .map(|(width, height)| format!("{}x{}", width, height)),
            download_url: format!("{}{}", normalize_origin(origin), clip.download_url),
            opens_in_new_tab: true,
            id,
        }
    }
}

/// Everything the form shows. Handlers mutate this instead of a live page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub url_group_visible: bool,
    pub upload_group_visible: bool,
    pub submit: SubmitButton,
    pub error: Option<String>,
    pub message: Option<String>,
    pub result_visible: bool,
    pub cards: Vec<ClipCard>,
}

impl FormView {
    pub fn new(mode: Mode) -> Self {
        let mut view = Self {
            url_group_visible: false,
            upload_group_visible: false,
            submit: SubmitButton::default(),
            error: None,
            message: None,
            result_visible: false,
            cards: Vec::new(),
        };
        view.show_mode(mode);
        view
    }

    /// Show exactly the input group for `mode`
    pub fn show_mode(&mut self, mode: Mode) {
        self.url_group_visible = mode == Mode::Url;
        self.upload_group_visible = mode == Mode::Upload;
    }

    /// Reset error, message and results ahead of a new submission
    pub fn clear_feedback(&mut self) {
        self.error = None;
        self.message = None;
        self.result_visible = false;
        self.cards.clear();
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn render_clips(&mut self, clips: &[Clip], mode: &str, platform: &Platform, origin: &str) {
        self.cards = clips
            .iter()
            .map(|clip| ClipCard::new(clip, mode, platform, origin))
            .collect();
        self.result_visible = !self.cards.is_empty();
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            writeln!(f, "Erro: {}", error)?;
        }
        if let Some(message) = &self.message {
            writeln!(f, "{}", message)?;
        }
        if !self.result_visible {
            return Ok(());
        }

        writeln!(f, "Cortes gerados ({})", self.cards.len())?;
        writeln!(f, "===================")?;
        for card in &self.cards {
            writeln!(f, "{}", card.title)?;
            writeln!(f, "  Intervalo:  {}", card.time_range)?;
            writeln!(f, "  Plataforma: {}", card.platform_label)?;
            if let Some(frame) = &card.frame {
                writeln!(f, "  Formato:    {}", frame)?;
            }
            writeln!(f, "  Miniatura:  {}", card.thumbnail_url)?;
            writeln!(f, "  Download:   {}", card.download_url)?;
        }
        Ok(())
    }
}

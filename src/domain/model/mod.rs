// Domain models - Core types and data structures

use std::fmt;
use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// How the source video reaches the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Backend downloads the video from a URL
    Url,
    /// Video bytes are sent in a multipart upload
    Upload,
}

impl Mode {
    /// Parse mode from the selector value
    pub fn parse(mode_str: &str) -> Result<Self, DomainError> {
        match mode_str.trim().to_lowercase().as_str() {
            "url" => Ok(Mode::Url),
            "upload" => Ok(Mode::Upload),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid mode: {}. Valid modes: url, upload",
                mode_str
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Url => "url",
            Mode::Upload => "upload",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target platform. Opaque to the controller; passed through to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Platform(String);

impl Platform {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable label; unknown values are shown as given
    pub fn label(&self) -> String {
        match self.0.as_str() {
            "youtube" => "YouTube".to_string(),
            "instagram" => "Instagram Reels".to_string(),
            "tiktok" => "TikTok".to_string(),
            other => other.to_string(),
        }
    }

    /// Output frame the backend renders for this platform, if known
    pub fn frame(&self) -> Option<(u32, u32)> {
        match self.0.as_str() {
            "youtube" => Some((1920, 1080)),
            "instagram" | "tiktok" => Some((1080, 1920)),
            _ => None,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new("youtube")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file picked for upload. Clones share one buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping only its file name
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video.mp4".to_string());
        Ok(Self {
            name,
            bytes: Bytes::from(bytes),
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Form values exactly as the user entered them
#[derive(Debug, Clone)]
pub struct RawForm {
    pub mode: Mode,
    pub clips_count: String,
    pub max_duration: String,
    pub platform: Platform,
    pub video_url: String,
    pub file: Option<SelectedFile>,
}

impl RawForm {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            clips_count: String::new(),
            max_duration: String::new(),
            platform: Platform::default(),
            video_url: String::new(),
            file: None,
        }
    }
}

/// Where the video comes from; exactly one per submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    Url(String),
    Upload(SelectedFile),
}

/// A validated submission, built fresh on each submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionIntent {
    pub clips_count: u32,
    pub max_duration: u64,
    pub platform: Platform,
    pub source: VideoSource,
}

impl SubmissionIntent {
    pub fn mode(&self) -> Mode {
        match self.source {
            VideoSource::Url(_) => Mode::Url,
            VideoSource::Upload(_) => Mode::Upload,
        }
    }
}

/// Clip identifier as the backend sent it (string or number)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClipId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipId::Number(n) => write!(f, "{}", n),
            ClipId::Text(s) => f.write_str(s),
        }
    }
}

/// One generated clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub id: ClipId,
    pub start: f64,
    pub end: f64,
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

/// Body of a successful backend reply; every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clips: Option<Vec<Clip>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl ResponseEnvelope {
    /// Failure message carried by a raw body: `detail` first, then `error`.
    ///
    /// Only those two keys are read, so the rest of the body may have any shape.
    pub fn failure_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        ["detail", "error"]
            .into_iter()
            .filter_map(|key| value.get(key))
            .find_map(message_text)
    }
}

fn message_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Backend health as reported by `/api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub ffmpeg: bool,
    #[serde(default)]
    pub whisper: bool,
}

impl HealthReport {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// A single form field of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, file: SelectedFile },
}

impl FormField {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        FormField::Text {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormField::Text { name, .. } | FormField::File { name, .. } => name,
        }
    }
}

/// Outbound request body
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Sent with `Content-Type: application/json`
    Json(serde_json::Value),
    Multipart(Vec<FormField>),
}

/// Fully-resolved POST to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub url: String,
    pub body: RequestBody,
}

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Domain rules - Form validation, request shaping and reply interpretation

use serde_json::json;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Smallest and largest number of clips a submission may ask for
pub const CLIPS_COUNT_RANGE: std::ops::RangeInclusive<i64> = 1..=20;

/// Shortest clip duration, in seconds, a submission may ask for
pub const MIN_MAX_DURATION: u64 = 5;

pub const URL_ENDPOINT: &str = "/api/generate-clips-from-url";
pub const UPLOAD_ENDPOINT: &str = "/api/generate-clips-from-upload";
pub const HEALTH_ENDPOINT: &str = "/api/health";

/// Shown when the backend succeeds without producing clips
pub const NO_CLIPS_MESSAGE: &str = "Nenhum corte foi gerado.";

/// Business rules for accepting a form
pub struct FormValidator;

impl FormValidator {
    /// Turn raw form values into a submission, or the first failing rule.
    ///
    /// Rules run in a fixed order: clip count, max duration, then the
    /// source field that belongs to the selected mode.
    pub fn validate(form: &RawForm) -> Result<SubmissionIntent, ValidationError> {
        let clips_count = Self::parse_clips_count(&form.clips_count)?;
        let max_duration = Self::parse_max_duration(&form.max_duration)?;

        let source = match form.mode {
            Mode::Url => {
                let url = form.video_url.trim();
                if url.is_empty() || !url.starts_with("http") {
                    return Err(ValidationError::VideoUrl);
                }
                VideoSource::Url(url.to_string())
            }
            Mode::Upload => match &form.file {
                Some(file) => VideoSource::Upload(file.clone()),
                None => return Err(ValidationError::MissingFile),
            },
        };

        Ok(SubmissionIntent {
            clips_count,
            max_duration,
            platform: form.platform.clone(),
            source,
        })
    }

    fn parse_clips_count(raw: &str) -> Result<u32, ValidationError> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .filter(|n| CLIPS_COUNT_RANGE.contains(n))
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(ValidationError::ClipsCount)
    }

    fn parse_max_duration(raw: &str) -> Result<u64, ValidationError> {
        raw.trim()
            .parse::<u64>()
            .ok()
            .filter(|n| *n >= MIN_MAX_DURATION)
            .ok_or(ValidationError::MaxDuration)
    }
}

/// Strip trailing slashes so endpoint paths join cleanly
pub fn normalize_origin(origin: &str) -> &str {
    origin.trim_end_matches('/')
}

/// Builds the single outbound request for a submission
pub struct RequestBuilder;

impl RequestBuilder {
    pub fn build(intent: &SubmissionIntent, origin: &str) -> OutboundRequest {
        let origin = normalize_origin(origin);

        match &intent.source {
            VideoSource::Url(video_url) => OutboundRequest {
                url: format!("{}{}", origin, URL_ENDPOINT),
                body: RequestBody::Json(json!({
                    "videoUrl": video_url,
                    "clipsCount": intent.clips_count,
                    "maxDuration": intent.max_duration,
                    "platform": intent.platform.as_str(),
                })),
            },
            VideoSource::Upload(file) => OutboundRequest {
                url: format!("{}{}", origin, UPLOAD_ENDPOINT),
                body: RequestBody::Multipart(vec![
                    FormField::File {
                        name: "file".to_string(),
                        file: file.clone(),
                    },
                    FormField::text("clipsCount", intent.clips_count.to_string()),
                    FormField::text("maxDuration", intent.max_duration.to_string()),
                    FormField::text("platform", intent.platform.as_str()),
                ]),
            },
        }
    }
}

/// What a completed HTTP exchange means for the form
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// Clips to render; `mode` is the echoed mode, or the request's
    Clips { mode: String, clips: Vec<Clip> },
    /// Success without clips
    Empty,
    /// Non-2xx, or a body that could not be read
    Failed { status: u16, message: String },
}

/// Interprets backend replies
pub struct ResponseInterpreter;

impl ResponseInterpreter {
    pub fn interpret(reply: &HttpReply, request_mode: Mode) -> ResponseOutcome {
        if !reply.is_success() {
            return ResponseOutcome::Failed {
                status: reply.status,
                message: Self::failure_text(reply),
            };
        }

        let Ok(envelope) = serde_json::from_str::<ResponseEnvelope>(&reply.body) else {
            return ResponseOutcome::Failed {
                status: reply.status,
                message: Self::status_message(reply.status),
            };
        };

        match envelope.clips {
            Some(clips) if !clips.is_empty() => ResponseOutcome::Clips {
                mode: envelope
                    .mode
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| request_mode.to_string()),
                clips,
            },
            _ => ResponseOutcome::Empty,
        }
    }

    /// Text for a failed reply: body `detail`, then `error`, then the status
    pub fn failure_text(reply: &HttpReply) -> String {
        ResponseEnvelope::failure_message(&reply.body)
            .unwrap_or_else(|| Self::status_message(reply.status))
    }

    /// Message used when the body carries none
    pub fn status_message(status: u16) -> String {
        format!("Erro HTTP {} ao chamar backend.", status)
    }
}

/// Fixed hint shown when the backend cannot be reached
pub fn connectivity_message(origin: &str) -> String {
    format!(
        "Não foi possível conectar ao backend. Verifique se ele está rodando em {}.",
        normalize_origin(origin)
    )
}

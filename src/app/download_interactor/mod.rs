// Download interactor - Saves rendered clips to disk

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::output::view::ClipCard;
use crate::output::writer::ClipWriter;
use crate::ports::*;

/// Result of fetching one card's download link
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadResult {
    pub clip_id: String,
    pub url: String,
    pub path: Option<PathBuf>,
    pub error: Option<String>,
}

impl DownloadResult {
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

/// Interactor for downloading generated clips
pub struct DownloadInteractor {
    transport: Arc<dyn TransportPort>,
    log_port: Arc<dyn LogPort>,
}

impl DownloadInteractor {
    /// Create new download interactor with injected ports
    pub fn new(transport: Arc<dyn TransportPort>, log_port: Arc<dyn LogPort>) -> Self {
        Self {
            transport,
            log_port,
        }
    }

    /// Fetch every card's link into the writer's directory.
    ///
    /// One failing clip does not stop the others.
    pub async fn download_all(&self, cards: &[ClipCard], writer: &ClipWriter) -> Vec<DownloadResult> {
        let mut results = Vec::with_capacity(cards.len());
        for card in cards {
            results.push(self.download_one(card, writer).await);
        }

        let failed = results.iter().filter(|r| !r.success()).count();
        if failed > 0 {
            self.log_port
                .warn(&format!("{} of {} downloads failed", failed, results.len()))
                .await;
        }
        results
    }

    async fn download_one(&self, card: &ClipCard, writer: &ClipWriter) -> DownloadResult {
        let mut result = DownloadResult {
            clip_id: card.id.clone(),
            url: card.download_url.clone(),
            path: None,
            error: None,
        };

        let bytes = match self.transport.download(&card.download_url).await {
            Ok(bytes) => bytes,
            Err(err) => {
                self.log_port
                    .error(&format!("Download of {} failed: {}", card.download_url, err))
                    .await;
                result.error = Some(err.to_string());
                return result;
            }
        };

        let fallback = format!("clip_{}.mp4", card.id);
        let file_name = ClipWriter::file_name_for(&card.download_url, &fallback);
        match writer.write(&file_name, &bytes) {
            Ok(path) => {
                self.log_port
                    .info(&format!("Saved clip {} to {}", card.id, path.display()))
                    .await;
                result.path = Some(path);
            }
            Err(err) => {
                self.log_port
                    .error(&format!("Could not save clip {}: {}", card.id, err))
                    .await;
                result.error = Some(err.to_string());
            }
        }
        result
    }
}

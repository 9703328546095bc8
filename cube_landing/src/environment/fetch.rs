//! Background fetcher: dedicated thread, HTTP or local file → cubemap faces.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crossbeam_channel::Receiver;
use url::Url;

use super::cubemap::{equirect_to_cubemap, face_size_for, CubemapFaces};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub type BackgroundResult = Result<CubemapFaces, BackgroundError>;

#[derive(Debug, thiserror::Error)]
pub enum BackgroundError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode background image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("unsupported background URL {0}")]
    UnsupportedUrl(Url),
    #[error("failed to build fetch runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Loads `url` on a worker thread. The receiver yields exactly one result.
pub fn spawn_background_fetch(url: Url, max_face_size: u32) -> Receiver<BackgroundResult> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    thread::spawn(move || {
        let result = load_background(&url, max_face_size);
        // Receiver gone means the app shut down; nothing left to do.
        let _ = tx.send(result);
    });
    rx
}

/// Blocking fetch + decode + cubemap conversion.
pub fn load_background(url: &Url, max_face_size: u32) -> BackgroundResult {
    let bytes = read_bytes(url)?;
    let panorama = image::load_from_memory(&bytes)?.to_rgba8();
    let face_size = face_size_for(panorama.width(), max_face_size);
    Ok(equirect_to_cubemap(&panorama, face_size))
}

fn read_bytes(url: &Url) -> Result<Vec<u8>, BackgroundError> {
    match url.scheme() {
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| BackgroundError::UnsupportedUrl(url.clone()))?;
            std::fs::read(&path).map_err(|source| BackgroundError::Read { path, source })
        }
        "http" | "https" => {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(BackgroundError::Runtime)?;
            rt.block_on(fetch_http(url))
        }
        _ => Err(BackgroundError::UnsupportedUrl(url.clone())),
    }
}

async fn fetch_http(url: &Url) -> Result<Vec<u8>, BackgroundError> {
    let request_err = |source: reqwest::Error| BackgroundError::Request {
        url: url.clone(),
        source,
    };
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(request_err)?;
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(request_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(BackgroundError::Status {
            url: url.clone(),
            status,
        });
    }
    let body = response.bytes().await.map_err(request_err)?;
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scheme_is_rejected() {
        let url: Url = "ftp://example.com/sky.jpg".parse().unwrap();
        let err = load_background(&url, 64).unwrap_err();
        assert!(matches!(err, BackgroundError::UnsupportedUrl(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("cube_landing_missing_background.jpg");
        let _ = std::fs::remove_file(&path);
        let url = Url::from_file_path(&path).unwrap();
        let err = load_background(&url, 64).unwrap_err();
        assert!(matches!(err, BackgroundError::Read { .. }));
        assert!(err.to_string().contains("cube_landing_missing_background.jpg"));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let path = std::env::temp_dir().join("cube_landing_garbage_background.png");
        std::fs::write(&path, b"not an image").unwrap();
        let url = Url::from_file_path(&path).unwrap();
        let err = load_background(&url, 64).unwrap_err();
        assert!(matches!(err, BackgroundError::Decode(_)));
        let _ = std::fs::remove_file(&path);
    }
}

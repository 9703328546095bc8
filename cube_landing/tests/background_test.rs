use std::time::Duration;

use image::{Rgba, RgbaImage};
use url::Url;

use cube_landing::environment::{spawn_background_fetch, BackgroundError};

const RECV_TIMEOUT: Duration = Duration::from_secs(10);

#[test]
fn local_panorama_becomes_cubemap() {
    let path = std::env::temp_dir().join("cube_landing_background_test.png");
    RgbaImage::from_fn(256, 128, |x, _| Rgba([(x % 256) as u8, 64, 200, 255]))
        .save(&path)
        .unwrap();
    let url = Url::from_file_path(&path).unwrap();

    let rx = spawn_background_fetch(url, 512);
    let faces = rx
        .recv_timeout(RECV_TIMEOUT)
        .expect("fetcher should answer")
        .expect("local panorama should load");

    assert_eq!(faces.face_size, 64);
    assert_eq!(faces.data.len(), 64 * 64 * 6 * 4);
    assert!(faces.data.chunks(4).all(|px| px[3] == 255));
}

#[test]
fn unsupported_scheme_is_reported_on_the_channel() {
    let url: Url = "data:text/plain,hello".parse().unwrap();
    let rx = spawn_background_fetch(url, 64);
    let result = rx.recv_timeout(RECV_TIMEOUT).expect("fetcher should answer");
    assert!(matches!(result, Err(BackgroundError::UnsupportedUrl(_))));
}

#[cfg(feature = "integration")]
mod integration {
    use super::*;
    use cube_landing::environment::MOBILE_BACKGROUND_URL;

    #[test]
    fn hosted_mobile_background_loads() {
        let url: Url = MOBILE_BACKGROUND_URL.parse().unwrap();
        let rx = spawn_background_fetch(url, 128);
        let faces = rx
            .recv_timeout(Duration::from_secs(60))
            .expect("fetcher should answer")
            .expect("hosted background should load");
        assert!(faces.face_size >= 16);
    }
}

//! HttpDetector 与模拟推理服务（wiremock）的协议测试

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use serde_json::json;
    use shopfloor::config::DetectionSection;
    use shopfloor::core::AnalysisError;
    use shopfloor::detection::{decode_image, DecodedImage, HttpDetector, ObjectDetector};
    use wiremock::{
        matchers::{body_partial_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn sample_image() -> DecodedImage {
        use base64::{engine::general_purpose::STANDARD, Engine};

        let img = image::RgbImage::new(16, 16);
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        decode_image(&STANDARD.encode(buf)).unwrap()
    }

    fn vocabulary() -> Vec<String> {
        vec!["person".into(), "drill".into(), "hard hat".into()]
    }

    #[tokio::test]
    async fn test_detector_maps_query_indices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect"))
            .and(body_partial_json(json!({
                "queries": ["a photo of a person", "a photo of a drill", "a photo of a hard hat"],
                "threshold": 0.1
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "detections": [
                    { "label": 1, "score": 0.62, "box": [1.0, 2.0, 10.0, 12.0] },
                    { "label": 0, "score": 0.18, "box": [0.0, 0.0, 5.0, 5.0] },
                    { "label": 2, "score": 0.30, "box": [3.0, 3.0, 8.0, 8.0] }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let detector = HttpDetector::new(&format!("{}/detect", server.uri()), vocabulary());
        let detections = detector.detect(&sample_image()).await.unwrap();

        let labels: Vec<&str> = detections.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["drill", "hard hat"]);
        assert_eq!(detections[0].confidence, 0.62);
        assert_eq!(detections[0].bbox.x2, 10.0);
    }

    #[tokio::test]
    async fn test_detector_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
            .mount(&server)
            .await;

        let detector = HttpDetector::new(&format!("{}/detect", server.uri()), vocabulary());
        let err = detector.detect(&sample_image()).await.unwrap_err();
        match err {
            AnalysisError::Detection(msg) => assert!(msg.contains("503")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_custom_confidence_threshold() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "detections": [{ "label": 0, "score": 0.18, "box": [0.0, 0.0, 5.0, 5.0] }]
            })))
            .mount(&server)
            .await;

        let detector = HttpDetector::new(&format!("{}/detect", server.uri()), vocabulary())
            .with_thresholds(0.05, 0.15);
        let detections = detector.detect(&sample_image()).await.unwrap();
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].label, "person");
    }

    #[tokio::test]
    async fn test_from_config_applies_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/detect"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(3))
                    .set_body_json(json!({ "detections": [] })),
            )
            .mount(&server)
            .await;

        let cfg = DetectionSection {
            endpoint: format!("{}/detect", server.uri()),
            timeout_secs: 1,
            ..DetectionSection::default()
        };
        let detector = HttpDetector::from_config(&cfg, vocabulary());
        let err = detector.detect(&sample_image()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Detection(_)));
    }
}

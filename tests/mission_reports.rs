use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use ground_control::config::FactoryConfig;
use ground_control::report::{ImageData, SampleReport};
use ground_control::{Coordinate, Mission, Report, ReportFactory, Summarizable, TaskType};
use serde_json::json;

#[test]
fn image_report_from_zero_discriminant() {
    let report = Report::instantiate(&json!({
        "taskType": 0,
        "missionId": 4,
        "chunkId": 0,
        "data": STANDARD.encode(b"chunk"),
        "isLastReport": false
    }))
    .expect("taskType 0 is an image report");

    assert_eq!(report.task_type(), TaskType::ImageCapture);
    assert_eq!(report.summary(), "Chunk #0 (5 bytes) ");
}

#[test]
fn image_payload_round_trips_through_base64() {
    let original: Vec<u8> = (0..=255).collect();
    let report = Report::instantiate(&json!({
        "taskType": 0,
        "data": STANDARD.encode(&original)
    }));

    let Some(Report::Image(image)) = report else {
        panic!("expected an image report");
    };
    assert_eq!(image.data, Some(ImageData::Bytes(original)));
}

#[test]
fn malformed_image_payload_is_kept_unchanged() {
    let report = Report::instantiate(&json!({
        "taskType": 0,
        "chunkId": 8,
        "data": "definitely not base64"
    }));

    let Some(Report::Image(image)) = report else {
        panic!("expected an image report");
    };
    assert_eq!(image.data, Some(ImageData::Text("definitely not base64".to_string())));
}

#[test]
fn sample_summary_matches_display_contract() {
    let report = Report::instantiate(&json!({
        "taskType": 1,
        "missionId": 2,
        "numSamples": 2,
        "components": [
            { "name": "Fe", "percentage": 12.345 },
            { "name": "Si", "percentage": 7 }
        ],
        "isLastReport": false
    }))
    .unwrap();

    assert_eq!(report.report_type(), "Sample");
    assert_eq!(report.summary(), "2 components: [Fe=12.35%, Si=7.00%] ");
}

#[test]
fn environment_summary_with_completion_marker() {
    let report = Report::instantiate(&json!({
        "taskType": 2,
        "temp": 1, "oxygen": 1, "pressure": 1,
        "humidity": 1, "windSpeed": 1, "radiation": 1,
        "isLastReport": true
    }))
    .unwrap();

    let summary = report.summary();
    assert_eq!(summary, "T=1.00°C, O2=1.00%, P=1.00hPa, H=1.00%, V=1.00m/s, R=1.00µSv ✓ Last");
    assert!(summary.ends_with("✓ Last"));
}

#[test]
fn mission_keeps_positions_of_dropped_reports() {
    let mission = Mission::from_value(&json!({
        "id": 10,
        "idRover": 1,
        "taskType": 0,
        "reports": [
            { "taskType": 0, "missionId": 10, "chunkId": 0, "data": "AQID" },
            { "taskType": 99, "missionId": 10 },
            { "taskType": 1, "missionId": 10, "numSamples": 0 }
        ]
    }))
    .unwrap();

    assert_eq!(mission.reports.len(), 3);
    assert!(matches!(mission.reports[0], Some(Report::Image(_))));
    assert!(mission.reports[1].is_none());
    assert!(matches!(mission.reports[2], Some(Report::Sample(SampleReport { .. }))));
    assert_eq!(mission.dropped_reports(), 1);
    assert_eq!(mission.valid_reports().count(), 2);
}

#[test]
fn mission_defaults_coordinate_and_reports() {
    let mission = Mission::from_json(r#"{"id": 3, "idRover": 1, "state": "Pending"}"#).unwrap();

    assert_eq!(mission.coordinate, Coordinate { latitude: 0.0, longitude: 0.0 });
    assert!(mission.reports.is_empty());
    assert_eq!(mission.state, "Pending");
}

#[test]
fn drop_hook_counts_mission_drops() {
    let dropped = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&dropped);
    let factory = ReportFactory::new(
        FactoryConfig::new()
            .with_logging(false)
            .with_drop_callback(move |_| {
                counter.fetch_add(1, Ordering::Relaxed);
            }),
    );

    let mission = Mission::from_value_with(
        &json!({
            "id": 1,
            "reports": [null, { "taskType": 3, "problemId": 1 }, { "chunkId": 2 }, { "taskType": 7 }]
        }),
        &factory,
    )
    .unwrap();

    assert_eq!(mission.reports.len(), 4);
    assert_eq!(dropped.load(Ordering::Relaxed), 3);
    assert_eq!(mission.dropped_reports(), 3);
}

#[test]
fn mission_serializes_back_to_wire_layout() {
    let mission = Mission::from_value(&json!({
        "id": 2,
        "coordinate": { "latitude": 38.7, "longitude": -9.1 },
        "reports": [{ "taskType": 4, "latitude": 38.7, "longitude": -9.1, "height": 12 }, { "taskType": 42 }]
    }))
    .unwrap();

    let value = serde_json::to_value(&mission).unwrap();
    assert_eq!(value["coordinate"]["latitude"], json!(38.7));
    assert_eq!(value["reports"][0]["taskType"], json!(4));
    assert_eq!(value["reports"][1], json!(null));

    let again = Mission::from_value(&value).unwrap();
    assert_eq!(again, mission);
}

#[test]
fn null_numbers_never_drop_reports_or_missions() {
    let mission = Mission::from_value(&json!({
        "id": 1,
        "priority": null,
        "idRover": null,
        "reports": [
            { "taskType": 2, "temp": null, "oxygen": 1, "pressure": 1, "humidity": 1, "windSpeed": 1, "radiation": 1 },
            { "taskType": 0, "missionId": null, "chunkId": 0 },
            { "taskType": 1, "numSamples": 1, "components": [{ "name": "Fe", "percentage": null }] }
        ]
    }))
    .unwrap();

    assert_eq!(mission.dropped_reports(), 0);
    let summaries: Vec<String> = mission.valid_reports().map(Summarizable::summary).collect();
    assert!(summaries[0].starts_with("T=0.00°C"));
    assert_eq!(summaries[1], "Chunk #0 (0 bytes) ");
    assert_eq!(summaries[2], "1 components: [Fe=0.00%] ");
}

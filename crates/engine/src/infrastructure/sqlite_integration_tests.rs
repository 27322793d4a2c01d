//! Repository tests against a real SQLite file.

use chrono::{Duration, TimeZone, Utc};
use sqlx::SqlitePool;

use patchbay_domain::{
    Connection, ConnectorType, Device, DeviceCategory, DeviceIo, DeviceLabel, Diagram,
    DiagramDevice, DiagramName, Direction, Gender, NewConnection,
};

use super::ports::{ConnectionRepo, DeviceRepo, DiagramDeviceRepo, DiagramRepo, PortRepo};
use super::sqlite::{ensure_schema, SqliteRepositories};

async fn open() -> (SqliteRepositories, SqlitePool, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite:{}?mode=rwc", dir.path().join("test.db").display());
    let pool = SqlitePool::connect(&url).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    (SqliteRepositories::new(pool.clone()), pool, dir)
}

fn device(model: &str, offset_secs: i64) -> Device {
    let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(offset_secs);
    Device::new(
        DeviceLabel::new("Acme").unwrap(),
        DeviceLabel::new(model).unwrap(),
        DeviceCategory::Receiver,
        now,
    )
}

fn port(device: &Device, label: &str, direction: Direction) -> DeviceIo {
    DeviceIo::new(
        device.id,
        DeviceLabel::new(label).unwrap(),
        ConnectorType::Hdmi,
        device.created_at,
    )
    .with_gender(Gender::Female)
    .with_direction(direction)
}

/// Two devices placed on one diagram with an output and an input port
struct Scene {
    diagram: Diagram,
    source: DiagramDevice,
    target: DiagramDevice,
    out_port: DeviceIo,
    in_port: DeviceIo,
    source_device: Device,
}

async fn scene(repos: &SqliteRepositories) -> Scene {
    let source_device = device("Source", 0);
    let target_device = device("Sink", 1);
    let out_port = port(&source_device, "Out", Direction::Output);
    let in_port = port(&target_device, "In", Direction::Input);
    let diagram = Diagram::new(DiagramName::new("Scene").unwrap(), Utc::now());
    let source = DiagramDevice::new(diagram.id, source_device.id, 0.0, 0.0, Utc::now());
    let target = DiagramDevice::new(diagram.id, target_device.id, 10.0, 0.0, Utc::now());

    for d in [&source_device, &target_device] {
        repos.device.save(d).await.unwrap();
    }
    for p in [&out_port, &in_port] {
        repos.port.save(p).await.unwrap();
    }
    repos.diagram.save(&diagram).await.unwrap();
    for placed in [&source, &target] {
        repos.diagram_device.save(placed).await.unwrap();
    }

    Scene {
        diagram,
        source,
        target,
        out_port,
        in_port,
        source_device,
    }
}

fn connection(scene: &Scene) -> Connection {
    Connection::from_new(
        NewConnection {
            diagram_id: scene.diagram.id,
            source_diagram_device_id: scene.source.id,
            source_io_id: scene.out_port.id,
            target_diagram_device_id: scene.target.id,
            target_io_id: scene.in_port.id,
            cable_label: Some("A1".into()),
            cable_length: None,
            notes: Some("Cable needed: HDMI Male-Male Cable".into()),
        },
        Utc::now(),
    )
}

#[tokio::test]
async fn device_round_trips_and_lists_newest_first() {
    let (repos, _pool, _dir) = open().await;
    let older = device("Older", 0).with_image_url("https://img.example/a.png");
    let newer = device("Newer", 60);
    repos.device.save(&older).await.unwrap();
    repos.device.save(&newer).await.unwrap();

    let loaded = repos.device.get(older.id).await.unwrap().unwrap();
    assert_eq!(loaded, older);

    let models: Vec<String> = repos
        .device
        .list()
        .await
        .unwrap()
        .iter()
        .map(|d| d.model.to_string())
        .collect();
    assert_eq!(models, ["Newer", "Older"]);
}

#[tokio::test]
async fn saving_twice_updates_in_place() {
    let (repos, _pool, _dir) = open().await;
    let s = scene(&repos).await;
    repos.connection.insert_if_ports_free(&connection(&s)).await.unwrap();

    let mut renamed = s.source_device.clone();
    renamed.model = DeviceLabel::new("Renamed").unwrap();
    repos.device.save(&renamed).await.unwrap();

    assert_eq!(
        repos.device.get(renamed.id).await.unwrap().unwrap().model.as_str(),
        "Renamed"
    );
    assert_eq!(repos.port.list(Some(renamed.id)).await.unwrap().len(), 1);
    assert_eq!(
        repos.connection.list(Some(s.diagram.id)).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn second_claim_on_a_port_is_refused() {
    let (repos, _pool, _dir) = open().await;
    let s = scene(&repos).await;

    assert!(repos.connection.insert_if_ports_free(&connection(&s)).await.unwrap());
    assert!(!repos.connection.insert_if_ports_free(&connection(&s)).await.unwrap());

    let stored = repos.connection.list(Some(s.diagram.id)).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].cable_label.as_deref(), Some("A1"));
}

#[tokio::test]
async fn deleting_a_device_cascades_to_ports_placements_and_connections() {
    let (repos, _pool, _dir) = open().await;
    let s = scene(&repos).await;
    repos.connection.insert_if_ports_free(&connection(&s)).await.unwrap();

    assert!(repos.device.delete(s.source_device.id).await.unwrap());

    assert!(repos.port.get(s.out_port.id).await.unwrap().is_none());
    assert!(repos.diagram_device.get(s.source.id).await.unwrap().is_none());
    assert!(repos.connection.list(Some(s.diagram.id)).await.unwrap().is_empty());
    assert!(repos.diagram_device.get(s.target.id).await.unwrap().is_some());
}

#[tokio::test]
async fn deleting_a_diagram_removes_everything_on_it() {
    let (repos, _pool, _dir) = open().await;
    let s = scene(&repos).await;
    repos.connection.insert_if_ports_free(&connection(&s)).await.unwrap();

    assert!(repos.diagram.delete(s.diagram.id).await.unwrap());
    assert!(!repos.diagram.delete(s.diagram.id).await.unwrap());

    assert!(repos.diagram_device.list(Some(s.diagram.id)).await.unwrap().is_empty());
    assert!(repos.connection.list(None).await.unwrap().is_empty());
    assert_eq!(repos.port.list(None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_stored_connector_loads_as_unrecognized() {
    let (repos, pool, _dir) = open().await;
    let d = device("Legacy", 0);
    repos.device.save(&d).await.unwrap();
    let p = port(&d, "SDI Out", Direction::Output);
    repos.port.save(&p).await.unwrap();

    sqlx::query("UPDATE device_ios SET connector_type = 'SDI' WHERE id = ?")
        .bind(p.id.to_string())
        .execute(&pool)
        .await
        .unwrap();

    let loaded = repos.port.get(p.id).await.unwrap().unwrap();
    assert_eq!(loaded.connector_type, ConnectorType::Unrecognized("SDI".into()));
    assert!(!loaded.connector_type.is_recognized());
}

#[tokio::test]
async fn placement_for_missing_device_is_a_constraint_violation() {
    let (repos, _pool, _dir) = open().await;
    let diagram = Diagram::new(DiagramName::new("Empty").unwrap(), Utc::now());
    repos.diagram.save(&diagram).await.unwrap();

    let orphan = DiagramDevice::new(
        diagram.id,
        patchbay_domain::DeviceId::new(),
        0.0,
        0.0,
        Utc::now(),
    );
    let err = repos.diagram_device.save(&orphan).await.unwrap_err();
    assert!(matches!(err, super::ports::RepoError::ConstraintViolation(_)));
}

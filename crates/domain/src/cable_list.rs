//! Cable list export
//!
//! Flattens a diagram's connections into one row per physical cable and
//! renders them as CSV for installers.

use crate::entities::{Connection, Device, DeviceIo, Diagram};
use crate::wiring::cable_type_from_notes;

const HEADER: &str = "Cable #,Cable Label,From Device,From Port,To Device,To Port,Cable Type Needed,Cable Length,Notes";

const UNKNOWN: &str = "Unknown";

/// Catalog records resolved for one end of a connection
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointRecords<'a> {
    pub device: Option<&'a Device>,
    pub port: Option<&'a DeviceIo>,
}

impl EndpointRecords<'_> {
    fn device_text(&self) -> String {
        self.device
            .map(Device::display_name)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    fn port_text(&self) -> String {
        self.port
            .map(DeviceIo::describe)
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// One line of the cable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CableListRow {
    /// 1-based position in the diagram's connection order
    pub index: usize,
    pub label: String,
    pub from_device: String,
    pub from_port: String,
    pub to_device: String,
    pub to_port: String,
    pub cable_type: String,
    pub length: String,
    pub notes: String,
}

impl CableListRow {
    pub fn new(
        index: usize,
        connection: &Connection,
        from: EndpointRecords<'_>,
        to: EndpointRecords<'_>,
    ) -> Self {
        Self {
            index,
            label: connection
                .cable_label
                .clone()
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| format!("Cable {index}")),
            from_device: from.device_text(),
            from_port: from.port_text(),
            to_device: to.device_text(),
            to_port: to.port_text(),
            cable_type: cable_type_from_notes(connection.notes.as_deref()),
            length: connection
                .cable_length
                .clone()
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| "TBD".to_string()),
            notes: connection.notes.clone().unwrap_or_default(),
        }
    }
}

/// Render rows as CSV, header first, one row per line.
pub fn render_csv(rows: &[CableListRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(HEADER.to_string());
    for row in rows {
        let quoted = [
            &row.label,
            &row.from_device,
            &row.from_port,
            &row.to_device,
            &row.to_port,
            &row.cable_type,
            &row.length,
            &row.notes,
        ]
        .map(|field| quote(field));
        lines.push(format!("{},{}", row.index, quoted.join(",")));
    }
    lines.join("\n")
}

/// `"<diagram name>_cable_list.csv"`, or `diagram_cable_list.csv` without one
pub fn cable_list_file_name(diagram: Option<&Diagram>) -> String {
    let stem = diagram.map(|d| d.name.as_str()).unwrap_or("diagram");
    format!("{stem}_cable_list.csv")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::NewConnection;
    use crate::types::{ConnectorType, DeviceCategory, Direction, Gender};
    use crate::value_objects::{DeviceLabel, DiagramName};
    use crate::{DiagramDeviceId, DiagramId};
    use chrono::Utc;

    fn device(brand: &str, model: &str) -> Device {
        Device::new(
            DeviceLabel::new(brand).unwrap(),
            DeviceLabel::new(model).unwrap(),
            DeviceCategory::Other,
            Utc::now(),
        )
    }

    fn port(owner: &Device, label: &str, gender: Gender, direction: Direction) -> DeviceIo {
        DeviceIo::new(owner.id, DeviceLabel::new(label).unwrap(), ConnectorType::Hdmi, Utc::now())
            .with_gender(gender)
            .with_direction(direction)
    }

    fn connection(from: &DeviceIo, to: &DeviceIo, notes: Option<&str>) -> Connection {
        Connection::from_new(
            NewConnection {
                diagram_id: DiagramId::new(),
                source_diagram_device_id: DiagramDeviceId::new(),
                source_io_id: from.id,
                target_diagram_device_id: DiagramDeviceId::new(),
                target_io_id: to.id,
                cable_label: None,
                cable_length: None,
                notes: notes.map(str::to_string),
            },
            Utc::now(),
        )
    }

    #[test]
    fn renders_header_and_quoted_row() {
        let player = device("Apple", "TV 4K");
        let tv = device("Sony", "Bravia");
        let out = port(&player, "HDMI Out", Gender::Female, Direction::Output);
        let inp = port(&tv, "HDMI 1", Gender::Female, Direction::Input);
        let conn = connection(&out, &inp, Some("Cable needed: HDMI Male-Male Cable"));

        let row = CableListRow::new(
            1,
            &conn,
            EndpointRecords { device: Some(&player), port: Some(&out) },
            EndpointRecords { device: Some(&tv), port: Some(&inp) },
        );
        let csv = render_csv(&[row]);
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], HEADER);
        assert_eq!(
            lines[1],
            "1,\"Cable 1\",\"Apple TV 4K\",\"HDMI Out (HDMI Female)\",\"Sony Bravia\",\
             \"HDMI 1 (HDMI Female)\",\"HDMI Male-Male Cable\",\"TBD\",\
             \"Cable needed: HDMI Male-Male Cable\""
        );
    }

    #[test]
    fn missing_records_render_unknown() {
        let player = device("Apple", "TV 4K");
        let out = port(&player, "HDMI Out", Gender::Male, Direction::Output);
        let conn = connection(&out, &out, None);
        let row = CableListRow::new(
            3,
            &conn,
            EndpointRecords::default(),
            EndpointRecords::default(),
        );
        assert_eq!(row.from_device, "Unknown");
        assert_eq!(row.to_port, "Unknown");
        assert_eq!(row.cable_type, "Standard Cable");
        assert_eq!(row.label, "Cable 3");
        assert_eq!(row.notes, "");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let player = device("Acme", "12\" Sub");
        let out = port(&player, "Out", Gender::Male, Direction::Output);
        let mut conn = connection(&out, &out, None);
        conn.cable_label = Some("Run \"A\"".into());
        conn.cable_length = Some("25ft".into());
        let row = CableListRow::new(
            1,
            &conn,
            EndpointRecords { device: Some(&player), port: Some(&out) },
            EndpointRecords::default(),
        );
        let csv = render_csv(&[row]);
        assert!(csv.contains("\"Run \"\"A\"\"\""));
        assert!(csv.contains("\"Acme 12\"\" Sub\""));
        assert!(csv.contains("\"25ft\""));
    }

    #[test]
    fn empty_list_is_just_the_header() {
        assert_eq!(render_csv(&[]), HEADER);
    }

    #[test]
    fn file_name_uses_diagram_name() {
        let diagram = Diagram::new(DiagramName::new("Smith Residence").unwrap(), Utc::now());
        assert_eq!(
            cable_list_file_name(Some(&diagram)),
            "Smith Residence_cable_list.csv"
        );
        assert_eq!(cable_list_file_name(None), "diagram_cable_list.csv");
    }
}

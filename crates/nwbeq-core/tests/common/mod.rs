//! Fixture graphs for comparator integration tests
//!
//! Every builder returns a fresh graph so tests never share state.

use chrono::{DateTime, Duration, FixedOffset};
use nwbeq_core::model::{Container, FieldValue, InMemoryData, TypeRegistry};

/// Registry declaring the field sets of every fixture type
#[allow(dead_code)]
pub fn registry() -> TypeRegistry {
    TypeRegistry::new()
        .with_type(
            "TimeSeries",
            &[
                "name",
                "data",
                "unit",
                "resolution",
                "conversion",
                "timestamps",
                "starting_time",
                "rate",
                "comments",
                "description",
            ],
        )
        .with_type("Device", &["name"])
        .with_type("ElectrodeGroup", &["name", "description", "location", "device"])
        .with_type(
            "ElectricalSeries",
            &["name", "data", "electrodes", "timestamps", "resolution", "conversion"],
        )
        .with_type("OpticalChannel", &["name", "description", "emission_lambda"])
        .with_type(
            "ImagingPlane",
            &[
                "name",
                "optical_channel",
                "description",
                "device",
                "excitation_lambda",
                "imaging_rate",
                "indicator",
                "location",
                "manifold",
                "unit",
                "reference_frame",
            ],
        )
        .with_type(
            "TwoPhotonSeries",
            &[
                "name",
                "data",
                "unit",
                "imaging_plane",
                "field_of_view",
                "pmt_gain",
                "scan_line_rate",
                "rate",
                "starting_time",
                "format",
            ],
        )
        .with_type("Clustering", &["name", "description", "num", "peak_over_rms", "times"])
        .with_type("ProcessingModule", &["name", "description", "data_interfaces"])
        .with_type("Units", &["name", "description", "columns"])
        .with_type(
            "NWBFile",
            &[
                "name",
                "session_description",
                "identifier",
                "session_start_time",
                "file_create_date",
                "experimenter",
                "institution",
                "devices",
                "electrode_groups",
                "acquisition",
                "processing",
            ],
        )
}

#[allow(dead_code)]
pub fn session_start() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2018-12-02T12:57:27.371444-08:00").unwrap()
}

#[allow(dead_code)]
pub fn time_series(name: &str) -> Container {
    Container::new("TimeSeries", name)
        .with_field("data", (0..10i64).map(|i| i as f64 * 10.0).collect::<Vec<f64>>())
        .with_field("unit", "SIunit")
        .with_field("resolution", 0.1)
        .with_field("conversion", 1.0)
        .with_field("timestamps", (0..10i64).map(|i| i as f64 * 0.1).collect::<Vec<f64>>())
        .with_field("comments", "no comment")
        .with_field("description", "a time series")
}

#[allow(dead_code)]
pub fn device(name: &str) -> Container {
    Container::new("Device", name)
}

#[allow(dead_code)]
pub fn electrode_group(name: &str) -> Container {
    Container::new("ElectrodeGroup", name)
        .with_field("description", "a test ElectrodeGroup")
        .with_field("location", "a nonexistent place")
        .with_field("device", device("dev1"))
}

#[allow(dead_code)]
pub fn electrical_series(name: &str) -> Container {
    let data: Vec<FieldValue> = (0..10i64)
        .map(|i| vec![i as f64, (i + 10) as f64].into())
        .collect();
    Container::new("ElectricalSeries", name)
        .with_field("data", data)
        .with_field(
            "electrodes",
            FieldValue::data(InMemoryData::new("DynamicTableRegion", vec![0i64, 2])),
        )
        .with_field("timestamps", (0..10i64).map(|i| i as f64 * 0.1).collect::<Vec<f64>>())
        .with_field("resolution", -1.0)
        .with_field("conversion", 1.0)
}

#[allow(dead_code)]
pub fn optical_channel(name: &str) -> Container {
    Container::new("OpticalChannel", name)
        .with_field("description", "a fake OpticalChannel")
        .with_field("emission_lambda", 500.0)
}

#[allow(dead_code)]
pub fn imaging_plane(name: &str) -> Container {
    Container::new("ImagingPlane", name)
        .with_field("optical_channel", vec![optical_channel("optchan1")])
        .with_field("description", "a fake ImagingPlane")
        .with_field("device", device("dev1"))
        .with_field("excitation_lambda", 600.0)
        .with_field("imaging_rate", 300.0)
        .with_field("indicator", "GFP")
        .with_field("location", "somewhere in the brain")
        .with_field(
            "manifold",
            FieldValue::data(InMemoryData::new(
                "VectorData",
                vec![
                    FieldValue::from(vec![1.0, 2.0, 3.0]),
                    FieldValue::from(vec![4.0, 5.0, 6.0]),
                ],
            )),
        )
        .with_field("unit", "meters")
        .with_field("reference_frame", "a frame of reference")
}

#[allow(dead_code)]
pub fn two_photon_series(name: &str) -> Container {
    Container::new("TwoPhotonSeries", name)
        .with_field("data", vec![vec![vec![1.0, 0.0], vec![0.0, 1.0]]])
        .with_field("unit", "image_unit")
        .with_field("imaging_plane", imaging_plane("imgpln1"))
        .with_field("field_of_view", vec![2.0, 2.0, 5.0])
        .with_field("pmt_gain", 1.7)
        .with_field("scan_line_rate", 3.4)
        .with_field("rate", 1.0)
        .with_field("starting_time", 0.0)
        .with_field("format", "raw")
}

#[allow(dead_code)]
pub fn clustering(name: &str) -> Container {
    Container::new("Clustering", name)
        .with_field("description", "A fake Clustering interface")
        .with_field("num", vec![0i64, 1, 2, 0, 1, 2])
        .with_field("peak_over_rms", vec![100.0, 101.0, 102.0])
        .with_field("times", vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0])
}

#[allow(dead_code)]
pub fn processing_module(name: &str) -> Container {
    Container::new("ProcessingModule", name)
        .with_field("description", "a test module")
        .with_field(
            "data_interfaces",
            FieldValue::mapping([("cluster_name", clustering("cluster_name"))]),
        )
}

#[allow(dead_code)]
pub fn units(name: &str) -> Container {
    Container::new("Units", name)
        .with_field("description", "Autogenerated by NWBFile")
        .with_field(
            "columns",
            vec![
                FieldValue::data(InMemoryData::new("ElementIdentifiers", vec![0i64, 1])),
                FieldValue::data(InMemoryData::new("VectorData", vec![0.0, 1.0, 2.0, 3.0, 4.0])),
                FieldValue::data(InMemoryData::new("VectorIndex", vec![3i64, 5])),
            ],
        )
}

#[allow(dead_code)]
pub fn nwb_file(name: &str) -> Container {
    let start = session_start();
    Container::new("NWBFile", name)
        .with_field("session_description", "a test NWB File")
        .with_field("identifier", "TEST123")
        .with_field("session_start_time", start)
        .with_field("file_create_date", vec![start + Duration::days(1)])
        .with_field("experimenter", "A test experimenter")
        .with_field("institution", "a test institution")
        .with_field("devices", FieldValue::mapping([("dev1", device("dev1"))]))
        .with_field(
            "electrode_groups",
            FieldValue::mapping([("elec1", electrode_group("elec1"))]),
        )
        .with_field(
            "acquisition",
            FieldValue::mapping([("test_timeseries", time_series("test_timeseries"))]),
        )
        .with_field(
            "processing",
            FieldValue::mapping([("test_module", processing_module("test_module"))]),
        )
}

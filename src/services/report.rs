use crate::domain::models::{FrameworkReport, PostureReport};
use chrono::Utc;
use uuid::Uuid;

/// Wrap loaded framework reports into a submission-ready posture report with
/// a fresh report identity. The account identity comes from local settings;
/// the transport that ships the payload lives outside this crate.
pub fn assemble(
    reports: Vec<FrameworkReport>,
    customer_guid: &str,
    cluster_name: &str,
) -> PostureReport {
    PostureReport {
        framework_reports: reports,
        report_id: Uuid::new_v4().to_string(),
        generation_time: Utc::now(),
        customer_guid: customer_guid.to_string(),
        cluster_name: cluster_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str) -> FrameworkReport {
        FrameworkReport {
            name: name.to_string(),
            control_reports: vec![],
            score: 0.0,
        }
    }

    #[test]
    fn assemble_stamps_identity_and_keeps_order() {
        let posture = assemble(vec![report("nsa"), report("mitre")], "guid-1", "prod");
        assert_eq!(posture.framework_reports[0].name, "nsa");
        assert_eq!(posture.framework_reports[1].name, "mitre");
        assert_eq!(posture.customer_guid, "guid-1");
        assert_eq!(posture.cluster_name, "prod");
        assert!(!posture.report_id.is_empty());
    }

    #[test]
    fn every_assembly_gets_a_fresh_report_id() {
        let first = assemble(vec![], "", "default");
        let second = assemble(vec![], "", "default");
        assert_ne!(first.report_id, second.report_id);
    }

    #[test]
    fn payload_serializes_with_wire_field_names() {
        let posture = assemble(vec![report("nsa")], "guid-1", "prod");
        let value = serde_json::to_value(&posture).expect("serializable");
        assert!(value.get("frameworkReports").is_some());
        assert!(value.get("reportID").is_some());
        assert!(value.get("generationTime").is_some());
        assert!(value.get("customerGUID").is_some());
        assert!(value.get("clusterName").is_some());
    }
}
